use identcase::{CasingError, batch::translate_pairs, style::Style};
use serde_json::{Map, Value};

/// Translates the keys of a json object into the `target` style, keeping key order and values.
///
/// Only the top-level object is touched unless `deep` is set, in which case nested objects
/// (including objects inside arrays) are translated too. Anything that isn't an object is
/// returned as is. When two keys translate to the same key the later value wins.
pub fn translate_json_keys(value: Value, target: Style, deep: bool) -> Result<Value, CasingError> {
    match value {
        Value::Object(object) => {
            let mut translated = Map::with_capacity(object.len());
            for (key, value) in translate_pairs(object, target)? {
                let value = match deep {
                    true => translate_json_keys(value, target, deep)?,
                    false => value,
                };
                if translated.contains_key(&key) {
                    tracing::warn!(%key, %target, "keys collide after translation; keeping the last value");
                }
                translated.insert(key, value);
            }
            Ok(Value::Object(translated))
        }
        Value::Array(items) if deep => items
            .into_iter()
            .map(|item| translate_json_keys(item, target, deep))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Ok(other),
    }
}
