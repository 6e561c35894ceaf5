use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

/// Decoration wrapped around identifiers to check that it survives translation verbatim.
pub const DECORATIONS: [&str; 9] = [" ", "-", "__", "@@", "¿", "~", "—", "「—", "๚"];

/// One identifier rendered in every casing style.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    /// The identifier in the canonical (pascal) style.
    pub canonical: String,

    /// Style name -> the identifier rendered in that style.
    pub renderings: BTreeMap<String, String>,

    /// Inputs of indeterminate style that still normalize to `canonical`.
    #[serde(default)]
    pub normalizes: Vec<String>,
}

impl Fixture {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("failed to read fixture {:?}: {}", path, err));
        serde_json::from_str(&json)
            .unwrap_or_else(|err| panic!("invalid fixture {:?}: {}", path, err))
    }
}

/// `identifier` wrapped in `decoration` on both sides.
pub fn decorate(decoration: &str, identifier: &str) -> String {
    format!("{}{}{}", decoration, identifier, decoration)
}
