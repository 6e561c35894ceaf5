pub mod batch;
pub mod classify;
pub mod detect;
pub mod error;
pub mod stream;
pub mod style;
pub mod translate;

pub use detect::detect_identifier_casing;
pub use error::CasingError;
pub use stream::{read_normalized_case_identifier, write_cased_identifier};
pub use translate::{
    normalize_identifier_casing, normalize_identifier_casing_optional, translate,
    translate_optional,
};
