use std::io;

use thiserror::Error;

use crate::style::Style;

#[derive(Debug, Error)]
pub enum CasingError {
    #[error("the identifier is empty; identifiers must have at least one character")]
    EmptyIdentifier,

    #[error("`{0}` casing is not supported as a target style")]
    UnsupportedTargetStyle(Style),

    #[error("unknown casing style `{0}`")]
    UnknownStyle(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
