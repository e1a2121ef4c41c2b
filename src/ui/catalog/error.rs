use thiserror::Error;

use crate::config::{CoercionError, ConfigError, SelectError};

/// A catalog that cannot be rendered as declared.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item '{title}' spans {span} cells, allowed 1..={max}")]
    InvalidSpan {
        title: &'static str,
        span: u16,
        max: u16,
    },

    #[error("item '{title}' has {options} option labels for {domain} values")]
    OptionCountMismatch {
        title: &'static str,
        options: usize,
        domain: usize,
    },
}

/// Why a confirmed edit was not applied.
///
/// None of these are fatal: the prior value stays displayed and the
/// message is shown to the user until dismissed.
#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("option {index} is outside the {len} available")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("could not save setting: {0}")]
    Store(#[from] ConfigError),
}

impl From<SelectError> for EditError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::OutOfRange { index, len } => Self::IndexOutOfRange { index, len },
            SelectError::Store(err) => Self::Store(err),
        }
    }
}
