//! Errors reported by catalog and orbit generation.

use thiserror::Error;

/// Data and precondition failures. Placement shortfalls are not errors and never appear here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The frequency table has no records, so there is nothing to draw from.
    #[error("frequency table is empty")]
    EmptyTable,

    /// A record carries a negative or non-finite frequency.
    #[error("record {index} has invalid frequency {value}")]
    InvalidFrequency { index: usize, value: f64 },

    /// Every record has zero frequency.
    #[error("frequency table total is {total}, nothing can be drawn")]
    DegenerateTable { total: f64 },

    /// A tunable or call argument is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A system index that is not part of the current catalog.
    #[error("no star system with index {index}")]
    SystemNotFound { index: usize },
}

impl GenerationError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_field() {
        let err = GenerationError::invalid("min_orbit", "must not exceed max_orbit");
        assert_eq!(
            err.to_string(),
            "invalid parameter `min_orbit`: must not exceed max_orbit"
        );
    }
}
