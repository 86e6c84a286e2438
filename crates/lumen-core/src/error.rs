use thiserror::Error;

/// Rejected engine configuration.
///
/// Step functions never fail; only configuration coming from the page can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

impl ConfigError {
    pub(crate) fn out_of_range(field: &'static str, expected: &'static str, value: f64) -> Self {
        Self::OutOfRange {
            field,
            expected,
            value,
        }
    }
}
