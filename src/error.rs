use thiserror::Error;

/// Errors raised by the numeric core.
///
/// Every check happens before any parameter is touched, so an `Err` never
/// leaves a layer half-updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NnError {
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("ragged matrix: row {row} has {got} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("label {value} is not a class index below {classes}")]
    InvalidLabel { value: f64, classes: usize },
}

impl NnError {
    pub(crate) fn check_len(context: &'static str, expected: usize, got: usize) -> Result<(), NnError> {
        if expected == got {
            Ok(())
        } else {
            Err(NnError::ShapeMismatch { context, expected, got })
        }
    }
}

/// Errors raised while reading a delimited dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected at most {expected} columns, got {got}")]
    TooManyColumns {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("dataset contains no rows")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_len_accepts_equal_lengths() {
        assert_eq!(NnError::check_len("test", 3, 3), Ok(()));
    }

    #[test]
    fn check_len_reports_both_sizes() {
        let err = NnError::check_len("layer input", 2, 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "shape mismatch in layer input: expected 2, got 5"
        );
    }
}
