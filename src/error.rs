//! Structured error types.
//!
//! The algorithms themselves are total: overflowing embeddings, unmatched
//! isolate terminators and runaway bracket nesting are resolved by policy and
//! never reported. What remains are caller mistakes (parallel arrays that do
//! not line up) and the CLI's configuration and I/O failures.

/// The unified error type returned by all public API functions.
#[derive(Debug, thiserror::Error)]
pub enum BidiError {
    /// Parallel arrays disagree in length, or a line window falls outside
    /// the paragraph.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration JSON failed to parse.
    #[error("failed to parse configuration: {source}{}", hint_suffix(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// Input text could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for BidiError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the configuration schema. Expected fields: direction, options, clean.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        BidiError::ParseError { source: e, hint }
    }
}

/// Fail with [`BidiError::InvalidInput`] unless `actual == expected`.
pub(crate) fn ensure_len(what: &str, expected: usize, actual: usize) -> Result<(), BidiError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BidiError::InvalidInput(format!(
            "{} has {} entries, expected {}",
            what, actual, expected
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len("levels", 3, 3).is_ok());
        let err = ensure_len("levels", 3, 2).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: levels has 2 entries, expected 3");
    }

    #[test]
    fn test_parse_error_hint() {
        let err: BidiError = serde_json::from_str::<serde_json::Value>("{\"a\": 1,")
            .unwrap_err()
            .into();
        let message = err.to_string();
        assert!(message.starts_with("failed to parse configuration"));
        assert!(message.contains("Hint:"));
    }
}
