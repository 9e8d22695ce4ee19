use thiserror::Error;

/// Unified error type for next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a source error for a tag or commit-log query that could not run
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        NextVersionError::SourceUnavailable(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NextVersionError::Version(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        NextVersionError::Output(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NextVersionError::config("bad preset");
        assert_eq!(err.to_string(), "Configuration error: bad preset");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NextVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let err: NextVersionError = git2::Error::from_str("repository not found").into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("repository not found"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (
                NextVersionError::source_unavailable("x"),
                "Source unavailable",
            ),
            (NextVersionError::config("x"), "Configuration error"),
            (NextVersionError::version("x"), "Version error"),
            (NextVersionError::output("x"), "Output error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with 'quotes'",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = NextVersionError::version(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
