//! Snowflake parsing error types.

/// Error produced when a string fails to parse as a snowflake id.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Snowflake Error: {} at line {} in {}", message, line, file)]
pub struct SnowflakeError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SnowflakeError {
    /// Create a new SnowflakeError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use botlist_error::SnowflakeError;
    ///
    /// let err = SnowflakeError::new("expected a decimal string");
    /// assert!(err.message.contains("decimal"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
