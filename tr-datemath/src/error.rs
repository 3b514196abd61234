/// Errors raised while resolving a raw range side into an instant
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The string is not a date in any accepted form
    #[error("invalid date {0:?}")]
    InvalidDate(String),
    /// The caller-supplied format description could not be compiled
    #[error("invalid format description {format:?}: {source}")]
    Format {
        /// The offending description
        format: String,
        /// Why it was rejected
        #[source]
        source: time::error::InvalidFormatDescription,
    },
}
