/// Type alias for Result with anyhow::Error as the error type.
/// Keeps error handling uniform between the domain, application and adapter layers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
