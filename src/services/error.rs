/// Failures the HTTP boundary reports to clients. Provider detail never
/// reaches these messages.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Query parameter required")]
    MissingQuery,
    #[error("Failed to get stream URL")]
    StreamNotFound,
}
