#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'seconds' must be a non-negative number")]
    InvalidSeconds,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Progress notification failed: {0}")]
    Notification(#[from] rmcp::ServiceError),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<Error> for rmcp::ErrorData {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidSeconds | Error::UnknownTool(_) => {
                rmcp::ErrorData::invalid_params(err.to_string(), None)
            }
            Error::Notification(_) | Error::Parse(_) => {
                rmcp::ErrorData::internal_error(err.to_string(), None)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
