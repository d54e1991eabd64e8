use crate::github::EventKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("unsupported event: {0}")]
    UnsupportedEvent(String),

    #[error("decoding webhook failed ({event}): {source}")]
    Decode {
        event: EventKind,
        source: serde_json::Error,
    },
}

pub type MapResult<T> = Result<T, MapError>;
