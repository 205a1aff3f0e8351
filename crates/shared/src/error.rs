use thiserror::Error;

use crate::domain::MediaSource;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("malformed store snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
    #[error("unknown sidebar control '{0}'")]
    UnknownControl(String),
    #[error("producer keyed as '{key}' carries id '{id}'")]
    ProducerKeyMismatch { key: String, id: String },
    #[error("duplicate {media} producer: '{existing}' already present, got '{incoming}'")]
    DuplicateProducer {
        media: MediaSource,
        existing: String,
        incoming: String,
    },
}
