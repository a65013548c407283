use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::tracing;

use crate::error::ResizeError;

/// The one object an invocation works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceObject {
    pub bucket: String,
    pub key: String,
}

impl SourceObject {
    /// Picks the first record of the event.
    ///
    /// Only one object is processed per invocation even when S3 batches
    /// several records together; the rest are dropped. The key is not
    /// validated, an absent key becomes the empty string and fails later
    /// at fetch time.
    pub(crate) fn from_event(event: &S3Event) -> Result<Self, ResizeError> {
        let record = event
            .records
            .first()
            .ok_or(ResizeError::EmptyNotification)?;
        if event.records.len() > 1 {
            tracing::debug!(
                ignored = event.records.len() - 1,
                "Processing first record only"
            );
        }
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or(ResizeError::MissingBucket)?;
        let key = decode_key(record.s3.object.key.as_deref().unwrap_or_default());
        Ok(Self { bucket, key })
    }
}

/// S3 event keys arrive form-urlencoded.
fn decode_key(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(key) => key.into_owned(),
        Err(_) => plus_decoded,
    }
}
