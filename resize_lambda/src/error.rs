use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

/// Everything that can stop one object from being resized.
///
/// The handler treats every variant the same way: log, then hand the error
/// back to the Lambda runtime, which owns retries and dead-lettering.
#[derive(Debug, Error)]
pub(crate) enum ResizeError {
    #[error("No records found in S3 event")]
    EmptyNotification,

    #[error("No bucket name found in S3 event")]
    MissingBucket,

    #[error("failed to fetch s3://{bucket}/{key}")]
    Fetch {
        bucket: String,
        key: String,
        #[source]
        source: SdkError<GetObjectError>,
    },

    #[error("failed to read body of s3://{bucket}/{key}")]
    ReadBody {
        bucket: String,
        key: String,
        #[source]
        source: ByteStreamError,
    },

    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode JPEG")]
    Encode(#[source] image::ImageError),

    #[error("failed to upload s3://{bucket}/{key}")]
    Upload {
        bucket: String,
        key: String,
        #[source]
        source: SdkError<PutObjectError>,
    },
}
