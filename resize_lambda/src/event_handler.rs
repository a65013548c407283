use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::config::{ResizeConfig, OUTPUT_CONTENT_TYPE};
use crate::error::ResizeError;
use crate::notification::SourceObject;
use crate::thumbnail;

/// Response returned to the Lambda runtime after a successful upload.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ResizeOutcome {
    pub status: &'static str,
    pub file: String,
}

impl ResizeOutcome {
    fn success(file: String) -> Self {
        Self {
            status: "success",
            file,
        }
    }
}

async fn fetch_object(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, ResizeError> {
    let response = s3_client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|source| ResizeError::Fetch {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        })?;
    tracing::debug!(
        content_type = response.content_type().unwrap_or("unknown"),
        "Fetched {}/{}",
        bucket,
        key
    );
    let body = response
        .body
        .collect()
        .await
        .map_err(|source| ResizeError::ReadBody {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        })?;
    Ok(body.into_bytes().to_vec())
}

async fn upload_object(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<(), ResizeError> {
    s3_client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(ByteStream::from(bytes))
        .send()
        .await
        .map_err(|source| ResizeError::Upload {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        })?;
    Ok(())
}

/// Fetches one object, shrinks it and writes the JPEG to the output bucket.
/// Returns the destination key. Nothing is written unless every earlier
/// step succeeded.
pub(crate) async fn resize_object(
    s3_client: &S3Client,
    config: &ResizeConfig,
    source: &SourceObject,
) -> Result<String, ResizeError> {
    let data = fetch_object(s3_client, &source.bucket, &source.key).await?;
    tracing::debug!("Read {} bytes from {}/{}", data.len(), source.bucket, source.key);

    let rendered = thumbnail::render(&data, config.max_dimension, config.jpeg_quality)?;
    let output_key = thumbnail::output_key(&source.key);
    tracing::debug!(
        width = rendered.width,
        height = rendered.height,
        "Uploading {}/{}",
        config.output_bucket,
        output_key
    );

    upload_object(
        s3_client,
        &config.output_bucket,
        &output_key,
        rendered.bytes,
        OUTPUT_CONTENT_TYPE,
    )
    .await?;
    Ok(output_key)
}

async fn process_s3_event(
    s3_client: &S3Client,
    config: &ResizeConfig,
    event: &S3Event,
) -> Result<String, ResizeError> {
    let source = SourceObject::from_event(event)?;
    resize_object(s3_client, config, &source).await
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    s3_client: &S3Client,
    config: &ResizeConfig,
) -> Result<ResizeOutcome, Error> {
    let payload = event.payload;
    match process_s3_event(s3_client, config, &payload).await {
        Ok(output_key) => {
            tracing::info!("Successfully processed and uploaded: {}", output_key);
            Ok(ResizeOutcome::success(output_key))
        }
        Err(err) => {
            tracing::error!("Error: {}", DisplayErrorContext(&err));
            Err(err.into())
        }
    }
}
