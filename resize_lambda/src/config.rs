/// Bucket every resized image is written to.
pub(crate) const OUTPUT_BUCKET: &str = "devil-output-bucket";
/// Neither side of an output image exceeds this many pixels.
pub(crate) const MAX_DIMENSION: u32 = 800;
pub(crate) const JPEG_QUALITY: u8 = 75;
pub(crate) const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// Fixed settings shared read-only by every invocation.
///
/// Nothing here is read from the event or the environment; `main` builds
/// the default once at cold start and hands out references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResizeConfig {
    pub output_bucket: String,
    pub max_dimension: u32,
    pub jpeg_quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            output_bucket: OUTPUT_BUCKET.to_string(),
            max_dimension: MAX_DIMENSION,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}
