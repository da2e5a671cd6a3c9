use async_trait::async_trait;
use lambda_runtime::tracing;

mod get_object_bytes;

/// Serves object content by bucket and key.
///
/// The pipeline only ever needs whole-object reads, so this is the single
/// seam between the handler and the real object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieves the full content of `key` in `bucket`.
    async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>>;
}

/// S3-backed [`ObjectStore`].
#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ObjectStore for S3 {
    #[tracing::instrument(skip(self))]
    async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        get_object_bytes::get(&self.inner, bucket, key).await
    }
}
