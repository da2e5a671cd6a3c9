use anyhow::Context;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;

/// Gets a given object from the bucket, collected into memory.
#[tracing::instrument(skip(client))]
pub async fn get(client: &s3::Client, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .with_context(|| format!("could not get object {key} from bucket {bucket}"))?;

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect object body")?;

    Ok(body.into_bytes().to_vec())
}
