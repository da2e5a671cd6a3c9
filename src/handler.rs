use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{tracing, Error, LambdaEvent};

use crate::{context::Context, model::ImportSummary, service};


/// Processes the s3 object-created event
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<ImportSummary, Error> {
    tracing::info!(
        "processing s3 records record_count={}",
        event.payload.records.len()
    );

    let mut summary = ImportSummary::default();

    for record in event.payload.records {
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .unwrap_or_else(|| "".to_string());
        let raw_key = record
            .s3
            .object
            .key
            .clone()
            .unwrap_or_else(|| "".to_string());

        let key = match urlencoding::decode(&raw_key) {
            Ok(decoded) => decoded.to_string(),
            Err(e) => {
                tracing::warn!(error=?e, key=%raw_key, "unable to decode key");
                continue;
            }
        };

        tracing::info!(%bucket, %key, "processing object created record");

        // Double check only csv. The bucket notification is configured to
        // only send csv keys, so anything else is skipped, not failed.
        if !key.to_ascii_lowercase().ends_with(".csv") {
            tracing::info!(%key, "skipping non-csv object");
            continue;
        }

        match service::import::process(&ctx, &bucket, &key).await {
            Ok(()) => summary.processed_files.push(key),
            Err(err) => {
                tracing::error!(error=?err, %bucket, %key, "error processing record");
                summary
                    .errors
                    .push(format!("Error processing {key}: {err:#}"));
            }
        }
    }

    tracing::trace!("processing complete");

    Ok(summary)
}
