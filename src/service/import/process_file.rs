use anyhow::Context as _;
use lambda_runtime::tracing;

use crate::context::Context;
use crate::service::import::CsvRow;


/// Imports a single csv object: download it, decode it, feed every row to
/// the consumer.
#[tracing::instrument(skip(ctx), fields(key = %key, bucket = %bucket))]
pub async fn process(ctx: &Context, bucket: &str, key: &str) -> anyhow::Result<()> {
    tracing::info!("downloading csv object");

    let bytes = ctx.store.get(bucket, key).await?;
    tracing::trace!(byte_count = bytes.len(), "object retrieved");

    let rows = decode(&bytes)?;
    tracing::info!(row_count = rows.len(), "decoded csv rows");

    for row in rows {
        ctx.rows.consume(row).await?;
    }

    tracing::trace!("complete");

    Ok(())
}

/// Decodes the whole object into memory before any row is consumed.
fn decode(bytes: &[u8]) -> anyhow::Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .context("could not read csv header row")?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("could not decode csv record")?;
        rows.push(CsvRow::from_records(&headers, &record));
    }

    Ok(rows)
}
