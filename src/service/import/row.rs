use async_trait::async_trait;


/// A single decoded csv row: the header names paired with this row's fields,
/// in column order.
///
/// Rows are not validated against any schema. A row shorter than the header
/// carries fewer fields; trailing fields with no header are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    fields: Vec<(String, String)>,
}

impl CsvRow {
    pub(crate) fn from_records(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();

        Self { fields }
    }

    /// The value for `column`, if this row has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Number of fields present in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }
}

/// Consumes decoded rows one at a time.
///
/// The import pipeline has no row-level business logic of its own; wire an
/// implementation here to do something with the data.
#[async_trait]
pub trait RowConsumer: Send + Sync {
    async fn consume(&self, row: CsvRow) -> anyhow::Result<()>;
}

/// [`RowConsumer`] that drops every row.
#[derive(Debug, Default)]
pub struct DiscardRows;

#[async_trait]
impl RowConsumer for DiscardRows {
    async fn consume(&self, _row: CsvRow) -> anyhow::Result<()> {
        Ok(())
    }
}
