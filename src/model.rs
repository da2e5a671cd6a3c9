use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Summary of one import invocation, returned to the invoking runtime.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Keys that were fully imported, in processing order.
    pub processed_files: Vec<String>,
    /// One entry per failed key, each naming the key and the failure cause.
    pub errors: Vec<String>,
    /// Part of the response shape but never incremented by the pipeline.
    pub total_records_processed: u64,
}
