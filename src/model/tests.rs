use super::ImportSummary;

#[test]
fn default_summary_is_empty() {
    let summary = ImportSummary::default();

    assert!(summary.processed_files.is_empty());
    assert!(summary.errors.is_empty());
    assert_eq!(summary.total_records_processed, 0);
}

#[test]
fn serializes_with_camel_case_field_names() {
    let summary = ImportSummary {
        processed_files: vec!["reports/2024-11.csv".to_string()],
        errors: vec!["Error processing broken.csv: could not decode csv record".to_string()],
        total_records_processed: 0,
    };

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["processedFiles"][0], "reports/2024-11.csv");
    assert_eq!(
        json["errors"][0],
        "Error processing broken.csv: could not decode csv record"
    );
    assert_eq!(json["totalRecordsProcessed"], 0);
}

#[test]
fn round_trips_through_json() {
    let summary = ImportSummary {
        processed_files: vec!["a.csv".to_string(), "b.csv".to_string()],
        errors: vec![],
        total_records_processed: 0,
    };

    let json = serde_json::to_string(&summary).unwrap();
    let back: ImportSummary = serde_json::from_str(&json).unwrap();

    assert_eq!(back, summary);
}
