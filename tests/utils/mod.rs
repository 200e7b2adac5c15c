use std::io::Write;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tempfile::NamedTempFile;

/// Header and rows for the three-disease catalog used across tests
pub const SAMPLE_CSV: &str = "\
Disease,Fever,Cough,Fatigue,Sneezing,Headache,Nausea
Flu,1,1,1,0,0,0
Cold,0,1,0,1,0,0
Migraine,0,0,0,0,1,1
";

/// Write CSV `content` to a temporary `.csv` file
///
/// The file is removed when the returned handle is dropped.
#[must_use]
pub fn write_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Write a catalog with integer indicator columns to a temporary `.parquet` file
#[must_use]
pub fn write_parquet(diseases: &[&str], symptoms: &[(&str, Vec<i64>)]) -> NamedTempFile {
    let mut fields = vec![Field::new("Disease", DataType::Utf8, false)];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(diseases.to_vec()))];
    for (name, values) in symptoms {
        fields.push(Field::new(*name, DataType::Int64, false));
        columns.push(Arc::new(Int64Array::from(values.clone())));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(Arc::clone(&schema), columns).expect("build batch");

    let file = tempfile::Builder::new()
        .suffix(".parquet")
        .tempfile()
        .expect("create temp parquet");
    let mut writer =
        ArrowWriter::try_new(file.reopen().expect("reopen temp parquet"), schema, None)
            .expect("create parquet writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close parquet writer");
    file
}

/// Matched tokens of a result as plain strings
#[must_use]
pub fn matched(result: &symptom_matcher::MatchResult) -> Vec<&str> {
    result.matched_tokens.iter().map(String::as_str).collect()
}
