use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A medical record entry: visit summary, lab result, prescription, ...
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub title: String,
    pub record_type: String,
    pub date: Date,
    pub provider: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

/// A document the patient uploaded (scan, report, prescription photo).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UploadedDocument {
    pub id: Uuid,
    pub filename: String,
    pub content_type: Option<String>,
    pub size: u64,
    pub uploaded_at: jiff::Timestamp,
}

/// The `limit` most recently uploaded documents, newest first.
pub fn most_recent(documents: &[UploadedDocument], limit: usize) -> Vec<&UploadedDocument> {
    let mut sorted: Vec<&UploadedDocument> = documents.iter().collect();
    sorted.sort_by_key(|d| std::cmp::Reverse(d.uploaded_at));
    sorted.truncate(limit);
    sorted
}
