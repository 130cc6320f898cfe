//! JSON export of a canvas document.

use crate::canvas::CanvasDocument;
use crate::shapes::{Arrow, Shape, ShapeKind};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format tag written to every export.
pub const FORMAT_VERSION: &str = "arc-brainstorm-v1";

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported export version: {0}")]
    UnsupportedVersion(String),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Top-level export artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: String,
    /// ISO-8601 generation time.
    pub timestamp: String,
    pub elements: Vec<ExportElement>,
    pub arrows: Vec<ExportArrow>,
}

/// Exported shape with pixel-rounded geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArrow {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: String,
    pub color: String,
}

/// Round to the nearest integer, halves away from zero.
fn round_coord(value: f64) -> i64 {
    value.round() as i64
}

impl From<&Shape> for ExportElement {
    fn from(shape: &Shape) -> Self {
        let bounds = shape.bounds();
        Self {
            id: shape.id().to_string(),
            kind: shape.kind(),
            x: round_coord(bounds.x0),
            y: round_coord(bounds.y0),
            width: round_coord(bounds.width()),
            height: round_coord(bounds.height()),
            label: shape.label().to_string(),
            color: shape.color().to_string(),
        }
    }
}

impl From<&Arrow> for ExportArrow {
    fn from(arrow: &Arrow) -> Self {
        Self {
            id: arrow.id().to_string(),
            from: arrow.from.to_string(),
            to: arrow.to.to_string(),
            label: arrow.label.clone(),
            color: arrow.color.clone(),
        }
    }
}

impl ExportDocument {
    /// Snapshot a document, stamped with the given time.
    pub fn from_document(document: &CanvasDocument, at: DateTime<Utc>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            timestamp: format_timestamp(at),
            elements: document.shapes().iter().map(ExportElement::from).collect(),
            arrows: document.arrows().iter().map(ExportArrow::from).collect(),
        }
    }

    /// Serialize to JSON (two-space indentation when `pretty`).
    pub fn to_json(&self, pretty: bool) -> ExportResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse an export artifact.
    pub fn from_json(json: &str) -> ExportResult<Self> {
        let doc: Self = serde_json::from_str(json)?;
        if doc.version != FORMAT_VERSION {
            return Err(ExportError::UnsupportedVersion(doc.version));
        }
        Ok(doc)
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `2026-10-18T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize a document as pretty JSON stamped with the current time.
pub fn export_json(document: &CanvasDocument) -> ExportResult<String> {
    export_json_at(document, Utc::now(), true)
}

/// Serialize a document with an explicit timestamp.
pub fn export_json_at(document: &CanvasDocument, at: DateTime<Utc>, pretty: bool) -> ExportResult<String> {
    let json = ExportDocument::from_document(document, at).to_json(pretty)?;
    log::debug!(
        "exported {} element(s), {} arrow(s)",
        document.len(),
        document.arrow_count()
    );
    Ok(json)
}

/// Download file name for an export made at `at`.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("arc-brainstorm-{}.json", at.timestamp_millis())
}
