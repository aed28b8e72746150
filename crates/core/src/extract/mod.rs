pub mod metadata;
pub mod recommendation;
pub mod section;

use serde_json::Value;

use crate::domain::analysis::ParsedAnalysis;
use crate::domain::contract::StructuredReport;

/// Input variants observed on the broker-analysis endpoint. The upstream
/// service has shipped both shapes from the same path, with no version tag.
#[derive(Debug, Clone)]
pub enum ReportPayload {
    /// First generation: one markdown-ish text blob.
    Markdown(String),
    /// Second generation: pre-separated scalar fields.
    Structured(StructuredReport),
    /// Nothing usable: null, absent, or an unrecognized shape.
    Missing,
}

/// Keys that identify the structured shape during classification.
const STRUCTURED_KEYS: [&str; 7] = [
    "technical_analysis",
    "fundamental_analysis",
    "sentiment_analysis",
    "final_recommendation",
    "justification",
    "risks_sec_files",
    "sec_metadata",
];

/// Decide the payload format by structural inspection: a JSON string is the
/// raw-text report; an object carrying any structured key is a
/// `StructuredReport`; everything else is treated as absent.
pub fn classify(payload: Option<&Value>) -> ReportPayload {
    match payload {
        None | Some(Value::Null) => ReportPayload::Missing,
        Some(Value::String(text)) => ReportPayload::Markdown(text.clone()),
        Some(Value::Object(map)) => {
            if !STRUCTURED_KEYS.iter().any(|key| map.contains_key(*key)) {
                tracing::debug!("object payload has no structured report keys");
                return ReportPayload::Missing;
            }
            match serde_json::from_value::<StructuredReport>(Value::Object(map.clone())) {
                Ok(report) => ReportPayload::Structured(report),
                Err(err) => {
                    tracing::debug!(error = %err, "structured report failed to decode");
                    ReportPayload::Missing
                }
            }
        }
        Some(other) => {
            tracing::debug!(payload = %other, "payload is neither text nor a report object");
            ReportPayload::Missing
        }
    }
}

/// Parse any payload into the total display record. Never fails: absent or
/// unmatchable input degrades to the empty-default record.
pub fn parse_report(payload: Option<&Value>) -> ParsedAnalysis {
    match classify(payload) {
        ReportPayload::Missing => {
            tracing::debug!("no usable broker-analysis payload; returning empty record");
            ParsedAnalysis::default()
        }
        ReportPayload::Structured(report) => report.into_analysis(),
        ReportPayload::Markdown(text) => parse_markdown(&text),
    }
}

/// Parse the raw-text (first-generation) report format.
pub fn parse_markdown(text: &str) -> ParsedAnalysis {
    let mut out = ParsedAnalysis::default();
    if text.trim().is_empty() {
        return out;
    }

    tracing::debug!(len = text.len(), "parsing raw broker-analysis text");

    out.technical = section::section_statements(text, section::TECHNICAL);
    out.fundamental = section::section_statements(text, section::FUNDAMENTAL);
    out.sentiment = section::section_statements(text, section::SENTIMENT);

    if let Some(resolution) = recommendation::resolve(text) {
        out.recommendation = resolution.label;
        out.justification = resolution.justification;
    }

    out.meta = metadata::resolve(text);
    out
}
