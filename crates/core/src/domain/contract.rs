use crate::domain::analysis::{FilingMeta, ParsedAnalysis};
use serde::{Deserialize, Serialize};

/// Upstream structured broker-analysis payload (second-generation endpoint).
///
/// Every field is defaulted: the generator has added and dropped keys over
/// time without a version tag, and absence is never an error. Unknown keys
/// (e.g. `company_name`) are tolerated and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredReport {
    pub company_name: Option<String>,
    pub technical_analysis: Option<String>,
    pub fundamental_analysis: Option<String>,
    pub sentiment_analysis: Option<String>,
    pub final_recommendation: Option<String>,
    pub justification: Option<String>,
    pub risks_sec_files: Option<String>,
    pub sec_metadata: Vec<SecFiling>,
}

/// One SEC filing reference as the upstream generator emits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecFiling {
    pub file_name: String,
    pub file_date: String,
    pub file_type: String,
}

impl StructuredReport {
    /// Flatten into the display record.
    ///
    /// Scalar analysis fields become single-element lists so consumers always
    /// iterate a sequence. Only the first filing maps into `meta`; additional
    /// filings are dropped (multi-filing display is out of scope here). The
    /// upstream contract carries no CIK, so that field stays empty.
    pub fn into_analysis(self) -> ParsedAnalysis {
        let meta = self
            .sec_metadata
            .into_iter()
            .next()
            .map(|filing| FilingMeta {
                form: filing.file_type,
                report_date: filing.file_date,
                accession_number: filing.file_name,
                cik: String::new(),
            })
            .unwrap_or_default();

        ParsedAnalysis {
            technical: wrap(self.technical_analysis),
            fundamental: wrap(self.fundamental_analysis),
            sentiment: wrap(self.sentiment_analysis),
            recommendation: scalar(self.final_recommendation),
            justification: scalar(self.justification),
            meta,
            risks: self
                .risks_sec_files
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

fn wrap(field: Option<String>) -> Vec<String> {
    match field {
        Some(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

fn scalar(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}
