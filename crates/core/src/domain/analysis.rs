use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized broker-analysis record handed to the display layer.
///
/// The shape is total: every field exists on every parse, possibly empty.
/// `Default` is the canonical empty record, returned verbatim for absent or
/// unusable payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedAnalysis {
    pub technical: Vec<String>,
    pub fundamental: Vec<String>,
    pub sentiment: Vec<String>,

    /// Free-form label. Observed values cluster around BUY/SELL/HOLD but the
    /// upstream generator may emit novel labels; empty when unresolved.
    pub recommendation: String,
    pub justification: String,

    pub meta: FilingMeta,

    /// Risk summary tied to the SEC filings (structured-input variant only).
    pub risks: Option<String>,
}

impl ParsedAnalysis {
    /// Badge bucket for the recommendation label.
    pub fn stance(&self) -> Stance {
        Stance::from_label(&self.recommendation)
    }
}

/// Filing-reference fields recovered from the report's metadata block.
/// Fields resolve independently; an empty string means the label was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilingMeta {
    pub form: String,
    pub report_date: String,
    pub accession_number: String,
    pub cik: String,
}

impl FilingMeta {
    pub fn is_empty(&self) -> bool {
        self.form.is_empty()
            && self.report_date.is_empty()
            && self.accession_number.is_empty()
            && self.cik.is_empty()
    }

    /// `report_date` as a date, when it conforms to `YYYY-MM-DD`.
    pub fn report_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.report_date.trim(), "%Y-%m-%d").ok()
    }
}

/// Display bucket for a free-form recommendation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Buy,
    Sell,
    Hold,
    Other,
}

impl Stance {
    /// Substring match, case-insensitive; BUY wins over SELL wins over HOLD
    /// when a label somehow contains more than one.
    pub fn from_label(label: &str) -> Self {
        let upper = label.to_uppercase();
        if upper.contains("BUY") {
            Stance::Buy
        } else if upper.contains("SELL") {
            Stance::Sell
        } else if upper.contains("HOLD") {
            Stance::Hold
        } else {
            Stance::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Buy => "buy",
            Stance::Sell => "sell",
            Stance::Hold => "hold",
            Stance::Other => "other",
        }
    }
}
