use std::sync::LazyLock;

use regex::Regex;

use crate::domain::analysis::FilingMeta;

/// Body of the metadata block, bounded by the nearest blank-line run, rule,
/// recommendation marker, or end of text.
static META_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Meta Data SEC Files:\**((?s:.*?))(?:\n{2}|-{2,}|Final Recommendation|$)")
        .unwrap()
});

// Field patterns tolerate interleaved emphasis (`- **Form:** 10K` and
// `- Form: 10K` both resolve) and stop at the first character outside the
// field's class, exactly as both source generations did.
static ACCESSION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Accession Number:\s*\**\s*([A-Za-z0-9]+)").unwrap());
static REPORT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Report Date:\s*\**\s*([0-9-]+)").unwrap());
static FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Form:\s*\**\s*([A-Za-z0-9 ()]+)").unwrap());
static CIK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CIK:\s*\**\s*([0-9]+)").unwrap());

/// Resolve the four filing-reference fields from the full report text.
/// Fields resolve independently; a missing block or missing label leaves the
/// corresponding fields empty. Partial metadata is expected and valid.
pub fn resolve(text: &str) -> FilingMeta {
    let Some(caps) = META_BLOCK.captures(text) else {
        return FilingMeta::default();
    };
    let body = &caps[1];

    FilingMeta {
        form: field(&FORM, body),
        report_date: field(&REPORT_DATE, body),
        accession_number: field(&ACCESSION_NUMBER, body),
        cik: field(&CIK, body),
    }
}

fn field(pattern: &Regex, body: &str) -> String {
    pattern
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_four_fields_from_a_bulleted_block() {
        let text = "5. **Meta Data SEC Files:**\n- **Accession Number:** 0000320193\n- **Report Date:** 2024-01-15\n- **Form:** 10K\n- **CIK:** 320193\n";
        let meta = resolve(text);
        assert_eq!(meta.accession_number, "0000320193");
        assert_eq!(meta.report_date, "2024-01-15");
        assert_eq!(meta.form, "10K");
        assert_eq!(meta.cik, "320193");
    }

    #[test]
    fn resolves_fields_without_emphasis_markup() {
        let text = "Meta Data SEC Files:\nAccession Number: abc123\nForm: 8K\n";
        let meta = resolve(text);
        assert_eq!(meta.accession_number, "abc123");
        assert_eq!(meta.form, "8K");
        assert_eq!(meta.report_date, "");
        assert_eq!(meta.cik, "");
    }

    #[test]
    fn partial_blocks_resolve_independently() {
        let text = "Meta Data SEC Files:\n- Report Date: 2023-10-30\n";
        let meta = resolve(text);
        assert_eq!(meta.report_date, "2023-10-30");
        assert_eq!(meta.form, "");
        assert_eq!(meta.accession_number, "");
        assert_eq!(meta.cik, "");
    }

    #[test]
    fn values_stop_at_their_character_class() {
        // Hyphens are outside the accession class; the leading run is kept.
        let text =
            "Meta Data SEC Files:\n- Accession Number: 0000320193-24-000123\n- Form: 10(K) amended\n";
        let meta = resolve(text);
        assert_eq!(meta.accession_number, "0000320193");
        assert_eq!(meta.form, "10(K) amended");
    }

    #[test]
    fn block_ends_at_a_blank_line_run() {
        let text = "Meta Data SEC Files:\n- Form: 10Q\n\n- CIK: 999999\n";
        let meta = resolve(text);
        assert_eq!(meta.form, "10Q");
        // The CIK label sits outside the block body.
        assert_eq!(meta.cik, "");
    }

    #[test]
    fn missing_block_yields_empty_meta() {
        assert!(resolve("").is_empty());
        assert!(resolve("1. **Technical Analysis:**\n- Flat.").is_empty());
    }
}
