use std::sync::LazyLock;

use regex::Regex;

/// Identifier for a numbered report section: ordinal plus header label.
/// Label matching is case-sensitive; the surrounding `**` emphasis is not
/// required, only tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionId {
    pub ordinal: u32,
    pub label: &'static str,
}

pub const TECHNICAL: SectionId = SectionId {
    ordinal: 1,
    label: "Technical Analysis",
};
pub const FUNDAMENTAL: SectionId = SectionId {
    ordinal: 2,
    label: "Fundamental Analysis",
};
pub const SENTIMENT: SectionId = SectionId {
    ordinal: 3,
    label: "Sentiment Analysis",
};

const KNOWN_SECTIONS: [SectionId; 3] = [TECHNICAL, FUNDAMENTAL, SENTIMENT];

/// Header patterns, one per known section: `1.` + optional `**` + label + `:`.
static SECTION_HEADERS: LazyLock<Vec<(SectionId, Regex)>> = LazyLock::new(|| {
    KNOWN_SECTIONS
        .iter()
        .map(|id| {
            let pattern = format!(
                r"{}\.\s+\*{{0,2}}{}:\*{{0,2}}",
                id.ordinal,
                regex::escape(id.label)
            );
            (*id, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// A section body runs until the earliest of: the next ordinal header, a
/// horizontal rule, or a blank-line run. End of text is the implicit
/// fallback.
static BODY_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d{1,2}\.\s|---|\n{2}").unwrap());

/// Raw body of `id`'s section. Absent headers yield an empty body, never an
/// error.
pub fn section_body<'a>(text: &'a str, id: SectionId) -> &'a str {
    let Some(header) = SECTION_HEADERS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, re)| re)
    else {
        return "";
    };
    let Some(m) = header.find(text) else {
        return "";
    };

    let rest = &text[m.end()..];
    match BODY_BOUNDARY.find(rest) {
        Some(boundary) => &rest[..boundary.start()],
        None => rest,
    }
}

/// Normalize a section body into display statements: strip bullet markers
/// and bold emphasis, trim each line, drop lines that are empty or begin
/// with a stray emphasis marker (artifact of malformed markup). Order is
/// preserved; duplicates are kept.
pub fn statements(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| {
            let line = line.trim();
            let line = line
                .strip_prefix('-')
                .map(str::trim_start)
                .unwrap_or(line);
            line.replace("**", "").trim().to_string()
        })
        .filter(|line| !line.is_empty() && !line.starts_with('*'))
        .collect()
}

/// Segmenter + normalizer in one step.
pub fn section_statements(text: &str, id: SectionId) -> Vec<String> {
    statements(section_body(text, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_body_up_to_next_ordinal_header() {
        let text = "1. **Technical Analysis:**\n- SMA cross is bullish.\n2. **Fundamental Analysis:**\n- P/E is rich.";
        assert_eq!(section_body(text, TECHNICAL), "\n- SMA cross is bullish.");
        assert_eq!(section_body(text, FUNDAMENTAL), "\n- P/E is rich.");
    }

    #[test]
    fn horizontal_rule_bounds_a_section() {
        let text = "1. **Technical Analysis:**\n- One.\n- Two.\n- Three.\n---\nFooter text.";
        assert_eq!(
            section_statements(text, TECHNICAL),
            vec!["One.", "Two.", "Three."]
        );
    }

    #[test]
    fn blank_line_run_bounds_a_section() {
        let text = "3. **Sentiment Analysis:**\n- Mostly positive coverage.\n\nTrailing prose.";
        assert_eq!(
            section_statements(text, SENTIMENT),
            vec!["Mostly positive coverage."]
        );
    }

    #[test]
    fn missing_header_yields_empty_body() {
        assert_eq!(section_body("no sections here", TECHNICAL), "");
        assert!(section_statements("", FUNDAMENTAL).is_empty());
    }

    #[test]
    fn header_matches_without_emphasis() {
        let text = "2. Fundamental Analysis:\n- EPS grew 12%.";
        assert_eq!(section_statements(text, FUNDAMENTAL), vec!["EPS grew 12%."]);
    }

    #[test]
    fn header_label_is_case_sensitive() {
        let text = "1. **TECHNICAL ANALYSIS:**\n- Should not match.";
        assert_eq!(section_body(text, TECHNICAL), "");
    }

    #[test]
    fn statements_strip_bullets_and_emphasis() {
        let body = "\n- **RSI** at 58 is neutral.\n  - Indented bullet.\n-No space after dash.\n";
        assert_eq!(
            statements(body),
            vec![
                "RSI at 58 is neutral.",
                "Indented bullet.",
                "No space after dash.",
            ]
        );
    }

    #[test]
    fn statements_drop_empty_and_stray_emphasis_lines() {
        let body = "\n- Kept line.\n   \n*stray italic artifact\n- *another artifact\n";
        assert_eq!(statements(body), vec!["Kept line."]);
    }

    #[test]
    fn statements_preserve_order_and_duplicates() {
        let body = "- Same point.\n- Same point.\n- Different point.";
        assert_eq!(
            statements(body),
            vec!["Same point.", "Same point.", "Different point."]
        );
    }
}
