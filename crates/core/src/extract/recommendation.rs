use std::sync::LazyLock;

use regex::Regex;

/// A resolved final call: the label and (possibly empty) justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub label: String,
    pub justification: String,
}

// The upstream generator has emitted at least four sub-formats of the final
// recommendation block over time, with no version tag. Each grammar below
// targets one of them; the justification capture runs to the nearest
// blank-line run, rule, or metadata marker.

/// Marker line, bullet with the bold label, bullet with bold `Justification:`.
static BULLETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Final Recommendation:\*\*\s*\n\s*-\s*\*\*(.*?)\*\*\s*\n\s*-\s*\*\*Justification:\*\*\s*((?s:.*?))(?:\n{2}|-{2,}|Meta Data|$)",
    )
    .unwrap()
});

/// Marker line, standalone bold label line, plain `- Justification:` line.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Final Recommendation:\*\*\s*\n\*\*(.*?)\*\*\s*\n- Justification:\s*((?s:.*?))(?:\n{2}|-{2,}|Meta Data|$)",
    )
    .unwrap()
});

/// Label bolded directly after the marker on one logical line.
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Final Recommendation:\*\*\s*\*\*(.*?)\*\*\s*\n- Justification:\s*((?s:.*?))(?:\n{2}|-{2,}|Meta Data|$)",
    )
    .unwrap()
});

/// Bare emphasized `FINAL RECOMMENDATION: <LABEL>` anywhere in the text; no
/// justification is captured on this path.
static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*FINAL RECOMMENDATION: ([A-Z]+)\*\*").unwrap());

/// Try each grammar against the full text, in fixed priority order; the
/// first match wins. No match is a valid terminal outcome, not an error:
/// the caller leaves both fields empty.
pub fn resolve(text: &str) -> Option<Resolution> {
    let grammars: [(&str, &Regex); 4] = [
        ("bulleted", &BULLETED),
        ("heading", &HEADING),
        ("inline", &INLINE),
        ("bare", &BARE),
    ];

    for (name, grammar) in grammars {
        if let Some(resolution) = capture(grammar, text) {
            tracing::debug!(grammar = name, label = %resolution.label, "final recommendation matched");
            return Some(resolution);
        }
    }
    tracing::debug!("no final recommendation grammar matched");
    None
}

fn capture(grammar: &Regex, text: &str) -> Option<Resolution> {
    let caps = grammar.captures(text)?;
    Some(Resolution {
        label: caps[1].trim().to_string(),
        justification: caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}
