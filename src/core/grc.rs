//! `.grc` ingress: document parsing and size limits
//!
//! This is caller-side plumbing. The core analyzers only ever see the body
//! text this module produces; the limits here never apply to direct library
//! calls.

use crate::types::{GrcDocument, GrcSection};
use crate::{MAX_DOCUMENT_BYTES, MIN_BODY_CHARS};

/// Why a document was refused at the ingress boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngressReason {
    /// Nothing but whitespace
    EmptyDocument,
    /// Input exceeds the 10 MB cap
    DocumentTooLarge,
    /// No `#` title line
    MissingTitle,
    /// Body under the 100-character minimum
    BodyTooShort,
}

impl IngressReason {
    /// Get reason code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyDocument => "EMPTY_DOCUMENT",
            Self::DocumentTooLarge => "DOCUMENT_TOO_LARGE",
            Self::MissingTitle => "MISSING_TITLE",
            Self::BodyTooShort => "BODY_TOO_SHORT",
        }
    }

    /// Get human description
    pub fn description(&self) -> &'static str {
        match self {
            Self::EmptyDocument => "Document is empty",
            Self::DocumentTooLarge => "Document exceeds the 10 MB limit",
            Self::MissingTitle => "Document has no '#' title line",
            Self::BodyTooShort => "Document body is under 100 characters",
        }
    }
}

impl std::fmt::Display for IngressReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl std::error::Error for IngressReason {}

/// Parse a `.grc` document: `#` title line, optional `bioregion:` header,
/// `##` section headings, free text between them.
pub fn parse_grc(raw: &str) -> Result<GrcDocument, IngressReason> {
    if raw.len() > MAX_DOCUMENT_BYTES {
        return Err(IngressReason::DocumentTooLarge);
    }
    if raw.trim().is_empty() {
        return Err(IngressReason::EmptyDocument);
    }

    let mut title = None;
    let mut bioregion = String::new();
    let mut sections: Vec<GrcSection> = Vec::new();
    let mut body_lines: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if let Some(heading) = trimmed.strip_prefix("##") {
            sections.push(GrcSection {
                heading: heading.trim().to_string(),
                content: String::new(),
            });
            body_lines.push(heading.trim());
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('#') {
            if title.is_none() {
                title = Some(rest.trim().to_string());
            }
            continue;
        }

        if let Some(rest) = lowercase_prefix(trimmed, "bioregion:") {
            if bioregion.is_empty() {
                bioregion = rest.trim().to_string();
            }
            continue;
        }

        if !trimmed.is_empty() {
            if let Some(section) = sections.last_mut() {
                if !section.content.is_empty() {
                    section.content.push(' ');
                }
                section.content.push_str(trimmed);
            }
            body_lines.push(trimmed);
        }
    }

    let title = title.ok_or(IngressReason::MissingTitle)?;
    let body = body_lines.join("\n");

    if body.chars().count() < MIN_BODY_CHARS {
        return Err(IngressReason::BodyTooShort);
    }

    Ok(GrcDocument {
        title,
        bioregion,
        sections,
        body,
    })
}

/// Strip a case-insensitive prefix, returning the remainder
fn lowercase_prefix<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &line[prefix.len()..])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> String {
        format!(
            "# Salmon Return Ceremony\n\
             bioregion: cascadia\n\
             ## Opening\n\
             {}\n\
             ## Closing\n\
             The families share the first catch together.\n",
            "The community gathers at the river mouth with cedar branches and a blessing song."
        )
    }

    #[test]
    fn test_parses_title_and_bioregion() {
        let document = parse_grc(&sample_document()).unwrap();
        assert_eq!(document.title, "Salmon Return Ceremony");
        assert_eq!(document.bioregion, "cascadia");
        assert_eq!(document.sections.len(), 2);
        assert_eq!(document.sections[0].heading, "Opening");
        assert!(document.sections[1]
            .content
            .contains("share the first catch"));
    }

    #[test]
    fn test_body_keeps_section_text_strips_markers() {
        let document = parse_grc(&sample_document()).unwrap();
        assert!(document.body.contains("Opening"));
        assert!(!document.body.contains("##"));
        assert!(document.body.contains("cedar branches"));
    }

    #[test]
    fn test_empty_document_refused() {
        assert_eq!(parse_grc("   \n  ").unwrap_err(), IngressReason::EmptyDocument);
    }

    #[test]
    fn test_missing_title_refused() {
        let raw = "bioregion: cascadia\n".to_string() + &"The river text goes on. ".repeat(10);
        assert_eq!(parse_grc(&raw).unwrap_err(), IngressReason::MissingTitle);
    }

    #[test]
    fn test_short_body_refused() {
        let raw = "# Short\nA few words only.\n";
        assert_eq!(parse_grc(raw).unwrap_err(), IngressReason::BodyTooShort);
    }

    #[test]
    fn test_oversized_document_refused() {
        let mut raw = String::from("# Big\n");
        raw.push_str(&"x".repeat(MAX_DOCUMENT_BYTES + 1));
        assert_eq!(parse_grc(&raw).unwrap_err(), IngressReason::DocumentTooLarge);
    }

    #[test]
    fn test_bioregion_header_is_case_insensitive() {
        let raw = format!(
            "# Ceremony\nBioregion: Great-Basin\n{}\n",
            "The gathering text continues with enough words to pass the body floor easily, \
             repeated across the meadow and back again."
        );
        let document = parse_grc(&raw).unwrap();
        assert_eq!(document.bioregion, "Great-Basin");
    }
}
