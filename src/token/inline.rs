//! Inline-level token types
//!
//!     The inline tokenizer splits the text content of a single block into text
//!     runs and formatting delimiters. It emits paired start/end tokens for the
//!     three marker families (strong, emphasis, code spans) and the four-part
//!     link sequence, but it does not enforce pairing: a dangling start with no
//!     matching end is a legal stream, and the parser downstream decides what it
//!     means. The only guarantees are the ones a flat stream can keep — positions
//!     never go backwards, text tokens are never empty, and a closing marker of
//!     the wrong spelling arrives demoted to literal text.
//!
//!     These are the inline tokens:
//!
//!         - Text: a literal run of characters
//!         - EmphasisStart / EmphasisEnd: single * or _ markers
//!         - StrongStart / StrongEnd: doubled ** or __ markers
//!         - CodeStart / CodeEnd: backtick code-span delimiters
//!         - LinkStart / LinkTextEnd / LinkUrl / LinkEnd: the [text](url) sequence

use std::fmt;

use super::position::SourcePosition;

/// An inline-level token: one text run or delimiter inside a block's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct InlineToken {
    /// Where the run or delimiter begins in the source
    pub position: SourcePosition,

    /// The classification of the token and its captured fields
    #[serde(flatten)]
    pub kind: InlineTokenKind,
}

impl InlineToken {
    pub fn new(position: SourcePosition, kind: InlineTokenKind) -> Self {
        Self { position, kind }
    }
}

impl fmt::Display for InlineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind.kind_name(), self.position)
    }
}

/// The classification of an inline-level token
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InlineTokenKind {
    /// A literal run of characters, never empty
    Text { content: String },

    /// Opening emphasis marker, * or _
    EmphasisStart { marker: char },

    /// Closing emphasis marker, always the spelling that opened
    EmphasisEnd { marker: char },

    /// Opening strong marker, ** or __
    StrongStart { marker: String },

    /// Closing strong marker, always the spelling that opened
    StrongEnd { marker: String },

    /// Opening code-span backtick
    CodeStart { marker: char },

    /// Closing code-span backtick
    CodeEnd { marker: char },

    /// The [ that may begin a link
    LinkStart,

    /// The ] ending a link's text
    LinkTextEnd,

    /// The URL between ( and ), captured verbatim
    LinkUrl { url: String },

    /// The ) completing a link
    LinkEnd,
}

impl InlineTokenKind {
    /// Stable name of this token kind, matching its serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineTokenKind::Text { .. } => "text",
            InlineTokenKind::EmphasisStart { .. } => "emphasisStart",
            InlineTokenKind::EmphasisEnd { .. } => "emphasisEnd",
            InlineTokenKind::StrongStart { .. } => "strongStart",
            InlineTokenKind::StrongEnd { .. } => "strongEnd",
            InlineTokenKind::CodeStart { .. } => "codeStart",
            InlineTokenKind::CodeEnd { .. } => "codeEnd",
            InlineTokenKind::LinkStart => "linkStart",
            InlineTokenKind::LinkTextEnd => "linkTextEnd",
            InlineTokenKind::LinkUrl { .. } => "linkUrl",
            InlineTokenKind::LinkEnd => "linkEnd",
        }
    }
}

impl fmt::Display for InlineTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names_match_serialized_tags() {
        assert_eq!(
            InlineTokenKind::Text {
                content: "x".to_string(),
            }
            .kind_name(),
            "text"
        );
        assert_eq!(
            InlineTokenKind::StrongStart {
                marker: "**".to_string(),
            }
            .kind_name(),
            "strongStart"
        );
        assert_eq!(InlineTokenKind::LinkTextEnd.kind_name(), "linkTextEnd");
    }

    #[test]
    fn test_serialized_shape() {
        let token = InlineToken::new(
            SourcePosition::new(1, 5),
            InlineTokenKind::StrongStart {
                marker: "__".to_string(),
            },
        );
        let value = serde_json::to_value(&token).expect("serialization failed");
        assert_eq!(
            value,
            json!({
                "position": { "line": 1, "column": 5 },
                "type": "strongStart",
                "marker": "__",
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let tokens = vec![
            InlineToken::new(SourcePosition::new(1, 1), InlineTokenKind::LinkStart),
            InlineToken::new(
                SourcePosition::new(1, 2),
                InlineTokenKind::Text {
                    content: "click".to_string(),
                },
            ),
            InlineToken::new(
                SourcePosition::new(1, 9),
                InlineTokenKind::LinkUrl {
                    url: "https://example.org".to_string(),
                },
            ),
        ];
        let json = serde_json::to_string(&tokens).expect("serialization failed");
        let back: Vec<InlineToken> = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(back, tokens);
    }
}
