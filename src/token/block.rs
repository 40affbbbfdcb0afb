//! Block-level token types
//!
//!     The block tokenizer reduces a document to a flat sequence of classified
//!     lines. Every physical line produces exactly one token, so the block stream
//!     is as long as the document and nothing is dropped: a line that satisfies no
//!     special rule is still a text line, verbatim.
//!
//!     A line might satisfy more than one category (for example "1. Recap" is both
//!     a digit run and ordinary text), which is why classification order matters.
//!     The ordering lives with the lexer; see
//!     [BlockLexer](crate::lexing::block::BlockLexer). The types here are the
//!     contract: what each classification is called and which fields it captures.
//!
//!     These are the block tokens:
//!
//!         - TextLine: any line no other rule claims, content verbatim
//!         - BlankLine: empty or whitespace-only line
//!         - Heading: one to six # characters plus required whitespace
//!         - CodeBlockStart / CodeBlockContent / CodeBlockEnd: fenced code blocks
//!         - ListItem: unordered list line (-, * or + marker)
//!         - OrderedListItem: numbered list line (digits, a period, whitespace)
//!         - Blockquote: line starting with >

use std::fmt;

use super::position::SourcePosition;

/// A block-level token: the classification of one physical line.
///
/// Serializes with the kind flattened next to the position, so a heading
/// renders as `{"position":{"line":1,"column":1},"type":"heading",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BlockToken {
    /// Where the line begins in the source
    pub position: SourcePosition,

    /// The classification of the line and its captured fields
    #[serde(flatten)]
    pub kind: BlockTokenKind,
}

impl BlockToken {
    pub fn new(position: SourcePosition, kind: BlockTokenKind) -> Self {
        Self { position, kind }
    }
}

impl fmt::Display for BlockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind.kind_name(), self.position)
    }
}

/// The classification of a block-level token
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BlockTokenKind {
    /// Any line no other classification claims, content verbatim
    TextLine { content: String },

    /// Empty or whitespace-only line
    BlankLine,

    /// One to six # characters plus required whitespace; level is the hash count
    Heading { level: u8, content: String },

    /// Opening fence line: the exact 3-character fence literal (``` or ~~~) and
    /// an optional language tag taken from the rest of the line
    CodeBlockStart {
        fence: String,
        language: Option<String>,
    },

    /// Verbatim line inside a fenced block; line_in_block counts from 1
    CodeBlockContent { content: String, line_in_block: usize },

    /// Closing fence line; fence always equals the one that opened the block
    CodeBlockEnd { fence: String },

    /// Unordered list line with its marker character (-, * or +)
    ListItem { marker: char, content: String },

    /// Numbered list line; number is the parsed value of the digit run
    OrderedListItem { number: u64, content: String },

    /// Line starting with >; one space after the marker, if present, is
    /// consumed and not part of content
    Blockquote { content: String },
}

impl BlockTokenKind {
    /// Stable name of this token kind, matching its serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockTokenKind::TextLine { .. } => "textLine",
            BlockTokenKind::BlankLine => "blankLine",
            BlockTokenKind::Heading { .. } => "heading",
            BlockTokenKind::CodeBlockStart { .. } => "codeBlockStart",
            BlockTokenKind::CodeBlockContent { .. } => "codeBlockContent",
            BlockTokenKind::CodeBlockEnd { .. } => "codeBlockEnd",
            BlockTokenKind::ListItem { .. } => "listItem",
            BlockTokenKind::OrderedListItem { .. } => "orderedListItem",
            BlockTokenKind::Blockquote { .. } => "blockquote",
        }
    }
}

impl fmt::Display for BlockTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}
