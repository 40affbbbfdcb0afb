//! Detokenizer for the notedown block stream
//!
//! This module converts block tokens back into source text.
//!
//! Unlike the tokenizers, which never lose a line, the reverse direction is only
//! exact for what the tokens still carry. Text lines and blank lines reconstruct
//! their input character for character; marked lines (headings, list items,
//! blockquotes, fences) come back in canonical spelling, with a single space
//! after the marker. This is useful for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Normalizing a document to canonical marker spelling
//! - Debugging and visualization of token streams

use super::block::{BlockToken, BlockTokenKind};

/// Trait for converting a token to its notedown source representation
pub trait ToNotedownString {
    fn to_notedown_string(&self) -> String;
}

impl ToNotedownString for BlockTokenKind {
    fn to_notedown_string(&self) -> String {
        match self {
            BlockTokenKind::TextLine { content } => content.clone(),
            BlockTokenKind::BlankLine => String::new(),
            BlockTokenKind::Heading { level, content } => {
                format!("{} {}", "#".repeat(usize::from(*level)), content)
            }
            BlockTokenKind::CodeBlockStart { fence, language } => match language {
                Some(language) => format!("{}{}", fence, language),
                None => fence.clone(),
            },
            BlockTokenKind::CodeBlockContent { content, .. } => content.clone(),
            BlockTokenKind::CodeBlockEnd { fence } => fence.clone(),
            BlockTokenKind::ListItem { marker, content } => {
                format!("{} {}", marker, content)
            }
            BlockTokenKind::OrderedListItem { number, content } => {
                format!("{}. {}", number, content)
            }
            BlockTokenKind::Blockquote { content } => format!("> {}", content),
        }
    }
}

impl ToNotedownString for BlockToken {
    fn to_notedown_string(&self) -> String {
        self.kind.to_notedown_string()
    }
}

/// Detokenize a block token stream into source text.
///
/// Each token renders as one line; lines are joined with the line feeds the
/// tokenizer consumed between them. For a stream of text and blank lines the
/// result equals the original input exactly.
pub fn detokenize(tokens: &[BlockToken]) -> String {
    tokens
        .iter()
        .map(|token| token.to_notedown_string())
        .collect::<Vec<_>>()
        .join("\n")
}
