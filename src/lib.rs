//! # notedown-lexer
//!
//! Tokenizer library for the notedown format.
//!
//! notedown is a lightweight, markdown-like document format. This crate is its
//! lexical front end: it turns raw source text into two layers of typed tokens
//! that a parser assembles into a document tree.
//!
//! Layered Tokenization
//!
//! The block layer classifies whole lines (headings, list items, blockquotes,
//! fenced code blocks, plain text); the inline layer splits a block's text
//! content into runs and formatting delimiters (emphasis, strong, code spans,
//! links). The layers run independently: tokenize a document with
//! [tokenize_blocks], then feed whichever block contents the parser considers
//! formatted text to [tokenize_inlines].
//!
//! Both tokenizers are total. Any input, including malformed or truncated
//! markup, produces a token stream; constructs that do not complete degrade to
//! literal text or stay unclosed rather than erroring.

pub mod cursor;
pub mod lexing;
pub mod token;

pub use cursor::{Cursor, Scanner};
pub use lexing::{tokenize_blocks, tokenize_inlines, BlockLexer, InlineLexer};
pub use token::{
    detokenize, BlockToken, BlockTokenKind, InlineToken, InlineTokenKind, SourcePosition,
    ToNotedownString,
};
