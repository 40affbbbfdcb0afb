//! Tokenizers
//!
//!     This module holds the two tokenization passes for the notedown format.
//!     Both are built on the same [Cursor](crate::cursor::Cursor) abstraction and
//!     differ only in what a recognition step consumes.
//!
//! The Tokenizing Pipeline
//!
//!     The pipeline consists of:
//!         1. Block tokenization over the whole document. Each physical line
//!            becomes exactly one block token; the line feed between lines is
//!            consumed and never appears in token content. See [block].
//!
//!         2. Inline tokenization over the text content of individual blocks.
//!            The parser decides which block contents get an inline pass (a
//!            heading's content, a text line) and which stay verbatim (code
//!            block content). See [inline].
//!
//!     The two passes never see each other's state. Running the inline pass is
//!     optional and per block, which is why the inline tokenizer takes a plain
//!     string rather than block tokens: feeding it `heading.content` and feeding
//!     it a whole text line are the same operation.
//!
//! Degradation Over Rejection
//!
//!     Neither pass can fail. Input that almost forms a construct degrades to
//!     the nearest literal reading: a seven-# heading is a text line, an
//!     unmatched closing marker is literal text, an unterminated fence runs to
//!     end of input. The token streams are therefore total functions of the
//!     source, and judging well-formedness is left entirely to the parser.

pub mod block;
pub mod inline;

pub use block::BlockLexer;
pub use block::tokenize as tokenize_blocks;
pub use inline::InlineLexer;
pub use inline::tokenize as tokenize_inlines;

