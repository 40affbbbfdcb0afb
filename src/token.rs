//! Token types and helpers shared by the tokenizers, the parser, and tooling.

pub mod block;
pub mod formatting;
pub mod inline;
pub mod position;

pub use block::{BlockToken, BlockTokenKind};
pub use formatting::{detokenize, ToNotedownString};
pub use inline::{InlineToken, InlineTokenKind};
pub use position::SourcePosition;
