//! Character cursor shared by the block and inline tokenizers
//!
//!     The cursor owns the source text (pre-split into characters so lookahead is
//!     O(1)), the scanning position, and the sequence of tokens emitted so far. Both
//!     tokenizers are thin state machines over this one abstraction: they look ahead,
//!     consume, and emit, while the cursor keeps the line/column bookkeeping honest
//!     in a single place.
//!
//!     Consumption is total. Looking past the end of the source yields `None` rather
//!     than an error, and advancing at the end is a no-op, so nothing in this module
//!     can fail or panic on any input. "Is this sequence of tokens well-formed" is a
//!     parser question and never answered here.
//!
//!     The [Scanner] trait carries the drive loop. A tokenizer implements one
//!     recognition step over the shared cursor and inherits [tokenize](Scanner::tokenize),
//!     which repeats the step until the source is exhausted and then hands the
//!     accumulated tokens back. The loop stops scanning if a step consumes nothing,
//!     so a stalled step cannot hang the caller.

use crate::token::SourcePosition;

/// A scanning cursor over source text, generic over the token type it collects.
#[derive(Debug)]
pub struct Cursor<T> {
    chars: Vec<char>,
    offset: usize,
    line: usize,
    column: usize,
    tokens: Vec<T>,
}

impl<T> Cursor<T> {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            offset: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// The character under the cursor, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.peek_ahead(0)
    }

    /// The character `lookahead` places past the current one, without consuming.
    pub fn peek_ahead(&self, lookahead: usize) -> Option<char> {
        self.chars.get(self.offset + lookahead).copied()
    }

    /// Consume and return the character under the cursor.
    ///
    /// A line feed moves the position to the start of the next line; any other
    /// character moves one column to the right. At the end of the source this
    /// returns `None` and the cursor stays put.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume the next character only if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `expected` in full if every one of its characters matches from
    /// the current position. A partial match consumes nothing, which makes
    /// multi-character markers atomic: `**` is never half-read as one `*`.
    pub fn match_str(&mut self, expected: &str) -> bool {
        for (i, ch) in expected.chars().enumerate() {
            if self.peek_ahead(i) != Some(ch) {
                return false;
            }
        }
        for _ in expected.chars() {
            self.advance();
        }
        true
    }

    /// The position at which the next consumed character sits, i.e. where a
    /// token recognized from here begins.
    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    /// Characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Append a token to the owned sequence. All tokens flow through here.
    pub fn emit(&mut self, token: T) {
        self.tokens.push(token);
    }

    /// Hand over the tokens accumulated so far, leaving the cursor empty.
    pub fn take_tokens(&mut self) -> Vec<T> {
        std::mem::take(&mut self.tokens)
    }
}

/// One lexical recognition step over a shared [Cursor].
///
/// Implementors provide [scan_unit](Scanner::scan_unit), which consumes at least
/// one character per call, and inherit the drive loop. `tokenize` takes the
/// scanner by value: a tokenizer is single-use and its output is final.
pub trait Scanner {
    /// The token type this scanner emits.
    type Token;

    /// The cursor this scanner reads from and emits into.
    fn cursor_mut(&mut self) -> &mut Cursor<Self::Token>;

    /// Recognize one unit at the current position and emit the resulting tokens.
    fn scan_unit(&mut self);

    /// Run [scan_unit](Scanner::scan_unit) to the end of the source and return
    /// the emitted tokens.
    fn tokenize(mut self) -> Vec<Self::Token>
    where
        Self: Sized,
    {
        while !self.cursor_mut().is_at_end() {
            let before = self.cursor_mut().offset();
            self.scan_unit();
            // A step that consumed nothing would never terminate; stop scanning.
            if self.cursor_mut().offset() == before {
                break;
            }
        }
        self.cursor_mut().take_tokens()
    }
}
