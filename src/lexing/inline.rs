//! Delimiter scanning for the inline tokenizer
//!
//!     The inline pass runs over the text content of a single block (a heading's
//!     content, a text line) and splits it into text runs and formatting
//!     delimiters. It does no pairing beyond remembering which marker spelling is
//!     currently open for each family. That single slot per family is the whole
//!     story: a second marker of the same spelling closes, a marker of the other
//!     spelling while one is open is demoted to literal text, and same-family
//!     nesting does not exist.
//!
//!     Strong markers are recognized before emphasis markers so ** is never read
//!     as two single stars; the two-character check is atomic, and a lone
//!     trailing * falls through to the emphasis rule. Backticks always toggle.
//!     [ always starts a link, ] always ends link text, and only a ( directly
//!     after the ] makes the tokenizer capture a URL.
//!
//!     Whatever is still open at the end of input simply never receives its
//!     closing token. The stream stays deliberately dumb; the parser downstream
//!     decides what dangling tokens mean.

use crate::cursor::{Cursor, Scanner};
use crate::token::{InlineToken, InlineTokenKind, SourcePosition};

/// Character-oriented tokenizer producing the inline-level stream.
#[derive(Debug)]
pub struct InlineLexer {
    cursor: Cursor<InlineToken>,
    in_code_span: bool,
    emphasis_marker: Option<char>,
    strong_marker: Option<char>,
}

impl InlineLexer {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            in_code_span: false,
            emphasis_marker: None,
            strong_marker: None,
        }
    }

    /// A doubled marker opens strong, closes it if the same spelling is open,
    /// or arrives as two literal characters if the other spelling is open.
    fn scan_strong(&mut self, position: SourcePosition, marker: char) {
        let spelling = format!("{}{}", marker, marker);
        let kind = match self.strong_marker {
            None => {
                self.strong_marker = Some(marker);
                InlineTokenKind::StrongStart { marker: spelling }
            }
            Some(open) if open == marker => {
                self.strong_marker = None;
                InlineTokenKind::StrongEnd { marker: spelling }
            }
            Some(_) => InlineTokenKind::Text { content: spelling },
        };
        self.cursor.emit(InlineToken::new(position, kind));
    }

    /// Single-marker version of [scan_strong](Self::scan_strong), tracked
    /// independently of the strong state.
    fn scan_emphasis(&mut self, position: SourcePosition, marker: char) {
        let kind = match self.emphasis_marker {
            None => {
                self.emphasis_marker = Some(marker);
                InlineTokenKind::EmphasisStart { marker }
            }
            Some(open) if open == marker => {
                self.emphasis_marker = None;
                InlineTokenKind::EmphasisEnd { marker }
            }
            Some(_) => InlineTokenKind::Text {
                content: marker.to_string(),
            },
        };
        self.cursor.emit(InlineToken::new(position, kind));
    }

    /// A backtick always toggles the code span; there is no nesting.
    fn scan_code(&mut self, position: SourcePosition) {
        let kind = if self.in_code_span {
            InlineTokenKind::CodeEnd { marker: '`' }
        } else {
            InlineTokenKind::CodeStart { marker: '`' }
        };
        self.in_code_span = !self.in_code_span;
        self.cursor.emit(InlineToken::new(position, kind));
    }

    /// After a ], a ( starts URL capture: everything up to the next ) is the
    /// URL, verbatim. Without the ( the ] stands alone, and without the ) the
    /// URL runs to end of input and no closing token is emitted.
    fn scan_link_close(&mut self, position: SourcePosition) {
        self.cursor
            .emit(InlineToken::new(position, InlineTokenKind::LinkTextEnd));

        if !self.cursor.match_char('(') {
            return;
        }

        let url_position = self.cursor.position();
        let mut url = String::new();
        while let Some(ch) = self.cursor.peek() {
            if ch == ')' {
                break;
            }
            url.push(ch);
            self.cursor.advance();
        }
        self.cursor
            .emit(InlineToken::new(url_position, InlineTokenKind::LinkUrl { url }));

        let close_position = self.cursor.position();
        if self.cursor.match_char(')') {
            self.cursor
                .emit(InlineToken::new(close_position, InlineTokenKind::LinkEnd));
        }
    }

    /// Accumulate characters up to the next delimiter or end of input. Only a
    /// non-empty run becomes a token.
    fn scan_text_run(&mut self, position: SourcePosition) {
        let mut content = String::new();
        while let Some(ch) = self.cursor.peek() {
            if is_delimiter(ch) {
                break;
            }
            content.push(ch);
            self.cursor.advance();
        }
        if !content.is_empty() {
            self.cursor
                .emit(InlineToken::new(position, InlineTokenKind::Text { content }));
        }
    }
}

impl Scanner for InlineLexer {
    type Token = InlineToken;

    fn cursor_mut(&mut self) -> &mut Cursor<InlineToken> {
        &mut self.cursor
    }

    fn scan_unit(&mut self) {
        let position = self.cursor.position();
        if self.cursor.match_str("**") {
            self.scan_strong(position, '*');
        } else if self.cursor.match_str("__") {
            self.scan_strong(position, '_');
        } else if self.cursor.match_char('*') {
            self.scan_emphasis(position, '*');
        } else if self.cursor.match_char('_') {
            self.scan_emphasis(position, '_');
        } else if self.cursor.match_char('`') {
            self.scan_code(position);
        } else if self.cursor.match_char('[') {
            self.cursor
                .emit(InlineToken::new(position, InlineTokenKind::LinkStart));
        } else if self.cursor.match_char(']') {
            self.scan_link_close(position);
        } else {
            self.scan_text_run(position);
        }
    }
}

/// Characters that end a text run and start a token of their own.
fn is_delimiter(ch: char) -> bool {
    matches!(ch, '*' | '_' | '`' | '[' | ']')
}

/// Tokenize one block's text content into its inline token stream.
pub fn tokenize(source: &str) -> Vec<InlineToken> {
    InlineLexer::new(source).tokenize()
}
