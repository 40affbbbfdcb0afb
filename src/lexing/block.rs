//! Line classification for the block tokenizer
//!
//!     The block pass is line oriented: each scan step consumes exactly one line
//!     plus its trailing line feed and classifies the line into one block token.
//!     A line might satisfy more than one category, so the order of classification
//!     is crucial to getting the right result:
//!
//!         1. Inside a fenced block the only question is whether the line closes
//!            the fence; everything else is verbatim content, blank lines included.
//!         2. Blank lines.
//!         3. Opening fences (``` or ~~~).
//!         4. Headings: one to six # plus whitespace. A seventh # demotes the
//!            line to text, as does a # run with no whitespace after it.
//!         5. Ordered list items: digits, a period, whitespace.
//!         6. Unordered list items: -, * or + plus whitespace.
//!         7. Blockquotes: a leading >.
//!         8. Plain text, verbatim.
//!
//!     Classification never rejects a line. Wherever a rule's requirements are
//!     not met the line falls through, ultimately to a text line, so malformed
//!     input degrades to plain text instead of failing.

use crate::cursor::{Cursor, Scanner};
use crate::token::{BlockToken, BlockTokenKind, SourcePosition};

/// Line-oriented tokenizer producing the block-level stream.
///
/// Fence state lives on the lexer: while a fenced code block is open, every
/// line is content until one begins with the exact fence that opened it.
#[derive(Debug)]
pub struct BlockLexer {
    cursor: Cursor<BlockToken>,
    in_code_block: bool,
    current_fence: Option<String>,
    code_block_line: usize,
}

impl BlockLexer {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            in_code_block: false,
            current_fence: None,
            code_block_line: 0,
        }
    }

    /// Consume characters up to the next line feed, then the line feed itself.
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        while let Some(ch) = self.cursor.peek() {
            if ch == '\n' {
                break;
            }
            line.push(ch);
            self.cursor.advance();
        }
        self.cursor.match_char('\n');
        line
    }

    fn classify_line(&mut self, line: &str, position: SourcePosition) {
        let kind = if self.in_code_block {
            self.classify_in_code_block(line)
        } else if line.trim().is_empty() {
            BlockTokenKind::BlankLine
        } else if let Some(kind) = self.classify_fence_start(line) {
            kind
        } else if let Some(kind) = classify_heading(line) {
            kind
        } else if let Some(kind) = classify_ordered_item(line) {
            kind
        } else if let Some(kind) = classify_list_item(line) {
            kind
        } else if let Some(kind) = classify_blockquote(line) {
            kind
        } else {
            BlockTokenKind::TextLine {
                content: line.to_string(),
            }
        };
        self.cursor.emit(BlockToken::new(position, kind));
    }

    /// Inside a fence, a line beginning with the exact opening fence closes the
    /// block (anything after the fence on that line is dropped); every other
    /// line is verbatim content with a 1-based line counter.
    fn classify_in_code_block(&mut self, line: &str) -> BlockTokenKind {
        let closes = self
            .current_fence
            .as_deref()
            .map(|fence| line.starts_with(fence))
            .unwrap_or(false);

        if closes {
            let fence = self.current_fence.take().unwrap_or_default();
            self.in_code_block = false;
            self.code_block_line = 0;
            BlockTokenKind::CodeBlockEnd { fence }
        } else {
            self.code_block_line += 1;
            BlockTokenKind::CodeBlockContent {
                content: line.to_string(),
                line_in_block: self.code_block_line,
            }
        }
    }

    /// Three backticks or three tildes open a fence. The language tag is the
    /// first whitespace-delimited word after the fence, if any.
    fn classify_fence_start(&mut self, line: &str) -> Option<BlockTokenKind> {
        let fence = if line.starts_with("```") {
            "```"
        } else if line.starts_with("~~~") {
            "~~~"
        } else {
            return None;
        };

        let language = line[fence.len()..]
            .split_whitespace()
            .next()
            .map(str::to_string);

        self.in_code_block = true;
        self.current_fence = Some(fence.to_string());
        self.code_block_line = 0;

        Some(BlockTokenKind::CodeBlockStart {
            fence: fence.to_string(),
            language,
        })
    }
}

impl Scanner for BlockLexer {
    type Token = BlockToken;

    fn cursor_mut(&mut self) -> &mut Cursor<BlockToken> {
        &mut self.cursor
    }

    fn scan_unit(&mut self) {
        let position = self.cursor.position();
        let line = self.read_line();
        self.classify_line(&line, position);
    }
}

/// Tokenize a whole source into its block-level token stream.
pub fn tokenize(source: &str) -> Vec<BlockToken> {
    BlockLexer::new(source).tokenize()
}

/// One to six # characters followed by whitespace. The whitespace run after
/// the hashes is consumed; the rest of the line is the content.
fn classify_heading(line: &str) -> Option<BlockTokenKind> {
    let level = line.chars().take_while(|&ch| ch == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(BlockTokenKind::Heading {
        level: level as u8,
        content: rest.trim_start().to_string(),
    })
}

/// A digit run, a literal period, then required whitespace. A run too large
/// to parse falls back to plain text.
fn classify_ordered_item(line: &str) -> Option<BlockTokenKind> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let number: u64 = line[..digits].parse().ok()?;
    Some(BlockTokenKind::OrderedListItem {
        number,
        content: rest.trim_start().to_string(),
    })
}

/// A single -, * or + marker followed by required whitespace.
fn classify_list_item(line: &str) -> Option<BlockTokenKind> {
    let mut chars = line.chars();
    let marker = chars.next()?;
    if !matches!(marker, '-' | '*' | '+') {
        return None;
    }
    let rest = chars.as_str();
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(BlockTokenKind::ListItem {
        marker,
        content: rest.trim_start().to_string(),
    })
}

/// A leading >; exactly one space after it, if present, is consumed.
fn classify_blockquote(line: &str) -> Option<BlockTokenKind> {
    let rest = line.strip_prefix('>')?;
    let content = rest.strip_prefix(' ').unwrap_or(rest);
    Some(BlockTokenKind::Blockquote {
        content: content.to_string(),
    })
}
