//! Comment extraction
//!
//! An independent lexical pass that surfaces human-written annotations as
//! supplementary evidence. It never consults the block list.
//!
//! - Brace languages: `//` line comments and `/* ... */` block comments
//! - Python: `#` comments and triple-quoted strings that stand as statements
//!
//! String literals are skipped so a `//` or `#` inside quotes is not a comment.
//! Records come back in source order.

use crate::extractors::base::{Comment, CommentKind};
use crate::extractors::indented::docstring::clean_docstring;
use crate::language::{BlockStyle, Language};

/// Extract comments from `content` written in the language named by `tag`
///
/// Languages without a known comment syntax produce no records.
pub fn extract_comments(content: &str, tag: &str) -> Vec<Comment> {
    let language = Language::from_tag(tag);
    match language.block_style() {
        BlockStyle::Delimited => {
            let backtick_strings = matches!(language, Language::Go | Language::JavaScript);
            let quote_strings = matches!(language, Language::JavaScript);
            CStyleScanner::new(content, backtick_strings, quote_strings).scan()
        }
        BlockStyle::Indented => PythonScanner::new(content).scan(),
        BlockStyle::Whole => Vec::new(),
    }
}

/// Byte cursor with line tracking
struct Cursor<'a> {
    content: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            bytes: content.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.bytes[self.pos..].starts_with(pattern.as_bytes())
    }

    /// Move to byte offset `target`, counting the newlines passed
    fn advance_to(&mut self, target: usize) {
        let target = target.min(self.bytes.len());
        self.line += self.bytes[self.pos..target]
            .iter()
            .filter(|&&b| b == b'\n')
            .count() as u32;
        self.pos = target;
    }

    fn advance(&mut self, count: usize) {
        self.advance_to(self.pos + count);
    }

    /// Offset of the next `pattern` at or after `from`
    fn find_from(&self, from: usize, pattern: &str) -> Option<usize> {
        self.content
            .get(from..)
            .and_then(|rest| rest.find(pattern))
            .map(|offset| from + offset)
    }

    fn line_end(&self) -> usize {
        self.find_from(self.pos, "\n").unwrap_or(self.bytes.len())
    }

    /// Skip a quoted literal opened at the cursor; stops at the line end when unterminated
    fn skip_quoted(&mut self, quote: u8) {
        self.advance(1);
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.advance(2),
                b'\n' => return,
                _ if b == quote => {
                    self.advance(1);
                    return;
                }
                _ => self.advance(1),
            }
        }
    }
}

/// `//` and `/* */` comments for Go, Rust, C#, Java and JavaScript
struct CStyleScanner<'a> {
    cursor: Cursor<'a>,
    backtick_strings: bool,
    /// `'...'` is a string (JavaScript) rather than a character literal
    quote_strings: bool,
}

impl<'a> CStyleScanner<'a> {
    fn new(content: &'a str, backtick_strings: bool, quote_strings: bool) -> Self {
        Self {
            cursor: Cursor::new(content),
            backtick_strings,
            quote_strings,
        }
    }

    fn scan(mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        while !self.cursor.at_end() {
            if self.cursor.starts_with("//") {
                comments.push(self.line_comment());
            } else if self.cursor.starts_with("/*") {
                comments.push(self.block_comment());
            } else {
                match self.cursor.peek(0) {
                    Some(b'"') => self.cursor.skip_quoted(b'"'),
                    Some(b'`') if self.backtick_strings => self.skip_raw_string(),
                    Some(b'\'') if self.quote_strings => self.cursor.skip_quoted(b'\''),
                    Some(b'\'') => self.skip_char_literal(),
                    _ => self.cursor.advance(1),
                }
            }
        }
        comments
    }

    fn line_comment(&mut self) -> Comment {
        let line = self.cursor.line;
        let end = self.cursor.line_end();
        let body = &self.cursor.content[self.cursor.pos + 2..end];
        // `///` and `//!` doc markers
        let body = body
            .strip_prefix('/')
            .or_else(|| body.strip_prefix('!'))
            .unwrap_or(body);
        let text = body.trim().to_string();
        self.cursor.advance_to(end);
        Comment {
            line,
            end_line: line,
            kind: CommentKind::Single,
            text,
        }
    }

    fn block_comment(&mut self) -> Comment {
        let line = self.cursor.line;
        let body_start = self.cursor.pos + 2;
        let (body_end, resume) = match self.cursor.find_from(body_start, "*/") {
            Some(close) => (close, close + 2),
            None => (self.cursor.bytes.len(), self.cursor.bytes.len()),
        };
        let text = clean_block_comment(&self.cursor.content[body_start..body_end]);
        self.cursor.advance_to(resume);
        Comment {
            line,
            end_line: self.cursor.line,
            kind: CommentKind::Block,
            text,
        }
    }

    /// Skip `'x'` or `'\n'`; a lone quote (Rust lifetime) only moves one byte
    fn skip_char_literal(&mut self) {
        let start = self.cursor.pos;
        let close = match self.cursor.peek(1) {
            Some(b'\\') => self
                .cursor
                .find_from(start + 3, "'")
                .filter(|&close| close < self.cursor.line_end()),
            Some(_) => self.cursor.content[start + 1..]
                .chars()
                .next()
                .map(|c| start + 1 + c.len_utf8())
                .filter(|&close| self.cursor.peek(close - start) == Some(b'\'')),
            None => None,
        };
        match close {
            Some(close) => self.cursor.advance_to(close + 1),
            None => self.cursor.advance(1),
        }
    }

    fn skip_raw_string(&mut self) {
        let after_open = self.cursor.pos + 1;
        let resume = self
            .cursor
            .find_from(after_open, "`")
            .map(|close| close + 1)
            .unwrap_or(self.cursor.bytes.len());
        self.cursor.advance_to(resume);
    }
}

/// Strip `/**` decoration: a leading `*` or `!`, and a leading `*` on every line
fn clean_block_comment(body: &str) -> String {
    let body = body
        .strip_prefix('*')
        .or_else(|| body.strip_prefix('!'))
        .unwrap_or(body);
    body.split('\n')
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// `#` comments and statement-level triple-quoted strings for Python
struct PythonScanner<'a> {
    cursor: Cursor<'a>,
    /// True until something other than whitespace appears on the current line
    line_start: bool,
}

impl<'a> PythonScanner<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            cursor: Cursor::new(content),
            line_start: true,
        }
    }

    fn scan(mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        while let Some(b) = self.cursor.peek(0) {
            match b {
                b'\n' => {
                    self.line_start = true;
                    self.cursor.advance(1);
                }
                b' ' | b'\t' | b'\r' => self.cursor.advance(1),
                b'#' => {
                    comments.push(self.hash_comment());
                    self.line_start = false;
                }
                b'"' | b'\'' => {
                    let triple = if self.cursor.starts_with("\"\"\"") {
                        Some("\"\"\"")
                    } else if self.cursor.starts_with("'''") {
                        Some("'''")
                    } else {
                        None
                    };
                    match triple {
                        Some(delimiter) => {
                            let statement = self.line_start;
                            let comment = self.triple_quoted(delimiter);
                            if statement {
                                comments.push(comment);
                            }
                        }
                        None => self.cursor.skip_quoted(b),
                    }
                    self.line_start = false;
                }
                _ => {
                    self.line_start = false;
                    self.cursor.advance(1);
                }
            }
        }
        comments
    }

    fn hash_comment(&mut self) -> Comment {
        let line = self.cursor.line;
        let end = self.cursor.line_end();
        let text = self.cursor.content[self.cursor.pos + 1..end].trim().to_string();
        self.cursor.advance_to(end);
        Comment {
            line,
            end_line: line,
            kind: CommentKind::Single,
            text,
        }
    }

    fn triple_quoted(&mut self, delimiter: &str) -> Comment {
        let line = self.cursor.line;
        let body_start = self.cursor.pos + delimiter.len();
        let (body_end, resume) = match self.cursor.find_from(body_start, delimiter) {
            Some(close) => (close, close + delimiter.len()),
            None => (self.cursor.bytes.len(), self.cursor.bytes.len()),
        };
        let text = clean_docstring(&self.cursor.content[body_start..body_end]);
        self.cursor.advance_to(resume);
        Comment {
            line,
            end_line: self.cursor.line,
            kind: CommentKind::Docstring,
            text,
        }
    }
}
