//! Indentation-sensitive extractor (Python)
//!
//! A block runs from its `class`/`def` header to the last line indented deeper
//! than the header, so a body ends at the first following non-blank line whose
//! indentation is not greater than the header's. Trailing blank lines are not
//! part of the span.
//!
//! - `class` headers are classes
//! - `def` / `async def` at column zero are functions, nested ones are methods
//! - a triple-quoted string opening the body becomes the block's docstring

pub(crate) mod docstring;

use crate::extractors::base::extractor::{indent_width, is_blank, one_line_whitespace};
use crate::extractors::base::{BaseExtractor, BlockKind, CodeBlock, ExtractorStrategy};
use docstring::read_docstring;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\s*)(?:(class)\s+([A-Za-z_]\w*)\s*[:(\[]|(?:async\s+)?def\s+([A-Za-z_]\w*)\s*(?:\[[^\]]*\])?\s*\()",
    )
    .unwrap()
});

#[derive(Default)]
pub struct IndentedExtractor;

impl IndentedExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ExtractorStrategy for IndentedExtractor {
    fn language(&self) -> &str {
        "python"
    }

    fn extract(&self, content: &str) -> Vec<CodeBlock> {
        let base = BaseExtractor::new(self.language(), content);
        let mut blocks = Vec::new();

        for index in 0..base.total_lines() {
            let line = base.line(index);
            let Some(caps) = HEADER_RE.captures(line) else {
                continue;
            };

            let base_indent = indent_width(&caps[1]);
            let (name, kind) = match (caps.get(3), caps.get(4)) {
                (Some(class_name), _) => (class_name.as_str(), BlockKind::Class),
                (None, Some(def_name)) if base_indent == 0 => {
                    (def_name.as_str(), BlockKind::Function)
                }
                (None, Some(def_name)) => (def_name.as_str(), BlockKind::Method),
                (None, None) => continue,
            };

            let header_end = find_header_end(&base, index);
            let (docstring, body_start) = match first_body_line(&base, header_end, base_indent)
                .and_then(|first| read_docstring(&base, first))
            {
                Some(doc) => (Some(doc.text), doc.end),
                None => (None, header_end),
            };
            let end = find_block_end(&base, body_start, base_indent);

            let signature = if header_end == index {
                line.trim().to_string()
            } else {
                one_line_whitespace(&base.slice(index, header_end))
            };

            trace!("{} '{}' spans lines {}-{}", kind, name, index + 1, end + 1);
            blocks.push(base.create_block(name, kind, index, end, signature, docstring));
        }

        blocks
    }
}

/// Last zero-based line of a header whose brackets may wrap onto following lines
///
/// A header whose brackets never balance is treated as a single line.
fn find_header_end(base: &BaseExtractor, header: usize) -> usize {
    let mut depth: i64 = 0;
    for index in header..base.total_lines() {
        depth += bracket_delta(base.line(index));
        if depth <= 0 {
            return index;
        }
    }
    header
}

/// First non-blank line after the header, if it belongs to the body
fn first_body_line(base: &BaseExtractor, header_end: usize, base_indent: usize) -> Option<usize> {
    (header_end + 1..base.total_lines())
        .find(|&index| !is_blank(base.line(index)))
        .filter(|&index| indent_width(base.line(index)) > base_indent)
}

/// Last zero-based line indented deeper than `base_indent`, scanning after `from`
fn find_block_end(base: &BaseExtractor, from: usize, base_indent: usize) -> usize {
    let mut end = from;
    for index in from + 1..base.total_lines() {
        let line = base.line(index);
        if is_blank(line) {
            continue;
        }
        if indent_width(line) <= base_indent {
            break;
        }
        end = index;
    }
    end
}

fn bracket_delta(line: &str) -> i64 {
    line.bytes().fold(0, |acc, b| match b {
        b'(' | b'[' | b'{' => acc + 1,
        b')' | b']' | b'}' => acc - 1,
        _ => acc,
    })
}
