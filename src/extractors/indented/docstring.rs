// Triple-quoted string handling shared by the Python extractor and the
// comment pass.

use crate::extractors::base::BaseExtractor;
use regex::Regex;
use std::sync::LazyLock;

/// Optional string prefix (r, u, b, f and their pairs) followed by a triple quote
static OPENER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(?:[rRuUbBfF]{1,2})?("""|''')"#).unwrap());

/// A docstring recovered from the top of a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Docstring {
    /// Inner text, delimiters stripped and cleaned
    pub text: String,
    /// Zero-based line holding the closing delimiter (last line when unterminated)
    pub end: usize,
}

/// Read a triple-quoted string that opens the zero-based line `start`
///
/// The closing delimiter must match the opening one. An unterminated string
/// runs to the last line.
pub(crate) fn read_docstring(base: &BaseExtractor, start: usize) -> Option<Docstring> {
    let line = base.line(start);
    let caps = OPENER_RE.captures(line)?;
    let delimiter = caps.get(1)?.as_str();
    let after_open = &line[caps.get(0)?.end()..];

    if let Some(close) = after_open.find(delimiter) {
        return Some(Docstring {
            text: clean_docstring(&after_open[..close]),
            end: start,
        });
    }

    let mut pieces = vec![after_open];
    for index in start + 1..base.total_lines() {
        let line = base.line(index);
        if let Some(close) = line.find(delimiter) {
            pieces.push(&line[..close]);
            return Some(Docstring {
                text: clean_docstring(&pieces.join("\n")),
                end: index,
            });
        }
        pieces.push(line);
    }

    Some(Docstring {
        text: clean_docstring(&pieces.join("\n")),
        end: base.total_lines().saturating_sub(1),
    })
}

/// Normalize the inner text of a triple-quoted string
///
/// Continuation lines lose their common indentation, trailing whitespace is
/// dropped from every line and the result is trimmed.
pub(crate) fn clean_docstring(raw: &str) -> String {
    let mut lines = raw.split('\n');
    let first = lines.next().unwrap_or("").trim();
    let rest: Vec<&str> = lines.map(str::trim_end).collect();

    let margin = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned = vec![first.to_string()];
    cleaned.extend(rest.iter().map(|line| line.get(margin..).unwrap_or("").to_string()));
    cleaned.join("\n").trim().to_string()
}
