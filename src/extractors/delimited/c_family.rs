// C# and Java header matching
//
// Both languages declare methods as `modifiers ReturnType Name(params)` inside a
// type body, so a function header is a method whenever a class, struct,
// record, enum or interface encloses it.

use super::{Header, HeaderRole};
use crate::extractors::base::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

const MODIFIERS: &str = "public|private|protected|internal|static|virtual|override|abstract|sealed|async|extern|unsafe|new|partial|readonly|final|synchronized|native|default|strictfp|transient|volatile|file|ref|non-sealed";

/// Prefix shared by both patterns: C# attributes, Java annotations, modifiers
fn prefix() -> String {
    format!(
        r"^\s*(?:\[[^\]]*\]\s*)*(?:@[A-Za-z_][\w.]*(?:\([^)]*\))?\s+)*(?:(?:{})\s+)*",
        MODIFIERS
    )
}

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}(class|interface|struct|record|enum|@interface)\s+(?:(?:class|struct)\s+)?([A-Za-z_]\w*)",
        prefix()
    ))
    .unwrap()
});

static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}(?:<[^>]+>\s+)?(?:([\w.?\[\]]+(?:<[^()]*>)?[\w.?\[\]]*)\s+)?([A-Za-z_]\w*)\s*(?:<[^()]*>)?\s*\(",
        prefix()
    ))
    .unwrap()
});

/// Words that open statements or expressions, never a method declaration
const NON_DECLARATION_WORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "foreach",
    "while",
    "do",
    "switch",
    "case",
    "catch",
    "try",
    "finally",
    "using",
    "lock",
    "fixed",
    "return",
    "new",
    "throw",
    "yield",
    "await",
    "goto",
    "sizeof",
    "typeof",
    "nameof",
    "checked",
    "unchecked",
    "synchronized",
    "assert",
    "when",
    "var",
    "default",
];

/// Leading words that mark a statement even when a modifier shares the spelling
const STATEMENT_STARTERS: &[&str] = &[
    "new", "return", "throw", "else", "yield", "await", "case", "goto", "var", "using", "lock",
];

fn first_word(line: &str) -> &str {
    line.trim_start()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or("")
}

pub(super) fn match_header(line: &str) -> Option<Header> {
    if let Some(caps) = TYPE_RE.captures(line) {
        let kind = match &caps[1] {
            "interface" | "@interface" => BlockKind::Interface,
            _ => BlockKind::Class,
        };
        return Some(Header::new(&caps[2], HeaderRole::Type(kind)));
    }

    if STATEMENT_STARTERS.contains(&first_word(line)) {
        return None;
    }

    let caps = METHOD_RE.captures(line)?;
    let name = &caps[2];
    let return_type = caps.get(1).map(|m| m.as_str());
    if NON_DECLARATION_WORDS.contains(&name)
        || return_type.is_some_and(|rt| NON_DECLARATION_WORDS.contains(&rt))
    {
        return None;
    }

    Some(Header::new(name, HeaderRole::Function { receiver: false }))
}
