// JavaScript and TypeScript header matching
//
// Top-level `function` declarations and arrow functions bound to a name are
// functions. Class and interface declarations are types, and shorthand member
// definitions (`name(args) {`) only count when a class body encloses them.

use super::{Header, HeaderRole};
use crate::extractors::base::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:export\s+)?(?:default\s+)?(?:declare\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)\s*(?:<[^()]*>)?\s*\(",
    )
    .unwrap()
});

static ARROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*(?::\s*[^=]+)?=\s*(?:async\s+)?(?:function\b|(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*(?::\s*[^=]+)?=>)",
    )
    .unwrap()
});

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:export\s+)?(?:default\s+)?(?:declare\s+)?(?:abstract\s+)?(class|interface)\s+([A-Za-z_$][\w$]*)",
    )
    .unwrap()
});

// The body must open on the header line; otherwise a bare `notify(tx)` call in
// semicolon-free code reads as a member.
static MEMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:public|private|protected|static|async|readonly|override|abstract|get|set)\s+)*\*?\s*(#?[A-Za-z_$][\w$]*)\s*(?:<[^()]*>)?\s*\([^()]*(?:\([^()]*\)[^()]*)*\)\s*(?::\s*[^={;]+)?\{.*$",
    )
    .unwrap()
});

/// Control-flow keywords whose `word (...) {` shape mimics a member
const CONTROL_WORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "function", "return", "with", "else",
];

pub(super) fn match_header(line: &str) -> Option<Header> {
    if let Some(caps) = TYPE_RE.captures(line) {
        let kind = match &caps[1] {
            "interface" => BlockKind::Interface,
            _ => BlockKind::Class,
        };
        return Some(Header::new(&caps[2], HeaderRole::Type(kind)));
    }

    if let Some(caps) = FUNCTION_RE.captures(line).or_else(|| ARROW_RE.captures(line)) {
        return Some(Header::new(
            &caps[1],
            HeaderRole::Function { receiver: false },
        ));
    }

    let caps = MEMBER_RE.captures(line)?;
    let name = &caps[1];
    if CONTROL_WORDS.contains(&name) {
        return None;
    }
    Some(Header::new(name, HeaderRole::Member))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_declarations() {
        for line in [
            "function calcBaseFee(parent) {",
            "export async function calcBaseFee(parent: Header): Promise<bigint> {",
            "export default function calcBaseFee() {",
            "function* calcBaseFee() {",
            "const calcBaseFee = (parent) => {",
            "export const calcBaseFee = async (parent: Header): Promise<bigint> => {",
            "let calcBaseFee = function (parent) {",
            "const calcBaseFee = parent => {",
        ] {
            let header = match_header(line).unwrap_or_else(|| panic!("no match for {:?}", line));
            assert_eq!(header.name, "calcBaseFee", "line {:?}", line);
            assert_eq!(header.role, HeaderRole::Function { receiver: false });
        }
    }

    #[test]
    fn test_types() {
        let header = match_header("export class BlobPool extends Pool {").unwrap();
        assert_eq!(header.name, "BlobPool");
        assert_eq!(header.role, HeaderRole::Type(BlockKind::Class));
        let header = match_header("export interface FeeMarket {").unwrap();
        assert_eq!(header.role, HeaderRole::Type(BlockKind::Interface));
        let header = match_header("export default abstract class Base {").unwrap();
        assert_eq!(header.name, "Base");
    }

    #[test]
    fn test_class_members() {
        for (line, name) in [
            ("  constructor(pool, config) {", "constructor"),
            ("  async addBlob(tx) {", "addBlob"),
            ("  get size() {", "size"),
            ("  private calcExcess(parent: Header): bigint {", "calcExcess"),
            ("  static from(items, (x) => x) {", "from"),
            ("  #evict(count) {", "#evict"),
            ("  constructor(private readonly config: PoolConfig) {}", "constructor"),
        ] {
            let header = match_header(line).unwrap_or_else(|| panic!("no match for {:?}", line));
            assert_eq!(header.name, name, "line {:?}", line);
            assert_eq!(header.role, HeaderRole::Member);
        }
    }

    #[test]
    fn test_non_headers() {
        for line in [
            "  if (x > 0) {",
            "  } else if (y) {",
            "  while (queue.length) {",
            "  this.pool.add(tx);",
            "  notify(tx);",
            "  private pool: Map<string, Tx> = new Map();",
            "    notify(tx)",
            "    this.emit(\"added\", tx)",
            "const total = values.reduce((a, b) => a + b, 0);",
        ] {
            assert!(match_header(line).is_none(), "{:?} should not be a header", line);
        }
    }
}
