// Rust header matching
//
// Functions taking `self` are methods on their own; any other `fn` becomes a
// method when it sits inside an `impl` or `trait` body.

use super::{Header, HeaderRole};
use crate::extractors::base::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

static FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:pub(?:\s*\([^)]*\))?\s+)?(?:(?:default|const|async|unsafe)\s+)*(?:extern\s+(?:"[^"]*"\s+)?)?fn\s+([A-Za-z_]\w*)\s*(?:<.*?>)?\s*\(([^)]*)"#,
    )
    .unwrap()
});

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:pub(?:\s*\([^)]*\))?\s+)?(?:unsafe\s+)?(?:auto\s+)?(struct|enum|union|trait)\s+([A-Za-z_]\w*)",
    )
    .unwrap()
});

static IMPL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:unsafe\s+)?impl\b(?:\s*<.*?>)?\s+(?:.*?\s+for\s+)?&?(?:'\w+\s+)?(?:mut\s+)?(?:\w+::)*([A-Za-z_]\w*)",
    )
    .unwrap()
});

static SELF_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:&\s*(?:'\w+\s+)?)?(?:mut\s+)?self\b").unwrap());

pub(super) fn match_header(line: &str) -> Option<Header> {
    if let Some(caps) = TYPE_RE.captures(line) {
        let kind = match &caps[1] {
            "trait" => BlockKind::Interface,
            _ => BlockKind::Class,
        };
        return Some(Header::new(&caps[2], HeaderRole::Type(kind)));
    }

    if let Some(caps) = IMPL_RE.captures(line) {
        return Some(Header::new(&caps[1], HeaderRole::Type(BlockKind::Class)));
    }

    let caps = FN_RE.captures(line)?;
    Some(Header::new(
        &caps[1],
        HeaderRole::Function {
            receiver: SELF_PARAM_RE.is_match(&caps[2]),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_and_qualified_functions() {
        for (line, name) in [
            ("fn calc_base_fee(parent: &Header) -> u64 {", "calc_base_fee"),
            ("pub fn verify_eip1559_header(parent: &Header) -> Result<(), Error> {", "verify_eip1559_header"),
            ("pub(crate) async fn fetch<T: Into<String>>(url: T) {", "fetch"),
            ("pub const unsafe fn raw() -> *const u8 {", "raw"),
            ("extern \"C\" fn callback(x: i32) {", "callback"),
        ] {
            let header = match_header(line).unwrap_or_else(|| panic!("no match for {:?}", line));
            assert_eq!(header.name, name);
            assert_eq!(header.role, HeaderRole::Function { receiver: false });
        }
    }

    #[test]
    fn test_self_parameter_is_receiver() {
        for line in [
            "    pub fn base_fee(&self) -> u64 {",
            "    fn set(&mut self, v: u64) {",
            "    fn into_inner(self) -> u64 {",
            "    fn get<'a>(&'a self) -> &'a u64 {",
        ] {
            let header = match_header(line).unwrap();
            assert_eq!(header.role, HeaderRole::Function { receiver: true }, "{:?}", line);
        }
        let header = match_header("    fn new(selfish: bool) -> Self {").unwrap();
        assert_eq!(header.role, HeaderRole::Function { receiver: false });
    }

    #[test]
    fn test_type_and_impl_headers() {
        let header = match_header("pub struct BlobSidecar {").unwrap();
        assert_eq!(header.role, HeaderRole::Type(BlockKind::Class));
        let header = match_header("pub trait FeeMarket {").unwrap();
        assert_eq!(header.role, HeaderRole::Type(BlockKind::Interface));

        for (line, name) in [
            ("impl BaseFeeCalculator {", "BaseFeeCalculator"),
            ("impl<T: Clone> FeeMarket for Wrapper<T> {", "Wrapper"),
            ("impl fmt::Display for eip4844::BlobTx {", "BlobTx"),
            ("unsafe impl Send for Pool {}", "Pool"),
        ] {
            let header = match_header(line).unwrap_or_else(|| panic!("no match for {:?}", line));
            assert_eq!(header.name, name, "line {:?}", line);
            assert_eq!(header.role, HeaderRole::Type(BlockKind::Class));
        }
    }

    #[test]
    fn test_non_headers() {
        assert!(match_header("let f = |x| x + 1;").is_none());
        assert!(match_header("    // fn commented() {}").is_none());
        assert!(match_header("use std::fmt;").is_none());
    }
}
