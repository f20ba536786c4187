// Go header matching
//
// func Name(params) ret {            -> function
// func (r *Recv) Name(params) ret {  -> method (receiver clause)
// type Name struct {                 -> class
// type Name interface {              -> interface

use super::{Header, HeaderRole};
use crate::extractors::base::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

static FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*func\s+(?:\(\s*(?:[A-Za-z_]\w*\s+)?\*?\s*([A-Za-z_][\w.]*)(?:\[[^\]]*\])?\s*\)\s*)?([A-Za-z_]\w*)\s*(?:\[[^\]]*\])?\s*\(",
    )
    .unwrap()
});

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*type\s+([A-Za-z_]\w*)(?:\[[^\]]*\])?\s+(struct|interface)\b").unwrap()
});

pub(super) fn match_header(line: &str) -> Option<Header> {
    if let Some(caps) = TYPE_RE.captures(line) {
        let kind = match &caps[2] {
            "interface" => BlockKind::Interface,
            _ => BlockKind::Class,
        };
        return Some(Header::new(&caps[1], HeaderRole::Type(kind)));
    }

    let caps = FUNC_RE.captures(line)?;
    Some(Header::new(
        &caps[2],
        HeaderRole::Function {
            receiver: caps.get(1).is_some(),
        },
    ))
}
