//! Delimiter-counting extractor
//!
//! Handles languages whose bodies are bounded by `{` / `}`:
//! - Go (functions, methods with receivers, struct/interface types)
//! - Rust (free functions, `impl`/`trait` members, struct/enum/trait types)
//! - C# and Java (classes, interfaces, records, enums and their methods)
//! - JavaScript/TypeScript (functions, arrow functions, classes and members)
//!
//! Each language contributes a header matcher; the span search is shared.
//! Braces inside string or comment literals are counted like structural ones,
//! so adversarial input can misplace a span boundary.

mod c_family;
mod go;
mod javascript;
mod rust;

use crate::extractors::base::{BaseExtractor, BlockKind, CodeBlock, ExtractorStrategy};
use crate::language::Language;
use tracing::trace;

/// Maximum number of lines searched past a header for the opening brace
/// (wrapped parameter lists, `where` clauses, Allman-style braces)
const OPENER_LOOKAHEAD: usize = 12;

/// A recognized block header on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub name: String,
    pub role: HeaderRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderRole {
    /// Type declaration opening a member body
    Type(BlockKind),
    /// Function header; `receiver` is set when the header itself names the
    /// receiver (Go receiver clause, Rust `self` parameter)
    Function { receiver: bool },
    /// Header that only counts inside a type body (JavaScript class members)
    Member,
}

impl Header {
    pub(crate) fn new(name: &str, role: HeaderRole) -> Self {
        Self {
            name: name.to_string(),
            role,
        }
    }
}

type HeaderMatcher = fn(&str) -> Option<Header>;

/// Block extractor for brace-delimited languages
pub struct DelimitedExtractor {
    language: Language,
    match_header: HeaderMatcher,
}

impl DelimitedExtractor {
    /// Build the extractor for `language`, or `None` if it is not brace-delimited
    pub fn for_language(language: &Language) -> Option<Self> {
        let match_header: HeaderMatcher = match language {
            Language::Go => go::match_header,
            Language::Rust => rust::match_header,
            Language::CSharp | Language::Java => c_family::match_header,
            Language::JavaScript => javascript::match_header,
            Language::Python | Language::Other(_) => return None,
        };
        Some(Self {
            language: language.clone(),
            match_header,
        })
    }
}

impl ExtractorStrategy for DelimitedExtractor {
    fn language(&self) -> &str {
        self.language.as_str()
    }

    fn extract(&self, content: &str) -> Vec<CodeBlock> {
        let base = BaseExtractor::new(self.language.as_str(), content);
        let mut blocks = Vec::new();
        // Last lines (zero-based) of type bodies that enclose the current line
        let mut open_types: Vec<usize> = Vec::new();

        for index in 0..base.total_lines() {
            open_types.retain(|&end| end >= index);

            let line = base.line(index);
            let Some(header) = (self.match_header)(line) else {
                continue;
            };

            let enclosed = !open_types.is_empty();
            let kind = match header.role {
                HeaderRole::Type(kind) => kind,
                HeaderRole::Function { receiver } if receiver || enclosed => BlockKind::Method,
                HeaderRole::Function { .. } => BlockKind::Function,
                HeaderRole::Member if enclosed => BlockKind::Method,
                HeaderRole::Member => continue,
            };

            let Some(end) = find_block_end(&base, index, self.match_header) else {
                trace!(
                    "Header '{}' at line {} has no body, skipping",
                    header.name,
                    index + 1
                );
                continue;
            };

            if kind.is_type() {
                open_types.push(end);
            }

            blocks.push(base.create_block(
                header.name,
                kind,
                index,
                end,
                line.trim().to_string(),
                None,
            ));
        }

        blocks
    }
}

/// Find the zero-based line on which the body opened by the header at `header` closes
///
/// Returns `None` when the header has no body (see [`find_opener`]). When the
/// body never closes, the block runs to the last line.
fn find_block_end(
    base: &BaseExtractor,
    header: usize,
    match_header: HeaderMatcher,
) -> Option<usize> {
    let total = base.total_lines();
    let opener = find_opener(base, header, match_header)?;

    let mut balance: i64 = 0;
    for index in header..total {
        balance += brace_delta(base.line(index));
        if index >= opener && balance <= 0 {
            return Some(index);
        }
    }

    trace!(
        "Block opened at line {} never closes, extending to line {}",
        header + 1,
        total
    );
    Some(total - 1)
}

/// Locate the line holding the body's opening brace
///
/// The search gives up at a line ending in `;`, and past the header line also
/// at a blank line, at another header, or at a line that closes a brace
/// before opening one. Those mark a bodiless declaration or a call statement.
fn find_opener(base: &BaseExtractor, header: usize, match_header: HeaderMatcher) -> Option<usize> {
    let total = base.total_lines();
    let last = (header + OPENER_LOOKAHEAD).min(total.saturating_sub(1));

    for index in header..=last {
        let line = base.line(index);
        if index > header
            && (line.trim().is_empty() || closes_first(line) || match_header(line).is_some())
        {
            return None;
        }
        if line.contains('{') {
            return Some(index);
        }
        if line.trim_end().ends_with(';') {
            return None;
        }
    }
    None
}

/// Whether a `}` appears on `line` before any `{`
fn closes_first(line: &str) -> bool {
    match (line.find('}'), line.find('{')) {
        (Some(close), Some(open)) => close < open,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Open minus close braces on one line
fn brace_delta(line: &str) -> i64 {
    line.bytes().fold(0, |acc, b| match b {
        b'{' => acc + 1,
        b'}' => acc - 1,
        _ => acc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(language: &str, code: &str) -> Vec<CodeBlock> {
        DelimitedExtractor::for_language(&Language::from_tag(language))
            .expect("brace-delimited language")
            .extract(code)
    }

    fn names_and_kinds(blocks: &[CodeBlock]) -> Vec<(&str, BlockKind)> {
        blocks.iter().map(|b| (b.name.as_str(), b.kind)).collect()
    }

    #[test]
    fn test_python_and_unknown_have_no_delimited_extractor() {
        assert!(DelimitedExtractor::for_language(&Language::Python).is_none());
        assert!(DelimitedExtractor::for_language(&Language::from_tag("cobol")).is_none());
    }

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("func A() {"), 1);
        assert_eq!(brace_delta("}"), -1);
        assert_eq!(brace_delta("if x { y() } else {"), 1);
        assert_eq!(brace_delta("no braces"), 0);
    }

    #[test]
    fn test_go_free_functions_spans() {
        let code = "package misc\n\
\n\
// CalcBaseFee calculates the basefee of the header.\n\
func CalcBaseFee(config *params.ChainConfig, parent *types.Header) *big.Int {\n\
\tif !config.IsLondon(parent.Number) {\n\
\t\treturn new(big.Int).SetUint64(params.InitialBaseFee)\n\
\t}\n\
\treturn nil\n\
}\n\
\n\
func ValidateGasLimit(parentGasLimit, headerGasLimit uint64) error {\n\
\treturn nil\n\
}\n";
        let blocks = extract("go", code);
        assert_eq!(
            names_and_kinds(&blocks),
            vec![
                ("CalcBaseFee", BlockKind::Function),
                ("ValidateGasLimit", BlockKind::Function)
            ]
        );
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (4, 9));
        assert_eq!((blocks[1].start_line, blocks[1].end_line), (11, 13));
        assert!(blocks[0].content.starts_with("func CalcBaseFee"));
        assert!(blocks[0].content.ends_with('}'));
        assert!(blocks.iter().all(|b| b.docstring.is_none()));
    }

    #[test]
    fn test_go_receiver_makes_method() {
        let code = "func (c *BlobPool) Add(tx *types.Transaction) error {\n\treturn nil\n}\n";
        let blocks = extract("go", code);
        assert_eq!(names_and_kinds(&blocks), vec![("Add", BlockKind::Method)]);
        assert_eq!(
            blocks[0].signature,
            "func (c *BlobPool) Add(tx *types.Transaction) error {"
        );
    }

    #[test]
    fn test_single_line_body_ends_on_header() {
        let blocks = extract("go", "func DoNothing() {}\nfunc Other() { return }\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 1));
        assert_eq!((blocks[1].start_line, blocks[1].end_line), (2, 2));
    }

    #[test]
    fn test_unclosed_block_runs_to_end_of_input() {
        let code = "func Broken() {\n\tif x {\n\t\treturn\n\t}\n";
        let blocks = extract("go", code);
        assert_eq!(blocks.len(), 1);
        // split on '\n' leaves a final empty line
        assert_eq!(blocks[0].end_line, 5);
    }

    #[test]
    fn test_braces_in_strings_are_counted() {
        // Known imprecision: the '}' inside the literal closes the body early.
        let code = "func Fmt() string {\n\treturn \"}\"\n\tx := 1\n}\n";
        let blocks = extract("go", code);
        assert_eq!(blocks[0].end_line, 2);
    }

    #[test]
    fn test_nested_method_inside_class_span() {
        let code = r#"namespace Nethermind.Core
{
    public class BaseFeeCalculator : IBaseFeeCalculator
    {
        public UInt256 Calculate(BlockHeader parent, IEip1559Spec spec)
        {
            UInt256 expectedBaseFee = parent.BaseFeePerGas;
            return expectedBaseFee;
        }
    }
}"#;
        let blocks = extract("csharp", code);
        assert_eq!(
            names_and_kinds(&blocks),
            vec![
                ("BaseFeeCalculator", BlockKind::Class),
                ("Calculate", BlockKind::Method)
            ]
        );
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (3, 10));
        assert_eq!((blocks[1].start_line, blocks[1].end_line), (5, 9));
        assert!(blocks[0].contains(&blocks[1]));
    }

    #[test]
    fn test_declaration_without_body_is_skipped() {
        let code = "public interface IBaseFeeCalculator\n{\n    UInt256 Calculate(BlockHeader parent, IEip1559Spec spec);\n}\n";
        let blocks = extract("cs", code);
        assert_eq!(
            names_and_kinds(&blocks),
            vec![("IBaseFeeCalculator", BlockKind::Interface)]
        );
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 4));
    }

    #[test]
    fn test_closes_first() {
        assert!(closes_first("  }"));
        assert!(closes_first("} else {"));
        assert!(!closes_first("{"));
        assert!(!closes_first("    long gasLimit)"));
        assert!(!closes_first("if x { y() }"));
    }

    #[test]
    fn test_go_function_without_body_is_skipped() {
        // Body implemented in assembly
        let code = "package bn256\n\nfunc gfpMul(c, a, b *gfP)\n\nfunc Other() {\n\treturn\n}\n";
        let blocks = extract("go", code);
        assert_eq!(names_and_kinds(&blocks), vec![("Other", BlockKind::Function)]);
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (5, 7));
    }

    #[test]
    fn test_go_bodiless_function_before_adjacent_header() {
        let code = "func gfpNeg(c, a *gfP)\nfunc gfpAdd(c, a, b *gfP)\nfunc Other() {\n}\n";
        let blocks = extract("go", code);
        assert_eq!(names_and_kinds(&blocks), vec![("Other", BlockKind::Function)]);
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (3, 4));
    }

    #[test]
    fn test_go_wrapped_parameters_still_find_opener() {
        let code = "func VerifyEIP4844Header(\n\tparent *types.Header,\n\theader *types.Header,\n) error {\n\treturn nil\n}\n";
        let blocks = extract("go", code);
        assert_eq!(names_and_kinds(&blocks), vec![("VerifyEIP4844Header", BlockKind::Function)]);
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 6));
    }

    #[test]
    fn test_semicolonless_class_body_has_no_call_blocks() {
        let code = "class Pool {\n  add(tx) {\n    this.txs.push(tx)\n    notify(tx)\n  }\n\n  remove(tx) {\n    this.txs.delete(tx)\n  }\n}\n";
        let blocks = extract("ts", code);
        assert_eq!(
            names_and_kinds(&blocks),
            vec![
                ("Pool", BlockKind::Class),
                ("add", BlockKind::Method),
                ("remove", BlockKind::Method)
            ]
        );
        assert_eq!((blocks[1].start_line, blocks[1].end_line), (2, 5));
        assert_eq!((blocks[2].start_line, blocks[2].end_line), (7, 9));
        assert!(blocks.iter().all(|b| b.name != "notify"));
    }

    #[test]
    fn test_wrapped_parameter_list_finds_opener() {
        let code = "public static long ValidateGasLimit(\n    long parentGasLimit,\n    long gasLimit)\n{\n    return gasLimit;\n}\n";
        let blocks = extract("java", code);
        assert_eq!(names_and_kinds(&blocks), vec![("ValidateGasLimit", BlockKind::Function)]);
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 6));
    }
}
