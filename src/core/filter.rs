//! # Test Filter Formatter Module / 测试过滤格式化模块
//!
//! Narrows the scanner's deduplicated entry set down to recognized test
//! files and renders the deterministic filter expression: each qualifying
//! file contributes one `*<basename-without-extension>*` token, tokens are
//! ordered by source path and joined with `,` and no whitespace.
//!
//! 将扫描器去重后的条目集合缩小为可识别的测试文件，并渲染确定性的过滤表达式：
//! 每个符合条件的文件贡献一个 `*<去扩展名的基本名>*` 标记，
//! 标记按源路径排序并用 `,` 连接，不含空白。

use crate::core::models::FileEntry;
use regex::Regex;
use std::collections::BTreeMap;

/// The extension of a structured test document.
/// 结构化测试文档的扩展名。
pub const DEFAULT_EXTENSION: &str = "xml";

/// The extension including its leading separator, as stripped from a
/// qualifying file's base name.
/// 包含前导分隔符的扩展名，从符合条件的文件基本名中剥离。
pub const DOT_DEFAULT_EXTENSION: &str = ".xml";

/// The compiled set of test-file-name patterns. A file's path qualifies
/// when any pattern is found anywhere in it (search, not full match).
/// An empty set qualifies nothing.
///
/// 已编译的测试文件名模式集合。当任一模式能在路径中的任意位置找到时
/// （搜索而非完全匹配），该文件路径即符合条件。空集合不匹配任何文件。
#[derive(Debug)]
pub struct TestFilePatterns {
    patterns: Vec<Regex>,
}

impl TestFilePatterns {
    /// Compiles the configured pattern sources. Fails on the first invalid
    /// pattern so a configuration typo surfaces before any scanning.
    pub fn compile(sources: &[String]) -> Result<Self, regex::Error> {
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }
}

/// Whether the entry is a recognized test file: its declared type is the
/// structured test document extension and its path matches at least one
/// configured pattern.
///
/// 条目是否为可识别的测试文件：其声明类型是结构化测试文档扩展名，
/// 且其路径至少匹配一个已配置的模式。
pub fn is_test_file(entry: &FileEntry, patterns: &TestFilePatterns) -> bool {
    entry.type_tag.eq_ignore_ascii_case(DEFAULT_EXTENSION) && patterns.matches(&entry.path)
}

/// Renders the filter expression for the scanned entry set, or the empty
/// string when no entry qualifies. The input map is keyed by path, so
/// iteration order is the deterministic token order.
///
/// 为已扫描的条目集合渲染过滤表达式，若无条目符合条件则为空字符串。
/// 输入映射以路径为键，因此迭代顺序即为确定性的标记顺序。
pub fn format_filter_expression(
    files: &BTreeMap<String, FileEntry>,
    patterns: &TestFilePatterns,
) -> String {
    files
        .values()
        .filter(|entry| is_test_file(entry, patterns))
        .map(format_test_file_name)
        .collect::<Vec<_>>()
        .join(",")
}

/// One expression token: the base name with the extension (and its leading
/// separator) stripped, wrapped in `*`.
/// Example: `DebitCards_Test.xml` becomes `*DebitCards_Test*`.
fn format_test_file_name(entry: &FileEntry) -> String {
    let name = entry.name();
    let stripped = name.strip_suffix(DOT_DEFAULT_EXTENSION).unwrap_or(name);
    format!("*{}*", stripped)
}
