//! # VM Parameter Merger Module / VM 参数合并模块
//!
//! Idempotently upserts the managed `-Dtests.to.run=` token into an
//! arbitrary existing VM parameter string. The merger maintains the
//! invariant that at most one managed occurrence exists after any
//! application, so applying it twice with the same expression is a no-op.
//!
//! 将受管理的 `-Dtests.to.run=` 标记幂等地插入或更新到任意现有的 VM 参数字符串中。
//! 合并器维护这样一个不变量：任何一次应用之后至多存在一个受管理的标记，
//! 因此用相同表达式应用两次不会产生变化。

/// The managed parameter flag, byte-for-byte. The expression is appended
/// directly after the `=`.
/// 受管理的参数标志，逐字节精确。表达式直接附加在 `=` 之后。
pub const TESTS_TO_RUN_FLAG: &str = "-Dtests.to.run=";

/// Merges the filter expression into the existing parameter string.
///
/// A blank existing string yields exactly `-Dtests.to.run=<expression>`.
/// Otherwise any previous managed token is removed, the new token is
/// appended at the end, runs of whitespace collapse to a single space and
/// the result carries no leading or trailing whitespace.
///
/// 将过滤表达式合并到现有参数字符串中。
///
/// 空白的现有字符串恰好产生 `-Dtests.to.run=<表达式>`。
/// 否则会移除之前的受管理标记，将新标记附加到末尾，
/// 连续的空白折叠为单个空格，结果不含首尾空白。
pub fn merge_vm_parameters(existing: &str, expression: &str) -> String {
    let managed = format!("{}{}", TESTS_TO_RUN_FLAG, expression);

    if existing.trim().is_empty() {
        return managed;
    }

    // Tokenwise pass: drops any previous managed occurrence and normalizes
    // whitespace in the same step.
    let mut tokens: Vec<&str> = existing
        .split_whitespace()
        .filter(|token| !token.starts_with(TESTS_TO_RUN_FLAG))
        .collect();
    tokens.push(&managed);
    tokens.join(" ")
}
