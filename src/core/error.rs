//! # Invocation Errors / 调用错误
//!
//! The terminal error taxonomy of one pipeline invocation. Every variant
//! maps 1:1 to a literal user-facing message; none of them is retried
//! internally, and no error path leaves a partial state change behind.
//!
//! 单次流水线调用的终止性错误分类。每个变体与一条字面的用户消息一一对应；
//! 它们都不会在内部重试，任何错误路径都不会留下部分状态变更。

use std::fmt;

/// Shown when the invocation runs outside a project context.
pub const PROJECT_NOT_FOUND: &str = "Project not found.";

/// Shown when the resolved configuration does not support filter injection.
pub const INVALID_RUN_CONFIGURATION: &str = "Run Configuration not supported.";

/// Shown when the registry holds no configurations at all.
pub const CONFIGURATION_NOT_FOUND: &str = "Run Configuration not found.";

/// Shown when no configuration is selected and no dialog can be presented.
pub const NO_RUN_CONFIGURATION_SELECTED: &str =
    "No Run Configuration selected.\nPlease create a Run Configuration first and select it.";

/// Shown when the user dismisses the selection dialog without choosing.
pub const SELECTION_CANCELLED: &str = "Selection cancelled.";

/// Terminal failure of a single test invocation.
///
/// 单次测试调用的终止性失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationError {
    /// No project context: the invocation could not locate the project's
    /// configuration registry.
    NoProjectContext,
    /// No configuration is selected and interactive selection is not
    /// available in the current context.
    NoRunConfigurationSelected,
    /// The resolved configuration's type does not satisfy the
    /// test-execution capability.
    UnsupportedConfigurationType,
    /// The registry holds no configurations to choose from.
    NoConfigurationsAvailable,
    /// The user dismissed the selection dialog without choosing.
    SelectionCancelled,
}

impl InvocationError {
    /// The exact user-facing dialog message for this error.
    pub fn dialog_message(&self) -> &'static str {
        match self {
            InvocationError::NoProjectContext => PROJECT_NOT_FOUND,
            InvocationError::NoRunConfigurationSelected => NO_RUN_CONFIGURATION_SELECTED,
            InvocationError::UnsupportedConfigurationType => INVALID_RUN_CONFIGURATION,
            InvocationError::NoConfigurationsAvailable => CONFIGURATION_NOT_FOUND,
            InvocationError::SelectionCancelled => SELECTION_CANCELLED,
        }
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dialog_message())
    }
}

impl std::error::Error for InvocationError {}
