//! # Filter Runner Library / Filter Runner 库
//!
//! This library provides the core functionality for the Filter Runner tool,
//! which turns a selection of XML test files into a runnable execution
//! configuration: it derives a `-Dtests.to.run=` filter expression from the
//! selection, resolves a test-capable run configuration, clones it, injects
//! the filter into the clone's VM parameters and dispatches it — without
//! mutating the configuration the user already had selected.
//!
//! 此库为 Filter Runner 工具提供核心功能，
//! 它将选中的 XML 测试文件转换为可运行的执行配置：
//! 从选择中推导出 `-Dtests.to.run=` 过滤表达式，解析支持测试的运行配置，
//! 克隆该配置，将过滤器注入克隆的 VM 参数并调度执行 —— 而不会改动用户已选择的原始配置。
//!
//! ## Modules / 模块
//!
//! - `core` - Scanning, filter formatting, parameter merging and the
//!   resolve/clone/dispatch pipeline
//! - `infra` - Infrastructure services: file system tree, project registry,
//!   selection dialog, process dispatch
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 扫描、过滤表达式格式化、参数合并以及解析/克隆/调度流水线
//! - `infra` - 基础设施服务：文件系统树、项目注册表、选择对话框、进程调度
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;

// Re-export commonly used items
pub use self::core::filter;
pub use self::core::invoker;
pub use self::core::models;
pub use self::core::params;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
