//! # Project Registry Module / 项目注册表模块
//!
//! The TOML-backed configuration registry. The project's
//! `RunConfigurations.toml` declares the registered run configurations, the
//! currently-selected one, and the project-level knobs (test file patterns,
//! test-capable types, output language). The registry itself is in-memory:
//! entries created during an invocation (clones) live no longer than the
//! invocation.
//!
//! 基于 TOML 的配置注册表。项目的 `RunConfigurations.toml` 声明已注册的运行配置、
//! 当前选中的配置以及项目级设置（测试文件模式、支持测试的类型、输出语言）。
//! 注册表本身驻留内存：调用期间创建的条目（克隆）的生命周期不会超过该次调用。

use crate::core::error::InvocationError;
use crate::core::models::{ConfigurationData, ConfigurationHandle};
use crate::core::resolver::Registry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the project configuration file.
/// 项目配置文件的默认名称。
pub const DEFAULT_CONFIG_FILE_NAME: &str = "RunConfigurations.toml";

/// The project configuration, loaded from `RunConfigurations.toml`.
/// 从 `RunConfigurations.toml` 加载的项目配置。
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Regular expressions a file's path must match (anywhere) to be
    /// recognized as a test file.
    /// 文件路径必须（在任意位置）匹配的正则表达式，才能被识别为测试文件。
    #[serde(default = "default_test_file_patterns")]
    pub test_file_patterns: Vec<String>,

    /// Type classifications that support test-filter injection.
    /// 支持测试过滤器注入的类型分类。
    #[serde(default = "default_test_capable_types")]
    pub test_capable_types: Vec<String>,

    /// Display name of the currently-selected configuration, if any.
    /// 当前选中配置的显示名称（如有）。
    #[serde(default)]
    pub selected: Option<String>,

    /// All registered run configurations.
    /// 所有已注册的运行配置。
    #[serde(default)]
    pub configurations: Vec<ConfigurationData>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_test_file_patterns() -> Vec<String> {
    vec!["Test".to_string(), "IT".to_string()]
}

fn default_test_capable_types() -> Vec<String> {
    vec![
        "JUnit".to_string(),
        "TestNG".to_string(),
        "Maven".to_string(),
    ]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            test_file_patterns: default_test_file_patterns(),
            test_capable_types: default_test_capable_types(),
            selected: None,
            configurations: vec![],
        }
    }
}

/// Locates and parses the project configuration.
///
/// A missing configuration file means the invocation runs outside a project
/// context and surfaces the exact "Project not found." error; a present but
/// malformed file is a plain parse error with file context.
///
/// # Returns
/// The parsed configuration, its canonical path, and the project root.
pub fn load_project(
    project_dir: &Path,
    config_file: &Path,
) -> Result<(ProjectConfig, PathBuf, PathBuf)> {
    let project_root = fs::canonicalize(project_dir)
        .map_err(|_| anyhow::Error::new(InvocationError::NoProjectContext))?;

    let config_path = if config_file.is_absolute() {
        config_file.to_path_buf()
    } else {
        project_root.join(config_file)
    };

    if !config_path.is_file() {
        return Err(anyhow::Error::new(InvocationError::NoProjectContext));
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read configuration: {}", config_path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration: {}", config_path.display()))?;

    Ok((config, config_path, project_root))
}

/// The in-memory registry over the project configuration's entries.
/// 基于项目配置条目的内存注册表。
#[derive(Debug)]
pub struct ProjectRegistry {
    entries: Vec<ConfigurationData>,
    selected: Option<usize>,
    test_capable_types: Vec<String>,
}

impl ProjectRegistry {
    pub fn from_config(config: &ProjectConfig) -> Self {
        let entries = config.configurations.clone();
        // The selected name is resolved once at load time; a stale name
        // simply leaves no selection.
        let selected = config
            .selected
            .as_deref()
            .and_then(|name| entries.iter().position(|entry| entry.name() == name));

        Self {
            entries,
            selected,
            test_capable_types: config.test_capable_types.clone(),
        }
    }
}

impl Registry for ProjectRegistry {
    fn list(&self) -> Vec<ConfigurationHandle> {
        (0..self.entries.len()).map(ConfigurationHandle::from_index).collect()
    }

    fn find(&self, name: &str) -> Option<ConfigurationHandle> {
        self.entries
            .iter()
            .position(|entry| entry.name() == name)
            .map(ConfigurationHandle::from_index)
    }

    fn data(&self, handle: ConfigurationHandle) -> ConfigurationData {
        self.entries[handle.index()].clone()
    }

    fn create(&mut self, data: ConfigurationData) -> ConfigurationHandle {
        self.entries.push(data);
        ConfigurationHandle::from_index(self.entries.len() - 1)
    }

    fn selected(&self) -> Option<ConfigurationHandle> {
        self.selected.map(ConfigurationHandle::from_index)
    }

    fn set_selected(&mut self, handle: ConfigurationHandle) {
        self.selected = Some(handle.index());
    }

    fn set_vm_parameters(&mut self, handle: ConfigurationHandle, parameters: String) {
        self.entries[handle.index()].vm_parameters = parameters;
    }

    fn is_test_capable(&self, handle: ConfigurationHandle) -> bool {
        let tag = self.entries[handle.index()].type_tag();
        self.test_capable_types.iter().any(|capable| capable == tag)
    }
}
