//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the filter
//! runner. It includes the file entries produced by the file tree
//! collaborator, the run configuration entries held by the registry, and the
//! lightweight projections used for interactive display.
//!
//! 此模块定义了整个过滤运行器中使用的核心数据结构。
//! 它包括文件树协作者产生的文件条目、注册表持有的运行配置条目，
//! 以及用于交互式显示的轻量级投影。

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mode a resolved configuration is dispatched in.
/// 已解析配置的调度模式。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RunMode {
    /// Launch the configuration normally.
    /// 正常启动配置。
    Run,
    /// Launch the configuration waiting for a debugger to attach.
    /// 启动配置并等待调试器附加。
    Debug,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Run => write!(f, "Run"),
            RunMode::Debug => write!(f, "Debug"),
        }
    }
}

/// A single entry of the project file tree, as supplied by the file-tree
/// collaborator. Read-only to the pipeline.
///
/// 项目文件树中的单个条目，由文件树协作者提供。对流水线只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The full path of the entry. Used as the deduplication key.
    /// 条目的完整路径。用作去重键。
    pub path: String,
    /// Whether the entry is a directory.
    /// 条目是否为目录。
    pub is_directory: bool,
    /// The declared file type, e.g. the lower-cased extension for an
    /// OS-backed tree. Empty for directories.
    /// 声明的文件类型，例如基于操作系统的树的小写扩展名。目录为空。
    pub type_tag: String,
}

impl FileEntry {
    pub fn file(path: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
            type_tag: type_tag.into(),
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
            type_tag: String::new(),
        }
    }

    /// The base name of the entry: the component after the last path
    /// separator.
    pub fn name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str())
    }
}

/// An opaque reference to one entry of the configuration registry.
/// A handle obtained as "the original" is never mutated by the pipeline;
/// every mutation happens on a freshly registered clone.
///
/// 对配置注册表中某个条目的不透明引用。
/// 作为“原始配置”获得的句柄永远不会被流水线修改；
/// 所有修改都发生在新注册的克隆上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationHandle(usize);

impl ConfigurationHandle {
    /// Mints a handle for a registry slot. Only registry implementations
    /// create handles; the pipeline treats them as opaque.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A lightweight, read-only projection of a registry entry, used for
/// interactive display and the `list` command.
///
/// 注册表条目的轻量级只读投影，用于交互式显示和 `list` 命令。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationDescriptor {
    /// The display name of the configuration.
    /// 配置的显示名称。
    pub name: String,
    /// The registry's type classification: the portion of the structured
    /// identifier preceding the first `.`.
    /// 注册表的类型分类：结构化标识符中第一个 `.` 之前的部分。
    pub capability_tag: String,
}

/// A run configuration entry as it lives in the registry. Loaded from the
/// project's `RunConfigurations.toml`; clones composed by the pipeline are
/// registered as additional entries of this shape.
///
/// 注册表中的运行配置条目。从项目的 `RunConfigurations.toml` 加载；
/// 流水线组合出的克隆会作为同样形态的附加条目注册。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigurationData {
    /// The structured identifier, `<TypePrefix>.<name>`. The prefix is the
    /// registry's type classification; the remainder is the display name.
    /// 结构化标识符，格式为 `<TypePrefix>.<name>`。
    /// 前缀是注册表的类型分类；其余部分是显示名称。
    pub id: String,
    /// The command line launched when this configuration is dispatched.
    /// 调度此配置时启动的命令行。
    pub command: String,
    /// The VM parameter string. The pipeline merges the filter expression
    /// into a clone's copy of this field.
    /// VM 参数字符串。流水线将过滤表达式合并到克隆副本的此字段中。
    #[serde(default)]
    pub vm_parameters: String,
    /// Optional working directory the command is launched in. Supports `~`.
    /// 启动命令的可选工作目录。支持 `~`。
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Optional module binding, part of the configuration's structured
    /// identity.
    /// 可选的模块绑定，属于配置结构化标识的一部分。
    #[serde(default)]
    pub module: Option<String>,
    /// Commands executed before the configuration itself, in order. A plain
    /// registry clone does not carry these; the cloner copies them
    /// explicitly.
    /// 在配置本身之前按顺序执行的命令。普通的注册表克隆不包含它们；
    /// 克隆器会显式复制。
    #[serde(default)]
    pub before_run: Vec<String>,
    /// Optional package identity field.
    /// 可选的包标识字段。
    #[serde(default)]
    pub package: Option<String>,
    /// Optional test class identity field.
    /// 可选的测试类标识字段。
    #[serde(default)]
    pub test_class: Option<String>,
    /// Optional test method identity field.
    /// 可选的测试方法标识字段。
    #[serde(default)]
    pub test_method: Option<String>,
}

impl ConfigurationData {
    /// The display name: the portion of the identifier after the first `.`.
    pub fn name(&self) -> &str {
        match self.id.split_once('.') {
            Some((_, name)) => name,
            None => self.id.as_str(),
        }
    }

    /// The type classification: the portion of the identifier before the
    /// first `.`. Empty when the identifier carries no prefix.
    pub fn type_tag(&self) -> &str {
        match self.id.split_once('.') {
            Some((tag, _)) => tag,
            None => "",
        }
    }

    pub fn descriptor(&self) -> ConfigurationDescriptor {
        ConfigurationDescriptor {
            name: self.name().to_string(),
            capability_tag: self.type_tag().to_string(),
        }
    }
}

impl Default for ConfigurationData {
    fn default() -> Self {
        Self {
            id: "JUnit.unknown".to_string(),
            command: String::new(),
            vm_parameters: String::new(),
            working_dir: None,
            module: None,
            before_run: vec![],
            package: None,
            test_class: None,
            test_method: None,
        }
    }
}
