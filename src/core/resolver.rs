//! # Configuration Resolver Module / 配置解析模块
//!
//! Obtains a configuration handle eligible for filter injection. The
//! decision order: a dedicated plugin-owned configuration by well-known
//! name, then the registry's currently-selected configuration, and finally
//! an interactive selection over all registered configurations. Eligibility
//! is a capability predicate over the configuration's type classification,
//! not a chain of type tests, so new configuration kinds never touch the
//! control flow here.
//!
//! 获得一个可进行过滤器注入的配置句柄。决策顺序：
//! 先按知名名称查找专用的插件自有配置，然后是注册表当前选中的配置，
//! 最后在所有已注册配置上进行交互式选择。
//! 资格判定是针对配置类型分类的能力谓词，而非一连串类型测试，
//! 因此新的配置种类不会触及这里的控制流。

use crate::core::error::InvocationError;
use crate::core::models::{ConfigurationData, ConfigurationDescriptor, ConfigurationHandle};

/// The well-known name of the plugin-owned configuration. When present in
/// the registry it is already a disposable working copy dedicated to this
/// tool, so no clone is taken later.
///
/// 插件自有配置的知名名称。当它存在于注册表中时，
/// 它已经是专用于本工具的可任意修改的工作副本，因此之后无需克隆。
pub const PLUGIN_RUN_CONFIGURATION_NAME: &str = "Filter Runner";

/// The host-owned configuration registry, injected into the pipeline. The
/// TOML-backed implementation lives in `infra::registry`; tests substitute
/// in-memory fakes.
///
/// 宿主拥有的配置注册表，注入到流水线中。
/// 基于 TOML 的实现位于 `infra::registry`；测试中用内存伪实现替代。
pub trait Registry {
    /// All registered configurations.
    fn list(&self) -> Vec<ConfigurationHandle>;
    /// Looks a configuration up by display name.
    fn find(&self, name: &str) -> Option<ConfigurationHandle>;
    /// An owned snapshot of the entry behind the handle. Snapshots keep the
    /// pipeline from ever holding a mutable alias of an original entry.
    fn data(&self, handle: ConfigurationHandle) -> ConfigurationData;
    /// Registers a new entry and returns its handle.
    fn create(&mut self, data: ConfigurationData) -> ConfigurationHandle;
    /// The currently-selected configuration, if any.
    fn selected(&self) -> Option<ConfigurationHandle>;
    /// Informs the registry which configuration is now selected.
    fn set_selected(&mut self, handle: ConfigurationHandle);
    /// Replaces the VM parameter string of the entry behind the handle.
    /// Only ever called for entries this tool owns: the dedicated
    /// configuration and freshly registered clones.
    fn set_vm_parameters(&mut self, handle: ConfigurationHandle, parameters: String);
    /// Whether the entry's type classification supports test-filter
    /// injection.
    fn is_test_capable(&self, handle: ConfigurationHandle) -> bool;
}

/// Capability of a configuration with respect to filter injection.
/// 配置相对于过滤器注入的能力。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The configuration supports filter injection.
    Supported(ConfigurationHandle),
    /// It does not; resolving it is a terminal error.
    Unsupported,
}

pub fn capability_of(registry: &dyn Registry, handle: ConfigurationHandle) -> Capability {
    if registry.is_test_capable(handle) {
        Capability::Supported(handle)
    } else {
        Capability::Unsupported
    }
}

/// The synchronous face of the selection dialog: presents the candidates
/// and returns the user's single choice, or `SelectionCancelled` when the
/// dialog is dismissed. Implementations that cannot present a dialog return
/// `NoRunConfigurationSelected` instead.
///
/// 选择对话框的同步界面：展示候选项并返回用户的单一选择，
/// 对话框被关闭时返回 `SelectionCancelled`。
/// 无法展示对话框的实现改为返回 `NoRunConfigurationSelected`。
pub trait SelectConfiguration {
    fn select(
        &self,
        candidates: &[ConfigurationDescriptor],
    ) -> Result<ConfigurationDescriptor, InvocationError>;
}

/// A successfully resolved configuration.
/// 成功解析的配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The dedicated plugin-owned configuration: already a disposable
    /// working copy, mutated in place without cloning.
    Dedicated(ConfigurationHandle),
    /// A user-owned configuration: must be cloned before any mutation.
    Shared(ConfigurationHandle),
}

impl Resolution {
    pub fn handle(&self) -> ConfigurationHandle {
        match self {
            Resolution::Dedicated(handle) | Resolution::Shared(handle) => *handle,
        }
    }
}

/// Resolves a configuration eligible for filter injection.
///
/// On success the registry is informed of the new selection, keeping the
/// host's notion of "current configuration" consistent. On any error no
/// registry state has changed.
///
/// 解析一个可进行过滤器注入的配置。
///
/// 成功时会通知注册表新的选中项，使宿主的“当前配置”概念保持一致。
/// 任何错误情况下注册表状态都不会改变。
pub fn resolve_configuration(
    registry: &mut dyn Registry,
    selector: &dyn SelectConfiguration,
) -> Result<Resolution, InvocationError> {
    let resolution = if let Some(dedicated) = registry.find(PLUGIN_RUN_CONFIGURATION_NAME) {
        match capability_of(registry, dedicated) {
            Capability::Supported(handle) => Resolution::Dedicated(handle),
            Capability::Unsupported => return Err(InvocationError::UnsupportedConfigurationType),
        }
    } else if let Some(selected) = registry.selected() {
        match capability_of(registry, selected) {
            Capability::Supported(handle) => Resolution::Shared(handle),
            Capability::Unsupported => return Err(InvocationError::UnsupportedConfigurationType),
        }
    } else {
        Resolution::Shared(select_interactively(registry, selector)?)
    };

    registry.set_selected(resolution.handle());
    Ok(resolution)
}

/// Drives the interactive selection over all registered configurations and
/// validates the user's choice the same way a pre-selected configuration is
/// validated.
fn select_interactively(
    registry: &mut dyn Registry,
    selector: &dyn SelectConfiguration,
) -> Result<ConfigurationHandle, InvocationError> {
    let all = registry.list();
    if all.is_empty() {
        return Err(InvocationError::NoConfigurationsAvailable);
    }

    let candidates: Vec<ConfigurationDescriptor> = all
        .iter()
        .map(|handle| registry.data(*handle).descriptor())
        .collect();

    let chosen = selector.select(&candidates)?;

    // The choice may have vanished from the registry between listing and
    // lookup; that funnels into the same invalid-configuration error as a
    // wrong-typed choice.
    let handle = registry
        .find(&chosen.name)
        .ok_or(InvocationError::UnsupportedConfigurationType)?;

    match capability_of(registry, handle) {
        Capability::Supported(handle) => Ok(handle),
        Capability::Unsupported => Err(InvocationError::UnsupportedConfigurationType),
    }
}
