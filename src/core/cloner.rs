//! # Configuration Cloner Module / 配置克隆模块
//!
//! Produces an isolated working copy of a resolved configuration. A plain
//! registry clone would drop the before-run task list and the richer
//! structured identity fields, so the cloner composes the copy field by
//! field from an owned snapshot of the original. The original entry is
//! never touched.
//!
//! 为已解析的配置生成隔离的工作副本。普通的注册表克隆会丢弃
//! 运行前任务列表和更丰富的结构化标识字段，
//! 因此克隆器基于原始配置的快照逐字段组合副本。原始条目永远不会被改动。

use crate::core::models::{ConfigurationData, ConfigurationHandle};
use crate::core::resolver::Registry;

/// Clones the configuration behind `original` and registers the clone as a
/// new entry. Returns the clone's handle together with its composed data.
///
/// The clone carries a descriptive display name,
/// `"<original name>: <filter expression>"`, under the original's type
/// prefix, and copies explicitly:
/// - the before-run task list,
/// - the module binding and working directory,
/// - the package/class/method identity fields,
/// - the command and the (not yet merged) VM parameter string.
///
/// 克隆 `original` 背后的配置并将克隆注册为新条目。
/// 返回克隆的句柄及其组合好的数据。
///
/// 克隆携带描述性的显示名称 `"<原名称>: <过滤表达式>"`（保留原类型前缀），
/// 并显式复制：运行前任务列表、模块绑定与工作目录、
/// 包/类/方法标识字段、命令以及（尚未合并的）VM 参数字符串。
pub fn clone_configuration(
    registry: &mut dyn Registry,
    original: ConfigurationHandle,
    expression: &str,
) -> (ConfigurationHandle, ConfigurationData) {
    let source = registry.data(original);

    let clone = ConfigurationData {
        id: format!("{}.{}: {}", source.type_tag(), source.name(), expression),
        command: source.command.clone(),
        vm_parameters: source.vm_parameters.clone(),
        working_dir: source.working_dir.clone(),
        module: source.module.clone(),
        before_run: source.before_run.clone(),
        package: source.package.clone(),
        test_class: source.test_class.clone(),
        test_method: source.test_method.clone(),
    };

    let handle = registry.create(clone.clone());
    (handle, clone)
}
