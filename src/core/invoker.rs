//! # Invocation Pipeline Module / 调用流水线模块
//!
//! Composes one user-triggered invocation out of the pipeline leaves:
//! scan the selection, render the filter expression, resolve a capable
//! configuration, clone it when it is not the dedicated working copy, and
//! merge the expression into the clone's VM parameters. The result is a
//! prepared invocation ready for the dispatcher; the original configuration
//! is left untouched on every path, success or error.
//!
//! 将一次用户触发的调用由流水线的叶子组合而成：
//! 扫描选择、渲染过滤表达式、解析具备能力的配置、
//! 在其并非专用工作副本时进行克隆，并将表达式合并进克隆的 VM 参数。
//! 结果是可供调度器使用的就绪调用；无论成功或出错，原始配置在所有路径上都不被改动。

use crate::core::cloner::clone_configuration;
use crate::core::error::InvocationError;
use crate::core::filter::{format_filter_expression, TestFilePatterns};
use crate::core::models::{ConfigurationData, FileEntry, RunMode};
use crate::core::params::merge_vm_parameters;
use crate::core::resolver::{resolve_configuration, Registry, Resolution, SelectConfiguration};
use crate::core::scanner::{collect_files, FileTree};

/// A resolved, cloned and parameter-merged configuration, paired with the
/// run mode. Owned exclusively by this invocation; its lifetime ends when
/// it is handed to the dispatcher.
///
/// 已解析、已克隆且参数已合并的配置，连同运行模式。
/// 由本次调用独占；在交给调度器后其生命周期即告结束。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInvocation {
    pub configuration: ConfigurationData,
    pub expression: String,
    pub mode: RunMode,
}

/// Outcome of one invocation of the pipeline.
/// 流水线单次调用的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing in the selection qualifies as a test file. The resolver and
    /// the merger were never invoked; no registry state changed.
    /// 选择中没有任何条目符合测试文件条件。解析器和合并器从未被调用；
    /// 注册表状态没有变化。
    NoTestFiles,
    /// A configuration is ready to be dispatched.
    /// 配置已就绪，可供调度。
    Prepared(PreparedInvocation),
}

/// Runs the pipeline for one selection.
///
/// 为一次选择运行流水线。
pub fn invoke(
    tree: &dyn FileTree,
    selection: &[FileEntry],
    patterns: &TestFilePatterns,
    registry: &mut dyn Registry,
    selector: &dyn SelectConfiguration,
    mode: RunMode,
) -> Result<Outcome, InvocationError> {
    let files = collect_files(tree, selection);
    let expression = format_filter_expression(&files, patterns);
    if expression.is_empty() {
        return Ok(Outcome::NoTestFiles);
    }

    let resolution = resolve_configuration(registry, selector)?;

    let configuration = match resolution {
        Resolution::Dedicated(handle) => {
            // Already a disposable working copy dedicated to this tool;
            // merge in place.
            let mut data = registry.data(handle);
            let merged = merge_vm_parameters(&data.vm_parameters, &expression);
            registry.set_vm_parameters(handle, merged.clone());
            data.vm_parameters = merged;
            data
        }
        Resolution::Shared(handle) => {
            // User-owned: clone first, then merge into the clone. The clone
            // is the last registry entry created before dispatch; nothing
            // after this point can fail short of the dispatch itself.
            let (clone_handle, mut clone) = clone_configuration(registry, handle, &expression);
            let merged = merge_vm_parameters(&clone.vm_parameters, &expression);
            registry.set_vm_parameters(clone_handle, merged.clone());
            clone.vm_parameters = merged;
            clone
        }
    };

    Ok(Outcome::Prepared(PreparedInvocation {
        configuration,
        expression,
        mode,
    }))
}
