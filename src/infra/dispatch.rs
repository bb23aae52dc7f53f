//! # Process Dispatch Module / 进程调度模块
//!
//! Executes a prepared invocation: the configuration's before-run tasks in
//! order, then the configuration's command with the merged VM parameter
//! tokens appended. Ctrl-C cancels the run; `Debug` mode additionally
//! injects a JDWP agent parameter so the launched JVM waits for a debugger.
//!
//! 执行就绪的调用：按顺序执行配置的运行前任务，
//! 然后执行附加了已合并 VM 参数标记的配置命令。
//! Ctrl-C 取消运行；`Debug` 模式额外注入 JDWP 代理参数，
//! 使启动的 JVM 等待调试器。

use crate::core::invoker::PreparedInvocation;
use crate::core::models::{ConfigurationData, RunMode};
use anyhow::{Context, Result};
use colored::*;
use rust_i18n::t;
use std::path::{Path, PathBuf};
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// The VM parameter injected in `Debug` mode: a JDWP agent that suspends
/// the JVM until a debugger attaches on port 5005.
/// `Debug` 模式注入的 VM 参数：JDWP 代理，挂起 JVM 直到调试器在 5005 端口附加。
pub const DEBUG_AGENT_VM_PARAMETER: &str =
    "-agentlib:jdwp=transport=dt_socket,server=y,suspend=y,address=*:5005";

/// Runs the prepared invocation to completion.
///
/// Before-run tasks abort the dispatch on their first failure; the main
/// command's exit status decides the overall result.
pub async fn execute_configuration(
    invocation: &PreparedInvocation,
    project_root: &Path,
    locale: &str,
) -> Result<()> {
    let configuration = &invocation.configuration;
    let stop_token = setup_signal_handler(locale);
    let working_dir = resolve_working_dir(configuration, project_root);

    for task in &configuration.before_run {
        println!(
            "{}",
            t!("before_run_task", locale = locale, command = task).cyan()
        );
        let (program, args) = split_command_line(task)?;
        run_process(&program, &args, &working_dir, &stop_token, locale).await?;
    }

    let (program, args) = launch_command(configuration, invocation.mode)?;
    run_process(&program, &args, &working_dir, &stop_token, locale).await?;

    println!(
        "{}",
        t!("dispatch_complete", locale = locale).green().bold()
    );
    Ok(())
}

/// Builds the launch command line: the configuration's command followed by
/// the VM parameter tokens, with the JDWP agent appended in `Debug` mode.
/// Pure, so the exact argument layout is testable without spawning.
pub fn launch_command(
    configuration: &ConfigurationData,
    mode: RunMode,
) -> Result<(String, Vec<String>)> {
    let (program, mut args) = split_command_line(&configuration.command)?;

    args.extend(
        configuration
            .vm_parameters
            .split_whitespace()
            .map(str::to_string),
    );
    if mode == RunMode::Debug {
        args.push(DEBUG_AGENT_VM_PARAMETER.to_string());
    }

    Ok((program, args))
}

fn split_command_line(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts = shlex::split(command)
        .with_context(|| format!("Malformed command line: {}", command))?
        .into_iter();
    let program = parts
        .next()
        .with_context(|| format!("Empty command line: {}", command))?;
    Ok((program, parts.collect()))
}

fn resolve_working_dir(configuration: &ConfigurationData, project_root: &Path) -> PathBuf {
    match &configuration.working_dir {
        Some(dir) => {
            let expanded = shellexpand::tilde(dir).into_owned();
            let expanded = PathBuf::from(expanded);
            if expanded.is_absolute() {
                expanded
            } else {
                project_root.join(expanded)
            }
        }
        None => project_root.to_path_buf(),
    }
}

async fn run_process(
    program: &str,
    args: &[String],
    working_dir: &Path,
    stop_token: &CancellationToken,
    locale: &str,
) -> Result<()> {
    let mut child = tokio::process::Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .spawn()
        .with_context(|| format!("Failed to launch: {}", program))?;

    let status = tokio::select! {
        biased;
        _ = stop_token.cancelled() => None,
        status = child.wait() => Some(status),
    };

    let Some(status) = status else {
        child.kill().await.ok();
        anyhow::bail!(t!("dispatch_cancelled", locale = locale).to_string());
    };

    let status = status.with_context(|| format!("Failed to wait for: {}", program))?;
    if !status.success() {
        anyhow::bail!(t!(
            "command_failed",
            locale = locale,
            command = program,
            status = status
        )
        .to_string());
    }

    Ok(())
}

fn setup_signal_handler(locale: &str) -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\n{}", t!("shutdown_signal", locale = &locale).yellow());
            token_clone.cancel();
        }
    });

    token
}
