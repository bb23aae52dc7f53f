//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the concrete collaborators behind the core's trait
//! seams: the OS-backed file tree, the TOML-backed project registry, the
//! interactive selection dialog and the process dispatcher.
//!
//! 此模块提供核心 trait 接缝背后的具体协作者：
//! 基于操作系统的文件树、基于 TOML 的项目注册表、交互式选择对话框以及进程调度器。

pub mod dialog;
pub mod dispatch;
pub mod fs;
pub mod registry;
