//! # Core Pipeline Module / 核心流水线模块
//!
//! This module contains the orchestration pipeline: file tree scanning,
//! filter expression formatting, VM parameter merging, configuration
//! resolution and cloning, and the single-invocation composition of all of
//! them.
//!
//! 此模块包含编排流水线：文件树扫描、过滤表达式格式化、VM 参数合并、
//! 配置解析与克隆，以及将它们组合为单次调用的流程。

pub mod cloner;
pub mod error;
pub mod filter;
pub mod handoff;
pub mod invoker;
pub mod models;
pub mod params;
pub mod resolver;
pub mod scanner;
