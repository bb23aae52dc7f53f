//! # File System Tree Module / 文件系统树模块
//!
//! The OS-backed implementation of the scanner's file-tree collaborator,
//! plus the conversion of command-line path arguments into file entries.
//!
//! 扫描器文件树协作者的基于操作系统的实现，
//! 以及将命令行路径参数转换为文件条目的功能。

use crate::core::models::FileEntry;
use crate::core::scanner::FileTree;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Supplies directory children straight from `std::fs`.
/// 直接从 `std::fs` 提供目录子节点。
pub struct OsFileTree;

impl FileTree for OsFileTree {
    fn children(&self, directory: &FileEntry) -> Vec<FileEntry> {
        let Ok(read_dir) = fs::read_dir(&directory.path) else {
            // Unreadable directories contribute nothing to the selection.
            return Vec::new();
        };

        read_dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_type = entry.file_type().ok()?;
                let path = entry.path();
                Some(if file_type.is_dir() {
                    FileEntry::directory(path.display().to_string())
                } else {
                    FileEntry::file(path.display().to_string(), type_tag_of(&path))
                })
            })
            .collect()
    }
}

/// Builds the selection entry for a user-supplied path.
///
/// # Arguments
/// * `path` - Path to resolve, relative paths are resolved against the
///   current directory
///
/// # Returns
/// The resolved `FileEntry`, or an error if the path doesn't exist
pub fn entry_for_path(path: &Path) -> Result<FileEntry> {
    let resolved = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    Ok(if resolved.is_dir() {
        FileEntry::directory(resolved.display().to_string())
    } else {
        FileEntry::file(resolved.display().to_string(), type_tag_of(&resolved))
    })
}

/// The declared file type of a path: its lower-cased extension, or the
/// empty string when there is none.
pub fn type_tag_of(path: &Path) -> String {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase())
        .unwrap_or_default()
}
