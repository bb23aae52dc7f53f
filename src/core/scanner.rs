//! # File Tree Scanner Module / 文件树扫描模块
//!
//! Recursively expands a selection of files and directories into a flat,
//! deduplicated set of file entries. Directories are traversed depth-first
//! and never emitted themselves; duplicate selections (a file picked
//! directly and also reachable through a selected ancestor directory)
//! collapse onto their path.
//!
//! 将选中的文件和目录递归展开为扁平的、去重的文件条目集合。
//! 目录按深度优先遍历且自身永不输出；重复选择
//! （直接选中的文件同时又能通过选中的祖先目录到达）按路径折叠。

use crate::core::models::FileEntry;
use std::collections::BTreeMap;

/// The file-tree collaborator: supplies the children of a directory entry.
/// The OS-backed implementation lives in `infra::fs`; tests substitute an
/// in-memory tree.
///
/// 文件树协作者：提供目录条目的子节点。
/// 基于操作系统的实现位于 `infra::fs`；测试中用内存树替代。
pub trait FileTree {
    fn children(&self, directory: &FileEntry) -> Vec<FileEntry>;
}

/// Expands the selection into all reachable non-directory entries, keyed by
/// path. The ordered map both deduplicates the selection and fixes the
/// deterministic (lexical, ascending) order the formatter relies on.
///
/// An empty selection yields an empty result; there is no error condition.
///
/// 将选择展开为所有可达的非目录条目，按路径作为键。
/// 有序映射同时完成选择去重，并确定格式化器依赖的（字典序升序）确定性顺序。
///
/// 空选择产生空结果；不存在错误情况。
pub fn collect_files(tree: &dyn FileTree, roots: &[FileEntry]) -> BTreeMap<String, FileEntry> {
    let mut found = BTreeMap::new();
    iterate_through_children(tree, roots, &mut |entry| {
        found.insert(entry.path.clone(), entry);
    });
    found
}

/// Depth-first walk over the selection: directories recurse into their
/// children, files are handed to the callback.
fn iterate_through_children(
    tree: &dyn FileTree,
    entries: &[FileEntry],
    callback: &mut dyn FnMut(FileEntry),
) {
    for entry in entries {
        if entry.is_directory {
            iterate_through_children(tree, &tree.children(entry), callback);
        } else {
            callback(entry.clone());
        }
    }
}
