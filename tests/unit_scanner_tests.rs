//! # Scanner Module Unit Tests / 扫描模块单元测试
//!
//! This module contains unit tests for the file tree scanner, covering
//! recursive expansion, deduplication by path, and the guarantee that
//! directories are never emitted.
//!
//! 此模块包含文件树扫描器的单元测试，覆盖递归展开、按路径去重，
//! 以及目录永不输出的保证。

mod common;

use common::MemoryFileTree;
use filter_runner::core::models::FileEntry;
use filter_runner::core::scanner::collect_files;
use filter_runner::infra::fs::OsFileTree;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod memory_tree_tests {
    use super::*;

    fn sample_tree() -> MemoryFileTree {
        MemoryFileTree::new()
            .with_children(
                "/project",
                vec![
                    FileEntry::file("/project/Payment_Test.xml", "xml"),
                    FileEntry::directory("/project/suites"),
                    FileEntry::file("/project/README.md", "md"),
                ],
            )
            .with_children(
                "/project/suites",
                vec![
                    FileEntry::file("/project/suites/Refund_Test.xml", "xml"),
                    FileEntry::file("/project/suites/notes.txt", "txt"),
                ],
            )
    }

    #[test]
    fn test_collect_files_expands_directories_recursively() {
        let tree = sample_tree();
        let roots = vec![FileEntry::directory("/project")];

        let files = collect_files(&tree, &roots);

        let paths: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "/project/Payment_Test.xml",
                "/project/README.md",
                "/project/suites/Refund_Test.xml",
                "/project/suites/notes.txt",
            ]
        );
    }

    #[test]
    fn test_collect_files_never_emits_directories() {
        let tree = sample_tree();
        let roots = vec![FileEntry::directory("/project")];

        let files = collect_files(&tree, &roots);

        assert!(files.values().all(|entry| !entry.is_directory));
    }

    #[test]
    fn test_collect_files_deduplicates_direct_and_ancestor_selection() {
        let tree = sample_tree();
        // The same file selected directly and reachable through the
        // selected directory.
        let roots = vec![
            FileEntry::file("/project/suites/Refund_Test.xml", "xml"),
            FileEntry::directory("/project/suites"),
        ];

        let files = collect_files(&tree, &roots);

        assert_eq!(files.len(), 2);
        assert!(files.contains_key("/project/suites/Refund_Test.xml"));
        assert!(files.contains_key("/project/suites/notes.txt"));
    }

    #[test]
    fn test_collect_files_empty_selection_yields_empty_result() {
        let tree = sample_tree();

        let files = collect_files(&tree, &[]);

        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_files_is_keyed_in_path_order() {
        let tree = sample_tree();
        // Reversed selection order must not change the key order.
        let roots = vec![
            FileEntry::file("/project/suites/notes.txt", "txt"),
            FileEntry::file("/project/Payment_Test.xml", "xml"),
        ];

        let files = collect_files(&tree, &roots);

        let paths: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec!["/project/Payment_Test.xml", "/project/suites/notes.txt"]
        );
    }
}

#[cfg(test)]
mod os_tree_tests {
    use super::*;

    /// Builds a real directory structure:
    /// root/
    /// ├── Payment_Test.xml
    /// └── suites/
    ///     ├── Refund_Test.xml
    ///     └── nested/
    ///         └── Debit_Test.xml
    fn create_test_dir_structure() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("suites").join("nested")).unwrap();
        fs::write(root.join("Payment_Test.xml"), "<test-case/>").unwrap();
        fs::write(root.join("suites").join("Refund_Test.xml"), "<test-case/>").unwrap();
        fs::write(
            root.join("suites").join("nested").join("Debit_Test.xml"),
            "<test-case/>",
        )
        .unwrap();

        temp_dir
    }

    #[test]
    fn test_os_tree_walks_nested_directories() {
        let temp_dir = create_test_dir_structure();
        let root = FileEntry::directory(temp_dir.path().display().to_string());

        let files = collect_files(&OsFileTree, &[root]);

        assert_eq!(files.len(), 3);
        assert!(files.keys().any(|path| path.ends_with("Payment_Test.xml")));
        assert!(files.keys().any(|path| path.ends_with("Refund_Test.xml")));
        assert!(files.keys().any(|path| path.ends_with("Debit_Test.xml")));
    }

    #[test]
    fn test_os_tree_tags_files_with_lowercased_extension() {
        let temp_dir = create_test_dir_structure();
        let root = FileEntry::directory(temp_dir.path().display().to_string());

        let files = collect_files(&OsFileTree, &[root]);

        assert!(files.values().all(|entry| entry.type_tag == "xml"));
    }

    #[test]
    fn test_os_tree_unreadable_root_contributes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = FileEntry::directory(
            temp_dir
                .path()
                .join("does-not-exist")
                .display()
                .to_string(),
        );

        let files = collect_files(&OsFileTree, &[missing]);

        assert!(files.is_empty());
    }
}
