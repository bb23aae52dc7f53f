// Shared test helpers for integration tests
#![allow(dead_code)]

use filter_runner::core::error::InvocationError;
use filter_runner::core::models::{ConfigurationData, ConfigurationDescriptor, ConfigurationHandle, FileEntry};
use filter_runner::core::resolver::{Registry, SelectConfiguration};
use filter_runner::core::scanner::FileTree;
use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// An in-memory file tree: maps a directory path to its children.
pub struct MemoryFileTree {
    children: HashMap<String, Vec<FileEntry>>,
}

impl MemoryFileTree {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    pub fn with_children(mut self, directory: &str, children: Vec<FileEntry>) -> Self {
        self.children.insert(directory.to_string(), children);
        self
    }
}

impl FileTree for MemoryFileTree {
    fn children(&self, directory: &FileEntry) -> Vec<FileEntry> {
        self.children
            .get(&directory.path)
            .cloned()
            .unwrap_or_default()
    }
}

/// An in-memory registry with explicit per-entry capability flags.
pub struct MemoryRegistry {
    pub entries: Vec<ConfigurationData>,
    pub capable: Vec<bool>,
    pub selected: Option<usize>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capable: Vec::new(),
            selected: None,
        }
    }

    pub fn with_entry(mut self, data: ConfigurationData, capable: bool) -> Self {
        self.entries.push(data);
        self.capable.push(capable);
        self
    }

    pub fn with_selected(mut self, name: &str) -> Self {
        self.selected = self.entries.iter().position(|entry| entry.name() == name);
        assert!(self.selected.is_some(), "no entry named {}", name);
        self
    }
}

impl Registry for MemoryRegistry {
    fn list(&self) -> Vec<ConfigurationHandle> {
        (0..self.entries.len())
            .map(ConfigurationHandle::from_index)
            .collect()
    }

    fn find(&self, name: &str) -> Option<ConfigurationHandle> {
        self.entries
            .iter()
            .position(|entry| entry.name() == name)
            .map(ConfigurationHandle::from_index)
    }

    fn data(&self, handle: ConfigurationHandle) -> ConfigurationData {
        self.entries[handle.index()].clone()
    }

    fn create(&mut self, data: ConfigurationData) -> ConfigurationHandle {
        self.entries.push(data);
        // New entries are always this tool's own clones, which are
        // test-capable by construction.
        self.capable.push(true);
        ConfigurationHandle::from_index(self.entries.len() - 1)
    }

    fn selected(&self) -> Option<ConfigurationHandle> {
        self.selected.map(ConfigurationHandle::from_index)
    }

    fn set_selected(&mut self, handle: ConfigurationHandle) {
        self.selected = Some(handle.index());
    }

    fn set_vm_parameters(&mut self, handle: ConfigurationHandle, parameters: String) {
        self.entries[handle.index()].vm_parameters = parameters;
    }

    fn is_test_capable(&self, handle: ConfigurationHandle) -> bool {
        self.capable[handle.index()]
    }
}

/// A selector scripted to choose one candidate by name, or to report the
/// dialog as dismissed. Records whether it was invoked at all.
pub struct ScriptedSelector {
    choice: Option<String>,
    invoked: Cell<bool>,
}

impl ScriptedSelector {
    pub fn chooses(name: &str) -> Self {
        Self {
            choice: Some(name.to_string()),
            invoked: Cell::new(false),
        }
    }

    pub fn cancels() -> Self {
        Self {
            choice: None,
            invoked: Cell::new(false),
        }
    }

    pub fn was_invoked(&self) -> bool {
        self.invoked.get()
    }
}

impl SelectConfiguration for ScriptedSelector {
    fn select(
        &self,
        candidates: &[ConfigurationDescriptor],
    ) -> Result<ConfigurationDescriptor, InvocationError> {
        self.invoked.set(true);
        match &self.choice {
            Some(name) => candidates
                .iter()
                .find(|candidate| candidate.name == *name)
                .cloned()
                .ok_or(InvocationError::SelectionCancelled),
            None => Err(InvocationError::SelectionCancelled),
        }
    }
}

/// A selector that must never be reached.
pub struct UnreachableSelector;

impl SelectConfiguration for UnreachableSelector {
    fn select(
        &self,
        _candidates: &[ConfigurationDescriptor],
    ) -> Result<ConfigurationDescriptor, InvocationError> {
        panic!("the selector must not be invoked in this scenario");
    }
}

pub fn configuration(id: &str, command: &str) -> ConfigurationData {
    ConfigurationData {
        id: id.to_string(),
        command: command.to_string(),
        ..ConfigurationData::default()
    }
}

/// Scaffolds a temporary project: a `RunConfigurations.toml` with the given
/// contents plus a couple of files to select.
pub fn setup_project(config_toml: &str) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let root = temp_dir.path();

    fs::write(root.join("RunConfigurations.toml"), config_toml)
        .expect("Failed to write RunConfigurations.toml");

    write_file(root, "Payment_Test.xml", "<test-case/>");
    write_file(root, "Debit_Test.xml", "<test-case/>");
    write_file(root, "README.md", "# sample project");

    let nested = root.join("suites");
    fs::create_dir_all(&nested).expect("Failed to create suites directory");
    write_file(&nested, "Refund_Test.xml", "<test-case/>");
    write_file(&nested, "notes.txt", "not a test");

    temp_dir
}

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write file");
}

/// A minimal project configuration with one selected, test-capable,
/// echo-backed configuration. Tests asserting on dispatch output rely on
/// `echo` printing the appended VM parameter tokens.
pub fn echo_project_config() -> &'static str {
    r#"language = "en"
test_file_patterns = ["Test"]
selected = "All Tests"

[[configurations]]
id = "JUnit.All Tests"
command = "echo launched"
vm_parameters = "-Xmx512m"
"#
}
