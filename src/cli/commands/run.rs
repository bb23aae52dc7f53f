// src/cli/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use rust_i18n::t;
use std::io::{stdin, IsTerminal};
use std::path::PathBuf;

use crate::{
    core::{
        error::InvocationError,
        filter::TestFilePatterns,
        invoker::{invoke, Outcome},
        models::{FileEntry, RunMode},
        resolver::SelectConfiguration,
    },
    infra::{
        dialog::{DialogSelector, NullSelector},
        dispatch,
        fs::{entry_for_path, OsFileTree},
        registry::{load_project, ProjectRegistry},
    },
};

pub async fn execute(
    paths: Vec<PathBuf>,
    config: PathBuf,
    project_dir: PathBuf,
    mode: RunMode,
) -> Result<()> {
    let (project_config, config_path, project_root) = load_project(&project_dir, &config)?;
    let locale = project_config.language.clone();
    rust_i18n::set_locale(&locale);

    println!(
        "{}",
        t!(
            "loading_configurations",
            locale = &locale,
            path = config_path.display()
        )
    );

    let patterns = TestFilePatterns::compile(&project_config.test_file_patterns)
        .context("Invalid test file pattern in configuration")?;

    let selection: Vec<FileEntry> = paths
        .iter()
        .map(|path| entry_for_path(path))
        .collect::<Result<_>>()?;

    println!(
        "{}",
        t!(
            "scanning_selection",
            locale = &locale,
            count = selection.len()
        )
        .cyan()
    );

    let mut registry = ProjectRegistry::from_config(&project_config);

    // Without a terminal there is no way to present the modal selection
    // dialog; the resolver then surfaces the no-selection contract instead.
    let dialog;
    let null;
    let selector: &dyn SelectConfiguration = if stdin().is_terminal() {
        dialog = DialogSelector::new(locale.clone());
        &dialog
    } else {
        null = NullSelector;
        &null
    };

    match invoke(
        &OsFileTree,
        &selection,
        &patterns,
        &mut registry,
        selector,
        mode,
    ) {
        Ok(Outcome::NoTestFiles) => {
            println!("{}", t!("no_test_files", locale = &locale).yellow());
            Ok(())
        }
        Ok(Outcome::Prepared(prepared)) => {
            println!(
                "{}",
                t!(
                    "filter_expression",
                    locale = &locale,
                    expression = prepared.expression
                )
            );
            println!(
                "{}",
                t!(
                    "dispatching",
                    locale = &locale,
                    name = prepared.configuration.name().yellow(),
                    mode = prepared.mode
                )
                .bold()
            );
            dispatch::execute_configuration(&prepared, &project_root, &locale).await
        }
        Err(InvocationError::SelectionCancelled) => {
            // A deliberate dismissal is a quiet exit, not a failure.
            println!(
                "{}",
                InvocationError::SelectionCancelled.dialog_message().yellow()
            );
            Ok(())
        }
        Err(error) => Err(anyhow::Error::new(error)),
    }
}
