// src/cli/commands/list.rs

use anyhow::Result;
use colored::*;
use rust_i18n::t;
use serde::Serialize;
use std::path::PathBuf;

use crate::infra::registry::load_project;

/// One row of the listing, as rendered to the console or emitted as JSON.
#[derive(Debug, Serialize)]
struct ListedConfiguration {
    name: String,
    capability_tag: String,
    selected: bool,
}

pub fn execute(config: PathBuf, project_dir: PathBuf, json: bool) -> Result<()> {
    let (project_config, _, _) = load_project(&project_dir, &config)?;
    let locale = project_config.language.clone();
    rust_i18n::set_locale(&locale);

    let rows: Vec<ListedConfiguration> = project_config
        .configurations
        .iter()
        .map(|configuration| {
            let descriptor = configuration.descriptor();
            ListedConfiguration {
                selected: project_config.selected.as_deref() == Some(descriptor.name.as_str()),
                name: descriptor.name,
                capability_tag: descriptor.capability_tag,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", t!("list_header", locale = &locale).bold());
    if rows.is_empty() {
        println!("{}", t!("list_empty", locale = &locale).yellow());
        return Ok(());
    }

    for row in &rows {
        let marker = if row.selected { "*" } else { " " };
        let line = format!("{} {} ({})", marker, row.name, row.capability_tag);
        if row.selected {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
