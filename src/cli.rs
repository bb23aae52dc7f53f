// src/cli.rs
pub mod commands;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use rust_i18n::t;
use std::{env, path::PathBuf};

use crate::core::models::RunMode;
use crate::infra::registry::DEFAULT_CONFIG_FILE_NAME;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn selection_args(command: Command, locale: &str) -> Command {
    command
        .arg(
            Arg::new("paths")
                .help(t!("arg_paths", locale = locale).to_string())
                .value_name("PATHS")
                .num_args(1..)
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value(DEFAULT_CONFIG_FILE_NAME)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("project-dir")
                .long("project-dir")
                .help(t!("arg_project_dir", locale = locale).to_string())
                .value_name("PROJECT_DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

fn build_cli(locale: &str) -> Command {
    Command::new("filter-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(selection_args(
            Command::new("run").about(t!("cmd_run_about", locale = locale).to_string()),
            locale,
        ))
        .subcommand(selection_args(
            Command::new("debug").about(t!("cmd_debug_about", locale = locale).to_string()),
            locale,
        ))
        .subcommand(
            Command::new("list")
                .about(t!("cmd_list_about", locale = locale).to_string())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg_json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value(DEFAULT_CONFIG_FILE_NAME)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("project-dir")
                        .long("project-dir")
                        .help(t!("arg_project_dir", locale = locale).to_string())
                        .value_name("PROJECT_DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Create a default configuration file without launching the interactive wizard.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => {
            let (paths, config, project_dir) = selection_values(sub_matches);
            commands::run::execute(paths, config, project_dir, RunMode::Run).await?;
        }
        Some(("debug", sub_matches)) => {
            let (paths, config, project_dir) = selection_values(sub_matches);
            commands::run::execute(paths, config, project_dir, RunMode::Debug).await?;
        }
        Some(("list", sub_matches)) => {
            let config = sub_matches
                .get_one::<PathBuf>("config")
                .unwrap() // Has default
                .clone();
            let project_dir = sub_matches
                .get_one::<PathBuf>("project-dir")
                .unwrap() // Has default
                .clone();
            let json = sub_matches.get_flag("json");
            commands::list::execute(config, project_dir, json)?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") {
                println!(
                    "{}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}

fn selection_values(matches: &clap::ArgMatches) -> (Vec<PathBuf>, PathBuf, PathBuf) {
    let paths = matches
        .get_many::<PathBuf>("paths")
        .unwrap() // Required
        .cloned()
        .collect();
    let config = matches
        .get_one::<PathBuf>("config")
        .unwrap() // Has default
        .clone();
    let project_dir = matches
        .get_one::<PathBuf>("project-dir")
        .unwrap() // Has default
        .clone();
    (paths, config, project_dir)
}
