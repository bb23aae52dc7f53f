//! # Configuration Initialization Module / 配置初始化模块
//!
//! Provides an interactive command-line wizard that scaffolds a
//! `RunConfigurations.toml` for the current project: template run
//! configurations, the default test-file patterns, and the selected
//! configuration. The `--non-interactive` flag writes a default file
//! without prompting.
//!
//! 提供交互式命令行向导，为当前项目生成 `RunConfigurations.toml`：
//! 模板运行配置、默认测试文件模式以及选中的配置。
//! `--non-interactive` 标志在不提示的情况下写入默认文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use rust_i18n::t;
use std::fs;
use std::path::Path;

use crate::core::models::ConfigurationData;
use crate::infra::registry::{ProjectConfig, DEFAULT_CONFIG_FILE_NAME};

/// Runs the interactive wizard to generate a `RunConfigurations.toml` file.
///
/// 运行交互式向导以生成 `RunConfigurations.toml` 文件。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE_NAME);
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init_wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let default_config = generate_default_config();

    if non_interactive {
        return write_config(config_path, &default_config, language);
    }

    // Interactive part starts here
    let options = vec![
        ("junit", t!("init_template_junit", locale = language)),
        ("maven", t!("init_template_maven", locale = language)),
        ("testng", t!("init_template_testng", locale = language)),
        ("custom", t!("init_template_custom", locale = language)),
    ];

    let selections = MultiSelect::with_theme(&theme)
        .with_prompt(t!("init_template_selection_prompt", locale = language))
        .items(&options.iter().map(|o| o.1.clone()).collect::<Vec<_>>())
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    if selections.is_empty() {
        println!(
            "{}",
            t!("init_no_templates_selected", locale = language).yellow()
        );
    }

    let mut configurations = Vec::new();

    for i in selections {
        let template_key = options[i].0;
        let configuration = match template_key {
            "junit" => ConfigurationData {
                id: "JUnit.All Tests".to_string(),
                command: "mvn test".to_string(),
                ..ConfigurationData::default()
            },
            "maven" => {
                let module: String = Input::with_theme(&theme)
                    .with_prompt(t!("init_maven_module_prompt", locale = language))
                    .allow_empty(true)
                    .interact_text()?;
                ConfigurationData {
                    id: "Maven.Module Tests".to_string(),
                    command: if module.is_empty() {
                        "mvn verify".to_string()
                    } else {
                        format!("mvn -pl {} verify", module)
                    },
                    module: (!module.is_empty()).then_some(module),
                    ..ConfigurationData::default()
                }
            }
            "testng" => ConfigurationData {
                id: "TestNG.Suite".to_string(),
                command: "mvn test -Dsurefire.suiteXmlFiles=testng.xml".to_string(),
                ..ConfigurationData::default()
            },
            "custom" => {
                let id: String = Input::with_theme(&theme)
                    .with_prompt(t!("init_custom_id_prompt", locale = language))
                    .default("JUnit.Custom".to_string())
                    .interact_text()?;
                let command: String = Input::with_theme(&theme)
                    .with_prompt(t!("init_custom_command_prompt", locale = language))
                    .interact_text()?;
                ConfigurationData {
                    id,
                    command,
                    ..ConfigurationData::default()
                }
            }
            _ => continue,
        };
        configurations.push(configuration);
    }

    let final_config = if configurations.is_empty() {
        default_config
    } else {
        ProjectConfig {
            language: language.to_string(),
            selected: configurations.first().map(|c| c.name().to_string()),
            configurations,
            ..ProjectConfig::default()
        }
    };

    write_config(config_path, &final_config, language)
}

fn generate_default_config() -> ProjectConfig {
    let junit = ConfigurationData {
        id: "JUnit.All Tests".to_string(),
        command: "mvn test".to_string(),
        ..ConfigurationData::default()
    };
    ProjectConfig {
        selected: Some(junit.name().to_string()),
        configurations: vec![junit],
        ..ProjectConfig::default()
    }
}

fn write_config(path: &Path, config: &ProjectConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!(
            "init_write_failed",
            locale = language,
            path = path.display()
        )
        .to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!(
            "init_success_created",
            locale = language,
            path = path.display()
        )
        .bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
