use crate::commands::compile::compile_options;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use mailcraft_compiler_html::compile_to_html;
use mailcraft_workspace::{SavedTemplate, TemplateLibrary, TemplateStore};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    /// List stored templates
    List,

    /// Print a stored template as JSON
    Show {
        /// Template id or name
        key: String,
    },

    /// Compile a stored template to HTML
    Export {
        /// Template id or name
        key: String,

        /// Output file (defaults to <outDir>/<id>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output to stdout instead of a file
        #[arg(long)]
        stdout: bool,

        /// Emit HTML without indentation
        #[arg(long)]
        minify: bool,
    },

    /// Delete a stored template
    Delete {
        /// Template id or name
        key: String,
    },
}

pub fn templates(command: TemplatesCommand, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let library = config.open_library(cwd);

    match command {
        TemplatesCommand::List => list(&library),
        TemplatesCommand::Show { key } => {
            let template = find(&library, &key)?;
            println!("{}", serde_json::to_string_pretty(&template)?);
            Ok(())
        }
        TemplatesCommand::Export {
            key,
            output,
            stdout,
            minify,
        } => {
            let template = find(&library, &key)?;
            let html = compile_to_html(
                &template.blocks,
                &template.settings,
                &compile_options(&config, minify, &template.name),
            );

            if stdout {
                println!("{}", html);
                return Ok(());
            }

            let output = match output {
                Some(path) => cwd.join(path),
                None => config
                    .get_out_dir(cwd)
                    .join(&template.id)
                    .with_extension("html"),
            };
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, html)?;

            println!(
                "  {} {} → {}",
                "✓".green(),
                template.name,
                output.display()
            );
            Ok(())
        }
        TemplatesCommand::Delete { key } => {
            let template = find(&library, &key)?;
            library.remove(&template.id)?;
            println!("  {} Deleted {}", "✓".green(), template.name);
            Ok(())
        }
    }
}

fn find<S: TemplateStore>(library: &TemplateLibrary<S>, key: &str) -> Result<SavedTemplate> {
    library
        .find(key)?
        .ok_or_else(|| anyhow!("Template not found: {}", key))
}

fn list<S: TemplateStore>(library: &TemplateLibrary<S>) -> Result<()> {
    let templates = library.list()?;

    if templates.is_empty() {
        println!("{}", "No templates stored yet".dimmed());
        return Ok(());
    }

    for template in templates {
        println!(
            "{}  {}  {}  {}",
            template.id.dimmed(),
            template.name.bright_white().bold(),
            template.date.format("%Y-%m-%d %H:%M"),
            format!("{} blocks", template.blocks.len()).dimmed()
        );
    }

    Ok(())
}
