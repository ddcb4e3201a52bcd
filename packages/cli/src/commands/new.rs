use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailcraft_blocks::{Block, BlockType};
use mailcraft_workspace::SavedTemplate;
use std::path::Path;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template name
    pub name: String,

    /// Comma-separated block types, top to bottom
    #[arg(short, long, value_delimiter = ',', default_value = "header,text,button,footer")]
    pub blocks: Vec<String>,
}

pub fn new_template(args: NewArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let blocks = parse_blocks(&args.blocks)?;

    let template = SavedTemplate::new(args.name, blocks, config.settings.clone());
    config.open_library(cwd).upsert(template.clone())?;

    println!(
        "  {} Created {} ({} blocks)",
        "✓".green(),
        template.name.bright_white(),
        template.blocks.len()
    );
    println!("  id: {}", template.id.dimmed());

    Ok(())
}

/// Default blocks for each named type, in order
fn parse_blocks(names: &[String]) -> Result<Vec<Block>> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<BlockType>()
                .map(Block::new)
                .map_err(|e| anyhow!("{} (expected one of: {})", e, block_type_names()))
        })
        .collect()
}

fn block_type_names() -> String {
    BlockType::ALL
        .iter()
        .map(BlockType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
