//! Printing the built-in preset and font catalogs.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailcraft_blocks::{presets_for, BlockType, FONT_FAMILIES};
use mailcraft_compiler_css::font_face_css;

#[derive(Debug, Args)]
pub struct PresetsArgs {
    /// Only show presets for this block type
    #[arg(short = 't', long = "type")]
    pub block_type: Option<String>,

    /// Print the preset style maps as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn presets(args: PresetsArgs) -> Result<()> {
    let types = match &args.block_type {
        Some(name) => vec![name.parse::<BlockType>().map_err(|e| anyhow!(e))?],
        None => BlockType::ALL.to_vec(),
    };

    for block_type in types {
        let presets = presets_for(block_type);
        if presets.is_empty() {
            continue;
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&presets)?);
            continue;
        }

        println!("{}", block_type.as_str().bright_blue().bold());
        for preset in presets {
            println!(
                "  {}  {}  {}",
                preset.id.bright_white(),
                preset.name,
                format!("{} styles", preset.styles.len()).dimmed()
            );
        }
    }

    Ok(())
}

pub fn fonts(css: bool) -> Result<()> {
    if css {
        print!("{}", font_face_css());
        return Ok(());
    }

    for family in FONT_FAMILIES {
        let weights: Vec<String> = family
            .faces
            .iter()
            .map(|face| face.weight.to_string())
            .collect();
        let weights = if weights.is_empty() {
            "built in".to_string()
        } else {
            weights.join(", ")
        };

        println!(
            "  {}  {}  {}",
            family.name.bright_white(),
            family.label,
            weights.dimmed()
        );
    }

    Ok(())
}
