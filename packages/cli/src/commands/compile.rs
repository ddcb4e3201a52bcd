use crate::commands::source::read_template;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailcraft_compiler_html::{compile_to_html, CompileOptions};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Template JSON file, or a directory of them
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Emit HTML without indentation
    #[arg(long)]
    pub minify: bool,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = cwd.join(&args.path);

    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let (root, files) = if input.is_file() {
        let root = input.parent().map(Path::to_path_buf).unwrap_or_default();
        (root, vec![input.clone()])
    } else {
        let excluded = [
            cwd.join(crate::config::DEFAULT_CONFIG_NAME),
            config.get_store_path(cwd),
        ];
        (input.clone(), find_template_files(&input, &excluded))
    };

    if files.is_empty() {
        println!("{}", "⚠️  No template files found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🔨 Compiling templates...".bright_blue().bold());
        println!("Found {} files", files.len());
    }

    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.get_out_dir(cwd),
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        let relative_path = file.strip_prefix(&root).unwrap_or(file);
        match compile_file(file, relative_path, &args, &config, &out_dir) {
            Ok(output_path) => {
                success_count += 1;
                if !args.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output_path
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if args.stdout {
        return Ok(());
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} templates successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Compiled {} templates, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

/// Every `*.json` under `dir` except the `excluded` files
fn find_template_files(dir: &Path, excluded: &[PathBuf]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .filter(|path| !excluded.contains(path))
        .collect();

    files.sort();
    files
}

pub fn compile_options(config: &Config, minify: bool, title: &str) -> CompileOptions {
    CompileOptions {
        pretty: config.pretty && !minify,
        title: title.to_string(),
        ..CompileOptions::default()
    }
}

fn compile_file(
    file_path: &Path,
    relative_path: &Path,
    args: &CompileArgs,
    config: &Config,
    out_dir: &Path,
) -> Result<String> {
    let template = read_template(file_path)?;
    let settings = template.settings.as_ref().unwrap_or(&config.settings);
    let options = compile_options(config, args.minify, &template.name);

    let output = compile_to_html(&template.blocks, settings, &options);

    if args.stdout {
        println!("{}", output);
        return Ok("stdout".to_string());
    }

    let output_file = out_dir.join(relative_path).with_extension("html");

    // Create output directory
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&output_file, output)?;

    Ok(output_file.display().to_string())
}
