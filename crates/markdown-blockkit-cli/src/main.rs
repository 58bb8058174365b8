use anyhow::{Context, Result};
use markdown_blockkit_config::Config;
use markdown_blockkit_engine::{ConvertOptions, MarkdownConverter, parse_document};
use serde::Serialize;
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "[--groups] [--warnings] [--tree] [--compact] [FILE]";

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Output {
    #[default]
    Blocks,
    Groups,
    Tree,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    output: Output,
    warnings: bool,
    compact: bool,
    input: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--groups" => parsed.output = Output::Groups,
                "--tree" => parsed.output = Output::Tree,
                "--warnings" => parsed.warnings = true,
                "--compact" => parsed.compact = true,
                flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
                path => {
                    if parsed.input.is_some() {
                        return Err("only one input file may be given".to_string());
                    }
                    parsed.input = Some(PathBuf::from(path));
                }
            }
        }
        if parsed.warnings && parsed.output != Output::Blocks {
            return Err("--warnings cannot be combined with --groups or --tree".to_string());
        }
        Ok(parsed)
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn load_options() -> ConvertOptions {
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded options from {}", Config::config_path().display());
            config.conversion
        }
        Ok(None) => ConvertOptions::default(),
        Err(e) => {
            log::warn!("Failed to load config file, using defaults: {e}");
            ConvertOptions::default()
        }
    }
}

fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("markdown-blockkit");
    let parsed = match Args::parse(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let text = read_input(parsed.input.as_ref())?;
    let converter = MarkdownConverter::new(load_options());

    let json = match parsed.output {
        Output::Blocks if parsed.warnings => {
            let conversion = converter.convert_with_warnings(&text);
            for warning in &conversion.warnings {
                eprintln!("warning: {warning}");
            }
            render(&conversion.blocks, parsed.compact)?
        }
        Output::Blocks => render(&converter.convert(&text), parsed.compact)?,
        Output::Groups => {
            let groups = converter.convert_groups(&text);
            log::info!("Produced {} message groups", groups.len());
            render(&groups, parsed.compact)?
        }
        Output::Tree => render(&parse_document(&text), parsed.compact)?,
    };

    println!("{json}");
    Ok(())
}
