use std::io::{self, BufRead};

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use link2clash::models::mode::mode_labels;
use link2clash::utils::HttpFetcher;
use link2clash::{compile, explode_sub, resolve_mode, CompileError, Settings};

/// Compile vless/hysteria2 share links into a rule-based Clash configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML or TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// File with one share link per line (reads stdin until `ok` when omitted)
    #[arg(short, long, value_name = "FILE")]
    links: Option<String>,

    /// File with custom rules placed before every remote rule
    #[arg(short, long, value_name = "FILE")]
    rules: Option<String>,

    /// Generation mode (see --list-modes)
    #[arg(short, long, value_name = "N")]
    mode: Option<i64>,

    /// Output file path
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Print the available modes and exit
    #[arg(long)]
    list_modes: bool,
}

/// Read lines until EOF or an `ok`/`done` sentinel
fn read_until_sentinel(reader: impl BufRead) -> io::Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("ok") || trimmed.eq_ignore_ascii_case("done") {
            break;
        }
        text.push_str(trimmed);
        text.push('\n');
    }
    Ok(text)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    if args.list_modes {
        for (id, label) in mode_labels() {
            println!("[{:>2}] {}", id, label);
        }
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path))?,
        None => Settings::default(),
    };

    let links = match &args.links {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read links from {}", path))?,
        None => {
            eprintln!("Paste share links, then enter `ok`:");
            read_until_sentinel(io::stdin().lock())?
        }
    };

    let parsed = explode_sub(&links);
    for node in &parsed.nodes {
        info!("Added node {} ({})", node.name, node.kind.as_str());
    }
    if parsed.nodes.is_empty() {
        bail!(CompileError::NoNodesParsed);
    }

    let custom_rules = match &args.rules {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read custom rules from {}", path))?,
        None => String::new(),
    };

    let mode = resolve_mode(args.mode.unwrap_or(settings.default_mode));
    info!("Generating [{}]", mode.label);

    let fetcher = HttpFetcher::new(
        &settings.proxy_config,
        &settings.user_agent,
        settings.fetch_timeout,
    )?;
    let document = compile(&parsed.nodes, &mode, &custom_rules, &fetcher, &settings).await?;

    let output = args.output.as_deref().unwrap_or(&settings.output_path);
    std::fs::write(output, document).with_context(|| format!("failed to write {}", output))?;
    info!("Wrote {}", output);

    Ok(())
}
