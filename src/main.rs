use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mdblocks::Config;

#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(about = "Convert Markdown files to Slack Block Kit rich text JSON")]
struct Cli {
    /// Input Markdown file ("-" reads standard input)
    input: PathBuf,

    /// Output JSON file (defaults to standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file; defaults apply when it does not exist
    #[arg(short, long, default_value = "mdblocks.toml")]
    config: PathBuf,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let markdown = read_input(&cli.input)?;

    let message = mdblocks::markdown_to_message_with_config(&markdown, config)
        .with_context(|| format!("converting {}", cli.input.display()))?;
    info!(blocks = message.blocks.len(), "converted");

    let pretty = config.output.pretty && !cli.compact;
    let mut json = message.to_json(pretty).context("serializing blocks")?;
    json.push('\n');

    match &cli.output {
        Some(output) => fs::write(output, json)
            .with_context(|| format!("writing {}", output.display()))?,
        None => io::stdout()
            .lock()
            .write_all(json.as_bytes())
            .context("writing to stdout")?,
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut markdown = String::new();
        io::stdin()
            .read_to_string(&mut markdown)
            .context("reading standard input")?;
        return Ok(markdown);
    }

    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
