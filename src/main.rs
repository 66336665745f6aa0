use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use svgcut::{init_logging, Config, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(
    name = "svgcut",
    version,
    about = "Optimize CAD-exported SVG drawings for laser cutting"
)]
struct Cli {
    /// SVG drawing to optimize
    input: Option<PathBuf>,

    /// Output path (default: <stem><suffix>.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (.toml or .json); the user config file when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON statistics report to stdout
    #[arg(long)]
    report: bool,

    /// Exit immediately on failure instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_or_default().context("Failed to load user config"),
    }
}

fn execute(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let summary = svgcut::run(input, cli.output.as_deref(), &config)?;

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn wait_for_enter() {
    eprint!("Press Enter to exit...");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(input) = cli.input.clone() else {
        println!("svgcut {VERSION} (built {BUILD_DATE})");
        println!("Drop an SVG file onto svgcut, or pass its path on the command line.\n");
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match execute(&cli, &input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if !cli.no_wait {
                wait_for_enter();
            }
            ExitCode::FAILURE
        }
    }
}
