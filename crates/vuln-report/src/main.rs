use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vuln_report::{run, RunOptions};

#[derive(Parser)]
#[command(
    name = "vuln-report",
    version,
    about = "Render vulnerability scan JSON as an HTML report"
)]
struct Cli {
    /// Scan JSON: one scan object or an array of them.
    input: PathBuf,

    /// Where to write the HTML [default: vulnerability-report.html]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file [default: ./report.toml when present]
    #[arg(long, env = "VULN_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Report heading
    #[arg(long)]
    title: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = RunOptions {
        input: cli.input,
        output: cli.output,
        config: cli.config,
        title: cli.title,
    };

    match run(&options) {
        Ok(outcome) => {
            for line in outcome.summary.lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
