use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hel420_corelib::{hel420_digest, Hel420Digest, ALGORITHM};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hel420",
    version = hel420_corelib::version(),
    about = "HEL-420 hash generator (SHA-256 with custom mixing)"
)]
struct Cli {
    /// Input string to hash
    #[arg(short, long)]
    input: String,
    /// Print a JSON object instead of the labelled text output
    #[arg(long)]
    json: bool,
    /// Expected hex digest; exits with status 1 when it does not match
    #[arg(long, value_name = "HEX")]
    expect: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: &'a str,
    input_len: usize,
    digest: Hel420Digest,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<bool>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let expected = cli
        .expect
        .as_deref()
        .map(|s| s.parse::<Hel420Digest>())
        .transpose()
        .context("invalid --expect digest")?;

    let digest = hel420_digest(&cli.input);
    let matches = expected.map(|e| e == digest);
    debug!(input_len = cli.input.len(), %digest, ?matches, "hashed input");

    if cli.json {
        let report = Report {
            algorithm: ALGORITHM,
            input_len: cli.input.len(),
            digest,
            matches,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{} hash:", ALGORITHM);
        println!("{digest}");
        match matches {
            Some(true) => println!("OK"),
            Some(false) => println!("MISMATCH"),
            None => {}
        }
    }

    Ok(match matches {
        Some(false) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
