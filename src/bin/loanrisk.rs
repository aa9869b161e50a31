//! loanrisk — terminal front end for the loan-default prediction service.
//!
//! Plays the part of the submit form: takes 46 comma-separated features,
//! sends them to the service and shows the verdict.

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use loanrisk::config::Config;
use loanrisk::render::{Report, Style, render_state};
use loanrisk::{FEATURE_COUNT, FeatureVector, PredictionClient, Session, SubmitOutcome, UiState};

/// Loan-default prediction client
#[derive(Parser)]
#[command(name = "loanrisk")]
#[command(version = loanrisk::PKG_VERSION)]
#[command(about = "Score a loan application against a remote prediction service")]
struct Args {
    /// Prediction endpoint URL (overrides the config file)
    #[arg(short, long, env = "LOANRISK_URL")]
    url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one set of features and show the prediction
    Predict {
        /// 46 comma-separated numbers (or omit to read from stdin)
        features: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that input parses, without contacting the service
    Validate {
        /// 46 comma-separated numbers (or omit to read from stdin)
        features: Option<String>,
    },

    /// Enter features line by line; a blank line or EOF quits
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    info!(version = loanrisk::version_string(), "loanrisk starting");

    let config = Config::load(args.config.as_deref())?;
    let style = if config.output.color && !args.no_color && io::stdout().is_terminal() {
        Style::Ansi
    } else {
        Style::Plain
    };

    // Commands that don't need the service
    if let Command::Validate { features } = args.command {
        let text = resolve_features(features, "validate")?;
        return Ok(match FeatureVector::parse(&text) {
            Ok(_) => {
                println!("ok: {FEATURE_COUNT} features");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", render_state(&UiState::Error(e.user_message()), style));
                ExitCode::FAILURE
            }
        });
    }

    let mut client_config = config.client_config();
    if let Some(url) = args.url {
        client_config.url = url;
    }
    if let Some(secs) = args.timeout_secs {
        client_config.timeout = Duration::from_secs(secs);
    }
    info!(url = %client_config.url, "using prediction service");
    let session = Session::new(PredictionClient::new(client_config)?);

    match args.command {
        Command::Predict { features, json } => {
            let text = resolve_features(features, "predict")?;
            let state = match session.submit(&text).await {
                SubmitOutcome::Completed(state) => state,
                SubmitOutcome::Ignored => unreachable!("fresh session has nothing in flight"),
            };
            Ok(print_final(&state, style, json)?)
        }

        Command::Interactive => {
            interactive(&session, style).await?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Validate { .. } => unreachable!("handled above"),
    }
}

/// Show a finished submission; errors go to stderr with a failing exit code.
fn print_final(state: &UiState, style: Style, json: bool) -> loanrisk::Result<ExitCode> {
    match state {
        UiState::Success(result) if json => {
            println!("{}", Report::new(result).to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        UiState::Error(_) => {
            eprintln!("{}", render_state(state, style));
            Ok(ExitCode::FAILURE)
        }
        _ => {
            println!("{}", render_state(state, style));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Form loop: every line is a submission, rendered as its state changes.
async fn interactive(
    session: &Session<PredictionClient>,
    style: Style,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Enter {FEATURE_COUNT} comma-separated features per line (blank line to quit). Service: {}",
        session.service().url()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates = session.subscribe();

    loop {
        print!("features> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        let submit = session.submit(&line);
        tokio::pin!(submit);
        let outcome = loop {
            tokio::select! {
                outcome = &mut submit => break outcome,
                Ok(()) = updates.changed() => {
                    if updates.borrow_and_update().is_loading() {
                        println!("{}", render_state(&UiState::Loading, style));
                    }
                }
            }
        };

        if let Some(state) = outcome.state() {
            println!("{}", render_state(state, style));
        }
    }

    Ok(())
}

/// Resolve feature text from an optional CLI argument or stdin.
///
/// - arg only → arg
/// - stdin only → stdin
/// - both → error (one form, one input)
/// - neither → error
fn resolve_features(
    arg: Option<String>,
    command: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let stdin_is_pipe = !io::stdin().is_terminal();
    let stdin_text = if stdin_is_pipe {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    } else {
        None
    };

    match (arg, stdin_text) {
        (Some(_), Some(_)) => {
            Err(format!("{command}: features given both as argument and on stdin").into())
        }
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => Err(format!(
            "{command}: no input provided (pass features as argument or via stdin)"
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_must_be_positive() {
        let parsed = Args::try_parse_from(["loanrisk", "--timeout-secs", "0", "interactive"]);
        assert!(parsed.is_err());

        let args =
            Args::try_parse_from(["loanrisk", "--timeout-secs", "5", "interactive"]).unwrap();
        assert_eq!(args.timeout_secs, Some(5));
    }
}
