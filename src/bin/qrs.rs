//! Command line front end for qr-shortener.
//!
//! Issues mock short links and renders QR codes without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL and print QR codes for both URLs
//! cargo run --bin qrs -- shorten https://example.com
//!
//! # Prompt for the URL and copy the short link
//! cargo run --bin qrs -- shorten --copy
//!
//! # Render a styled QR code to a file
//! cargo run --bin qrs -- qr https://example.com --level H --fg "#4F46E5" --margin -o qr.svg
//! ```
//!
//! # Environment Variables
//!
//! - `SHORT_URL_PREFIX` (optional): prefix of issued short links
//! - `RUST_LOG` (optional): log filter, logs go to stderr (default: `warn`)

use qr_shortener::application::services::LinkService;
use qr_shortener::application::services::qr_service::{
    DEFAULT_BG_COLOR, DEFAULT_FG_COLOR, DEFAULT_SIZE, ErrorCorrection, QrOptions, render_svg,
    render_terminal,
};
use qr_shortener::application::submission::{Submission, SubmissionState};
use qr_shortener::config::Config;
use qr_shortener::domain::clipboard::{SystemClipboard, copy_to_clipboard};
use qr_shortener::domain::random_source::ThreadRandomSource;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for qr-shortener.
#[derive(Parser)]
#[command(name = "qrs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a mock short link for a URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Do not print QR codes
        #[arg(long)]
        no_qr: bool,
    },

    /// Render a QR code as SVG
    Qr {
        /// Text to encode
        value: String,

        /// Size in pixels
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: u32,

        /// Error correction level: L, M, Q or H
        #[arg(short, long, default_value = "L")]
        level: String,

        /// Foreground color
        #[arg(long, default_value = DEFAULT_FG_COLOR)]
        fg: String,

        /// Background color
        #[arg(long, default_value = DEFAULT_BG_COLOR)]
        bg: String,

        /// Add a quiet zone around the symbol
        #[arg(short, long)]
        margin: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shorten { url, copy, no_qr } => handle_shorten(url, copy, no_qr),
        Commands::Qr {
            value,
            size,
            level,
            fg,
            bg,
            margin,
            output,
        } => {
            let options = QrOptions {
                size,
                fg_color: fg,
                bg_color: bg,
                level: level.parse::<ErrorCorrection>()?,
                include_margin: margin,
                image: None,
            };
            handle_qr(&value, &options, output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs one submission and prints its outcome.
fn handle_shorten(url: Option<String>, copy: bool, no_qr: bool) -> Result<ExitCode> {
    let config = Config::from_env();
    config.validate()?;

    let links = LinkService::new(Arc::new(ThreadRandomSource), config.short_url_prefix);

    let url = match url {
        Some(url) => url,
        None => Input::<String>::new()
            .with_prompt("Enter your long URL")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read URL")?,
    };

    let mut submission = Submission::new(url);
    match submission.submit(&links) {
        SubmissionState::Success(result) => {
            println!("{}", "Original URL:".bold());
            println!("  {}", result.original_url);
            println!("{}", "Shortened URL:".bold());
            println!("  {}", result.short_url.green());

            if !no_qr {
                print_qr("Original URL QR", &result.original_url);
                print_qr("Shortened URL QR", &result.short_url);
            }

            if copy && copy_to_clipboard(&SystemClipboard, &result.short_url) {
                println!("{}", "Copied short URL to clipboard".dimmed());
            }

            Ok(ExitCode::SUCCESS)
        }
        SubmissionState::Failed(message) => {
            eprintln!("{} {}", "Error:".red().bold(), message);
            Ok(ExitCode::FAILURE)
        }
        SubmissionState::Idle | SubmissionState::Validating => {
            anyhow::bail!("Submission did not complete")
        }
    }
}

/// Prints a terminal QR code, or the reason it could not be rendered.
fn print_qr(title: &str, value: &str) {
    println!();
    println!("{}", title.cyan().bold());
    match render_terminal(value) {
        Ok(art) => println!("{}", art),
        Err(e) => println!("  {}", e.to_string().yellow()),
    }
}

/// Writes the SVG to `output` or stdout.
fn handle_qr(value: &str, options: &QrOptions, output: Option<PathBuf>) -> Result<()> {
    let svg = render_svg(value, options)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", svg),
    }

    Ok(())
}
