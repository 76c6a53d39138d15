use std::collections::BTreeSet;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sanitise_core::{
    detect_script_families, encode, get_lossy_characters, get_non_compatible_characters,
    is_extended_language, resolve, CharacterProfile, ScriptFamily,
};
use serde::Serialize;

mod config;
mod logging;

use config::SanitiseConfig;

#[derive(Parser)]
#[command(
    name = "sanitise",
    about = "Inspect and downgrade message text for SMS (GSM 03.38) and ASCII channels"
)]
struct Cli {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, global = true, default_value = "sanitise.toml")]
    config: PathBuf,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print TEXT (or stdin) downgraded for the target profile
    Encode {
        text: Option<String>,
        #[arg(long)]
        profile: Option<CharacterProfile>,
    },
    /// Print a JSON report of the characters the profile cannot carry
    Scan {
        text: Option<String>,
        #[arg(long)]
        profile: Option<CharacterProfile>,
    },
    /// Report whether TEXT belongs to a script that needs extended encoding
    Classify { text: Option<String> },
    /// Resolve a four-hex-digit codepoint literal such as 00E9
    Resolve { literal: String },
}

#[derive(Serialize)]
struct ScanReport {
    profile: CharacterProfile,
    non_compatible: BTreeSet<char>,
    lossy: BTreeSet<char>,
    extended_language: bool,
    script_families: BTreeSet<ScriptFamily>,
}

impl ScanReport {
    fn build(text: &str, profile: CharacterProfile) -> Self {
        Self {
            profile,
            non_compatible: get_non_compatible_characters(text, profile),
            lossy: get_lossy_characters(text, profile),
            extended_language: is_extended_language(text),
            script_families: detect_script_families(text),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (cfg, source) = SanitiseConfig::load(&cli.config)?;
    logging::init(&cfg.logging)?;
    source.log(&cli.config);
    tracing::debug!(config = %cli.config.display(), profile = %cfg.profile.default, "starting");

    match cli.cmd {
        Cmd::Encode { text, profile } => {
            let profile = profile.unwrap_or(cfg.profile.default);
            let text = input(text)?;
            println!("{}", encode(&text, profile));
        }
        Cmd::Scan { text, profile } => {
            let profile = profile.unwrap_or(cfg.profile.default);
            let text = input(text)?;
            let report = ScanReport::build(&text, profile);
            if !report.lossy.is_empty() {
                tracing::warn!(%profile, lossy = report.lossy.len(), "message contains characters that will be lost");
            }
            let json = if cfg.report.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Cmd::Classify { text } => {
            let text = input(text)?;
            let families: Vec<&str> = detect_script_families(&text)
                .into_iter()
                .map(ScriptFamily::name)
                .collect();
            println!(
                "extended_language={} families=[{}]",
                is_extended_language(&text),
                families.join(", ")
            );
        }
        Cmd::Resolve { literal } => {
            let ch = resolve(&literal).with_context(|| format!("resolving {literal:?}"))?;
            println!("{ch} U+{:04X}", ch as u32);
        }
    }
    Ok(())
}

/// The positional text, or all of stdin minus one trailing line break.
fn input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading message text from stdin")?;
    Ok(strip_line_break(&buf).to_string())
}

/// Drop one trailing `\n` or `\r\n`, as left by `echo` or a terminal.
fn strip_line_break(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(text)
}
