//! Command-line options and startup configuration.

use anyhow::Context;
use clap::Parser;
use drill_core::{DrillSettings, DEFAULT_THRESHOLD};
use std::path::PathBuf;

const VOCABULARY_FILE: &str = "vocabulary.json";

#[derive(Debug, Parser)]
#[command(name = "shogun", version, about = "Learn Japanese kanji in the terminal.")]
pub struct Cli {
    /// Display the kana transcription of the kanji
    #[arg(long)]
    pub kana: bool,

    /// Display the correct answer
    #[arg(long)]
    pub answer: bool,

    /// Vocabulary JSON file (default: vocabulary.json next to the executable)
    #[arg(long, env = "SHOGUN_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,

    /// Minimum similarity (0.0-1.0) for an answer to count as correct
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Write logs to this file
    #[arg(long, env = "SHOGUN_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("{threshold} is not between 0.0 and 1.0"))
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub vocabulary: PathBuf,
    pub settings: DrillSettings,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let vocabulary = match cli.vocabulary {
            Some(path) => path,
            None => default_vocabulary_path()?,
        };

        Ok(Self {
            vocabulary,
            settings: DrillSettings {
                show_phonetic: cli.kana,
                show_translation: cli.answer,
                threshold: cli.threshold,
            },
            log_file: cli.log_file,
        })
    }
}

/// `vocabulary.json` in the directory containing the running executable.
pub fn default_vocabulary_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to get the executable path")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.join(VOCABULARY_FILE))
}
