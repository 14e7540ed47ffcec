//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::loader::{DataSource, DirSource, HttpSource};
use crate::session::DEFAULT_PROMPT;

fn parse_pace(s: &str) -> Result<f64, String> {
    let pace: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if pace.is_finite() && pace >= 0.0 {
        Ok(pace)
    } else {
        Err(format!("boot pace must be a non-negative number, got {s}"))
    }
}

/// A terminal-themed personal portfolio
#[derive(Debug, Clone, Parser)]
#[command(name = "termfolio", version, about)]
pub struct Config {
    /// Directory holding about.json, hobbies.json and workouts.json
    #[arg(long, env = "TERMFOLIO_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Base URL to fetch the documents from instead of --data-dir
    #[arg(long, env = "TERMFOLIO_DATA_URL")]
    pub data_url: Option<String>,

    /// Text shown before the cursor
    #[arg(long, env = "TERMFOLIO_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Multiplier for every boot animation delay, 0 skips the wait
    #[arg(long, env = "TERMFOLIO_BOOT_PACE", default_value_t = 1.0, value_parser = parse_pace)]
    pub boot_pace: f64,

    /// Where logs are written; the terminal itself is taken by the interface
    #[arg(long, env = "TERMFOLIO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("termfolio.log"))
    }

    pub fn data_source(&self) -> Box<dyn DataSource> {
        match &self.data_url {
            Some(url) => Box::new(HttpSource::new(url.as_str())),
            None => Box::new(DirSource::new(&self.data_dir)),
        }
    }
}
