//! Command line and settings file, resolved into a [`GameConfig`].
//!
//! Precedence per field: command line, then settings file, then the built-in
//! default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Palette};
use crate::types::Rgb;

#[derive(Debug, Default, Parser)]
#[command(
    name = "tui-blockfall",
    version,
    about = "Falling-block puzzle in the terminal"
)]
pub struct Args {
    /// Board height in cells.
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<u16>,

    /// Board width in cells.
    #[arg(long, value_name = "COLS")]
    pub cols: Option<u16>,

    /// Milliseconds between gravity steps.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u32>,

    /// Upper bound on one input wait, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u32>,

    /// Terminal columns per board cell.
    #[arg(long, value_name = "N")]
    pub cell_width: Option<u16>,

    /// Terminal rows per board cell.
    #[arg(long, value_name = "N")]
    pub cell_height: Option<u16>,

    /// Seed for piece selection. Random when omitted.
    #[arg(long)]
    pub seed: Option<u32>,

    /// JSON settings file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs here (filtered by RUST_LOG, default info).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Contents of the JSON settings file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: Option<u16>,
    pub cols: Option<u16>,
    pub tick_ms: Option<u32>,
    pub frame_ms: Option<u32>,
    pub cell_width: Option<u16>,
    pub cell_height: Option<u16>,
    /// Background first, then I, J, L, O, S, Z, T.
    pub palette: Option<[[u8; 3]; 8]>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn palette(&self) -> Option<Palette> {
        self.palette
            .map(|colors| Palette::from_colors(colors.map(|[r, g, b]| Rgb::new(r, g, b))))
    }
}

/// Merge `args` over `settings` over [`GameConfig::default`] and validate.
pub fn resolve(args: &Args, settings: &Settings) -> Result<GameConfig> {
    let base = GameConfig::default();
    let config = GameConfig {
        rows: args.rows.or(settings.rows).unwrap_or(base.rows),
        cols: args.cols.or(settings.cols).unwrap_or(base.cols),
        cell_width: args
            .cell_width
            .or(settings.cell_width)
            .unwrap_or(base.cell_width),
        cell_height: args
            .cell_height
            .or(settings.cell_height)
            .unwrap_or(base.cell_height),
        drop_tick_ms: args
            .tick_ms
            .or(settings.tick_ms)
            .unwrap_or(base.drop_tick_ms),
        frame_ms: args.frame_ms.or(settings.frame_ms).unwrap_or(base.frame_ms),
        palette: settings.palette().unwrap_or(base.palette),
        shapes: base.shapes,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Read the settings file named by `--config`, if any, and resolve.
pub fn load_config(args: &Args) -> Result<GameConfig> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    resolve(args, &settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellKind;

    #[test]
    fn defaults_when_nothing_given() {
        let config = resolve(&Args::default(), &Settings::default()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn palette_from_file() {
        let settings = Settings::from_json(
            r#"{"palette": [[1,1,1],[2,2,2],[3,3,3],[4,4,4],[5,5,5],[6,6,6],[7,7,7],[8,8,8]]}"#,
        )
        .unwrap();
        let config = resolve(&Args::default(), &settings).unwrap();
        assert_eq!(config.palette.background(), Rgb::new(1, 1, 1));
        assert_eq!(config.palette.color(CellKind::T), Rgb::new(8, 8, 8));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Settings::from_json(r#"{"speed": 3}"#).is_err());
    }
}
