//! Settings tests - command line over settings file over defaults

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use tui_blockfall::core::GameConfig;
use tui_blockfall::settings::{load_config, resolve, Args, Settings};
use tui_blockfall::types::{CellKind, Rgb};

fn write_temp(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tui-blockfall-{}-{name}", std::process::id()));
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_cli_flags_parse() {
    let args = Args::try_parse_from([
        "tui-blockfall",
        "--rows",
        "12",
        "--cols",
        "8",
        "--tick-ms",
        "250",
        "--seed",
        "5",
    ])
    .unwrap();
    assert_eq!(args.rows, Some(12));
    assert_eq!(args.cols, Some(8));
    assert_eq!(args.tick_ms, Some(250));
    assert_eq!(args.seed, Some(5));
    assert_eq!(args.config, None);

    let config = resolve(&args, &Settings::default()).unwrap();
    assert_eq!((config.cols, config.rows), (8, 12));
    assert_eq!(config.drop_tick_ms, 250);
    assert_eq!(config.frame_ms, GameConfig::default().frame_ms);
}

#[test]
fn test_cli_overrides_file() {
    let path = write_temp(
        "override.json",
        r#"{"rows": 16, "cols": 6, "cell_width": 1}"#,
    );
    let args = Args::try_parse_from([
        "tui-blockfall",
        "--cols",
        "9",
        "--config",
        path.to_str().unwrap(),
    ])
    .unwrap();

    let config = load_config(&args).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.rows, 16);
    assert_eq!(config.cols, 9);
    assert_eq!(config.cell_width, 1);
    assert_eq!(config.cell_height, 1);
}

#[test]
fn test_file_palette_applies() {
    let settings = Settings {
        palette: Some([
            [10, 10, 10],
            [0, 255, 255],
            [0, 0, 255],
            [255, 165, 0],
            [255, 255, 0],
            [0, 255, 0],
            [255, 0, 0],
            [200, 100, 200],
        ]),
        ..Settings::default()
    };
    let config = resolve(&Args::default(), &settings).unwrap();
    assert_eq!(config.palette.background(), Rgb::new(10, 10, 10));
    assert_eq!(config.palette.color(CellKind::T), Rgb::new(200, 100, 200));
    assert_eq!(config.palette.color(CellKind::I), CellKind::I.color());
}

#[test]
fn test_invalid_values_fail() {
    let args = Args::try_parse_from(["tui-blockfall", "--rows", "0"]).unwrap();
    let err = resolve(&args, &Settings::default()).unwrap_err();
    assert!(format!("{err:#}").contains("rows must be greater than zero"));

    // Too narrow for the 4-wide I.
    let args = Args::try_parse_from(["tui-blockfall", "--cols", "3"]).unwrap();
    assert!(resolve(&args, &Settings::default()).is_err());
}

#[test]
fn test_oversized_canvas_fails_at_startup() {
    let args = Args::try_parse_from(["tui-blockfall", "--cols", "70", "--cell-width", "1000"])
        .unwrap();
    let err = resolve(&args, &Settings::default()).unwrap_err();
    assert!(format!("{err:#}").contains("canvas 70000x20"));

    // Same board with a cell size that fits is accepted.
    let args = Args::try_parse_from(["tui-blockfall", "--cols", "70", "--cell-width", "900"])
        .unwrap();
    assert_eq!(resolve(&args, &Settings::default()).unwrap().cols, 70);
}

#[test]
fn test_missing_or_malformed_file_fails() {
    let args = Args {
        config: Some(std::env::temp_dir().join("tui-blockfall-does-not-exist.json")),
        ..Args::default()
    };
    assert!(load_config(&args).is_err());

    let path = write_temp("bad.json", "{ rows: 3 }");
    let args = Args {
        config: Some(path.clone()),
        ..Args::default()
    };
    let result = load_config(&args);
    fs::remove_file(&path).unwrap();
    assert!(result.is_err());
}
