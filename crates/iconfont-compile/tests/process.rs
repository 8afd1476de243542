//! Drive `FantasticonCompiler` against stand-in shell scripts
//!
//! The scripts are run through `sh` so the tests never need the real
//! fantasticon installed.

#![cfg(unix)]

use camino::Utf8PathBuf;
use iconfont_compile::{FantasticonCompiler, CONFIG_FILE_NAME};
use iconfont_core::{AssetType, CompileError, FontCompiler, FontConfig};
use std::time::Duration;

struct Fixture {
    _dir: tempfile::TempDir,
    root: Utf8PathBuf,
    config: FontConfig,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let input = root.join("svgs");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("add.svg"), "<svg/>").unwrap();
    std::fs::write(input.join("zoom.svg"), "<svg/>").unwrap();

    let mut config = FontConfig::new(input, root.join("dist"));
    config.name = "icons".into();
    Fixture {
        _dir: dir,
        root,
        config,
    }
}

fn script_compiler(fixture: &Fixture, body: &str) -> FantasticonCompiler {
    let script = fixture.root.join("fake-fantasticon.sh");
    std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
    FantasticonCompiler::new()
        .with_program("sh")
        .with_args([script.as_str()])
        .with_timeout(Duration::from_secs(10))
}

#[test]
fn test_success_reads_codepoint_map() {
    let fx = fixture();
    let dist = fx.config.output_dir.clone();
    let body = format!(
        "printf '{{\"add\": 61697, \"zoom\": 61698}}' > {dist}/icons.json\ntouch {dist}/icons.woff2 {dist}/icons.css",
        dist = dist
    );
    let compiler = script_compiler(&fx, &body);

    let output = compiler.compile(&fx.config).unwrap();
    assert_eq!(output.icon_names(), vec!["add", "zoom"]);
    assert_eq!(output.codepoints["zoom"], 61698);
    assert!(output.assets.iter().any(|p| p.ends_with("icons.woff2")));
    assert!(output.assets.iter().any(|p| p.ends_with("icons.css")));
    assert!(!output.assets.iter().any(|p| p.ends_with("icons.ttf")));
}

#[test]
fn test_config_file_passed_as_camel_case_json() {
    let fx = fixture();
    let captured = fx.root.join("captured.json");
    let body = format!(
        "[ \"$1\" = \"--config\" ] || exit 3\ncp \"$2\" {captured}\nprintf '{{}}' > {dist}/icons.json",
        captured = captured,
        dist = fx.config.output_dir
    );
    let compiler = script_compiler(&fx, &body);
    compiler.compile(&fx.config).unwrap();

    assert!(fx.config.input_dir.join(CONFIG_FILE_NAME).exists());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&captured).unwrap()).unwrap();
    assert_eq!(json["name"], "icons");
    assert_eq!(json["inputDir"], fx.config.input_dir.as_str());
    assert_eq!(json["prefix"], "wpi");
    assert_eq!(json["normalize"], true);
}

#[test]
fn test_without_json_asset_codepoints_come_from_inputs() {
    let mut fx = fixture();
    fx.config.asset_types = vec![AssetType::Css];
    let compiler = script_compiler(&fx, "exit 0");

    let output = compiler.compile(&fx.config).unwrap();
    assert_eq!(output.icon_names(), vec!["add", "zoom"]);
}

#[test]
fn test_non_zero_exit_carries_stderr() {
    let fx = fixture();
    let compiler = script_compiler(&fx, "echo 'no glyphs found' >&2\nexit 2");

    match compiler.compile(&fx.config) {
        Err(CompileError::Exited { stderr, .. }) => assert_eq!(stderr, "no glyphs found"),
        other => panic!("expected exit failure, got {:?}", other),
    }
}

#[test]
fn test_deadline_kills_process() {
    let fx = fixture();
    let compiler = script_compiler(&fx, "sleep 5").with_timeout(Duration::from_millis(200));

    let started = std::time::Instant::now();
    let err = compiler.compile(&fx.config).unwrap_err();
    assert!(matches!(err, CompileError::Timeout(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_missing_program() {
    let fx = fixture();
    let compiler = FantasticonCompiler::new().with_program("/nonexistent/fantasticon");
    assert!(matches!(
        compiler.compile(&fx.config),
        Err(CompileError::Spawn { .. })
    ));
}

#[test]
fn test_invalid_config_rejected_before_spawn() {
    let mut fx = fixture();
    fx.config.font_types.clear();
    let compiler = FantasticonCompiler::new().with_program("/nonexistent/fantasticon");
    assert!(matches!(
        compiler.compile(&fx.config),
        Err(CompileError::Config(_))
    ));
}

#[test]
fn test_huge_timeout_means_no_deadline() {
    let fx = fixture();
    let compiler = script_compiler(&fx, "exit 0")
        .with_timeout(Duration::from_secs(u64::MAX));
    let mut config = fx.config.clone();
    config.asset_types = vec![AssetType::Css];

    let output = compiler.compile(&config).unwrap();
    assert_eq!(output.icon_names(), vec!["add", "zoom"]);
}
