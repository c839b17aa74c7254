//! End-to-end tests for the sdobjects binary

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Player 2 start facing south, a multiplayer-only trooper, a barrel
const LUMP: [u8; 20] = [
    0x07, 0x01, 0xFF, 0x00, 0x01, 0x00, 0xC0, 0x00, //
    0x14, 0x08, 0x00, 0x40, 0xFF, 0xC0, //
    0x00, 0x31, 0x00, 0x00, 0x00, 0x08,
];

fn sdobjects(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sdobjects"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to run sdobjects")
}

fn read_thing(data: &[u8], index: usize) -> [i16; 5] {
    let mut fields = [0i16; 5];
    for (i, field) in fields.iter_mut().enumerate() {
        let at = index * 10 + i * 2;
        *field = i16::from_le_bytes([data[at], data[at + 1]]);
    }
    fields
}

#[test]
fn test_print_listing() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("OBJECTS.01"), LUMP).unwrap();

    let output = sdobjects(&["--print", "--file", "OBJECTS.01"], dir.path());
    assert!(output.status.success());

    let listing: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON document");
    let objects = listing["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 3);

    assert_eq!(objects[0]["type"], "Player2Start");
    assert_eq!(objects[0]["flags"], "EASY|MEDIUM|HARD");
    assert_eq!(objects[0]["coords"], serde_json::json!([-256, 256]));
    assert_eq!(objects[0]["angle"], 270);

    assert_eq!(objects[1]["num"], 1);
    assert_eq!(objects[1]["type"], "Trooper");
    assert_eq!(objects[1]["flags"], "HARD|MULTI");
    assert_eq!(objects[1]["angle"], 0);

    assert_eq!(objects[2]["type"], "Barrel");
    assert_eq!(objects[2]["flags"], "");
}

#[test]
fn test_banner_without_print() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = sdobjects(&[], dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("sdobjects - SNES Doom objects converter program"));
}

#[test]
fn test_convert_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("objects");
    std::fs::create_dir(&input).unwrap();
    std::fs::write(input.join("OBJECTS.03"), LUMP).unwrap();
    std::fs::write(input.join("extra.lmp"), &LUMP[..8]).unwrap();

    let output = sdobjects(&["--out", "things", "--dir", "objects"], dir.path());
    assert!(output.status.success());

    let things = dir.path().join("things");
    let data = std::fs::read(things.join("THINGS.03")).expect("THINGS.03 should exist");
    assert_eq!(data.len(), 30);
    // x, y, angle, type, options
    assert_eq!(read_thing(&data, 0), [-256, 256, 270, 2, 0x07]);
    assert_eq!(read_thing(&data, 1), [64, -64, 0, 3001, 0x14]);
    assert_eq!(read_thing(&data, 2), [0, 8, 0, 2035, 0]);

    let extra = std::fs::read(things.join("THINGS.0")).expect("THINGS.0 should exist");
    assert_eq!(extra.len(), 10);
}

#[test]
fn test_missing_file_does_not_abort() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("OBJECTS.02"), LUMP).unwrap();

    let output = sdobjects(
        &["--out", "out", "--file", "missing.lmp", "OBJECTS.02"],
        dir.path(),
    );
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not open file 'missing.lmp' for input"));
    assert!(dir.path().join("out").join("THINGS.02").exists());
}

#[test]
fn test_unknown_types_from_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut lump = LUMP.to_vec();
    lump.extend_from_slice(&[0x00, 0x50, 0x00, 0x00, 0x00, 0x00]);
    std::fs::write(dir.path().join("OBJECTS.09"), &lump).unwrap();

    // Rejected by default
    let output = sdobjects(&["--out", "out", "--file", "OBJECTS.09"], dir.path());
    assert!(output.status.success());
    assert!(!dir.path().join("out").join("THINGS.09").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write output file"));

    std::fs::write(
        dir.path().join("sdobjects.toml"),
        "[output]\nunknown_types = \"skip\"\n",
    )
    .unwrap();
    let output = sdobjects(&["--out", "out", "--file", "OBJECTS.09"], dir.path());
    assert!(output.status.success());

    let data = std::fs::read(dir.path().join("out").join("THINGS.09")).unwrap();
    assert_eq!(data.len(), 30);
}

#[test]
fn test_invalid_explicit_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("bad.toml"), "print = \"yes\"\n").unwrap();

    let output = sdobjects(&["--config", "bad.toml"], dir.path());
    assert!(!output.status.success());
}
