//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Each test binary uses only part of the module

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A definition with two sublayers and one direct binding.
pub const BASIC_DEFINITION: &str = r#"
[profile]
name = "Test"

[layers.o.g]
to = [{ shell_command = "open -a 'Google Chrome.app'" }]
description = "Open Google Chrome"

[layers.o.f]
to = [{ shell_command = "open -a 'Finder.app'" }]
description = "Open Finder"

[layers.m.p]
to = [{ consumer_key_code = "play_or_pause" }]
description = "Play / pause"

[layers.f6]
to = [{ key_code = "f6" }]
description = "F6 passthrough"
"#;

/// A definition whose sublayer keys shadow trigger keys.
pub const COLLIDING_DEFINITION: &str = r#"
[layers.o.o]
to = [{ key_code = "a" }]

[layers.o.m]
to = [{ key_code = "b" }]

[layers.m.j]
to = [{ key_code = "c" }]
"#;

/// Writes a definition file into a fresh temp dir.
///
/// Returns the file path and the temp dir guard; the dir is removed when
/// the guard drops, so keep it alive for the duration of the test.
pub fn write_temp_definition(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("hyper.toml");
    fs::write(&path, content).expect("Failed to write definition file");
    (path, temp_dir)
}
