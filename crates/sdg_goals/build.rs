use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const GOAL_COUNT: u8 = 17;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalRecord {
    number: u8,
    name: String,
    color: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GoalCatalog {
    schema_version: u32,
    goal: Vec<GoalRecord>,
}

fn is_hex_color(raw: &str) -> bool {
    raw.len() == 7
        && raw.starts_with('#')
        && raw[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("goals.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: GoalCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if catalog.schema_version != 1 {
        panic!(
            "goal catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }
    if catalog.goal.len() != usize::from(GOAL_COUNT) {
        panic!(
            "goal catalog in {} must list {GOAL_COUNT} goals, found {}",
            path.display(),
            catalog.goal.len()
        );
    }
    for (idx, record) in catalog.goal.iter().enumerate() {
        let expected = idx as u8 + 1;
        if record.number != expected {
            panic!(
                "goal catalog out of order in {}: expected goal {expected} found {}",
                path.display(),
                record.number
            );
        }
        if record.name.trim().is_empty() {
            panic!("goal {} in {} has an empty name", record.number, path.display());
        }
        if !is_hex_color(&record.color) {
            panic!(
                "goal {} in {} has color `{}`; expected #rrggbb",
                record.number,
                path.display(),
                record.color
            );
        }
    }

    let json = serde_json::to_string_pretty(&catalog.goal).expect("serialize goal catalog");
    let generated = format!(
        "/// Build-time generated goal catalog JSON.\n\
const GOAL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("goal_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
