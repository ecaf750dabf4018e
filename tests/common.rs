#![allow(dead_code)]

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn wgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("wgraph");
    cmd.env_remove("WGRAPH_CONFIG");
    cmd
}

/// A -> B (1), A -> C (4), B -> C (2), B -> D (5), C -> D (1)
pub const REFERENCE_TOML: &str = r#"
vertices = ["A", "B", "C", "D"]

[[edges]]
from = "A"
to = "B"
weight = 1

[[edges]]
from = "A"
to = "C"
weight = 4

[[edges]]
from = "B"
to = "C"
weight = 2

[[edges]]
from = "B"
to = "D"
weight = 5

[[edges]]
from = "C"
to = "D"
weight = 1
"#;

/// A -> B only, with Z isolated
pub const ISLAND_JSON: &str = r#"{
  "vertices": ["A", "B", "Z"],
  "edges": [{"from": "A", "to": "B", "weight": 2}]
}"#;

/// Open 2x2 maze with unit weights
pub const MAZE_TOML: &str = r#"
[maze]
width = 2
height = 2
"#;

pub fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test document");
    path
}
