// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use adhd_rs::config::Config;
use adhd_rs::config::loader::ConfigLoader;
use adhd_rs::config::types::Visibility;
use adhd_rs::module::record::Layer;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_full_file() {
    let toml = r#"
[global]
output_log_level = 3
file_log_level = 5
log_file = "logs/adhd.log"

[discovery]
marker_file = "pyproject.toml"
project_file = "project.yaml"
max_depth = 4
skip_dirs = ["node_modules", ".venv", "site-packages"]
hidden_layers = ["foundation", "dev"]

[imports]
internal_prefixes = ["cores", "managers", "utils", "mcps"]
extra_stdlib = ["_testcapi"]

[git]
timeout_secs = 10
default_branch = "develop"
remote = "origin"

[github]
api_url = "https://github.example.com/api/v3"
token_env = "GHE_TOKEN"
visibility = "private"

[scaffold]
runtime_dir = "services"
initial_version = "0.0.1"

[context]
core_dir = "cores/instruction_core/data"
synced_dir = ".github"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.discovery.project_file, "project.yaml");
    assert_eq!(
        config.discovery.hidden_layers,
        vec![Layer::Foundation, Layer::Dev]
    );
    assert_eq!(config.imports.extra_stdlib, vec!["_testcapi"]);
    assert_eq!(config.git.default_branch, "develop");
    assert_eq!(config.github.token_env, "GHE_TOKEN");
    assert_eq!(config.github.visibility, Visibility::Private);
    assert_eq!(config.scaffold.folder_for(Layer::Runtime, false), "services");
    assert_eq!(config.scaffold.folder_for(Layer::Dev, false), "utils");
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("logs/adhd.log"))
    );
}

#[test]
fn config_default_sections_serialize() {
    let config = Config::default();
    insta::assert_json_snapshot!(config.git, @r#"
    {
      "timeout_secs": 30,
      "default_branch": "main",
      "remote": "origin"
    }
    "#);
    insta::assert_json_snapshot!(config.github, @r#"
    {
      "api_url": "https://api.github.com",
      "token_env": "GITHUB_TOKEN",
      "visibility": "public"
    }
    "#);
}

#[test]
fn config_builder_layered() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\ntimeout_secs = 10\ndefault_branch = \"develop\"\n")
        .add_toml_str("[git]\ntimeout_secs = 20\n")
        .build()
        .unwrap();
    assert_eq!(config.git.timeout_secs, 20);
    assert_eq!(config.git.default_branch, "develop");
}

#[test]
fn config_builder_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[discovery]\nmax_depth = 2\n")
        .set("discovery.max_depth", 6_i64)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.discovery.max_depth, 6);
}

#[test]
fn config_rejects_bad_layer_and_visibility() {
    assert!(Config::parse("[discovery]\nhidden_layers = [\"plugins\"]\n").is_err());
    assert!(Config::parse("[github]\nvisibility = \"internal\"\n").is_err());
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_format_loaded_files() {
    let loader = ConfigLoader::new().add_toml_str("[git]\nremote = \"upstream\"\n");
    assert_eq!(loader.format_loaded_files(), vec!["1. [string] <string>"]);
}
