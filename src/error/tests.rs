// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AdhdError, AdhdResult, ConfigError, GitError, ModuleError, ProcessError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "git".to_string(),
        key: "remote".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'remote' in section '[git]'");
}

#[test]
fn test_boxed_conversion_display() {
    let err: AdhdError = GitError::NotARepository {
        path: "managers/config_manager".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"git error: not a git repository: managers/config_manager");

    let err: AdhdError = ModuleError::NotFound {
        name: "detial_manager".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"module error: module 'detial_manager' not found");
}

#[test]
fn test_is_timeout() {
    let timeout: AdhdError = ProcessError::Timeout {
        command: "git pull".to_string(),
        timeout_secs: 30,
    }
    .into();
    let exit: AdhdError = ProcessError::NonZeroExit {
        command: "git pull".to_string(),
        code: 1,
    }
    .into();

    assert!(timeout.is_timeout());
    assert!(!exit.is_timeout());
}

#[test]
fn test_adhd_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<AdhdError>();
    assert!(size <= 24, "AdhdError is {size} bytes, expected <= 24");
}

#[test]
fn test_adhd_result_size() {
    let size = std::mem::size_of::<AdhdResult<()>>();
    assert!(size <= 24, "AdhdResult<()> is {size} bytes, expected <= 24");
}
