// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for subprocess management.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   Builder --> Output
//!   timeout, ALLOW_FAILURE
//! ```

pub mod process;
