// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            info / modules / git
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          project          |
//!              |  operations, JSON results |
//!              '--+---------+---------+----'
//!                 |         |         |
//!                 v         v         v
//!              module     batch      net
//!            discovery  git fan-out  GitHub
//!             metadata      |
//!                 |         v
//!                 v        git
//!              imports   probe/ops
//!
//!   +------------------------------------------+
//!   |  core   process runner                   |
//!   +------------------------------------------+
//!   |  foundation   config, error, logging,    |
//!   |               scaffold, utility          |
//!   +------------------------------------------+
//! ```

pub mod batch;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod imports;
pub mod logging;
pub mod module;
pub mod net;
pub mod project;
pub mod scaffold;
pub mod utility;
