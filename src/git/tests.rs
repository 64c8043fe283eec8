// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::backend::GitOutput;
use super::diff::{DiffChange, DiffSummary, count_lines_in, merge_numstat};
use super::ops::{PullOutcome, PushOutcome, commit_and_push, pull};
use super::outcome::{CommitStep, classify_commit, is_nothing_to_commit};
use super::status::{GitState, GitStatus, classify_divergence, parse_porcelain, probe};
use super::test_utils::ScriptedRunner;

/// A directory with a `.git` marker so the probe gets past its first check.
fn repo_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

// =============================================================================
// Porcelain and divergence classification
// =============================================================================

#[test]
fn test_parse_porcelain_counts_by_code() {
    let listing = " M a.py\nM  b.py\n?? new.py\n D gone.py\nD  staged_gone.py\nR  old.py -> new_name.py\nAM added.py";
    assert_eq!(
        parse_porcelain(listing),
        GitStatus::Dirty {
            changed: 4,
            added: 1,
            deleted: 2,
        }
    );
}

#[test]
fn test_parse_porcelain_ignores_short_lines() {
    assert_eq!(
        parse_porcelain("?\n?? x.py"),
        GitStatus::Dirty {
            changed: 0,
            added: 1,
            deleted: 0,
        }
    );
}

#[test]
fn test_classify_divergence() {
    assert_eq!(classify_divergence(0, 0), GitStatus::Clean);
    assert_eq!(classify_divergence(2, 0), GitStatus::Ahead { commits: 2 });
    assert_eq!(classify_divergence(0, 4), GitStatus::Behind { commits: 4 });
    assert_eq!(
        classify_divergence(1, 3),
        GitStatus::Diverged {
            ahead: 1,
            behind: 3,
        }
    );
}

#[test]
fn test_git_state_serializes_flat() {
    let state = GitState::new(
        "main",
        GitStatus::Dirty {
            changed: 1,
            added: 2,
            deleted: 0,
        },
    );
    insta::assert_snapshot!(
        serde_json::to_string(&state).unwrap(),
        @r#"{"branch":"main","status":"dirty","changed":1,"added":2,"deleted":0}"#
    );

    let state = GitState::new("dev", GitStatus::Diverged { ahead: 1, behind: 2 });
    insta::assert_snapshot!(
        serde_json::to_string(&state).unwrap(),
        @r#"{"branch":"dev","status":"diverged","ahead":1,"behind":2}"#
    );

    insta::assert_snapshot!(
        serde_json::to_string(&GitState::not_a_repo()).unwrap(),
        @r#"{"branch":"unknown","status":"not_a_repo"}"#
    );
}

// =============================================================================
// Probe
// =============================================================================

#[tokio::test]
async fn test_probe_without_git_dir_is_not_a_repo() {
    let dir = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new();

    let state = probe(&runner, dir.path()).await;
    assert_eq!(state.status(), GitStatus::NotARepo);
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_probe_dirty_skips_divergence() {
    let dir = repo_dir();
    let runner = ScriptedRunner::new().dirty(dir.path(), "main", " M a.py\n?? b.py");

    let state = probe(&runner, dir.path()).await;
    assert_eq!(state.branch(), "main");
    assert_eq!(
        state.status(),
        GitStatus::Dirty {
            changed: 1,
            added: 1,
            deleted: 0,
        }
    );
    assert!(
        runner
            .calls_in(dir.path())
            .iter()
            .all(|c| !c.starts_with("rev-list"))
    );
}

#[tokio::test]
async fn test_probe_clean_with_ahead_commits() {
    let dir = repo_dir();
    let runner = ScriptedRunner::new()
        .on(dir.path(), "rev-parse --abbrev-ref HEAD", 0, "feature", "")
        .on(dir.path(), "status --porcelain", 0, "", "")
        .on(dir.path(), "rev-list --count @{u}..HEAD", 0, "3\n", "")
        .on(dir.path(), "rev-list --count HEAD..@{u}", 0, "0\n", "");

    let state = probe(&runner, dir.path()).await;
    assert_eq!(state, GitState::new("feature", GitStatus::Ahead { commits: 3 }));
}

#[tokio::test]
async fn test_probe_missing_upstream_reports_clean() {
    let dir = repo_dir();
    let runner = ScriptedRunner::new()
        .on(dir.path(), "rev-parse --abbrev-ref HEAD", 0, "main", "")
        .on(dir.path(), "status --porcelain", 0, "", "");

    let state = probe(&runner, dir.path()).await;
    assert_eq!(state.status(), GitStatus::Clean);
}

#[tokio::test]
async fn test_probe_status_failure_keeps_branch() {
    let dir = repo_dir();
    let runner = ScriptedRunner::new().on(dir.path(), "rev-parse --abbrev-ref HEAD", 0, "main", "");

    let state = probe(&runner, dir.path()).await;
    assert_eq!(state, GitState::new("main", GitStatus::Unknown));
}

#[tokio::test]
async fn test_probe_timeout_degrades_to_unknown() {
    let dir = repo_dir();
    let runner = ScriptedRunner::new()
        .timeout(dir.path(), "rev-parse --abbrev-ref HEAD")
        .timeout(dir.path(), "status --porcelain");

    let state = probe(&runner, dir.path()).await;
    assert_eq!(state, GitState::new("unknown", GitStatus::Unknown));
    assert!(!state.has_known_branch());
}

#[tokio::test]
async fn test_probe_is_idempotent() {
    let dir = repo_dir();
    let runner = ScriptedRunner::new().dirty(dir.path(), "main", "?? x.py");

    let first = probe(&runner, dir.path()).await;
    let second = probe(&runner, dir.path()).await;
    assert_eq!(first, second);
}

// =============================================================================
// Diff statistics
// =============================================================================

#[test]
fn test_merge_numstat_sums_staged_and_unstaged() {
    let mut changes = Vec::new();
    merge_numstat(&mut changes, "3\t1\ta.py\n-\t-\timage.png");
    merge_numstat(&mut changes, "2\t0\ta.py\n5\t0\tstaged.py");

    assert_eq!(
        changes,
        vec![
            DiffChange::modified("a.py", 5, 1),
            DiffChange::modified("image.png", 0, 0),
            DiffChange::modified("staged.py", 5, 0),
        ]
    );
}

#[test]
fn test_count_lines_like_readlines() {
    assert_eq!(count_lines_in(b""), 0);
    assert_eq!(count_lines_in(b"one"), 1);
    assert_eq!(count_lines_in(b"one\n"), 1);
    assert_eq!(count_lines_in(b"one\ntwo"), 2);
    assert_eq!(count_lines_in(b"\xff\xfe\n\n"), 2);
}

#[test]
fn test_diff_summary_display() {
    let changes = vec![DiffChange::modified("a.py", 3, 1), DiffChange::added("b.py", 5)];
    insta::assert_snapshot!(DiffSummary::of(&changes).to_string(), @"+8 -1 in 2 files");
}

#[test]
fn test_diff_change_serialization() {
    let changes = vec![DiffChange::modified("a.py", 3, 1), DiffChange::added("b.py", 5)];
    insta::assert_snapshot!(
        serde_json::to_string(&changes).unwrap(),
        @r#"[{"file":"a.py","type":"modified","insertions":3,"deletions":1},{"file":"b.py","type":"added","insertions":5}]"#
    );
}

#[tokio::test]
async fn test_diff_stat_with_scripted_output() {
    let dir = repo_dir();
    std::fs::write(dir.path().join("b.py"), "1\n2\n3\n4\n5\n").unwrap();
    let runner = ScriptedRunner::new()
        .on(dir.path(), "diff --numstat", 0, "3\t1\ta.py", "")
        .on(dir.path(), "diff --cached --numstat", 0, "", "")
        .on(
            dir.path(),
            "ls-files --others --exclude-standard -z",
            0,
            "b.py\0missing.py\0",
            "",
        );

    let changes = super::diff_stat(&runner, dir.path()).await;
    assert_eq!(
        changes,
        vec![
            DiffChange::modified("a.py", 3, 1),
            DiffChange::added("b.py", 5),
            DiffChange::added("missing.py", 0),
        ]
    );
}

// =============================================================================
// Commit outcome table
// =============================================================================

#[test]
fn test_nothing_to_commit_markers() {
    assert!(is_nothing_to_commit(
        "On branch main\nnothing to commit, working tree clean"
    ));
    assert!(is_nothing_to_commit(
        "nothing added to commit but untracked files present (use \"git add\" to track)"
    ));
    assert!(is_nothing_to_commit(
        "no changes added to commit (use \"git add\" and/or \"git commit -a\")"
    ));
    assert!(is_nothing_to_commit("NOTHING TO COMMIT"));
    assert!(!is_nothing_to_commit("error: pathspec 'x' did not match"));
}

#[test]
fn test_classify_commit() {
    assert_eq!(
        classify_commit(&GitOutput::new(0, "[main abc1234] msg", "")),
        CommitStep::Committed
    );
    assert_eq!(
        classify_commit(&GitOutput::new(
            1,
            "On branch main\nnothing to commit, working tree clean",
            ""
        )),
        CommitStep::NothingToCommit
    );
    assert_eq!(
        classify_commit(&GitOutput::new(
            128,
            "",
            "fatal: unable to auto-detect email address\n"
        )),
        CommitStep::Failed("fatal: unable to auto-detect email address".to_string())
    );
}

// =============================================================================
// Mutators
// =============================================================================

#[tokio::test]
async fn test_pull_success_and_failure() {
    let ok = Path::new("/work/ok");
    let bad = Path::new("/work/bad");
    let runner = ScriptedRunner::new()
        .on(ok, "pull", 0, "Already up to date.\n", "")
        .on(bad, "pull", 1, "", "fatal: couldn't find remote ref main\n");

    assert_eq!(
        pull(&runner, ok).await,
        PullOutcome::Pulled {
            message: "Already up to date.".to_string()
        }
    );
    assert_eq!(
        pull(&runner, bad).await,
        PullOutcome::Failed {
            error: "fatal: couldn't find remote ref main".to_string()
        }
    );
}

#[tokio::test]
async fn test_commit_and_push_success() {
    let path = Path::new("/work/m");
    let runner = ScriptedRunner::new()
        .on(path, "add --all", 0, "", "")
        .on(path, "commit -m fix things", 0, "[main 1a2b3c4] fix things", "")
        .on(path, "rev-parse --short HEAD", 0, "1a2b3c4\n", "")
        .on(path, "push -u origin main", 0, "", "To origin\n");

    let outcome = commit_and_push(&runner, path, "fix things", "main", "origin").await;
    assert_eq!(
        outcome,
        PushOutcome::Pushed {
            commit: "1a2b3c4".to_string(),
            message: "fix things".to_string(),
        }
    );
    assert_eq!(
        runner.calls_in(path),
        vec![
            "add --all",
            "commit -m fix things",
            "rev-parse --short HEAD",
            "push -u origin main"
        ]
    );
}

#[tokio::test]
async fn test_commit_and_push_stage_failure_stops() {
    let path = Path::new("/work/m");
    let runner = ScriptedRunner::new().on(path, "add --all", 128, "", "fatal: index.lock exists");

    let outcome = commit_and_push(&runner, path, "msg", "main", "origin").await;
    assert_eq!(
        outcome,
        PushOutcome::Failed {
            error: "Failed to stage changes: fatal: index.lock exists".to_string(),
            commit: None,
        }
    );
    assert_eq!(runner.calls_in(path).len(), 1);
}

#[tokio::test]
async fn test_commit_and_push_nothing_to_commit() {
    let path = Path::new("/work/m");
    let runner = ScriptedRunner::new()
        .on(path, "add --all", 0, "", "")
        .on(
            path,
            "commit -m msg",
            1,
            "On branch main\nnothing to commit, working tree clean",
            "",
        );

    let outcome = commit_and_push(&runner, path, "msg", "main", "origin").await;
    assert_eq!(outcome, PushOutcome::NothingToCommit);
}

#[tokio::test]
async fn test_commit_and_push_push_failure_keeps_commit() {
    let path = Path::new("/work/m");
    let runner = ScriptedRunner::new()
        .on(path, "add --all", 0, "", "")
        .on(path, "commit -m msg", 0, "", "")
        .on(path, "push -u origin dev", 1, "", "error: failed to push some refs");

    let outcome = commit_and_push(&runner, path, "msg", "dev", "origin").await;
    assert_eq!(
        outcome,
        PushOutcome::Failed {
            error: "Failed to push: error: failed to push some refs".to_string(),
            commit: Some("unknown".to_string()),
        }
    );
}

#[tokio::test]
async fn test_push_timeout_is_failure() {
    let path = Path::new("/work/m");
    let runner = ScriptedRunner::new()
        .on(path, "add --all", 0, "", "")
        .on(path, "commit -m msg", 0, "", "")
        .on(path, "rev-parse --short HEAD", 0, "abc1234", "")
        .timeout(path, "push -u origin main");

    let outcome = commit_and_push(&runner, path, "msg", "main", "origin").await;
    let PushOutcome::Failed { error, commit } = outcome else {
        panic!("expected failure");
    };
    assert!(error.starts_with("Failed to push: process error:"));
    assert!(error.contains("timed out"));
    assert_eq!(commit.as_deref(), Some("abc1234"));
}

// =============================================================================
// Remote URL (gix)
// =============================================================================

#[test]
fn test_remote_url_of_non_repo_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(super::query::remote_url(dir.path(), "origin").is_err());
}
