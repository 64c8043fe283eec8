// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::*;
use crate::config::types::GitConfig;
use crate::git::test_utils::ScriptedRunner;
use crate::module::record::ModuleRecord;
use tempfile::TempDir;

/// Module directories under one temp root; `repo` ones carry a `.git` marker.
struct Fixture {
    root: TempDir,
    modules: Vec<ModuleRecord>,
}

impl Fixture {
    fn new(names: &[(&str, bool)]) -> Self {
        let root = tempfile::tempdir().unwrap();
        let modules = names
            .iter()
            .map(|(name, repo)| {
                let path = root.path().join(name);
                std::fs::create_dir_all(&path).unwrap();
                if *repo {
                    std::fs::create_dir(path.join(".git")).unwrap();
                }
                ModuleRecord::builder()
                    .with_name(*name)
                    .with_path(path)
                    .with_repo_url(format!("https://github.com/adhd/{name}"))
                    .build()
            })
            .collect();
        Self { root, modules }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn refs(&self) -> Vec<&ModuleRecord> {
        self.modules.iter().collect()
    }
}

fn batch(runner: &ScriptedRunner) -> BatchRunner<'_, ScriptedRunner> {
    BatchRunner::new(runner, &GitConfig::default())
}

fn names<T>(entries: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    entries.iter().map(|e| name(e).to_string()).collect()
}

// ============================================================================
// Action parsing
// ============================================================================

#[test]
fn test_git_action_parse() {
    assert_eq!("push".parse::<GitAction>().unwrap(), GitAction::Push);
    assert_eq!(GitAction::Diff.to_string(), "diff");

    let err = "fetch".parse::<GitAction>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid action 'fetch' (expected one of: status, diff, pull, push)");
}

// ============================================================================
// Status and diff
// ============================================================================

#[tokio::test]
async fn test_status_reports_every_module() {
    let fx = Fixture::new(&[("alpha", true), ("beta", true), ("plain", false)]);
    let runner = ScriptedRunner::new()
        .clean(&fx.path("alpha"), "main")
        .dirty(&fx.path("beta"), "dev", " M a.py\n?? b.py");

    let report = batch(&runner)
        .run(GitAction::Status, &fx.refs(), None)
        .await
        .unwrap();

    assert!(report.success());
    assert_eq!(report.partitioned(), None);
    insta::assert_json_snapshot!(report, @r#"
    {
      "action": "status",
      "modules": [
        {
          "name": "alpha",
          "repo_url": "https://github.com/adhd/alpha",
          "remote_url": null,
          "branch": "main",
          "status": "clean"
        },
        {
          "name": "beta",
          "repo_url": "https://github.com/adhd/beta",
          "remote_url": null,
          "branch": "dev",
          "status": "dirty",
          "changed": 1,
          "added": 1,
          "deleted": 0
        },
        {
          "name": "plain",
          "repo_url": "https://github.com/adhd/plain",
          "remote_url": null,
          "branch": "unknown",
          "status": "not_a_repo"
        }
      ],
      "count": 3
    }
    "#);
}

#[tokio::test]
async fn test_diff_only_lists_dirty_modules() {
    let fx = Fixture::new(&[("clean_one", true), ("dirty_one", true)]);
    let dirty = fx.path("dirty_one");
    std::fs::write(dirty.join("b.py"), "1\n2\n3\n4\n5\n").unwrap();
    let runner = ScriptedRunner::new()
        .clean(&fx.path("clean_one"), "main")
        .dirty(&dirty, "main", " M a.py\n?? b.py")
        .on(&dirty, "diff --numstat", 0, "3\t1\ta.py\n", "")
        .on(&dirty, "diff --cached --numstat", 0, "", "")
        .on(&dirty, "ls-files --others --exclude-standard -z", 0, "b.py\0", "");

    let report = batch(&runner)
        .run(GitAction::Diff, &fx.refs(), None)
        .await
        .unwrap();

    let BatchReport::Diff { modules, count } = &report else {
        panic!("expected diff report, got {report:?}");
    };
    assert_eq!(*count, 1);
    assert_eq!(modules[0].name, "dirty_one");
    assert_eq!(modules[0].diff_summary, "+8 -1 in 2 files");
    assert!(runner.calls_in(&fx.path("clean_one")).iter().all(|c| !c.starts_with("diff")));
}

// ============================================================================
// Pull
// ============================================================================

/// Ten modules, the even ones dirty; `fail` names a clean module whose pull fails.
async fn pull_ten(fail: Option<&str>) -> (Fixture, ScriptedRunner, BatchReport) {
    let names: Vec<String> = (0..10).map(|i| format!("mod_{i}")).collect();
    let layout: Vec<(&str, bool)> = names.iter().map(|n| (n.as_str(), true)).collect();
    let fx = Fixture::new(&layout);

    let mut runner = ScriptedRunner::new();
    for (i, name) in names.iter().enumerate() {
        let path = fx.path(name);
        if i % 2 == 0 {
            runner = runner.dirty(&path, "main", " M x.py");
        } else if Some(name.as_str()) == fail {
            runner = runner.clean(&path, "main").on(
                &path,
                "pull",
                1,
                "",
                "fatal: couldn't find remote ref main",
            );
        } else {
            runner = runner
                .clean(&path, "main")
                .on(&path, "pull", 0, "Already up to date.\n", "");
        }
    }

    let report = batch(&runner)
        .run(GitAction::Pull, &fx.refs(), None)
        .await
        .unwrap();
    (fx, runner, report)
}

#[tokio::test]
async fn test_pull_skips_dirty_modules() {
    let (fx, runner, report) = pull_ten(None).await;

    let BatchReport::Pull {
        pulled,
        failed,
        skipped,
    } = &report
    else {
        panic!("expected pull report, got {report:?}");
    };
    assert_eq!(pulled.len(), 5);
    assert!(failed.is_empty());
    assert_eq!(skipped.len(), 5);
    assert!(skipped.iter().all(|s| s.reason == SKIP_UNCOMMITTED));
    assert_eq!(pulled[0].message, "Already up to date.");
    assert!(report.success());
    assert_eq!(report.partitioned(), Some(10));
    assert!(!runner.calls_in(&fx.path("mod_0")).contains(&"pull".to_string()));
}

#[tokio::test]
async fn test_pull_failure_does_not_stop_batch() {
    let (_fx, _runner, report) = pull_ten(Some("mod_3")).await;

    let BatchReport::Pull {
        pulled,
        failed,
        skipped,
    } = &report
    else {
        panic!("expected pull report, got {report:?}");
    };
    assert_eq!(names(failed, |f| f.name.as_str()), vec!["mod_3"]);
    insta::assert_snapshot!(&failed[0].error, @"fatal: couldn't find remote ref main");
    assert_eq!(
        names(pulled, |p| p.name.as_str()),
        vec!["mod_1", "mod_5", "mod_7", "mod_9"]
    );
    assert_eq!(skipped.len(), 5);
    assert!(!report.success());
    assert_eq!(report.partitioned(), Some(10));
}

#[tokio::test]
async fn test_pull_skips_non_repositories_and_survives_timeouts() {
    let fx = Fixture::new(&[("plain", false), ("slow", true)]);
    let slow = fx.path("slow");
    let runner = ScriptedRunner::new().clean(&slow, "main").timeout(&slow, "pull");

    let report = batch(&runner)
        .run(GitAction::Pull, &fx.refs(), None)
        .await
        .unwrap();

    insta::assert_json_snapshot!(report, @r#"
    {
      "action": "pull",
      "pulled": [],
      "failed": [
        {
          "name": "slow",
          "error": "process error: process 'git pull' timed out after 30 seconds"
        }
      ],
      "skipped": [
        {
          "name": "plain",
          "reason": "not a repository"
        }
      ]
    }
    "#);
}

// ============================================================================
// Push
// ============================================================================

#[tokio::test]
async fn test_push_requires_message_before_probing() {
    let fx = Fixture::new(&[("m", true)]);
    let runner = ScriptedRunner::new();

    for message in [None, Some(""), Some("   ")] {
        let err = batch(&runner)
            .run(GitAction::Push, &fx.refs(), message)
            .await
            .unwrap_err();
        assert!(matches!(err, ModuleError::CommitMessageRequired));
    }
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_push_partitions_modules() {
    let fx = Fixture::new(&[
        ("clean_mod", true),
        ("detached", true),
        ("lost_race", true),
        ("rejected", true),
    ]);
    let detached = fx.path("detached");
    let lost_race = fx.path("lost_race");
    let rejected = fx.path("rejected");

    let runner = ScriptedRunner::new()
        .clean(&fx.path("clean_mod"), "main")
        // Branch lookup fails: push goes to the default branch.
        .on(&detached, "rev-parse --abbrev-ref HEAD", 128, "", "fatal")
        .on(&detached, "status --porcelain", 0, "?? new.py", "")
        .on(&detached, "add --all", 0, "", "")
        .on(&detached, "commit -m sync", 0, "[main abc1234] sync", "")
        .on(&detached, "rev-parse --short HEAD", 0, "abc1234\n", "")
        .on(&detached, "push -u origin main", 0, "", "")
        .dirty(&lost_race, "dev", " M a.py")
        .on(&lost_race, "add --all", 0, "", "")
        .on(&lost_race, "commit -m sync", 1, "nothing to commit, working tree clean", "")
        .dirty(&rejected, "feature", " D old.py")
        .on(&rejected, "add --all", 0, "", "")
        .on(&rejected, "commit -m sync", 0, "", "")
        .on(&rejected, "rev-parse --short HEAD", 0, "def5678", "")
        .on(&rejected, "push -u origin feature", 1, "", "! [rejected] feature -> feature (fetch first)");

    let report = batch(&runner)
        .run(GitAction::Push, &fx.refs(), Some("sync"))
        .await
        .unwrap();

    assert!(!report.success());
    assert_eq!(report.partitioned(), Some(4));
    insta::assert_json_snapshot!(report, @r#"
    {
      "action": "push",
      "pushed": [
        {
          "name": "detached",
          "commit": "abc1234",
          "message": "sync",
          "branch": "main"
        }
      ],
      "failed": [
        {
          "name": "rejected",
          "error": "Failed to push: ! [rejected] feature -> feature (fetch first)",
          "commit": "def5678"
        }
      ],
      "skipped": [
        {
          "name": "clean_mod",
          "reason": "no changes to commit"
        },
        {
          "name": "lost_race",
          "reason": "no changes to commit"
        }
      ]
    }
    "#);
}

#[tokio::test]
async fn test_progress_bar_does_not_change_results() {
    let fx = Fixture::new(&[("alpha", true)]);
    let runner = ScriptedRunner::new().clean(&fx.path("alpha"), "main");

    let report = batch(&runner)
        .with_progress(true)
        .run(GitAction::Status, &fx.refs(), None)
        .await
        .unwrap();
    assert!(report.success());
    assert_eq!(names(&fx.modules, ModuleRecord::name), vec!["alpha"]);
}
