mod common;

use std::fs;

use tempfile::tempdir;

use common::run;

const BIN: &str = env!("CARGO_BIN_EXE_create_icons");

const USAGE: &str = "usage: create_icons [manifest file] [output file]

  generates an svg sprite file for Material Design Icons from a manifest
";

#[test]
fn test_wrong_argument_count_prints_usage_and_exits_zero() {
    let project = tempdir().unwrap();

    for args in [&[][..], &["icons.toml"][..], &["a", "b", "c"][..]] {
        let result = run(BIN, args, project.path(), "");

        assert!(result.success, "args {args:?}: {}", result.stderr);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, USAGE);
    }

    assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_manifest_fails() {
    let project = tempdir().unwrap();

    let result = run(BIN, &["missing.toml", "out.svg"], project.path(), "");

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("manifest not found: missing.toml"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!project.path().join("out.svg").exists());
}

#[test]
fn test_missing_manifest_json_error_event() {
    let project = tempdir().unwrap();

    let result = run(
        BIN,
        &["--json", "missing.toml", "out.svg"],
        project.path(),
        "",
    );

    assert_eq!(result.exit_code, 1);
    let events = result.json_lines();
    assert_eq!(events.first().unwrap()["event"], "start");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["code"], "not_found");
}

#[cfg(unix)]
mod with_fake_tools {
    use super::*;
    use crate::common::{path_with, write_file, write_script, FAKE_GIT, FAKE_SVG_SPRITE};

    fn setup() -> (tempfile::TempDir, String) {
        let project = tempdir().unwrap();
        let bin_dir = project.path().join("bin");
        write_script(&bin_dir, "git", FAKE_GIT);
        write_script(&bin_dir, "svg-sprite", FAKE_SVG_SPRITE);
        write_file(
            project.path(),
            "icons.toml",
            "[icons]\nhome = \"home\"\naccount = \"account-outline\"\n",
        );
        let path = path_with(&bin_dir);
        (project, path)
    }

    #[test]
    fn test_builds_sprite_with_one_symbol_per_manifest_key() {
        let (project, path) = setup();

        let result = run(BIN, &["icons.toml", "out.svg"], project.path(), &path);

        assert!(result.success, "stderr:\n{}", result.stderr);
        let sprite = fs::read_to_string(project.path().join("out.svg")).unwrap();
        assert_eq!(sprite.matches("<symbol").count(), 2);
        assert!(sprite.contains(r#"<symbol id="home"/>"#));
        assert!(sprite.contains(r#"<symbol id="account"/>"#));
        assert!(result.stdout.contains("with 2 icons"));
    }

    #[test]
    fn test_json_mode_streams_progress_events() {
        let (project, path) = setup();

        let result = run(
            BIN,
            &["--json", "icons.toml", "out.svg"],
            project.path(),
            &path,
        );

        assert!(result.success, "stderr:\n{}", result.stderr);
        let events = result.json_lines();
        let kinds: Vec<_> = events
            .iter()
            .map(|e| e["event"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "start",
                "repository_cloning",
                "icon_staged",
                "icon_staged",
                "sprite_generating",
                "sprite_written",
                "complete"
            ]
        );
        assert_eq!(events.last().unwrap()["icons"], serde_json::json!(["home", "account"]));
    }

    #[test]
    fn test_unknown_icon_fails_without_output() {
        let (project, path) = setup();
        write_file(project.path(), "icons.toml", "[icons]\nghost = \"no-such-icon\"\n");

        let result = run(BIN, &["icons.toml", "out.svg"], project.path(), &path);

        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("icon 'ghost' not found"), "{}", result.stderr);
        assert!(!project.path().join("out.svg").exists());
    }

    #[test]
    fn test_failing_clone_reports_exit_code() {
        let (project, path) = setup();
        write_script(&project.path().join("bin"), "git", "exit 128\n");

        let result = run(BIN, &["icons.toml", "out.svg"], project.path(), &path);

        assert_eq!(result.exit_code, 1);
        assert!(
            result.stderr.contains("git failed with exit code: Some(128)"),
            "{}",
            result.stderr
        );
    }

    #[test]
    fn test_repository_flag_is_passed_to_clone() {
        let (project, path) = setup();
        write_script(
            &project.path().join("bin"),
            "git",
            &format!("echo \"$3\" > cloned-url\n{FAKE_GIT}"),
        );

        let result = run(
            BIN,
            &[
                "--repository",
                "https://example.com/icons.git",
                "icons.toml",
                "out.svg",
            ],
            project.path(),
            &path,
        );

        assert!(result.success, "stderr:\n{}", result.stderr);
        let url = fs::read_to_string(project.path().join("cloned-url")).unwrap();
        assert_eq!(url.trim(), "https://example.com/icons.git");
    }

    #[test]
    fn test_interrupt_removes_scratch_dir() {
        use std::process::{Command, Stdio};
        use std::thread::sleep;
        use std::time::{Duration, Instant};

        let (project, path) = setup();
        let tmp = tempdir().unwrap();
        // clone leaves partial content behind, then hangs
        write_script(
            &project.path().join("bin"),
            "git",
            "mkdir -p \"$4/svg\"\ntouch \"$4/svg/partial.svg\"\nsleep 3\n",
        );

        let mut child = Command::new(BIN)
            .args(["icons.toml", "out.svg"])
            .current_dir(project.path())
            .env("PATH", &path)
            .env("TMPDIR", tmp.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let cloning = |dir: &std::path::Path| {
            fs::read_dir(dir).unwrap().flatten().any(|entry| {
                entry.file_name().to_string_lossy().starts_with("webassets-icons-")
                    && entry.path().join("repo/svg/partial.svg").exists()
            })
        };
        let deadline = Instant::now() + Duration::from_secs(10);
        while !cloning(tmp.path()) {
            assert!(Instant::now() < deadline, "clone never started");
            sleep(Duration::from_millis(20));
        }

        let killed = Command::new("sh")
            .args(["-c", &format!("kill -INT {}", child.id())])
            .status()
            .unwrap();
        assert!(killed.success());

        let status = child.wait().unwrap();
        assert_eq!(status.code(), Some(130));
        let leftover: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .flatten()
            .map(|entry| entry.file_name())
            .collect();
        assert!(leftover.is_empty(), "left behind: {leftover:?}");
        assert!(!project.path().join("out.svg").exists());
    }
}
