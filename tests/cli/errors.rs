//! Error output and exit code tests.

use crate::support::*;

#[test]
fn test_not_initialized_hint() {
    let t = Test::new();
    let cases: [&[&str]; 4] = [&["list"], &["export"], &["add", "A", "1"], &["run", "--", "true"]];
    for args in cases {
        let output = t.cmd().args(args).output().unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, "not initialized");
        assert_stderr_contains(&output, "envhub init");
    }
}

#[test]
fn test_wrong_password_rejected_before_write() {
    let mut t = Test::with_secrets("web", &[("A", "1")]);
    t.password = "wrong".to_string();

    let output = t.add("B", "2");
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect project password");

    t.password = PROJECT_PASSWORD.to_string();
    let export = t.export();
    assert_stdout_excludes(&export, "B=");
    let versions = stdout(&t.versions());
    assert_eq!(versions.lines().count(), 1);
}

#[test]
fn test_corrupt_config_reported() {
    let t = Test::init("web");
    std::fs::write(t.path(".envhub.toml"), "[project\nname = ").unwrap();
    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid .envhub.toml");
}

#[test]
fn test_unknown_role_in_config() {
    let t = Test::init("web");
    let config = t.read(".envhub.toml").replace("\"owner\"", "\"superuser\"");
    std::fs::write(t.path(".envhub.toml"), config).unwrap();

    let output = t.export();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown role: superuser");
}

#[test]
fn test_corrupt_store_document_is_fatal() {
    let t = Test::with_secrets("web", &[("A", "1")]);
    let path = t.store_document("web");
    let doc = std::fs::read_to_string(&path)
        .unwrap()
        .replace("\"name\": \"A\"", "\"name\": \"\"");
    std::fs::write(&path, doc).unwrap();

    let output = t.export();
    assert_failure(&output);
    assert_stderr_contains(&output, "corrupt store document");
}

#[test]
fn test_no_args_shows_usage() {
    let t = Test::new();
    let output = t.cmd().output().unwrap();
    assert!(!output.status.success());
    assert_stderr_contains(&output, "Usage");
}
