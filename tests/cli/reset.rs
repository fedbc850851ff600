//! Tests for `envhub reset` and relinking a directory.

use crate::support::*;

#[test]
fn test_reset_removes_link_and_sealed_env() {
    let owner = Test::with_secrets("web", STANDARD_SECRETS);
    assert_success(&owner.grant(COLLABORATOR, "member", ACCESS_PASSWORD));
    let bob = owner.as_user(COLLABORATOR, ACCESS_PASSWORD);
    assert_success(&bob.clone_cmd("web"));
    assert!(bob.path(".env").exists());

    let output = bob.reset();
    assert_success(&output);
    assert_stdout_contains(&output, "unlinked web");
    assert!(!bob.path(".envhub.toml").exists());
    assert!(!bob.path(".env").exists());

    // The project itself is untouched.
    assert_success(&bob.clone_cmd("web"));
    assert_stdout_contains(&bob.export(), "API_KEY=sk-test-12345");
}

#[test]
fn test_reset_keeps_plaintext_env() {
    let t = Test::init("web");
    std::fs::write(t.path(".env"), "LOCAL_ONLY=keep-me\n").unwrap();

    let output = t.reset();
    assert_success(&output);
    assert_stderr_contains(&output, "kept .env");
    assert!(!t.path(".envhub.toml").exists());
    assert_eq!(t.read(".env"), "LOCAL_ONLY=keep-me\n");
}

#[test]
fn test_reset_unlinked_directory_fails() {
    let t = Test::new();
    let output = t.reset();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_reset_recovers_committed_owner_config() {
    let owner = Test::with_secrets("web", STANDARD_SECRETS);
    assert_success(&owner.grant(COLLABORATOR, "member", ACCESS_PASSWORD));
    assert!(owner.read(".gitignore").lines().any(|l| l == ".envhub.toml"));

    // A checkout that picked up the owner's link file.
    let bob = owner.as_user(COLLABORATOR, ACCESS_PASSWORD);
    std::fs::copy(owner.path(".envhub.toml"), bob.path(".envhub.toml")).unwrap();

    let output = bob.clone_cmd("web");
    assert_failure(&output);
    assert_stderr_contains(&output, "envhub reset");

    assert_success(&bob.reset());
    assert_success(&bob.clone_cmd("web"));
    assert!(bob.read(".envhub.toml").contains("role = \"member\""));
    assert_stdout_contains(&bob.export(), "API_KEY=sk-test-12345");
}

#[test]
fn test_clone_refuses_existing_env() {
    let owner = Test::with_secrets("web", STANDARD_SECRETS);
    assert_success(&owner.grant(COLLABORATOR, "member", ACCESS_PASSWORD));
    let bob = owner.as_user(COLLABORATOR, ACCESS_PASSWORD);
    std::fs::write(bob.path(".env"), "LOCAL_ONLY=keep-me\n").unwrap();

    let output = bob.clone_cmd("web");
    assert_failure(&output);
    assert_stderr_contains(&output, "refusing to overwrite existing .env");
    assert!(!bob.path(".envhub.toml").exists());
    assert_eq!(bob.read(".env"), "LOCAL_ONLY=keep-me\n");
}
