use predicates::str::contains;

fn changed_files() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("changed-files");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn matches_paths_from_stdin() {
    changed_files()
        .args(["match", "--filter", "**/*.py"])
        .write_stdin("a.py\nb.txt\n")
        .assert()
        .success()
        .stdout(contains(r#"{"changed-files":{"**/*.py":["a.py"]},"any-changed":true}"#));
}

#[test]
fn empty_input_changes_nothing() {
    changed_files()
        .args(["match", "--filter", "**/*"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains(r#""any-changed":false"#))
        .stdout(contains(r#""changed-files":{}"#));
}

#[test]
fn path_can_match_several_filters() {
    changed_files()
        .args(["match", "-f", "src/**", "-f", "backend: **/*.rs, !**/tests/**"])
        .write_stdin("src/lib.rs\nsrc/tests/it.rs\n")
        .assert()
        .success()
        .stdout(contains(r#""src/**":["src/lib.rs","src/tests/it.rs"]"#))
        .stdout(contains(r#""backend":["src/lib.rs"]"#));
}

#[test]
fn no_filters_match_everything() {
    changed_files()
        .arg("match")
        .write_stdin("README.md\n")
        .assert()
        .success()
        .stdout(contains(r#""**/*":["README.md"]"#));
}

#[test]
fn orphan_negation_is_rejected() {
    changed_files()
        .args(["match", "--filter", "!docs/**"])
        .write_stdin("docs/a.md\n")
        .assert()
        .failure()
        .stderr(contains("must belong to a named filter"));
}
