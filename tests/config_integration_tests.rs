//! Config file handling as seen from the command line.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn malformed_json_config_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("{ \"username\": ");

    lang_rank!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn malformed_toml_config_is_config_error() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("lang-rank.toml", "username = ");

    lang_rank!()
        .current_dir(fixture.path())
        .arg("--config")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("lang-rank.toml"));
}

#[test]
fn wrongly_typed_field_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config(r#"{"username": "octo", "top": "three"}"#);

    lang_rank!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config"));
}

#[test]
fn explicit_missing_config_falls_back_to_flags() {
    let fixture = TestFixture::new();

    // No username anywhere: the missing file itself is not the failure.
    lang_rank!()
        .current_dir(fixture.path())
        .args(["--config", "does-not-exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing --username"))
        .stderr(predicate::str::contains("does-not-exist.json").not());
}

#[test]
fn unreadable_config_path_is_config_error() {
    let fixture = TestFixture::new();
    std::fs::create_dir(fixture.join("config.json")).unwrap();

    lang_rank!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn blank_username_in_config_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config(r#"{"username": "", "top": 3}"#);

    lang_rank!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing --username"));
}

#[test]
fn blank_flag_overrides_config_username() {
    let fixture = TestFixture::new();
    fixture.create_config(r#"{"username": "octo"}"#);

    lang_rank!()
        .current_dir(fixture.path())
        .args(["--username", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing --username"));
}

#[test]
fn negative_top_in_config_is_accepted() {
    let fixture = TestFixture::new();
    fixture.create_config(r#"{"top": -1}"#);

    // Parsing succeeds; the run only stops for the missing username.
    lang_rank!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing --username"))
        .stderr(predicate::str::contains("Failed to parse").not());
}
