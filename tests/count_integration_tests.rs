//! Integration tests for counting and stdout formats.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Text
// =============================================================================

#[test]
fn text_summary_totals() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Directory : "))
        .stdout(predicate::str::contains(
            "Total : 3 files,  6 codes, 6 comments, 2 blanks, all 14 lines",
        ))
        .stdout(predicate::str::contains("Top 10 Directories (by code count)"))
        .stdout(predicate::str::contains("src/main.rs"));
}

#[test]
fn directory_argument_selects_root() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    ct_lines!()
        .arg(fixture.join("src"))
        .args(["--no-config", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"main.rs\""))
        .stdout(predicate::str::contains("a.py").not());
}

#[test]
fn commas_can_be_disabled() {
    let fixture = TestFixture::new();
    fixture.create_file("big.py", &"x = 1\n".repeat(1500));

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,500"));

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "--no-commas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1500"))
        .stdout(predicate::str::contains("1,500").not());
}

// =============================================================================
// JSON / CSV / Markdown
// =============================================================================

#[test]
fn json_output_is_parseable() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    let output = ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"]["files"], 3);
    assert_eq!(json["total"]["code"], 6);
    assert_eq!(json["languages"]["Rust"]["files"], 2);
    assert_eq!(json["directories"]["src"]["comment"], 5);
    assert_eq!(json["files"][0]["path"], "scripts/a.py");
}

#[test]
fn csv_has_language_columns_and_total() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\"filename\",\"language\",\"Python\",\"Rust\",\"comment\",\"blank\",\"total\"\n",
        ))
        .stdout(predicate::str::contains("\"src/util.rs\",\"Rust\",0,1,3,0,4"))
        .stdout(predicate::str::contains("\"Total\",\"-\",2,4,6,2,14"));
}

#[test]
fn markdown_summary() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Summary\n"))
        .stdout(predicate::str::contains("## Languages"))
        .stdout(predicate::str::contains("| Rust | 2 | 4 | 5 | 1 | 10 |"));
}

// =============================================================================
// Counting options
// =============================================================================

#[test]
fn incomplete_last_line_is_opt_in() {
    let fixture = TestFixture::new();
    fixture.create_file("a.py", "x = 1\ny = 2");

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": 1,"));

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "json", "--include-incomplete-line"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": 2,"));
}

#[test]
fn special_token_text_counts_zero_tokens_with_warning() {
    let fixture = TestFixture::new();
    fixture.create_file("special.py", "# <|endoftext|>\nx = 1\n");

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": 1,"))
        .stdout(predicate::str::contains("\"tokens\": 0"))
        .stderr(predicate::str::contains(
            "⚠ Warning: Failed to count tokens for special.py",
        ));
}

#[test]
fn unsupported_files_are_opt_in() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();
    fixture.create_file("notes.unknownext", "hello\n");

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.unknownext").not());

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv", "--include-unsupported"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"notes.unknownext\",\"(Unsupported)\""));
}

// =============================================================================
// File selection
// =============================================================================

#[test]
fn include_and_exclude_globs() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv", "-i", "src/**", "-e", "**/util.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/main.rs"))
        .stdout(predicate::str::contains("util.rs").not())
        .stdout(predicate::str::contains("a.py").not());
}

#[test]
fn gitignore_is_respected_unless_disabled() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();
    fixture.create_file(".gitignore", "scripts/\n");

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py").not());

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv", "--no-gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scripts/a.py"));
}

#[test]
fn node_modules_always_excluded() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();
    fixture.create_file("node_modules/dep/index.js", "module.exports = 1;\n");

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "-f", "csv", "--no-gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.js").not());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_directory_is_an_error() {
    let fixture = TestFixture::new();
    fixture.create_dir("empty");

    ct_lines!()
        .arg(fixture.join("empty"))
        .args(["--no-config", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn missing_directory_is_an_error() {
    let fixture = TestFixture::new();

    ct_lines!()
        .arg(fixture.join("does-not-exist"))
        .args(["--no-config", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ IO:"));
}

#[test]
fn invalid_glob_is_an_error() {
    let fixture = TestFixture::new();
    fixture.create_sample_project();

    ct_lines!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "-e", "[unclosed"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}
