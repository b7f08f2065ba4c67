use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn qtremux_cmd() -> Command {
    Command::cargo_bin("qtremux").expect("Failed to find qtremux binary")
}

#[test]
fn test_help_smoke() -> Result<(), Box<dyn Error>> {
    qtremux_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("remux"))
        .stdout(contains("info"));
    Ok(())
}

#[test]
fn test_version_smoke() -> Result<(), Box<dyn Error>> {
    qtremux_cmd().arg("--version").assert().success();
    Ok(())
}

#[test]
fn test_remux_requires_input_argument() -> Result<(), Box<dyn Error>> {
    qtremux_cmd().arg("remux").assert().failure();
    Ok(())
}

#[test]
fn test_remux_non_existent_input_fails() -> Result<(), Box<dyn Error>> {
    qtremux_cmd()
        .arg("remux")
        .arg("surely/this/does/not/exist/input.mkv")
        .assert()
        .failure()
        .stderr(contains("Error:"));
    Ok(())
}

#[test]
fn test_remux_rejects_non_mkv_input() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("movie.mp4");
    std::fs::write(&input, "dummy content")?;

    qtremux_cmd()
        .arg("remux")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("not an .mkv file"));
    Ok(())
}

#[test]
fn test_info_non_existent_input_fails() -> Result<(), Box<dyn Error>> {
    qtremux_cmd()
        .arg("info")
        .arg("surely/this/does/not/exist/input.mkv")
        .assert()
        .failure()
        .stderr(contains("Error:"));
    Ok(())
}

#[test]
fn test_unknown_subcommand_fails() -> Result<(), Box<dyn Error>> {
    qtremux_cmd().arg("frobnicate").assert().failure();
    Ok(())
}
