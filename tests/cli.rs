#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli(study: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rotastat-cli").unwrap();
    cmd.arg("--study").arg(study);
    cmd
}

#[test]
fn init_then_analyze() {
    let dir = tempdir().unwrap();
    let study = dir.path().join("study.json");

    cli(&study)
        .args(["init", "--year", "2025", "--start", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Actuelle (6-3)"));
    assert!(study.exists());

    cli(&study)
        .args(["init", "--year", "2025"])
        .assert()
        .failure();

    let csv = dir.path().join("results.csv");
    cli(&study)
        .arg("analyze")
        .arg("--out-csv")
        .arg(&csv)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("effectif requis: 32 (volume)"))
        .stdout(predicate::str::contains(
            "meilleure rotation: Option B (6-4) (15 week-ends complets)",
        ));
    assert_eq!(fs::read_to_string(&csv).unwrap().lines().count(), 4);
}

#[test]
fn rotation_without_nights_exits_with_warning() {
    let dir = tempdir().unwrap();
    let study = dir.path().join("study.json");
    cli(&study)
        .args(["init", "--year", "2025"])
        .assert()
        .success();

    let out = cli(&study)
        .args(["add-rotation", "--name", "Jour", "--work", "5", "--rest", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(out).unwrap().trim().to_string();

    cli(&study)
        .arg("analyze")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("N/A (nuits non couvrables)"));

    cli(&study)
        .args(["remove-rotation", "--id", &id])
        .assert()
        .success();
    cli(&study).arg("analyze").assert().code(0);
}

#[test]
fn weekends_detail_and_coverage() {
    let dir = tempdir().unwrap();
    let study = dir.path().join("study.json");
    cli(&study)
        .args(["init", "--year", "2025", "--start", "2025-01-06"])
        .assert()
        .success();
    let out = cli(&study)
        .args(["add-rotation", "--name", "Semaine", "--work", "5", "--rest", "2", "--nights", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(out).unwrap().trim().to_string();

    cli(&study)
        .args(["weekends", "--id", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "11/01/2025 | SL | transitional_saturday | complet",
        ))
        .stdout(predicate::str::contains("51/51 week-ends complets"));

    cli(&study)
        .args(["weekends", "--id", &id, "--clean-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "11/01/2025 | SL | transitional_saturday | partiel",
        ))
        .stdout(predicate::str::contains("0/51 week-ends complets"));

    cli(&study)
        .args(["set-coverage", "--backup-factor", "0.5"])
        .assert()
        .failure();
    cli(&study)
        .args(["set-coverage", "--night-posts", "0"])
        .assert()
        .success();
    let saved = fs::read_to_string(&study).unwrap();
    assert!(saved.contains("\"night_posts\": 0"));
}

#[test]
fn missing_study_is_reported() {
    let dir = tempdir().unwrap();
    cli(&dir.path().join("absent.json"))
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run `init` first"));
}
