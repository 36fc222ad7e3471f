//! End-to-end tests for the `cb` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run `cb` against an explicit config so no user config leaks in
fn cb(temp: &TempDir, config: &str) -> Command {
    let path = temp.path().join("cookbook.yml");
    std::fs::write(&path, config).unwrap();

    let mut cmd = Command::cargo_bin("cb").unwrap();
    cmd.current_dir(temp.path()).env("NO_COLOR", "1").arg("--config").arg(path);
    cmd
}

#[test]
fn test_list_seed_recipes() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Омлет с овощами"))
        .stdout(predicate::str::contains("Салат Цезарь"))
        .stdout(predicate::str::contains("Паста Карбонара"));
}

#[test]
fn test_list_without_seed() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: false\n")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found"));
}

#[test]
fn test_list_by_category() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["list", "--category", "ужин"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Паста Карбонара"))
        .stdout(predicate::str::contains("Салат Цезарь").not());
}

#[test]
fn test_search_json() {
    let temp = TempDir::new().unwrap();
    let output = cb(&temp, "seed: true\n")
        .args(["search", "ЯЙЦА", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let recipes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = recipes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_show_missing_recipe_fails() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 99"));
}

#[test]
fn test_show_recipe() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Салат Цезарь"))
        .stdout(predicate::str::contains("Куриная грудка: 200 г"))
        .stdout(predicate::str::contains("1. Обжарить куриную грудку"));
}

#[test]
fn test_add_recipe() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args([
            "add",
            "--title",
            "Сырники",
            "--category",
            "breakfast",
            "--minutes",
            "25",
            "-i",
            "Творог, 400, г",
            "-i",
            "Яйца, 1, шт",
            "-s",
            "Смешать",
            "-s",
            "Обжарить",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added recipe 4: Сырники"));
}

#[test]
fn test_add_recipe_bad_amount() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args([
            "add", "--title", "Сырники", "--category", "breakfast", "--minutes", "25", "-i", "Творог, много, г", "-s",
            "Смешать",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Творог"));
}

#[test]
fn test_day_with_assignment() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["day", "2024-05-06", "--assign", "dinner=3", "--assign", "dinner=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu for 06.05.2024"))
        .stdout(predicate::str::contains("dinner: Салат Цезарь"))
        .stdout(predicate::str::contains("breakfast: not planned"));
}

#[test]
fn test_day_unknown_recipe_fails() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["day", "2024-05-06", "--assign", "lunch=7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 7"));
}

#[test]
fn test_week_starts_on_configured_day() {
    let temp = TempDir::new().unwrap();
    let output = cb(&temp, "week-start: sunday\n")
        .args(["week", "2024-05-09", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let days: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let days = days.as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-05-05");
    assert!(days[0]["lunch"].is_null());
}

#[test]
fn test_shopping_list() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args([
            "shopping",
            "2024-05-06",
            "--assign",
            "breakfast=1",
            "--assign",
            "2024-05-07:dinner=3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Яйца 5 шт"))
        .stdout(predicate::str::contains("Бекон 150 г"));
}

#[test]
fn test_shopping_days_limit() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["shopping", "2024-05-06", "--days", "1", "--assign", "2024-05-07:dinner=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing planned"));
}

#[test]
fn test_shopping_huge_day_count_rejected() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["shopping", "2024-05-06", "--days", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--days"));
}

#[test]
fn test_invalid_date_rejected() {
    let temp = TempDir::new().unwrap();
    cb(&temp, "seed: true\n")
        .args(["day", "06.05.2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
