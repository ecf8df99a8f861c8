use assert_cmd::Command;
use predicates::prelude::*;

fn bookhaven() -> Command {
    Command::cargo_bin("bookhaven-cli").unwrap()
}

#[test]
fn browse_by_text_finds_science_fiction() {
    bookhaven()
        .args(["browse", "--query", "quantum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 6 books"))
        .stdout(predicate::str::contains("Quantum Dreams by Michael Chen"));
}

#[test]
fn browse_json_is_sorted() {
    let output = bookhaven()
        .args(["browse", "--sort", "price-low", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let prices: Vec<f64> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|book| book["price"].as_f64().unwrap())
        .collect();
    let mut sorted = prices.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(prices, sorted);
}

#[test]
fn browse_with_no_matches_still_succeeds() {
    bookhaven()
        .args(["browse", "--min-price", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 6 books"));
}

#[test]
fn show_prints_discount() {
    bookhaven()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Midnight Garden"))
        .stdout(predicate::str::contains("save $5.00 (17% off)"));
}

#[test]
fn show_missing_book_fails() {
    bookhaven()
        .args(["show", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("book '404' not found"));
}
