use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const CLIPPINGS: &str = "\
John Wick (John Wick;Baba Yaga)\n\
- Your Highlight on Page 17 | Location 311-313 | Added on Saturday, February 8, 2024 10:41:17 PM\n\
\n\
Est adipisci eius tempora aliquam amet. Sed labore aliquam sit labore.\n\
==========\n\
Lorem Ipsum (1st edition) (\u{160}pa\u{10d}ek, Karel)\n\
- Your Highlight on Page 18 | Location 322-324 | Added on Saturday, February 8, 2024 10:45:05 PM\n\
\n\
Consectetur neque adipisci tempora modi magnam numquam.\n\
==========\n";

fn kq(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kq").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn export_then_show_then_find() {
    let temp = tempfile::tempdir().unwrap();
    let clippings = temp.path().join("My Clippings.txt");
    std::fs::write(&clippings, CLIPPINGS).unwrap();
    let data_dir = temp.path().join("data");

    kq(&data_dir)
        .arg("export")
        .arg("--my-clippings")
        .arg(&clippings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 quotes."));

    // The store file is ASCII-safe JSON.
    let store = std::fs::read_to_string(data_dir.join("quotes.json")).unwrap();
    assert!(store.is_ascii());
    assert!(store.contains("John Wick"));

    // Two draws exhaust nothing; each prints a known attribution.
    let attribution = predicate::str::contains("John Wick (John Wick, Baba Yaga)")
        .or(predicate::str::contains(
            "Lorem Ipsum (1st edition) (\u{160}pa\u{10d}ek, Karel)",
        ));
    kq(&data_dir).arg("show").assert().success().stdout(attribution);

    let history = std::fs::read_to_string(data_dir.join("quotes_history.txt")).unwrap();
    assert_eq!(history.lines().count(), 1);

    kq(&data_dir)
        .args(["find", "--author", "baba yaga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Wick"));

    kq(&data_dir)
        .args(["find", "--book", "lorem", "--format", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Lorem Ipsum (1st edition)\""));
}

#[test]
fn third_show_resets_history_with_backup() {
    let temp = tempfile::tempdir().unwrap();
    let clippings = temp.path().join("My Clippings.txt");
    std::fs::write(&clippings, CLIPPINGS).unwrap();
    let data_dir = temp.path().join("data");

    kq(&data_dir)
        .arg("export")
        .arg("--my-clippings")
        .arg(&clippings)
        .assert()
        .success();

    // The capped rejection draw may occasionally print nothing; keep showing
    // until both quotes have been drawn.
    for _ in 0..50 {
        let ledger = data_dir.join("quotes_history.txt");
        if std::fs::read_to_string(&ledger)
            .map(|s| s.lines().count() == 2)
            .unwrap_or(false)
        {
            break;
        }
        kq(&data_dir).arg("show").assert().success();
    }

    kq(&data_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("History reset."));

    let backup = std::fs::read_to_string(data_dir.join("quotes_history.txt.bak")).unwrap();
    assert_eq!(backup.lines().count(), 2);
    let history = std::fs::read_to_string(data_dir.join("quotes_history.txt")).unwrap();
    assert_eq!(history.lines().count(), 1);
}

#[test]
fn find_without_criteria_fails() {
    let temp = tempfile::tempdir().unwrap();
    kq(temp.path())
        .arg("find")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No query parameters provided"));
}

#[test]
fn export_with_missing_clippings_fails() {
    let temp = tempfile::tempdir().unwrap();
    kq(temp.path())
        .arg("export")
        .arg("--my-clippings")
        .arg(temp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn show_without_store_fails() {
    let temp = tempfile::tempdir().unwrap();
    kq(temp.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
