use assert_cmd::prelude::*;
use std::process::Command;

fn lazy_dialer() -> Command {
    let mut cmd = Command::cargo_bin("lazy-dialer").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_pairs() {
    let output = r"Dialing 110...
Found solution:
(*, #)
(1, #)
(1, #)
(1, 0)
Distance: 4
";

    lazy_dialer()
        .arg("110")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_keypad_verbose() {
    let output = r"Dialing 1**...
Found better solution: 6
Found better solution: 5
Found better solution: 3.605551275463989
Found solution:
123
456
789
L0R

R23
456
789
L0#

R23
456
789
L0#

R23
456
789
L0#

Distance: 3.605551275463989
";

    lazy_dialer()
        .arg("--keypad")
        .arg("--verbose")
        .arg("1**")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_multiple_numbers() {
    let output = r"Dialing 555...
Found solution:
(*, #)
(5, #)
(5, #)
(5, #)
Distance: 2.23606797749979
Dialing 0...
Found solution:
(*, #)
(0, #)
Distance: 1
";

    lazy_dialer()
        .arg("-p")
        .arg("555")
        .arg("0")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_custom_starts() {
    let output = r"Dialing 2...
Found solution:
(1, 3)
(2, 3)
Distance: 1
";

    lazy_dialer()
        .args(&["--left", "1", "--right", "3", "2"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_stats() {
    let assert = lazy_dialer().arg("-s").arg("110").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Distance: 4\n"));
    assert!(stdout.contains("Nodes expanded total: 7\n"));
    assert!(stdout.contains("Moves rejected by collision total: 2\n"));
    assert!(stdout.contains("Moves pruned by bound total: 2\n"));
}

#[test]
fn run_invalid_symbol() {
    lazy_dialer()
        .arg("12a")
        .assert()
        .failure()
        .stdout("Dialing 12a...\n")
        .stderr("Can't dial 12a: Symbol 'a' at index 2 is not on the keypad\n");
}

#[test]
fn run_same_starts() {
    lazy_dialer()
        .args(&["--left", "5", "--right", "5", "1"])
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid starting keys: Both fingers start on '5'\n");
}

#[test]
fn run_bad_args() {
    // doesn't check stderr, that's clap's business
    lazy_dialer()
        .arg("--pairs")
        .arg("--keypad")
        .arg("110")
        .assert()
        .failure()
        .stdout("");

    lazy_dialer()
        .args(&["--left", "*#", "110"])
        .assert()
        .failure()
        .stdout("");

    lazy_dialer().assert().failure().stdout("");
}

#[test]
fn run_debug_log() {
    let output = lazy_dialer()
        .env("RUST_LOG", "lazy_dialer=debug")
        .args(&["-k", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let log = String::from_utf8(output.stderr).unwrap();
    assert!(log.contains("Keys: 123456789*0#"));
    assert!(log.contains("Format: keypad"));
}
