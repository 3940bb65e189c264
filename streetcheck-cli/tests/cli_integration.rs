//! Integration tests for the streetcheck CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DICTIONARY: &str = "Main Street\nOak Avenue\nBroadway\n";

const SAMPLE_OSM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="0" lon="0">
    <tag k="addr:street" v="Main Street"/>
  </node>
  <way id="2">
    <tag k="name" v="Brodway"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("streetcheck").unwrap();
        cmd.arg("--quiet");
        cmd
    }
}

#[test]
fn test_text_input_statistics() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("names.txt", "Main Street\nMan Street\nOak Avenue\nPine Road\n");

    fx.cmd()
        .args(["-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total names processed: 4"))
        .stdout(predicate::str::contains("exact matches:       2"))
        .stdout(predicate::str::contains("close matches:       1"))
        .stdout(predicate::str::contains("unmatched:           1"));
}

#[test]
fn test_osm_input() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("map.osm", SAMPLE_OSM);

    fx.cmd()
        .args(["-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total names processed: 2"))
        .stdout(predicate::str::contains("exact matches:       1"))
        .stdout(predicate::str::contains("close matches:       1"));
}

#[test]
fn test_stdin_as_osm() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);

    fx.cmd()
        .args(["-f", db.as_str(), "-"])
        .write_stdin(SAMPLE_OSM)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total names processed: 2"));
}

#[test]
fn test_per_street_summary() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("names.txt", "Main Street\nMain St.\nMan Street\n");

    fx.cmd()
        .args(["-s", "-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Streets matched: 1"))
        .stdout(predicate::str::contains("Main Street: 3 distinct"));
}

#[test]
fn test_dump_file_contents() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("names.txt", "Main Street\nMain Street\nMan Street\nPine Road\n");
    let dump = fx.dir.path().join("dump.txt");

    fx.cmd()
        .arg("-c")
        .arg(format!("--dump={}", dump.display()))
        .args(["-f", db.as_str(), input.as_str()])
        .assert()
        .success();

    let dumped = fs::read_to_string(&dump).unwrap();
    assert!(dumped.contains("== Main Street =="));
    assert!(dumped.contains("\tMain Street (2)"));
    assert!(dumped.contains("\tMan Street (1)"));
    assert!(dumped.contains("== UNMATCHED ==\n\tPine Road (1)"));
}

#[test]
fn test_json_stats_format() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("names.txt", "Main Street\nPine Road\n");

    let output = fx
        .cmd()
        .args(["--format", "json", "-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["locale"], "en_US");
    assert_eq!(report["processed"], 2);
    assert_eq!(report["exact"], 1);
    assert_eq!(report["unmatched"], 1);
}

#[test]
fn test_spell_distance_zero() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("names.txt", "Man Street\n");

    fx.cmd()
        .args(["-p", "0", "-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("close matches:       0"))
        .stdout(predicate::str::contains("unmatched:           1"));
}

#[test]
fn test_failed_source_continues_and_exits_nonzero() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write("names.txt", "Main Street\n");
    let missing = fx.dir.path().join("missing.txt").display().to_string();

    fx.cmd()
        .args(["-f", db.as_str(), missing.as_str(), input.as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total names processed: 1"));
}

#[test]
fn test_missing_database_is_fatal() {
    let fx = Fixture::new();
    let input = fx.write("names.txt", "Main Street\n");
    let missing = fx.dir.path().join("nodb.txt").display().to_string();

    fx.cmd()
        .args(["-f", missing.as_str(), input.as_str()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read dictionary"));
}

#[test]
fn test_parallel_matches_sequential_output() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", DICTIONARY);
    let input = fx.write(
        "names.txt",
        "Main Street\nMan Street\nOak Avenue\nPine Road\nBroadway\nBrodway\n",
    );

    let sequential = fx
        .cmd()
        .args(["-s", "-c", "-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    fx.cmd()
        .args(["--parallel", "-s", "-c", "-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .stdout(predicate::eq(sequential));
}

#[test]
fn test_russian_locale() {
    let fx = Fixture::new();
    let db = fx.write("streets.txt", "Тверская улица\n");
    let input = fx.write("names.txt", "ул. Тверская\nТверскя улица\n");

    fx.cmd()
        .args(["-l", "ru_RU", "-f", db.as_str(), input.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("exact matches:       1"))
        .stdout(predicate::str::contains("close matches:       1"));
}
