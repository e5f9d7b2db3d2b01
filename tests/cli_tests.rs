//! CLI integration tests using assert_cmd.
//!
//! Purely computational — no external services, always run. Listings go to
//! stdout, logs to stderr, so stdout assertions see only the primes.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn oddsieve() -> Command {
    Command::cargo_bin("oddsieve").unwrap()
}

// --- Help and arg validation ---

#[test]
fn help_shows_all_subcommands() {
    oddsieve()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("primes").and(predicate::str::contains("chunks")));
}

#[test]
fn help_primes_shows_args() {
    oddsieve()
        .args(["primes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--limit"));
}

#[test]
fn help_chunks_shows_args() {
    oddsieve()
        .args(["chunks", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--chunk-bits")
                .and(predicate::str::contains("--chunks"))
                .and(predicate::str::contains("--base"))
                .and(predicate::str::contains("--nbits")),
        );
}

#[test]
fn unknown_subcommand_fails() {
    oddsieve()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Base sieve listings ---

#[test]
fn primes_lists_odd_primes_below_limit() {
    oddsieve()
        .args(["primes", "--limit", "40"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n5\n7\n11\n13\n17\n19\n23\n29\n31\n37\n"));
}

/// Regression: the sentinel 1 sits at index 0 with its bit clear, but it is
/// not prime and must never be listed.
#[test]
fn primes_excludes_the_sentinel_one() {
    oddsieve()
        .args(["primes", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n5\n7\n"));
}

#[test]
fn quiet_suppresses_listing() {
    oddsieve()
        .args(["--quiet", "primes", "--limit", "100"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// --- Chunk listings ---

#[test]
fn chunks_beyond_base_range_find_known_prime() {
    // windows [16385, 16449) right after an 8192-candidate base sieve;
    // 16411 is prime
    oddsieve()
        .args(["chunks", "--nbits", "8192", "--chunk-bits", "16", "--chunks", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16411"));
}

#[test]
fn chunks_continue_the_flat_listing() {
    // [129, 257) sieved as four chunks must reproduce the tail of one flat
    // enumeration below 257
    let flat = oddsieve()
        .args(["primes", "--limit", "257"])
        .output()
        .unwrap();
    let chunked = oddsieve()
        .args(["chunks", "--nbits", "64", "--chunk-bits", "16", "--chunks", "4"])
        .output()
        .unwrap();
    assert!(flat.status.success());
    assert!(chunked.status.success());

    let flat_s = String::from_utf8(flat.stdout).unwrap();
    let chunk_s = String::from_utf8(chunked.stdout).unwrap();
    assert!(!chunk_s.is_empty());
    assert!(
        flat_s.ends_with(&chunk_s),
        "chunk listing must continue the flat listing:\nflat:\n{}\nchunked:\n{}",
        flat_s,
        chunk_s
    );
}

#[test]
fn chunks_with_even_base_fails() {
    oddsieve()
        .args(["chunks", "--base", "1000", "--chunk-bits", "8", "--chunks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be odd"));
}

#[test]
fn chunks_with_base_inside_sieve_range_fails() {
    oddsieve()
        .args(["chunks", "--nbits", "8192", "--base", "101", "--chunk-bits", "8", "--chunks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lies inside"));
}

#[test]
fn chunks_with_insufficient_base_sieve_fails() {
    // primes up to 31 cannot certify a window around 10^6
    oddsieve()
        .args([
            "chunks",
            "--nbits",
            "16",
            "--base",
            "1000001",
            "--chunk-bits",
            "64",
            "--chunks",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("covers primes below"));
}
