//! Pattern analysis section - detects known weak shapes.

use crate::types::PatternTag;
use crate::wordlist;

/// Ordered ASCII/digit runs of length 3.
const SEQUENTIAL_RUNS: [&str; 11] = [
    "abc", "bcd", "cde", "def", "123", "234", "345", "456", "567", "678", "789",
];

const KEYBOARD_RUNS: [&str; 4] = ["qwerty", "asdfgh", "zxcvbn", "qwertz"];

/// Scans the password for weak shapes. Each tag is checked independently
/// and appears at most once, in a fixed order.
pub fn pattern_section(password: &str) -> Vec<PatternTag> {
    let lower = password.to_lowercase();
    let mut tags = Vec::new();

    if SEQUENTIAL_RUNS.iter().any(|run| lower.contains(run)) {
        tags.push(PatternTag::Sequential);
    }

    // Repeated runs are case-sensitive: "aAa" is not a run, "aaa" is.
    if has_repeated_run(password) {
        tags.push(PatternTag::Repeated);
    }

    if KEYBOARD_RUNS.iter().any(|run| lower.contains(run)) {
        tags.push(PatternTag::Keyboard);
    }

    if wordlist::contains_common_word(&lower) {
        tags.push(PatternTag::Common);
    }

    tags
}

/// True when any single character appears 3+ times consecutively.
fn has_repeated_run(password: &str) -> bool {
    let mut run = 1;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
            prev = Some(c);
        }
    }
    false
}
