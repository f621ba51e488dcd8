//! Entropy estimate and crack-time bucketing.
//!
//! Entropy here is a search-space measure: log2 of the number of equally
//! likely passwords drawable from the observed alphabet and length. It
//! reflects the diversity actually present in the password, not whatever
//! alphabet the generator was configured with.

/// Modern GPU ballpark.
const GUESSES_PER_SECOND: f64 = 1e10;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Alphabet size implied by the character classes present in the password.
pub fn pool_size(password: &str) -> u32 {
    let mut pool = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        pool += 32;
    }
    pool
}

/// Unrounded entropy in bits: `len * log2(pool)`, 0 for an empty pool.
pub fn entropy_bits(password: &str) -> f64 {
    let pool = pool_size(password);
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

/// Expected seconds to exhaust half the search space.
pub(crate) fn crack_seconds(entropy_bits: f64) -> f64 {
    entropy_bits.exp2() / GUESSES_PER_SECOND / 2.0
}

/// Maps entropy to a human-readable crack-time estimate, using the largest
/// unit that keeps the value at 1 or above.
pub fn crack_time(entropy_bits: f64) -> String {
    let seconds = crack_seconds(entropy_bits);

    if seconds < 1.0 {
        "Instantly".to_string()
    } else if seconds < SECONDS_PER_MINUTE {
        format!("{} seconds", seconds.round())
    } else if seconds < SECONDS_PER_HOUR {
        format!("{} minutes", (seconds / SECONDS_PER_MINUTE).round())
    } else if seconds < SECONDS_PER_DAY {
        format!("{} hours", (seconds / SECONDS_PER_HOUR).round())
    } else if seconds < SECONDS_PER_YEAR {
        format!("{} days", (seconds / SECONDS_PER_DAY).round())
    } else {
        format!("{} years", (seconds / SECONDS_PER_YEAR).round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_per_class() {
        assert_eq!(pool_size(""), 0);
        assert_eq!(pool_size("abc"), 26);
        assert_eq!(pool_size("ABC"), 26);
        assert_eq!(pool_size("123"), 10);
        assert_eq!(pool_size("!?#"), 32);
        assert_eq!(pool_size("aB3!"), 94);
    }

    #[test]
    fn test_entropy_bits_lowercase_only() {
        let bits = entropy_bits("abcdefgh");
        assert_eq!(bits.round() as u32, 38); // 8 * log2(26)
    }

    #[test]
    fn test_entropy_bits_empty() {
        assert_eq!(entropy_bits(""), 0.0);
    }

    #[test]
    fn test_crack_time_buckets() {
        assert_eq!(crack_time(0.0), "Instantly");
        assert_eq!(crack_time(30.0), "Instantly"); // 2^30 / 2e10 < 1s
        assert_eq!(crack_time(40.0), "55 seconds");
        assert_eq!(crack_time(45.0), "29 minutes");
        assert_eq!(crack_time(50.0), "16 hours");
        assert_eq!(crack_time(55.0), "21 days");
        assert_eq!(crack_time(60.0), "2 years");
        assert!(crack_time(100.0).ends_with("years"));
    }

    #[test]
    fn test_crack_time_monotonic_in_entropy() {
        let mut prev = crack_seconds(0.0);
        for e in 1..128 {
            let cur = crack_seconds(e as f64);
            assert!(cur > prev);
            prev = cur;
        }
    }
}
