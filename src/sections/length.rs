//! Length section - scores password length against the tiered thresholds.

const MIN_LENGTH: usize = 8;

/// Score contribution from password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthAssessment {
    pub points: i32,
    /// True at 8+ characters; the longer tiers add points but no flag.
    pub meets_minimum: bool,
}

/// Scores the password's length: +20 at 8, +10 at 12, +10 at 16, +5 at 20.
pub fn length_section(password: &str) -> LengthAssessment {
    let len = password.chars().count();
    let mut points = 0;
    let mut meets_minimum = false;

    if len >= MIN_LENGTH {
        points += 20;
        meets_minimum = true;
    }
    if len >= 12 {
        points += 10;
    }
    if len >= 16 {
        points += 10;
    }
    if len >= 20 {
        points += 5;
    }

    LengthAssessment {
        points,
        meets_minimum,
    }
}
