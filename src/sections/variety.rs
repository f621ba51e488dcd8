//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

/// Score contribution and per-class presence flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarietyAssessment {
    pub points: i32,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

/// Scores character variety: +15 per class present.
///
/// "Special" means anything outside `[A-Za-z0-9]`, so non-ASCII letters
/// count toward the special class, matching detection in the evaluator's
/// entropy estimate.
pub fn variety_section(password: &str) -> VarietyAssessment {
    let uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let number = password.chars().any(|c| c.is_ascii_digit());
    let special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let count = [uppercase, lowercase, number, special]
        .iter()
        .filter(|&&b| b)
        .count();

    VarietyAssessment {
        points: (count * 15) as i32,
        uppercase,
        lowercase,
        number,
        special,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_lowercase_only() {
        let result = variety_section("justlower");
        assert_eq!(result.points, 15);
        assert!(result.lowercase);
        assert!(!result.uppercase);
        assert!(!result.number);
        assert!(!result.special);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = variety_section("HasAll123!");
        assert_eq!(result.points, 60);
        assert!(result.uppercase && result.lowercase && result.number && result.special);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = variety_section("NoSpecial123");
        assert_eq!(result.points, 45);
        assert!(!result.special);
    }

    #[test]
    fn test_variety_section_non_ascii_counts_as_special() {
        let result = variety_section("abcé");
        assert!(result.special);
        assert_eq!(result.points, 30);
    }

    #[test]
    fn test_variety_section_empty() {
        let result = variety_section("");
        assert_eq!(result.points, 0);
    }
}
