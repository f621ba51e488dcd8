//! Value types shared by the evaluator, generator and bulk analyzer.

use std::fmt;

const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGIT_CHARS: &[u8] = b"0123456789";
const SPECIAL_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{};':\"|,.<>?/\\`~";

/// Discrete strength band shown to the user.
///
/// Band boundaries are part of the external contract: callers display the
/// label verbatim and rely on where the cutoffs sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// All labels in ascending strength order.
    pub const ALL: [StrengthLabel; 5] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Medium,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    /// Maps a 0-100 score to its band (inclusive lower bounds at 30/50/70/85).
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            StrengthLabel::VeryWeak
        } else if score < 50.0 {
            StrengthLabel::Weak
        } else if score < 70.0 {
            StrengthLabel::Medium
        } else if score < 85.0 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }

    /// The user-facing name of the band.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four alphabets used for both detection and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the fixed pool-concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The fixed alphabet owned by this class. All ASCII.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Special => SPECIAL_CHARS,
        }
    }
}

/// Selection of character classes for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl ClassSet {
    /// Every class enabled.
    pub const ALL: ClassSet = ClassSet {
        uppercase: true,
        lowercase: true,
        numbers: true,
        special: true,
    };

    /// No class enabled.
    pub const NONE: ClassSet = ClassSet {
        uppercase: false,
        lowercase: false,
        numbers: false,
        special: false,
    };

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.numbers,
            CharacterClass::Special => self.special,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.special)
    }

    /// An empty selection falls back to every class, so generation always
    /// has a non-empty pool to draw from.
    pub fn effective(&self) -> ClassSet {
        if self.is_empty() { ClassSet::ALL } else { *self }
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        ClassSet::ALL
    }
}

/// Options for password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub classes: ClassSet,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            length: 12,
            classes: ClassSet::ALL,
        }
    }
}

/// Heuristic marker for a known weak shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternTag {
    Sequential,
    Repeated,
    Keyboard,
    Common,
}

impl PatternTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternTag::Sequential => "sequential",
            PatternTag::Repeated => "repeated",
            PatternTag::Keyboard => "keyboard",
            PatternTag::Common => "common",
        }
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five boolean checks shown to the user as a checklist.
///
/// `length` is true at 8+ characters; the rest are true when at least one
/// character of the class is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl Criteria {
    /// True when every criterion is satisfied.
    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number && self.special
    }
}

/// Full evaluation of a single password. Derived entirely from the input
/// string; carries no identity and no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    /// Additive score after pattern penalties, clamped to 0-100.
    pub score: u8,
    pub label: StrengthLabel,
    pub criteria: Criteria,
    /// Search-space estimate in bits, rounded for display.
    pub entropy_bits: u32,
    /// Distinct weak-shape tags, in detection order.
    pub patterns: Vec<PatternTag>,
    /// Human-readable crack-time estimate, e.g. "3 days" or "Instantly".
    pub crack_time: String,
}

impl StrengthResult {
    /// The well-defined result for an empty password.
    pub(crate) fn empty() -> Self {
        StrengthResult {
            score: 0,
            label: StrengthLabel::VeryWeak,
            criteria: Criteria::default(),
            entropy_bits: 0,
            patterns: Vec::new(),
            crack_time: "Instantly".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_band_boundaries() {
        assert_eq!(StrengthLabel::from_score(0.0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(29.0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(30.0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(49.0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(50.0), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(69.0), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(70.0), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(84.0), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(85.0), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(100.0), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_display_strings() {
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
        assert_eq!(PatternTag::Keyboard.to_string(), "keyboard");
    }

    #[test]
    fn test_special_alphabet_has_32_symbols() {
        assert_eq!(CharacterClass::Special.alphabet().len(), 32);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
    }

    #[test]
    fn test_empty_class_set_falls_back_to_all() {
        assert_eq!(ClassSet::NONE.effective(), ClassSet::ALL);
        let partial = ClassSet {
            lowercase: true,
            ..ClassSet::NONE
        };
        assert_eq!(partial.effective(), partial);
    }

    #[test]
    fn test_criteria_all_met() {
        assert!(!Criteria::default().all_met());
        let full = Criteria {
            length: true,
            uppercase: true,
            lowercase: true,
            number: true,
            special: true,
        };
        assert!(full.all_met());
    }
}
