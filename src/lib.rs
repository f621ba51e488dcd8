//! Password toolkit: generation, strength evaluation and bulk analysis
//!
//! This library provides a password generator, a strength evaluator with
//! entropy and crack-time estimates, and a bulk analyzer that summarizes a
//! batch of evaluations.
//!
//! # Features
//!
//! - `async` (default): Enables async channel wrappers with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the optional extra common-words file
//!   (default: `./assets/common-words.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_toolkit::{evaluate_password_strength, generate_password, GenerationOptions};
//! use secrecy::SecretString;
//!
//! // Generate a 16-character password from all four classes
//! let generated = generate_password(&GenerationOptions {
//!     length: 16,
//!     ..GenerationOptions::default()
//! });
//!
//! // Evaluate it
//! let password = SecretString::new(generated.into());
//! let result = evaluate_password_strength(&password);
//!
//! println!("Score: {}", result.score);
//! println!("Strength: {}", result.label);
//! println!("Crack time: {}", result.crack_time);
//! ```

// Internal modules
mod bulk;
mod entropy;
mod evaluator;
mod generator;
mod sections;
mod types;
mod wordlist;

// Public API
pub use bulk::{analyze_bulk, BulkEntry, BulkError, BulkSummary, LabelCounts};
pub use evaluator::{evaluate_password_strength, is_password_valid};
pub use generator::{
    build_pool, generate_password, generate_password_with, replace_at, replace_at_with,
    GeneratorError,
};
pub use types::{
    CharacterClass, ClassSet, Criteria, GenerationOptions, PatternTag, StrengthLabel,
    StrengthResult,
};
pub use wordlist::{
    get_extra_words, init_wordlist, init_wordlist_from_path, WordlistError,
    BUILTIN_COMMON_WORDS,
};

#[cfg(feature = "async")]
pub use bulk::analyze_bulk_tx;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
