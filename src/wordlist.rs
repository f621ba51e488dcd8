//! Common-word list management
//!
//! The `common` pattern tag always matches a built-in set of dictionary
//! words; this module optionally extends that set from an external file.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Words every evaluation checks for, file or no file.
pub const BUILTIN_COMMON_WORDS: [&str; 6] =
    ["password", "admin", "user", "login", "welcome", "test"];

static EXTRA_COMMON_WORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/common-words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-words.txt"))
}

/// Loads extra common words from the configured file.
///
/// Optional: evaluation works without it, checking only the built-in words.
/// Returns the number of extra words loaded.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads extra common words from a specific file path.
///
/// Use this when the caller owns path resolution (e.g. an asset system)
/// instead of relying on environment variables. One word per line,
/// case-insensitive; blank lines are skipped.
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    // Idempotente: se gia inizializzata, ritorna subito
    {
        let guard = EXTRA_COMMON_WORDS.read().unwrap();
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let words: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = words.len();
    {
        let mut guard = EXTRA_COMMON_WORDS.write().unwrap();
        *guard = Some(words);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} extra words from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the loaded extra words, or `None` before init.
pub fn get_extra_words() -> Option<Vec<String>> {
    let guard = EXTRA_COMMON_WORDS.read().unwrap();
    guard.clone()
}

/// Checks whether the (already lowercased) password contains any known
/// common word as a substring.
pub(crate) fn contains_common_word(lower_pwd: &str) -> bool {
    if BUILTIN_COMMON_WORDS.iter().any(|w| lower_pwd.contains(w)) {
        return true;
    }
    let guard = EXTRA_COMMON_WORDS.read().unwrap();
    guard
        .as_ref()
        .map(|words| words.iter().any(|w| lower_pwd.contains(w.as_str())))
        .unwrap_or(false)
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = EXTRA_COMMON_WORDS.write().unwrap();
    *guard = None;
}
