//! Common-password wordlist
//!
//! Opt-in lookup against a list of known common passwords, loaded once
//! from disk. The evaluator never consults it; presentation layers that
//! want the check call `is_common_password` themselves, so evaluation
//! stays pure.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

const DEFAULT_WORDLIST_PATH: &str = "./assets/common-passwords.txt";
const WORDLIST_PATH_ENV: &str = "PWD_WORDLIST_PATH";

static WORDLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read wordlist file: {0}")]
    Read(#[from] io::Error),
    #[error("wordlist file is empty")]
    Empty,
}

/// Resolves the wordlist location: `PWD_WORDLIST_PATH` when set,
/// otherwise `./assets/common-passwords.txt`.
pub fn wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST_PATH))
}

/// Loads the wordlist from the resolved path. Call once at startup.
///
/// Idempotent: once a list is loaded, later calls return its size
/// without touching the filesystem.
///
/// # Errors
///
/// [`WordlistError`] when the file is missing, unreadable or contains
/// no entries.
pub fn init_wordlist() -> Result<usize, WordlistError> {
    init_wordlist_from_path(wordlist_path())
}

/// Loads the wordlist from an explicit path, for callers that resolve
/// their asset locations themselves instead of using the environment.
///
/// # Errors
///
/// [`WordlistError`] when the file is missing, unreadable or contains
/// no entries.
pub fn init_wordlist_from_path(path: impl AsRef<Path>) -> Result<usize, WordlistError> {
    if let Some(list) = WORDLIST.read().unwrap().as_ref() {
        return Ok(list.len());
    }

    let path = path.as_ref();
    let entries = load_entries(path)?;
    let count = entries.len();
    *WORDLIST.write().unwrap() = Some(entries);

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// One entry per line, trimmed and lowercased; blank lines skipped.
fn load_entries(path: &Path) -> Result<HashSet<String>, WordlistError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist not found at {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let entries: HashSet<String> = std::fs::read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    if entries.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist at {:?} contains no entries", path);
        return Err(WordlistError::Empty);
    }

    Ok(entries)
}

/// Case-insensitive membership test. Returns `false` until a wordlist
/// has been loaded.
pub fn is_common_password(password: &str) -> bool {
    WORDLIST
        .read()
        .unwrap()
        .as_ref()
        .is_some_and(|list| list.contains(&password.to_lowercase()))
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    *WORDLIST.write().unwrap() = None;
}
