//! Line-oriented keyword scanning over a single text file.
//!
//! Positions are reported in characters of the original line. Case-insensitive
//! scans run over a per-character lowercase folding of the line and map every
//! hit back to the character it came from, so offsets stay valid even when a
//! character lowercases to more than one. Greek capital sigma follows the
//! word-final rule of `str::to_lowercase`.
//!
//! Content that is not valid UTF-8 is decoded lossily (invalid sequences
//! become U+FFFD) unless strict decoding is enabled.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::types::{LineMatch, SearchResult};

/// Reasons a file could not be searched
#[derive(Debug, Error)]
pub enum ScanError {
    /// The stat or the read failed (missing file, permission denied, ...)
    #[error("Failed to search file: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to search file: Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// Only raised with strict decoding enabled
    #[error("Failed to search file: {} is not valid UTF-8 text: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl ScanError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Searches one file for every occurrence of a keyword
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScanner {
    normalize_line_endings: bool,
    strict_utf8: bool,
}

impl KeywordScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip one trailing `\r` from every line before matching and reporting
    pub fn with_normalized_line_endings(mut self, enabled: bool) -> Self {
        self.normalize_line_endings = enabled;
        self
    }

    /// Fail on content that is not valid UTF-8 instead of replacing it
    pub fn with_strict_utf8(mut self, enabled: bool) -> Self {
        self.strict_utf8 = enabled;
        self
    }

    /// Stat and read `filepath`, then scan its lines for `keyword`.
    ///
    /// The returned `filepath` is absolute and the returned `keyword` is the
    /// one given, not its lowercased form.
    pub async fn search(
        &self,
        filepath: impl AsRef<Path>,
        keyword: &str,
        case_sensitive: bool,
    ) -> Result<SearchResult, ScanError> {
        let path = filepath.as_ref();

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| ScanError::io(path, e))?;
        if !metadata.is_file() {
            return Err(ScanError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ScanError::io(path, e))?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(source) if self.strict_utf8 => {
                return Err(ScanError::Decode {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(invalid) => String::from_utf8_lossy(invalid.as_bytes()).into_owned(),
        };

        let resolved = resolve_path(path).map_err(|e| ScanError::io(path, e))?;

        Ok(self.scan_content(resolved, &content, keyword, case_sensitive))
    }

    /// Scan already-loaded text. Lines are split on `\n` only.
    pub fn scan_content(
        &self,
        filepath: PathBuf,
        content: &str,
        keyword: &str,
        case_sensitive: bool,
    ) -> SearchResult {
        let matches = content
            .split('\n')
            .enumerate()
            .filter_map(|(idx, raw)| {
                let line = if self.normalize_line_endings {
                    raw.strip_suffix('\r').unwrap_or(raw)
                } else {
                    raw
                };

                let positions = find_positions(line, keyword, case_sensitive);
                (!positions.is_empty()).then(|| LineMatch {
                    line_number: idx + 1,
                    line_content: line.to_string(),
                    match_positions: positions,
                })
            })
            .collect();

        SearchResult::new(filepath, keyword, matches)
    }
}

/// Character offsets in `line` where `keyword` starts, overlapping hits included.
pub fn find_positions(line: &str, keyword: &str, case_sensitive: bool) -> Vec<usize> {
    let (needle, _) = fold(keyword, case_sensitive);
    let (haystack, origin) = fold(line, case_sensitive);

    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(offset) = index_of(&haystack, &needle, from) {
        let pos = origin[offset];
        // several folded chars can share one original char
        if positions.last() != Some(&pos) {
            positions.push(pos);
        }
        from = offset + 1;
    }
    positions
}

/// Folded characters of `text`, plus for each the index of the original
/// character it came from. `origin` carries one extra trailing entry for
/// the end-of-line position.
fn fold(text: &str, case_sensitive: bool) -> (Vec<char>, Vec<usize>) {
    let chars: Vec<char> = text.chars().collect();
    let mut folded = Vec::with_capacity(chars.len());
    let mut origin = Vec::with_capacity(chars.len() + 1);

    for (idx, &c) in chars.iter().enumerate() {
        if case_sensitive {
            folded.push(c);
            origin.push(idx);
        } else if c == 'Σ' && is_word_final(&chars, idx) {
            folded.push('ς');
            origin.push(idx);
        } else {
            for lower in c.to_lowercase() {
                folded.push(lower);
                origin.push(idx);
            }
        }
    }
    origin.push(chars.len());

    (folded, origin)
}

/// Final-sigma context: a cased letter before `idx` and none after it,
/// skipping case-ignorable characters on both sides.
fn is_word_final(chars: &[char], idx: usize) -> bool {
    let cased_before = chars[..idx]
        .iter()
        .rev()
        .find(|&&c| !is_case_ignorable(c))
        .is_some_and(|&c| is_cased(c));
    let cased_after = chars[idx + 1..]
        .iter()
        .find(|&&c| !is_case_ignorable(c))
        .is_some_and(|&c| is_cased(c));

    cased_before && !cased_after
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

// TODO: swap for the full Case_Ignorable table if non-Greek scripts need it
fn is_case_ignorable(c: char) -> bool {
    matches!(
        c,
        '\'' | '.' | ':' | '^' | '`' | '\u{00AD}' | '\u{00B7}' | '\u{2019}' | '\u{0300}'..='\u{036F}'
    )
}

/// First offset at or after `from` where `needle` occurs. An empty needle
/// matches at every offset up to and including the end.
fn index_of(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    let last = haystack.len().checked_sub(needle.len())?;
    (from..=last).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Make `path` absolute against the current directory and fold `.` and `..`
/// lexically. Symlinks are left alone.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    Ok(resolved)
}
