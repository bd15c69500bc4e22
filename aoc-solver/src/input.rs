//! Locating, reading and normalizing puzzle input

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Which of a day's two input files to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// The personal puzzle input
    #[default]
    Real,
    /// The worked example from the puzzle statement
    Sample,
}

impl InputVariant {
    pub fn file_name(self) -> &'static str {
        match self {
            InputVariant::Real => "input.txt",
            InputVariant::Sample => "input.test.txt",
        }
    }
}

/// Conventional location of a day's input below `base`: `base/dayDD/<file>`.
pub fn input_path(base: &Path, day: u8, variant: InputVariant) -> PathBuf {
    base.join(format!("day{:02}", day)).join(variant.file_name())
}

/// Strip every carriage return, then at most one trailing newline.
///
/// ```
/// use aoc_solver::normalize_input;
///
/// assert_eq!(normalize_input("1 2\r\n3 4\r\n"), "1 2\n3 4");
/// assert_eq!(normalize_input("a\n\n"), "a\n");
/// ```
pub fn normalize_input(raw: &str) -> String {
    let mut text: String = raw.chars().filter(|&c| c != '\r').collect();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Read the whole file at `path` and normalize it.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_input(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize_input(""), "");
        assert_eq!(normalize_input("\n"), "");
        assert_eq!(normalize_input("a\r\nb\r\n"), "a\nb");
        assert_eq!(normalize_input("a\nb"), "a\nb");
        assert_eq!(normalize_input("a\n\n"), "a\n");
        assert_eq!(normalize_input("a\r\r\n"), "a");
    }

    #[test]
    fn test_input_path_layout() {
        let base = Path::new("inputs");
        assert_eq!(
            input_path(base, 3, InputVariant::Real),
            Path::new("inputs").join("day03").join("input.txt")
        );
        assert_eq!(
            input_path(base, 25, InputVariant::Sample),
            Path::new("inputs").join("day25").join("input.test.txt")
        );
    }

    #[test]
    fn test_read_input_normalizes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"3   4\r\n4   3\r\n").unwrap();
        drop(file);

        assert_eq!(read_input(&path).unwrap(), "3   4\n4   3");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        match read_input(&path) {
            Err(InputError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    proptest! {
        /// Normalized text never contains a carriage return.
        #[test]
        fn prop_no_carriage_returns(raw in "[a-c\r\n ]{0,40}") {
            prop_assert!(!normalize_input(&raw).contains('\r'));
        }

        /// Exactly one trailing newline is removed, the rest of the text is kept.
        #[test]
        fn prop_strips_single_newline(body in "[a-c \n]{0,30}") {
            let with_newline = format!("{}\n", body);
            prop_assert_eq!(normalize_input(&with_newline), body);
        }

        /// CRLF and LF encodings of the same lines normalize identically.
        #[test]
        fn prop_crlf_equivalent(lines in proptest::collection::vec("[a-z0-9 ]{0,8}", 0..6)) {
            let lf = lines.join("\n") + "\n";
            let crlf = lines.join("\r\n") + "\r\n";
            prop_assert_eq!(normalize_input(&lf), normalize_input(&crlf));
        }
    }
}
