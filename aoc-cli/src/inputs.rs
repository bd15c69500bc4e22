//! Locating and loading puzzle input files

use aoc_solver::{FactoryInfo, InputError, InputVariant, read_input};
use std::path::PathBuf;

/// File-based input store
///
/// Directory structure: `{base_dir}/day{day:02}/input.txt` (or `input.test.txt`),
/// unless an explicit file overrides it.
pub struct InputStore {
    base_dir: PathBuf,
    variant: InputVariant,
    override_path: Option<PathBuf>,
}

impl InputStore {
    pub fn new(base_dir: PathBuf, variant: InputVariant) -> Self {
        Self {
            base_dir,
            variant,
            override_path: None,
        }
    }

    /// Read every day from `path` instead of the directory layout
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    /// Path the input for a solver will be read from
    pub fn input_path(&self, info: &FactoryInfo) -> PathBuf {
        match &self.override_path {
            Some(path) => path.clone(),
            None => info.input_path(&self.base_dir, self.variant),
        }
    }

    /// Read and normalize the input for a solver
    pub fn load(&self, info: &FactoryInfo) -> Result<String, InputError> {
        read_input(&self.input_path(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn info(day: u8) -> FactoryInfo {
        FactoryInfo {
            year: 2024,
            day,
            parts: 2,
            title: "Test",
        }
    }

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"), InputVariant::Real);
        assert_eq!(store.input_path(&info(3)), PathBuf::from("inputs/day03/input.txt"));

        let store = InputStore::new(PathBuf::from("inputs"), InputVariant::Sample);
        assert_eq!(store.input_path(&info(25)), PathBuf::from("inputs/day25/input.test.txt"));
    }

    #[test]
    fn test_load_normalizes() {
        let temp = TempDir::new().unwrap();
        let day_dir = temp.path().join("day01");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), "1 2\r\n3 4\r\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf(), InputVariant::Real);
        assert_eq!(store.load(&info(1)).unwrap(), "1 2\n3 4");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), InputVariant::Real);
        let err = store.load(&info(4)).unwrap_err();
        assert!(err.to_string().contains("day04"));
    }

    #[test]
    fn test_override_wins() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        fs::write(&file, "x\n").unwrap();

        let store = InputStore::new(temp.path().join("nowhere"), InputVariant::Real).with_override(Some(file.clone()));
        assert_eq!(store.input_path(&info(9)), file);
        assert_eq!(store.load(&info(9)).unwrap(), "x");
    }
}
