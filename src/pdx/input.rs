//! Input discovery
//!
//! Expands command-line paths into the list of files to parse. Directories
//! are walked recursively, skipping hidden entries; files are kept when
//! their path matches one of the configured patterns.

use log::{debug, trace};
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Regex-based file path filter
///
/// Patterns are searched (not anchored) in the path with `/` separators. An
/// empty filter accepts every path.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: Vec<Regex>,
}

impl PathFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let normalized = path.to_string_lossy().replace('\\', "/");
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(&normalized))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.'))
}

/// Expand `paths` into the sorted files that pass `filter`
///
/// A named path that does not exist is an error; unreadable entries inside a
/// directory are too.
pub fn collect_files<P: AsRef<Path>>(paths: &[P], filter: &PathFilter) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            debug!("traversing {}", path.display());
            walk(path, filter, &mut files)?;
        } else if path.is_file() {
            if filter.matches(path) {
                files.push(path.to_path_buf());
            }
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("unable to find {}", path.display()),
            ));
        }
    }
    Ok(files)
}

fn walk(dir: &Path, filter: &PathFilter, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            walk(&path, filter, files)?;
        } else if filter.matches(&path) {
            trace!("selected {}", path.display());
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pdx-input-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = PathFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(Path::new("anything/at/all.txt")));
    }

    #[test]
    fn test_patterns_are_searched() {
        let filter = PathFilter::new(&[r"common/technology/[\w-]+\.txt$"]).unwrap();
        assert!(filter.matches(Path::new("/game/common/technology/00_phys.txt")));
        assert!(!filter.matches(Path::new("/game/common/buildings/00_farm.txt")));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PathFilter::new(&["("]).is_err());
    }

    #[test]
    fn test_walk_skips_hidden_and_sorts() {
        let dir = scratch_dir("walk");
        fs::create_dir_all(dir.join("common/b")).unwrap();
        fs::create_dir_all(dir.join(".git")).unwrap();
        fs::write(dir.join("common/b/two.txt"), "").unwrap();
        fs::write(dir.join("common/a.txt"), "").unwrap();
        fs::write(dir.join(".git/config.txt"), "").unwrap();
        fs::write(dir.join(".hidden.txt"), "").unwrap();

        let files = collect_files(&[&dir], &PathFilter::default()).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(&dir).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(relative, vec!["common/a.txt", "common/b/two.txt"]);

        let filter = PathFilter::new(&["two"]).unwrap();
        assert_eq!(collect_files(&[&dir], &filter).unwrap().len(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let err = collect_files(&["/nonexistent/pdx/input"], &PathFilter::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
