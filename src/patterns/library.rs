//! Registry of pattern files found under a directory

use super::definition::{read_pattern_name, PatternDefinition};
use crate::error::LifeResult;
use itertools::Itertools;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Maps upper-cased pattern names to the file that defines them
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    entries: HashMap<String, PathBuf>,
}

impl PatternLibrary {
    /// Build a library by scanning `directory` recursively.
    ///
    /// Hidden entries are ignored. Files without a valid `!NAME:` header are
    /// skipped with a warning. When two files declare the same name the one
    /// visited last (sorted path order) wins.
    pub fn scan<P: AsRef<Path>>(directory: P) -> LifeResult<Self> {
        let mut library = Self::default();
        let mut files = Vec::new();
        collect_files(directory.as_ref(), &mut files)?;
        files.sort();

        for path in files {
            match read_pattern_name(&path) {
                Ok(name) => library.register(name, path),
                Err(e) => warn!("Skipping pattern file {}: {}", path.display(), e),
            }
        }

        info!(
            count = library.len(),
            directory = %directory.as_ref().display(),
            "pattern library loaded"
        );
        Ok(library)
    }

    /// Register a pattern file under `name`, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, path: PathBuf) {
        let key = name.into().to_uppercase();
        if let Some(previous) = self.entries.insert(key.clone(), path) {
            debug!(name = %key, replaced = %previous.display(), "duplicate pattern name, keeping later file");
        }
    }

    /// Case-insensitive lookup of a pattern's file
    pub fn lookup(&self, name: &str) -> Option<&Path> {
        self.entries.get(&name.to_uppercase()).map(PathBuf::as_path)
    }

    /// Load the definition registered under `name`
    pub fn load(&self, name: &str) -> Option<LifeResult<PatternDefinition>> {
        self.lookup(name).map(PatternDefinition::load)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn collect_files(root: &Path, files: &mut Vec<PathBuf>) -> LifeResult<()> {
    let entries = std::fs::read_dir(root)?;
    walk_entries(entries, files);
    Ok(())
}

/// Descend into a subdirectory; an unreadable one is logged and skipped
fn collect_subdir(dir: &Path, files: &mut Vec<PathBuf>) {
    match std::fs::read_dir(dir) {
        Ok(entries) => walk_entries(entries, files),
        Err(e) => warn!("Skipping directory {}: {}", dir.display(), e),
    }
}

fn walk_entries(entries: std::fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        // Symlinked directories are not followed
        if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            collect_subdir(&path, files);
        } else if path.is_file() {
            files.push(path);
        }
    }
}
