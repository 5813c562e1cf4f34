//! Pattern files shipped with the simulator

use anyhow::{Context, Result};
use std::path::Path;

/// `(file name, file content)` for each bundled pattern
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    (
        "glider.cells",
        "!NAME: glider\n\
         !Smallest spaceship, travels diagonally\n\
         .O.\n\
         ..O\n\
         OOO\n",
    ),
    (
        "acorn.cells",
        "!NAME: acorn\n\
         !Methuselah, stabilises after 5206 generations\n\
         .O.....\n\
         ...O...\n\
         OO..OOO\n",
    ),
    (
        "b-heptomino.cells",
        "!NAME: B-heptomino\n\
         O.OO\n\
         OOO.\n\
         .O..\n",
    ),
    (
        "gosper-glider-gun.cells",
        "!NAME: Gosper glider gun\n\
         !Emits a glider every 30 generations\n\
         ........................O...........\n\
         ......................O.O...........\n\
         ............OO......OO............OO\n\
         ...........O...O....OO............OO\n\
         OO........O.....O...OO..............\n\
         OO........O...O.OO....O.O...........\n\
         ..........O.....O.......O...........\n\
         ...........O...O....................\n\
         ............OO......................\n",
    ),
];

/// Write the bundled pattern files into `dir`, skipping files that already
/// exist unless `force` is set. Returns the paths written.
pub fn write_builtin_patterns<P: AsRef<Path>>(dir: P, force: bool) -> Result<Vec<std::path::PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for (file_name, content) in BUILTIN_PATTERNS {
        let path = dir.join(file_name);
        if path.exists() && !force {
            continue;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternLibrary;
    use tempfile::tempdir;

    #[test]
    fn test_builtins_load_into_library() {
        let temp_dir = tempdir().unwrap();
        let written = write_builtin_patterns(temp_dir.path(), false).unwrap();
        assert_eq!(written.len(), BUILTIN_PATTERNS.len());

        let library = PatternLibrary::scan(temp_dir.path()).unwrap();
        assert_eq!(
            library.names(),
            vec!["ACORN", "B-HEPTOMINO", "GLIDER", "GOSPER GLIDER GUN"]
        );

        let acorn = library.load("Acorn").unwrap().unwrap();
        assert_eq!(acorn.size(), (3, 7));
        assert_eq!(acorn.cells().living_count(), 7);

        let gun = library.load("gosper glider gun").unwrap().unwrap();
        assert_eq!(gun.size(), (9, 36));
        assert_eq!(gun.cells().living_count(), 36);

        let glider = library.load("GLIDER").unwrap().unwrap();
        assert_eq!(glider.cells().living_count(), 5);
    }

    #[test]
    fn test_existing_files_kept_without_force() {
        let temp_dir = tempdir().unwrap();
        let custom = temp_dir.path().join("glider.cells");
        std::fs::write(&custom, "!NAME: my glider\nO\n").unwrap();

        let written = write_builtin_patterns(temp_dir.path(), false).unwrap();
        assert_eq!(written.len(), BUILTIN_PATTERNS.len() - 1);
        assert_eq!(std::fs::read_to_string(&custom).unwrap(), "!NAME: my glider\nO\n");

        write_builtin_patterns(temp_dir.path(), true).unwrap();
        assert!(std::fs::read_to_string(&custom).unwrap().starts_with("!NAME: glider"));
    }
}
