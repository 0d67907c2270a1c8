//! Fixture file loading.

use std::fs;
use std::path::Path;

use crate::{parse_fixture, SpecError, SpecResult, UiFixture};

fn load_error(path: &Path, error: impl std::fmt::Display) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<UiFixture> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    parse_fixture(&content).map_err(|e| load_error(path, e))
}

/// Load all fixtures under a directory (glob: **/*.toml), sorted by path.
///
/// Names are paths relative to `dir`.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, UiFixture)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, UiFixture)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| load_error(dir, e))? {
        let path = entry.map_err(|e| load_error(dir, e))?.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("default-total.toml");
        let fixture = load_fixture(&path).unwrap();
        assert!(fixture.title.is_some());
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        assert!(fixtures.len() >= 4);
        assert!(fixtures.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    }

    #[test]
    fn test_load_skips_other_files_and_recurses() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a fixture").unwrap();
        let mut file = fs::File::create(dir.path().join("nested").join("one.toml")).unwrap();
        writeln!(file, "[snapshot]\nstatus = \"pending\"").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].0, Path::new("nested").join("one.toml").display().to_string());
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[snapshot]").unwrap();
        let err = load_fixture(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("failed to load fixture: "));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let fixtures = load_all_fixtures(Path::new("/nonexistent/fixtures")).unwrap();
        assert!(fixtures.is_empty());
    }
}
