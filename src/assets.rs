//! Asset directory discovery
//!
//! Two install layouts are supported: an `assets` directory beside the
//! directory holding the executable, or one inside it. The first that
//! exists wins; a configured directory overrides both.

use std::path::{Path, PathBuf};

/// Name of the asset directory in either layout
pub const ASSETS_DIR_NAME: &str = "assets";

/// Pick the asset directory for an executable living in `exe_dir`
pub fn resolve_assets_dir(exe_dir: &Path) -> PathBuf {
    let sibling = exe_dir.join("..").join(ASSETS_DIR_NAME);
    if sibling.is_dir() {
        sibling
    } else {
        exe_dir.join(ASSETS_DIR_NAME)
    }
}

/// Asset directory for this process
///
/// Falls back to `./assets` when the executable path is unavailable.
pub fn locate_assets(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        log::info!("Using configured asset directory {}", dir.display());
        return dir.to_path_buf();
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let dir = match exe_dir {
        Some(exe_dir) => resolve_assets_dir(&exe_dir),
        None => {
            log::warn!("Could not determine executable location; looking for assets in the working directory");
            PathBuf::from(ASSETS_DIR_NAME)
        }
    };
    log::info!("Using asset directory {}", dir.display());
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("penteract-assets-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_prefers_sibling_layout() {
        let root = scratch_dir("sibling");
        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(root.join(ASSETS_DIR_NAME)).unwrap();
        fs::create_dir_all(bin.join(ASSETS_DIR_NAME)).unwrap();

        let resolved = resolve_assets_dir(&bin);
        assert_eq!(resolved, bin.join("..").join(ASSETS_DIR_NAME));
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_falls_back_to_nested_layout() {
        let root = scratch_dir("nested");
        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();

        assert_eq!(resolve_assets_dir(&bin), bin.join(ASSETS_DIR_NAME));
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_override_wins() {
        let dir = PathBuf::from("/somewhere/else");
        assert_eq!(locate_assets(Some(&dir)), dir);
    }
}
