//! Read-only asset probing for flags and logos.
//!
//! The only I/O in the engine: synchronous existence checks on a local
//! directory tree. A missing asset is never an error; the document just
//! renders without it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::NumberOrText;
use crate::nations;

/// Locator for `flags/` and `logos/` under one root directory.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
}

impl AssetLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Flag asset for a raw nationality, or `None`.
    ///
    /// Normalizes to ISO-3, maps back to the IOC file-name form (the two
    /// diverge for a handful of codes), then probes the candidate paths
    /// in order.
    pub fn flag(&self, nation: &str) -> Option<PathBuf> {
        let iso = nations::iso3(nation)?;
        let file = format!("{}.png", nations::flag_code(&iso));
        let candidates = [
            self.root.join("flags").join(&file),
            Path::new("flags").join(&file),
        ];
        match candidates.into_iter().find(|p| p.is_file()) {
            Some(path) => Some(path),
            None => {
                debug!(nation, file = %file, "no flag asset found");
                None
            }
        }
    }

    /// Competition/division logo, or the show-wide default, or `None`.
    ///
    /// The key is the two-digit competition number (leading digit run of
    /// the raw value) plus a one-digit division number, 0 when absent:
    /// competition 14, division 2 → `logos/142.png`.
    pub fn logo(
        &self,
        competition_number: Option<&NumberOrText>,
        division_number: Option<&NumberOrText>,
    ) -> Option<PathBuf> {
        if let Some(number) = competition_number.and_then(NumberOrText::leading_int) {
            let division = division_number.and_then(NumberOrText::as_int).unwrap_or(0);
            let keyed = self.root.join("logos").join(format!("{number:02}{division}.png"));
            if keyed.is_file() {
                return Some(keyed);
            }
            debug!(path = %keyed.display(), "no competition logo, trying the default");
        }
        let fallback = self.root.join("logos").join("logo.png");
        fallback.is_file().then_some(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn library_with(files: &[&str]) -> (tempfile::TempDir, AssetLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"png").unwrap();
        }
        let library = AssetLibrary::new(dir.path());
        (dir, library)
    }

    #[test]
    fn flags_are_probed_under_the_ioc_name() {
        let (_dir, library) = library_with(&["flags/ger.png"]);
        // "GER" normalizes to ISO DEU but the asset is keyed ger.png.
        let found = library.flag("GER").unwrap();
        assert!(found.ends_with("flags/ger.png"));
        // ISO input maps back to the IOC file name; deu.png is never probed.
        assert!(library.flag("DEU").unwrap().ends_with("flags/ger.png"));
    }

    #[test]
    fn missing_flag_is_none_not_an_error() {
        let (_dir, library) = library_with(&[]);
        assert!(library.flag("FRA").is_none());
        assert!(library.flag("").is_none());
    }

    #[test]
    fn logo_keys_combine_competition_and_division() {
        let (_dir, library) = library_with(&["logos/142.png", "logos/logo.png"]);
        let comp = NumberOrText::Text("14start".into());
        let div = NumberOrText::Number(2);
        let found = library.logo(Some(&comp), Some(&div)).unwrap();
        assert!(found.ends_with("logos/142.png"));
    }

    #[test]
    fn missing_division_keys_as_zero() {
        let (_dir, library) = library_with(&["logos/140.png"]);
        let comp = NumberOrText::Number(14);
        let found = library.logo(Some(&comp), None).unwrap();
        assert!(found.ends_with("logos/140.png"));
    }

    #[test]
    fn logo_falls_back_to_the_show_default_then_nothing() {
        let (_dir, library) = library_with(&["logos/logo.png"]);
        let comp = NumberOrText::Number(99);
        let found = library.logo(Some(&comp), None).unwrap();
        assert!(found.ends_with("logos/logo.png"));
        assert!(library.logo(None, None).unwrap().ends_with("logos/logo.png"));

        let (_dir, empty) = library_with(&[]);
        assert!(empty.logo(Some(&comp), None).is_none());
    }
}
