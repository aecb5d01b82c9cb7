//! Scanned documents attached to a vehicle.
//!
//! Files live in one flat directory and are named after the vehicle's
//! plate and the document kind, e.g. `XEP_4096_INSURANCE.pdf`. Attaching a
//! new file for the same plate and kind replaces the old one, whatever its
//! extension was. The vehicle store knows nothing about these files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{FleetError, Result};
use crate::fs::copy_atomic;

/// Extensions recognised as document files.
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Kind of document attached to a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Registration licence
    Licence,
    Insurance,
    /// Roadworthiness inspection certificate
    Kteo,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Licence,
        DocumentKind::Insurance,
        DocumentKind::Kteo,
    ];

    /// Suffix used in the stored file name.
    pub fn suffix(&self) -> &'static str {
        match self {
            DocumentKind::Licence => "LICENCE",
            DocumentKind::Insurance => "INSURANCE",
            DocumentKind::Kteo => "KTEO",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Licence => "licence",
            DocumentKind::Insurance => "insurance",
            DocumentKind::Kteo => "kteo",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "licence" | "license" => Ok(DocumentKind::Licence),
            "insurance" => Ok(DocumentKind::Insurance),
            "kteo" => Ok(DocumentKind::Kteo),
            other => Err(FleetError::Validation(format!(
                "Unknown document kind '{}'. Use: licence, insurance, kteo",
                other
            ))),
        }
    }
}

/// Turn a license plate into a file-name-safe prefix.
///
/// Dashes and slashes become underscores, spaces are dropped, letters are
/// upper-cased.
pub fn sanitize_plate(plate: &str) -> String {
    plate
        .trim()
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| if c == '-' || c == '/' { '_' } else { c })
        .collect::<String>()
        .to_uppercase()
}

/// Directory of attached document files.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// The directory is created lazily on the first attach.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy `source` into the store as the `kind` document for `plate`.
    ///
    /// Any previous file for the same plate and kind is removed first. The
    /// copy keeps the source's extension (lower-cased). Existing files are
    /// matched whatever the case of their extension.
    pub fn attach(&self, plate: &str, kind: DocumentKind, source: &Path) -> Result<PathBuf> {
        let prefix = file_prefix(plate, kind)?;
        if !source.is_file() {
            return Err(FleetError::NotFound(format!(
                "Document file {}",
                source.display()
            )));
        }

        fs::create_dir_all(&self.dir)?;
        self.remove_existing(&prefix)?;

        let destination = match source
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
        {
            Some(ext) if !ext.is_empty() => self.dir.join(format!("{}.{}", prefix, ext)),
            _ => self.dir.join(&prefix),
        };

        copy_atomic(source, &destination)?;
        info!(plate, kind = kind.as_str(), path = %destination.display(), "attached document");
        Ok(destination)
    }

    /// Path of the `kind` document for `plate`, if one is attached.
    pub fn find(&self, plate: &str, kind: DocumentKind) -> Option<PathBuf> {
        let prefix = file_prefix(plate, kind).ok()?;
        self.matching_files(&prefix).ok()?.into_iter().next()
    }

    /// Every document attached to `plate`, in `DocumentKind::ALL` order.
    pub fn list(&self, plate: &str) -> Vec<(DocumentKind, PathBuf)> {
        DocumentKind::ALL
            .iter()
            .filter_map(|kind| self.find(plate, *kind).map(|path| (*kind, path)))
            .collect()
    }

    /// Delete the `kind` document for `plate`. Returns whether a file was removed.
    pub fn remove(&self, plate: &str, kind: DocumentKind) -> Result<bool> {
        let prefix = file_prefix(plate, kind)?;
        let removed = self.remove_existing(&prefix)?;
        Ok(removed > 0)
    }

    fn remove_existing(&self, prefix: &str) -> Result<usize> {
        let files = self.matching_files(prefix)?;
        for path in &files {
            fs::remove_file(path)?;
            debug!(path = %path.display(), "removed document");
        }
        Ok(files.len())
    }

    /// Files named `{prefix}.{ext}` for a recognised extension, in name order.
    fn matching_files(&self, prefix: &str) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let recognised = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix(prefix))
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(is_document_extension);
            if recognised && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_document_extension(ext: &str) -> bool {
    DOCUMENT_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

fn file_prefix(plate: &str, kind: DocumentKind) -> Result<String> {
    let clean = sanitize_plate(plate);
    if clean.is_empty() {
        return Err(FleetError::Validation(
            "license plate is required".to_string(),
        ));
    }
    Ok(format!("{}_{}", clean, kind.suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_source(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_sanitize_plate() {
        assert_eq!(sanitize_plate("xep-4096"), "XEP_4096");
        assert_eq!(sanitize_plate("AB 12/34"), "AB12_34");
        assert_eq!(sanitize_plate("   "), "");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Licence".parse::<DocumentKind>().unwrap(), DocumentKind::Licence);
        assert_eq!("license".parse::<DocumentKind>().unwrap(), DocumentKind::Licence);
        assert_eq!("KTEO".parse::<DocumentKind>().unwrap(), DocumentKind::Kteo);
        assert!("passport".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_attach_names_file_after_plate_and_kind() {
        let src = tempdir().unwrap();
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path().join("files"));
        let source = write_source(src.path(), "scan.PDF", b"pdf");

        let path = store
            .attach("xep-4096", DocumentKind::Insurance, &source)
            .unwrap();

        assert_eq!(path, root.path().join("files").join("XEP_4096_INSURANCE.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"pdf");
        assert!(source.exists());
    }

    #[test]
    fn test_attach_replaces_other_extension() {
        let src = tempdir().unwrap();
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let pdf = write_source(src.path(), "a.pdf", b"old");
        let png = write_source(src.path(), "b.png", b"new");

        store.attach("XEP-4096", DocumentKind::Kteo, &pdf).unwrap();
        store.attach("XEP-4096", DocumentKind::Kteo, &png).unwrap();

        assert!(!root.path().join("XEP_4096_KTEO.pdf").exists());
        assert_eq!(
            store.find("XEP-4096", DocumentKind::Kteo),
            Some(root.path().join("XEP_4096_KTEO.png"))
        );
    }

    #[test]
    fn test_upper_case_extensions_are_found_and_replaced() {
        let src = tempdir().unwrap();
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let existing = write_source(root.path(), "XEP_4096_KTEO.PDF", b"old");
        write_source(root.path(), "XEP_4096_KTEO_COPY.pdf", b"other");
        write_source(root.path(), "XEP_4096_KTEO.txt", b"notes");

        assert_eq!(store.find("XEP-4096", DocumentKind::Kteo), Some(existing.clone()));
        assert_eq!(store.list("XEP-4096").len(), 1);

        let png = write_source(src.path(), "scan.png", b"new");
        let path = store.attach("XEP-4096", DocumentKind::Kteo, &png).unwrap();
        assert!(!existing.exists());
        assert_eq!(store.find("XEP-4096", DocumentKind::Kteo), Some(path));

        assert!(store.remove("XEP-4096", DocumentKind::Kteo).unwrap());
        assert!(store.find("XEP-4096", DocumentKind::Kteo).is_none());
        assert!(root.path().join("XEP_4096_KTEO_COPY.pdf").exists());
        assert!(root.path().join("XEP_4096_KTEO.txt").exists());
    }

    #[test]
    fn test_list_and_remove() {
        let src = tempdir().unwrap();
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let source = write_source(src.path(), "doc.jpg", b"img");

        store.attach("XEP-4096", DocumentKind::Kteo, &source).unwrap();
        store.attach("XEP-4096", DocumentKind::Licence, &source).unwrap();

        let kinds: Vec<_> = store.list("XEP-4096").into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, [DocumentKind::Licence, DocumentKind::Kteo]);

        assert!(store.remove("XEP-4096", DocumentKind::Kteo).unwrap());
        assert!(!store.remove("XEP-4096", DocumentKind::Kteo).unwrap());
        assert_eq!(store.list("XEP-4096").len(), 1);
    }

    #[test]
    fn test_other_plates_untouched() {
        let src = tempdir().unwrap();
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let source = write_source(src.path(), "doc.pdf", b"x");

        store.attach("AAA-1", DocumentKind::Insurance, &source).unwrap();
        store.attach("BBB-2", DocumentKind::Insurance, &source).unwrap();
        store.remove("AAA-1", DocumentKind::Insurance).unwrap();

        assert!(store.find("BBB-2", DocumentKind::Insurance).is_some());
    }

    #[test]
    fn test_blank_plate_rejected() {
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path());
        let err = store
            .attach(" ", DocumentKind::Licence, &root.path().join("x.pdf"))
            .unwrap_err();
        assert!(matches!(err, FleetError::Validation(_)));
        assert!(store.find(" ", DocumentKind::Licence).is_none());
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let root = tempdir().unwrap();
        let store = DocumentStore::new(root.path().join("files"));
        let err = store
            .attach("XEP-4096", DocumentKind::Licence, &root.path().join("nope.pdf"))
            .unwrap_err();
        assert!(matches!(err, FleetError::NotFound(_)));
        assert!(!root.path().join("files").exists());
    }
}
