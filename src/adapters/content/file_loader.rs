//! File-based composition loader.
//!
//! Reads one document per file from a directory per collection:
//!
//! ```text
//! content/
//!   memorandum/   (or manuscript/)
//!     01-introduction.json
//!     02-indivisibility.yaml
//!   corrective/   (or data/)
//!     ...
//! ```
//!
//! Files load in file-name order, which is the navigation order.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::document::{CompositionDocument, DocumentFormat, IdAllocator};
use crate::domain::composition::Composition;
use crate::domain::foundation::CollectionType;
use crate::ports::{CompositionLoader, LoadError};

#[derive(Debug, Clone)]
pub struct FileCompositionLoader {
    root: PathBuf,
}

impl FileCompositionLoader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory names that hold documents for `collection`.
    fn directories(&self, collection: CollectionType) -> Vec<PathBuf> {
        let names: &[&str] = match collection {
            CollectionType::Memorandum => &["memorandum", "manuscript"],
            CollectionType::Corrective => &["corrective", "data"],
        };
        names.iter().map(|name| self.root.join(name)).collect()
    }

    /// Document files in `dir`, sorted by file name. A missing directory is empty.
    async fn document_files(&self, dir: &Path) -> Result<Vec<(PathBuf, DocumentFormat)>, LoadError> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "Content directory missing, skipping");
                return Ok(vec![]);
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let format = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(DocumentFormat::from_extension);
            let is_file = entry.file_type().await?.is_file();
            match format {
                Some(format) if is_file => files.push((path, format)),
                _ => debug!(path = %path.display(), "Ignoring non-document entry"),
            }
        }

        files.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
        Ok(files)
    }
}

#[async_trait]
impl CompositionLoader for FileCompositionLoader {
    async fn fetch_collections(&self) -> Result<Vec<Composition>, LoadError> {
        let mut ids = IdAllocator::default();
        let mut compositions = Vec::new();

        for collection in CollectionType::ALL {
            for dir in self.directories(collection) {
                for (path, format) in self.document_files(&dir).await? {
                    let source_name = path.display().to_string();
                    let raw = fs::read_to_string(&path).await?;
                    let document = CompositionDocument::parse(&raw, format, &source_name)?;

                    let Some(target) = document.resolve_collection(Some(collection), &source_name)
                    else {
                        continue;
                    };
                    if target != collection {
                        warn!(
                            source = %source_name,
                            directory = %collection,
                            declared = %target,
                            "Document declares a different collection than its directory"
                        );
                    }

                    let id = ids.next(target);
                    debug!(source = %source_name, collection = %target, "Loaded composition file");
                    compositions.push(document.into_composition(target, id, &source_name)?);
                }
            }
        }

        Ok(compositions)
    }

    fn source_name(&self) -> &str {
        "files"
    }
}
