//! Directory-backed relation archive.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustfst::fst_impls::VectorFst;
use rustfst::fst_traits::SerializableFst;
use rustfst::semirings::TropicalWeight;

use super::{ArchiveError, RelationStore, WeightedRelation};

/// A relation archive backed by a directory of serialized FSTs.
///
/// Each relation lives in its own `<name>.fst` file, written in rustfst's
/// binary format. The directory is opened read-only and validated once at
/// construction; relations are read on demand by [`resolve`].
///
/// [`resolve`]: RelationStore::resolve
///
/// # Example
///
/// ```rust,ignore
/// use rewrite_cascade::prelude::*;
///
/// let archive = FstArchive::open("rules/")?;
/// let mut cascade = RuleCascade::new(archive);
/// cascade.set_rules(["digits", "lowercase"])?;
/// ```
#[derive(Debug, Clone)]
pub struct FstArchive {
    dir: PathBuf,
}

impl FstArchive {
    /// Opens an archive rooted at `path`.
    ///
    /// Fails with [`ArchiveError::Open`] if the path does not exist, cannot
    /// be read, or is not a directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let dir = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&dir).map_err(|source| ArchiveError::Open {
            path: dir.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ArchiveError::Open {
                path: dir,
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            });
        }
        Ok(Self { dir })
    }

    /// The directory this archive reads from.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn relation_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.fst"))
    }
}

impl RelationStore for FstArchive {
    fn resolve(&self, name: &str) -> Result<Option<WeightedRelation>, ArchiveError> {
        let path = self.relation_path(name);
        if !path.is_file() {
            return Ok(None);
        }
        let fst = VectorFst::<TropicalWeight>::read(&path).map_err(|source| ArchiveError::Load {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(Arc::new(fst)))
    }
}
