//! Catalog handle for hosts that query movements from several threads.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::catalog::Catalog;
use super::decoder::Decoder;
use super::importer::{self, DirImport};
use super::record::MovementRecord;
use super::types::MovementId;
use crate::errors::import::ImportError;

/// Cloneable handle: readers share the catalog, `register` takes the single
/// write lock. Decoders keep their own reference to the record, so replacing
/// an entry never invalidates a decoder handed out earlier.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read()
    }

    pub fn decoder_by_id(&self, id: MovementId) -> Decoder {
        Decoder::from_id(&self.inner.read(), id)
    }

    pub fn decoder_by_name(&self, name: &str) -> Decoder {
        Decoder::from_name(&self.inner.read(), name)
    }

    pub fn register(&self, record: MovementRecord, replace_duplicates: bool) -> MovementId {
        self.inner.write().register(record, replace_duplicates)
    }

    pub fn import_str(&self, text: &str, replace_duplicates: bool) -> Result<MovementId, ImportError> {
        importer::import_str(&mut self.inner.write(), text, replace_duplicates)
    }

    pub fn import_file(
        &self,
        path: impl AsRef<Path>,
        replace_duplicates: bool,
    ) -> Result<MovementId, ImportError> {
        importer::import_file(&mut self.inner.write(), path, replace_duplicates)
    }

    pub fn import_dir(&self, dir: impl AsRef<Path>) -> Result<DirImport, ImportError> {
        importer::import_dir(&mut self.inner.write(), dir)
    }
}
