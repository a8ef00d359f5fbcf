use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use super::{last_updated_or_now, CatalogStore};
use crate::catalog::{Catalog, CatalogFile};
use crate::model::StorageError;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Catalog, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Catalog::new()),
            Err(e) => return Err(e.into()),
        };
        let data: CatalogFile = serde_json::from_reader(BufReader::new(file))?;
        let catalog = Catalog::from_file(data);
        info!(path = %self.path.display(), deals = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Writes to a temp file beside the catalog, then renames it over.
    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let data = catalog.to_file(last_updated_or_now(catalog));
        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, &data)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp.persist(&self.path)?;

        info!(path = %self.path.display(), deals = catalog.len(), "Saved catalog");
        Ok(())
    }
}
