use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::resource::gltf::loader::BufferLoader;

/// Loads payloads from files next to the document.
pub struct FileSystemBufferLoader {
    root: PathBuf,
    buffer_registry: HashMap<String, Vec<u8>>,
}

impl FileSystemBufferLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            buffer_registry: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, uri: &str) -> Result<PathBuf> {
        let path = self.root.join(uri);

        if !path.exists() {
            log::error!("Unable to find buffer file {}", path.display());
            return Err(Error::BufferFileNotFound { path });
        }

        if !path.is_file() {
            log::error!("Buffer file {} is not a regular file", path.display());
            return Err(Error::BufferFileNotRegular { path });
        }

        Ok(path)
    }
}

impl BufferLoader for FileSystemBufferLoader {
    fn load_buffer(&mut self, uri: &str) -> Result<()> {
        if self.buffer_registry.contains_key(uri) {
            return Ok(());
        }

        let path = self.resolve(uri)?;
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(source) => {
                log::error!("Failed to read buffer file {}: {source}", path.display());
                return Err(Error::BufferFileRead { path, source });
            }
        };

        log::debug!("Loaded {} bytes from {}", data.len(), path.display());
        self.buffer_registry.insert(uri.to_string(), data);

        Ok(())
    }

    fn read_buffer(&self, uri: &str) -> Option<&[u8]> {
        self.buffer_registry.get(uri).map(|data| data.as_slice())
    }
}
