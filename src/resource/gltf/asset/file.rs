use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::resource::gltf::asset::GltfAsset;
use crate::resource::gltf::document::Document;
use crate::resource::gltf::grammar::GrammarVersion;
use crate::resource::gltf::interpret::interpret;
use crate::resource::gltf::loader::file::FileSystemBufferLoader;
use crate::resource::gltf::parser::parse;

/// A document read from disk. Buffer URIs resolve against its directory.
pub struct FileSystemGltfAsset {
    document: Document,
    pub root: PathBuf,
}

impl FileSystemGltfAsset {
    pub fn from_path(gltf_path: &Path, version: GrammarVersion) -> Result<Self> {
        if !gltf_path.is_file() {
            log::error!("The given path is not a file: {}", gltf_path.display());
            return Err(Error::DocumentNotRegular {
                path: gltf_path.to_path_buf(),
            });
        }

        let root = match gltf_path.parent() {
            Some(root) => root.to_path_buf(),
            None => PathBuf::from("."),
        };

        let text = match std::fs::read_to_string(gltf_path) {
            Ok(text) => text,
            Err(source) => {
                return Err(Error::DocumentRead {
                    path: gltf_path.to_path_buf(),
                    source,
                })
            }
        };

        log::info!("Parsing {} ({version:?} grammar)", gltf_path.display());
        let document = parse(&text, &gltf_path.display().to_string(), version)?;

        Ok(Self { document, root })
    }
}

impl GltfAsset for FileSystemGltfAsset {
    fn document(&self) -> &Document {
        &self.document
    }

    fn interpret(&self) -> Result<Geometry> {
        let mut loader = FileSystemBufferLoader::new(&self.root);
        interpret(&self.document, &mut loader)
    }
}
