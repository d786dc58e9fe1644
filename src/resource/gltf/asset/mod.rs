use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::resource::gltf::document::{Document, EntityKind, Scene};

pub mod file;

/// A parsed glTF document together with the means to resolve its payloads.
pub trait GltfAsset {
    fn document(&self) -> &Document;

    /// Validates the document and resolves it into renderable geometry.
    fn interpret(&self) -> Result<Geometry>;

    fn get_scene(&self, scene_id: &str) -> Result<&Scene> {
        match self.document().scenes.get_by_id(scene_id) {
            Some(scene) => Ok(scene),
            None => {
                log::error!("No scene exists with the given ID: {scene_id}");
                Err(Error::MissingEntity {
                    kind: EntityKind::Scene,
                    name: scene_id.to_string(),
                })
            }
        }
    }
}
