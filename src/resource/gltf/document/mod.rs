//! Typed records for every glTF object class.
//!
//! Cross-references between records are stored as indices into the owning
//! [`Registry`], never as names. Required fields are `Option`s that stay
//! `None` until the entity's own definition sets them; the structural
//! validator rejects anything still unset.

use crate::resource::gltf::registry::Registry;

pub mod accessor;
pub mod buffer;
pub mod mesh;
pub mod node;
pub mod technique;

pub use accessor::{Accessor, AccessorType, ComponentType};
pub use buffer::{Buffer, BufferType, BufferView, Target};
pub use mesh::{Attribute, Mesh, Mode, Primitive, Semantic};
pub use node::{Camera, Image, Node, Scene, Skin};
pub use technique::{
    Material, Parameter, ParameterType, Program, Shader, ShaderType, StateEnable, States,
    Technique, TechniquePass,
};

/// Everything parsed from one document.
#[derive(Debug, Default, Clone)]
pub struct Document {
    pub asset: Asset,
    pub scene: Option<usize>,
    pub accessors: Registry<Accessor>,
    pub buffer_views: Registry<BufferView>,
    pub buffers: Registry<Buffer>,
    pub meshes: Registry<Mesh>,
    pub materials: Registry<Material>,
    pub nodes: Registry<Node>,
    pub programs: Registry<Program>,
    pub shaders: Registry<Shader>,
    pub scenes: Registry<Scene>,
    pub skins: Registry<Skin>,
    pub techniques: Registry<Technique>,
    pub cameras: Registry<Camera>,
    pub images: Registry<Image>,
    pub warnings: Vec<Warning>,
}

impl Document {
    pub fn default_scene(&self) -> Option<&Scene> {
        self.scene.and_then(|index| self.scenes.get(index))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Asset {
    pub copyright: Option<String>,
    pub generator: Option<String>,
    pub premultiplied_alpha: bool,
    pub profile: Profile,
    pub version: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Profile {
    pub api: Option<String>,
    pub version: Option<String>,
}

/// Free-form value of fields the loader keeps but does not interpret.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// An object in a free-form position; its content was skipped.
    Skipped,
}

/// Non-fatal notice that a section was present but skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub key: String,
    pub first_line: usize,
    pub last_line: usize,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "skipped section {:?} (lines {}-{})",
            self.key, self.first_line, self.last_line
        )
    }
}

/// Object class of a record, used to name failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Accessor,
    Asset,
    Buffer,
    BufferView,
    Camera,
    Image,
    Material,
    Mesh,
    Node,
    Primitive,
    Program,
    Scene,
    Shader,
    Skin,
    Technique,
    TechniqueParameter,
    TechniquePass,
    TechniqueStates,
    Document,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Accessor => "accessor",
            EntityKind::Asset => "asset",
            EntityKind::Buffer => "buffer",
            EntityKind::BufferView => "buffer view",
            EntityKind::Camera => "camera",
            EntityKind::Image => "image",
            EntityKind::Material => "material",
            EntityKind::Mesh => "mesh",
            EntityKind::Node => "node",
            EntityKind::Primitive => "primitive",
            EntityKind::Program => "program",
            EntityKind::Scene => "scene",
            EntityKind::Shader => "shader",
            EntityKind::Skin => "skin",
            EntityKind::Technique => "technique",
            EntityKind::TechniqueParameter => "technique parameter",
            EntityKind::TechniquePass => "technique pass",
            EntityKind::TechniqueStates => "technique states",
            EntityKind::Document => "document",
        };
        f.write_str(name)
    }
}
