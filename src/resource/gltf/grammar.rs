use std::collections::HashMap;
use std::sync::OnceLock;

/// Revision of the glTF text grammar a document is written in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarVersion {
    /// Pre-1.0 drafts: GL-typed accessors, `primitive` topology key and
    /// technique passes.
    Legacy,
    /// glTF 1.0.
    #[default]
    Current,
}

/// Every string the keyword table knows about.
///
/// Keys, symbolic values and numeric GL constants share one namespace; the
/// parser decides from context whether a keyword is legal where it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Ignorable everywhere
    Extensions,
    Extras,
    AdditionalProperties,

    // Top-level sections
    Accessors,
    Animations,
    Asset,
    BufferViews,
    Buffers,
    Cameras,
    ExtensionsUsed,
    Images,
    Lights,
    Materials,
    Meshes,
    Nodes,
    Programs,
    Samplers,
    Scene,
    Scenes,
    Shaders,
    Skins,
    Techniques,
    Textures,

    // Fields
    Name,
    Uri,
    Type,
    Buffer,
    BufferView,
    ByteLength,
    ByteOffset,
    ByteStride,
    Target,
    ComponentType,
    Count,
    Min,
    Max,
    Primitives,
    Indices,
    Material,
    Mode,
    Attributes,
    Copyright,
    Generator,
    PremultipliedAlpha,
    Profile,
    Api,
    Version,
    Camera,
    Children,
    Skeletons,
    Skin,
    JointName,
    Matrix,
    Rotation,
    Scale,
    Translation,
    BindShapeMatrix,
    InverseBindMatrices,
    JointNames,
    Technique,
    Values,
    FragmentShader,
    VertexShader,
    Parameters,
    Uniforms,
    Program,
    States,
    Enable,
    Functions,
    Node,
    Semantic,
    Value,
    Pass,
    Passes,
    Details,
    InstanceProgram,

    // Symbolic values
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
    ArrayBufferType,
    TextType,
    Position,
    Normal,
    TexCoord,
    Color,
    Joint,
    Weight,

    // Primitive topology constants
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,

    // Component type constants
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,

    // Buffer binding constants
    TargetArrayBuffer,
    TargetElementArrayBuffer,

    // Shader stage constants
    GlFragmentShader,
    GlVertexShader,

    // Uniform type constants
    FloatVec2,
    FloatVec3,
    FloatVec4,
    IntVec2,
    IntVec3,
    IntVec4,
    Bool,
    BoolVec2,
    BoolVec3,
    BoolVec4,
    FloatMat2,
    FloatMat3,
    FloatMat4,
    Sampler2d,

    // Render state constants
    Blend,
    CullFace,
    DepthTest,
    PolygonOffsetFill,
    SampleAlphaToCoverage,
    ScissorTest,
}

const COMMON_KEYWORDS: &[(&str, Keyword)] = &[
    ("extensions", Keyword::Extensions),
    ("extras", Keyword::Extras),
    ("additionalProperties", Keyword::AdditionalProperties),
    ("accessors", Keyword::Accessors),
    ("animations", Keyword::Animations),
    ("asset", Keyword::Asset),
    ("bufferViews", Keyword::BufferViews),
    ("buffers", Keyword::Buffers),
    ("cameras", Keyword::Cameras),
    ("extensionsUsed", Keyword::ExtensionsUsed),
    ("images", Keyword::Images),
    ("lights", Keyword::Lights),
    ("materials", Keyword::Materials),
    ("meshes", Keyword::Meshes),
    ("nodes", Keyword::Nodes),
    ("programs", Keyword::Programs),
    ("samplers", Keyword::Samplers),
    ("scene", Keyword::Scene),
    ("scenes", Keyword::Scenes),
    ("shaders", Keyword::Shaders),
    ("skins", Keyword::Skins),
    ("techniques", Keyword::Techniques),
    ("textures", Keyword::Textures),
    ("name", Keyword::Name),
    ("uri", Keyword::Uri),
    ("type", Keyword::Type),
    ("buffer", Keyword::Buffer),
    ("bufferView", Keyword::BufferView),
    ("byteLength", Keyword::ByteLength),
    ("byteOffset", Keyword::ByteOffset),
    ("byteStride", Keyword::ByteStride),
    ("target", Keyword::Target),
    ("componentType", Keyword::ComponentType),
    ("count", Keyword::Count),
    ("min", Keyword::Min),
    ("max", Keyword::Max),
    ("primitives", Keyword::Primitives),
    ("indices", Keyword::Indices),
    ("material", Keyword::Material),
    ("attributes", Keyword::Attributes),
    ("copyright", Keyword::Copyright),
    ("generator", Keyword::Generator),
    ("premultipliedAlpha", Keyword::PremultipliedAlpha),
    ("profile", Keyword::Profile),
    ("api", Keyword::Api),
    ("version", Keyword::Version),
    ("camera", Keyword::Camera),
    ("children", Keyword::Children),
    ("skeletons", Keyword::Skeletons),
    ("skin", Keyword::Skin),
    ("jointName", Keyword::JointName),
    ("matrix", Keyword::Matrix),
    ("rotation", Keyword::Rotation),
    ("scale", Keyword::Scale),
    ("translation", Keyword::Translation),
    ("bindShapeMatrix", Keyword::BindShapeMatrix),
    ("inverseBindMatrices", Keyword::InverseBindMatrices),
    ("jointNames", Keyword::JointNames),
    ("technique", Keyword::Technique),
    ("values", Keyword::Values),
    ("fragmentShader", Keyword::FragmentShader),
    ("vertexShader", Keyword::VertexShader),
    ("parameters", Keyword::Parameters),
    ("uniforms", Keyword::Uniforms),
    ("program", Keyword::Program),
    ("states", Keyword::States),
    ("enable", Keyword::Enable),
    ("functions", Keyword::Functions),
    ("node", Keyword::Node),
    ("semantic", Keyword::Semantic),
    ("value", Keyword::Value),
    ("SCALAR", Keyword::Scalar),
    ("VEC2", Keyword::Vec2),
    ("VEC3", Keyword::Vec3),
    ("VEC4", Keyword::Vec4),
    ("MAT2", Keyword::Mat2),
    ("MAT3", Keyword::Mat3),
    ("MAT4", Keyword::Mat4),
    ("arraybuffer", Keyword::ArrayBufferType),
    ("text", Keyword::TextType),
    ("POSITION", Keyword::Position),
    ("NORMAL", Keyword::Normal),
    ("TEXCOORD", Keyword::TexCoord),
    ("COLOR", Keyword::Color),
    ("JOINT", Keyword::Joint),
    ("WEIGHT", Keyword::Weight),
    ("0", Keyword::Points),
    ("1", Keyword::Lines),
    ("2", Keyword::LineLoop),
    ("3", Keyword::LineStrip),
    ("4", Keyword::Triangles),
    ("5", Keyword::TriangleStrip),
    ("6", Keyword::TriangleFan),
    ("5120", Keyword::Byte),
    ("5121", Keyword::UnsignedByte),
    ("5122", Keyword::Short),
    ("5123", Keyword::UnsignedShort),
    ("5124", Keyword::Int),
    ("5125", Keyword::UnsignedInt),
    ("5126", Keyword::Float),
    ("34962", Keyword::TargetArrayBuffer),
    ("34963", Keyword::TargetElementArrayBuffer),
    ("35632", Keyword::GlFragmentShader),
    ("35633", Keyword::GlVertexShader),
    ("35664", Keyword::FloatVec2),
    ("35665", Keyword::FloatVec3),
    ("35666", Keyword::FloatVec4),
    ("35667", Keyword::IntVec2),
    ("35668", Keyword::IntVec3),
    ("35669", Keyword::IntVec4),
    ("35670", Keyword::Bool),
    ("35671", Keyword::BoolVec2),
    ("35672", Keyword::BoolVec3),
    ("35673", Keyword::BoolVec4),
    ("35674", Keyword::FloatMat2),
    ("35675", Keyword::FloatMat3),
    ("35676", Keyword::FloatMat4),
    ("35678", Keyword::Sampler2d),
    ("3042", Keyword::Blend),
    ("2884", Keyword::CullFace),
    ("2929", Keyword::DepthTest),
    ("32823", Keyword::PolygonOffsetFill),
    ("32926", Keyword::SampleAlphaToCoverage),
    ("3089", Keyword::ScissorTest),
];

const CURRENT_KEYWORDS: &[(&str, Keyword)] = &[("mode", Keyword::Mode)];

const LEGACY_KEYWORDS: &[(&str, Keyword)] = &[
    ("primitive", Keyword::Mode),
    ("pass", Keyword::Pass),
    ("passes", Keyword::Passes),
    ("details", Keyword::Details),
    ("instanceProgram", Keyword::InstanceProgram),
];

/// Immutable keyword table of one grammar revision.
#[derive(Debug)]
pub struct Grammar {
    version: GrammarVersion,
    keywords: HashMap<&'static str, Keyword>,
}

impl Grammar {
    /// Returns the process-wide table for `version`, building it on first use.
    pub fn get(version: GrammarVersion) -> &'static Grammar {
        static LEGACY: OnceLock<Grammar> = OnceLock::new();
        static CURRENT: OnceLock<Grammar> = OnceLock::new();

        match version {
            GrammarVersion::Legacy => {
                LEGACY.get_or_init(|| Grammar::build(version, LEGACY_KEYWORDS))
            }
            GrammarVersion::Current => {
                CURRENT.get_or_init(|| Grammar::build(version, CURRENT_KEYWORDS))
            }
        }
    }

    fn build(version: GrammarVersion, extra: &[(&'static str, Keyword)]) -> Self {
        let keywords = COMMON_KEYWORDS
            .iter()
            .chain(extra.iter())
            .copied()
            .collect::<HashMap<_, _>>();

        log::trace!(
            "Built {version:?} grammar table with {} keywords",
            keywords.len()
        );

        Self { version, keywords }
    }

    pub fn version(&self) -> GrammarVersion {
        self.version
    }

    pub fn lookup(&self, name: &str) -> Option<Keyword> {
        self.keywords.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_table_knows_mode_but_not_legacy_keys() {
        let grammar = Grammar::get(GrammarVersion::Current);
        assert_eq!(grammar.lookup("mode"), Some(Keyword::Mode));
        assert_eq!(grammar.lookup("primitive"), None);
        assert_eq!(grammar.lookup("passes"), None);
    }

    #[test]
    fn legacy_table_maps_primitive_onto_mode() {
        let grammar = Grammar::get(GrammarVersion::Legacy);
        assert_eq!(grammar.lookup("primitive"), Some(Keyword::Mode));
        assert_eq!(grammar.lookup("mode"), None);
        assert_eq!(grammar.lookup("instanceProgram"), Some(Keyword::InstanceProgram));
    }

    #[test]
    fn numeric_constants_are_keywords() {
        let grammar = Grammar::get(GrammarVersion::Current);
        assert_eq!(grammar.lookup("5126"), Some(Keyword::Float));
        assert_eq!(grammar.lookup("34963"), Some(Keyword::TargetElementArrayBuffer));
        assert_eq!(grammar.lookup("4"), Some(Keyword::Triangles));
        assert_eq!(grammar.lookup("5127"), None);
    }

    #[test]
    fn tables_are_built_once() {
        let first = Grammar::get(GrammarVersion::Legacy) as *const Grammar;
        let second = Grammar::get(GrammarVersion::Legacy) as *const Grammar;
        assert_eq!(first, second);
        assert_eq!(Grammar::get(GrammarVersion::Legacy).version(), GrammarVersion::Legacy);
    }
}
