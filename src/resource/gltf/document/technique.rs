use crate::resource::gltf::document::Value;
use crate::resource::gltf::grammar::Keyword;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Material {
    pub name: Option<String>,
    pub technique: Option<usize>,
    pub values: Vec<(String, Value)>,
}

/// Shading technique: parameters plus the program and render states that
/// consume them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Technique {
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    /// GLSL attribute name to parameter id.
    pub attributes: Vec<(String, String)>,
    /// GLSL uniform name to parameter id.
    pub uniforms: Vec<(String, String)>,
    pub program: Option<usize>,
    pub states: States,
    /// Pass selected by a legacy technique.
    pub pass: Option<String>,
    pub passes: Vec<TechniquePass>,
}

impl Technique {
    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.id == id)
    }

    /// Copies the selected legacy pass into the technique itself. The first
    /// pass is used when none is selected.
    pub fn fold_pass(&mut self) {
        let selected = match &self.pass {
            Some(id) => self.passes.iter().find(|pass| &pass.id == id),
            None => self.passes.first(),
        };

        if let Some(pass) = selected.cloned() {
            self.program = pass.program.or(self.program);
            self.attributes.extend(pass.attributes);
            self.uniforms.extend(pass.uniforms);
            self.states.enable.extend(pass.states.enable);
            self.states.functions.extend(pass.states.functions);
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TechniquePass {
    pub id: String,
    pub program: Option<usize>,
    pub attributes: Vec<(String, String)>,
    pub uniforms: Vec<(String, String)>,
    pub states: States,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Parameter {
    pub id: String,
    pub count: Option<i64>,
    pub node: Option<usize>,
    pub semantic: Option<String>,
    pub type_: Option<ParameterType>,
    pub value: Option<Value>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct States {
    pub enable: Vec<StateEnable>,
    pub functions: Vec<(String, Value)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,
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
}

impl ParameterType {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Byte => Some(Self::Byte),
            Keyword::UnsignedByte => Some(Self::UnsignedByte),
            Keyword::Short => Some(Self::Short),
            Keyword::UnsignedShort => Some(Self::UnsignedShort),
            Keyword::Int => Some(Self::Int),
            Keyword::UnsignedInt => Some(Self::UnsignedInt),
            Keyword::Float => Some(Self::Float),
            Keyword::FloatVec2 => Some(Self::FloatVec2),
            Keyword::FloatVec3 => Some(Self::FloatVec3),
            Keyword::FloatVec4 => Some(Self::FloatVec4),
            Keyword::IntVec2 => Some(Self::IntVec2),
            Keyword::IntVec3 => Some(Self::IntVec3),
            Keyword::IntVec4 => Some(Self::IntVec4),
            Keyword::Bool => Some(Self::Bool),
            Keyword::BoolVec2 => Some(Self::BoolVec2),
            Keyword::BoolVec3 => Some(Self::BoolVec3),
            Keyword::BoolVec4 => Some(Self::BoolVec4),
            Keyword::FloatMat2 => Some(Self::FloatMat2),
            Keyword::FloatMat3 => Some(Self::FloatMat3),
            Keyword::FloatMat4 => Some(Self::FloatMat4),
            Keyword::Sampler2d => Some(Self::Sampler2d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEnable {
    Blend,
    CullFace,
    DepthTest,
    PolygonOffsetFill,
    SampleAlphaToCoverage,
    ScissorTest,
}

impl StateEnable {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Blend => Some(Self::Blend),
            Keyword::CullFace => Some(Self::CullFace),
            Keyword::DepthTest => Some(Self::DepthTest),
            Keyword::PolygonOffsetFill => Some(Self::PolygonOffsetFill),
            Keyword::SampleAlphaToCoverage => Some(Self::SampleAlphaToCoverage),
            Keyword::ScissorTest => Some(Self::ScissorTest),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program {
    pub name: Option<String>,
    pub attributes: Vec<String>,
    pub fragment_shader: Option<usize>,
    pub vertex_shader: Option<usize>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shader {
    pub name: Option<String>,
    pub uri: String,
    pub type_: Option<ShaderType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    Fragment,
    Vertex,
}

impl ShaderType {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::GlFragmentShader => Some(Self::Fragment),
            Keyword::GlVertexShader => Some(Self::Vertex),
            _ => None,
        }
    }
}
