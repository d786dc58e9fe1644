use crate::resource::gltf::grammar::Keyword;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
}

/// One drawable part of a mesh.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Primitive {
    pub indices: Option<usize>,
    pub material: Option<usize>,
    pub mode: Mode,
    /// Vertex attributes in document order.
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub semantic: Semantic,
    pub accessor: usize,
}

/// Primitive topology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Mode {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Points => Some(Self::Points),
            Keyword::Lines => Some(Self::Lines),
            Keyword::LineLoop => Some(Self::LineLoop),
            Keyword::LineStrip => Some(Self::LineStrip),
            Keyword::Triangles => Some(Self::Triangles),
            Keyword::TriangleStrip => Some(Self::TriangleStrip),
            Keyword::TriangleFan => Some(Self::TriangleFan),
            _ => None,
        }
    }
}

/// Role of a vertex attribute. Set-indexed semantics keep their index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantic {
    Position,
    Normal,
    TexCoord(u32),
    Color(u32),
    Joint,
    Weight,
}

impl Semantic {
    pub fn from_keyword(keyword: Keyword, set: u32) -> Option<Self> {
        match keyword {
            Keyword::Position => Some(Self::Position),
            Keyword::Normal => Some(Self::Normal),
            Keyword::TexCoord => Some(Self::TexCoord(set)),
            Keyword::Color => Some(Self::Color(set)),
            Keyword::Joint => Some(Self::Joint),
            Keyword::Weight => Some(Self::Weight),
            _ => None,
        }
    }

    /// Splits an attribute key such as `TEXCOORD_1` into its table key and
    /// set index.
    pub fn split_key(key: &str) -> (&str, u32) {
        if let Some((prefix, suffix)) = key.rsplit_once('_') {
            if let Ok(set) = suffix.parse::<u32>() {
                return (prefix, set);
            }
        }
        (key, 0)
    }
}

impl std::fmt::Display for Semantic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semantic::Position => f.write_str("POSITION"),
            Semantic::Normal => f.write_str("NORMAL"),
            Semantic::TexCoord(set) => write!(f, "TEXCOORD_{set}"),
            Semantic::Color(set) => write!(f, "COLOR_{set}"),
            Semantic::Joint => f.write_str("JOINT"),
            Semantic::Weight => f.write_str("WEIGHT"),
        }
    }
}
