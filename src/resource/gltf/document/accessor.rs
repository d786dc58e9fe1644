use crate::resource::gltf::grammar::Keyword;

/// Typed view over a slice of a buffer view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Accessor {
    pub name: Option<String>,
    pub buffer_view: Option<usize>,
    pub byte_offset: Option<i64>,
    pub byte_stride: i64,
    pub component_type: Option<ComponentType>,
    pub count: Option<i64>,
    pub type_: Option<AccessorType>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl Accessor {
    /// Size in bytes of one element, e.g. 12 for a FLOAT VEC3.
    pub fn element_size(&self) -> Option<usize> {
        Some(self.component_type?.size() * self.type_?.components())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    UnsignedInt,
    Float,
}

impl ComponentType {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Byte => Some(Self::Byte),
            Keyword::UnsignedByte => Some(Self::UnsignedByte),
            Keyword::Short => Some(Self::Short),
            Keyword::UnsignedShort => Some(Self::UnsignedShort),
            Keyword::UnsignedInt => Some(Self::UnsignedInt),
            Keyword::Float => Some(Self::Float),
            _ => None,
        }
    }

    pub fn size(self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort => 2,
            Self::UnsignedInt | Self::Float => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl AccessorType {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Scalar => Some(Self::Scalar),
            Keyword::Vec2 => Some(Self::Vec2),
            Keyword::Vec3 => Some(Self::Vec3),
            Keyword::Vec4 => Some(Self::Vec4),
            Keyword::Mat2 => Some(Self::Mat2),
            Keyword::Mat3 => Some(Self::Mat3),
            Keyword::Mat4 => Some(Self::Mat4),
            _ => None,
        }
    }

    /// Legacy documents name the accessor type with a GL uniform type, which
    /// implies a FLOAT component.
    pub fn from_gl_type(keyword: Keyword) -> Option<(Self, ComponentType)> {
        let type_ = match keyword {
            Keyword::Float => Self::Scalar,
            Keyword::FloatVec2 => Self::Vec2,
            Keyword::FloatVec3 => Self::Vec3,
            Keyword::FloatVec4 => Self::Vec4,
            Keyword::FloatMat2 => Self::Mat2,
            Keyword::FloatMat3 => Self::Mat3,
            Keyword::FloatMat4 => Self::Mat4,
            _ => return None,
        };
        Some((type_, ComponentType::Float))
    }

    pub fn components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 | Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }
}
