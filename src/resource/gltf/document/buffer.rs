use crate::resource::gltf::grammar::Keyword;

/// External binary payload.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Buffer {
    pub name: Option<String>,
    pub uri: String,
    pub byte_length: i64,
    pub type_: BufferType,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BufferType {
    #[default]
    ArrayBuffer,
    Text,
}

impl BufferType {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::ArrayBufferType => Some(Self::ArrayBuffer),
            Keyword::TextType => Some(Self::Text),
            _ => None,
        }
    }
}

/// Byte range of a buffer together with the GPU binding it is meant for.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BufferView {
    pub name: Option<String>,
    pub buffer: Option<usize>,
    pub byte_offset: Option<i64>,
    pub byte_length: i64,
    pub target: Option<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Vertex data (`ARRAY_BUFFER`, 34962).
    ArrayBuffer,
    /// Index data (`ELEMENT_ARRAY_BUFFER`, 34963).
    ElementArrayBuffer,
}

impl Target {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::TargetArrayBuffer => Some(Self::ArrayBuffer),
            Keyword::TargetElementArrayBuffer => Some(Self::ElementArrayBuffer),
            _ => None,
        }
    }

    pub fn binding_name(self) -> &'static str {
        match self {
            Self::ArrayBuffer => "ARRAY_BUFFER",
            Self::ElementArrayBuffer => "ELEMENT_ARRAY_BUFFER",
        }
    }
}
