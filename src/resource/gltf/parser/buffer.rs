use crate::error::Result;
use crate::resource::gltf::document::{AccessorType, BufferType, ComponentType, EntityKind, Target};
use crate::resource::gltf::grammar::{GrammarVersion, Keyword};
use crate::resource::gltf::parser::DocumentParser;

impl<'a> DocumentParser<'a> {
    pub(super) fn parse_buffers(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.buffers,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.buffers[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Uri => {
                        parser.document.buffers[index].uri = parser.cursor.get_string()?
                    }
                    Keyword::ByteLength => {
                        parser.document.buffers[index].byte_length = parser.cursor.get_number()?
                    }
                    Keyword::Type => {
                        parser.document.buffers[index].type_ =
                            parser.read_enum(key, BufferType::from_keyword)?
                    }
                    _ => parser.unknown_field(key, keyword, EntityKind::Buffer)?,
                }
                Ok(())
            },
        )
    }

    pub(super) fn parse_buffer_views(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.buffer_views,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.buffer_views[index].name =
                            Some(parser.cursor.get_string()?)
                    }
                    Keyword::Buffer => {
                        let buffer = parser.read_reference(|document| &mut document.buffers)?;
                        parser.document.buffer_views[index].buffer = Some(buffer);
                    }
                    Keyword::ByteOffset => {
                        parser.document.buffer_views[index].byte_offset =
                            Some(parser.cursor.get_number()?)
                    }
                    Keyword::ByteLength => {
                        parser.document.buffer_views[index].byte_length =
                            parser.cursor.get_number()?
                    }
                    Keyword::Target => {
                        let target = parser.read_enum(key, Target::from_keyword)?;
                        parser.document.buffer_views[index].target = Some(target);
                    }
                    _ => parser.unknown_field(key, keyword, EntityKind::BufferView)?,
                }
                Ok(())
            },
        )
    }

    pub(super) fn parse_accessors(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.accessors,
            |parser, index, key| parser.accessor_field(index, key),
        )
    }

    fn accessor_field(&mut self, index: usize, key: &str) -> Result<()> {
        let keyword = self.keyword(key)?;
        match keyword {
            Keyword::Name => self.document.accessors[index].name = Some(self.cursor.get_string()?),
            Keyword::BufferView => {
                let view = self.read_reference(|document| &mut document.buffer_views)?;
                self.document.accessors[index].buffer_view = Some(view);
            }
            Keyword::ByteOffset => {
                self.document.accessors[index].byte_offset = Some(self.cursor.get_number()?)
            }
            Keyword::ByteStride => {
                self.document.accessors[index].byte_stride = self.cursor.get_number()?
            }
            Keyword::ComponentType => {
                let component_type = self.read_enum(key, ComponentType::from_keyword)?;
                self.document.accessors[index].component_type = Some(component_type);
            }
            Keyword::Count => {
                self.document.accessors[index].count = Some(self.cursor.get_number()?)
            }
            Keyword::Type => {
                let legacy = self.grammar.version() == GrammarVersion::Legacy;
                let (type_, implied) = self.read_enum(key, |keyword| {
                    match AccessorType::from_keyword(keyword) {
                        Some(type_) => Some((type_, None)),
                        None if legacy => AccessorType::from_gl_type(keyword)
                            .map(|(type_, component_type)| (type_, Some(component_type))),
                        None => None,
                    }
                })?;

                let accessor = &mut self.document.accessors[index];
                accessor.type_ = Some(type_);
                if implied.is_some() {
                    accessor.component_type = implied;
                }
            }
            Keyword::Min => {
                self.document.accessors[index].min =
                    self.cursor.get_array(|cursor| cursor.get_number())?
            }
            Keyword::Max => {
                self.document.accessors[index].max =
                    self.cursor.get_array(|cursor| cursor.get_number())?
            }
            _ => self.unknown_field(key, keyword, EntityKind::Accessor)?,
        }

        Ok(())
    }
}
