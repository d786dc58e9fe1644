use crate::error::Result;
use crate::resource::gltf::document::EntityKind;
use crate::resource::gltf::grammar::Keyword;
use crate::resource::gltf::parser::DocumentParser;

impl<'a> DocumentParser<'a> {
    pub(super) fn parse_materials(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.materials,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.materials[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Technique => {
                        let technique = parser.read_reference(|document| &mut document.techniques)?;
                        parser.document.materials[index].technique = Some(technique);
                    }
                    Keyword::Values => parser.object(|parser, name| {
                        let value = parser.cursor.get_value(&name)?;
                        parser.document.materials[index].values.push((name, value));
                        Ok(())
                    })?,
                    _ => parser.unknown_field(key, keyword, EntityKind::Material)?,
                }
                Ok(())
            },
        )
    }
}
