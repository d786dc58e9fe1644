use crate::error::Result;
use crate::resource::gltf::document::{Attribute, EntityKind, Mode, Primitive, Semantic};
use crate::resource::gltf::grammar::Keyword;
use crate::resource::gltf::parser::DocumentParser;

impl<'a> DocumentParser<'a> {
    pub(super) fn parse_meshes(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.meshes,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.meshes[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Primitives => parser.array(|parser| {
                        let primitive = parser.parse_primitive()?;
                        parser.document.meshes[index].primitives.push(primitive);
                        Ok(())
                    })?,
                    _ => parser.unknown_field(key, keyword, EntityKind::Mesh)?,
                }
                Ok(())
            },
        )
    }

    fn parse_primitive(&mut self) -> Result<Primitive> {
        let mut primitive = Primitive::default();
        self.object(|parser, key| {
            let keyword = parser.keyword(&key)?;
            match keyword {
                Keyword::Indices => {
                    primitive.indices =
                        Some(parser.read_reference(|document| &mut document.accessors)?)
                }
                Keyword::Material => {
                    primitive.material =
                        Some(parser.read_reference(|document| &mut document.materials)?)
                }
                Keyword::Mode => primitive.mode = parser.read_enum(&key, Mode::from_keyword)?,
                Keyword::Attributes => {
                    primitive.attributes = parser.parse_attributes()?;
                }
                _ => parser.unknown_field(&key, keyword, EntityKind::Primitive)?,
            }
            Ok(())
        })?;

        Ok(primitive)
    }

    fn parse_attributes(&mut self) -> Result<Vec<Attribute>> {
        let mut attributes = vec![];
        self.object(|parser, key| {
            let (name, set) = Semantic::split_key(&key);
            let keyword = parser.keyword(name)?;
            match Semantic::from_keyword(keyword, set) {
                Some(semantic) => {
                    let accessor = parser.read_reference(|document| &mut document.accessors)?;
                    attributes.push(Attribute { semantic, accessor });
                    Ok(())
                }
                None => parser.unknown_field(&key, keyword, EntityKind::Primitive),
            }
        })?;

        Ok(attributes)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::resource::gltf::document::{Mode, Semantic};
    use crate::resource::gltf::grammar::GrammarVersion;
    use crate::resource::gltf::parser::parse;

    #[test]
    fn primitives_and_attributes() {
        let text = r#"{"meshes": {"m": {
            "name": "box",
            "primitives": [
                {
                    "attributes": { "NORMAL": "n", "POSITION": "p", "TEXCOORD_1": "t" },
                    "indices": "i",
                    "material": "mat",
                    "mode": 1
                },
                { "attributes": { "POSITION": "p" }, "indices": "i2", "material": "mat" }
            ]
        }}}"#;
        let document = parse(text, "test", GrammarVersion::Current).unwrap();
        let mesh = document.meshes.get_by_id("m").unwrap();

        assert_eq!(mesh.name.as_deref(), Some("box"));
        assert_eq!(mesh.primitives.len(), 2);

        let first = &mesh.primitives[0];
        let semantics: Vec<Semantic> = first.attributes.iter().map(|a| a.semantic).collect();
        assert_eq!(
            semantics,
            vec![Semantic::Normal, Semantic::Position, Semantic::TexCoord(1)]
        );
        assert_eq!(first.attributes[1].accessor, document.accessors.position("p").unwrap());
        assert_eq!(first.mode, Mode::Lines);

        let second = &mesh.primitives[1];
        assert_eq!(second.mode, Mode::Triangles);
        assert_eq!(second.attributes[0].accessor, first.attributes[1].accessor);
        assert_eq!(second.material, first.material);
    }

    #[test]
    fn legacy_primitive_key_sets_the_mode() {
        let text = r#"{"meshes": {"m": {"primitives": [{"primitive": 5}]}}}"#;
        let document = parse(text, "test", GrammarVersion::Legacy).unwrap();
        assert_eq!(
            document.meshes.get_by_id("m").unwrap().primitives[0].mode,
            Mode::TriangleStrip
        );

        assert!(matches!(
            parse(text, "test", GrammarVersion::Current),
            Err(Error::UnknownKeyword { ref keyword, .. }) if keyword == "primitive"
        ));
    }

    #[test]
    fn unknown_semantic_is_fatal() {
        let text = r#"{"meshes": {"m": {"primitives": [{"attributes": {"TANGENT": "t"}}]}}}"#;
        assert!(matches!(
            parse(text, "test", GrammarVersion::Current),
            Err(Error::UnknownKeyword { ref keyword, .. }) if keyword == "TANGENT"
        ));
    }

    #[test]
    fn non_semantic_keyword_as_attribute_is_wrong() {
        let text = r#"{"meshes": {"m": {"primitives": [{"attributes": {"uri": "t"}}]}}}"#;
        assert!(matches!(
            parse(text, "test", GrammarVersion::Current),
            Err(Error::WrongKeywordInContext { ref keyword, .. }) if keyword == "uri"
        ));
    }
}
