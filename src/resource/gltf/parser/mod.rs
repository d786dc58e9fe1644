//! Recursive-descent reader for glTF documents.
//!
//! The driver walks the top-level object and hands each known section to its
//! section parser. Section parsers fill the typed records of a [`Document`],
//! interning every cross-reference so that entities may be referenced before
//! their own definition appears.

use crate::error::{Error, Result};
use crate::resource::gltf::cursor::Cursor;
use crate::resource::gltf::document::{Document, EntityKind};
use crate::resource::gltf::grammar::{Grammar, GrammarVersion, Keyword};
use crate::resource::gltf::registry::Registry;

mod buffer;
mod material;
mod mesh;
mod scene;
mod technique;

/// Parses `text` with the keyword table of `version`. `origin` names the
/// document in log messages.
pub fn parse(text: &str, origin: &str, version: GrammarVersion) -> Result<Document> {
    let parser = DocumentParser {
        cursor: Cursor::new(text, origin),
        grammar: Grammar::get(version),
        document: Document::default(),
    };

    parser.parse_document()
}

struct DocumentParser<'a> {
    cursor: Cursor<'a>,
    grammar: &'static Grammar,
    document: Document,
}

impl<'a> DocumentParser<'a> {
    fn parse_document(mut self) -> Result<Document> {
        log::debug!(
            "Parsing glTF document {} with the {:?} grammar",
            self.cursor.origin(),
            self.grammar.version()
        );

        self.object(|parser, key| parser.section(&key))?;

        self.document.warnings = self.cursor.take_warnings();
        log::debug!(
            "Parsed {}: {} meshes, {} accessors, {} buffer views, {} buffers",
            self.cursor.origin(),
            self.document.meshes.len(),
            self.document.accessors.len(),
            self.document.buffer_views.len(),
            self.document.buffers.len(),
        );

        Ok(self.document)
    }

    fn section(&mut self, key: &str) -> Result<()> {
        log::trace!("Reading section {key:?} at line {}", self.cursor.line());

        match self.keyword(key)? {
            Keyword::Accessors => self.parse_accessors(),
            Keyword::Asset => self.parse_asset(),
            Keyword::BufferViews => self.parse_buffer_views(),
            Keyword::Buffers => self.parse_buffers(),
            Keyword::Images => self.parse_images(),
            Keyword::Materials => self.parse_materials(),
            Keyword::Meshes => self.parse_meshes(),
            Keyword::Nodes => self.parse_nodes(),
            Keyword::Programs => self.parse_programs(),
            Keyword::Scene => self.parse_default_scene(),
            Keyword::Scenes => self.parse_scenes(),
            Keyword::Shaders => self.parse_shaders(),
            Keyword::Skins => self.parse_skins(),
            Keyword::Techniques => self.parse_techniques(),
            Keyword::Animations
            | Keyword::Cameras
            | Keyword::Samplers
            | Keyword::Textures
            | Keyword::Lights
            | Keyword::ExtensionsUsed
            | Keyword::Extensions
            | Keyword::Extras
            | Keyword::AdditionalProperties => self.cursor.skip_section(key),
            _ => Err(self.wrong_keyword(key, EntityKind::Document)),
        }
    }

    /// Reads `{ "key": value, ... }`, handing each key to `field` with the
    /// cursor positioned on its value.
    fn object<F>(&mut self, mut field: F) -> Result<()>
    where
        F: FnMut(&mut Self, String) -> Result<()>,
    {
        self.cursor.expect(b'{')?;
        if self.cursor.accept(b'}')? {
            return Ok(());
        }

        loop {
            let key = self.cursor.get_string()?;
            self.cursor.expect(b':')?;
            field(self, key)?;
            if !self.cursor.end_of_field(b'}')? {
                return Ok(());
            }
        }
    }

    /// Reads `[ element, ... ]` where elements need the whole parser.
    fn array<F>(&mut self, mut element: F) -> Result<()>
    where
        F: FnMut(&mut Self) -> Result<()>,
    {
        self.cursor.expect(b'[')?;
        if self.cursor.accept(b']')? {
            return Ok(());
        }

        loop {
            element(self)?;
            if !self.cursor.end_of_field(b']')? {
                return Ok(());
            }
        }
    }

    /// Iterates the `{ id: { ... } }` layout shared by every section, interning
    /// each id before its body is read.
    fn entities<T, S, F>(&mut self, select: S, mut field: F) -> Result<()>
    where
        T: Default,
        S: Fn(&mut Document) -> &mut Registry<T>,
        F: FnMut(&mut Self, usize, &str) -> Result<()>,
    {
        self.object(|parser, id| {
            let index = select(&mut parser.document).intern(&id);
            log::trace!("Reading {id:?} [{index}] at line {}", parser.cursor.line());
            parser.object(|parser, key| field(parser, index, &key))
        })
    }

    fn keyword(&self, key: &str) -> Result<Keyword> {
        match self.grammar.lookup(key) {
            Some(keyword) => Ok(keyword),
            None => Err(self.cursor.fail(Error::UnknownKeyword {
                line: self.cursor.line(),
                keyword: key.to_string(),
            })),
        }
    }

    fn wrong_keyword(&self, key: &str, context: impl std::fmt::Display) -> Error {
        self.cursor.fail(Error::WrongKeywordInContext {
            line: self.cursor.line(),
            keyword: key.to_string(),
            context: context.to_string(),
        })
    }

    /// Fallback for fields a section does not know: ignorable keys are
    /// skipped, anything else is fatal.
    fn unknown_field(&mut self, key: &str, keyword: Keyword, context: EntityKind) -> Result<()> {
        match keyword {
            Keyword::Extensions | Keyword::Extras | Keyword::AdditionalProperties => {
                self.cursor.skip_section(key)
            }
            _ => Err(self.wrong_keyword(key, context)),
        }
    }

    /// Reads an enum-like value through the keyword table and narrows it with
    /// `convert`.
    fn read_enum<T>(&mut self, key: &str, convert: impl FnOnce(Keyword) -> Option<T>) -> Result<T> {
        let token = self.cursor.get_token()?;
        let keyword = self.keyword(&token)?;
        match convert(keyword) {
            Some(value) => Ok(value),
            None => Err(self.wrong_keyword(&token, format_args!("{key:?}"))),
        }
    }

    /// Reads an entity id and interns it into the registry picked by `select`.
    fn read_reference<T, S>(&mut self, select: S) -> Result<usize>
    where
        T: Default,
        S: FnOnce(&mut Document) -> &mut Registry<T>,
    {
        let id = self.cursor.get_string()?;
        Ok(select(&mut self.document).intern(&id))
    }

    fn read_references<T, S>(&mut self, select: S) -> Result<Vec<usize>>
    where
        T: Default,
        S: Fn(&mut Document) -> &mut Registry<T>,
    {
        let ids = self.cursor.get_array(|cursor| cursor.get_string())?;
        let registry = select(&mut self.document);
        Ok(ids.iter().map(|id| registry.intern(id)).collect())
    }

    fn read_floats<const N: usize>(&mut self, key: &str) -> Result<[f32; N]> {
        let values = self.cursor.get_array(|cursor| cursor.get_number::<f32>())?;
        match <[f32; N]>::try_from(values.as_slice()) {
            Ok(array) => Ok(array),
            Err(_) => Err(self.wrong_keyword(
                key,
                format_args!("an array of {N} numbers (found {})", values.len()),
            )),
        }
    }

    fn read_strings(&mut self) -> Result<Vec<String>> {
        self.cursor.get_array(|cursor| cursor.get_string())
    }

    /// Reads `{ "a": "b", ... }` into ordered pairs.
    fn read_string_map(&mut self) -> Result<Vec<(String, String)>> {
        let mut pairs = vec![];
        self.object(|parser, key| {
            let value = parser.cursor.get_string()?;
            pairs.push((key, value));
            Ok(())
        })?;

        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::gltf::document::{ComponentType, Mode, Semantic, Target};

    fn parse_current(text: &str) -> Result<Document> {
        parse(text, "test.gltf", GrammarVersion::Current)
    }

    #[test]
    fn empty_document() {
        let document = parse_current("{ }").unwrap();
        assert!(document.meshes.is_empty());
        assert!(document.warnings.is_empty());
    }

    #[test]
    fn top_level_must_be_an_object() {
        assert!(matches!(
            parse_current("[]"),
            Err(Error::UnexpectedCharacter { found: '[', .. })
        ));
    }

    #[test]
    fn truncated_document_fails() {
        assert!(matches!(
            parse_current("{\"buffers\": {\"b\": {\"uri\": \"x.bin\""),
            Err(Error::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn unknown_section_is_fatal() {
        match parse_current("{\n\"bogus\": {}\n}") {
            Err(Error::UnknownKeyword { line, keyword }) => {
                assert_eq!(line, 2);
                assert_eq!(keyword, "bogus");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn known_keyword_in_the_wrong_place_is_fatal() {
        assert!(matches!(
            parse_current(r#"{"uri": "x"}"#),
            Err(Error::WrongKeywordInContext { ref keyword, .. }) if keyword == "uri"
        ));
        assert!(matches!(
            parse_current(r#"{"buffers": {"b": {"count": 3}}}"#),
            Err(Error::WrongKeywordInContext { ref keyword, .. }) if keyword == "count"
        ));
    }

    #[test]
    fn missing_separator_between_sections_is_fatal() {
        assert!(matches!(
            parse_current(r#"{"buffers": {} "meshes": {}}"#),
            Err(Error::UnexpectedCharacter { found: '"', .. })
        ));
    }

    #[test]
    fn unsupported_sections_are_skipped_with_warnings() {
        let text = r#"{
            "animations": { "a": { "channels": [ { "x": 1 } ] } },
            "cameras": { "c": { "type": "perspective" } },
            "samplers": {},
            "textures": {},
            "lights": {},
            "extensionsUsed": [ "KHR_binary_glTF" ],
            "buffers": {}
        }"#;
        let document = parse_current(text).unwrap();
        let keys: Vec<&str> = document.warnings.iter().map(|w| w.key.as_str()).collect();

        assert_eq!(
            keys,
            vec!["animations", "cameras", "samplers", "textures", "lights", "extensionsUsed"]
        );
        assert_eq!(document.warnings[0].first_line, 2);
    }

    #[test]
    fn ignorable_fields_are_skipped_in_every_section() {
        let text = r#"{
            "extras": { "author": "x" },
            "asset": { "extensions": {}, "version": "1.0" },
            "buffers": { "b": { "extras": 1, "uri": "b.bin", "additionalProperties": [] } },
            "bufferViews": { "v": { "extensions": { "E": { "k": [1, 2] } }, "buffer": "b" } },
            "accessors": { "a": { "extras": {}, "bufferView": "v" } },
            "meshes": { "m": { "extras": {}, "primitives": [ {
                "extensions": {}, "attributes": { "POSITION": "a" }, "extras": null
            } ] } },
            "materials": { "mat": { "extras": {} } },
            "nodes": { "n": { "extensions": {} } },
            "programs": { "p": { "extras": {} } },
            "scenes": { "s": { "extras": {} } },
            "shaders": { "sh": { "extras": {} } },
            "skins": { "sk": { "extras": {} } },
            "images": { "i": { "extras": {} } },
            "techniques": { "t": {
                "extras": {},
                "parameters": { "p": { "extras": {} } },
                "states": { "extras": {}, "functions": { "extras": {} } }
            } }
        }"#;
        let document = parse_current(text).unwrap();

        assert_eq!(document.warnings.len(), 20);
        assert!(document
            .warnings
            .iter()
            .all(|warning| ["extras", "extensions", "additionalProperties"]
                .contains(&warning.key.as_str())));
    }

    #[test]
    fn forward_references_resolve_to_the_later_definition() {
        let later = r#"{
            "accessors": { "a": { "bufferView": "v" } },
            "bufferViews": { "v": { "buffer": "b", "target": 34962 } }
        }"#;
        let earlier = r#"{
            "bufferViews": { "v": { "buffer": "b", "target": 34962 } },
            "accessors": { "a": { "bufferView": "v" } }
        }"#;

        for text in [later, earlier] {
            let document = parse_current(text).unwrap();
            let view = document.accessors.get_by_id("a").unwrap().buffer_view.unwrap();

            assert_eq!(view, document.buffer_views.position("v").unwrap());
            assert_eq!(document.buffer_views.len(), 1);
            assert_eq!(
                document.buffer_views[view].target,
                Some(Target::ArrayBuffer)
            );
        }
    }

    #[test]
    fn end_to_end_fixture_parses() {
        let text = r#"{"buffers":{"b1":{"uri":"d.bin","byteLength":12,"type":"arraybuffer"}}, "bufferViews":{"bv1":{"buffer":"b1","byteOffset":0,"byteLength":12,"target":"34962"}}, "accessors":{"a1":{"bufferView":"bv1","byteOffset":0,"byteStride":0,"componentType":"5126","count":3,"type":"VEC3"}}, "meshes":{"m1":{"primitives":[{"indices":"a1","material":"mat1","mode":"4","attributes":{"POSITION":"a1"}}]}}, "materials":{"mat1":{}}}"#;
        let document = parse_current(text).unwrap();

        let accessor = document.accessors.get_by_id("a1").unwrap();
        assert_eq!(accessor.component_type, Some(ComponentType::Float));
        assert_eq!(accessor.count, Some(3));

        let mesh = document.meshes.get_by_id("m1").unwrap();
        let primitive = &mesh.primitives[0];
        assert_eq!(primitive.mode, Mode::Triangles);
        assert_eq!(primitive.material, document.materials.position("mat1"));
        assert_eq!(primitive.attributes[0].semantic, Semantic::Position);
        assert_eq!(Some(primitive.attributes[0].accessor), primitive.indices);
    }

    #[test]
    fn enum_values_outside_their_domain_are_wrong_keywords() {
        let text = r#"{"bufferViews": {"v": {"target": "5126"}}}"#;
        assert!(matches!(
            parse_current(text),
            Err(Error::WrongKeywordInContext { ref keyword, .. }) if keyword == "5126"
        ));

        let text = r#"{"bufferViews": {"v": {"target": "1234"}}}"#;
        assert!(matches!(
            parse_current(text),
            Err(Error::UnknownKeyword { ref keyword, .. }) if keyword == "1234"
        ));
    }

    #[test]
    fn default_scene_is_interned() {
        let text = r#"{"scene": "main", "scenes": {"other": {}, "main": {"nodes": ["n"]}}}"#;
        let document = parse_current(text).unwrap();

        assert_eq!(document.scene, Some(0));
        assert_eq!(document.scenes.id(0), "main");
        assert_eq!(document.default_scene().unwrap().nodes, vec![0]);
    }
}
