use crate::error::Result;
use crate::resource::gltf::document::EntityKind;
use crate::resource::gltf::grammar::Keyword;
use crate::resource::gltf::parser::DocumentParser;

impl<'a> DocumentParser<'a> {
    pub(super) fn parse_default_scene(&mut self) -> Result<()> {
        let scene = self.read_reference(|document| &mut document.scenes)?;
        self.document.scene = Some(scene);

        Ok(())
    }

    pub(super) fn parse_asset(&mut self) -> Result<()> {
        self.object(|parser, key| {
            let keyword = parser.keyword(&key)?;
            match keyword {
                Keyword::Copyright => {
                    parser.document.asset.copyright = Some(parser.cursor.get_string()?)
                }
                Keyword::Generator => {
                    parser.document.asset.generator = Some(parser.cursor.get_string()?)
                }
                Keyword::PremultipliedAlpha => {
                    parser.document.asset.premultiplied_alpha = parser.cursor.get_boolean()?
                }
                Keyword::Version => {
                    parser.document.asset.version = Some(parser.cursor.get_token()?)
                }
                Keyword::Profile => parser.object(|parser, key| {
                    let keyword = parser.keyword(&key)?;
                    match keyword {
                        Keyword::Api => {
                            parser.document.asset.profile.api = Some(parser.cursor.get_string()?)
                        }
                        Keyword::Version => {
                            parser.document.asset.profile.version =
                                Some(parser.cursor.get_token()?)
                        }
                        _ => parser.unknown_field(&key, keyword, EntityKind::Asset)?,
                    }
                    Ok(())
                })?,
                _ => parser.unknown_field(&key, keyword, EntityKind::Asset)?,
            }
            Ok(())
        })
    }

    pub(super) fn parse_nodes(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.nodes,
            |parser, index, key| parser.node_field(index, key),
        )
    }

    fn node_field(&mut self, index: usize, key: &str) -> Result<()> {
        let keyword = self.keyword(key)?;
        match keyword {
            Keyword::Name => self.document.nodes[index].name = Some(self.cursor.get_string()?),
            Keyword::Camera => {
                let camera = self.read_reference(|document| &mut document.cameras)?;
                self.document.nodes[index].camera = Some(camera);
            }
            Keyword::Children => {
                self.document.nodes[index].children =
                    self.read_references(|document| &mut document.nodes)?
            }
            Keyword::Skeletons => {
                self.document.nodes[index].skeletons =
                    self.read_references(|document| &mut document.nodes)?
            }
            Keyword::Skin => {
                let skin = self.read_reference(|document| &mut document.skins)?;
                self.document.nodes[index].skin = Some(skin);
            }
            Keyword::JointName => {
                self.document.nodes[index].joint_name = Some(self.cursor.get_string()?)
            }
            Keyword::Matrix => self.document.nodes[index].matrix = Some(self.read_floats(key)?),
            Keyword::Meshes => {
                self.document.nodes[index].meshes =
                    self.read_references(|document| &mut document.meshes)?
            }
            Keyword::Rotation => self.document.nodes[index].rotation = Some(self.read_floats(key)?),
            Keyword::Scale => self.document.nodes[index].scale = Some(self.read_floats(key)?),
            Keyword::Translation => {
                self.document.nodes[index].translation = Some(self.read_floats(key)?)
            }
            _ => self.unknown_field(key, keyword, EntityKind::Node)?,
        }

        Ok(())
    }

    pub(super) fn parse_scenes(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.scenes,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.scenes[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Nodes => {
                        parser.document.scenes[index].nodes =
                            parser.read_references(|document| &mut document.nodes)?
                    }
                    _ => parser.unknown_field(key, keyword, EntityKind::Scene)?,
                }
                Ok(())
            },
        )
    }

    pub(super) fn parse_skins(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.skins,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.skins[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::BindShapeMatrix => {
                        parser.document.skins[index].bind_shape_matrix =
                            Some(parser.read_floats(key)?)
                    }
                    Keyword::InverseBindMatrices => {
                        let accessor = parser.read_reference(|document| &mut document.accessors)?;
                        parser.document.skins[index].inverse_bind_matrices = Some(accessor);
                    }
                    Keyword::JointNames => {
                        parser.document.skins[index].joint_names = parser.read_strings()?
                    }
                    _ => parser.unknown_field(key, keyword, EntityKind::Skin)?,
                }
                Ok(())
            },
        )
    }

    pub(super) fn parse_images(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.images,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.images[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Uri => parser.document.images[index].uri = parser.cursor.get_string()?,
                    _ => parser.unknown_field(key, keyword, EntityKind::Image)?,
                }
                Ok(())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::resource::gltf::grammar::GrammarVersion;
    use crate::resource::gltf::parser::parse;

    #[test]
    fn asset_fields() {
        let text = r#"{"asset": {
            "copyright": "(c) nobody", "generator": "hand", "premultipliedAlpha": true,
            "profile": {"api": "WebGL", "version": "1.0.2"}, "version": "1.0"
        }}"#;
        let document = parse(text, "test", GrammarVersion::Current).unwrap();
        let asset = &document.asset;

        assert_eq!(asset.copyright.as_deref(), Some("(c) nobody"));
        assert_eq!(asset.generator.as_deref(), Some("hand"));
        assert!(asset.premultiplied_alpha);
        assert_eq!(asset.profile.api.as_deref(), Some("WebGL"));
        assert_eq!(asset.profile.version.as_deref(), Some("1.0.2"));
        assert_eq!(asset.version.as_deref(), Some("1.0"));
    }

    #[test]
    fn legacy_asset_version_may_be_a_number() {
        let text = r#"{"asset": {"version": 0.8}}"#;
        let document = parse(text, "test", GrammarVersion::Legacy).unwrap();
        assert_eq!(document.asset.version.as_deref(), Some("0.8"));
    }

    #[test]
    fn node_hierarchy() {
        let text = r#"{"nodes": {
            "root": {
                "children": ["child"], "name": "Root", "translation": [1, 2, 3],
                "rotation": [0, 0, 0, 1], "scale": [1, 1, 1], "camera": "cam"
            },
            "child": {
                "meshes": ["m"], "skin": "s", "skeletons": ["root"], "jointName": "j",
                "matrix": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]
            }
        }}"#;
        let document = parse(text, "test", GrammarVersion::Current).unwrap();
        let root = document.nodes.get_by_id("root").unwrap();
        let child_index = document.nodes.position("child").unwrap();
        let child = &document.nodes[child_index];

        assert_eq!(root.children, vec![child_index]);
        assert_eq!(root.translation, Some([1.0, 2.0, 3.0]));
        assert_eq!(root.camera, Some(0));
        assert_eq!(document.cameras.id(0), "cam");
        assert_eq!(child.skeletons, vec![document.nodes.position("root").unwrap()]);
        assert_eq!(child.meshes, vec![0]);
        assert_eq!(child.joint_name.as_deref(), Some("j"));
        assert!(child.matrix.is_some());
        assert_eq!(document.skins.len(), 1);
    }

    #[test]
    fn wrong_sized_vector_is_rejected() {
        let text = r#"{"nodes": {"n": {"translation": [1, 2]}}}"#;
        assert!(matches!(
            parse(text, "test", GrammarVersion::Current),
            Err(Error::WrongKeywordInContext { ref keyword, .. }) if keyword == "translation"
        ));
    }

    #[test]
    fn skins_and_images() {
        let text = r#"{
            "skins": {"s": {
                "bindShapeMatrix": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1],
                "inverseBindMatrices": "ibm", "jointNames": ["a", "b"], "name": "Skin"
            }},
            "images": {"img": {"uri": "tex.png", "name": "Texture"}}
        }"#;
        let document = parse(text, "test", GrammarVersion::Current).unwrap();
        let skin = document.skins.get_by_id("s").unwrap();

        assert_eq!(skin.inverse_bind_matrices, document.accessors.position("ibm"));
        assert_eq!(skin.joint_names, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(document.images.get_by_id("img").unwrap().uri, "tex.png");
    }
}
