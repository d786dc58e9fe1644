use crate::error::Result;
use crate::resource::gltf::document::{
    EntityKind, Parameter, ParameterType, ShaderType, StateEnable, States, TechniquePass,
};
use crate::resource::gltf::grammar::{GrammarVersion, Keyword};
use crate::resource::gltf::parser::DocumentParser;

impl<'a> DocumentParser<'a> {
    pub(super) fn parse_techniques(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.techniques,
            |parser, index, key| parser.technique_field(index, key),
        )?;

        if self.grammar.version() == GrammarVersion::Legacy {
            for index in 0..self.document.techniques.len() {
                self.document.techniques[index].fold_pass();
            }
        }

        Ok(())
    }

    fn technique_field(&mut self, index: usize, key: &str) -> Result<()> {
        let keyword = self.keyword(key)?;
        match keyword {
            Keyword::Name => self.document.techniques[index].name = Some(self.cursor.get_string()?),
            Keyword::Parameters => self.object(|parser, id| {
                let parameter = parser.parse_parameter(id)?;
                parser.document.techniques[index].parameters.push(parameter);
                Ok(())
            })?,
            Keyword::Attributes => {
                self.document.techniques[index].attributes = self.read_string_map()?
            }
            Keyword::Uniforms => self.document.techniques[index].uniforms = self.read_string_map()?,
            Keyword::Program => {
                let program = self.read_reference(|document| &mut document.programs)?;
                self.document.techniques[index].program = Some(program);
            }
            Keyword::States => self.document.techniques[index].states = self.parse_states()?,
            Keyword::Pass => self.document.techniques[index].pass = Some(self.cursor.get_string()?),
            Keyword::Passes => self.object(|parser, id| {
                let pass = parser.parse_pass(id)?;
                parser.document.techniques[index].passes.push(pass);
                Ok(())
            })?,
            _ => self.unknown_field(key, keyword, EntityKind::Technique)?,
        }

        Ok(())
    }

    fn parse_parameter(&mut self, id: String) -> Result<Parameter> {
        let mut parameter = Parameter {
            id,
            ..Default::default()
        };
        self.object(|parser, key| {
            let keyword = parser.keyword(&key)?;
            match keyword {
                Keyword::Count => parameter.count = Some(parser.cursor.get_number()?),
                Keyword::Node => {
                    parameter.node = Some(parser.read_reference(|document| &mut document.nodes)?)
                }
                Keyword::Semantic => parameter.semantic = Some(parser.cursor.get_string()?),
                Keyword::Type => {
                    parameter.type_ = Some(parser.read_enum(&key, ParameterType::from_keyword)?)
                }
                Keyword::Value => parameter.value = Some(parser.cursor.get_value(&key)?),
                _ => parser.unknown_field(&key, keyword, EntityKind::TechniqueParameter)?,
            }
            Ok(())
        })?;

        Ok(parameter)
    }

    fn parse_states(&mut self) -> Result<States> {
        let mut states = States::default();
        self.object(|parser, key| {
            let keyword = parser.keyword(&key)?;
            match keyword {
                Keyword::Enable => {
                    let tokens = parser.cursor.get_array(|cursor| cursor.get_token())?;
                    for token in tokens {
                        let keyword = parser.keyword(&token)?;
                        match StateEnable::from_keyword(keyword) {
                            Some(state) => states.enable.push(state),
                            None => return Err(parser.wrong_keyword(&token, "\"enable\"")),
                        }
                    }
                }
                Keyword::Functions => parser.object(|parser, name| {
                    // Function names are GL entry points, not keywords.
                    match parser.grammar.lookup(&name) {
                        Some(
                            keyword @ (Keyword::Extensions
                            | Keyword::Extras
                            | Keyword::AdditionalProperties),
                        ) => parser.unknown_field(&name, keyword, EntityKind::TechniqueStates),
                        _ => {
                            let value = parser.cursor.get_value(&name)?;
                            states.functions.push((name, value));
                            Ok(())
                        }
                    }
                })?,
                _ => parser.unknown_field(&key, keyword, EntityKind::TechniqueStates)?,
            }
            Ok(())
        })?;

        Ok(states)
    }

    fn parse_pass(&mut self, id: String) -> Result<TechniquePass> {
        let mut pass = TechniquePass {
            id,
            ..Default::default()
        };
        self.object(|parser, key| {
            let keyword = parser.keyword(&key)?;
            match keyword {
                Keyword::InstanceProgram => parser.object(|parser, key| {
                    let keyword = parser.keyword(&key)?;
                    match keyword {
                        Keyword::Program => {
                            pass.program =
                                Some(parser.read_reference(|document| &mut document.programs)?)
                        }
                        Keyword::Attributes => pass.attributes = parser.read_string_map()?,
                        Keyword::Uniforms => pass.uniforms = parser.read_string_map()?,
                        _ => parser.unknown_field(&key, keyword, EntityKind::TechniquePass)?,
                    }
                    Ok(())
                })?,
                Keyword::States => pass.states = parser.parse_states()?,
                Keyword::Details => parser.cursor.skip_section(&key)?,
                _ => parser.unknown_field(&key, keyword, EntityKind::TechniquePass)?,
            }
            Ok(())
        })?;

        Ok(pass)
    }

    pub(super) fn parse_programs(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.programs,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.programs[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Attributes => {
                        parser.document.programs[index].attributes = parser.read_strings()?
                    }
                    Keyword::FragmentShader => {
                        let shader = parser.read_reference(|document| &mut document.shaders)?;
                        parser.document.programs[index].fragment_shader = Some(shader);
                    }
                    Keyword::VertexShader => {
                        let shader = parser.read_reference(|document| &mut document.shaders)?;
                        parser.document.programs[index].vertex_shader = Some(shader);
                    }
                    _ => parser.unknown_field(key, keyword, EntityKind::Program)?,
                }
                Ok(())
            },
        )
    }

    pub(super) fn parse_shaders(&mut self) -> Result<()> {
        self.entities(
            |document| &mut document.shaders,
            |parser, index, key| {
                let keyword = parser.keyword(key)?;
                match keyword {
                    Keyword::Name => {
                        parser.document.shaders[index].name = Some(parser.cursor.get_string()?)
                    }
                    Keyword::Uri => {
                        parser.document.shaders[index].uri = parser.cursor.get_string()?
                    }
                    Keyword::Type => {
                        let type_ = parser.read_enum(key, ShaderType::from_keyword)?;
                        parser.document.shaders[index].type_ = Some(type_);
                    }
                    _ => parser.unknown_field(key, keyword, EntityKind::Shader)?,
                }
                Ok(())
            },
        )
    }
}
