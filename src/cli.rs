use clap::{Parser, ValueEnum};

use gltf_scene_loader::GrammarVersion;

/// Parses a glTF scene description and resolves its meshes into vertex and index arrays
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the .gltf file to load; buffer URIs are resolved next to it
    pub gltf: String,

    /// Dialect of the glTF grammar the file is written in
    #[arg(short, long, value_enum, default_value_t = Grammar::Current)]
    pub grammar: Grammar,

    /// Print the resolved geometry as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Legacy,
    Current,
}

impl From<Grammar> for GrammarVersion {
    fn from(value: Grammar) -> Self {
        match value {
            Grammar::Legacy => GrammarVersion::Legacy,
            Grammar::Current => GrammarVersion::Current,
        }
    }
}
