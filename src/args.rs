use std::path::PathBuf;

use crate::resource::gltf::grammar::GrammarVersion;

pub struct Args {
    pub gltf: PathBuf,
    pub grammar: GrammarVersion,
    pub json: bool,
}
