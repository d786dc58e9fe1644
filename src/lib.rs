use anyhow::Context;

use crate::args::Args;
use crate::resource::gltf::asset::file::FileSystemGltfAsset;
use crate::resource::gltf::asset::GltfAsset;

pub mod args;
pub mod data;
pub mod error;
pub mod geometry;
pub mod resource;

pub use error::{Error, Result};
pub use geometry::Geometry;
pub use resource::gltf::document::Document;
pub use resource::gltf::grammar::GrammarVersion;
pub use resource::gltf::interpret::interpret;
pub use resource::gltf::parser::parse;

pub fn run(args: Args) -> anyhow::Result<()> {
    env_logger::init();

    let asset = FileSystemGltfAsset::from_path(&args.gltf, args.grammar)
        .with_context(|| format!("failed to parse {}", args.gltf.display()))?;
    let geometry = asset
        .interpret()
        .with_context(|| format!("failed to resolve {}", args.gltf.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
    } else {
        print!("{}", geometry.summary());
    }

    Ok(())
}
