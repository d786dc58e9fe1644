use clap::Parser;

use crate::cli::Cli;
use gltf_scene_loader::args::Args;
use gltf_scene_loader::run;

mod cli;

fn main() {
    let cli = Cli::parse();
    let result = run(Args {
        gltf: cli.gltf.into(),
        grammar: cli.grammar.into(),
        json: cli.json,
    });

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
