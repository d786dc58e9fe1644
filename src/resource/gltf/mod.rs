//! Reading glTF scene descriptions: a hand-written tokenizer and parser that
//! interns every named object, a structural validator, and an interpreter
//! that turns meshes into flat vertex and index arrays.

pub mod asset;
pub mod cursor;
pub mod document;
pub mod grammar;
pub mod interpret;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod validate;
