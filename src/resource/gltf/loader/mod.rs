use crate::error::Result;

pub mod file;

/// Source of the binary payloads named by buffer URIs.
///
/// Loading and reading are split so that a payload is fetched once and then
/// borrowed as often as needed.
pub trait BufferLoader {
    fn load_buffer(&mut self, uri: &str) -> Result<()>;
    fn read_buffer(&self, uri: &str) -> Option<&[u8]>;
}
