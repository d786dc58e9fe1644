//! Post-parse self tests.
//!
//! Each check is a pure predicate over one record. [`validate`] runs them over
//! accessors, buffers, buffer views and meshes, in that order, and stops at
//! the first failure.

use crate::error::{Error, Result};
use crate::resource::gltf::document::{
    Accessor, Buffer, BufferView, Document, EntityKind, Mesh, Primitive,
};
use crate::resource::gltf::registry::Registry;

pub const MAX_BYTE_STRIDE: i64 = 255;

pub trait SelfTest {
    const KIND: EntityKind;

    fn self_test(&self) -> bool;
}

impl SelfTest for Accessor {
    const KIND: EntityKind = EntityKind::Accessor;

    fn self_test(&self) -> bool {
        self.buffer_view.is_some()
            && self.byte_offset.is_some_and(|offset| offset >= 0)
            && (0..=MAX_BYTE_STRIDE).contains(&self.byte_stride)
            && self.component_type.is_some()
            && self.count.is_some_and(|count| count >= 1)
            && self.type_.is_some()
    }
}

impl SelfTest for BufferView {
    const KIND: EntityKind = EntityKind::BufferView;

    fn self_test(&self) -> bool {
        self.buffer.is_some()
            && self.byte_offset.is_some_and(|offset| offset >= 0)
            && self.byte_length >= 0
            && self.target.is_some()
    }
}

impl SelfTest for Buffer {
    const KIND: EntityKind = EntityKind::Buffer;

    fn self_test(&self) -> bool {
        !self.uri.is_empty() && self.byte_length >= 0
    }
}

impl SelfTest for Primitive {
    const KIND: EntityKind = EntityKind::Primitive;

    fn self_test(&self) -> bool {
        self.indices.is_some() && self.material.is_some() && !self.attributes.is_empty()
    }
}

impl SelfTest for Mesh {
    const KIND: EntityKind = EntityKind::Mesh;

    fn self_test(&self) -> bool {
        !self.primitives.is_empty() && self.primitives.iter().all(Primitive::self_test)
    }
}

fn validate_all<T: SelfTest>(registry: &Registry<T>) -> Result<()> {
    for (index, id, entity) in registry.iter() {
        if !entity.self_test() {
            log::error!("Self test failed for {} {id:?} [{index}]", T::KIND);
            return Err(Error::SelfTestFailed {
                kind: T::KIND,
                name: id.to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate(document: &Document) -> Result<()> {
    validate_all(&document.accessors)?;
    validate_all(&document.buffers)?;
    validate_all(&document.buffer_views)?;
    validate_all(&document.meshes)?;

    log::debug!(
        "Self tests passed for {} accessors, {} buffers, {} buffer views and {} meshes",
        document.accessors.len(),
        document.buffers.len(),
        document.buffer_views.len(),
        document.meshes.len(),
    );

    Ok(())
}
