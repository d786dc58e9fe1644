use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::geometry::{AttributeBinding, AttributeRole, DrawObject, DrawType, Geometry};
use crate::resource::gltf::document::{
    Accessor, BufferView, ComponentType, Document, EntityKind, Mode, Primitive, Semantic, Target,
};
use crate::resource::gltf::loader::BufferLoader;
use crate::resource::gltf::validate::validate;

/// Validates `document` and resolves its meshes into flat vertex and index
/// arrays, pulling payloads through `loader`.
pub fn interpret(document: &Document, loader: &mut impl BufferLoader) -> Result<Geometry> {
    validate(document)?;

    let mut interpreter = Interpreter {
        document,
        loader,
        view_bases: vec![],
        geometry: Geometry::default(),
    };
    interpreter.layout_views()?;
    interpreter.resolve_meshes()?;
    interpreter.load_buffers()?;
    interpreter.materialize_views()?;

    Ok(interpreter.geometry)
}

struct Interpreter<'a, T: BufferLoader> {
    document: &'a Document,
    loader: &'a mut T,
    /// Byte offset of each buffer view inside its output array.
    view_bases: Vec<usize>,
    geometry: Geometry,
}

fn element_size(target: Target) -> usize {
    match target {
        Target::ArrayBuffer => std::mem::size_of::<f32>(),
        Target::ElementArrayBuffer => std::mem::size_of::<u16>(),
    }
}

fn draw_type(mode: Mode) -> DrawType {
    match mode {
        Mode::Points => DrawType::Points,
        Mode::Lines | Mode::LineLoop | Mode::LineStrip => DrawType::Lines,
        Mode::Triangles | Mode::TriangleStrip | Mode::TriangleFan => DrawType::Triangles,
    }
}

impl<'a, T: BufferLoader> Interpreter<'a, T> {
    fn self_test_failed(kind: EntityKind, name: &str) -> Error {
        Error::SelfTestFailed {
            kind,
            name: name.to_string(),
        }
    }

    fn view_target(&self, index: usize) -> Result<Target> {
        match self.document.buffer_views[index].target {
            Some(target) => Ok(target),
            None => Err(Error::InvalidBufferViewTarget {
                name: self.document.buffer_views.id(index).to_string(),
            }),
        }
    }

    fn layout_views(&mut self) -> Result<()> {
        let document = self.document;
        let mut vertex_end = 0usize;
        let mut index_end = 0usize;

        for index in 0..document.buffer_views.len() {
            let view = &document.buffer_views[index];
            let length = view.byte_length as usize;
            let end = match self.view_target(index)? {
                Target::ArrayBuffer => &mut vertex_end,
                Target::ElementArrayBuffer => &mut index_end,
            };
            self.view_bases.push(*end);
            *end = match end.checked_add(length) {
                Some(next) => next,
                None => {
                    let name = document.buffer_views.id(index);
                    log::error!("Buffer view {name:?} of {length} bytes overflows the output");
                    return Err(Error::InvalidBufferViewBounds {
                        name: name.to_string(),
                        offset: view.byte_offset.unwrap_or(0) as usize,
                        length,
                        size: usize::MAX,
                    });
                }
            };
        }

        Ok(())
    }

    /// Looks up an accessor and its view, requiring the view to be bound as
    /// `expected`.
    fn bound_accessor(&self, index: usize, expected: Target) -> Result<(&'a Accessor, usize)> {
        let document = self.document;
        let accessor = &document.accessors[index];
        let accessor_id = document.accessors.id(index);

        let view_index = match accessor.buffer_view {
            Some(view_index) => view_index,
            None => return Err(Self::self_test_failed(EntityKind::Accessor, accessor_id)),
        };

        if self.view_target(view_index)? != expected {
            log::error!(
                "Bad target for accessor {accessor_id:?}: buffer view {:?} is not bound as {}",
                document.buffer_views.id(view_index),
                expected.binding_name()
            );
            return Err(Error::BadAccessorTarget {
                accessor: accessor_id.to_string(),
                expected: expected.binding_name(),
            });
        }

        Ok((accessor, view_index))
    }

    fn absolute_offset(&self, accessor: &Accessor, view_index: usize) -> Result<usize> {
        let offset = accessor.byte_offset.unwrap_or(0) as usize;
        match self.view_bases[view_index].checked_add(offset) {
            Some(absolute) => Ok(absolute),
            None => Err(Error::InvalidBufferViewBounds {
                name: self.document.buffer_views.id(view_index).to_string(),
                offset,
                length: 0,
                size: usize::MAX,
            }),
        }
    }

    fn resolve_meshes(&mut self) -> Result<()> {
        let document = self.document;

        for (_, mesh_id, mesh) in document.meshes.iter() {
            log::debug!("Resolving glTF mesh: {mesh_id}");

            for (primitive_index, primitive) in mesh.primitives.iter().enumerate() {
                let object = self.resolve_primitive(mesh_id, primitive_index, primitive)?;
                self.geometry.objects.push(object);
            }
        }

        Ok(())
    }

    fn resolve_primitive(
        &self,
        mesh_id: &str,
        primitive_index: usize,
        primitive: &Primitive,
    ) -> Result<DrawObject> {
        let indices = match primitive.indices {
            Some(indices) => indices,
            None => return Err(Self::self_test_failed(EntityKind::Mesh, mesh_id)),
        };
        let (accessor, view_index) = self.bound_accessor(indices, Target::ElementArrayBuffer)?;
        if let Some(component_type) = accessor.component_type {
            if component_type != ComponentType::UnsignedShort {
                let accessor_id = self.document.accessors.id(indices);
                log::error!("Index accessor {accessor_id:?} is not UNSIGNED_SHORT");
                return Err(Error::UnsupportedIndexType {
                    accessor: accessor_id.to_string(),
                    component_type,
                });
            }
        }

        let mut attributes = vec![];
        for attribute in &primitive.attributes {
            let (attribute_accessor, attribute_view) =
                self.bound_accessor(attribute.accessor, Target::ArrayBuffer)?;

            let role = match attribute.semantic {
                Semantic::Position => AttributeRole::Position,
                Semantic::Normal => AttributeRole::Normal,
                other => {
                    let accessor_id = self.document.accessors.id(attribute.accessor);
                    log::error!("Unsupported attribute type {other} on accessor {accessor_id:?}");
                    return Err(Error::UnsupportedSemantic {
                        accessor: accessor_id.to_string(),
                        semantic: other.to_string(),
                    });
                }
            };

            attributes.push(AttributeBinding {
                role,
                byte_offset: self.absolute_offset(attribute_accessor, attribute_view)?,
                byte_stride: attribute_accessor.byte_stride as usize,
                count: attribute_accessor.count.unwrap_or(0) as usize,
            });
        }

        Ok(DrawObject {
            mesh: mesh_id.to_string(),
            primitive: primitive_index,
            byte_offset: self.absolute_offset(accessor, view_index)?,
            byte_stride: accessor.byte_stride as usize,
            vertex_count: accessor.count.unwrap_or(0) as usize,
            draw_type: draw_type(primitive.mode),
            attributes,
        })
    }

    fn load_buffers(&mut self) -> Result<()> {
        let document = self.document;
        let referenced: BTreeSet<usize> = document
            .buffer_views
            .iter()
            .filter_map(|(_, _, view)| view.buffer)
            .collect();

        for index in referenced {
            let buffer = &document.buffers[index];
            log::debug!(
                "Loading glTF buffer: {} - [{index}] from {}",
                document.buffers.id(index),
                buffer.uri
            );
            self.loader.load_buffer(&buffer.uri)?;
        }

        Ok(())
    }

    fn materialize_views(&mut self) -> Result<()> {
        let document = self.document;

        for (index, view_id, view) in document.buffer_views.iter() {
            let target = self.view_target(index)?;
            let payload = payload(document, &*self.loader, view_id, view)?;
            let bytes = view_bytes(view_id, view, payload, element_size(target))?;

            match target {
                Target::ArrayBuffer => {
                    let vertices = &mut self.geometry.vertices;
                    let start = vertices.len();
                    vertices.resize(start + bytes.len() / element_size(target), 0.0);
                    bytemuck::cast_slice_mut::<f32, u8>(&mut vertices[start..])
                        .copy_from_slice(bytes);
                }
                Target::ElementArrayBuffer => {
                    let indices = &mut self.geometry.indices;
                    let start = indices.len();
                    indices.resize(start + bytes.len() / element_size(target), 0);
                    bytemuck::cast_slice_mut::<u16, u8>(&mut indices[start..])
                        .copy_from_slice(bytes);
                }
            }

            log::trace!(
                "Copied {} bytes of buffer view {view_id:?} as {}",
                bytes.len(),
                target.binding_name()
            );
        }

        Ok(())
    }
}

fn payload<'l>(
    document: &Document,
    loader: &'l impl BufferLoader,
    view_id: &str,
    view: &BufferView,
) -> Result<&'l [u8]> {
    let buffer = match view.buffer {
        Some(buffer) => &document.buffers[buffer],
        None => {
            return Err(Error::SelfTestFailed {
                kind: EntityKind::BufferView,
                name: view_id.to_string(),
            })
        }
    };

    match loader.read_buffer(&buffer.uri) {
        Some(payload) => Ok(payload),
        None => Err(Error::BufferFileNotFound {
            path: buffer.uri.clone().into(),
        }),
    }
}

/// Bounds- and alignment-checked byte range of `view` inside `payload`.
fn view_bytes<'p>(
    view_id: &str,
    view: &BufferView,
    payload: &'p [u8],
    element_size: usize,
) -> Result<&'p [u8]> {
    let offset = view.byte_offset.unwrap_or(0) as usize;
    let length = view.byte_length as usize;

    let end = offset.checked_add(length).filter(|end| *end <= payload.len());
    let end = match end {
        Some(end) => end,
        None => {
            log::error!(
                "Invalid buffer view size and/or offset for {view_id:?}: {offset} + {length} > {}",
                payload.len()
            );
            return Err(Error::InvalidBufferViewBounds {
                name: view_id.to_string(),
                offset,
                length,
                size: payload.len(),
            });
        }
    };

    if length % element_size != 0 {
        log::error!("Buffer view {view_id:?} length {length} is not a multiple of {element_size}");
        return Err(Error::MisalignedBufferView {
            name: view_id.to_string(),
            length,
            element_size,
        });
    }

    Ok(&payload[offset..end])
}
