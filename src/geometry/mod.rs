//! Renderer-agnostic output of the interpreter.

use serde::Serialize;

/// Flat vertex and index data plus the draw records that slice it.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Geometry {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
    pub objects: Vec<DrawObject>,
}

/// One drawable primitive. Offsets are in bytes into [`Geometry::indices`]
/// (for the object itself) and [`Geometry::vertices`] (for its attributes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawObject {
    pub mesh: String,
    pub primitive: usize,
    pub byte_offset: usize,
    pub byte_stride: usize,
    pub vertex_count: usize,
    pub draw_type: DrawType,
    pub attributes: Vec<AttributeBinding>,
}

impl DrawObject {
    pub fn roles(&self) -> Vec<AttributeRole> {
        self.attributes.iter().map(|attribute| attribute.role).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeBinding {
    pub role: AttributeRole,
    pub byte_offset: usize,
    pub byte_stride: usize,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawType {
    Points,
    Lines,
    Triangles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeRole {
    Position,
    Normal,
}

impl Geometry {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary { geometry: self }
    }
}

/// Human-readable listing printed by the command line front end.
pub struct Summary<'a> {
    geometry: &'a Geometry,
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let geometry = self.geometry;
        writeln!(
            f,
            "{} vertex floats, {} indices, {} objects",
            geometry.vertices.len(),
            geometry.indices.len(),
            geometry.objects.len()
        )?;

        for object in &geometry.objects {
            let roles = object
                .roles()
                .iter()
                .map(|role| format!("{role:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                " - {}[{}] {:?}: {} vertices at byte {} (stride {}) [{}]",
                object.mesh,
                object.primitive,
                object.draw_type,
                object.vertex_count,
                object.byte_offset,
                object.byte_stride,
                roles
            )?;
        }

        Ok(())
    }
}
