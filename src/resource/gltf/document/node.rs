use crate::data::transform::Transform;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Node {
    pub name: Option<String>,
    pub camera: Option<usize>,
    pub children: Vec<usize>,
    pub skeletons: Vec<usize>,
    pub skin: Option<usize>,
    pub joint_name: Option<String>,
    /// Column-major local matrix. Takes precedence over the TRS fields.
    pub matrix: Option<[f32; 16]>,
    pub meshes: Vec<usize>,
    pub rotation: Option<[f32; 4]>,
    pub scale: Option<[f32; 3]>,
    pub translation: Option<[f32; 3]>,
}

impl Node {
    pub fn local_transform(&self) -> Transform {
        if let Some(matrix) = self.matrix {
            let columns: &[[f32; 4]; 4] = bytemuck::cast_ref(&matrix);
            return Transform::from(cgmath::Matrix4::from(*columns));
        }

        let mut transform = Transform::default();
        if let Some([x, y, z]) = self.translation {
            transform.translation = cgmath::Vector3::new(x, y, z);
        }
        if let Some([x, y, z, w]) = self.rotation {
            transform.rotation = cgmath::Quaternion::new(w, x, y, z);
        }
        if let Some([x, y, z]) = self.scale {
            transform.scale = cgmath::Vector3::new(x, y, z);
        }

        transform
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    pub name: Option<String>,
    pub nodes: Vec<usize>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Skin {
    pub name: Option<String>,
    pub bind_shape_matrix: Option<[f32; 16]>,
    pub inverse_bind_matrices: Option<usize>,
    pub joint_names: Vec<String>,
}

/// Only ever created by a node reference; the cameras section is skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Camera;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Image {
    pub name: Option<String>,
    pub uri: String,
}
