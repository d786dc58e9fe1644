use cgmath::{InnerSpace, One, Zero};

/// Local translation/rotation/scale of a scene node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: cgmath::Vector3::zero(),
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl From<Transform> for cgmath::Matrix4<f32> {
    fn from(value: Transform) -> Self {
        cgmath::Matrix4::from_translation(value.translation)
            * cgmath::Matrix4::from(value.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(value.scale.x, value.scale.y, value.scale.z)
    }
}

impl From<cgmath::Matrix4<f32>> for Transform {
    fn from(value: cgmath::Matrix4<f32>) -> Self {
        let columns = [value.x.truncate(), value.y.truncate(), value.z.truncate()];
        let scale = columns.map(|column| column.magnitude());

        // A zero scale axis leaves no rotation to recover along it.
        let [x, y, z] = [0, 1, 2].map(|axis| {
            if scale[axis] > 0.0 {
                columns[axis] / scale[axis]
            } else {
                columns[axis]
            }
        });

        Self {
            translation: value.w.truncate(),
            rotation: cgmath::Quaternion::from(cgmath::Matrix3::from_cols(x, y, z)),
            scale: scale.into(),
        }
    }
}
