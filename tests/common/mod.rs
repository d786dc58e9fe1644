#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const POSITIONS: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
pub const INDICES: [u16; 3] = [0, 1, 2];

/// Three packed positions followed by three 16-bit indices.
pub fn triangle_payload() -> Vec<u8> {
    let mut payload = vec![];
    payload.extend_from_slice(bytemuck::cast_slice(&POSITIONS));
    payload.extend_from_slice(bytemuck::cast_slice(&INDICES));
    payload
}

/// Writes `scene.gltf` plus a `d.bin` sidecar into `directory`.
pub fn write_asset(directory: &Path, document: &str, payload: &[u8]) -> PathBuf {
    let path = directory.join("scene.gltf");
    std::fs::write(&path, document).unwrap();
    std::fs::write(directory.join("d.bin"), payload).unwrap();
    path
}

/// The minimal document with a separate index accessor over its own view.
pub const TRIANGLE: &str = r#"{
    "buffers": {"b1": {"uri": "d.bin", "byteLength": 42, "type": "arraybuffer"}},
    "bufferViews": {
        "bv1": {"buffer": "b1", "byteOffset": 0, "byteLength": 36, "target": "34962"},
        "bv2": {"buffer": "b1", "byteOffset": 36, "byteLength": 6, "target": "34963"}
    },
    "accessors": {
        "a1": {"bufferView": "bv1", "byteOffset": 0, "byteStride": 0, "componentType": "5126", "count": 3, "type": "VEC3"},
        "i1": {"bufferView": "bv2", "byteOffset": 0, "byteStride": 0, "componentType": "5123", "count": 3, "type": "SCALAR"}
    },
    "meshes": {"m1": {"primitives": [{"indices": "i1", "material": "mat1", "mode": "4", "attributes": {"POSITION": "a1"}}]}},
    "materials": {"mat1": {}}
}"#;
