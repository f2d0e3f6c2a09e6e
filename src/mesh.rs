use glium::backend::Facade;
use glium::VertexBuffer;

use crate::error::Error;
use crate::vertex::{FlatVertex, RawVertex};

fn face(corners: [[f32; 3]; 4], normal: [f32; 3]) -> [RawVertex; 6] {
    let v = |i: usize| RawVertex {
        pos: corners[i],
        normal,
    };
    [v(0), v(1), v(2), v(2), v(3), v(0)]
}

/// Unit cube centered at the origin as a triangle list, six vertices per face
pub fn cube_vertices() -> Vec<RawVertex> {
    let h = 0.5;
    let faces = [
        // Back
        face([[-h, -h, -h], [h, -h, -h], [h, h, -h], [-h, h, -h]], [0.0, 0.0, -1.0]),
        // Front
        face([[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]], [0.0, 0.0, 1.0]),
        // Left
        face([[-h, h, h], [-h, h, -h], [-h, -h, -h], [-h, -h, h]], [-1.0, 0.0, 0.0]),
        // Right
        face([[h, h, h], [h, h, -h], [h, -h, -h], [h, -h, h]], [1.0, 0.0, 0.0]),
        // Bottom
        face([[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]], [0.0, -1.0, 0.0]),
        // Top
        face([[-h, h, -h], [h, h, -h], [h, h, h], [-h, h, h]], [0.0, 1.0, 0.0]),
    ];
    faces.iter().flat_map(|f| f.iter().copied()).collect()
}

/// Plus shaped crosshair in normalized device coordinates
pub fn crosshair_vertices() -> Vec<FlatVertex> {
    let bar = |w: f32, h: f32| {
        let v = |x: f32, y: f32| FlatVertex { pos: [x, y] };
        [v(-w, h), v(-w, -h), v(w, h), v(w, h), v(-w, -h), v(w, -h)]
    };
    let mut vertices = bar(0.02, 0.005).to_vec();
    vertices.extend_from_slice(&bar(0.005, 0.02));
    vertices
}

pub fn upload_cube<F: Facade>(facade: &F) -> Result<VertexBuffer<RawVertex>, Error> {
    Ok(VertexBuffer::new(facade, &cube_vertices())?)
}

pub fn upload_crosshair<F: Facade>(facade: &F) -> Result<VertexBuffer<FlatVertex>, Error> {
    Ok(VertexBuffer::new(facade, &crosshair_vertices())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_faces_of_two_triangles() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), 36);
        for v in &vertices {
            assert!(v.pos.iter().all(|c| c.abs() == 0.5));
            let n_len: f32 = v.normal.iter().map(|c| c * c).sum();
            assert_eq!(n_len, 1.0);
        }
    }

    #[test]
    fn normals_point_out_of_their_face() {
        for v in cube_vertices() {
            let dot: f32 = v.pos.iter().zip(&v.normal).map(|(p, n)| p * n).sum();
            assert_eq!(dot, 0.5);
        }
    }

    #[test]
    fn crosshair_fits_in_the_middle() {
        let vertices = crosshair_vertices();
        assert_eq!(vertices.len(), 12);
        assert!(vertices.iter().all(|v| v.pos[0].abs() <= 0.02 && v.pos[1].abs() <= 0.02));
    }
}
