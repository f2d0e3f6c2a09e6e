use glium::implement_vertex;

/// Vertex with a normal for lit geometry
#[derive(Copy, Clone, Debug, Default)]
pub struct RawVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

implement_vertex!(RawVertex, pos, normal);

/// Vertex for flat 2D overlays
#[derive(Copy, Clone, Debug, Default)]
pub struct FlatVertex {
    pub pos: [f32; 2],
}

implement_vertex!(FlatVertex, pos);

/// Vertex with its own color, interpolated across the face
#[derive(Copy, Clone, Debug, Default)]
pub struct ColorVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

implement_vertex!(ColorVertex, pos, color);

/// Vertex with texture coordinates
#[derive(Copy, Clone, Debug, Default)]
pub struct TexVertex {
    pub pos: [f32; 3],
    pub tex_coords: [f32; 2],
}

implement_vertex!(TexVertex, pos, tex_coords);
