// Shader sources bundled as string constants
pub static HEART_VERT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/heart.vert"));
pub static HEART_FRAG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/heart.frag"));

pub const POSITION_ATTRIB: &str = "position";
pub const TIME_UNIFORM: &str = "time";
pub const WIDTH_UNIFORM: &str = "width";
pub const HEIGHT_UNIFORM: &str = "height";

/// Floats per vertex in [`QUAD_VERTICES`].
pub const QUAD_COMPONENTS: i32 = 2;
pub const QUAD_VERTEX_COUNT: i32 = 4;
/// Byte stride between consecutive vertices.
pub const QUAD_STRIDE: i32 = QUAD_COMPONENTS * std::mem::size_of::<f32>() as i32;

/// Triangle strip covering clip space: top left, bottom left, top right, bottom right.
pub static QUAD_VERTICES: [f32; 8] = [
    -1.0, 1.0, //
    -1.0, -1.0, //
    1.0, 1.0, //
    1.0, -1.0, //
];

/// Raw bytes of the quad as uploaded to the vertex buffer.
#[inline]
pub fn quad_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&QUAD_VERTICES)
}
