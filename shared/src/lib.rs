pub use bytemuck;

pub mod fractal;
pub mod navigation;

pub use navigation::Navigation;

/// Per-frame parameter block pushed to the fragment stage. Field order and
/// layout are byte-for-byte what the shader reads.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Params {
    pub center_x: f32,
    pub center_y: f32,
    pub width: u32,
    pub height: u32,
    pub zoom: f32,
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn params_layout_matches_shader_block() {
        assert_eq!(mem::size_of::<Params>(), 20);

        let params = Params {
            center_x: 0.25,
            center_y: -0.75,
            width: 800,
            height: 600,
            zoom: 0.5,
        };
        let bytes = bytemuck::bytes_of(&params);
        assert_eq!(&bytes[0..4], &0.25f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &(-0.75f32).to_ne_bytes());
        assert_eq!(&bytes[8..12], &800u32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &600u32.to_ne_bytes());
        assert_eq!(&bytes[16..20], &0.5f32.to_ne_bytes());
    }
}
