/// Camera uniform buffer data for GPU, std140 compatible
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub zoom: f32, // Field of view in degrees, fed to the host's projection
    pub front: [f32; 3],
    pub _pad1: f32,
    pub right: [f32; 3],
    pub _pad2: f32,
    pub up: [f32; 3],
    pub _pad3: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[test]
    fn test_uniform_size_is_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 128);
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn test_uniform_casts_to_bytes() {
        let uniform = CameraUniform {
            zoom: 45.0,
            ..CameraUniform::zeroed()
        };
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 128);
        assert_eq!(&bytes[76..80], &45.0f32.to_ne_bytes());
    }
}
