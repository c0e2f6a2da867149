use egui::ColorImage;
use crate::core::{PlayerError, PlayerResult};

/// A decoded frame in RGBA8, ready for texture upload
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    /// 0-based frame number within the stream
    pub index: u64,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl VideoFrame {
    /// Convert packed RGB24 decoder output to RGBA with opaque alpha
    pub fn from_rgb24(index: u64, width: u32, height: u32, data: &[u8]) -> PlayerResult<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(PlayerError::FrameSize {
                expected,
                actual: data.len(),
            });
        }

        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in data.chunks_exact(3) {
            rgba.extend_from_slice(pixel);
            rgba.push(255);
        }

        Ok(Self {
            index,
            width,
            height,
            rgba,
        })
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(self.size(), &self.rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb24_gets_opaque_alpha() {
        let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        let frame = VideoFrame::from_rgb24(7, 2, 2, &data).unwrap();

        assert_eq!(frame.index, 7);
        assert_eq!(frame.rgba, vec![
            255, 0, 0, 255,
            0, 255, 0, 255,
            0, 0, 255, 255,
            10, 20, 30, 255,
        ]);
    }

    #[test]
    fn test_rejects_truncated_buffer() {
        let err = VideoFrame::from_rgb24(0, 2, 2, &[0; 11]).unwrap_err();
        match err {
            PlayerError::FrameSize { expected, actual } => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_color_image_matches_frame() {
        let frame = VideoFrame::from_rgb24(0, 3, 1, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        let image = frame.to_color_image();
        assert_eq!(image.size, [3, 1]);
        assert_eq!(image.pixels[1], egui::Color32::from_rgb(4, 5, 6));
    }
}
