use dotboy_common::Color;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// One full LCD frame of resolved colors, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Box<[Color]>,
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &SCREEN_WIDTH)
            .field("height", &SCREEN_HEIGHT)
            .finish()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![Color::WHITE; SCREEN_WIDTH * SCREEN_HEIGHT].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Color at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the 160x144 screen.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        assert!(x < SCREEN_WIDTH && y < SCREEN_HEIGHT, "pixel ({x}, {y}) off screen");
        self.pixels[y * SCREEN_WIDTH + x]
    }

    /// The pixels of row `y`.
    pub(super) fn row_mut(&mut self, y: usize) -> &mut [Color] {
        let start = y * SCREEN_WIDTH;
        &mut self.pixels[start..start + SCREEN_WIDTH]
    }

    /// Write the frame as packed RGB24 into `out`, up to its length.
    pub fn write_rgb24(&self, out: &mut [u8]) {
        for (chunk, color) in out.chunks_exact_mut(3).zip(self.pixels.iter()) {
            let (r, g, b) = color.rgb();
            chunk.copy_from_slice(&[r, g, b]);
        }
    }
}

/// Receives completed frames.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer);
}

impl<F: FnMut(&FrameBuffer)> FrameSink for F {
    fn present(&mut self, frame: &FrameBuffer) {
        self(frame)
    }
}
