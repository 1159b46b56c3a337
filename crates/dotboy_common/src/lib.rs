pub mod key;

/// A fully resolved display color.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    /// The four grayscale shades of the DMG LCD, lightest first.
    pub const DMG_SHADES: [Color; 4] = [
        Color::WHITE,
        Color::new_rgb(0xAA, 0xAA, 0xAA),
        Color::new_rgb(0x55, 0x55, 0x55),
        Color::BLACK,
    ];

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    /// Map a 2-bit DMG shade number (0 = lightest) onto a display color.
    #[inline]
    pub const fn dmg_shade(shade: u8) -> Color {
        Color::DMG_SHADES[(shade & 0x03) as usize]
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
