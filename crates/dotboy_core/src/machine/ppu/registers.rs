use crate::machine::io::{BGP, LCDC, LYC, OBP0, OBP1, SCX, SCY, STAT, WX, WY};
use crate::machine::GameBoyBus;

/// LCDC bits.
pub(super) const LCD_ENABLE: u8 = 0x80;
pub(super) const WINDOW_MAP_HIGH: u8 = 0x40;
pub(super) const WINDOW_ENABLE: u8 = 0x20;
pub(super) const TILE_DATA_UNSIGNED: u8 = 0x10;
pub(super) const BG_MAP_HIGH: u8 = 0x08;
pub(super) const OBJ_TALL: u8 = 0x04;
pub(super) const OBJ_ENABLE: u8 = 0x02;
pub(super) const BG_ENABLE: u8 = 0x01;

/// Copy of the LCD registers taken at the start of an `advance` call.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct LcdRegisters {
    pub lcdc: u8,
    pub stat: u8,
    pub scy: u8,
    pub scx: u8,
    pub lyc: u8,
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
    pub wy: u8,
    pub wx: u8,
}

impl LcdRegisters {
    pub(super) fn snapshot(bus: &GameBoyBus) -> Self {
        Self {
            lcdc: bus.io_read(LCDC),
            stat: bus.io_read(STAT),
            scy: bus.io_read(SCY),
            scx: bus.io_read(SCX),
            lyc: bus.io_read(LYC),
            bgp: bus.io_read(BGP),
            obp0: bus.io_read(OBP0),
            obp1: bus.io_read(OBP1),
            wy: bus.io_read(WY),
            wx: bus.io_read(WX),
        }
    }

    #[inline]
    pub(super) fn lcd_enabled(&self) -> bool {
        self.lcdc & LCD_ENABLE != 0
    }

    #[inline]
    pub(super) fn has(&self, bit: u8) -> bool {
        self.lcdc & bit != 0
    }

    #[inline]
    pub(super) fn bg_map_base(&self) -> u16 {
        if self.has(BG_MAP_HIGH) {
            0x9C00
        } else {
            0x9800
        }
    }

    #[inline]
    pub(super) fn window_map_base(&self) -> u16 {
        if self.has(WINDOW_MAP_HIGH) {
            0x9C00
        } else {
            0x9800
        }
    }

    /// Address of a BG/window tile's first byte. With LCDC bit 4 clear the
    /// index is signed relative to 0x9000.
    #[inline]
    pub(super) fn tile_data_addr(&self, tile: u8) -> u16 {
        if self.has(TILE_DATA_UNSIGNED) {
            0x8000 + u16::from(tile) * 16
        } else {
            0x9000u16.wrapping_add_signed(i16::from(tile as i8) * 16)
        }
    }

    #[inline]
    pub(super) fn sprite_height(&self) -> u8 {
        if self.has(OBJ_TALL) {
            16
        } else {
            8
        }
    }
}

/// Map a 2-bit color index through a palette register to a shade number.
#[inline]
pub(super) fn palette_shade(palette: u8, index: u8) -> u8 {
    (palette >> (index * 2)) & 0x03
}
