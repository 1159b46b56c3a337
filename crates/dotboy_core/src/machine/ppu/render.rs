use dotboy_common::Color;

use super::registers::{
    palette_shade, LcdRegisters, BG_ENABLE, OBJ_ENABLE, WINDOW_ENABLE,
};
use super::Ppu;
use crate::machine::GameBoyBus;
use crate::SCREEN_WIDTH;

/// OAM attribute bits.
const ATTR_BEHIND_BG: u8 = 0x80;
const ATTR_FLIP_Y: u8 = 0x40;
const ATTR_FLIP_X: u8 = 0x20;
const ATTR_PALETTE_1: u8 = 0x10;

#[derive(Clone, Copy, Debug)]
struct Sprite {
    /// Screen coordinates of the top-left corner (OAM stores y+16, x+8).
    y: i16,
    x: i16,
    tile: u8,
    attrs: u8,
}

/// 2-bit color index of pixel (`x`, `y`) within the 8x8 tile whose data
/// starts at `tile_addr`.
#[inline]
fn tile_pixel(vram: &[u8], tile_addr: u16, x: u8, y: u8) -> u8 {
    let row = usize::from(tile_addr - 0x8000) + usize::from(y) * 2;
    let lo = vram[row];
    let hi = vram[row + 1];
    let bit = 7 - x;
    (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1)
}

/// Color index at (`x`, `y`) of the 256x256 tile map at `map`.
#[inline]
fn map_pixel(map: u16, x: u8, y: u8, regs: &LcdRegisters, vram: &[u8]) -> u8 {
    let entry = map + u16::from(y / 8) * 32 + u16::from(x / 8);
    let tile = vram[usize::from(entry - 0x8000)];
    tile_pixel(vram, regs.tile_data_addr(tile), x % 8, y % 8)
}

impl Ppu {
    /// Render scanline `line` into the frame buffer: background, then
    /// window, then sprites.
    pub(super) fn render_line(&mut self, line: u8, regs: &LcdRegisters, bus: &GameBoyBus) {
        let vram = bus.vram();
        let mut row = [Color::WHITE; SCREEN_WIDTH];
        self.bg_index = [0; SCREEN_WIDTH];

        // On DMG, LCDC bit 0 blanks both the background and the window.
        if regs.has(BG_ENABLE) {
            self.draw_background(line, regs, vram, &mut row);
            if regs.has(WINDOW_ENABLE) && line >= regs.wy {
                self.draw_window(line, regs, vram, &mut row);
            }
        }
        if regs.has(OBJ_ENABLE) {
            self.draw_sprites(line, regs, vram, bus.oam(), &mut row);
        }

        self.frame.row_mut(usize::from(line)).copy_from_slice(&row);
    }

    fn draw_background(&mut self, line: u8, regs: &LcdRegisters, vram: &[u8], row: &mut [Color]) {
        let map = regs.bg_map_base();
        let y = line.wrapping_add(regs.scy);
        for (x, pixel) in row.iter_mut().enumerate() {
            let bx = (x as u8).wrapping_add(regs.scx);
            let index = map_pixel(map, bx, y, regs, vram);
            self.bg_index[x] = index;
            *pixel = Color::dmg_shade(palette_shade(regs.bgp, index));
        }
    }

    fn draw_window(&mut self, line: u8, regs: &LcdRegisters, vram: &[u8], row: &mut [Color]) {
        let map = regs.window_map_base();
        let origin = i16::from(regs.wx) - 7;
        let wy = line - regs.wy;
        for x in origin.max(0)..SCREEN_WIDTH as i16 {
            let wx = (x - origin) as u8;
            let index = map_pixel(map, wx, wy, regs, vram);
            let x = x as usize;
            self.bg_index[x] = index;
            row[x] = Color::dmg_shade(palette_shade(regs.bgp, index));
        }
    }

    fn draw_sprites(&mut self, line: u8, regs: &LcdRegisters, vram: &[u8], oam: &[u8], row: &mut [Color]) {
        let height = regs.sprite_height();
        let ly = i16::from(line);

        let mut sprites: Vec<Sprite> = oam
            .chunks_exact(4)
            .map(|entry| Sprite {
                y: i16::from(entry[0]) - 16,
                x: i16::from(entry[1]) - 8,
                tile: entry[2],
                attrs: entry[3],
            })
            .filter(|s| ly >= s.y && ly < s.y + i16::from(height))
            .collect();
        // Stable: equal x keeps OAM order.
        sprites.sort_by_key(|s| s.x);

        // Draw lowest priority first so the first sprite ends on top.
        for sprite in sprites.iter().rev() {
            let mut sy = (ly - sprite.y) as u8;
            if sprite.attrs & ATTR_FLIP_Y != 0 {
                sy = height - 1 - sy;
            }
            let tile = if height == 16 { sprite.tile & 0xFE } else { sprite.tile };
            let tile_addr = 0x8000 + u16::from(tile) * 16;
            let palette = if sprite.attrs & ATTR_PALETTE_1 != 0 {
                regs.obp1
            } else {
                regs.obp0
            };

            for px in 0..8u8 {
                let x = sprite.x + i16::from(px);
                if !(0..SCREEN_WIDTH as i16).contains(&x) {
                    continue;
                }
                let x = x as usize;
                let sx = if sprite.attrs & ATTR_FLIP_X != 0 { 7 - px } else { px };
                // Rows 8-15 of a tall sprite run into the next tile.
                let index = tile_pixel(vram, tile_addr + u16::from(sy / 8) * 16, sx, sy % 8);
                if index == 0 {
                    continue;
                }
                if sprite.attrs & ATTR_BEHIND_BG != 0 && self.bg_index[x] != 0 {
                    continue;
                }
                row[x] = Color::dmg_shade(palette_shade(palette, index));
            }
        }
    }
}
