//! Bitmap font for the HUD
//!
//! Glyphs are 5x7 bitmaps; every lit pixel is drawn as a small square with the
//! same instanced rectangle pipeline as the paddle.

use std::collections::HashMap;

use anyhow::{bail, Result};
use game_core::Aabb;
use glam::IVec2;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;

type Rows = [u8; GLYPH_HEIGHT as usize];

/// Characters the HUD cannot render without
const REQUIRED: &str = "Score: High0123456789";

// Row bits, most significant of the low five bits is the leftmost column
const GLYPHS: &[(char, Rows)] = &[
    (' ', [0; 7]),
    (':', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('c', [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('e', [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
    ('g', [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('h', [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
    ('i', [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('o', [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('r', [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]),
    ('s', [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]),
];

/// HUD font handle, built once at startup and lent to the renderer
pub struct Font {
    glyphs: HashMap<char, Rows>,
}

impl Font {
    /// Build the glyph table, failing if it cannot render the HUD
    pub fn load() -> Result<Self> {
        Self::from_table(GLYPHS)
    }

    fn from_table(table: &[(char, Rows)]) -> Result<Self> {
        let mut glyphs = HashMap::with_capacity(table.len());
        for &(ch, rows) in table {
            if rows.iter().any(|row| *row >> GLYPH_WIDTH != 0) {
                bail!("glyph {ch:?} is wider than {GLYPH_WIDTH} pixels");
            }
            if glyphs.insert(ch, rows).is_some() {
                bail!("glyph {ch:?} defined twice");
            }
        }

        if let Some(missing) = REQUIRED.chars().find(|ch| !glyphs.contains_key(ch)) {
            bail!("font has no glyph for {missing:?}");
        }

        Ok(Self { glyphs })
    }

    /// Size of one font pixel for a nominal font size in screen pixels
    pub fn pixel_scale(size: i32) -> i32 {
        (size / (GLYPH_HEIGHT - 1)).max(1)
    }

    /// Horizontal distance between consecutive glyph origins
    pub fn advance(size: i32) -> i32 {
        (GLYPH_WIDTH + 1) * Self::pixel_scale(size)
    }

    /// Squares covering the lit pixels of `text` with its top-left at `origin`.
    /// Characters without a glyph leave a blank cell.
    pub fn layout(&self, text: &str, origin: IVec2, size: i32) -> Vec<Aabb> {
        let scale = Self::pixel_scale(size);
        let pixel = IVec2::splat(scale);
        let mut quads = Vec::new();

        for (index, ch) in text.chars().enumerate() {
            let Some(rows) = self.glyphs.get(&ch) else {
                continue;
            };
            let cell = origin + IVec2::new(index as i32 * Self::advance(size), 0);

            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (*bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        let pos = cell + IVec2::new(col * scale, row as i32 * scale);
                        quads.push(Aabb::from_pos_size(pos, pixel));
                    }
                }
            }
        }

        quads
    }
}
