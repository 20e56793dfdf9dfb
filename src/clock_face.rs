//! Clock face layout for the 9x6 matrix.
//!
//! Hours are drawn as two 3x5 digit glyphs (white, columns 0-2 and 4-6),
//! minute tens as a bar in the last column (blue), minute ones along the
//! bottom row in three green shades. Writes go through the pipeline into the
//! surface; the caller decides when to `show`.

use crate::config::{
    BLACK, BLUE, GREEN, GREEN_LOW, GREEN_MEDIUM, MATRIX_HEIGHT, MATRIX_WIDTH, WHITE,
};
use crate::pipeline::ColorPipeline;
use crate::surface::{OutOfRange, Surface};
use crate::LedBus;

const HOUR_TENS_COLUMN: usize = 0;
const HOUR_ONES_COLUMN: usize = 4;
const MINUTE_TENS_COLUMN: usize = 8;

const GLYPH_COLUMNS: usize = 3;
const GLYPH_ROWS: usize = 5;

// 3x5 digit glyphs, column-major, most significant bit first.
const DIGIT_0: u16 = 0x7e3f; // 111111000111111
const DIGIT_1: u16 = 0x27e1; // 010011111100001
const DIGIT_2: u16 = 0x5ebd; // 101111010111101
const DIGIT_3: u16 = 0x56bf; // 101011010111111
const DIGIT_4: u16 = 0x709f; // 111000010011111
const DIGIT_5: u16 = 0x76b7; // 111011010110111
const DIGIT_6: u16 = 0x7eb7; // 111111010110111
const DIGIT_7: u16 = 0x421f; // 100001000011111
const DIGIT_8: u16 = 0x7ebf; // 111111010111111
const DIGIT_9: u16 = 0x76bf; // 111011010111111

const DIGITS: [u16; 10] = [
    DIGIT_0, DIGIT_1, DIGIT_2, DIGIT_3, DIGIT_4, DIGIT_5, DIGIT_6, DIGIT_7, DIGIT_8,
    DIGIT_9,
];

/// Draw the full hour/minute layout. Does not flush.
pub fn draw_time<B: LedBus, const CELLS: usize>(
    surface: &mut Surface<B, CELLS>,
    pipeline: &ColorPipeline,
    hour: u8,
    minute: u8,
) -> Result<(), OutOfRange> {
    draw_hour(surface, pipeline, hour)?;
    draw_minute(surface, pipeline, minute)
}

/// Draw the two hour digits.
pub fn draw_hour<B: LedBus, const CELLS: usize>(
    surface: &mut Surface<B, CELLS>,
    pipeline: &ColorPipeline,
    hour: u8,
) -> Result<(), OutOfRange> {
    let tens = usize::from(hour / 10) % 10;
    let ones = usize::from(hour % 10);

    draw_digit(surface, pipeline, HOUR_TENS_COLUMN, DIGITS[tens])?;
    draw_digit(surface, pipeline, HOUR_ONES_COLUMN, DIGITS[ones])
}

/// Draw the minute tens bar and the ones along the bottom row.
pub fn draw_minute<B: LedBus, const CELLS: usize>(
    surface: &mut Surface<B, CELLS>,
    pipeline: &ColorPipeline,
    minute: u8,
) -> Result<(), OutOfRange> {
    let tens = usize::from(minute / 10) % 10;
    let ones = usize::from(minute % 10);

    let start = MINUTE_TENS_COLUMN * MATRIX_HEIGHT;
    for row in 0..MATRIX_HEIGHT {
        let color = if row < tens { pipeline.convert(BLUE) } else { BLACK };
        surface.set_pixel(start + row, color)?;
    }

    for column in 0..MATRIX_WIDTH {
        let index = MATRIX_HEIGHT - 1 + MATRIX_HEIGHT * column;
        let color = if column < ones {
            pipeline.convert(minute_ones_shade(column + 1))
        } else {
            BLACK
        };
        surface.set_pixel(index, color)?;
    }

    Ok(())
}

fn draw_digit<B: LedBus, const CELLS: usize>(
    surface: &mut Surface<B, CELLS>,
    pipeline: &ColorPipeline,
    start_column: usize,
    glyph: u16,
) -> Result<(), OutOfRange> {
    let white = pipeline.convert(WHITE);

    for column in 0..GLYPH_COLUMNS {
        for row in 0..GLYPH_ROWS {
            let bit = column * GLYPH_ROWS + row;
            let lit = glyph >> (GLYPH_COLUMNS * GLYPH_ROWS - 1 - bit) & 1 == 1;
            let index = (start_column + column) * MATRIX_HEIGHT + row;
            surface.set_pixel(index, if lit { white } else { BLACK })?;
        }
    }

    Ok(())
}

/// The first three minute-ones cells are dim, the next three medium, the
/// rest full green.
fn minute_ones_shade(count: usize) -> crate::Rgb {
    match count {
        1..=3 => GREEN_LOW,
        4..=6 => GREEN_MEDIUM,
        _ => GREEN,
    }
}
