//! Fixed deployment constants for the matrix clock build.
//!
//! Geometry, palette and worker periods. Cells are addressed column-major:
//! `index = column * MATRIX_HEIGHT + row`.

use embassy_time::Duration;

use crate::Rgb;

pub const MATRIX_WIDTH: usize = 9;
pub const MATRIX_HEIGHT: usize = 6;
pub const MATRIX_CELLS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const GREEN_MEDIUM: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 0,
};
pub const GREEN_LOW: Rgb = Rgb { r: 0, g: 60, b: 60 };

/// Brightness percent applied at power-up.
pub const DEFAULT_BRIGHTNESS: u8 = 20;

/// Period of the clock face refresh worker.
pub const TIME_REFRESH_PERIOD: Duration = Duration::from_secs(10);

/// Period of the ambient light poll worker.
pub const BRIGHTNESS_POLL_PERIOD: Duration = Duration::from_secs(3);
