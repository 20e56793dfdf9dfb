//! Closed catalog of animation resources.
//!
//! Each entry is a compile-time definition: an ordered frame table plus
//! optional playback overrides. Frames are bitmasks over the 54 grid cells,
//! most significant bit first: bit `MATRIX_CELLS - 1 - i` drives cell `i`.

use embassy_time::Duration;

use crate::config::MATRIX_CELLS;

/// One animation frame: a bitmask over the grid cells.
pub type FrameMask = u64;

/// Mask with every grid cell lit.
pub const FULL_GRID: FrameMask = (1 << MATRIX_CELLS) - 1;

const ANIMATION_NAME_CONNECT_WIFI: &str = "connect_wifi";
const ANIMATION_NAME_CONNECT_BREATHE: &str = "connect_breathe";
const ANIMATION_NAME_HEARTBEAT: &str = "heartbeat";
const ANIMATION_NAME_BLINK: &str = "blink";

const ANIMATION_ID_CONNECT_WIFI: u8 = 0;
const ANIMATION_ID_CONNECT_BREATHE: u8 = 1;
const ANIMATION_ID_HEARTBEAT: u8 = 2;
const ANIMATION_ID_BLINK: u8 = 3;

/// An immutable animation resource.
///
/// `period`, `steps` and `loops` may be omitted; the engine falls back to
/// its defaults when selecting the animation.
#[derive(Debug, Clone, Copy)]
pub struct AnimationDefinition {
    /// Render worker period for this animation.
    pub period: Option<Duration>,
    /// Gradient segments per color stop pair.
    pub steps: Option<u16>,
    /// Whether the frame sequence is meant to play continuously.
    pub loops: Option<bool>,
    /// Ordered frame table.
    pub frames: &'static [FrameMask],
}

// WiFi indicator growing one bar per frame.
const CONNECT_WIFI_FRAMES: [FrameMask; 5] = [
    0x0,
    0x800_0000_0000, // 000000000010000000000000000000000000000000000000000000
    0x801_8000_0000, // 000000000010000000000110000000000000000000000000000000
    0x801_8038_0000, // 000000000010000000000110000000001110000000000000000000
    0x801_8038_0780, // 000000000010000000000110000000001110000000011110000000
];

// Full WiFi glyph held while the color cycle breathes.
const CONNECT_BREATHE_FRAMES: [FrameMask; 1] = [0x801_8038_0780];

const HEARTBEAT_FRAMES: [FrameMask; 3] = [
    0x85_0A50_8000,   // 000000000000001000010100001010010100001000000000000000
    0xC4_8948_C000,   // 000000000000001100010010001001010010001100000000000000
    0x8_5224_4846_2508, // 001000010100100010010001001000010001100010010100001000
];

// One-shot full-grid blink used as a "connected" acknowledgement.
const BLINK_FRAMES: [FrameMask; 5] = [FULL_GRID, 0x0, FULL_GRID, 0x0, FULL_GRID];

static CONNECT_WIFI: AnimationDefinition = AnimationDefinition {
    period: Some(Duration::from_millis(400)),
    steps: None,
    loops: Some(true),
    frames: &CONNECT_WIFI_FRAMES,
};

static CONNECT_BREATHE: AnimationDefinition = AnimationDefinition {
    period: Some(Duration::from_millis(100)),
    steps: Some(20),
    loops: Some(true),
    frames: &CONNECT_BREATHE_FRAMES,
};

static HEARTBEAT: AnimationDefinition = AnimationDefinition {
    period: Some(Duration::from_millis(200)),
    steps: None,
    loops: Some(true),
    frames: &HEARTBEAT_FRAMES,
};

static BLINK: AnimationDefinition = AnimationDefinition {
    period: Some(Duration::from_millis(300)),
    steps: None,
    loops: Some(false),
    frames: &BLINK_FRAMES,
};

/// Known animation ids that can be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    ConnectWifi = ANIMATION_ID_CONNECT_WIFI,
    ConnectBreathe = ANIMATION_ID_CONNECT_BREATHE,
    Heartbeat = ANIMATION_ID_HEARTBEAT,
    Blink = ANIMATION_ID_BLINK,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_CONNECT_WIFI => Self::ConnectWifi,
            ANIMATION_ID_CONNECT_BREATHE => Self::ConnectBreathe,
            ANIMATION_ID_HEARTBEAT => Self::Heartbeat,
            ANIMATION_ID_BLINK => Self::Blink,
            _ => return None,
        })
    }

    /// Look up the catalog entry for this id.
    pub fn definition(self) -> &'static AnimationDefinition {
        match self {
            Self::ConnectWifi => &CONNECT_WIFI,
            Self::ConnectBreathe => &CONNECT_BREATHE,
            Self::Heartbeat => &HEARTBEAT,
            Self::Blink => &BLINK,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConnectWifi => ANIMATION_NAME_CONNECT_WIFI,
            Self::ConnectBreathe => ANIMATION_NAME_CONNECT_BREATHE,
            Self::Heartbeat => ANIMATION_NAME_HEARTBEAT,
            Self::Blink => ANIMATION_NAME_BLINK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_CONNECT_WIFI => Some(Self::ConnectWifi),
            ANIMATION_NAME_CONNECT_BREATHE => Some(Self::ConnectBreathe),
            ANIMATION_NAME_HEARTBEAT => Some(Self::Heartbeat),
            ANIMATION_NAME_BLINK => Some(Self::Blink),
            _ => None,
        }
    }
}
