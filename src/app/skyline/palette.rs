use serde::Serialize;

use super::rng::DeterministicRandom;

/// Building fill color as hue / saturation% / lightness%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Hsl {
    Hsl {
        hue,
        saturation,
        lightness,
    }
}

/// Window glass color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

const fn rgb(red: u8, green: u8, blue: u8) -> Rgb {
    Rgb { red, green, blue }
}

/// An ordered set of six building colors; one palette covers a whole scene.
pub type Palette = [Hsl; 6];

pub static PALETTES: [Palette; 8] = [
    [
        hsl(196, 41, 95),
        hsl(15, 8, 91),
        hsl(22, 12, 53),
        hsl(228, 5, 20),
        hsl(210, 12, 62),
        hsl(194, 101, 43),
    ],
    [
        hsl(196, 41, 95),
        hsl(226, 100, 94),
        hsl(30, 16, 75),
        hsl(292, 21, 43),
        hsl(274, 45, 24),
        hsl(249, 59, 13),
    ],
    [
        hsl(196, 41, 95),
        hsl(29, 71, 89),
        hsl(15, 68, 67),
        hsl(330, 39, 54),
        hsl(267, 51, 14),
        hsl(285, 80, 2),
    ],
    [
        hsl(196, 41, 95),
        hsl(212, 30, 89),
        hsl(193, 38, 17),
        hsl(9, 29, 42),
        hsl(15, 31, 54),
        hsl(191, 14, 53),
    ],
    [
        hsl(196, 41, 95),
        hsl(29, 52, 87),
        hsl(21, 60, 73),
        hsl(8, 12, 62),
        hsl(280, 4, 15),
        hsl(12, 24, 24),
    ],
    [
        hsl(196, 41, 95),
        hsl(202, 35, 85),
        hsl(28, 56, 79),
        hsl(34, 70, 61),
        hsl(300, 5, 29),
        hsl(292, 16, 10),
    ],
    [
        hsl(39, 52, 6),
        hsl(20, 14, 17),
        hsl(229, 19, 34),
        hsl(224, 36, 56),
        hsl(233, 47, 74),
        hsl(39, 47, 74),
    ],
    [
        hsl(194, 100, 28),
        hsl(36, 99, 47),
        hsl(198, 33, 76),
        hsl(81, 49, 53),
        hsl(192, 67, 55),
        hsl(28, 99, 72),
    ],
];

/// The six glass tints windows are drawn from.
pub static WINDOW_COLORS: [Rgb; 6] = [
    rgb(255, 255, 255),
    rgb(239, 252, 255),
    rgb(226, 238, 241),
    rgb(235, 228, 212),
    rgb(234, 233, 235),
    rgb(229, 237, 253),
];

/// Pick the scene palette. Consumes exactly one draw.
pub fn select_palette(rng: &mut DeterministicRandom) -> &'static Palette {
    &PALETTES[rng.next_range(0, PALETTES.len() as i32 - 1) as usize]
}
