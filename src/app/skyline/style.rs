use serde::Serialize;

use super::rng::DeterministicRandom;
use super::scene::{CITY_HEIGHT, CITY_WIDTH};

/// One of the eleven fixed facade treatments a building can wear.
///
/// The variant itself is only an identifier; everything visual about it lives
/// in the static [`StyleLayout`] table and is read exclusively by the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    Style1,
    Style2,
    Style3,
    Style4,
    Style5,
    Style6,
    Style7,
    Style8,
    Style9,
    Style10,
    Style11,
}

pub static STYLE_CATALOG: [StyleVariant; 11] = [
    StyleVariant::Style1,
    StyleVariant::Style2,
    StyleVariant::Style3,
    StyleVariant::Style4,
    StyleVariant::Style5,
    StyleVariant::Style6,
    StyleVariant::Style7,
    StyleVariant::Style8,
    StyleVariant::Style9,
    StyleVariant::Style10,
    StyleVariant::Style11,
];

/// Pick a facade for one building. Consumes exactly one draw.
pub fn select_style(rng: &mut DeterministicRandom) -> StyleVariant {
    STYLE_CATALOG[rng.next_range(0, STYLE_CATALOG.len() as i32 - 1) as usize]
}

/// Positional opacity override: every `every`-th window (1-based) takes
/// `opacity`. Rules are applied in order; the last matching rule wins.
#[derive(Debug, Clone, Copy)]
pub struct NthRule {
    pub every: u32,
    pub opacity: f64,
}

const fn nth(every: u32, opacity: f64) -> NthRule {
    NthRule { every, opacity }
}

/// Static per-style layout metadata, in rem units where dimensional.
///
/// `window_width`/`window_height` of `None` fall back to the city-wide
/// defaults (width/80 and height/50).
#[derive(Debug, Clone, Copy)]
pub struct StyleLayout {
    pub columns: u32,
    pub gap: f64,
    pub padding_vertical: f64,
    pub padding_horizontal: f64,
    pub window_width: Option<f64>,
    pub window_height: Option<f64>,
    pub window_opacity: f64,
    pub opacity_rules: &'static [NthRule],
    pub hidden_every: &'static [u32],
    pub highlight_every: Option<u32>,
}

static STYLE_LAYOUTS: [StyleLayout; 11] = [
    // style1: wide double-hung windows, every third one lit
    StyleLayout {
        columns: 10,
        gap: 0.5,
        padding_vertical: 0.8,
        padding_horizontal: 0.5,
        window_width: Some(CITY_WIDTH / 25.0),
        window_height: None,
        window_opacity: 0.7,
        opacity_rules: &[nth(3, 1.0)],
        hidden_every: &[],
        highlight_every: None,
    },
    // style2: dense office grid
    StyleLayout {
        columns: 15,
        gap: 0.05,
        padding_vertical: 0.1,
        padding_horizontal: 0.1,
        window_width: None,
        window_height: None,
        window_opacity: 1.0,
        opacity_rules: &[nth(11, 0.5), nth(5, 1.0)],
        hidden_every: &[],
        highlight_every: None,
    },
    // style3: tall arched windows with gaps in the facade
    StyleLayout {
        columns: 5,
        gap: 1.0,
        padding_vertical: 1.0,
        padding_horizontal: 1.0,
        window_width: None,
        window_height: Some(CITY_HEIGHT / 22.0),
        window_opacity: 1.0,
        opacity_rules: &[],
        hidden_every: &[13],
        highlight_every: None,
    },
    // style4: tight grid with a vertical seam of missing panes
    StyleLayout {
        columns: 22,
        gap: 0.0,
        padding_vertical: 1.1,
        padding_horizontal: 0.8,
        window_width: None,
        window_height: None,
        window_opacity: 1.0,
        opacity_rules: &[],
        hidden_every: &[11, 12],
        highlight_every: None,
    },
    // style5
    StyleLayout {
        columns: 11,
        gap: 0.05,
        padding_vertical: 0.8,
        padding_horizontal: 0.2,
        window_width: None,
        window_height: None,
        window_opacity: 0.8,
        opacity_rules: &[nth(5, 1.0), nth(27, 0.5)],
        hidden_every: &[],
        highlight_every: None,
    },
    // style6
    StyleLayout {
        columns: 7,
        gap: 0.1,
        padding_vertical: 0.5,
        padding_horizontal: 0.4,
        window_width: None,
        window_height: None,
        window_opacity: 1.0,
        opacity_rules: &[],
        hidden_every: &[],
        highlight_every: None,
    },
    // style7: shallow ribbon windows
    StyleLayout {
        columns: 30,
        gap: 0.3,
        padding_vertical: 1.0,
        padding_horizontal: 1.0,
        window_width: None,
        window_height: Some(CITY_HEIGHT / 28.0),
        window_opacity: 1.0,
        opacity_rules: &[nth(5, 0.5)],
        hidden_every: &[],
        highlight_every: None,
    },
    // style8: mixed facade with the occasional blanked or highlighted pane
    StyleLayout {
        columns: 8,
        gap: 0.1,
        padding_vertical: 0.5,
        padding_horizontal: 1.0,
        window_width: None,
        window_height: None,
        window_opacity: 1.0,
        opacity_rules: &[nth(3, 0.5), nth(27, 0.5)],
        hidden_every: &[13],
        highlight_every: Some(35),
    },
    // style9
    StyleLayout {
        columns: 6,
        gap: 0.05,
        padding_vertical: 1.0,
        padding_horizontal: 1.0,
        window_width: None,
        window_height: None,
        window_opacity: 1.0,
        opacity_rules: &[],
        hidden_every: &[],
        highlight_every: None,
    },
    // style10
    StyleLayout {
        columns: 18,
        gap: 0.05,
        padding_vertical: 0.5,
        padding_horizontal: 1.0,
        window_width: None,
        window_height: None,
        window_opacity: 0.7,
        opacity_rules: &[nth(3, 1.0)],
        hidden_every: &[35],
        highlight_every: None,
    },
    // style11
    StyleLayout {
        columns: 13,
        gap: 0.05,
        padding_vertical: 0.5,
        padding_horizontal: 0.2,
        window_width: None,
        window_height: None,
        window_opacity: 1.0,
        opacity_rules: &[],
        hidden_every: &[],
        highlight_every: None,
    },
];

impl StyleVariant {
    pub fn layout(self) -> &'static StyleLayout {
        &STYLE_LAYOUTS[self as usize]
    }
}
