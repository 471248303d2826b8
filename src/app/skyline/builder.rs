use super::palette::{select_palette, WINDOW_COLORS};
use super::rng::DeterministicRandom;
use super::scene::{
    Building, Row, Scene, Window, CITY_HEIGHT, CITY_WIDTH, MINIMUM_BUILDING_HEIGHT, ROW_COUNT,
};
use super::style::select_style;

/// Assemble a full scene from the generator's current position.
///
/// The draw order below is a compatibility contract: palette first, then per
/// row one building-count draw, then per building the color, height divisor,
/// style, window count and window color draws. Moving any of them changes
/// every scene a given seed produces.
pub fn build_scene(rng: &mut DeterministicRandom) -> Scene {
    let palette = select_palette(rng);
    let row_stride = 100.0 / ROW_COUNT as f64;

    let mut rows = Vec::with_capacity(ROW_COUNT);

    for r in 1..=ROW_COUNT {
        let vertical_offset_percent = -row_stride + row_stride * r as f64;

        let building_count_bound =
            rng.next_range((ROW_COUNT + ROW_COUNT / 3) as i32, (ROW_COUNT * 2) as i32);

        let mut buildings = Vec::with_capacity(building_count_bound as usize - 1);

        // counter starts at 1 and runs while strictly below the bound, so a
        // bound of n yields n - 1 buildings
        for _ in 1..building_count_bound {
            let color = palette[rng.next_range(0, 5) as usize];

            let height_divisor = rng.next_range(3, 10);
            let height = MINIMUM_BUILDING_HEIGHT + MINIMUM_BUILDING_HEIGHT / f64::from(height_divisor);

            let style = select_style(rng);

            let window_count = rng.next_range(70, 90);
            let window_color = WINDOW_COLORS[rng.next_range(0, 5) as usize];

            buildings.push(Building {
                style,
                color,
                height,
                windows: vec![Window {
                    color: window_color,
                }; window_count as usize],
            });
        }

        rows.push(Row {
            vertical_offset_percent,
            buildings,
        });
    }

    Scene {
        width: CITY_WIDTH,
        height: CITY_HEIGHT,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::skyline::palette::PALETTES;

    #[test]
    fn scenes_always_hold_eight_rows() {
        for seed in [0, 1, 42, 0xFFFF_FFFF] {
            let scene = build_scene(&mut DeterministicRandom::new(seed));
            assert_eq!(scene.rows.len(), ROW_COUNT);
        }
    }

    #[test]
    fn row_offsets_step_from_zero_to_87_5() {
        let scene = build_scene(&mut DeterministicRandom::new(7));

        assert_eq!(scene.rows[0].vertical_offset_percent, 0.0);
        assert_eq!(scene.rows[7].vertical_offset_percent, 87.5);

        for (index, row) in scene.rows.iter().enumerate() {
            assert_eq!(row.vertical_offset_percent, 12.5 * index as f64);
        }
    }

    #[test]
    fn building_and_window_counts_stay_in_bounds() {
        for seed in 0..200u32 {
            let scene = build_scene(&mut DeterministicRandom::new(seed));

            for row in &scene.rows {
                // bound in [10, 16] minus one
                assert!((9..=15).contains(&row.buildings.len()));

                for building in &row.buildings {
                    assert!((70..=90).contains(&building.windows.len()));
                    assert!(building.height >= MINIMUM_BUILDING_HEIGHT);
                    assert!(building.height <= MINIMUM_BUILDING_HEIGHT * 4.0 / 3.0);
                }
            }
        }
    }

    #[test]
    fn every_building_color_comes_from_the_scene_palette() {
        let mut rng = DeterministicRandom::new(1234);
        let palette = *select_palette(&mut rng.clone());
        let scene = build_scene(&mut rng);

        assert!(PALETTES.contains(&palette));

        for row in &scene.rows {
            for building in &row.buildings {
                assert!(palette.contains(&building.color));
            }
        }
    }

    #[test]
    fn windows_of_one_building_share_a_color() {
        let scene = build_scene(&mut DeterministicRandom::new(88));

        for row in &scene.rows {
            for building in &row.buildings {
                let first = building.windows[0].color;
                assert!(building.windows.iter().all(|w| w.color == first));
            }
        }
    }
}
