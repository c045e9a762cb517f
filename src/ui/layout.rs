//! Two-row grid: the main clock spans the top two thirds, the lower clocks
//! share the bottom third in equal columns.

use crate::config::LOWER_CLOCKS;
use eframe::egui::{Rect, pos2};

const MAIN_ROW_WEIGHT: f32 = 2.0;
const LOWER_ROW_WEIGHT: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCells {
    pub main: Rect,
    pub lower: [Rect; LOWER_CLOCKS],
}

pub fn grid(area: Rect) -> GridCells {
    let split_y =
        area.top() + area.height() * MAIN_ROW_WEIGHT / (MAIN_ROW_WEIGHT + LOWER_ROW_WEIGHT);
    let main = Rect::from_min_max(area.min, pos2(area.right(), split_y));

    let column = area.width() / LOWER_CLOCKS as f32;
    let lower = std::array::from_fn(|i| {
        let left = area.left() + column * i as f32;
        Rect::from_min_max(pos2(left, split_y), pos2(left + column, area.bottom()))
    });

    GridCells { main, lower }
}

/// Top edge of each line when lines of `heights` are stacked with `padding`
/// above and below each one, the whole stack centered vertically in `cell`.
pub fn stack_tops(cell: Rect, heights: &[f32], padding: f32) -> Vec<f32> {
    let total: f32 = heights.iter().map(|h| h + 2.0 * padding).sum();
    let mut y = cell.center().y - total / 2.0;
    heights
        .iter()
        .map(|h| {
            let top = y + padding;
            y += h + 2.0 * padding;
            top
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn rows_split_two_to_one() {
        let cells = grid(Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 900.0)));
        assert_eq!(cells.main, Rect::from_min_max(pos2(0.0, 0.0), pos2(1200.0, 600.0)));
        for (i, cell) in cells.lower.iter().enumerate() {
            assert_eq!(cell.width(), 300.0);
            assert_eq!(cell.height(), 300.0);
            assert_eq!(cell.left(), 300.0 * i as f32);
            assert_eq!(cell.top(), 600.0);
        }
    }

    #[test]
    fn grid_respects_offset_area() {
        let cells = grid(Rect::from_min_size(pos2(100.0, 30.0), vec2(400.0, 300.0)));
        assert_eq!(cells.main.min, pos2(100.0, 30.0));
        assert_eq!(cells.lower[3].max, pos2(500.0, 330.0));
    }

    #[test]
    fn stack_is_centered() {
        let cell = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 200.0));
        // Lines of 20 and 40 with 10 padding: stack is 100 tall, starts at 50.
        assert_eq!(stack_tops(cell, &[20.0, 40.0], 10.0), vec![60.0, 100.0]);
    }
}
