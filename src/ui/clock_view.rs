//! Paints one clock unit into its grid cell.

use crate::engine::clock::ClockUnit;
use crate::types::TextStyle;
use crate::ui::fonts::FontBook;
use crate::ui::layout::stack_tops;
use eframe::egui::{Painter, Rect, pos2};

/// Space above and below each line of text.
pub const INNER_PADDING: f32 = 10.0;

/// Horizontal shift of the second pass that overstrikes bold text.
pub fn bold_offset(size: f32) -> f32 {
    (size / 30.0).max(1.0)
}

/// City label, then the date when the unit has one, then the time; each line
/// centered horizontally.
pub fn paint_unit(painter: &Painter, cell: Rect, unit: &ClockUnit, fonts: &FontBook) {
    let style = unit.style();
    let mut lines: Vec<(&str, &TextStyle)> = vec![(unit.label(), &style.city)];
    if let (Some(text), Some(date)) = (unit.date_text(), &style.date) {
        lines.push((text, &date.style));
    }
    lines.push((unit.time_text(), &style.time));

    let galleys: Vec<_> = lines
        .into_iter()
        .map(|(text, text_style)| {
            let galley = painter.layout_no_wrap(
                text.to_owned(),
                fonts.font_id(text_style),
                text_style.color,
            );
            (galley, text_style)
        })
        .collect();
    let heights: Vec<f32> = galleys.iter().map(|(g, _)| g.size().y).collect();

    for ((galley, text_style), top) in galleys.into_iter().zip(stack_tops(cell, &heights, INNER_PADDING)) {
        let left = cell.center().x - galley.size().x / 2.0;
        if text_style.bold {
            let shift = bold_offset(text_style.size);
            let left = left - shift / 2.0;
            painter.galley(pos2(left + shift, top), galley.clone(), text_style.color);
            painter.galley(pos2(left, top), galley, text_style.color);
        } else {
            painter.galley(pos2(left, top), galley, text_style.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_offset_scales_with_size() {
        assert_eq!(bold_offset(12.0), 1.0);
        assert_eq!(bold_offset(100.0), 100.0 / 30.0);
        assert!(bold_offset(200.0) > bold_offset(100.0));
    }
}
