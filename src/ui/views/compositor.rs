//! Layer compositor for one schedule card.
//!
//! Produces a fixed-order list of paint operations: background, grid lines
//! and labels, busy blocks, candidate highlight. The list is plain data and
//! is replayed onto an `egui::Painter`, so composition stays deterministic
//! and testable without a GUI context.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use super::geometry::GridGeometry;
use super::palette::GridPalette;
use crate::models::grid::hour_label;
use crate::models::schedule::Interval;

pub const DAY_LABEL_SIZE: f32 = 12.0;
pub const HOUR_LABEL_SIZE: f32 = 10.0;
const GRID_LINE_WIDTH: f32 = 1.0;
const HIGHLIGHT_OUTLINE_WIDTH: f32 = 2.0;

/// One drawing operation, in card-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Compose the paint operations for one person's card.
///
/// Layer order is fixed: free background, grid and labels, busy intervals,
/// then the optional candidate highlight so it is never occluded. Intervals
/// that cannot be placed (unknown day, misaligned or out-of-range hours)
/// are skipped with a warning and leave every other operation untouched.
pub fn compose_card(
    geometry: &GridGeometry<'_>,
    busy: &[Interval],
    highlight: Option<&Interval>,
    palette: &GridPalette,
) -> Vec<PaintOp> {
    let m = geometry.metrics();
    let config = geometry.config();
    let grid_stroke = Stroke::new(GRID_LINE_WIDTH, palette.grid_line);
    let card = geometry.card_size();
    let grid_bottom = m.header_height + geometry.grid_height();

    let mut ops = Vec::new();

    // 1. Background: any hour not explicitly busy reads as free
    ops.push(PaintOp::FillRect {
        rect: Rect::from_min_size(
            Pos2::new(m.time_col_width, m.header_height),
            Vec2::new(geometry.grid_width(), geometry.grid_height()),
        ),
        color: palette.free_fill,
    });

    // 2. Day headers, hour labels, grid lines
    for (column, day) in config.days.iter().enumerate() {
        ops.push(PaintOp::Text {
            pos: Pos2::new(
                m.time_col_width + column as f32 * m.cell_width + m.cell_width / 2.0,
                m.header_height / 2.0,
            ),
            anchor: Align2::CENTER_CENTER,
            text: day.clone(),
            size: DAY_LABEL_SIZE,
            color: palette.header_text,
        });
    }
    for column in 0..=config.days.len() {
        let x = m.time_col_width + column as f32 * m.cell_width;
        ops.push(PaintOp::Line {
            from: Pos2::new(x, 0.0),
            to: Pos2::new(x, grid_bottom),
            stroke: grid_stroke,
        });
    }
    for row in 0..=geometry.num_rows() {
        let y = m.header_height + row as f32 * m.cell_height;
        let hour = config.day_start_hour + row as f64 * config.time_increment;
        ops.push(PaintOp::Text {
            pos: Pos2::new(m.time_col_width - 5.0, y + 2.0),
            anchor: Align2::RIGHT_TOP,
            text: hour_label(hour),
            size: HOUR_LABEL_SIZE,
            color: palette.hour_text,
        });
        ops.push(PaintOp::Line {
            from: Pos2::new(0.0, y),
            to: Pos2::new(card.x, y),
            stroke: grid_stroke,
        });
    }

    // 3. Busy blocks
    for interval in busy {
        match geometry.rect_for_interval(interval) {
            Ok(rect) => ops.push(PaintOp::FillRect {
                rect,
                color: palette.busy_fill,
            }),
            Err(err) => log::warn!("Skipping busy interval on {:?}: {}", interval.day, err),
        }
    }

    // 4. Candidate highlight, painted last
    if let Some(slot) = highlight {
        match geometry.rect_for_interval(slot) {
            Ok(rect) => {
                ops.push(PaintOp::FillRect {
                    rect,
                    color: palette.highlight_fill,
                });
                ops.push(PaintOp::StrokeRect {
                    rect,
                    stroke: Stroke::new(HIGHLIGHT_OUTLINE_WIDTH, palette.highlight_outline),
                });
            }
            Err(err) => log::warn!("Skipping candidate slot highlight: {}", err),
        }
    }

    ops
}

/// Replay composed operations onto a painter, translated to the card's
/// allocated origin.
pub fn paint(painter: &Painter, origin: Pos2, ops: &[PaintOp]) {
    let offset = origin.to_vec2();
    for op in ops {
        match op {
            PaintOp::FillRect { rect, color } => {
                painter.rect_filled(rect.translate(offset), 0.0, *color);
            }
            PaintOp::StrokeRect { rect, stroke } => {
                painter.rect_stroke(rect.translate(offset), 0.0, *stroke);
            }
            PaintOp::Line { from, to, stroke } => {
                painter.line_segment([*from + offset, *to + offset], *stroke);
            }
            PaintOp::Text {
                pos,
                anchor,
                text,
                size,
                color,
            } => {
                painter.text(
                    *pos + offset,
                    *anchor,
                    text.clone(),
                    FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::GridConfig;
    use crate::ui::theme::ScheduleTheme;
    use crate::ui::views::geometry::CellMetrics;
    use pretty_assertions::assert_eq;

    fn workweek_config() -> GridConfig {
        GridConfig::new(
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            8.0,
            18.0,
            0.5,
        )
        .unwrap()
    }

    fn palette() -> GridPalette {
        GridPalette::from_theme(&ScheduleTheme::light())
    }

    fn fills_with(ops: &[PaintOp], color: Color32) -> Vec<&PaintOp> {
        ops.iter()
            .filter(|op| matches!(op, PaintOp::FillRect { color: c, .. } if *c == color))
            .collect()
    }

    #[test]
    fn test_background_is_first_operation() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let ops = compose_card(&geometry, &[], None, &palette());
        assert!(
            matches!(&ops[0], PaintOp::FillRect { color, .. } if *color == palette().free_fill)
        );
    }

    #[test]
    fn test_hour_labels_cover_both_grid_edges() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let ops = compose_card(&geometry, &[], None, &palette());

        let labels: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, size, .. } if *size == HOUR_LABEL_SIZE => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();

        assert_eq!(labels.len(), 21);
        assert_eq!(labels.first(), Some(&"08:00"));
        assert!(labels.contains(&"08:30"));
        assert_eq!(labels.last(), Some(&"18:00"));
    }

    #[test]
    fn test_busy_interval_paints_after_grid() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let busy = vec![Interval::new("Monday", 8.0, 10.0)];
        let ops = compose_card(&geometry, &busy, None, &palette());

        let busy_index = ops
            .iter()
            .position(|op| matches!(op, PaintOp::FillRect { color, .. } if *color == palette().busy_fill))
            .unwrap();
        let last_line_index = ops
            .iter()
            .rposition(|op| matches!(op, PaintOp::Line { .. }))
            .unwrap();
        assert!(busy_index > last_line_index);
    }

    #[test]
    fn test_unknown_day_interval_is_isolated() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let good = Interval::new("Tuesday", 9.0, 11.0);
        let bad = Interval::new("Caturday", 9.0, 11.0);

        let with_bad = compose_card(
            &geometry,
            &[bad, good.clone()],
            None,
            &palette(),
        );
        let without_bad = compose_card(&geometry, &[good], None, &palette());

        // The malformed interval contributes nothing and disturbs nothing
        assert_eq!(with_bad, without_bad);
    }

    #[test]
    fn test_composition_is_deterministic() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let busy = vec![
            Interval::new("Monday", 8.0, 10.0),
            Interval::new("Friday", 14.0, 16.0),
        ];
        let slot = Interval::new("Wednesday", 10.0, 12.0);

        let first = compose_card(&geometry, &busy, Some(&slot), &palette());
        let second = compose_card(&geometry, &busy, Some(&slot), &palette());
        assert_eq!(first, second);
    }

    #[test]
    fn test_highlight_is_always_last_with_outline() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let busy = vec![Interval::new("Monday", 8.0, 10.0)];
        let slot = Interval::new("Monday", 8.0, 10.0);
        let ops = compose_card(&geometry, &busy, Some(&slot), &palette());

        let n = ops.len();
        let highlight_rect = match &ops[n - 2] {
            PaintOp::FillRect { rect, color } => {
                assert_eq!(*color, palette().highlight_fill);
                *rect
            }
            other => panic!("expected highlight fill, got {:?}", other),
        };
        match &ops[n - 1] {
            PaintOp::StrokeRect { rect, stroke } => {
                assert_eq!(*rect, highlight_rect);
                assert_eq!(stroke.color, palette().highlight_outline);
                assert_eq!(stroke.width, HIGHLIGHT_OUTLINE_WIDTH);
            }
            other => panic!("expected highlight outline, got {:?}", other),
        }

        // The busy block underneath covers the same cells and paints earlier
        let busy_ops = fills_with(&ops, palette().busy_fill);
        assert_eq!(busy_ops.len(), 1);
        match busy_ops[0] {
            PaintOp::FillRect { rect, .. } => assert_eq!(*rect, highlight_rect),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_out_of_bounds_highlight_is_skipped() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let slot = Interval::new("Monday", 6.0, 8.0);
        let ops = compose_card(&geometry, &[], Some(&slot), &palette());

        assert!(fills_with(&ops, palette().highlight_fill).is_empty());
        assert!(!ops.is_empty());
    }

    #[test]
    fn test_no_highlight_without_candidate() {
        let config = workweek_config();
        let geometry = GridGeometry::new(&config, CellMetrics::default());
        let busy = vec![Interval::new("Monday", 8.0, 10.0)];
        let ops = compose_card(&geometry, &busy, None, &palette());

        assert!(fills_with(&ops, palette().highlight_fill).is_empty());
        assert!(!ops
            .iter()
            .any(|op| matches!(op, PaintOp::StrokeRect { .. })));
    }
}
