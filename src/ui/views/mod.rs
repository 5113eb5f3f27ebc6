// Schedule grid rendering: geometry, palette, compositor, and card views

pub mod compositor;
pub mod geometry;
pub mod palette;
pub mod schedule_cards;

pub use compositor::{compose_card, paint, PaintOp};
pub use geometry::{CellMetrics, GeometryError, GridGeometry};
pub use palette::GridPalette;
pub use schedule_cards::{plan_cards, ScheduleCard, ScheduleCards};
