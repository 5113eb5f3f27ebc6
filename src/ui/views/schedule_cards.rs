//! Schedule rendering orchestration.
//!
//! `plan_cards` is the pure half: it derives the shared grid geometry once,
//! resolves the candidate slot once, and produces one op list per person.
//! `ScheduleCards::show` replays the plan into the UI each frame; results
//! only change on user action, so rebuilding the op lists beats caching
//! surfaces between frames.

use egui::{Rounding, Sense, Stroke};

use super::compositor::{self, PaintOp};
use super::geometry::{CellMetrics, GridGeometry};
use super::palette::GridPalette;
use crate::models::grid::GridConfig;
use crate::models::schedule::{CandidateSlot, PersonSchedules};
use crate::ui::theme::ScheduleTheme;

/// One planned card: a person, the shared surface size, and the ops to
/// replay onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleCard {
    pub person: String,
    pub size: egui::Vec2,
    pub ops: Vec<PaintOp>,
}

/// Plan one card per person. Every call fully replaces prior output; an
/// empty schedule map plans zero cards without error.
pub fn plan_cards(
    schedules: &PersonSchedules,
    candidate: Option<&CandidateSlot>,
    config: &GridConfig,
    metrics: CellMetrics,
    palette: &GridPalette,
) -> Vec<ScheduleCard> {
    let geometry = GridGeometry::new(config, metrics);
    let size = geometry.card_size();
    let slot_interval = candidate.map(|slot| slot.interval());

    schedules
        .iter()
        .map(|(person, busy)| {
            let highlight = match (candidate, slot_interval.as_ref()) {
                (Some(slot), Some(interval)) if slot.is_eligible(person) => Some(interval),
                _ => None,
            };
            ScheduleCard {
                person: person.clone(),
                size,
                ops: compositor::compose_card(&geometry, busy, highlight, palette),
            }
        })
        .collect()
}

pub struct ScheduleCards;

impl ScheduleCards {
    pub fn show(
        ui: &mut egui::Ui,
        schedules: &PersonSchedules,
        candidate: Option<&CandidateSlot>,
        config: &GridConfig,
        theme: &ScheduleTheme,
    ) {
        let palette = GridPalette::from_theme(theme);
        let cards = plan_cards(schedules, candidate, config, CellMetrics::default(), &palette);

        ui.horizontal_wrapped(|ui| {
            for card in &cards {
                egui::Frame::none()
                    .fill(theme.card_background)
                    .stroke(Stroke::new(1.0, theme.card_border))
                    .rounding(Rounding::same(6.0))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(format!("Schedule for {}", card.person))
                                    .size(14.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                            ui.add_space(4.0);
                            let (rect, _) = ui.allocate_exact_size(card.size, Sense::hover());
                            compositor::paint(ui.painter(), rect.min, &card.ops);
                        });
                    });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Interval;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

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

    fn candidate(eligible: &[&str]) -> CandidateSlot {
        CandidateSlot {
            day: "Monday".to_string(),
            start_hour: 8.0,
            duration_hours: 2.0,
            eligible: eligible.iter().map(|p| p.to_string()).collect::<BTreeSet<_>>(),
            available: eligible.len(),
            total: 3,
        }
    }

    fn has_highlight(card: &ScheduleCard, palette: &GridPalette) -> bool {
        card.ops.iter().any(
            |op| matches!(op, PaintOp::FillRect { color, .. } if *color == palette.highlight_fill),
        )
    }

    #[test]
    fn test_empty_schedules_plan_zero_cards() {
        let config = workweek_config();
        let cards = plan_cards(
            &PersonSchedules::new(),
            None,
            &config,
            CellMetrics::default(),
            &palette(),
        );
        assert!(cards.is_empty());
    }

    #[test]
    fn test_highlight_only_for_eligible_persons() {
        let config = workweek_config();
        let mut schedules = PersonSchedules::new();
        schedules.insert("Ana".to_string(), vec![Interval::new("Monday", 8.0, 10.0)]);
        schedules.insert("Luis".to_string(), vec![]);
        schedules.insert("Marta".to_string(), vec![Interval::new("Friday", 9.0, 10.0)]);

        let slot = candidate(&["Ana", "Marta"]);
        let cards = plan_cards(
            &schedules,
            Some(&slot),
            &config,
            CellMetrics::default(),
            &palette(),
        );

        let by_name: std::collections::BTreeMap<&str, &ScheduleCard> =
            cards.iter().map(|c| (c.person.as_str(), c)).collect();
        assert!(has_highlight(by_name["Ana"], &palette()));
        assert!(!has_highlight(by_name["Luis"], &palette()));
        assert!(has_highlight(by_name["Marta"], &palette()));
    }

    #[test]
    fn test_no_candidate_means_no_highlight_anywhere() {
        let config = workweek_config();
        let mut schedules = PersonSchedules::new();
        schedules.insert("Ana".to_string(), vec![Interval::new("Monday", 8.0, 10.0)]);
        schedules.insert("Luis".to_string(), vec![Interval::new("Tuesday", 9.0, 11.0)]);

        let cards = plan_cards(&schedules, None, &config, CellMetrics::default(), &palette());
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|card| !has_highlight(card, &palette())));
    }

    #[test]
    fn test_all_cards_share_one_surface_size() {
        let config = workweek_config();
        let mut schedules = PersonSchedules::new();
        schedules.insert("Ana".to_string(), vec![Interval::new("Monday", 8.0, 10.0)]);
        schedules.insert("Luis".to_string(), vec![]);

        let cards = plan_cards(&schedules, None, &config, CellMetrics::default(), &palette());
        assert_eq!(cards[0].size, cards[1].size);
    }

    #[test]
    fn test_planning_is_idempotent() {
        let config = workweek_config();
        let mut schedules = PersonSchedules::new();
        schedules.insert("Ana".to_string(), vec![Interval::new("Monday", 8.0, 10.0)]);
        let slot = candidate(&["Ana"]);

        let first = plan_cards(
            &schedules,
            Some(&slot),
            &config,
            CellMetrics::default(),
            &palette(),
        );
        let second = plan_cards(
            &schedules,
            Some(&slot),
            &config,
            CellMetrics::default(),
            &palette(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_card_order_is_deterministic() {
        let config = workweek_config();
        let mut schedules = PersonSchedules::new();
        schedules.insert("Zoe".to_string(), vec![]);
        schedules.insert("Ana".to_string(), vec![]);

        let cards = plan_cards(&schedules, None, &config, CellMetrics::default(), &palette());
        let names: Vec<&str> = cards.iter().map(|c| c.person.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Zoe"]);
    }
}
