// Test fixtures - reusable test data
// Shared grid configurations and service response payloads

use slot_finder::models::grid::GridConfig;

/// Monday-Friday, 08:00-18:00 in half-hour rows (20 rows).
pub fn workweek_config() -> GridConfig {
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

/// Service response where Ana's only busy block exactly coincides with the
/// found slot and she is the only eligible person.
pub fn ana_overlap_response() -> &'static str {
    r#"{
        "found_slot": {
            "day": "Monday",
            "start_time": "08:00",
            "end_time": "10:00",
            "num_professors_free": 1,
            "total_professors": 2,
            "professors_available_in_best_slot": ["Ana"]
        },
        "slot_duration": 2.0,
        "fitness_plot_url": "/static/fitness_plot.png",
        "professor_schedules": {
            "Ana": [{"day": "Monday", "start_hour": 8.0, "end_hour": 10.0}],
            "Luis": [{"day": "Tuesday", "start_hour": 9.0, "end_hour": 11.0}]
        },
        "days_of_week": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "possible_start_times": ["08:00", "08:30", "09:00"],
        "start_hour_day": 8.0,
        "end_hour_day": 18.0,
        "increment_time": 0.5
    }"#
}

/// Same grid, no solution and nobody scheduled.
pub fn empty_response() -> &'static str {
    r#"{
        "slot_duration": 2.0,
        "professor_schedules": {},
        "days_of_week": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "start_hour_day": 8.0,
        "end_hour_day": 18.0,
        "increment_time": 0.5
    }"#
}

/// Schedules present but the search found no common slot.
pub fn no_solution_response() -> &'static str {
    r#"{
        "found_slot": {},
        "slot_duration": 2.0,
        "professor_schedules": {
            "Ana": [{"day": "Monday", "start_hour": 8.0, "end_hour": 10.0}],
            "Luis": [{"day": "Tuesday", "start_hour": 9.0, "end_hour": 11.0}]
        },
        "days_of_week": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "start_hour_day": 8.0,
        "end_hour_day": 18.0,
        "increment_time": 0.5
    }"#
}
