use serde::{Deserialize, Serialize};

/// Column names shared by the text table, the worksheet export and the
/// calendar view, in display order.
pub const COLUMNS: [&str; 7] = [
    "Level",
    "Week",
    "Day",
    "Activity",
    "Module",
    "Duration(min)",
    "Goal",
];

/// One study session in a generated plan.
///
/// Items are produced by the generators and never modified afterwards; two
/// items are the same item when all seven fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledItem {
    pub level: u32,
    pub week: u32,
    /// Label of the form `Week<N>-Day<M>`.
    pub day: String,
    pub activity: String,
    pub module: String,
    pub duration_minutes: u32,
    pub goal: String,
}

impl ScheduledItem {
    pub fn new(
        level: u32,
        week: u32,
        day_of_week: u32,
        activity: impl Into<String>,
        module: impl Into<String>,
        duration_minutes: u32,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            level,
            week,
            day: day_label(week, day_of_week),
            activity: activity.into(),
            module: module.into(),
            duration_minutes,
            goal: goal.into(),
        }
    }

    /// Field values as text, in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.level.to_string(),
            self.week.to_string(),
            self.day.clone(),
            self.activity.clone(),
            self.module.clone(),
            self.duration_minutes.to_string(),
            self.goal.clone(),
        ]
    }

    /// Column name to cell value pairs, used by the exporters.
    pub fn to_row(&self) -> Vec<(&'static str, String)> {
        COLUMNS.into_iter().zip(self.cells()).collect()
    }
}

pub fn day_label(week: u32, day_of_week: u32) -> String {
    format!("Week{week}-Day{day_of_week}")
}
