//! Heuristic week-by-week plan sized to a learner's weekly minute budget.

use crate::catalog::{ENGLISH, FocusArea, TextCatalog};
use crate::error::{PlanError, PlanResult};
use crate::item::ScheduledItem;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MINUTES_PER_WEEK: i64 = 180;
pub const DEFAULT_FOCUS_AREA: &str = "balanced";
pub const DEFAULT_WEEKS: u32 = 6;
/// Longest plan the CLI and HTTP layers accept. The generator itself takes
/// any week count.
pub const MAX_WEEKS: u32 = 52;

const STUDY_DAYS_PER_WEEK: i64 = 5;
const MIN_DAILY_MINUTES: i64 = 20;
const MAX_DAILY_MINUTES: i64 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveOptions {
    pub minutes_per_week: i64,
    pub focus_area: String,
    pub weeks: u32,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            minutes_per_week: DEFAULT_MINUTES_PER_WEEK,
            focus_area: DEFAULT_FOCUS_AREA.to_string(),
            weeks: DEFAULT_WEEKS,
        }
    }
}

impl AdaptiveOptions {
    pub fn new(minutes_per_week: i64, focus_area: impl Into<String>, weeks: u32) -> Self {
        Self {
            minutes_per_week,
            focus_area: focus_area.into(),
            weeks,
        }
    }

    pub fn focus(&self) -> FocusArea {
        FocusArea::from_label(&self.focus_area)
    }
}

/// Checks a caller-supplied week count against `1..=MAX_WEEKS`.
pub fn check_weeks(weeks: u32) -> PlanResult<u32> {
    if weeks == 0 || weeks > MAX_WEEKS {
        return Err(PlanError::invalid_argument(format!(
            "weeks must be between 1 and {MAX_WEEKS} (got {weeks})"
        )));
    }
    Ok(weeks)
}

/// Per-session minutes: a fifth of the weekly budget, kept within 20..=90.
pub fn daily_minutes(minutes_per_week: i64) -> PlanResult<u32> {
    if minutes_per_week <= 0 {
        return Err(PlanError::invalid_argument(format!(
            "available minutes per week must be positive (got {minutes_per_week})"
        )));
    }
    let daily = (minutes_per_week / STUDY_DAYS_PER_WEEK).clamp(MIN_DAILY_MINUTES, MAX_DAILY_MINUTES);
    Ok(daily as u32)
}

pub fn generate_adaptive_schedule(
    minutes_per_week: i64,
    focus_area: &str,
    weeks: u32,
) -> PlanResult<Vec<ScheduledItem>> {
    adaptive_schedule(
        &ENGLISH,
        &AdaptiveOptions::new(minutes_per_week, focus_area, weeks),
    )
}

pub fn adaptive_schedule(
    catalog: &TextCatalog,
    options: &AdaptiveOptions,
) -> PlanResult<Vec<ScheduledItem>> {
    let daily = daily_minutes(options.minutes_per_week)?;
    let focus = options.focus();
    let focus_label = focus_module_label(&options.focus_area, focus);
    let goal = catalog.weekly_goal(focus, daily);

    let mut items = Vec::with_capacity(options.weeks.min(MAX_WEEKS) as usize * 5);
    let mut lesson_number = 1u32;

    for week in 1..=options.weeks {
        // Levels keep climbing past the fixed curriculum for long plans.
        let level = 1 + (week - 1) / 2;
        let module = format!("L{level}-{lesson_number}");

        let sessions = [
            (catalog.on_demand_lesson, module.clone(), daily),
            (catalog.quiz, format!("{module}-Quiz"), daily.saturating_sub(10).max(20)),
            (catalog.ai_review, format!("{module}-Review"), daily.min(30)),
            (catalog.focus_practice, format!("{module}-{focus_label}"), daily),
            (catalog.integrated_check, format!("{module}-Check"), (daily + 10).min(60)),
        ];
        for (day, (activity, module, minutes)) in (1u32..).zip(sessions) {
            items.push(ScheduledItem::new(
                level,
                week,
                day,
                activity,
                module,
                minutes,
                goal.as_str(),
            ));
        }

        lesson_number += 1;
    }

    debug!(
        minutes_per_week = options.minutes_per_week,
        focus = %focus,
        weeks = options.weeks,
        daily,
        items = items.len(),
        "built adaptive schedule"
    );
    Ok(items)
}

/// Capitalized form of the requested focus for module ids. Blank input uses
/// the resolved focus area's name.
fn focus_module_label(raw: &str, resolved: FocusArea) -> String {
    let trimmed = raw.trim();
    let source = if trimmed.is_empty() {
        resolved.as_str()
    } else {
        trimmed
    };
    capitalize(source)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("reading"), "Reading");
        assert_eq!(capitalize("EXAM"), "Exam");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn week_count_is_bounded() {
        assert_eq!(check_weeks(1), Ok(1));
        assert_eq!(check_weeks(MAX_WEEKS), Ok(MAX_WEEKS));
        assert!(check_weeks(0).is_err());
        assert!(check_weeks(u32::MAX).is_err());
    }

    #[test]
    fn blank_focus_uses_resolved_name() {
        assert_eq!(focus_module_label("  ", FocusArea::Balanced), "Balanced");
        assert_eq!(focus_module_label("karaoke", FocusArea::Balanced), "Karaoke");
    }
}
