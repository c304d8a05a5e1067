//! Fixed three-level curriculum.

use crate::catalog::{ENGLISH, TextCatalog};
use crate::item::ScheduledItem;
use tracing::debug;

const BLOCKS_PER_LEVEL: u32 = 3;
const SESSION_MINUTES: u32 = 30;
const LEVEL_UP_TEST_MINUTES: u32 = 60;
const LEVEL_UP_TEST_DAY: u32 = 7;

/// `(level, start_week, start_lesson)` for each level of the mockup plan.
const FIXED_LEVELS: [(u32, u32, u32); 3] = [(1, 1, 1), (2, 3, 4), (3, 5, 7)];

/// Builds one level: three lesson/quiz/review blocks followed by the
/// level-up test, ten items in total.
pub fn generate_level_block(level: u32, start_week: u32, start_lesson: u32) -> Vec<ScheduledItem> {
    level_block(&ENGLISH, level, start_week, start_lesson)
}

pub fn level_block(
    catalog: &TextCatalog,
    level: u32,
    start_week: u32,
    start_lesson: u32,
) -> Vec<ScheduledItem> {
    let goal = catalog.level_goal(level);
    let mut items = Vec::with_capacity((BLOCKS_PER_LEVEL * 3 + 1) as usize);
    let mut lesson_number = start_lesson;
    let mut week = start_week;

    for block_index in 0..BLOCKS_PER_LEVEL {
        week = start_week + block_index / 2;
        // Two blocks per week: days 1-3 and 4-6.
        let day_base = (block_index % 2) * 3;
        let module = format!("L{level}-{lesson_number}");

        items.push(ScheduledItem::new(
            level,
            week,
            day_base + 1,
            catalog.on_demand_lesson,
            module.clone(),
            SESSION_MINUTES,
            goal,
        ));
        items.push(ScheduledItem::new(
            level,
            week,
            day_base + 2,
            catalog.quiz,
            module.clone(),
            SESSION_MINUTES,
            goal,
        ));
        items.push(ScheduledItem::new(
            level,
            week,
            day_base + 3,
            catalog.buffer_review,
            format!("{module}{}", catalog.review_suffix),
            SESSION_MINUTES,
            goal,
        ));

        lesson_number += 1;
    }

    items.push(ScheduledItem::new(
        level,
        week,
        LEVEL_UP_TEST_DAY,
        catalog.level_up_test,
        format!("Level{level}→Level{}", level + 1),
        LEVEL_UP_TEST_MINUTES,
        catalog.level_up_goal,
    ));

    debug!(level, start_week, start_lesson, items = items.len(), "built level block");
    items
}

/// The deterministic six-week mockup covering levels 1 to 3.
pub fn generate_fixed_schedule() -> Vec<ScheduledItem> {
    fixed_schedule(&ENGLISH)
}

pub fn fixed_schedule(catalog: &TextCatalog) -> Vec<ScheduledItem> {
    FIXED_LEVELS
        .iter()
        .flat_map(|&(level, start_week, start_lesson)| {
            level_block(catalog, level, start_week, start_lesson)
        })
        .collect()
}
