pub mod adaptive;
pub mod calendar;
pub mod catalog;
pub mod curriculum;
pub mod error;
pub mod export;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod item;
pub mod plan;
pub mod render;

pub use adaptive::{AdaptiveOptions, daily_minutes, generate_adaptive_schedule};
pub use calendar::{CalendarEntry, calendar_dataframe, parse_day_number, project_calendar};
pub use catalog::{FocusArea, Locale, TextCatalog};
pub use curriculum::{generate_fixed_schedule, generate_level_block};
pub use error::{CalendarError, ExportError, PlanError};
pub use export::{
    PlanDocument, Worksheet, save_schedule_to_csv, save_schedule_to_json, save_schedule_to_xlsx,
};
pub use item::{COLUMNS, ScheduledItem};
pub use plan::PlanRequest;
pub use render::{render_document, render_table};
