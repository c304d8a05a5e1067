use crate::adaptive::{AdaptiveOptions, adaptive_schedule};
use crate::catalog::TextCatalog;
use crate::curriculum::fixed_schedule;
use crate::error::PlanResult;
use crate::item::ScheduledItem;

/// Which generator to run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlanRequest {
    #[default]
    Fixed,
    Adaptive(AdaptiveOptions),
}

impl PlanRequest {
    pub fn title(&self, catalog: &TextCatalog) -> &'static str {
        match self {
            PlanRequest::Fixed => catalog.fixed_title,
            PlanRequest::Adaptive(_) => catalog.adaptive_title,
        }
    }

    pub fn build(&self, catalog: &TextCatalog) -> PlanResult<Vec<ScheduledItem>> {
        match self {
            PlanRequest::Fixed => Ok(fixed_schedule(catalog)),
            PlanRequest::Adaptive(options) => adaptive_schedule(catalog, options),
        }
    }
}
