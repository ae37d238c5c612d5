//! Query parameter types shared by list handlers.

use alliswell_core::error::CoreError;
use alliswell_core::project::ProjectStatus;
use alliswell_core::week::{parse_date, DateRange};
use serde::Deserialize;

/// `?status=` on the project list.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<ProjectStatus>,
}

/// `?from=&to=` calendar days, both optional and inclusive.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRangeParams {
    pub fn into_range(self) -> Result<DateRange, CoreError> {
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;
        DateRange::new(from, to)
    }
}
