//! DateFilter - Provider date range token
//!
//! Firecrawl takes Google-style `tbs` tokens: `cdr:1,cd_min:MM/DD/YYYY,cd_max:MM/DD/YYYY`.

use chrono::NaiveDate;

use crate::domain::errors::SearchError;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Inclusive date range sent to the provider as a `tbs` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateFilter {
    /// January 1 through December 31 of `year`.
    pub fn for_year(year: i32) -> Result<Self, SearchError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(SearchError::InvalidYearFilter(year)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Render as the provider's `tbs` token
    pub fn to_tbs(&self) -> String {
        format!(
            "cdr:1,cd_min:{},cd_max:{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_tbs())
    }
}
