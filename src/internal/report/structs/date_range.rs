use chrono::{Local, NaiveDate};

use crate::internal::error::ReportError;

/// 接口要求的日期格式（`27.11.2025`）
pub const WIRE_DATE_FORMAT: &str = "%d.%m.%Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 报表的日期区间（闭区间，`start <= end`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if end < start {
            return Err(ReportError::InvalidDateRange {
                start: start.format(WIRE_DATE_FORMAT).to_string(),
                end: end.format(WIRE_DATE_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// 从用户输入解析，`YYYY-MM-DD` 与 `DD.MM.YYYY` 均可。
    pub fn parse(start: &str, end: &str) -> Result<Self, ReportError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// 今天到今天
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self { start: today, end: today }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 请求参数：`start_date` / `end_date`，格式为 `DD.MM.YYYY`。
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.format(WIRE_DATE_FORMAT).to_string()),
            ("end_date", self.end.format(WIRE_DATE_FORMAT).to_string()),
        ]
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::today()
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ReportError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, WIRE_DATE_FORMAT))
        .map_err(|_| ReportError::InvalidDate(input.to_string()))
}
