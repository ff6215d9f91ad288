//! 日期区间值对象

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// 日期区间错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// 闭区间 `[start, end]`
///
/// 业务规则:
/// - `start <= end`
/// - 两端均包含
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// 单日区间
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// 覆盖所有日期的最小区间，没有日期时为 None
    pub fn spanning<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |acc: Option<Self>, day| match acc {
            None => Some(Self::single(day)),
            Some(range) => Some(Self {
                start: range.start.min(day),
                end: range.end.max(day),
            }),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 是否包含某日（两端包含）
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// 区间天数（含两端）
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// 两个区间的交集，不相交时为 None
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        DateRange::new(start, end).ok()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
