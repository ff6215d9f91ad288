//! 服务错误到统一 AppError 的转换

use opsdash_errors::AppError;

use crate::application::FilterError;
use crate::infrastructure::tables::LoadError;

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::EmptyTable { .. } | FilterError::NoOverlap { .. } => {
                AppError::no_overlapping_date_range(err.to_string())
            }
            FilterError::InvalidWindow { .. } => AppError::validation(err.to_string()),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io { .. } => AppError::internal(err.to_string()),
            _ => AppError::data_format(err.to_string()),
        }
    }
}
