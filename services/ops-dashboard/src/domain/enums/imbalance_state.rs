//! 产销失衡状态枚举

use serde::Serialize;

/// 失衡比例超过该值视为生产过剩
pub const OVERPRODUCTION_THRESHOLD: f64 = 0.15;

/// 失衡比例低于该值视为生产不足或延误
pub const UNDERPRODUCTION_THRESHOLD: f64 = -0.15;

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
}

/// 产销失衡状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceState {
    /// 产量远高于交付量
    Overproduction,
    /// 产量与交付量基本持平
    Balanced,
    /// 交付量高于产量
    Underproduction,
}

impl ImbalanceState {
    /// 按失衡比例分类
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > OVERPRODUCTION_THRESHOLD {
            ImbalanceState::Overproduction
        } else if ratio < UNDERPRODUCTION_THRESHOLD {
            ImbalanceState::Underproduction
        } else {
            ImbalanceState::Balanced
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ImbalanceState::Balanced => Severity::Success,
            ImbalanceState::Overproduction | ImbalanceState::Underproduction => Severity::Warning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ImbalanceState::Overproduction => {
                "Production is well above deliveries (possible inventory buildup)."
            }
            ImbalanceState::Underproduction => {
                "Deliveries exceed production (possible stockout or production delay)."
            }
            ImbalanceState::Balanced => "Production and deliveries are relatively balanced.",
        }
    }
}
