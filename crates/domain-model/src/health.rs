use serde::{Deserialize, Serialize};

/// 健康度分档，阈值 80 / 60 / 40
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthTier {
    pub const ALL: [HealthTier; 4] = [
        HealthTier::Excellent,
        HealthTier::Good,
        HealthTier::Fair,
        HealthTier::Poor,
    ];

    /// 也用于平均分这类小数
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthTier::Excellent
        } else if score >= 60.0 {
            HealthTier::Good
        } else if score >= 40.0 {
            HealthTier::Fair
        } else {
            HealthTier::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent",
            HealthTier::Good => "Good",
            HealthTier::Fair => "Fair",
            HealthTier::Poor => "Poor",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            HealthTier::Excellent => "🟢",
            HealthTier::Good => "🟡",
            HealthTier::Fair => "🟠",
            HealthTier::Poor => "🔴",
        }
    }

    pub fn range_caption(self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent (80-100)",
            HealthTier::Good => "Good (60-79)",
            HealthTier::Fair => "Fair (40-59)",
            HealthTier::Poor => "Poor (0-39)",
        }
    }
}
