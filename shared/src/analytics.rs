//! 历史记录统计
//!
//! 后端没有独立的统计接口；分析页在客户端对 `GET /api/records`
//! 的结果做聚合。

use crate::{HealthRecord, RiskLevel};

/// 历史记录的聚合摘要
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub average_risk_score: f64,
}

impl AnalyticsSummary {
    /// 对一批历史记录做聚合；空输入得到全零摘要
    pub fn from_records(records: &[HealthRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        if records.is_empty() {
            return summary;
        }

        let mut score_sum = 0.0;
        for record in records {
            match record.prediction_result {
                RiskLevel::High => summary.high += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::Low => summary.low += 1,
            }
            score_sum += record.risk_score;
        }
        summary.average_risk_score = score_sum / records.len() as f64;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(level: RiskLevel, score: f64) -> HealthRecord {
        HealthRecord {
            id: "r".to_string(),
            date_submitted: Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap(),
            risk_score: score,
            prediction_result: level,
        }
    }

    #[test]
    fn empty_history_gives_zero_summary() {
        let summary = AnalyticsSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_risk_score, 0.0);
    }

    #[test]
    fn counts_records_per_risk_level() {
        let records = vec![
            record(RiskLevel::High, 80.0),
            record(RiskLevel::High, 70.0),
            record(RiskLevel::Medium, 50.0),
            record(RiskLevel::Low, 20.0),
        ];
        let summary = AnalyticsSummary::from_records(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.average_risk_score, 55.0);
    }
}
