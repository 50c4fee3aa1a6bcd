//! 分析报告文本生成
//!
//! 结果页提供报告下载；报告内容是纯文本拼装，与浏览器无关。
//! 生成日期由调用方传入，保持函数可测。

use crate::{PatientRecord, PredictionResult};

/// 生成风险预测报告的纯文本内容
pub fn report_text(patient: &PatientRecord, result: &PredictionResult, date: &str) -> String {
    let mut out = String::new();
    out.push_str("HEART ATTACK RISK PREDICTION REPORT\n");
    out.push_str(&format!("Generated: {date}\n\n"));

    out.push_str("PATIENT INFORMATION\n");
    out.push_str(&format!("Name: {}\n", patient.name));
    out.push_str(&format!("Age: {}\n", patient.age));
    out.push_str(&format!("Email: {}\n", patient.email));
    out.push_str(&format!("Contact: {}\n\n", patient.contact_number));

    out.push_str("ANALYSIS RESULTS\n");
    out.push_str(&format!("Risk Level: {}\n", result.risk_level.label()));
    out.push_str(&format!("Risk Score: {}%\n", result.risk_score));
    out.push_str(&format!("Confidence: {}%\n\n", result.confidence));

    out.push_str("RECOMMENDATIONS\n");
    for (i, recommendation) in result.recommendations.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, recommendation));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Prediction, RiskLevel};

    #[test]
    fn report_lists_patient_results_and_numbered_recommendations() {
        let patient = PatientRecord {
            name: "Jane Doe".to_string(),
            age: 45,
            email: "jane@example.com".to_string(),
            contact_number: "9876543210".to_string(),
            address: "12 Harbor Street".to_string(),
            medical_history: String::new(),
            medications: String::new(),
        };
        let result = PredictionResult::from_eye_scan(
            Prediction {
                risk_level: RiskLevel::High,
                risk_score: 78.0,
                confidence: 92.0,
            },
            "r1".to_string(),
        );

        let text = report_text(&patient, &result, "2025-03-14");

        assert!(text.contains("Generated: 2025-03-14"));
        assert!(text.contains("Name: Jane Doe"));
        assert!(text.contains("Risk Level: High"));
        assert!(text.contains("Risk Score: 78%"));
        assert!(text.contains("1. Immediate medical consultation strongly recommended"));
        assert!(text.contains("4. Consider medication management with your doctor"));
    }
}
