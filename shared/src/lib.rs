//! HeartLens 共享领域模型
//!
//! 前端与后端契约的纯 Rust 表达：不依赖 DOM、不依赖网络。
//! 所有核心逻辑（校验、上传策略、提交守卫、统计）都放在这里，
//! 以便在原生环境下直接运行单元测试。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod analytics;
pub mod error;
pub mod op;
pub mod report;
pub mod upload;
pub mod validate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中会话令牌的键名
pub const STORAGE_KEY_TOKEN: &str = "token";
/// LocalStorage 中用户资料的键名
pub const STORAGE_KEY_USER: &str = "user";
/// 认证请求头
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 会话 (Session)
// =========================================================

/// 已登录用户的资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// 认证会话：不透明令牌 + 当前用户
///
/// 仅由登录/注册成功创建，由注销销毁。持久化到客户端存储，
/// 页面刷新后通过 `init_session` 恢复。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// `POST /api/auth/login` 的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `POST /api/auth/register` 的响应（只返回令牌，用户资料取自表单）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
}

// =========================================================
// 病人录入草稿 (Drafts)
// =========================================================

/// 病人登记草稿：由录入表单创建，按值传给下一个界面，重置时丢弃。
/// 本层不负责持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub medications: String,
}

/// 表格化临床指标草稿，字段与推理接口一一对应
/// （Cleveland Heart Disease 数据集特征子集）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub age: f64,
    pub sex: u8,
    pub cp: u8,
    pub trestbps: f64,
    pub chol: f64,
    pub fbs: u8,
    pub thalach: f64,
    pub exang: u8,
    pub oldpeak: f64,
}

// =========================================================
// 预测结果 (Prediction)
// =========================================================

/// 风险等级，由外部推理服务给出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// 消息模板中使用的小写形式
    pub fn label_lower(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// 各风险等级对应的建议清单（措辞为产品文案，属于契约的一部分）
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &[
                "Immediate medical consultation strongly recommended",
                "Comprehensive cardiac assessment required",
                "Lifestyle modifications necessary",
                "Consider medication management with your doctor",
            ],
            RiskLevel::Medium => &[
                "Schedule routine cardiac check-up",
                "Monitor blood pressure and cholesterol regularly",
                "Maintain regular exercise routine",
                "Follow heart-healthy diet",
            ],
            RiskLevel::Low => &[
                "Continue healthy lifestyle habits",
                "Annual health screenings recommended",
                "Maintain physical activity",
                "Keep monitoring vital signs",
            ],
        }
    }
}

/// 推理接口返回的原始预测对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub confidence: f64,
}

/// `POST /api/predict/image` 与 `POST /api/predict/tabular` 的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
    pub record_id: String,
}

/// 面向界面的分析结果：预测 + 文案 + 建议清单。
/// 仅由推理响应派生，对界面只读；生命周期为一次分析会话。
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub confidence: f64,
    pub message: String,
    pub recommendations: Vec<String>,
    pub record_id: String,
}

/// 表格化预测的固定置信度（该模型族的置信度不随样本变化）
const TABULAR_CONFIDENCE: f64 = 95.0;

impl PredictionResult {
    fn from_prediction(prediction: Prediction, record_id: String, message: String) -> Self {
        let recommendations = prediction
            .risk_level
            .recommendations()
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        Self {
            risk_level: prediction.risk_level,
            risk_score: prediction.risk_score,
            confidence: prediction.confidence,
            message,
            recommendations,
            record_id,
        }
    }

    /// 由表格化推理响应派生
    pub fn from_tabular(mut prediction: Prediction, record_id: String) -> Self {
        let message = format!(
            "Health data analysis indicates {} risk for heart disease",
            prediction.risk_level.label_lower()
        );
        prediction.confidence = TABULAR_CONFIDENCE;
        Self::from_prediction(prediction, record_id, message)
    }

    /// 由眼底扫描推理响应派生
    pub fn from_eye_scan(prediction: Prediction, record_id: String) -> Self {
        let message = format!(
            "Eye scan analysis indicates {} risk for heart disease",
            prediction.risk_level.label_lower()
        );
        Self::from_prediction(prediction, record_id, message)
    }
}

// =========================================================
// 历史记录 (History)
// =========================================================

/// `GET /api/records` 返回的单条历史记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    pub date_submitted: DateTime<Utc>,
    pub risk_score: f64,
    pub prediction_result: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(level: RiskLevel) -> Prediction {
        Prediction {
            risk_level: level,
            risk_score: 78.0,
            confidence: 92.0,
        }
    }

    #[test]
    fn risk_level_wire_format_matches_backend() {
        // 后端返回 "High"/"Medium"/"Low" 字符串
        let p: Prediction =
            serde_json::from_str(r#"{"risk_level":"High","risk_score":78.0,"confidence":92.0}"#)
                .unwrap();
        assert_eq!(p.risk_level, RiskLevel::High);
    }

    #[test]
    fn tabular_result_uses_fixed_confidence_and_template() {
        let result = PredictionResult::from_tabular(prediction(RiskLevel::Medium), "r1".into());
        assert_eq!(result.confidence, 95.0);
        assert_eq!(
            result.message,
            "Health data analysis indicates medium risk for heart disease"
        );
        assert_eq!(result.record_id, "r1");
    }

    #[test]
    fn eye_scan_result_keeps_model_confidence() {
        let result = PredictionResult::from_eye_scan(prediction(RiskLevel::High), "r2".into());
        assert_eq!(result.confidence, 92.0);
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(
            result.recommendations[0],
            "Immediate medical consultation strongly recommended"
        );
    }

    #[test]
    fn record_parses_iso_timestamp() {
        let json = r#"{
            "id": "abc",
            "date_submitted": "2025-03-14T09:26:53Z",
            "risk_score": 42.5,
            "prediction_result": "Low"
        }"#;
        let record: HealthRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.prediction_result, RiskLevel::Low);
        assert_eq!(record.risk_score, 42.5);
    }
}
