//! 表单校验器
//!
//! 纯同步函数：输入原始表单字段，输出 字段名 -> 错误文案 的映射，
//! 空映射即为通过。校验是字段级的：编辑某个字段只清除该字段的错误。
//! 任何错误存在时提交被整体阻断，不发出网络请求。
//!
//! 临床阈值是领域常数而非代码风格，集中放在 [`ClinicalBounds`] 里，
//! 修订阈值不需要触碰校验逻辑。

use std::collections::BTreeMap;

use crate::HealthMetrics;

// =========================================================
// 字段错误映射
// =========================================================

/// 字段级校验错误，键为字段名
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// 清除单个字段的错误；其它字段的错误保持不变
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// =========================================================
// 临床阈值配置
// =========================================================

/// 临床字段的闭区间阈值
///
/// 默认值是与后端共同约定的契约边界，必须逐位一致。
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalBounds {
    /// 年龄（整数，岁）
    pub age: (u32, u32),
    /// 静息血压 (mm Hg)
    pub trestbps: (f64, f64),
    /// 血清胆固醇 (mg/dl)
    pub chol: (f64, f64),
    /// 最大心率 (bpm)
    pub thalach: (f64, f64),
    /// 运动引起的 ST 段压低
    pub oldpeak: (f64, f64),
    /// ST 段压低的录入步长
    pub oldpeak_step: f64,
}

impl Default for ClinicalBounds {
    fn default() -> Self {
        Self {
            age: (1, 120),
            trestbps: (50.0, 250.0),
            chol: (100.0, 600.0),
            thalach: (50.0, 250.0),
            oldpeak: (0.0, 10.0),
            oldpeak_step: 0.1,
        }
    }
}

// =========================================================
// 病人登记表单
// =========================================================

/// 病人登记表单的原始输入（全部为未解析的字符串）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientFormInput {
    pub name: String,
    pub age: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub medical_history: String,
    pub medications: String,
}

/// 校验病人登记表单
pub fn validate_patient(input: &PatientFormInput, bounds: &ClinicalBounds) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    if parse_age(&input.age, bounds).is_none() {
        errors.insert("age", "Valid age is required");
    }
    if !is_valid_email(&input.email) {
        errors.insert("email", "Valid email is required");
    }
    if !is_ten_digits(&input.contact_number) {
        errors.insert("contactNumber", "Valid 10-digit contact number is required");
    }
    if input.address.trim().is_empty() {
        errors.insert("address", "Address is required");
    }

    errors
}

impl PatientFormInput {
    /// 校验通过后转换为草稿记录
    pub fn to_record(&self, bounds: &ClinicalBounds) -> Option<crate::PatientRecord> {
        Some(crate::PatientRecord {
            name: self.name.trim().to_string(),
            age: parse_age(&self.age, bounds)?,
            email: self.email.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            address: self.address.trim().to_string(),
            medical_history: self.medical_history.trim().to_string(),
            medications: self.medications.trim().to_string(),
        })
    }
}

// =========================================================
// 临床指标表单
// =========================================================

/// 临床指标表单的原始输入；下拉项未选择时为空串
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthFormInput {
    pub age: String,
    pub sex: String,
    pub cp: String,
    pub trestbps: String,
    pub chol: String,
    pub fbs: String,
    pub thalach: String,
    pub exang: String,
    pub oldpeak: String,
}

/// 校验临床指标表单
pub fn validate_health(input: &HealthFormInput, bounds: &ClinicalBounds) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if parse_age(&input.age, bounds).is_none() {
        errors.insert("age", "Age must be between 1 and 120");
    }
    if !is_code(&input.sex, &["0", "1"]) {
        errors.insert("sex", "Sex is required");
    }
    if !is_code(&input.cp, &["0", "1", "2", "3"]) {
        errors.insert("cp", "Chest pain type is required");
    }
    if parse_in_range(&input.trestbps, bounds.trestbps).is_none() {
        errors.insert("trestbps", "Blood pressure must be between 50-250 mm Hg");
    }
    if parse_in_range(&input.chol, bounds.chol).is_none() {
        errors.insert("chol", "Cholesterol must be between 100-600 mg/dl");
    }
    if !is_code(&input.fbs, &["0", "1"]) {
        errors.insert("fbs", "Fasting blood sugar is required");
    }
    if parse_in_range(&input.thalach, bounds.thalach).is_none() {
        errors.insert("thalach", "Max heart rate must be between 50-250");
    }
    if !is_code(&input.exang, &["0", "1"]) {
        errors.insert("exang", "Exercise angina is required");
    }
    if parse_oldpeak(&input.oldpeak, bounds).is_none() {
        errors.insert("oldpeak", "ST depression must be between 0-10");
    }

    errors
}

impl HealthFormInput {
    /// 校验通过后转换为推理载荷；任一字段非法时返回 None
    pub fn to_metrics(&self, bounds: &ClinicalBounds) -> Option<HealthMetrics> {
        Some(HealthMetrics {
            age: parse_age(&self.age, bounds)? as f64,
            sex: self.sex.parse().ok()?,
            cp: self.cp.parse().ok()?,
            trestbps: parse_in_range(&self.trestbps, bounds.trestbps)?,
            chol: parse_in_range(&self.chol, bounds.chol)?,
            fbs: self.fbs.parse().ok()?,
            thalach: parse_in_range(&self.thalach, bounds.thalach)?,
            exang: self.exang.parse().ok()?,
            oldpeak: parse_oldpeak(&self.oldpeak, bounds)?,
        })
    }
}

// =========================================================
// 基础规则
// =========================================================

fn parse_age(raw: &str, bounds: &ClinicalBounds) -> Option<u32> {
    let age: u32 = raw.trim().parse().ok()?;
    (bounds.age.0..=bounds.age.1).contains(&age).then_some(age)
}

fn parse_in_range(raw: &str, (min, max): (f64, f64)) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value >= min && value <= max).then_some(value)
}

fn parse_oldpeak(raw: &str, bounds: &ClinicalBounds) -> Option<f64> {
    let value = parse_in_range(raw, bounds.oldpeak)?;
    // 录入步长 0.1：值乘以 10 后必须是整数（容忍浮点噪声）
    let steps = value / bounds.oldpeak_step;
    ((steps - steps.round()).abs() < 1e-6).then_some(value)
}

fn is_code(raw: &str, codes: &[&str]) -> bool {
    codes.contains(&raw)
}

fn is_ten_digits(raw: &str) -> bool {
    raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain.tld` 形状：@ 前后均非空且不含空白或第二个 @，
/// 域名部分含一个前后非空的点
fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(idx) => idx > 0 && idx < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests;
