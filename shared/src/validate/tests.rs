use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn bounds() -> ClinicalBounds {
    ClinicalBounds::default()
}

fn valid_patient() -> PatientFormInput {
    PatientFormInput {
        name: "Jane Doe".to_string(),
        age: "45".to_string(),
        email: "jane@example.com".to_string(),
        contact_number: "9876543210".to_string(),
        address: "12 Harbor Street".to_string(),
        medical_history: String::new(),
        medications: String::new(),
    }
}

fn valid_health() -> HealthFormInput {
    HealthFormInput {
        age: "54".to_string(),
        sex: "1".to_string(),
        cp: "2".to_string(),
        trestbps: "130".to_string(),
        chol: "246".to_string(),
        fbs: "0".to_string(),
        thalach: "150".to_string(),
        exang: "0".to_string(),
        oldpeak: "1.4".to_string(),
    }
}

fn patient_with_age(age: &str) -> PatientFormInput {
    PatientFormInput {
        age: age.to_string(),
        ..valid_patient()
    }
}

fn health_with(field: &str, value: &str) -> HealthFormInput {
    let mut input = valid_health();
    let slot = match field {
        "age" => &mut input.age,
        "sex" => &mut input.sex,
        "cp" => &mut input.cp,
        "trestbps" => &mut input.trestbps,
        "chol" => &mut input.chol,
        "fbs" => &mut input.fbs,
        "thalach" => &mut input.thalach,
        "exang" => &mut input.exang,
        "oldpeak" => &mut input.oldpeak,
        other => panic!("unknown field {other}"),
    };
    *slot = value.to_string();
    input
}

// =========================================================
// 病人登记表单
// =========================================================

#[test]
fn valid_patient_form_passes() {
    assert!(validate_patient(&valid_patient(), &bounds()).is_empty());
}

#[test]
fn age_boundaries_are_inclusive() {
    // 0 和 121 拒绝，1 和 120 接受
    assert!(
        validate_patient(&patient_with_age("0"), &bounds())
            .get("age")
            .is_some()
    );
    assert!(
        validate_patient(&patient_with_age("121"), &bounds())
            .get("age")
            .is_some()
    );
    assert!(
        validate_patient(&patient_with_age("1"), &bounds())
            .get("age")
            .is_none()
    );
    assert!(
        validate_patient(&patient_with_age("120"), &bounds())
            .get("age")
            .is_none()
    );
}

#[test]
fn age_must_be_an_integer() {
    assert!(
        validate_patient(&patient_with_age("45.5"), &bounds())
            .get("age")
            .is_some()
    );
    assert!(
        validate_patient(&patient_with_age(""), &bounds())
            .get("age")
            .is_some()
    );
}

#[test]
fn contact_number_must_be_exactly_ten_digits() {
    let mut input = valid_patient();
    for (value, ok) in [
        ("987654321", false),   // 9 位
        ("9876543210", true),   // 10 位
        ("98765432101", false), // 11 位
        ("987654321a", false),
    ] {
        input.contact_number = value.to_string();
        let errors = validate_patient(&input, &bounds());
        assert_eq!(errors.get("contactNumber").is_none(), ok, "value {value}");
    }
}

#[test]
fn email_requires_local_domain_tld_shape() {
    let mut input = valid_patient();
    for (value, ok) in [
        ("jane@example.com", true),
        ("jane.doe@clinic.example.org", true),
        ("jane@example", false),
        ("@example.com", false),
        ("jane@.com", false),
        ("jane example@x.com", false),
        ("jane@@example.com", false),
        ("jane", false),
    ] {
        input.email = value.to_string();
        let errors = validate_patient(&input, &bounds());
        assert_eq!(errors.get("email").is_none(), ok, "value {value}");
    }
}

#[test]
fn name_and_address_reject_whitespace_only() {
    let mut input = valid_patient();
    input.name = "   ".to_string();
    input.address = "\t".to_string();
    let errors = validate_patient(&input, &bounds());
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("address"), Some("Address is required"));
}

#[test]
fn to_record_trims_fields() {
    let mut input = valid_patient();
    input.name = "  Jane Doe ".to_string();
    let record = input.to_record(&bounds()).unwrap();
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.age, 45);
}

// =========================================================
// 临床指标表单
// =========================================================

#[test]
fn valid_health_form_passes() {
    assert!(validate_health(&valid_health(), &bounds()).is_empty());
}

#[test]
fn trestbps_boundaries() {
    for (value, ok) in [("49", false), ("50", true), ("250", true), ("251", false)] {
        let errors = validate_health(&health_with("trestbps", value), &bounds());
        assert_eq!(errors.get("trestbps").is_none(), ok, "value {value}");
    }
}

#[test]
fn chol_boundaries() {
    for (value, ok) in [("99", false), ("100", true), ("600", true), ("601", false)] {
        let errors = validate_health(&health_with("chol", value), &bounds());
        assert_eq!(errors.get("chol").is_none(), ok, "value {value}");
    }
}

#[test]
fn thalach_boundaries() {
    for (value, ok) in [("49", false), ("50", true), ("250", true), ("251", false)] {
        let errors = validate_health(&health_with("thalach", value), &bounds());
        assert_eq!(errors.get("thalach").is_none(), ok, "value {value}");
    }
}

#[test]
fn oldpeak_range_and_step() {
    for (value, ok) in [
        ("-0.1", false),
        ("0", true),
        ("10", true),
        ("10.1", false),
        ("2.3", true),
        ("2.35", false), // 不在 0.1 步长上
    ] {
        let errors = validate_health(&health_with("oldpeak", value), &bounds());
        assert_eq!(errors.get("oldpeak").is_none(), ok, "value {value}");
    }
}

#[test]
fn categorical_fields_reject_blank_and_unknown_codes() {
    for field in ["sex", "fbs", "exang"] {
        assert!(
            validate_health(&health_with(field, ""), &bounds())
                .get(field)
                .is_some()
        );
        assert!(
            validate_health(&health_with(field, "2"), &bounds())
                .get(field)
                .is_some()
        );
    }
    assert!(
        validate_health(&health_with("cp", "4"), &bounds())
            .get("cp")
            .is_some()
    );
    assert!(
        validate_health(&health_with("cp", "3"), &bounds())
            .get("cp")
            .is_none()
    );
}

#[test]
fn to_metrics_matches_wire_payload() {
    let metrics = valid_health().to_metrics(&bounds()).unwrap();
    assert_eq!(metrics.age, 54.0);
    assert_eq!(metrics.sex, 1);
    assert_eq!(metrics.cp, 2);
    assert_eq!(metrics.oldpeak, 1.4);
}

#[test]
fn to_metrics_refuses_invalid_input() {
    assert!(
        health_with("trestbps", "49")
            .to_metrics(&bounds())
            .is_none()
    );
}

// =========================================================
// 字段级错误清除
// =========================================================

#[test]
fn clearing_one_field_keeps_other_errors() {
    let mut errors = validate_health(&HealthFormInput::default(), &bounds());
    let before = errors.len();
    assert!(before >= 2);

    errors.clear("age");

    assert!(errors.get("age").is_none());
    assert_eq!(errors.len(), before - 1);
    assert!(errors.get("sex").is_some());
}

#[test]
fn configured_bounds_shift_the_thresholds() {
    // 阈值来自配置：收紧后原本合法的值被拒绝
    let tight = ClinicalBounds {
        chol: (100.0, 200.0),
        ..ClinicalBounds::default()
    };
    let errors = validate_health(&health_with("chol", "246"), &tight);
    assert!(errors.get("chol").is_some());
}
