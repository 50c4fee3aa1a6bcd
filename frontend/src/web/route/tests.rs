use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn signed_in() -> GuardState {
    GuardState {
        authenticated: true,
        has_patient: false,
        has_result: false,
    }
}

fn signed_out() -> GuardState {
    GuardState::default()
}

fn full_workflow() -> GuardState {
    GuardState {
        authenticated: true,
        has_patient: true,
        has_result: true,
    }
}

const ALL_ROUTES: [AppRoute; 12] = [
    AppRoute::Landing,
    AppRoute::Login,
    AppRoute::Register,
    AppRoute::Dashboard,
    AppRoute::PatientDetails,
    AppRoute::EyeScan,
    AppRoute::HealthData,
    AppRoute::Results,
    AppRoute::History,
    AppRoute::Analytics,
    AppRoute::Settings,
    AppRoute::NotFound,
];

// =========================================================
// 路径映射
// =========================================================

#[test]
fn path_round_trip() {
    for route in ALL_ROUTES {
        if route == AppRoute::NotFound {
            continue;
        }
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(AppRoute::from_path("/bookings"), AppRoute::NotFound);
}

// =========================================================
// 守卫判定
// =========================================================

#[test]
fn protected_routes_redirect_to_login_when_signed_out() {
    for route in ALL_ROUTES {
        if route.requires_auth() {
            assert_eq!(resolve(route, signed_out()), AppRoute::Login, "{route:?}");
        }
    }
}

#[test]
fn auth_entry_routes_advance_to_dashboard_when_signed_in() {
    // 登录成功后的自动前进：login -> dashboard
    assert_eq!(resolve(AppRoute::Login, signed_in()), AppRoute::Dashboard);
    assert_eq!(
        resolve(AppRoute::Register, signed_in()),
        AppRoute::Dashboard
    );
    assert_eq!(resolve(AppRoute::Landing, signed_in()), AppRoute::Dashboard);
}

#[test]
fn login_stays_put_when_authentication_failed() {
    // 密码错误：会话未建立，login 仍解析为 login
    assert_eq!(resolve(AppRoute::Login, signed_out()), AppRoute::Login);
}

#[test]
fn results_without_prediction_falls_back_to_dashboard() {
    // 浏览器后退直接重入 /results：没有结果就兜底，不渲染空数据
    assert_eq!(resolve(AppRoute::Results, signed_in()), AppRoute::Dashboard);
    assert_eq!(resolve(AppRoute::Results, full_workflow()), AppRoute::Results);
}

#[test]
fn scan_screens_require_patient_draft() {
    assert_eq!(resolve(AppRoute::EyeScan, signed_in()), AppRoute::Dashboard);
    assert_eq!(
        resolve(AppRoute::HealthData, signed_in()),
        AppRoute::Dashboard
    );

    let with_patient = GuardState {
        has_patient: true,
        ..signed_in()
    };
    assert_eq!(resolve(AppRoute::EyeScan, with_patient), AppRoute::EyeScan);
    assert_eq!(
        resolve(AppRoute::HealthData, with_patient),
        AppRoute::HealthData
    );
}

#[test]
fn logout_lands_on_landing() {
    // 注销后会话与草稿全部清空，落点与出发路由无关
    assert_eq!(AppRoute::after_logout(), AppRoute::Landing);
    assert_eq!(
        resolve(AppRoute::after_logout(), signed_out()),
        AppRoute::Landing
    );
}

#[test]
fn plain_protected_routes_pass_when_signed_in() {
    for route in [
        AppRoute::Dashboard,
        AppRoute::PatientDetails,
        AppRoute::History,
        AppRoute::Analytics,
        AppRoute::Settings,
    ] {
        assert_eq!(resolve(route, signed_in()), route);
    }
}
