//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys：
//! 枚举应用的全部界面、路径映射，以及导航守卫的判定规则。
//! 路由服务（router.rs）只负责把这里的判定接到 History API 上。

use std::fmt::Display;

/// 应用路由枚举：每个界面一个标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 产品首页（未登录的默认路由）
    #[default]
    Landing,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 工作台（需要认证）
    Dashboard,
    /// 病人登记（需要认证）
    PatientDetails,
    /// 眼底扫描上传（需要认证 + 病人草稿）
    EyeScan,
    /// 临床指标录入（需要认证 + 病人草稿）
    HealthData,
    /// 分析结果（需要认证 + 预测结果）
    Results,
    /// 历史记录（需要认证）
    History,
    /// 统计分析（需要认证）
    Analytics,
    /// 设置（需要认证）
    Settings,
    /// 页面未找到
    NotFound,
}

/// 守卫判定所需的会话侧数据
///
/// 由路由服务从各 Signal 取值后传入，保持判定本身可测。
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardState {
    /// 是否已认证
    pub authenticated: bool,
    /// 是否存在病人草稿
    pub has_patient: bool,
    /// 是否存在预测结果
    pub has_result: bool,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/patient-details" => Self::PatientDetails,
            "/eye-scan" => Self::EyeScan,
            "/health-data" => Self::HealthData,
            "/results" => Self::Results,
            "/history" => Self::History,
            "/analytics" => Self::Analytics,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::PatientDetails => "/patient-details",
            Self::EyeScan => "/eye-scan",
            Self::HealthData => "/health-data",
            Self::Results => "/results",
            Self::History => "/history",
            Self::Analytics => "/analytics",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Landing | Self::Login | Self::Register | Self::NotFound
        )
    }

    /// 该路由是否需要病人草稿（草稿中的年龄会进入推理载荷）
    pub fn requires_patient(&self) -> bool {
        matches!(self, Self::EyeScan | Self::HealthData)
    }

    /// 该路由是否需要预测结果
    pub fn requires_result(&self) -> bool {
        matches!(self, Self::Results)
    }

    /// 已认证用户是否应离开此路由（认证入口页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Landing | Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 注销后的落点：无条件回到首页，丢弃所有在途草稿
    pub fn after_logout() -> Self {
        Self::Landing
    }

    /// 缺少界面侧数据（草稿/结果）时的兜底落点
    pub fn missing_data_redirect() -> Self {
        Self::Dashboard
    }
}

/// **核心守卫逻辑：解析一次导航请求的最终落点**
///
/// 显式导航和浏览器前进/后退都经过同一判定，
/// 因此直接重入 `/results` 这类状态也会被兜底到工作台，
/// 不会带着空数据渲染。
pub fn resolve(target: AppRoute, guard: GuardState) -> AppRoute {
    // 未认证访问受保护页面 -> 登录页
    if target.requires_auth() && !guard.authenticated {
        return AppRoute::auth_failure_redirect();
    }
    // 已认证停留在认证入口页 -> 工作台（登录成功的自动前进）
    if target.should_redirect_when_authenticated() && guard.authenticated {
        return AppRoute::auth_success_redirect();
    }
    // 缺少病人草稿或预测结果 -> 工作台兜底
    if (target.requires_patient() && !guard.has_patient)
        || (target.requires_result() && !guard.has_result)
    {
        return AppRoute::missing_data_redirect();
    }
    target
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
