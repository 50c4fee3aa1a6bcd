//! 网关客户端模块
//!
//! 所有与后端的 HTTP 交互集中在此，界面组件不直接发请求。
//! 每个请求都挂接 10 秒超时中止，失败统一归一化为
//! [`ApiError`] 分类，由调用方按类别渲染。

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, File, FormData};

use heartlens_shared::{
    HEADER_AUTHORIZATION, HealthMetrics, HealthRecord, LoginResponse, PredictResponse,
    RegisterResponse,
    error::{ApiError, ApiErrorKind, ApiResult, ErrorBody},
};

use crate::web::Timeout;

/// 默认后端地址（开发环境）
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// 请求超时（毫秒）
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// 登录请求体
#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// 注册请求体
#[derive(Serialize)]
struct RegisterPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeartLensApi {
    pub base_url: String,
    /// 当前会话令牌；存在时以 Bearer 头附带
    token: Option<String>,
}

impl HeartLensApi {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 认证头：仅在持有令牌时附带
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// 登录
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let url = self.url("/auth/login");
        let payload = LoginPayload { email, password };
        self.send_json(Request::post(&url), &payload).await
    }

    /// 注册
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<RegisterResponse> {
        let url = self.url("/auth/register");
        let payload = RegisterPayload {
            name,
            email,
            password,
        };
        self.send_json(Request::post(&url), &payload).await
    }

    /// 提交眼底扫描图像（multipart，字段名固定为 "image"）
    pub async fn predict_image(&self, file: &File) -> ApiResult<PredictResponse> {
        let url = self.url("/predict/image");

        let form = FormData::new().map_err(|_| network_error())?;
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| network_error())?;

        let (controller, _timeout) = abort_after_timeout()?;
        // multipart 边界由浏览器生成，不手动设置 Content-Type
        let request = self
            .with_auth(Request::post(&url))
            .abort_signal(Some(&controller.signal()))
            .body(form)
            .map_err(|_| network_error())?;

        let res = request
            .send()
            .await
            .map_err(|_| network_error())?;
        decode_response(res).await
    }

    /// 提交结构化健康指标
    pub async fn predict_tabular(&self, metrics: &HealthMetrics) -> ApiResult<PredictResponse> {
        let url = self.url("/predict/tabular");
        self.send_json(Request::post(&url), metrics).await
    }

    /// 拉取历史预测记录
    pub async fn fetch_records(&self) -> ApiResult<Vec<HealthRecord>> {
        let url = self.url("/records");

        let (controller, _timeout) = abort_after_timeout()?;
        let res = self
            .with_auth(Request::get(&url))
            .abort_signal(Some(&controller.signal()))
            .send()
            .await
            .map_err(|_| network_error())?;
        decode_response(res).await
    }

    /// 发送 JSON 请求体并解码响应（内部工具函数）
    async fn send_json<B, T>(&self, builder: RequestBuilder, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (controller, _timeout) = abort_after_timeout()?;
        let request = self
            .with_auth(builder)
            .abort_signal(Some(&controller.signal()))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|_| network_error())?;

        let res = request
            .send()
            .await
            .map_err(|_| network_error())?;
        decode_response(res).await
    }
}

fn network_error() -> ApiError {
    let err = ApiError::network(ApiErrorKind::Network.default_message());
    web_sys::console::warn_1(&format!("[Api] {err}").into());
    err
}

/// 为一次请求挂接超时中止
///
/// 返回的 `Timeout` 句柄必须存活到请求完成；请求正常返回后
/// 随作用域 drop，定时器随之取消。
fn abort_after_timeout() -> ApiResult<(AbortController, Timeout)> {
    let controller = AbortController::new().map_err(|_| network_error())?;
    let aborter = controller.clone();
    let timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || aborter.abort());
    Ok((controller, timeout))
}

/// 响应解码与错误归一化
///
/// 非 2xx 时尝试读取后端 `{"msg": ...}` 错误体，按状态码
/// 归入 401 / 4xx / 5xx 三类；体缺失时用类别默认文案。
async fn decode_response<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
    let status = res.status();

    if res.ok() {
        return res.json::<T>().await.map_err(|_| {
            ApiError::server(format!("Unexpected response from server ({status})"))
        });
    }

    let kind = ApiErrorKind::from_status(status);
    let message = match res.json::<ErrorBody>().await {
        Ok(ErrorBody { msg: Some(msg) }) => msg,
        _ => kind.default_message().to_string(),
    };
    let err = ApiError::new(kind, message);
    web_sys::console::warn_1(&format!("[Api] HTTP {status}: {err}").into());
    Err(err)
}
