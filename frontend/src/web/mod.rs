// 原生 Web API 封装模块
// 对浏览器原生 API 的轻量级封装，所有 web_sys 交互集中在此。

pub mod route;
pub mod router;
mod storage;
mod timer;

pub use storage::LocalStorage;
pub use timer::Timeout;
