//! 定时器封装模块
//!
//! 封装 `setTimeout`，网关客户端用它为每个请求挂接超时中止。
//! `Timeout` 被 drop 时自动取消，请求正常完成不会触发回调。

use wasm_bindgen::prelude::*;

/// 一次性定时器
pub struct Timeout {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Timeout {
    /// 创建一次性定时器
    ///
    /// # Panics
    /// 无法获取 window 对象或设置定时器失败时 panic
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("window object should exist");

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("setTimeout should succeed");

        Self { handle, closure }
    }

    /// 取消定时器；drop 时自动调用
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
