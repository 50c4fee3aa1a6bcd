//! 扫描上传管线（浏览器侧）
//!
//! 文件选择器与拖放共用同一个接受入口 [`ScanUploadState::accept`]：
//! 先过共享层的格式/大小策略，通过后用 FileReader 异步解码为
//! data URL 预览。解码按代次追踪，旧选择的解码结果直接丢弃。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

use heartlens_shared::upload::{ScanImagePolicy, SelectionSeq};

/// 扫描上传状态
///
/// 全部字段为信号，组件间按 Copy 传递。
#[derive(Clone, Copy)]
pub struct ScanUploadState {
    /// 已接受的文件（提交预测时取用）。`File` 是 JS 句柄，
    /// 不跨线程，因此存放在线程本地的信号里。
    pub file: RwSignal<Option<File>, LocalStorage>,
    /// 预览用 data URL（解码完成后出现）
    pub preview: RwSignal<Option<String>>,
    /// 最近一次被拒绝的原因文案
    pub error: RwSignal<Option<String>>,
    /// 选择代次，保证最后一次选择获胜
    generation: RwSignal<SelectionSeq>,
}

impl ScanUploadState {
    pub fn new() -> Self {
        Self {
            file: RwSignal::new_local(None),
            preview: RwSignal::new(None),
            error: RwSignal::new(None),
            generation: RwSignal::new(SelectionSeq::new()),
        }
    }

    /// **唯一的文件接受入口**
    ///
    /// 拒绝时保留上一张已接受的预览，只更新错误文案；
    /// 接受时清除错误并启动异步解码。
    pub fn accept(&self, candidate: File, policy: &ScanImagePolicy) {
        if let Err(reason) = policy.check(&candidate.type_(), candidate.size() as u64) {
            self.error.set(Some(reason.to_string()));
            return;
        }

        let generation = {
            let mut claimed = 0;
            self.generation.update(|seq| claimed = seq.begin());
            claimed
        };

        self.error.set(None);
        self.file.set(Some(candidate.clone()));
        self.decode_preview(candidate, generation);
    }

    /// FileReader 异步解码为 data URL
    fn decode_preview(&self, file: File, generation: u64) {
        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };

        let preview = self.preview;
        let generation_signal = self.generation;

        let onload = {
            let reader = reader.clone();
            Closure::<dyn Fn()>::new(move || {
                // 解码期间文件可能已被替换，过期代次的结果丢弃
                if !generation_signal.get_untracked().is_current(generation) {
                    return;
                }
                if let Ok(value) = reader.result() {
                    if let Some(data_url) = value.as_string() {
                        preview.set(Some(data_url));
                    }
                }
            })
        };

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        if reader.read_as_data_url(&file).is_err() {
            return;
        }

        // 泄漏闭包以保持回调存活
        onload.forget();
    }

    /// 清空当前选择（开始新一轮扫描时调用）
    pub fn clear(&self) {
        self.generation.update(|seq| {
            seq.begin();
        });
        self.file.set(None);
        self.preview.set(None);
        self.error.set(None);
    }
}

impl Default for ScanUploadState {
    fn default() -> Self {
        Self::new()
    }
}
