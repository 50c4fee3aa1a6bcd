//! 眼底扫描上传策略
//!
//! 上传管线中与浏览器无关的部分：文件格式/大小校验，以及
//! "最后一次选择获胜" 的代次追踪。解码本身（FileReader）在前端完成。

use std::fmt;

// =========================================================
// 文件校验策略
// =========================================================

/// 允许的图片 MIME 类型
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// 默认大小上限：10 MiB
pub const MAX_SCAN_BYTES: u64 = 10 * 1024 * 1024;

/// 上传校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    /// MIME 类型不在允许清单内
    InvalidFormat,
    /// 超过大小上限
    TooLarge,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::InvalidFormat => {
                write!(f, "Invalid file format. Please upload JPG, PNG, or GIF.")
            }
            UploadError::TooLarge => {
                write!(f, "File size exceeds 10MB. Please choose a smaller file.")
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// 扫描图片接受策略
///
/// 拖放和文件选择器都经由同一个检查入口，规则不重复实现。
#[derive(Debug, Clone, PartialEq)]
pub struct ScanImagePolicy {
    pub max_bytes: u64,
}

impl Default for ScanImagePolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_SCAN_BYTES,
        }
    }
}

impl ScanImagePolicy {
    /// 校验候选文件；通过则允许进入解码阶段
    pub fn check(&self, mime: &str, size: u64) -> Result<(), UploadError> {
        if !ALLOWED_MIME_TYPES.contains(&mime) {
            return Err(UploadError::InvalidFormat);
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge);
        }
        Ok(())
    }
}

// =========================================================
// 最后选择获胜
// =========================================================

/// 选择代次计数器
///
/// 解码允许与后续交互竞态：用户可能在解码完成前替换文件。
/// 每次新选择领取一个代次；解码完成时代次已过期的结果被丢弃，
/// 保证预览始终对应最后一次选择。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSeq {
    current: u64,
}

impl SelectionSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一次新选择，返回其代次
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// 解码完成时检查其代次是否仍是最新
    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn accepts_small_png() {
        let policy = ScanImagePolicy::default();
        assert_eq!(policy.check("image/png", 2 * MIB), Ok(()));
    }

    #[test]
    fn rejects_oversized_png_with_size_error() {
        let policy = ScanImagePolicy::default();
        assert_eq!(
            policy.check("image/png", 15 * MIB),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn boundary_is_exactly_ten_mib() {
        let policy = ScanImagePolicy::default();
        assert_eq!(policy.check("image/jpeg", 10 * MIB), Ok(()));
        assert_eq!(
            policy.check("image/jpeg", 10 * MIB + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn rejects_disallowed_mime_types() {
        let policy = ScanImagePolicy::default();
        for mime in ["image/webp", "application/pdf", "text/plain", ""] {
            assert_eq!(policy.check(mime, MIB), Err(UploadError::InvalidFormat));
        }
    }

    #[test]
    fn format_check_runs_before_size_check() {
        let policy = ScanImagePolicy::default();
        assert_eq!(
            policy.check("application/pdf", 15 * MIB),
            Err(UploadError::InvalidFormat)
        );
    }

    #[test]
    fn error_messages_match_product_copy() {
        assert_eq!(
            UploadError::InvalidFormat.to_string(),
            "Invalid file format. Please upload JPG, PNG, or GIF."
        );
        assert_eq!(
            UploadError::TooLarge.to_string(),
            "File size exceeds 10MB. Please choose a smaller file."
        );
    }

    #[test]
    fn latest_selection_wins() {
        let mut seq = SelectionSeq::new();
        let first = seq.begin();
        let second = seq.begin();

        // 第一次解码较慢，完成时已被第二次选择取代
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn single_selection_yields_exactly_one_live_generation() {
        let mut seq = SelectionSeq::new();
        let generation = seq.begin();
        assert!(seq.is_current(generation));
    }
}
