//! VM桥接层：前端共用的状态文案
//!
//! 界面层自行决定如何展示，这里只提供公共常量

// === 常量定义（消除魔法值） ===
pub const STATUS_READY: &str = "就绪";
pub const STATUS_LOADED: &str = "加载成功";
pub const STATUS_SAVED: &str = "保存完毕";
pub const STATUS_SAVE_FAILED: &str = "保存失败";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";

/// 加载完成后的提示文案
pub fn status_parsed(count: usize) -> String {
    format!("解析到 {} 条交易", count)
}
