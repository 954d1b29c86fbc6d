//! 村民交易编辑器核心库
//!
//! 在类型化的交易模型与 JSON 形式的 NBT 树之间双向转换：
//! 解析结构文件得到交易列表，编辑后再序列化回固定外壳中。

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, AppState, TradeRow};
pub use model::node::{find_array_by_name, make_node, ArrayView, EntryRef, ListEntry, NodeValue, TagType, TaggedNode};
pub use model::trade::{ItemData, Slot, TradeOption};
pub use model::validate::{check_trades, validate, ValidationError};

/// 解析结构文件文本；格式错误时返回空列表
pub fn parse(text: &str) -> Vec<TradeOption> {
    model::decode::decode_trades(text)
}

/// 序列化交易列表为完整结构文件文本
pub fn serialize(trades: &[TradeOption]) -> String {
    model::encode::serialize_trades(trades)
}
