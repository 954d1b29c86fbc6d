//! 保存前校验：启用了自定义节点的物品必须携带有效内容

use thiserror::Error;

use crate::model::trade::{Slot, TradeOption};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("第 {index} 条交易的 {slot} 启用了自定义NBT节点，但内容为空或无效（必须是数组，每个元素为包含 name, value, type 的对象）")]
    EmptyCustomNodes { index: usize, slot: Slot },
}

/// 逐条检查，遇到第一处违规即返回（整批失败）
pub fn check_trades(trades: &[TradeOption]) -> Result<(), ValidationError> {
    for (index, trade) in trades.iter().enumerate() {
        for (slot, item) in trade.items() {
            if item.enable_custom && item.custom_nodes.is_empty() {
                return Err(ValidationError::EmptyCustomNodes { index, slot });
            }
        }
    }
    Ok(())
}

pub fn validate(trades: &[TradeOption]) -> bool {
    check_trades(trades).is_ok()
}
