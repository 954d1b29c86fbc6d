//! 序列化：交易列表 → 节点树 → 带固定外壳的文本

use crate::model::envelope::wrap_offers;
use crate::model::node::{make_node, ListEntry, NodeValue, TagType, TaggedNode};
use crate::model::trade::{ItemData, Slot, TradeOption};

/// 交易等级 → 经验阈值（固定写出，不可编辑）
pub const TIER_EXP_REQUIREMENTS: [(&str, i32); 5] = [("0", 0), ("1", 10), ("2", 70), ("3", 150), ("4", 250)];

// 只写不读的交易常量
const DEMAND: i32 = 0;
const PRICE_MULTIPLIER_A: f64 = 0.05;
const PRICE_MULTIPLIER_B: f64 = 0.0;
const REWARD_EXP: i32 = 1;
const TRADER_EXP: i32 = 5;

/// 构建物品的 `tag` 复合节点；名称/注释/附魔都未启用时返回 None
pub fn build_tag_tree(item: &ItemData) -> Option<TaggedNode> {
    let mut tag = Vec::new();

    if item.enable_name || item.enable_lore {
        let mut display = Vec::new();
        if item.enable_name {
            display.push(make_node("Name", item.display_name.as_str(), TagType::STRING));
        }
        if item.enable_lore {
            let lore = vec![make_node("", item.lore.as_str(), TagType::STRING)];
            display.push(make_node("Lore", lore, TagType::LIST));
        }
        tag.push(make_node("display", display, TagType::COMPOUND));
    }

    if item.enable_ench {
        let inner = vec![
            make_node("id", item.ench_id, TagType::SHORT),
            make_node("lvl", item.ench_level, TagType::SHORT),
        ];
        let list = vec![make_node("", inner, TagType::COMPOUND)];
        tag.push(make_node("ench", list, TagType::LIST));
    }

    if tag.is_empty() {
        None
    } else {
        Some(make_node("tag", tag, TagType::COMPOUND))
    }
}

/// 构建名为 `key` 的物品复合节点，字段顺序固定；自定义节点追加在最后
pub fn build_item_tree(key: &str, item: &ItemData) -> TaggedNode {
    let mut fields = vec![
        make_node("Count", item.count, TagType::BYTE),
        make_node("Damage", item.damage, TagType::SHORT),
        make_node("Name", item.name.as_str(), TagType::STRING),
        make_node("WasPickedUp", 0, TagType::BYTE),
    ];

    if let Some(tag) = build_tag_tree(item) {
        fields.push(tag);
    }

    if !item.enable_custom {
        return make_node(key, fields, TagType::COMPOUND);
    }

    // 自定义内容中有非标准对象时整体按混合数组输出
    let all_nodes = item.custom_nodes.iter().all(|e| e.as_node().is_some());
    if all_nodes {
        fields.extend(item.custom_nodes.iter().filter_map(ListEntry::as_node).cloned());
        make_node(key, fields, TagType::COMPOUND)
    } else {
        let mut entries: Vec<ListEntry> = fields.into_iter().map(ListEntry::Node).collect();
        entries.extend(item.custom_nodes.iter().cloned());
        make_node(key, NodeValue::Mixed(entries), TagType::COMPOUND)
    }
}

/// 构建单条交易的匿名复合节点
pub fn build_trade_tree(trade: &TradeOption) -> TaggedNode {
    let fields = vec![
        build_item_tree(Slot::BuyA.key(), &trade.buy_a),
        build_item_tree(Slot::BuyB.key(), &trade.buy_b),
        make_node("buyCountA", trade.buy_a.count, TagType::INT),
        make_node("buyCountB", trade.buy_b.count, TagType::INT),
        make_node("demand", DEMAND, TagType::INT),
        make_node("maxUses", trade.max_uses, TagType::INT),
        make_node("priceMultiplierA", PRICE_MULTIPLIER_A, TagType::FLOAT),
        make_node("priceMultiplierB", PRICE_MULTIPLIER_B, TagType::FLOAT),
        make_node("rewardExp", REWARD_EXP, TagType::BYTE),
        build_item_tree(Slot::Sell.key(), &trade.sell),
        make_node("tier", trade.tier, TagType::INT),
        make_node("traderExp", TRADER_EXP, TagType::INT),
        make_node("uses", trade.uses, TagType::INT),
    ];
    make_node("", fields, TagType::COMPOUND)
}

/// 固定的 `TierExpRequirements` 列表
pub fn build_tier_exp_tree() -> TaggedNode {
    let entries = TIER_EXP_REQUIREMENTS
        .iter()
        .map(|&(tier, exp)| make_node("", vec![make_node(tier, exp, TagType::INT)], TagType::COMPOUND))
        .collect::<Vec<_>>();
    make_node("TierExpRequirements", entries, TagType::LIST)
}

/// 构建 `Offers` 复合节点：Recipes + TierExpRequirements
pub fn build_offers_tree(trades: &[TradeOption]) -> TaggedNode {
    let recipes = trades.iter().map(build_trade_tree).collect::<Vec<_>>();
    let offers = vec![make_node("Recipes", recipes, TagType::LIST), build_tier_exp_tree()];
    make_node("Offers", offers, TagType::COMPOUND)
}

/// 序列化失败时的占位 Offers，保证外壳仍是合法 JSON
pub const EMPTY_OFFERS: &str = r#"{"name":"Offers","value":[],"type":10}"#;

/// 将交易列表序列化为完整的结构文件文本
pub fn serialize_trades(trades: &[TradeOption]) -> String {
    let offers = build_offers_tree(trades);
    let offers_json = match serde_json::to_string(&offers) {
        Ok(text) => text,
        Err(e) => {
            // 节点树只含字符串键，实际不会失败
            tracing::error!("Offers 序列化失败: {}", e);
            EMPTY_OFFERS.to_string()
        }
    };
    tracing::debug!("序列化 {} 条交易，Offers 长度: {} 字符", trades.len(), offers_json.len());
    wrap_offers(&offers_json)
}
