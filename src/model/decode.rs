//! 解析：文本 → 节点树 → 交易列表
//!
//! 尽力而为的导入：任何格式问题都只会得到空列表，不会向调用方报错。

use serde::Deserialize;
use serde_json::Value;

use crate::model::node::{find_array_by_name, ArrayView, EntryRef, ListEntry, NodeValue, TaggedNode};
use crate::model::trade::{ItemData, Slot, TradeOption};

/// 物品层字段分类：已知字段 + 兜底的自定义节点
enum ItemField<'a> {
    Count(&'a NodeValue),
    Damage(&'a NodeValue),
    Name(&'a NodeValue),
    WasPickedUp,
    Tag(&'a [TaggedNode]),
    Custom(&'a TaggedNode),
}

impl<'a> ItemField<'a> {
    fn classify(node: &'a TaggedNode) -> Self {
        match (node.name.as_str(), &node.value) {
            ("Count", v) => ItemField::Count(v),
            ("Damage", v) => ItemField::Damage(v),
            ("Name", v) => ItemField::Name(v),
            ("WasPickedUp", _) => ItemField::WasPickedUp,
            ("tag", NodeValue::Array(children)) => ItemField::Tag(children),
            _ => ItemField::Custom(node),
        }
    }
}

fn read_int(value: &NodeValue) -> i32 {
    value.as_i32().unwrap_or(0)
}

fn read_string(value: &NodeValue) -> String {
    value.as_str().unwrap_or_default().to_string()
}

/// 解析 `tag` 子节点：只识别 display / ench，其余静默丢弃
fn decode_tag(item: &mut ItemData, tag: &[TaggedNode]) {
    for child in tag {
        let Some(entries) = child.value.as_array() else {
            continue;
        };
        match child.name.as_str() {
            "display" => {
                for entry in entries {
                    match entry.name.as_str() {
                        "Name" => {
                            item.enable_name = true;
                            item.display_name = read_string(&entry.value);
                        }
                        "Lore" => {
                            item.enable_lore = true;
                            if let Some(first) = entry.children().first() {
                                item.lore = read_string(&first.value);
                            }
                        }
                        _ => {}
                    }
                }
            }
            "ench" => {
                item.enable_ench = true;
                if let Some(first) = entries.first() {
                    for field in first.children() {
                        match field.name.as_str() {
                            "id" => item.ench_id = read_int(&field.value),
                            "lvl" => item.ench_level = read_int(&field.value),
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// 从物品字段解析 ItemData
///
/// 未识别的顶层字段按出现顺序收集为自定义节点；不是合法节点的 JSON 对象同样原样收集，
/// 非对象元素跳过。
pub fn decode_item<'a>(fields: impl Into<ArrayView<'a>>) -> ItemData {
    let mut item = ItemData::default();
    let mut custom: Vec<ListEntry> = Vec::new();

    let fields: ArrayView<'a> = fields.into();
    for entry in fields.entries() {
        let node = match entry {
            EntryRef::Node(node) => node,
            EntryRef::Raw(raw) => {
                if raw.is_object() {
                    custom.push(entry.to_owned_entry());
                }
                continue;
            }
        };
        match ItemField::classify(node) {
            ItemField::Count(v) => item.count = read_int(v),
            ItemField::Damage(v) => item.damage = read_int(v),
            ItemField::Name(v) => item.name = read_string(v),
            ItemField::WasPickedUp => {}
            ItemField::Tag(children) => decode_tag(&mut item, children),
            ItemField::Custom(node) => custom.push(node.clone().into()),
        }
    }

    if !custom.is_empty() {
        item.enable_custom = true;
        item.custom_nodes = custom;
    }
    item
}

/// 解析单条交易；交易层未知字段与非节点元素直接丢弃
fn decode_trade(fields: ArrayView<'_>) -> TradeOption {
    let mut trade = TradeOption::default();
    for field in fields.nodes() {
        if let Some(slot) = Slot::from_key(&field.name) {
            *trade.item_mut(slot) = decode_item(field.elements());
            continue;
        }
        match field.name.as_str() {
            "uses" => trade.uses = read_int(&field.value),
            "maxUses" => trade.max_uses = read_int(&field.value),
            "tier" => trade.tier = read_int(&field.value),
            _ => {}
        }
    }
    trade
}

/// 取出根数组：根为带 value 数组的对象，或根本身就是数组
fn root_nodes(root: &Value) -> Vec<TaggedNode> {
    let items = match root {
        Value::Object(map) => match map.get("value") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        Value::Array(items) => items.as_slice(),
        _ => &[],
    };
    items
        .iter()
        .filter(|v| v.is_object())
        .filter_map(|v| TaggedNode::deserialize(v).ok())
        .collect()
}

/// 解析完整文本为交易列表；格式错误或找不到 Offers/Recipes 时返回空列表
pub fn decode_trades(text: &str) -> Vec<TradeOption> {
    let root: Value = match serde_json::from_str(text) {
        Ok(root) => root,
        Err(e) => {
            tracing::warn!("NBT文本解析失败，按0条交易处理: {}", e);
            return Vec::new();
        }
    };

    let nodes = root_nodes(&root);
    let offers = find_array_by_name(&nodes, "Offers");
    let recipes = find_array_by_name(offers, "Recipes");

    // Recipes 中每个元素对应一条交易，非节点元素得到默认交易
    let trades: Vec<TradeOption> = recipes
        .entries()
        .map(|recipe| recipe.node().map(|r| decode_trade(r.elements())).unwrap_or_default())
        .collect();
    tracing::info!("解析到 {} 条交易", trades.len());
    trades
}
