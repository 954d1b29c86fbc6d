//! 表单快照：界面逐字段读写交易数据的通道
//!
//! `from_item`/`from_trade`（填充界面）与 `apply_to`（界面写回模型）是两个独立操作，
//! 互不调用；填充期间屏蔽界面变更通知由界面层自己负责。

use serde::Deserialize;
use serde_json::Value;

use crate::model::catalog::ItemMapping;
use crate::model::node::ListEntry;
use crate::model::trade::{ItemData, TradeOption};

/// 解析自定义节点输入框文本：必须是数组，对象元素原样保留，非对象元素跳过；失败时返回空
pub fn parse_custom_nodes(text: &str) -> Vec<ListEntry> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter(|v| v.is_object())
            .filter_map(|v| ListEntry::deserialize(v).ok())
            .collect(),
        Ok(_) => {
            tracing::warn!("自定义节点不是数组，按空内容处理");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("自定义节点JSON解析失败，按空内容处理: {}", e);
            Vec::new()
        }
    }
}

/// 单个物品槽位的表单状态
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub count: i32,
    pub damage: i32,

    pub name_checked: bool,
    pub display_name: String,
    pub lore_checked: bool,
    pub lore: String,
    pub ench_checked: bool,
    pub ench_id: i32,
    pub ench_level: i32,
    /// 自定义模式下三个内置 tag 复选框不可用
    pub tag_toggles_enabled: bool,

    pub custom_checked: bool,
    pub custom_text: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::from_item(&ItemData::default())
    }
}

impl ItemForm {
    /// 模型 → 界面
    pub fn from_item(item: &ItemData) -> Self {
        let custom = item.enable_custom;
        let custom_text = if custom {
            serde_json::to_string_pretty(&item.custom_nodes).unwrap_or_default()
        } else {
            String::new()
        };

        Self {
            name: item.name.clone(),
            count: item.count,
            damage: item.damage,
            name_checked: !custom && item.enable_name,
            display_name: item.display_name.clone(),
            lore_checked: !custom && item.enable_lore,
            lore: item.lore.clone(),
            ench_checked: !custom && item.enable_ench,
            ench_id: item.ench_id,
            ench_level: item.ench_level,
            tag_toggles_enabled: !custom,
            custom_checked: custom,
            custom_text,
        }
    }

    /// 界面 → 模型
    pub fn apply_to(&self, item: &mut ItemData) {
        item.name = self.name.trim().to_string();
        item.count = self.count;
        item.damage = self.damage;
        item.enable_name = self.name_checked;
        item.display_name = self.display_name.trim().to_string();
        item.enable_lore = self.lore_checked;
        item.lore = self.lore.trim().to_string();
        item.enable_ench = self.ench_checked;
        item.ench_id = self.ench_id;
        item.ench_level = self.ench_level;
        item.enable_custom = self.custom_checked;
        item.custom_nodes = if self.custom_checked {
            parse_custom_nodes(&self.custom_text)
        } else {
            Vec::new()
        };
    }

    /// 切换自定义模式：开启时取消并禁用内置 tag 复选框
    pub fn set_custom_checked(&mut self, checked: bool) {
        self.custom_checked = checked;
        self.tag_toggles_enabled = !checked;
        if checked {
            self.name_checked = false;
            self.lore_checked = false;
            self.ench_checked = false;
        }
    }

    /// 物品选择器选中一项后回填
    pub fn apply_pick(&mut self, mapping: &ItemMapping) {
        self.name = mapping.english_id.clone();
        self.damage = mapping.default_damage;
        if self.count == 0 {
            self.count = 1;
        }
    }

    pub fn display_visible(&self) -> bool {
        self.name_checked
    }

    pub fn lore_visible(&self) -> bool {
        self.lore_checked
    }

    pub fn ench_visible(&self) -> bool {
        self.ench_checked
    }

    pub fn custom_visible(&self) -> bool {
        self.custom_checked
    }
}

/// 一条交易的表单状态
#[derive(Debug, Clone, PartialEq)]
pub struct TradeForm {
    pub buy_a: ItemForm,
    pub buy_b: ItemForm,
    pub sell: ItemForm,
    pub uses: i32,
    pub max_uses: i32,
    pub tier: i32,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self::from_trade(&TradeOption::default())
    }
}

impl TradeForm {
    pub fn from_trade(trade: &TradeOption) -> Self {
        Self {
            buy_a: ItemForm::from_item(&trade.buy_a),
            buy_b: ItemForm::from_item(&trade.buy_b),
            sell: ItemForm::from_item(&trade.sell),
            uses: trade.uses,
            max_uses: trade.max_uses,
            tier: trade.tier,
        }
    }

    pub fn apply_to(&self, trade: &mut TradeOption) {
        self.buy_a.apply_to(&mut trade.buy_a);
        self.buy_b.apply_to(&mut trade.buy_b);
        self.sell.apply_to(&mut trade.sell);
        trade.uses = self.uses;
        trade.max_uses = self.max_uses;
        trade.tier = self.tier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::{make_node, TagType, TaggedNode};

    #[test]
    fn test_parse_custom_nodes() {
        let nodes = parse_custom_nodes(r#"[{"name":"CanDestroy","value":[],"type":9}, 5, {"id":"x"}]"#);
        assert_eq!(nodes.len(), 2);
        let first = nodes[0].as_node().expect("应为节点");
        assert_eq!(first.name, "CanDestroy");
        assert_eq!(first.tag, TagType::LIST);
        assert_eq!(nodes[1], ListEntry::Raw(serde_json::json!({"id": "x"})));

        assert!(parse_custom_nodes("").is_empty());
        assert!(parse_custom_nodes("   ").is_empty());
        assert!(parse_custom_nodes("[not json").is_empty());
        assert!(parse_custom_nodes(r#"{"name":"a","value":1,"type":3}"#).is_empty());
    }

    #[test]
    fn test_populate_keeps_payload_when_flags_off() {
        let item = ItemData {
            display_name: "保留".into(),
            ..ItemData::default()
        };
        let form = ItemForm::from_item(&item);
        assert!(!form.name_checked);
        assert!(!form.display_visible());
        assert_eq!(form.display_name, "保留");
        assert!(form.tag_toggles_enabled);
        assert!(form.custom_text.is_empty());
    }

    #[test]
    fn test_populate_custom_mode_disables_tag_toggles() {
        let item = ItemData {
            enable_name: true,
            enable_ench: true,
            enable_custom: true,
            custom_nodes: vec![make_node("CanDestroy", Vec::<TaggedNode>::new(), TagType::LIST).into()],
            ..ItemData::default()
        };
        let form = ItemForm::from_item(&item);
        assert!(!form.name_checked && !form.lore_checked && !form.ench_checked);
        assert!(!form.tag_toggles_enabled);
        assert!(form.custom_visible());
        assert_eq!(parse_custom_nodes(&form.custom_text), item.custom_nodes);
    }

    #[test]
    fn test_sync_trims_and_parses() {
        let mut form = ItemForm::default();
        form.name = "  minecraft:emerald ".into();
        form.display_name = " 名字 ".into();
        form.name_checked = true;
        form.set_custom_checked(true);
        form.custom_text = "这不是JSON".into();

        let mut item = ItemData::default();
        form.apply_to(&mut item);
        assert_eq!(item.name, "minecraft:emerald");
        assert_eq!(item.display_name, "名字");
        // 自定义模式下内置开关被取消
        assert!(!item.enable_name);
        assert!(item.enable_custom);
        assert!(item.custom_nodes.is_empty());

        form.set_custom_checked(false);
        form.custom_text = r#"[{"name":"x","value":1,"type":3}]"#.into();
        form.apply_to(&mut item);
        assert!(!item.enable_custom);
        assert!(item.custom_nodes.is_empty());
    }

    #[test]
    fn test_trade_form_round_trip() {
        let mut trade = TradeOption {
            uses: 2,
            max_uses: 30,
            tier: 1,
            ..TradeOption::default()
        };
        trade.sell.enable_lore = true;
        trade.sell.lore = "说明".into();

        let form = TradeForm::from_trade(&trade);
        let mut copy = TradeOption::default();
        form.apply_to(&mut copy);
        assert_eq!(copy, trade);
    }

    #[test]
    fn test_apply_pick() {
        let mapping = ItemMapping {
            category: "武器".into(),
            english_id: "minecraft:iron_sword".into(),
            chinese_name: "铁剑".into(),
            default_damage: 32767,
        };
        let mut form = ItemForm { count: 0, ..ItemForm::default() };
        form.apply_pick(&mapping);
        assert_eq!(form.name, "minecraft:iron_sword");
        assert_eq!(form.damage, 32767);
        assert_eq!(form.count, 1);

        form.count = 5;
        form.apply_pick(&mapping);
        assert_eq!(form.count, 5);
    }
}
