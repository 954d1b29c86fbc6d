//! 交易数据模型：物品（ItemData）与交易项（TradeOption）

use crate::model::node::ListEntry;

pub const DEFAULT_ITEM_NAME: &str = "minecraft:air";
pub const DEFAULT_DISPLAY_NAME: &str = "自定义名称";
pub const DEFAULT_LORE: &str = "自定义注释";
pub const DEFAULT_ENCH_ID: i32 = 9;
pub const DEFAULT_ENCH_LEVEL: i32 = 5;
pub const DEFAULT_MAX_USES: i32 = 12;

/// 单个物品槽位
///
/// 每个开关都与其负载成对出现，关闭开关时负载仍然保留。
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub name: String,
    pub count: i32,
    pub damage: i32,

    pub enable_name: bool,
    pub display_name: String,
    pub enable_lore: bool,
    pub lore: String,
    pub enable_ench: bool,
    pub ench_id: i32,
    pub ench_level: i32,

    /// 自定义 NBT 节点（原样透传，任意 JSON 对象）
    pub enable_custom: bool,
    pub custom_nodes: Vec<ListEntry>,
}

impl Default for ItemData {
    fn default() -> Self {
        Self {
            name: DEFAULT_ITEM_NAME.to_string(),
            count: 1,
            damage: 0,
            enable_name: false,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            enable_lore: false,
            lore: DEFAULT_LORE.to_string(),
            enable_ench: false,
            ench_id: DEFAULT_ENCH_ID,
            ench_level: DEFAULT_ENCH_LEVEL,
            enable_custom: false,
            custom_nodes: Vec::new(),
        }
    }
}

impl ItemData {
    /// 是否需要输出 `tag` 复合节点
    pub fn has_tag(&self) -> bool {
        self.enable_name || self.enable_lore || self.enable_ench
    }
}

/// 交易槽位，顺序即序列化顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    BuyA,
    BuyB,
    Sell,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::BuyA, Slot::BuyB, Slot::Sell];

    /// 树中的字段名
    pub fn key(self) -> &'static str {
        match self {
            Slot::BuyA => "buyA",
            Slot::BuyB => "buyB",
            Slot::Sell => "sell",
        }
    }

    pub fn from_key(key: &str) -> Option<Slot> {
        match key {
            "buyA" => Some(Slot::BuyA),
            "buyB" => Some(Slot::BuyB),
            "sell" => Some(Slot::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// 一条村民交易
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOption {
    pub buy_a: ItemData,
    pub buy_b: ItemData,
    pub sell: ItemData,
    pub uses: i32,
    pub max_uses: i32,
    pub tier: i32,
}

impl Default for TradeOption {
    fn default() -> Self {
        Self {
            buy_a: ItemData::default(),
            buy_b: ItemData::default(),
            sell: ItemData::default(),
            uses: 0,
            max_uses: DEFAULT_MAX_USES,
            tier: 0,
        }
    }
}

impl TradeOption {
    pub fn item(&self, slot: Slot) -> &ItemData {
        match slot {
            Slot::BuyA => &self.buy_a,
            Slot::BuyB => &self.buy_b,
            Slot::Sell => &self.sell,
        }
    }

    pub fn item_mut(&mut self, slot: Slot) -> &mut ItemData {
        match slot {
            Slot::BuyA => &mut self.buy_a,
            Slot::BuyB => &mut self.buy_b,
            Slot::Sell => &mut self.sell,
        }
    }

    /// 三个物品槽位（按 buyA / buyB / sell 顺序）
    pub fn items(&self) -> impl Iterator<Item = (Slot, &ItemData)> {
        Slot::ALL.into_iter().map(move |slot| (slot, self.item(slot)))
    }
}
