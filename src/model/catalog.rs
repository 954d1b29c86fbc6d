//! 物品库：`items_config.csv` 的加载、默认生成、文本编辑与筛选

use std::path::{Path, PathBuf};

use crate::model::data_core::AppError;
use crate::utils::fs::{read_text_file, write_text_file};

pub const CATALOG_FILE_NAME: &str = "items_config.csv";
/// 分类下拉框中的“全部”选项
pub const CATEGORY_ALL: &str = "全部";

/// 默认物品库内容（文件不存在时写出）
pub const DEFAULT_CATALOG: &str = "\
# Minecraft 村民交易物品配置文件
# 格式：分类, 英文ID, 中文名, 默认Damage值
# 以 # 开头的行是注释，不会被读取

基础, minecraft:air, 空气, 0
矿物, minecraft:emerald, 绿宝石, 0
矿物, minecraft:diamond, 钻石, 0
矿物, minecraft:iron_ingot, 铁锭, 0
矿物, minecraft:gold_ingot, 金锭, 0
武器, minecraft:iron_sword, 铁剑, 32767
武器, minecraft:diamond_sword, 钻石剑, 32767
食物, minecraft:bread, 面包, 0
食物, minecraft:apple, 苹果, 0
方块, minecraft:chest, 箱子, 0
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMapping {
    pub category: String,
    pub english_id: String,
    pub chinese_name: String,
    pub default_damage: i32,
}

impl ItemMapping {
    /// 列表展示格式：[矿物] 绿宝石（minecraft:emerald）
    pub fn label(&self) -> String {
        format!("[{}] {}（{}）", self.category, self.chinese_name, self.english_id)
    }
}

/// 解析物品库文本；跳过空行、注释行和字段不足的行
pub fn parse_catalog(text: &str) -> Vec<ItemMapping> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() < 4 {
                tracing::debug!("跳过字段不足的物品库行: {}", line);
                return None;
            }
            Some(ItemMapping {
                category: parts[0].to_string(),
                english_id: parts[1].to_string(),
                chinese_name: parts[2].to_string(),
                default_damage: parts[3].parse().unwrap_or(0),
            })
        })
        .collect()
}

/// 默认物品库路径：可执行文件同级目录
pub fn default_catalog_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(CATALOG_FILE_NAME)
}

/// 加载物品库；文件不存在时先写出默认内容
pub fn load_or_create(path: &Path) -> Result<Vec<ItemMapping>, AppError> {
    if !path.exists() {
        tracing::info!("物品库不存在，生成默认配置: {}", path.display());
        write_text_file(path, DEFAULT_CATALOG)?;
    }
    let text = read_text_file(path)?;
    let items = parse_catalog(&text);
    tracing::info!("物品库加载完成: {} 项", items.len());
    Ok(items)
}

/// 读取物品库原始文本供编辑；文件不存在时返回空文本
pub fn read_catalog_text(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Ok(String::new());
    }
    read_text_file(path)
}

/// 覆盖写入编辑后的物品库文本，返回重新解析的条目（用于刷新补全候选）
pub fn save_catalog_text(path: &Path, text: &str) -> Result<Vec<ItemMapping>, AppError> {
    write_text_file(path, text)?;
    let items = parse_catalog(text);
    tracing::info!("物品库已更新: {}，{} 项", path.display(), items.len());
    Ok(items)
}

/// 不重复的分类（按首次出现顺序）
pub fn categories(items: &[ItemMapping]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

/// 分类 + 搜索词双重过滤（搜索不区分大小写，匹配展示标签）
pub fn filter_items<'a>(items: &'a [ItemMapping], category: &str, search: &str) -> Vec<&'a ItemMapping> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| category == CATEGORY_ALL || item.category == category)
        .filter(|item| item.label().to_lowercase().contains(&needle))
        .collect()
}

/// 名称输入框的自动补全候选
pub fn completions(items: &[ItemMapping]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| {
            [
                item.chinese_name.clone(),
                item.english_id.clone(),
                format!("{}（{}）", item.chinese_name, item.english_id),
            ]
        })
        .collect()
}
