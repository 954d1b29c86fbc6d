//! AppState：编辑会话状态（交易列表 + 选中行）与文件读写

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::decode::decode_trades;
use crate::model::encode::serialize_trades;
use crate::model::form::TradeForm;
use crate::model::trade::TradeOption;
use crate::model::validate::{check_trades, ValidationError};
use crate::utils::fs::{read_text_file, write_text_file};

#[derive(Debug, Default)]
pub struct AppState {
    pub source_path: Option<PathBuf>,
    pub trades: Vec<TradeOption>,
    pub selected: Option<usize>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("校验失败: {0}")]
    Validation(#[from] ValidationError),
    #[error("状态错误: {0}")]
    State(String),
}

/// 交易表格中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRow {
    pub buy_a: String,
    pub buy_a_count: i32,
    pub buy_b: String,
    pub buy_b_count: i32,
    pub sell: String,
    pub sell_count: i32,
    pub uses: i32,
    pub max_uses: i32,
    pub tier: i32,
}

impl From<&TradeOption> for TradeRow {
    fn from(t: &TradeOption) -> Self {
        Self {
            buy_a: t.buy_a.name.clone(),
            buy_a_count: t.buy_a.count,
            buy_b: t.buy_b.name.clone(),
            buy_b_count: t.buy_b.count,
            sell: t.sell.name.clone(),
            sell_count: t.sell.count,
            uses: t.uses,
            max_uses: t.max_uses,
            tier: t.tier,
        }
    }
}

impl AppState {
    /// 用解析结果替换交易列表，返回交易条数
    pub fn load_text(&mut self, text: &str) -> usize {
        self.trades = decode_trades(text);
        self.selected = if self.trades.is_empty() { None } else { Some(0) };
        self.trades.len()
    }

    /// 加载结构文件
    pub fn load_file(&mut self, p: &Path) -> Result<usize, AppError> {
        let text = read_text_file(p)?;
        let count = self.load_text(&text);
        self.source_path = Some(p.to_path_buf());
        tracing::info!("文件加载完成: {}，{} 条交易", p.display(), count);
        Ok(count)
    }

    /// 新增一条交易（buyB 默认不启用）并选中
    pub fn add_trade(&mut self) -> usize {
        let mut trade = TradeOption::default();
        trade.buy_b.count = 0;
        self.trades.push(trade);
        let row = self.trades.len() - 1;
        self.selected = Some(row);
        row
    }

    /// 删除选中的交易；没有选中时不做任何事
    pub fn delete_selected(&mut self) -> Option<TradeOption> {
        let row = self.selected.filter(|&r| r < self.trades.len())?;
        self.selected = None;
        Some(self.trades.remove(row))
    }

    /// 选中一行并返回用于填充界面的表单；越界时取消选中并返回默认表单
    pub fn select(&mut self, row: usize) -> TradeForm {
        match self.trades.get(row) {
            Some(trade) => {
                self.selected = Some(row);
                TradeForm::from_trade(trade)
            }
            None => {
                self.selected = None;
                TradeForm::default()
            }
        }
    }

    /// 将界面表单写回选中的交易
    pub fn apply_form(&mut self, form: &TradeForm) -> Result<(), AppError> {
        let trade = self
            .selected
            .and_then(|row| self.trades.get_mut(row))
            .ok_or_else(|| AppError::State("未选中交易项".into()))?;
        form.apply_to(trade);
        Ok(())
    }

    pub fn table_rows(&self) -> Vec<TradeRow> {
        self.trades.iter().map(TradeRow::from).collect()
    }

    /// 当前交易列表的完整输出文本（预览用）
    pub fn preview(&self) -> String {
        serialize_trades(&self.trades)
    }

    /// 校验后保存；校验失败时不写任何内容
    pub fn save_to_file(&self, path: &Path) -> Result<(), AppError> {
        check_trades(&self.trades)?;
        write_text_file(path, &self.preview())?;
        tracing::info!("文件已保存到: {}，{} 条交易", path.display(), self.trades.len());
        Ok(())
    }

    /// 保存回原始文件路径
    pub fn save_to_original_file(&self) -> Result<(), AppError> {
        let original_path = self
            .source_path
            .as_ref()
            .ok_or_else(|| AppError::State("原始文件路径未设置".into()))?;
        self.save_to_file(original_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// 创建临时文件用于测试
    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(content.as_bytes()).expect("写入临时文件失败");
        file
    }

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        state.add_trade();
        state.trades[0].buy_a.name = "minecraft:emerald".into();
        state.trades[0].buy_a.count = 6;
        state.trades[0].sell.name = "minecraft:bread".into();
        state
    }

    #[test]
    fn test_save_and_reload() {
        let state = sample_state();
        let file = NamedTempFile::new().expect("创建临时文件失败");
        state.save_to_file(file.path()).expect("保存应该成功");

        let mut reloaded = AppState::default();
        let count = reloaded.load_file(file.path()).expect("加载应该成功");
        assert_eq!(count, 1);
        assert_eq!(reloaded.selected, Some(0));
        assert_eq!(reloaded.trades, state.trades);
        assert_eq!(reloaded.source_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_invalid_content() {
        let file = create_test_file("{\"invalid\": json content}");
        let mut state = sample_state();
        let count = state.load_file(file.path()).expect("格式错误不应报错");
        assert_eq!(count, 0);
        assert!(state.trades.is_empty());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_load_missing_file() {
        let mut state = AppState::default();
        let result = state.load_file(Path::new("/nonexistent/村民.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_save_blocked_by_validation() {
        let mut state = sample_state();
        state.trades[0].buy_a.enable_custom = true;

        let file = create_test_file("原始内容");
        let result = state.save_to_file(file.path());
        assert!(matches!(result, Err(AppError::Validation(_))));
        // 校验失败时不写入
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "原始内容");
    }

    #[test]
    fn test_add_select_apply_delete() {
        let mut state = AppState::default();
        assert_eq!(state.add_trade(), 0);
        assert_eq!(state.trades[0].buy_b.count, 0);
        assert_eq!(state.add_trade(), 1);
        assert_eq!(state.selected, Some(1));

        let mut form = state.select(0);
        form.tier = 3;
        form.sell.name = "minecraft:apple".into();
        state.apply_form(&form).expect("写回应该成功");
        assert_eq!(state.trades[0].tier, 3);
        assert_eq!(state.trades[0].sell.name, "minecraft:apple");

        let removed = state.delete_selected().expect("应删除选中项");
        assert_eq!(removed.tier, 3);
        assert_eq!(state.trades.len(), 1);
        assert_eq!(state.selected, None);
        assert!(state.delete_selected().is_none());
        assert!(matches!(state.apply_form(&form), Err(AppError::State(_))));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = sample_state();
        let form = state.select(10);
        assert_eq!(state.selected, None);
        assert_eq!(form, TradeForm::default());
    }

    #[test]
    fn test_table_rows() {
        let state = sample_state();
        let rows = state.table_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].buy_a, "minecraft:emerald");
        assert_eq!(rows[0].buy_a_count, 6);
        assert_eq!(rows[0].buy_b_count, 0);
        assert_eq!(rows[0].max_uses, 12);
    }

    #[test]
    fn test_save_to_original_requires_path() {
        let state = sample_state();
        assert!(matches!(state.save_to_original_file(), Err(AppError::State(_))));
    }
}
