//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::models::{Item, ItemStore};

/// 应用状态
pub struct App {
    pub store: ItemStore,
    pub selected_index: usize,
    pub mode: AppMode,
    pub name_input: String,
    pub calories_input: String,
    pub input_field: InputField,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddingItem,
    EditingItem(u32), // 正在编辑的条目 ID
    Confirm(ConfirmAction),
}

/// 确认操作类型
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    Delete(u32),
    ClearAll,
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputField {
    Name,
    Calories,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::Name => InputField::Calories,
            InputField::Calories => InputField::Name,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(mut store: ItemStore) -> Self {
        store.total_calories();
        let mut app = Self {
            store,
            selected_index: 0,
            mode: AppMode::Normal,
            name_input: String::new(),
            calories_input: String::new(),
            input_field: InputField::Name,
            message: None,
        };
        app.clamp_selection();
        app
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 列表为空时隐藏
    pub fn is_list_visible(&self) -> bool {
        !self.store.is_empty()
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&Item> {
        self.store.items().get(self.selected_index)
    }

    /// 当前输入字段的缓冲区
    pub fn active_input_mut(&mut self) -> &mut String {
        match self.input_field {
            InputField::Name => &mut self.name_input,
            InputField::Calories => &mut self.calories_input,
        }
    }

    pub fn is_editing_form(&self) -> bool {
        matches!(self.mode, AppMode::AddingItem | AppMode::EditingItem(_))
    }
}
