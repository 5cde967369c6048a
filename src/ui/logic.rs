//! 业务逻辑处理 (Update/Dispatch)
//!
//! 控制器：把 Action 分发为条目操作，并在每次修改后重新计算总卡路里

use super::actions::Action;
use super::state::{App, AppMode, ConfirmAction, InputField};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartAddItem => self.start_add_item(),
            Action::StartEditItem => self.item_edit_click(),
            Action::StartDeleteItem => self.start_delete_item(),
            Action::StartClearAll => self.start_clear_all(),

            Action::Cancel => match self.mode {
                AppMode::AddingItem | AppMode::EditingItem(_) => self.back_click(),
                _ => self.cancel(),
            },

            Action::Submit => match &self.mode {
                AppMode::AddingItem => self.item_add_submit(),
                AppMode::EditingItem(_) => self.item_update_submit(),
                AppMode::Confirm(_) => self.execute_confirm(),
                AppMode::Normal => {}
            },

            Action::DeleteItem => {
                if matches!(self.mode, AppMode::EditingItem(_)) {
                    self.item_delete_submit();
                }
            }

            Action::SwitchField => {
                if self.is_editing_form() {
                    self.input_field = self.input_field.next();
                }
            }

            Action::Input(c) => {
                if self.is_editing_form() {
                    self.active_input_mut().push(c);
                }
            }

            Action::DeleteChar => {
                if self.is_editing_form() {
                    self.active_input_mut().pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    // ============ 表单相关 ============

    /// 清空表单输入
    pub fn clear_input(&mut self) {
        self.name_input.clear();
        self.calories_input.clear();
        self.input_field = InputField::Name;
    }

    /// 两个字段都非空才允许提交
    fn input_is_complete(&self) -> bool {
        !self.name_input.trim().is_empty() && !self.calories_input.trim().is_empty()
    }

    pub fn start_add_item(&mut self) {
        self.store.clear_current_item();
        self.clear_input();
        self.mode = AppMode::AddingItem;
        self.message = None;
    }

    /// 提交新条目
    pub fn item_add_submit(&mut self) {
        if !self.input_is_complete() {
            self.message = Some("请输入名称和卡路里".to_string());
            return;
        }

        match self.store.add_item(&self.name_input, &self.calories_input) {
            Ok(item) => {
                log::info!("Added item {} ({}, {} kcal)", item.id, item.name, item.calories);
                let total = self.store.total_calories();
                self.selected_index = self.store.len() - 1;
                self.clear_input();
                self.mode = AppMode::Normal;
                self.message = Some(format!("已添加 {}，总计 {} 卡路里", item.name, total));
            }
            Err(err) => {
                log::debug!("Rejected new item: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    // ============ 编辑相关 ============

    /// 进入编辑状态，把选中条目填入表单
    pub fn item_edit_click(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };

        match self.store.set_current_item(id) {
            Ok(item) => {
                self.name_input = item.name.clone();
                self.calories_input = item.calories.to_string();
                self.input_field = InputField::Name;
                self.mode = AppMode::EditingItem(id);
                self.message = None;
            }
            Err(err) => {
                log::warn!("Cannot edit item {}: {}", id, err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// 提交对当前条目的修改
    pub fn item_update_submit(&mut self) {
        if !self.input_is_complete() {
            self.message = Some("请输入名称和卡路里".to_string());
            return;
        }

        match self.store.update_item(&self.name_input, &self.calories_input) {
            Ok(item) => {
                log::info!("Updated item {} ({}, {} kcal)", item.id, item.name, item.calories);
                self.store.total_calories();
                self.store.clear_current_item();
                self.clear_input();
                self.mode = AppMode::Normal;
                self.message = Some(format!("已更新 {}", item.name));
            }
            Err(err) => {
                log::debug!("Rejected update: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// 删除正在编辑的条目
    pub fn item_delete_submit(&mut self) {
        let Some(id) = self.store.current_item().map(|item| item.id) else {
            self.back_click();
            return;
        };
        self.delete_item(id);
        self.clear_input();
        self.mode = AppMode::Normal;
    }

    /// 返回：放弃编辑
    pub fn back_click(&mut self) {
        self.store.clear_current_item();
        self.clear_input();
        self.mode = AppMode::Normal;
        self.message = None;
    }

    // ============ 删除/清空相关 ============

    pub fn start_delete_item(&mut self) {
        if let Some(item) = self.selected_item() {
            self.mode = AppMode::Confirm(ConfirmAction::Delete(item.id));
        }
    }

    pub fn start_clear_all(&mut self) {
        if self.is_list_visible() {
            self.mode = AppMode::Confirm(ConfirmAction::ClearAll);
        }
    }

    /// 清空所有条目
    pub fn clear_all_click(&mut self) {
        let count = self.store.len();
        self.store.clear_all();
        self.store.total_calories();
        self.clamp_selection();
        log::info!("Cleared {} items", count);
        self.message = Some(format!("已清空 {} 个条目", count));
    }

    fn delete_item(&mut self, id: u32) {
        match self.store.delete_item(id) {
            Ok(item) => {
                log::info!("Deleted item {} ({})", item.id, item.name);
                self.store.total_calories();
                self.clamp_selection();
                self.message = Some(format!("已删除 {}", item.name));
            }
            Err(err) => {
                log::warn!("Cannot delete item {}: {}", id, err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// 执行确认操作
    pub fn execute_confirm(&mut self) {
        match &self.mode {
            AppMode::Confirm(ConfirmAction::Delete(id)) => {
                let id = *id;
                self.delete_item(id);
            }
            AppMode::Confirm(ConfirmAction::ClearAll) => self.clear_all_click(),
            _ => {}
        }
        self.mode = AppMode::Normal;
    }

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }
}
