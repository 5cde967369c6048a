//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyEvent) -> Option<Action> {
    match mode {
        AppMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAddItem),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEditItem),
            KeyCode::Char('d') => Some(Action::StartDeleteItem),
            KeyCode::Char('c') => Some(Action::StartClearAll),
            _ => None,
        },
        AppMode::AddingItem | AppMode::EditingItem(_) => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                matches!(mode, AppMode::EditingItem(_)).then_some(Action::DeleteItem)
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ConfirmAction;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(get_action(&mode, key(KeyCode::Char('a'))), Some(Action::StartAddItem));
        assert_eq!(get_action(&mode, key(KeyCode::Enter)), Some(Action::StartEditItem));
        assert_eq!(get_action(&mode, key(KeyCode::Down)), Some(Action::MoveSelectionDown));
        assert_eq!(get_action(&mode, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_form_mode_treats_letters_as_input() {
        let mode = AppMode::AddingItem;
        assert_eq!(get_action(&mode, key(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(&mode, key(KeyCode::Tab)), Some(Action::SwitchField));
        assert_eq!(get_action(&mode, key(KeyCode::Esc)), Some(Action::Cancel));
    }

    #[test]
    fn test_ctrl_d_only_deletes_while_editing() {
        assert_eq!(get_action(&AppMode::AddingItem, ctrl('d')), None);
        assert_eq!(
            get_action(&AppMode::EditingItem(0), ctrl('d')),
            Some(Action::DeleteItem)
        );
    }

    #[test]
    fn test_confirm_bindings() {
        let mode = AppMode::Confirm(ConfirmAction::ClearAll);
        assert_eq!(get_action(&mode, key(KeyCode::Char('Y'))), Some(Action::Submit));
        assert_eq!(get_action(&mode, key(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(get_action(&mode, key(KeyCode::Char('a'))), None);
    }
}
