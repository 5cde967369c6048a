//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 触发特定功能
    StartAddItem,
    StartEditItem,
    StartDeleteItem,
    StartClearAll,

    // 表单/通用交互
    Cancel,      // Esc / n，编辑模式下即 "返回"
    Submit,      // Enter / y
    DeleteItem,  // 编辑表单中的 Ctrl-D
    SwitchField, // Tab / BackTab
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
