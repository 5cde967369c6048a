//! 布局辅助函数

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// 在区域中居中放置固定尺寸的弹窗，区域不够时收缩到区域大小
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
