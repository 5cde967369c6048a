//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode, ConfirmAction, InputField};
use crate::models::Item;
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_fixed;

/// 列表中一行的文本
pub fn format_item_line(item: &Item) -> String {
    format!("{}: {} Calories", item.name, item.calories)
}

/// 编辑弹窗标题，带上条目的添加时间
fn edit_form_title(app: &App) -> String {
    match app.store.current_item() {
        Some(item) => format!("编辑条目 (added {})", item.added_at.format("%H:%M:%S")),
        None => "编辑条目".to_string(),
    }
}

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 总计
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    if app.is_list_visible() {
        render_item_list(frame, app, chunks[1]);
    } else {
        render_empty_list(frame, chunks[1]);
    }
    render_total(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染弹窗
    match &app.mode {
        AppMode::AddingItem => render_item_form(frame, app, "添加条目"),
        AppMode::EditingItem(_) => render_item_form(frame, app, &edit_form_title(app)),
        AppMode::Confirm(action) => render_confirm_dialog(frame, action),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🍽 Tracalorie")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_item_list(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.store.current_item().map(|item| item.id);

    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if editing == Some(item.id) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Green)
            };

            ListItem::new(Line::from(vec![Span::styled(format_item_line(item), style)]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("条目").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_empty_list(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("暂无条目，按 'a' 添加第一条")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(placeholder, area);
}

fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let total = Paragraph::new(format!("Total Calories: {}", app.store.cached_total()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(total, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[a] 添加  [e/Enter] 编辑  [d] 删除  [c] 清空  [j/k] 导航  [q] 退出"
        }
        AppMode::AddingItem => "[Tab] 切换字段  [Enter] 添加  [Esc] 取消",
        AppMode::EditingItem(_) => "[Tab] 切换字段  [Enter] 更新  [Ctrl-D] 删除  [Esc] 返回",
        AppMode::Confirm(_) => "[y] 确认  [n] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_item_form(frame: &mut Frame, app: &App, title: &str) {
    let area = centered_fixed(50, 10, frame.area());
    let inner = render_dialog_framework(frame, area, title);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "名称",
        &app.name_input,
        app.input_field == InputField::Name,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[1],
        "卡路里",
        &app.calories_input,
        app.input_field == InputField::Calories,
        Color::Yellow,
    );

    let hint = match app.mode {
        AppMode::EditingItem(_) => "Enter 更新  Ctrl-D 删除  Esc 返回",
        _ => "Enter 添加  Esc 取消",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

fn render_confirm_dialog(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_fixed(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let message = match action {
        ConfirmAction::Delete(_) => "确认删除该条目？",
        ConfirmAction::ClearAll => "确认清空所有条目？",
    };

    let dialog = Paragraph::new(format!("{}\n\n[y] 确认  [n] 取消", message))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("⚠️ 确认操作").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
