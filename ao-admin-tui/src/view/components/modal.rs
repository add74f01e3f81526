//! 弹窗组件
//!
//! 通知 / 确认弹窗的大小按内容计算：宽度取标题、按钮行和正文中最宽者，
//! 正文按显示宽度折行（中文字符占两列）。

use ao_admin_core::{ConfirmDialog, DialogActionKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::keys;
use crate::model::{App, Modal};

/// 弹窗最小 / 最大宽度（含边框）
const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 70;
/// 边框加左右内边距
const H_PADDING: u16 = 6;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Dialog { dialog, focus } => render_dialog(frame, dialog, *focus),
        Modal::Help => render_help(app, frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 按显示宽度折行，优先在空格处断开
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_inclusive(' ') {
            let word_width = word.trim_end().width();
            if line_width + word_width > width && !line.is_empty() {
                lines.push(line.trim_end().to_string());
                line.clear();
                line_width = 0;
            }

            // 单个词超宽（或中文长句）时按字符断开
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && !(ch == ' ' || line.is_empty()) {
                    lines.push(line.trim_end().to_string());
                    line.clear();
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// 最多保留 `max_lines` 行，被截断时最后一行以省略号结尾
fn fit_lines(mut lines: Vec<String>, max_lines: usize, width: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);

    if let Some(last) = lines.last_mut() {
        let mut kept = String::new();
        let mut kept_width = 0;
        for ch in last.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if kept_width + ch_width + 1 > width {
                break;
            }
            kept.push(ch);
            kept_width += ch_width;
        }
        kept.push('…');
        *last = kept;
    }
    lines
}

/// 按钮文本
fn button_label(label: &str) -> String {
    format!(" {label} ")
}

/// 渲染通知 / 确认弹窗
fn render_dialog(frame: &mut Frame, dialog: &ConfirmDialog, focus: usize) {
    let screen = frame.area();

    let buttons_width: usize = dialog
        .actions()
        .iter()
        .map(|a| button_label(&a.label).width() + 4)
        .sum();
    let content_width = dialog
        .title()
        .width()
        .max(buttons_width)
        .max(dialog.body().width().min(usize::from(MAX_WIDTH - H_PADDING)));
    let width = u16::try_from(content_width)
        .unwrap_or(MAX_WIDTH)
        .saturating_add(H_PADDING)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(screen.width);

    let body_width = usize::from(width.saturating_sub(H_PADDING));
    // 上下边框 + 空行 + 正文 + 空行 + 按钮；正文放不下时截断，按钮行始终可见
    let max_body_lines = usize::from(screen.height.saturating_sub(5)).max(1);
    let body = fit_lines(wrap_text(dialog.body(), body_width), max_body_lines, body_width);
    let height = u16::try_from(body.len()).unwrap_or(u16::MAX).saturating_add(5);

    let area = centered_rect(width, height, screen);
    frame.render_widget(Clear, area);

    let border_color = if dialog.has_confirm() {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(format!(" {} ", dialog.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // 按钮固定在最后一行
    let [body_area, button_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut lines = vec![Line::from("")];
    lines.extend(
        body.into_iter()
            .map(|l| Line::styled(format!("  {l}"), Style::default().fg(Color::White))),
    );
    frame.render_widget(Paragraph::new(lines), body_area);

    let mut buttons = Vec::new();
    for (i, action) in dialog.actions().iter().enumerate() {
        let accent = match action.kind {
            DialogActionKind::Confirm => Color::Red,
            DialogActionKind::Dismiss => Color::White,
        };
        let style = if i == focus {
            Style::default().fg(Color::Black).bg(accent)
        } else {
            Style::default().fg(accent)
        };
        buttons.push(Span::raw("    "));
        buttons.push(Span::styled(button_label(&action.label), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        button_area,
    );
}

/// 渲染帮助弹窗
fn render_help(app: &App, frame: &mut Frame) {
    let entries = [
        ("↑↓/jk", keys::HELP_NAVIGATE),
        ("Enter", keys::HELP_EXPAND),
        ("Space", keys::HELP_CHECK),
        ("d/Del", keys::HELP_DELETE),
        ("Alt+r", keys::HELP_RELOAD),
        ("Alt+l", keys::HELP_LANGUAGE),
        ("q", keys::HELP_QUIT),
    ];

    let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(55, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", app.display_text(keys::HELP_TITLE)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(app.display_text(desc), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  Esc  {}", app.display_text(keys::DIALOG_CLOSE)),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
