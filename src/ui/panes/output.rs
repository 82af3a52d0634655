//! Lesson output pane rendering

use crate::console::ConsoleLine;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the output pane
///
/// `scroll_offset` is clamped so the last page stays full; pass `usize::MAX`
/// to follow the newest line.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[ConsoleLine],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = lines.len();
    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let newest = total_items - 1;
    let visible_items: Vec<ListItem> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            // Tabs render as a single cell otherwise
            let text = line.text.replace('\t', "    ");
            let style = if idx == newest {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
