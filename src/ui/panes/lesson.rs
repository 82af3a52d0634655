//! Lesson pane rendering
//!
//! Lists the lesson's sections, marks the one that produced the most recent
//! output line, and shows that section's note underneath.

use crate::lessons::Section;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the lesson pane
pub fn render_lesson_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    sections: &[Section],
    current: Option<usize>,
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
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(sections.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(inner);

    let list: Vec<Line> = sections
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            if Some(idx) == current {
                Line::from(vec![
                    Span::styled(
                        " ▶ ",
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        section.title,
                        Style::default()
                            .fg(DEFAULT_THEME.heading)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(section.title, Style::default().fg(DEFAULT_THEME.comment)),
                ])
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(list), rows[0]);

    let note = match current.and_then(|idx| sections.get(idx)) {
        Some(section) => Paragraph::new(section.note).style(Style::default().fg(DEFAULT_THEME.fg)),
        None => Paragraph::new("Step forward to start the lesson.")
            .style(Style::default().fg(DEFAULT_THEME.comment)),
    };

    let note_height = rows[1].height.max(1) as usize;
    *scroll_offset = (*scroll_offset).min(note_height.saturating_sub(1));
    let note = note
        .wrap(Wrap { trim: true })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(note, rows[1]);
}
