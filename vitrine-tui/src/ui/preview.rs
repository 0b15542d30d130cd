//! The isolated preview pane.
//!
//! The mounted exhibit draws through its `RenderSession`, so a panic
//! mid-frame leaves this pane showing the failure placeholder and the
//! rest of the gallery untouched.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;
use vitrine_core::SessionState;

use crate::app::App;

pub(super) fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(session) = &mut app.preview else {
        let block = bordered(" preview ", Color::DarkGray);
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::styled("enter opens the selected exhibit", Style::default().fg(Color::DarkGray)),
            Line::styled("esc closes it again", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let entry = app.registry.get(session.entry_id());
    let accent = entry
        .and_then(|e| app.registry.zone(&e.zone))
        .map(|z| z.accent)
        .unwrap_or(Color::White);
    let title = match entry {
        Some(entry) => format!(" {} ", entry.name),
        None => format!(" {} ", session.entry_id()),
    };

    match session.state() {
        SessionState::Mounted => {
            let mut block = bordered(&title, accent);
            let related = app.registry.related(session.entry_id(), 3);
            if !related.is_empty() {
                block = block.title_bottom(format!(" related: {} ", related.join(", ")));
            }
            let inner = block.inner(area);
            block.render(area, frame.buffer_mut());
            session.render(inner, frame.buffer_mut());
        }
        SessionState::Failed => {
            let mut lines = vec![
                Line::from(""),
                Line::styled(
                    "\u{2717} exhibit failed",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Line::raw(format!("id: {}", session.entry_id())),
            ];
            if let Some(failure) = session.failure() {
                lines.push(Line::styled(
                    failure.to_string(),
                    Style::default().fg(Color::Red),
                ));
            }
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "esc to close, enter to retry with a fresh instance",
                Style::default().fg(Color::DarkGray),
            ));
            let placeholder = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(bordered(" failed ", Color::Red));
            frame.render_widget(placeholder, area);
        }
        SessionState::NotFound => {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::styled(
                    "? not in the catalog",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(format!("no exhibit is registered as '{}'", session.entry_id())),
            ])
            .alignment(Alignment::Center)
            .block(bordered(" not found ", Color::Yellow));
            frame.render_widget(placeholder, area);
        }
        SessionState::Resolving => {
            let placeholder = Paragraph::new(Line::styled(
                "loading\u{2026}",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .block(bordered(&title, accent));
            frame.render_widget(placeholder, area);
        }
        SessionState::Destroyed => {}
    }
}

fn bordered(title: &str, accent: Color) -> Block<'static> {
    Block::default()
        .title(title.to_owned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
}
