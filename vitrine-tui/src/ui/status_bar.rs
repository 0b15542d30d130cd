//! One-line status bar: hints on the left, counts on the right.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut spans = match app.mode {
        Mode::Search => vec![
            Span::styled("typing filters ", dim),
            Span::styled("[enter]", key),
            Span::styled(" keep ", dim),
            Span::styled("[esc]", key),
            Span::styled(" discard", dim),
        ],
        Mode::Normal => vec![
            Span::styled("[/]", key),
            Span::styled(" search ", dim),
            Span::styled("[\u{2191}\u{2193}]", key),
            Span::styled(" move ", dim),
            Span::styled("[enter]", key),
            Span::styled(" preview ", dim),
            Span::styled("[f]", key),
            Span::styled(" favorite ", dim),
            Span::styled("[q]", key),
            Span::styled(" quit", dim),
        ],
    };

    if let Some(status) = &app.status {
        spans.push(Span::styled("  \u{2502} ", dim));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::White)));
    }

    let favorites = app.prefs.marked().len();
    spans.push(Span::styled(
        format!(
            "  \u{2502} {} exhibits, {} favorite(s)",
            app.registry.count(),
            favorites
        ),
        dim,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
