//! The zone-grouped entry browser, with search highlighting.

use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Mode, Row};

const HIGHLIGHT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.query.is_empty() {
        " gallery ".to_owned()
    } else if app.mode == Mode::Search {
        format!(" search: {}\u{258f} ", app.query)
    } else {
        format!(" search: {} ", app.query)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if app.mode == Mode::Search {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let lines: Vec<Line> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| render_row(app, row, i == app.selected))
        .collect();

    // Keep the selected row inside the bordered viewport.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible == 0 {
        0
    } else {
        app.selected.saturating_sub(visible - 1)
    };

    let paragraph = Paragraph::new(lines).block(block).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_row(app: &App, row: &Row, selected: bool) -> Line<'static> {
    match row {
        Row::Header { zone_id } => {
            let zone = app.registry.zone(zone_id);
            let name = zone.map(|z| z.name.as_str()).unwrap_or(zone_id.as_str());
            let accent = zone.map(|z| z.accent).unwrap_or(Color::White);
            Line::styled(
                format!("\u{258d}{name}"),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )
        }
        Row::Entry { id, hit } => {
            let Some(entry) = app.registry.get(id) else {
                return Line::raw(format!("  {id}"));
            };

            let base = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let marker = if app.prefs.is_marked(id) { "\u{2605} " } else { "  " };

            let mut spans = vec![Span::styled(marker.to_owned(), base.fg(Color::Yellow))];
            match hit {
                Some(hit) if !hit.name_spans.is_empty() => {
                    spans.extend(highlighted(&entry.name, &hit.name_spans, base));
                }
                _ => spans.push(Span::styled(entry.name.clone(), base)),
            }

            // A tag-only or description-only match still shows where it hit.
            if let Some(hit) = hit {
                if hit.name_spans.is_empty() {
                    if let Some((tag_index, tag_spans)) = hit.tag_spans.first() {
                        spans.push(Span::styled("  #".to_owned(), base.fg(Color::DarkGray)));
                        spans.extend(highlighted(&entry.tags[*tag_index], tag_spans, base));
                    } else {
                        spans.push(Span::styled(
                            "  \u{2026}in description".to_owned(),
                            base.fg(Color::DarkGray),
                        ));
                    }
                }
            }

            Line::from(spans)
        }
    }
}

/// Split `text` into styled spans, with the matched byte ranges (which
/// are ascending and non-overlapping) in the highlight style.
fn highlighted(text: &str, matches: &[Range<usize>], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for m in matches {
        if m.start > cursor {
            spans.push(Span::styled(text[cursor..m.start].to_owned(), base));
        }
        spans.push(Span::styled(
            text[m.clone()].to_owned(),
            base.patch(HIGHLIGHT),
        ));
        cursor = m.end;
    }
    if cursor < text.len() {
        spans.push(Span::styled(text[cursor..].to_owned(), base));
    }
    spans
}
