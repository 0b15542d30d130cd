//! Monochrome zone: ink, type, and restraint.

use chrono::Local;
use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline, Widget};
use vitrine_core::{CatalogData, Entry, Exhibit, FactoryMap, PreviewSize};

use crate::exhibit;

pub(crate) fn install(data: &mut CatalogData, factories: &mut FactoryMap) {
    data.entries.push(
        Entry::new("mono-clock", "Mono Clock", "mono")
            .describe("The local time, set plainly in the middle of the page")
            .tag("clock")
            .tag("time")
            .category("time")
            .preview(PreviewSize::Small)
            .source("vitrine-widgets", "src/mono.rs"),
    );
    factories.insert("mono-clock".into(), exhibit(|| MonoClock));

    data.entries.push(
        Entry::new("ink-sparkline", "Ink Sparkline", "mono")
            .describe("A wandering measurement drawn as a one-line chart")
            .tag("chart")
            .tag("data")
            .tag("animated")
            .category("charts")
            .preview(PreviewSize::Small)
            .source("vitrine-widgets", "src/mono.rs"),
    );
    factories.insert("ink-sparkline".into(), exhibit(InkSparkline::new));

    data.entries.push(
        Entry::new("type-specimen", "Type Specimen", "mono")
            .describe("Every text style the terminal can set, on one sheet")
            .tag("text")
            .tag("type")
            .category("text")
            .preview(PreviewSize::Medium)
            .source("vitrine-widgets", "src/mono.rs"),
    );
    factories.insert("type-specimen".into(), exhibit(|| TypeSpecimen));
}

struct MonoClock;

impl Exhibit for MonoClock {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let now = Local::now();
        let lines = vec![
            Line::from(""),
            Line::styled(
                now.format("%H:%M:%S").to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                now.format("%A, %-d %B %Y").to_string(),
                Style::default().fg(Color::Gray),
            ),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

struct InkSparkline {
    samples: Vec<u64>,
    level: u64,
}

impl InkSparkline {
    const WINDOW: usize = 48;

    fn new() -> Self {
        Self {
            samples: vec![4; Self::WINDOW],
            level: 4,
        }
    }
}

impl Exhibit for InkSparkline {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        Sparkline::default()
            .data(&self.samples)
            .max(8)
            .style(Style::default().fg(Color::White))
            .block(Block::default().title(" signal ").borders(Borders::ALL))
            .render(area, buf);
    }

    fn tick(&mut self) {
        // Random walk clamped to the sparkline's scale.
        let step: i64 = rand::thread_rng().gen_range(-1..=1);
        self.level = self.level.saturating_add_signed(step).min(8);
        self.samples.push(self.level);
        if self.samples.len() > Self::WINDOW {
            self.samples.remove(0);
        }
    }
}

struct TypeSpecimen;

impl Exhibit for TypeSpecimen {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let sample = "The quick brown fox jumps over the lazy dog";
        let lines = vec![
            Line::from(vec![
                Span::styled("regular   ", Style::default().fg(Color::Gray)),
                Span::raw(sample),
            ]),
            Line::from(vec![
                Span::styled("bold      ", Style::default().fg(Color::Gray)),
                Span::styled(sample, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("italic    ", Style::default().fg(Color::Gray)),
                Span::styled(sample, Style::default().add_modifier(Modifier::ITALIC)),
            ]),
            Line::from(vec![
                Span::styled("dim       ", Style::default().fg(Color::Gray)),
                Span::styled(sample, Style::default().add_modifier(Modifier::DIM)),
            ]),
            Line::from(vec![
                Span::styled("underline ", Style::default().fg(Color::Gray)),
                Span::styled(sample, Style::default().add_modifier(Modifier::UNDERLINED)),
            ]),
            Line::from(vec![
                Span::styled("reversed  ", Style::default().fg(Color::Gray)),
                Span::styled(sample, Style::default().add_modifier(Modifier::REVERSED)),
            ]),
        ];
        Paragraph::new(lines)
            .block(Block::default().title(" specimen ").borders(Borders::ALL))
            .render(area, buf);
    }
}
