//! Retro terminal zone: green phosphor and machine-room props.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Widget};
use vitrine_core::{CatalogData, Entry, Exhibit, FactoryMap, PreviewSize};

use crate::exhibit;

pub(crate) fn install(data: &mut CatalogData, factories: &mut FactoryMap) {
    data.entries.push(
        Entry::new("boot-log", "Boot Log", "retro")
            .describe("A machine waking up, one subsystem per line")
            .tag("text")
            .tag("animated")
            .category("text")
            .category("time")
            .preview(PreviewSize::Medium)
            .source("vitrine-widgets", "src/retro.rs"),
    );
    factories.insert("boot-log".into(), exhibit(BootLog::new));

    data.entries.push(
        Entry::new("scanlines", "Scanlines", "retro")
            .describe("Rolling CRT interference for layering under other exhibits")
            .tag("chrome")
            .tag("animated")
            .category("chrome")
            .preview(PreviewSize::Large)
            .source("vitrine-widgets", "src/retro.rs"),
    );
    factories.insert("scanlines".into(), exhibit(Scanlines::new));

    data.entries.push(
        Entry::new("ledger-table", "Ledger Table", "retro")
            .describe("A fixed-width accounts table straight off a line printer")
            .tag("table")
            .tag("data")
            .category("charts")
            .preview(PreviewSize::Medium)
            .source("vitrine-widgets", "src/retro.rs"),
    );
    factories.insert("ledger-table".into(), exhibit(|| LedgerTable));
}

struct BootLog {
    visible: usize,
}

impl BootLog {
    const LINES: [&'static str; 8] = [
        "BIOS 4.01 ... OK",
        "MEMORY 640K ... OK",
        "FLOPPY A: ... OK",
        "SERIAL 1 ... OK",
        "SERIAL 2 ... absent",
        "NETWORK ... OK",
        "CLOCK ... drifting",
        "READY.",
    ];

    fn new() -> Self {
        Self { visible: 1 }
    }
}

impl Exhibit for BootLog {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Self::LINES[..self.visible]
            .iter()
            .map(|line| Line::styled(*line, Style::default().fg(Color::LightGreen)))
            .collect();
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" boot ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(area, buf);
    }

    fn tick(&mut self) {
        if self.visible < Self::LINES.len() {
            self.visible += 1;
        }
    }
}

struct Scanlines {
    phase: u16,
}

impl Scanlines {
    fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Exhibit for Scanlines {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            let bright = (y + self.phase) % 3 == 0;
            let style = if bright {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Rgb(0, 70, 0))
            };
            for x in area.left()..area.right() {
                buf[(x, y)].set_char('\u{2500}').set_style(style);
            }
        }
    }

    fn tick(&mut self) {
        self.phase = self.phase.wrapping_add(1);
    }
}

struct LedgerTable;

impl Exhibit for LedgerTable {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let rows = [
            Row::new(vec!["0041", "punch cards", "12.00"]),
            Row::new(vec!["0042", "ribbon, spare", "3.50"]),
            Row::new(vec!["0043", "fan belt", "7.25"]),
            Row::new(vec!["0044", "coffee, urn", "18.00"]),
        ];
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Min(12),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["NO.", "ITEM", "COST"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::LightGreen))
        .block(Block::default().title(" ledger ").borders(Borders::ALL));
        Widget::render(table, area, buf);
    }
}
