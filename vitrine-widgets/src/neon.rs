//! Neon zone: saturated color and constant motion.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Gauge, Widget};
use vitrine_core::{CatalogData, Entry, Exhibit, FactoryMap, PreviewSize};

use crate::exhibit;

pub(crate) fn install(data: &mut CatalogData, factories: &mut FactoryMap) {
    data.entries.push(
        Entry::new("neon-gauge", "Neon Gauge", "neon")
            .describe("A magenta power gauge that breathes between empty and full")
            .tag("glow")
            .tag("animated")
            .category("charts")
            .preview(PreviewSize::Small)
            .source("vitrine-widgets", "src/neon.rs"),
    );
    factories.insert("neon-gauge".into(), exhibit(NeonGauge::new));

    data.entries.push(
        Entry::new("neon-marquee", "Neon Marquee", "neon")
            .describe("Storefront lettering on an endless loop")
            .tag("glow")
            .tag("text")
            .tag("animated")
            .category("text")
            .category("time")
            .preview(PreviewSize::Small)
            .source("vitrine-widgets", "src/neon.rs"),
    );
    factories.insert("neon-marquee".into(), exhibit(NeonMarquee::new));

    data.entries.push(
        Entry::new("pulse-grid", "Pulse Grid", "neon")
            .describe("A field of cells pulsing in traveling waves")
            .tag("animated")
            .tag("grid")
            .category("chrome")
            .preview(PreviewSize::Medium)
            .source("vitrine-widgets", "src/neon.rs"),
    );
    factories.insert("pulse-grid".into(), exhibit(PulseGrid::new));
}

struct NeonGauge {
    level: f64,
    rising: bool,
}

impl NeonGauge {
    fn new() -> Self {
        Self {
            level: 0.35,
            rising: true,
        }
    }
}

impl Exhibit for NeonGauge {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let gauge = Gauge::default()
            .block(Block::default().title(" power ").borders(Borders::ALL))
            .gauge_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .ratio(self.level);
        gauge.render(area, buf);
    }

    fn tick(&mut self) {
        let step = if self.rising { 0.04 } else { -0.04 };
        self.level = (self.level + step).clamp(0.0, 1.0);
        if self.level == 0.0 || self.level == 1.0 {
            self.rising = !self.rising;
        }
    }
}

struct NeonMarquee {
    offset: usize,
}

impl NeonMarquee {
    const MESSAGE: &'static str = "OPEN ALL NIGHT \u{2022} COLD DRINKS \u{2022} HOT WIDGETS \u{2022} ";

    fn new() -> Self {
        Self { offset: 0 }
    }
}

impl Exhibit for NeonMarquee {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let chars: Vec<char> = Self::MESSAGE.chars().collect();
        let y = area.y + area.height / 2;
        for i in 0..area.width {
            let ch = chars[(self.offset + i as usize) % chars.len()];
            buf[(area.x + i, y)]
                .set_char(ch)
                .set_style(Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD));
        }
    }

    fn tick(&mut self) {
        self.offset = (self.offset + 1) % Self::MESSAGE.chars().count();
    }
}

struct PulseGrid {
    phase: u16,
}

impl PulseGrid {
    // Dimmest to brightest.
    const RAMP: [Color; 4] = [
        Color::Rgb(60, 0, 60),
        Color::Rgb(120, 0, 120),
        Color::Rgb(190, 0, 190),
        Color::Rgb(255, 60, 255),
    ];

    fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Exhibit for PulseGrid {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let wave = (x + y * 2 + self.phase) % 8;
                let color = Self::RAMP[(wave / 2) as usize % Self::RAMP.len()];
                buf[(x, y)]
                    .set_char('\u{25aa}')
                    .set_style(Style::default().fg(color));
            }
        }
    }

    fn tick(&mut self) {
        self.phase = self.phase.wrapping_add(1);
    }
}
