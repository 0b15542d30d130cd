//! Aurora zone: slow light, gradients, and the night sky.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use vitrine_core::{CatalogData, Entry, Exhibit, FactoryMap, PreviewSize};

use crate::exhibit;

pub(crate) fn install(data: &mut CatalogData, factories: &mut FactoryMap) {
    data.entries.push(
        Entry::new("drift-wave", "Drift Wave", "aurora")
            .describe("A sine ribbon rolling slowly across the dark")
            .tag("animated")
            .tag("wave")
            .category("chrome")
            .category("time")
            .preview(PreviewSize::Medium)
            .source("vitrine-widgets", "src/aurora.rs"),
    );
    factories.insert("drift-wave".into(), exhibit(DriftWave::new));

    data.entries.push(
        Entry::new("gradient-sheet", "Gradient Sheet", "aurora")
            .describe("A teal-to-violet wash for backdrops and dividers")
            .tag("gradient")
            .tag("chrome")
            .category("chrome")
            .preview(PreviewSize::Large)
            .source("vitrine-widgets", "src/aurora.rs"),
    );
    factories.insert("gradient-sheet".into(), exhibit(|| GradientSheet));

    data.entries.push(
        Entry::new("starfield", "Starfield", "aurora")
            .describe("Stars streaming past at three depths of parallax")
            .tag("animated")
            .tag("sky")
            .category("time")
            .preview(PreviewSize::Fullscreen)
            .source("vitrine-widgets", "src/aurora.rs"),
    );
    factories.insert("starfield".into(), exhibit(Starfield::new));
}

struct DriftWave {
    phase: f64,
}

impl DriftWave {
    fn new() -> Self {
        Self { phase: 0.0 }
    }
}

impl Exhibit for DriftWave {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let midline = f64::from(area.height - 1) / 2.0;
        for i in 0..area.width {
            let angle = f64::from(i) * 0.35 + self.phase;
            let row = (midline + angle.sin() * midline).round() as u16;
            let y = area.y + row.min(area.height - 1);
            buf[(area.x + i, y)]
                .set_char('\u{2248}')
                .set_style(Style::default().fg(Color::LightCyan));
        }
    }

    fn tick(&mut self) {
        self.phase += 0.25;
    }
}

struct GradientSheet;

impl Exhibit for GradientSheet {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        for y in area.top()..area.bottom() {
            // Teal at the top blending into violet at the bottom.
            let t = f64::from(y - area.y) / f64::from(area.height);
            let r = (20.0 + 120.0 * t) as u8;
            let g = (160.0 * (1.0 - t)) as u8;
            let b = (140.0 + 100.0 * t) as u8;
            let style = Style::default().fg(Color::Rgb(r, g, b));
            for x in area.left()..area.right() {
                buf[(x, y)].set_char('\u{2593}').set_style(style);
            }
        }
    }
}

struct Star {
    x: f64,
    y: f64,
    depth: u8,
}

struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    const COUNT: usize = 64;

    fn new() -> Self {
        let mut rng = rand::thread_rng();
        let stars = (0..Self::COUNT)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                depth: rng.gen_range(0..3),
            })
            .collect();
        Self { stars }
    }
}

impl Exhibit for Starfield {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for star in &self.stars {
            let x = area.x + (star.x * f64::from(area.width)) as u16 % area.width;
            let y = area.y + (star.y * f64::from(area.height)) as u16 % area.height;
            let (ch, color) = match star.depth {
                0 => ('.', Color::Rgb(90, 90, 120)),
                1 => ('+', Color::Rgb(150, 150, 200)),
                _ => ('*', Color::White),
            };
            buf[(x, y)].set_char(ch).set_style(Style::default().fg(color));
        }
    }

    fn tick(&mut self) {
        for star in &mut self.stars {
            let speed = 0.01 * f64::from(star.depth + 1);
            star.x = (star.x + speed) % 1.0;
        }
    }
}
