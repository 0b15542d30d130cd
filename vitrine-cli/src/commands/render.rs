//! `vitrine render` - draw one exhibit frame to stdout.
//!
//! The frame is rendered through the same isolation boundary the TUI
//! uses: a panicking exhibit produces a `failed` report on stdout and a
//! zero exit, never a crash.

use anyhow::Result;
use clap::Args;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use vitrine_core::{within_boundary, Registry, RenderSession, SessionState};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Entry id to render
    pub id: String,

    /// Frame width in columns
    #[arg(long, default_value_t = 60)]
    pub width: u16,

    /// Frame height in rows
    #[arg(long, default_value_t = 16)]
    pub height: u16,

    /// Advance the exhibit this many ticks before drawing
    #[arg(long, default_value_t = 0)]
    pub ticks: u32,
}

pub fn run_render(registry: &Registry, args: RenderArgs) -> Result<()> {
    // Contained panics are reported below; keep the default hook's
    // backtrace chatter off stderr for them.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if !within_boundary() {
            default_hook(info);
        }
    }));

    let mut session = RenderSession::open(registry, args.id.as_str());
    for _ in 0..args.ticks {
        session.tick();
    }

    let area = Rect::new(0, 0, args.width, args.height);
    let mut buf = Buffer::empty(area);
    session.render(area, &mut buf);

    match session.state() {
        SessionState::Mounted => print_frame(&buf, area),
        SessionState::NotFound => {
            println!("not found: no exhibit '{}' in the catalog", session.entry_id());
        }
        SessionState::Failed => {
            if let Some(failure) = session.failure() {
                println!("failed: exhibit '{}' {failure}", session.entry_id());
            }
        }
        // open() always resolves, so these never come back from it.
        SessionState::Resolving | SessionState::Destroyed => {}
    }

    session.close();
    Ok(())
}

fn print_frame(buf: &Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            line.push_str(buf[(x, y)].symbol());
        }
        println!("{}", line.trim_end());
    }
}
