//! Gallery layout: browser on the left, preview right, status below.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

mod browser;
mod preview;
mod status_bar;

pub fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    browser::render(frame, app, panes[0]);
    preview::render(frame, app, panes[1]);
    status_bar::render(frame, app, rows[1]);
}
