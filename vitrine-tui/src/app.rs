//! Gallery application state.

use vitrine_core::{PreferenceStore, Registry, RenderSession, SearchHit};

/// Input mode for the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate the browser, open previews
    #[default]
    Normal,
    /// Typing in the search field; results update per keystroke
    Search,
}

/// One line of the browser pane.
pub enum Row {
    /// A zone section header.
    Header { zone_id: String },
    /// A selectable entry, with its search hit when a query is active.
    Entry { id: String, hit: Option<SearchHit> },
}

impl Row {
    pub fn is_entry(&self) -> bool {
        matches!(self, Row::Entry { .. })
    }
}

/// Main application state.
pub struct App {
    pub registry: Registry,
    pub prefs: Box<dyn PreferenceStore>,
    pub mode: Mode,
    /// Current search input.
    pub query: String,
    /// Browser rows, zone-grouped; rebuilt whenever the query changes.
    pub rows: Vec<Row>,
    /// Index into `rows`; always points at an `Entry` row when any exist.
    pub selected: usize,
    /// The one open preview session, if any.
    pub preview: Option<RenderSession>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(registry: Registry, prefs: Box<dyn PreferenceStore>) -> Self {
        let mut app = Self {
            registry,
            prefs,
            mode: Mode::default(),
            query: String::new(),
            rows: Vec::new(),
            selected: 0,
            preview: None,
            status: None,
            should_quit: false,
        };
        app.refresh_rows();
        app
    }

    /// Rebuild the browser from the current query: the full catalog in
    /// zone order when the query is blank, ranked search groups otherwise.
    pub fn refresh_rows(&mut self) {
        self.rows.clear();

        if self.query.trim().is_empty() {
            for zone in self.registry.zones() {
                self.rows.push(Row::Header {
                    zone_id: zone.id.clone(),
                });
                let ids: Vec<String> = self
                    .registry
                    .list_by_zone(&zone.id)
                    .map(|entry| entry.id.clone())
                    .collect();
                for id in ids {
                    self.rows.push(Row::Entry { id, hit: None });
                }
            }
        } else {
            let results = self.registry.search(&self.query);
            for group in results.groups {
                self.rows.push(Row::Header {
                    zone_id: group.zone.clone(),
                });
                for hit in group.hits {
                    self.rows.push(Row::Entry {
                        id: hit.id.clone(),
                        hit: Some(hit),
                    });
                }
            }
        }

        self.selected = self
            .rows
            .iter()
            .position(Row::is_entry)
            .unwrap_or(0);
    }

    /// Id of the selected entry row, if the browser has any entries.
    pub fn selected_id(&self) -> Option<&str> {
        match self.rows.get(self.selected) {
            Some(Row::Entry { id, .. }) => Some(id),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(next) = self
            .rows
            .iter()
            .skip(self.selected + 1)
            .position(Row::is_entry)
        {
            self.selected += next + 1;
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(prev) = self.rows[..self.selected]
            .iter()
            .rposition(Row::is_entry)
        {
            self.selected = prev;
        }
    }

    /// Open (or reopen) the preview for the selected entry. The previous
    /// session, whatever its state, is closed first.
    pub fn open_preview(&mut self) {
        let Some(id) = self.selected_id().map(str::to_owned) else {
            return;
        };
        self.close_preview();
        self.prefs.record_visit(&id);
        let session = RenderSession::open(&self.registry, id.as_str());
        self.status = Some(format!("opened {id} ({})", session.state()));
        self.preview = Some(session);
    }

    pub fn close_preview(&mut self) {
        if let Some(mut session) = self.preview.take() {
            session.close();
        }
    }

    pub fn toggle_favorite(&mut self) {
        let Some(id) = self.selected_id().map(str::to_owned) else {
            return;
        };
        if self.prefs.is_marked(&id) {
            self.prefs.unmark(&id);
            self.status = Some(format!("unmarked {id}"));
        } else {
            self.prefs.mark(&id);
            self.status = Some(format!("marked {id}"));
        }
    }

    /// Host tick: advance the previewed exhibit's animation.
    pub fn tick(&mut self) {
        if let Some(session) = &mut self.preview {
            session.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::{MemoryPrefs, SessionState};

    use super::*;

    fn app() -> App {
        let (data, factories) = vitrine_widgets::catalog();
        let registry = Registry::build(data, factories).unwrap();
        App::new(registry, Box::new(MemoryPrefs::new()))
    }

    #[test]
    fn test_browse_rows_cover_whole_catalog() {
        let app = app();
        let entries = app.rows.iter().filter(|r| r.is_entry()).count();
        assert_eq!(entries, app.registry.count());
        assert!(app.selected_id().is_some());
    }

    #[test]
    fn test_selection_skips_headers() {
        let mut app = app();
        let first = app.selected_id().unwrap().to_owned();
        app.select_next();
        let second = app.selected_id().unwrap().to_owned();
        assert_ne!(first, second);
        app.select_prev();
        assert_eq!(app.selected_id().unwrap(), first);
        // Already at the first entry; prev stays put.
        app.select_prev();
        assert_eq!(app.selected_id().unwrap(), first);
    }

    #[test]
    fn test_query_narrows_rows() {
        let mut app = app();
        app.query = "gauge".into();
        app.refresh_rows();
        let ids: Vec<&str> = app
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Entry { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["neon-gauge"]);

        app.query.clear();
        app.refresh_rows();
        assert_eq!(
            app.rows.iter().filter(|r| r.is_entry()).count(),
            app.registry.count()
        );
    }

    #[test]
    fn test_open_preview_records_visit() {
        let mut app = app();
        app.open_preview();
        let session = app.preview.as_ref().unwrap();
        assert_eq!(session.state(), SessionState::Mounted);
        assert_eq!(app.prefs.recent().len(), 1);

        app.close_preview();
        assert!(app.preview.is_none());
    }

    #[test]
    fn test_toggle_favorite_round_trips() {
        let mut app = app();
        let id = app.selected_id().unwrap().to_owned();
        app.toggle_favorite();
        assert!(app.prefs.is_marked(&id));
        app.toggle_favorite();
        assert!(!app.prefs.is_marked(&id));
    }
}
