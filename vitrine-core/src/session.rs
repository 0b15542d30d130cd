//! Render sessions: one isolated lifecycle per mounted exhibit.
//!
//! A session owns exactly one exhibit instance and tracks it through
//! resolve → mount → (fail | destroy). Failure is terminal for the
//! instance: recovery means closing the session and opening a new one,
//! which re-runs the factory from scratch.

use std::fmt;
use std::mem;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use serde::Serialize;

use crate::boundary::{self, Exhibit, FailurePhase, RenderFailure};
use crate::registry::Registry;

/// Observable lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    Resolving,
    Mounted,
    Failed,
    NotFound,
    Destroyed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            SessionState::Resolving => "resolving",
            SessionState::Mounted => "mounted",
            SessionState::Failed => "failed",
            SessionState::NotFound => "not-found",
            SessionState::Destroyed => "destroyed",
        };
        f.write_str(state)
    }
}

enum Inner {
    Resolving,
    Mounted { exhibit: Box<dyn Exhibit>, frames: u64 },
    Failed(RenderFailure),
    NotFound,
    Destroyed,
}

/// The host's handle on one exhibit instance.
///
/// All methods are infallible from the host's point of view: panics in
/// exhibit code are absorbed into the `Failed` state, and calls in any
/// state other than the one they apply to are no-ops.
pub struct RenderSession {
    id: String,
    inner: Inner,
}

impl RenderSession {
    /// Start a session for `id`. No catalog work happens yet; the session
    /// sits in `Resolving` until [`resolve`](Self::resolve) runs.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Inner::Resolving,
        }
    }

    /// Convenience for `new` followed immediately by `resolve`.
    pub fn open(registry: &Registry, id: impl Into<String>) -> Self {
        let mut session = Self::new(id);
        session.resolve(registry);
        session
    }

    /// Look the id up in the registry and, if found, run the factory.
    ///
    /// `Resolving` → `Mounted` on success, `NotFound` when the id matches
    /// no entry, `Failed` when the factory panics. Does nothing unless the
    /// session is still `Resolving`.
    pub fn resolve(&mut self, registry: &Registry) {
        if !matches!(self.inner, Inner::Resolving) {
            return;
        }
        let Some(factory) = registry.resolve_factory(&self.id) else {
            tracing::debug!("session '{}' matched no catalog entry", self.id);
            self.inner = Inner::NotFound;
            return;
        };
        match boundary::guard(FailurePhase::Construct, || factory()) {
            Ok(exhibit) => {
                tracing::debug!("session '{}' mounted", self.id);
                self.inner = Inner::Mounted { exhibit, frames: 0 };
            }
            Err(failure) => self.fail(failure),
        }
    }

    /// The entry id this session was opened for.
    pub fn entry_id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        match self.inner {
            Inner::Resolving => SessionState::Resolving,
            Inner::Mounted { .. } => SessionState::Mounted,
            Inner::Failed(_) => SessionState::Failed,
            Inner::NotFound => SessionState::NotFound,
            Inner::Destroyed => SessionState::Destroyed,
        }
    }

    /// The contained failure, if the session is `Failed`.
    pub fn failure(&self) -> Option<&RenderFailure> {
        match &self.inner {
            Inner::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Frames drawn so far by the current instance.
    pub fn frames_rendered(&self) -> u64 {
        match self.inner {
            Inner::Mounted { frames, .. } => frames,
            _ => 0,
        }
    }

    /// Draw one frame into `buf`, confined to `area`.
    ///
    /// The exhibit draws into a scratch buffer; its cells reach `buf` only
    /// after the whole frame completes. A panic mid-frame therefore leaves
    /// `buf` untouched and moves the session to `Failed`. In every state
    /// but `Mounted` this is a no-op; fallback content for failed or
    /// missing exhibits is the host's to draw.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let outcome = match &mut self.inner {
            Inner::Mounted { exhibit, frames } => {
                let mut scratch = Buffer::empty(area);
                match boundary::guard(FailurePhase::Render, || exhibit.render(area, &mut scratch))
                {
                    Ok(()) => {
                        *frames += 1;
                        blit(&scratch, area, buf);
                        return;
                    }
                    Err(failure) => failure,
                }
            }
            _ => return,
        };
        self.fail(outcome);
    }

    /// Advance the exhibit's animation state. No-op unless `Mounted`;
    /// a panic moves the session to `Failed`.
    pub fn tick(&mut self) {
        let outcome = match &mut self.inner {
            Inner::Mounted { exhibit, .. } => {
                match boundary::guard(FailurePhase::Tick, || exhibit.tick()) {
                    Ok(()) => return,
                    Err(failure) => failure,
                }
            }
            _ => return,
        };
        self.fail(outcome);
    }

    /// Tear the session down. Terminal: every later call is a no-op.
    pub fn close(&mut self) {
        self.replace_inner(Inner::Destroyed);
    }

    fn fail(&mut self, failure: RenderFailure) {
        tracing::warn!(
            "exhibit '{}' contained a panic during {}: {}",
            self.id,
            failure.phase,
            failure.message
        );
        self.replace_inner(Inner::Failed(failure));
    }

    fn replace_inner(&mut self, next: Inner) {
        let old = mem::replace(&mut self.inner, next);
        if let Inner::Mounted { exhibit, .. } = old {
            // A panicking Drop must not unwind into the host either.
            let _ = boundary::guard(FailurePhase::Teardown, || drop(exhibit));
        }
    }
}

impl fmt::Debug for RenderSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSession")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish()
    }
}

fn blit(scratch: &Buffer, area: Rect, host: &mut Buffer) {
    let target = area.intersection(host.area);
    for y in target.top()..target.bottom() {
        for x in target.left()..target.right() {
            if let Some(cell) = scratch.cell((x, y)) {
                host[(x, y)] = cell.clone();
            }
        }
    }
}
