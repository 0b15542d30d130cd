//! The containment wall between the host and exhibit code.
//!
//! Exhibits are untrusted in one specific sense: a panic inside one must
//! never take down the gallery or bleed half-drawn cells into another
//! exhibit's screen region. Every call into exhibit code goes through
//! [`guard`], which catches the unwind and converts it into a
//! [`RenderFailure`] the owning session can record.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use serde::Serialize;

/// A live widget instance. Implementations draw into the buffer they are
/// handed and may advance animation state on `tick`.
///
/// Panicking anywhere in here is survivable: the session that owns the
/// instance moves to `Failed` and the instance is discarded.
pub trait Exhibit {
    /// Draw one frame into `buf`, confined to `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer);

    /// Advance time-based state. Called once per host tick while mounted.
    fn tick(&mut self) {}
}

/// Constructor for an exhibit instance. Stored in the registry keyed by
/// entry id; every mount calls it afresh so retries start clean.
pub type ExhibitFactory = Box<dyn Fn() -> Box<dyn Exhibit> + Send + Sync>;

/// Which call into exhibit code panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePhase {
    Construct,
    Render,
    Tick,
    Teardown,
}

impl fmt::Display for FailurePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            FailurePhase::Construct => "construct",
            FailurePhase::Render => "render",
            FailurePhase::Tick => "tick",
            FailurePhase::Teardown => "teardown",
        };
        f.write_str(phase)
    }
}

/// What a contained panic looked like from outside the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFailure {
    pub phase: FailurePhase,
    pub message: String,
}

impl RenderFailure {
    fn from_panic(phase: FailurePhase, payload: Box<dyn Any + Send>) -> Self {
        // Panic payloads are `&str` for panic!("literal") and `String` for
        // formatted messages; anything else gets a placeholder.
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic payload of unknown type".to_owned()
        };
        Self { phase, message }
    }
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked during {}: {}", self.phase, self.message)
    }
}

thread_local! {
    static BOUNDARY_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// True while the current thread is executing exhibit code under [`guard`].
///
/// Host panic hooks use this to stay quiet for panics the boundary is
/// about to contain, and to restore the terminal only for fatal ones.
pub fn within_boundary() -> bool {
    BOUNDARY_DEPTH.with(|depth| depth.get() > 0)
}

/// Run `f`, converting any panic into a `RenderFailure` for `phase`.
///
/// `AssertUnwindSafe` is sound here: on `Err` the caller discards the
/// exhibit instance, so no code ever observes its broken invariants.
pub(crate) fn guard<T>(phase: FailurePhase, f: impl FnOnce() -> T) -> Result<T, RenderFailure> {
    BOUNDARY_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    BOUNDARY_DEPTH.with(|depth| depth.set(depth.get() - 1));

    outcome.map_err(|payload| RenderFailure::from_panic(phase, payload))
}
