//! vitrine-core: registry, search, and render isolation for a widget gallery.
//!
//! The gallery's decorative exhibits live elsewhere (see `vitrine-widgets`);
//! this crate is the machinery that catalogs them, finds them, and keeps a
//! misbehaving one from taking anything else down:
//!
//! - [`catalog`] — passive descriptors: [`Entry`], [`Zone`], [`Category`].
//! - [`registry`] — the one-shot, immutable [`Registry`] snapshot with
//!   integrity checking at build time.
//! - [`search`] — literal-substring [`SearchIndex`] with field-priority
//!   ranking, zone grouping, and original-case highlight spans.
//! - [`session`] / [`boundary`] — the [`RenderSession`] state machine and
//!   the panic-containment wall around every call into exhibit code.
//! - [`prefs`] — the favorites/recently-viewed collaborator trait.

pub mod boundary;
pub mod catalog;
pub mod error;
pub mod prefs;
pub mod registry;
pub mod search;
pub mod session;

pub use boundary::{within_boundary, Exhibit, ExhibitFactory, FailurePhase, RenderFailure};
pub use catalog::{CatalogData, Category, Entry, PreviewSize, Zone};
pub use error::{IntegrityError, IntegrityViolation};
pub use prefs::{MemoryPrefs, PreferenceStore};
pub use registry::{FactoryMap, Registry};
pub use search::{GroupedResults, MatchField, SearchHit, SearchIndex, ZoneGroup};
pub use session::{RenderSession, SessionState};
