//! Host-environment contracts shared by the Woobat runtime and its browser adapters.
//!
//! The runtime never touches the DOM directly. Everything it needs from the environment (the
//! persisted theme slot, the presentation root, custom event dispatch, the OS color-scheme
//! signal and a millisecond clock) crosses this boundary as a trait object, and concrete
//! browser adapters live in `woobat_host_web`. The in-memory adapters here back headless
//! rendering and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color_scheme;
pub mod events;
pub mod host;
pub mod prefs;
pub mod root;
pub mod time;

pub use color_scheme::{
    ColorSchemeListener, ColorSchemeSource, ColorSchemeWatch, ManualColorScheme,
    NoopColorScheme,
};
pub use events::{EventDispatcher, MemoryEventDispatcher, NoopEventDispatcher, RecordedEvent};
pub use host::{HostEnvironment, HostServices};
pub use prefs::{save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore};
pub use root::{MemoryPresentationRoot, NoopPresentationRoot, PresentationRoot};
pub use time::{monotonic_ms_now, Clock, ManualClock, SystemClock};
