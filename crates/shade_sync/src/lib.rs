//! Shade Live Sync
//!
//! Keeps the structured theme settings and the CSS text consistent with
//! whichever one was edited last.
//!
//! The controller is a plain `&mut self` state machine. Time comes in as
//! [`Instant`](std::time::Instant) arguments, so any event loop can drive it:
//! call [`LiveSyncController::poll`] once [`LiveSyncController::next_deadline`]
//! has passed.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use shade_sync::{LiveSyncController, ParseOutcome};
//!
//! let mut sync = LiveSyncController::default();
//! let css = sync.css_text().replace("--border-radius: 8px;", "--border-radius: 2px;");
//!
//! let start = Instant::now();
//! sync.on_css_text_edited(css, start);
//! assert_eq!(sync.poll(start), None);
//!
//! let outcome = sync.poll(start + Duration::from_millis(500));
//! assert_eq!(outcome, Some(ParseOutcome::Applied { fields: 15 }));
//! assert_eq!(sync.settings().border_radius, 2);
//! ```

pub mod controller;
pub mod debounce;
mod error;

pub use controller::{LiveSyncController, ParseOutcome, SyncCommand, SyncConfig, SyncOutcome, SyncStats};
pub use debounce::{Debouncer, DEFAULT_PARSE_DEBOUNCE};
pub use error::SyncError;
