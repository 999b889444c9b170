//! Station board computation.
//!
//! Turns a schedule snapshot and a "now" reference into three ordered views:
//! upcoming arrivals, upcoming departures and the next train per track.
//!
//! Everything here is a pure function of its inputs. Boards are rebuilt
//! wholesale whenever "now" ticks or a new schedule arrives; nothing is
//! updated in place.

mod config;
mod effective;
mod lateness;
pub mod render;
mod select;
mod tracks;
mod view;

pub use config::BoardConfig;
pub use effective::{effective_time, occupancy_time};
pub use lateness::{DEFAULT_LATE_THRESHOLD_MINS, LatenessPolicy, is_late};
pub use render::{
    CellStatus, EventCell, RenderedRow, TimeLocale, render_iso, render_local_time, render_rows,
};
pub use select::select_upcoming;
pub use tracks::select_by_track;
pub use view::{Board, BoardRow, NowReference, UnknownView, View};
