//! Core systems for daygrid.
//!
//! This crate provides the toolkit-independent foundations of the daygrid
//! calendar widget:
//!
//! - **Signal/Slot System**: Synchronous observer lists for widget notifications
//! - **Errors**: Domain and range errors shared by every daygrid crate
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use daygrid_core::Signal;
//!
//! let selection_changed = Signal::<Option<(i32, u32, u32)>>::new();
//!
//! let conn_id = selection_changed.connect(|date| {
//!     println!("Selection is now {:?}", date);
//! });
//!
//! selection_changed.emit(Some((2024, 2, 29)));
//! selection_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{CalendarError, MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
