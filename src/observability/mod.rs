//! Logging setup and crash reporting.
//!
//! Install both at startup:
//!
//! ```ignore
//! use ackcov::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//! }
//! ```

pub mod panic_hook;
pub mod tracing;

pub use self::tracing::{init_tracing, is_tui_active, set_tui_active, verbosity_filter};
pub use panic_hook::install_panic_hook;
