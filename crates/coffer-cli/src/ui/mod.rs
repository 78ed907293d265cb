//! UI primitives for the Coffer CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, named styles, spinner frames
//! - **Render**: Tables, headers, receipts, hints, formatted text
//! - **Progress**: Spinners and step lists
//! - **Format**: String utilities (truncate, wrap, align, dates)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header, simple_table, hint};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "donors list", Some("awakenings")));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "coffer donors show <name>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

// Re-export the render and progress helpers commands reach for directly;
// everything else stays behind its submodule path.
pub use format::single_line;
pub use progress::{Spinner, StepList};
pub use render::{badge, blank_line, hint, print, print_error};
