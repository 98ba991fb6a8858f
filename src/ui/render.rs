// Render module split into focused submodules.

pub mod footer;
pub mod full;
pub mod list;
pub mod styles;
pub mod util;

pub use footer::{render_help, render_pagination};
pub use full::{render_error, render_full};
pub use list::{render_entries, render_status, render_title};
pub use styles::Theme;
