//! UI component renderers.
//!
//! One file per visual component; each takes a pre-computed view model slice,
//! the active theme, and the area to draw into.

pub mod banner;
pub mod footer;
pub mod header;
pub mod input;
pub mod result;

pub use banner::render_banner;
pub use footer::render_footer;
pub use header::render_header;
pub use input::render_input;
pub use result::render_result;
