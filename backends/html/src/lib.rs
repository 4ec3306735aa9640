//! HTML backend for Flick widgets.
//!
//! This crate plays the part of the page around a widget: it serialises view
//! trees to HTML, produces the page template a widget bundle is loaded into,
//! and mounts widget instances into container elements of a [`Page`].

extern crate alloc;

mod error;
mod mount;
mod page;
mod render;
pub mod template;

pub use error::MountError;
pub use mount::{Mounted, mount};
pub use page::Page;
pub use render::{escape, to_html};
