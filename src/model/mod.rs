//! Document model types for markup conversion.
//!
//! A [`Document`] is the source side of a conversion: an ordered sequence of
//! raw markup lines. [`Tag`] is the output vocabulary the renderer emits.

mod document;
mod tag;

pub use document::Document;
pub use tag::{anchor_open, image_element, Tag};
