//! Static content tables compiled into the game client.
//!
//! - [`icons`]: ability key → display glyph
//! - [`mottos`]: start screen flavor text and random selection
//!
//! Both tables are immutable and live for the whole process. Lookups never
//! panic: a missing icon is `None`, an empty motto list is a typed error.

pub mod icons;
pub mod mottos;

pub use icons::{IconError, glyph_for, glyph_or, icon_count, icon_entries, require_glyph};
pub use mottos::{MOTTOS, MottoError, pick_from, pick_motto};
