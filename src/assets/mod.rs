//! Loading external inputs: the profile picture and the caption font.

pub mod font;
pub mod profile;
