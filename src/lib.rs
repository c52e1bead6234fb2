//! Stampkit renders a curved-text "stamp" arc onto a circular profile picture.
//!
//! The pipeline is a short sequence of raster steps:
//!
//! - Clip the profile picture to a disc ([`load_profile_image`])
//! - Build the band silhouette ([`ring_wedge_mask`]), optionally faded toward its ends
//!   ([`apply_gradient`])
//! - Fill the band with the stamp color and set the caption along it ([`draw_curved_text`])
//! - Composite the stamp over the profile and encode ([`generate_profile_stamp`])
#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod paint;
pub mod pipeline;
pub mod raster;
pub mod text;

pub use crate::foundation::core::{Affine, Point, Rgba8, StampGeometry};
pub use crate::foundation::error::{StampError, StampResult};

pub use crate::assets::font::{LoadedFont, TextBrushRgba8, TextLayoutEngine};
pub use crate::assets::profile::{decode_image_file, load_profile_image};
pub use crate::paint::color::{ColorSpec, NAMED_COLORS, color_names, resolve_color};
pub use crate::pipeline::{
    DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_OUTPUT_PATH, StampConfig,
    generate_profile_stamp, prepare_stamp_text, render_stamp, write_output,
};
pub use crate::raster::gradient::{apply_gradient, fade_alpha, fade_factor};
pub use crate::raster::shapes::{RingWedge, circle_mask, ring_wedge_mask};
pub use crate::raster::surface::{Fill, Mask, Surface, masked_fill};
pub use crate::text::curved::{
    CharCell, CharPlacement, CurvedTextLayout, char_transform, draw_curved_text,
    layout_curved_text,
};
