//! Premultiplied RGBA surfaces, opacity masks and the shapes drawn into them.

pub mod gradient;
pub mod shapes;
pub mod surface;
