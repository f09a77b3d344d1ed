//! Coordinate and geometry types shared by every drawable.
//!
//! Two spaces coexist:
//! - surface pixels ([`Vec2`], [`Rect`]): origin top-left, +X right, +Y down
//! - normalized units ([`NormPoint`], [`NormSize`]): `[0, 1]` relative to the surface
//!
//! Normalized values are converted with [`SurfaceSize`] at draw time and never cached,
//! so a resized surface is picked up on the next frame.

mod affine;
mod norm;
mod rect;
mod surface_size;
mod vec2;

pub use affine::Affine;
pub use norm::{NormPoint, NormSize};
pub use rect::Rect;
pub use surface_size::{to_pixel, SurfaceSize};
pub use vec2::Vec2;
