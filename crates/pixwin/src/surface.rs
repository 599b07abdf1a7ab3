//! Presentation surface abstraction
//!
//! The window does not render anything itself; it owns an opaque [`Surface`]
//! supplied at creation time by the rendering stack and coordinates its
//! presentation once per update. The trait is deliberately narrow: resize,
//! frame begin/end, a stretched blit into the default framebuffer, and the
//! draw-state pass-throughs the window re-exports.
//!
//! Surface methods are only ever invoked on the designated thread while the
//! owning window's context is bound.

use crate::math::{Rect, Vec2};

pub use nalgebra::Matrix3;

/// 3x3 projection matrix applied to surface drawing
pub type Mat3 = Matrix3<f64>;

/// Straight-alpha RGBA color with `f64` channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha channel
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Construct a color from channel values
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Porter-Duff composition methods a surface may apply to subsequent draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)] // the variant names are the Porter-Duff operator names
pub enum ComposeMethod {
    Over,
    In,
    Out,
    Atop,
    ReverseOver,
    ReverseIn,
    ReverseOut,
    ReverseAtop,
    Xor,
    Plus,
    Copy,
}

/// A pixel rectangle, `(x, y, width, height)` from the bottom-left corner
pub type PixelRect = (u32, u32, u32, u32);

/// The rendering capability a window presents from
pub trait Surface {
    /// Resize the surface to the window's logical bounds
    fn set_bounds(&mut self, bounds: Rect);

    /// Size of the backing texture in pixels
    fn texture_size(&self) -> (u32, u32);

    /// Start presenting to the default framebuffer
    ///
    /// The surface prepares the framebuffer for the stretched blit: the
    /// viewport covers the full `width x height` backing store and the
    /// previous frame's contents are cleared.
    fn begin_frame(&mut self, framebuffer_width: u32, framebuffer_height: u32);

    /// Copy `src` from the backing texture into `dst` of the framebuffer,
    /// stretching as needed
    fn blit(&mut self, src: PixelRect, dst: PixelRect);

    /// Finish presenting to the default framebuffer
    fn end_frame(&mut self);

    /// Fill the surface with a single color
    fn clear(&mut self, color: Rgba);

    /// Set the projection matrix applied to subsequent draws
    fn set_matrix(&mut self, matrix: Mat3);

    /// Set the global color mask multiplied into subsequent draws
    fn set_color_mask(&mut self, mask: Rgba);

    /// Set the composition method for subsequent draws
    fn set_compose_method(&mut self, method: ComposeMethod);

    /// Choose smooth or pixely sampling for stretched drawing
    fn set_smooth(&mut self, smooth: bool);

    /// Whether stretched drawing samples smoothly
    fn smooth(&self) -> bool;

    /// Color of the pixel at a position in bounds space
    fn color_at(&self, at: Vec2) -> Rgba;
}
