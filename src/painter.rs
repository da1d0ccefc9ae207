use std::fmt::Debug;

use log::debug;
use parking_lot::Mutex;
use rand::Rng;

use crate::{
    graphics::{Colour, Surface},
    math::Rect,
};

/// A rectangle that paints itself in a random colour onto a shared surface.
///
/// The painter only borrows the surface, any number of painters can share one.
/// Geometry is taken as given: negative positions, zero or negative sizes and
/// rectangles outside the surface are all accepted, what they end up covering is
/// up to the surface.
pub struct Painter<'s, S: ?Sized> {
    rect: Rect,
    surface: &'s Mutex<S>,
}

impl<'s, S: Surface + ?Sized> Painter<'s, S> {
    /// Create a painter for the rectangle at `(x, y)` with the given size
    pub fn new(x: i32, y: i32, width: i32, height: i32, surface: &'s Mutex<S>) -> Self {
        Self::from_rect(Rect::new(x, y, width, height), surface)
    }

    /// Create a painter for a rectangle
    pub fn from_rect(rect: impl Into<Rect>, surface: &'s Mutex<S>) -> Self {
        Self {
            rect: rect.into(),
            surface,
        }
    }

    /// The rectangle this painter covers
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The surface this painter draws on
    pub fn surface(&self) -> &'s Mutex<S> {
        self.surface
    }

    /// Fill the rectangle with a random colour
    pub fn paint(&self) {
        self.paint_with_rng(&mut rand::thread_rng());
    }

    /// Fill the rectangle with a colour drawn from `rng`.
    ///
    /// The surface stays locked between setting the fill colour and filling, so
    /// painters sharing a surface may paint from different threads. The fill colour
    /// is left set on the surface afterwards.
    pub fn paint_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) {
        let colour = Colour::random(rng);
        debug!("painting {:?} in {colour:?}", self.rect);
        let mut surface = self.surface.lock();
        surface.set_fill_colour(colour);
        surface.fill_rect(self.rect);
    }
}

impl<S: ?Sized> Clone for Painter<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Painter<'_, S> {}

impl<S: ?Sized> Debug for Painter<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}
