use std::fmt::Debug;

use log::debug;
use parking_lot::Mutex;
use rand::Rng;

use crate::{
    graphics::{Colour, Surface},
    math::Rect,
    painter::Painter,
};

/// An ordered collection of painters sharing one surface.
///
/// Painting the desktop optionally fills a background first, then paints every
/// painter in the order it was added, so later painters end up on top.
pub struct Desktop<'s, S: ?Sized> {
    surface: &'s Mutex<S>,
    background: Option<(Colour, Rect)>,
    painters: Vec<Painter<'s, S>>,
}

impl<'s, S: Surface + ?Sized> Desktop<'s, S> {
    /// Create an empty desktop with no background
    pub fn new(surface: &'s Mutex<S>) -> Self {
        Self {
            surface,
            background: None,
            painters: Vec::new(),
        }
    }

    /// Fill `area` with `colour` at the start of every [paint](Desktop::paint)
    pub fn with_background(mut self, colour: impl Into<Colour>, area: impl Into<Rect>) -> Self {
        self.background = Some((colour.into(), area.into()));
        self
    }

    /// Add a painter for `rect` on top of the existing ones and return it
    pub fn create_painter(&mut self, rect: impl Into<Rect>) -> Painter<'s, S> {
        let painter = Painter::from_rect(rect, self.surface);
        self.painters.push(painter);
        painter
    }

    /// Every painter, bottom first
    pub fn painters(&self) -> &[Painter<'s, S>] {
        &self.painters
    }

    /// Number of painters
    pub fn len(&self) -> usize {
        self.painters.len()
    }

    /// Whether the desktop has no painters
    pub fn is_empty(&self) -> bool {
        self.painters.is_empty()
    }

    /// Paint the background, then every painter in order
    pub fn paint(&self) {
        self.paint_with_rng(&mut rand::thread_rng());
    }

    /// Like [paint](Desktop::paint), drawing every painter's colour from `rng`
    pub fn paint_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) {
        if let Some((colour, area)) = self.background {
            let mut surface = self.surface.lock();
            surface.set_fill_colour(colour);
            surface.fill_rect(area);
        }
        debug!("painting {} painters", self.painters.len());
        for painter in &self.painters {
            painter.paint_with_rng(rng);
        }
    }
}

impl<S: ?Sized> Debug for Desktop<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desktop")
            .field("background", &self.background)
            .field("painters", &self.painters)
            .finish_non_exhaustive()
    }
}
