//! Drawing surfaces.
//!
//! Everything that can be painted on implements [Surface]: it keeps a current fill
//! colour and fills rectangles with it.

mod canvas;
mod commands;
#[cfg(feature = "window")]
pub(crate) mod present;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Rect;

pub use canvas::Canvas;
pub use commands::{CommandList, DrawCommand};

/// An opaque RGB colour with 8 bits per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Colour {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Colour {
    /// Black
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    /// White
    pub const WHITE: Colour = Colour::new(255, 255, 255);

    /// Create a colour from its channels
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pick a colour with every channel drawn uniformly and independently from `0..=255`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
        )
    }

    /// This colour as a fully opaque RGBA8 pixel
    #[inline(always)]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// The colour of an RGBA8 pixel, alpha is discarded
    #[inline(always)]
    pub const fn from_rgba([r, g, b, _]: [u8; 4]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Colour {
    #[inline(always)]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Colour {
    #[inline(always)]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Colour> for [u8; 3] {
    #[inline(always)]
    fn from(colour: Colour) -> Self {
        [colour.r, colour.g, colour.b]
    }
}

/// Something rectangles can be painted on.
///
/// The fill colour is state of the surface: it stays set after a fill and is used
/// by every later [fill_rect](Surface::fill_rect) until changed again. Callers that
/// share a surface must set the colour and fill without anyone else drawing in
/// between.
pub trait Surface {
    /// Set the colour used by subsequent fills
    fn set_fill_colour(&mut self, colour: Colour);
    /// Fill a rectangle with the current fill colour
    fn fill_rect(&mut self, rect: Rect);

    /// Draw the one pixel wide outline of a rectangle with the current fill colour.
    ///
    /// The outline is made of up to four fills: top and bottom rows spanning the full
    /// width, then the left and right columns between them. Empty rectangles draw
    /// nothing.
    fn draw_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect::new(x, y, width, 1));
        if height > 1 {
            self.fill_rect(Rect::new(x, y + height - 1, width, 1));
        }
        if height > 2 {
            self.fill_rect(Rect::new(x, y + 1, 1, height - 2));
            if width > 1 {
                self.fill_rect(Rect::new(x + width - 1, y + 1, 1, height - 2));
            }
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_fill_colour(&mut self, colour: Colour) {
        (**self).set_fill_colour(colour)
    }
    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect)
    }
    fn draw_rect(&mut self, rect: Rect) {
        (**self).draw_rect(rect)
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn set_fill_colour(&mut self, colour: Colour) {
        (**self).set_fill_colour(colour)
    }
    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect)
    }
    fn draw_rect(&mut self, rect: Rect) {
        (**self).draw_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn rgba_is_opaque() {
        assert_eq!(Colour::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
        assert_eq!(Colour::from_rgba([1, 2, 3, 0]), Colour::new(1, 2, 3));
    }

    #[test]
    fn conversions() {
        assert_eq!(Colour::from((9, 8, 7)), Colour::new(9, 8, 7));
        assert_eq!(Colour::from([9, 8, 7]), Colour::new(9, 8, 7));
        assert_eq!(<[u8; 3]>::from(Colour::new(9, 8, 7)), [9, 8, 7]);
    }

    #[test]
    fn random_colours_vary() {
        // Any fixed seed gives more than one distinct colour over a few hundred draws
        let mut rng = StdRng::seed_from_u64(7);
        let first = Colour::random(&mut rng);
        assert!((0..500).any(|_| Colour::random(&mut rng) != first));
    }

    #[test]
    fn random_channels_cover_extremes() {
        let mut rng = StdRng::seed_from_u64(11);
        let colours: Vec<_> = (0..20_000).map(|_| Colour::random(&mut rng)).collect();
        let channels: [fn(&Colour) -> u8; 3] = [|c| c.r, |c| c.g, |c| c.b];
        for channel in channels {
            assert!(colours.iter().any(|c| channel(c) == 0));
            assert!(colours.iter().any(|c| channel(c) == 255));
        }
    }

    fn draw_one(mut surface: impl Surface) {
        surface.set_fill_colour(Colour::WHITE);
        surface.fill_rect(Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn references_and_boxes_forward() {
        let mut list = CommandList::new();
        draw_one(&mut list);
        let mut boxed = Box::new(CommandList::new());
        draw_one(&mut boxed);
        let expected = [
            DrawCommand::SetFillColour(Colour::WHITE),
            DrawCommand::FillRect(Rect::new(1, 2, 3, 4)),
        ];
        assert_eq!(list.commands(), &expected);
        assert_eq!(boxed.commands(), &expected);
    }

    #[test]
    fn outline_is_four_edges() {
        let mut list = CommandList::new();
        list.draw_rect(Rect::new(10, 20, 30, 40));
        assert_eq!(
            list.fill_rects().collect::<Vec<_>>(),
            vec![
                Rect::new(10, 20, 30, 1),
                Rect::new(10, 59, 30, 1),
                Rect::new(10, 21, 1, 38),
                Rect::new(39, 21, 1, 38),
            ]
        );
    }

    #[test]
    fn thin_outlines() {
        let mut list = CommandList::new();
        list.draw_rect(Rect::new(0, 0, 5, 1));
        list.draw_rect(Rect::new(0, 0, 1, 2));
        list.draw_rect(Rect::new(0, 0, 1, 3));
        list.draw_rect(Rect::new(0, 0, 0, 3));
        list.draw_rect(Rect::new(0, 0, 3, -3));
        assert_eq!(
            list.fill_rects().collect::<Vec<_>>(),
            vec![
                Rect::new(0, 0, 5, 1),
                Rect::new(0, 0, 1, 1),
                Rect::new(0, 1, 1, 1),
                Rect::new(0, 0, 1, 1),
                Rect::new(0, 2, 1, 1),
                Rect::new(0, 1, 1, 1),
            ]
        );
    }

    #[test]
    fn outline_on_canvas_leaves_inside_alone() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_fill_colour(Colour::WHITE);
        canvas.draw_rect(Rect::new(2, 2, 5, 4));
        let white = |x, y| canvas.pixel(x, y) == Some(Colour::WHITE);
        assert!(white(2, 2) && white(6, 2) && white(2, 5) && white(6, 5));
        assert!(white(2, 3) && white(6, 4) && white(4, 2) && white(4, 5));
        assert!(!white(3, 3) && !white(5, 4));
        assert!(!white(7, 2) && !white(2, 6));
        let count = canvas
            .pixels()
            .iter()
            .filter(|p| **p == Colour::WHITE.to_rgba())
            .count();
        assert_eq!(count, 5 * 2 + 2 * 2);
    }
}
