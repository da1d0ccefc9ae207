use std::fmt::Debug;

use log::trace;

use crate::math::Rect;

use super::{Colour, Surface};

/// A software framebuffer of RGBA8 pixels.
///
/// Fills are clipped to the canvas bounds, so any rectangle can be drawn, including
/// ones that are partially or entirely off the canvas.
///
/// A canvas can also carry a list of clip rectangles. While the list is non-empty,
/// fills only touch pixels inside one of them. The list never holds overlapping
/// rectangles, adding one splits whatever it overlaps.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    fill_colour: Colour,
    clip_rects: Vec<Rect>,
}

impl Canvas {
    /// Create a canvas of the given size, filled with opaque black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::BLACK.to_rgba(); width as usize * height as usize],
            fill_colour: Colour::BLACK,
            clip_rects: Vec::new(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
    /// The area covered by this canvas
    pub fn bounds(&self) -> Rect {
        Rect::new(
            0,
            0,
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    /// The colour the next fill will use
    pub fn fill_colour(&self) -> Colour {
        self.fill_colour
    }

    /// The colour of a single pixel, or `None` if it's outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Colour> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .map(Colour::from_rgba)
    }

    /// All pixels, row by row
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// The pixel data as tightly packed RGBA8 bytes, row by row
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Set every pixel to the colour, the fill colour is left alone
    pub fn clear(&mut self, colour: impl Into<Colour>) {
        self.pixels.fill(colour.into().to_rgba());
    }

    /// The current clip rectangles, none of them overlap
    pub fn clip_rects(&self) -> &[Rect] {
        &self.clip_rects
    }

    /// Allow drawing inside `rect`, on top of whatever is already allowed
    pub fn add_clip_rect(&mut self, rect: impl Into<Rect>) {
        let rect = rect.into();
        self.subtract_clip_rect(rect);
        if !rect.is_empty() {
            self.clip_rects.push(rect);
        }
    }

    /// Remove `rect` from the clip area, splitting any clip rectangle it overlaps.
    ///
    /// Subtracting everything leaves an empty list, which means drawing is clipped to
    /// the canvas bounds only.
    pub fn subtract_clip_rect(&mut self, rect: impl Into<Rect>) {
        let rect = rect.into();
        self.clip_rects = self
            .clip_rects
            .iter()
            .flat_map(|clip| clip.split(&rect))
            .collect();
    }

    /// Drop every clip rectangle, fills are clipped to the canvas bounds only
    pub fn clear_clip_rects(&mut self) {
        self.clip_rects.clear();
    }

    fn fill_clipped(&mut self, area: Rect) {
        let clipped = area.intersection(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        let pixel = self.fill_colour.to_rgba();
        let stride = self.width as usize;
        let (left, right) = (clipped.left() as usize, clipped.right() as usize);
        for y in clipped.top() as usize..clipped.bottom() as usize {
            self.pixels[y * stride + left..y * stride + right].fill(pixel);
        }
    }

    /// Copy the canvas into an image buffer
    #[cfg(feature = "image")]
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[y as usize * self.width as usize + x as usize])
        })
    }
}

impl Surface for Canvas {
    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = colour;
    }

    fn fill_rect(&mut self, rect: Rect) {
        trace!(
            "fill {rect:?} with {:?} through {} clip rects",
            self.fill_colour,
            self.clip_rects.len()
        );
        if self.clip_rects.is_empty() {
            self.fill_clipped(rect);
            return;
        }
        for i in 0..self.clip_rects.len() {
            let area = rect.intersection(&self.clip_rects[i]);
            self.fill_clipped(area);
        }
    }
}

impl Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_colour", &self.fill_colour)
            .field("clip_rects", &self.clip_rects)
            .finish_non_exhaustive()
    }
}
