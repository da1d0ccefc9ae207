#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{graphics::Colour, math::Rect};

/// Settings for the demo program: the canvas, the window showing it and the
/// rectangles painted on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(default))]
pub struct Conf {
    /// Title of the window
    pub title: String,
    /// Canvas width, in pixels
    pub width: u32,
    /// Canvas height, in pixels
    pub height: u32,
    /// Colour the canvas is cleared to before painting
    pub background: Colour,
    /// One painter per rectangle, painted in this order
    pub painters: Vec<Rect>,
}

impl Conf {
    /// Rectangles painted by the demo, in order
    pub const DEMO_PAINTERS: [Rect; 3] = [
        Rect::new(10, 10, 300, 200),
        Rect::new(100, 150, 400, 400),
        Rect::new(200, 100, 200, 600),
    ];
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            title: "boxpaint".to_owned(),
            width: 1024,
            height: 768,
            background: Colour::BLACK,
            painters: Self::DEMO_PAINTERS.to_vec(),
        }
    }
}
