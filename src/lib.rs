#![warn(missing_docs)]
//! Paint randomly coloured rectangles onto a drawing surface.
//!
//! A [Painter] holds a rectangle and borrows a shared [Surface]. Painting picks a
//! uniformly random colour, sets it as the surface's fill colour and fills the
//! rectangle. [Canvas] is an in-memory framebuffer surface, [CommandList]
//! records draw calls, and with the `window` feature a canvas can be shown on
//! screen with [window::show].
//!
//! ```
//! use boxpaint::{Canvas, Painter};
//! use parking_lot::Mutex;
//!
//! let canvas = Mutex::new(Canvas::new(64, 48));
//! Painter::new(4, 4, 16, 8, &canvas).paint();
//!
//! let canvas = canvas.lock();
//! assert_eq!(canvas.pixel(19, 11), Some(canvas.fill_colour()));
//! ```

/// Configuration for the demo program
pub mod config;
/// Painters stacked on one surface
pub mod desktop;
/// Error types
pub mod error;
/// Drawing surfaces: the [Surface] trait, colours, the software canvas and the command recorder
pub mod graphics;
/// Geometry types
pub mod math;
/// The rectangle painter
pub mod painter;
#[cfg(feature = "window")]
/// Showing a canvas in a window
pub mod window;

pub use config::Conf;
pub use desktop::Desktop;
pub use error::{Error, Result};
pub use graphics::{Canvas, Colour, CommandList, DrawCommand, Surface};
pub use math::Rect;
pub use painter::Painter;

#[cfg(feature = "image")]
/// The image crate is used for exporting a canvas as an image buffer
pub use image;
/// The rand crate is used to generate random colours
pub use rand;
