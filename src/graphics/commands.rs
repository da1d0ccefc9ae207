use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Rect;

use super::{Colour, Surface};

/// A single call made on a [Surface]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum DrawCommand {
    /// [Surface::set_fill_colour]
    SetFillColour(Colour),
    /// [Surface::fill_rect]
    FillRect(Rect),
}

/// A surface that draws nothing and remembers every call made on it, in order.
///
/// The recording can be replayed onto any other surface later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Create an empty command list
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded command, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The rectangles of every recorded fill, oldest first
    pub fn fill_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect(rect) => Some(*rect),
            DrawCommand::SetFillColour(_) => None,
        })
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every recorded command
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issue every recorded command, in order, on another surface
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        trace!("replaying {} commands", self.commands.len());
        for command in &self.commands {
            match *command {
                DrawCommand::SetFillColour(colour) => surface.set_fill_colour(colour),
                DrawCommand::FillRect(rect) => surface.fill_rect(rect),
            }
        }
    }
}

impl Surface for CommandList {
    fn set_fill_colour(&mut self, colour: Colour) {
        self.commands.push(DrawCommand::SetFillColour(colour));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }
}

impl Extend<DrawCommand> for CommandList {
    fn extend<T: IntoIterator<Item = DrawCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl FromIterator<DrawCommand> for CommandList {
    fn from_iter<T: IntoIterator<Item = DrawCommand>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
