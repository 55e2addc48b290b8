//! Rendering side of maze generation.
//!
//! The generator only tells a view what happened, it never draws anything itself.

use std::{convert::Infallible, fmt};

use crate::gameboard::Wall;

pub trait MazeView {
    type Error: fmt::Display;

    fn set_dimension(&mut self, dimension: usize) -> Result<(), Self::Error>;

    fn draw_border(&mut self) -> Result<(), Self::Error>;

    /// Called once for every wall before carving starts
    fn draw_wall(&mut self, wall: &Wall) -> Result<(), Self::Error>;

    /// Called once per merge, in the order merges happen
    fn remove_wall(&mut self, wall: &Wall) -> Result<(), Self::Error>;
}

impl<V: MazeView + ?Sized> MazeView for &mut V {
    type Error = V::Error;

    fn set_dimension(&mut self, dimension: usize) -> Result<(), Self::Error> {
        (**self).set_dimension(dimension)
    }

    fn draw_border(&mut self) -> Result<(), Self::Error> {
        (**self).draw_border()
    }

    fn draw_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        (**self).draw_wall(wall)
    }

    fn remove_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        (**self).remove_wall(wall)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl MazeView for NullView {
    type Error = Infallible;

    fn set_dimension(&mut self, _: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    fn draw_border(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn draw_wall(&mut self, _: &Wall) -> Result<(), Self::Error> {
        Ok(())
    }

    fn remove_wall(&mut self, _: &Wall) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    SetDimension(usize),
    DrawBorder,
    DrawWall(Wall),
    RemoveWall(Wall),
}

/// View that remembers every call it got
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub events: Vec<ViewEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawn_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.events.iter().filter_map(|event| match event {
            ViewEvent::DrawWall(wall) => Some(*wall),
            _ => None,
        })
    }

    pub fn removed_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.events.iter().filter_map(|event| match event {
            ViewEvent::RemoveWall(wall) => Some(*wall),
            _ => None,
        })
    }
}

impl MazeView for Recorder {
    type Error = Infallible;

    fn set_dimension(&mut self, dimension: usize) -> Result<(), Self::Error> {
        self.events.push(ViewEvent::SetDimension(dimension));
        Ok(())
    }

    fn draw_border(&mut self) -> Result<(), Self::Error> {
        self.events.push(ViewEvent::DrawBorder);
        Ok(())
    }

    fn draw_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        self.events.push(ViewEvent::DrawWall(*wall));
        Ok(())
    }

    fn remove_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        self.events.push(ViewEvent::RemoveWall(*wall));
        Ok(())
    }
}
