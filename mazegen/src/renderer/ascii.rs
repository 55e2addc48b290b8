use std::convert::Infallible;

use mazecore::{gameboard::Wall, view::MazeView};

use super::{border_glyphs, frame_size, wall_glyphs};

/// Keeps the maze as a character canvas, printed once carving is done
#[derive(Debug, Default, Clone)]
pub struct AsciiView {
    canvas: Vec<Vec<char>>,
}

impl AsciiView {
    pub fn new() -> Self {
        Self::default()
    }

    fn put(&mut self, x: usize, y: usize, text: &str) {
        if let Some(row) = self.canvas.get_mut(y) {
            for (i, c) in text.chars().enumerate() {
                if let Some(slot) = row.get_mut(x + i) {
                    *slot = c;
                }
            }
        }
    }

    pub fn render(&self) -> String {
        self.canvas
            .iter()
            .map(|row| row.iter().collect::<String>() + "\n")
            .collect()
    }
}

impl MazeView for AsciiView {
    type Error = Infallible;

    fn set_dimension(&mut self, dimension: usize) -> Result<(), Self::Error> {
        let (width, height) = frame_size(dimension);
        self.canvas = vec![vec![' '; width]; height];
        Ok(())
    }

    fn draw_border(&mut self) -> Result<(), Self::Error> {
        let dimension = self.canvas.len() / 2;
        for (x, y, c) in border_glyphs(dimension) {
            if let Some(slot) = self.canvas.get_mut(y).and_then(|row| row.get_mut(x)) {
                *slot = c;
            }
        }
        Ok(())
    }

    fn draw_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        let (x, y, glyphs) = wall_glyphs(wall);
        self.put(x, y, glyphs);
        Ok(())
    }

    fn remove_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        let (x, y, glyphs) = wall_glyphs(wall);
        self.put(x, y, &" ".repeat(glyphs.len()));
        Ok(())
    }
}
