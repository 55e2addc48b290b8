use std::{
    io::{self, Write},
    panic,
    sync::Once,
    thread,
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use mazecore::{gameboard::Wall, view::MazeView};

use super::{border_glyphs, frame_size, wall_glyphs};
use crate::logging;

/// Animates carving on the terminal's alternate screen
pub struct TerminalView<W: Write> {
    out: W,
    frame_delay: Duration,
    dimension: usize,
    is_on: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, frame_delay: Duration) -> Self {
        Self {
            out,
            frame_delay,
            dimension: 0,
            is_on: false,
        }
    }

    fn turn_on(&mut self) -> io::Result<()> {
        register_panic_hook();
        logging::get_logger().hold();

        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
        )?;
        self.is_on = true;

        Ok(())
    }

    fn turn_off(&mut self) -> io::Result<()> {
        if !self.is_on {
            return Ok(());
        }
        self.is_on = false;

        execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        logging::get_logger().release();

        Ok(())
    }

    fn put(&mut self, x: usize, y: usize, text: &str) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x as u16, y as u16), Print(text))
    }

    /// Shows the finished maze until a key is pressed, then gives the terminal back
    pub fn finish(&mut self) -> io::Result<()> {
        let (_, height) = frame_size(self.dimension);
        queue!(
            self.out,
            cursor::MoveTo(0, height as u16 + 1),
            Print("Done, press any key to continue.")
        )?;
        self.out.flush()?;

        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }

        self.turn_off()
    }
}

impl<W: Write> MazeView for TerminalView<W> {
    type Error = io::Error;

    fn set_dimension(&mut self, dimension: usize) -> Result<(), Self::Error> {
        self.dimension = dimension;

        let (width, height) = frame_size(dimension);
        let (cols, rows) = terminal::size()?;
        if width > cols as usize || height > rows as usize {
            log::warn!(
                "maze needs {}x{} characters, terminal is only {}x{}",
                width,
                height,
                cols,
                rows
            );
        }

        self.turn_on()
    }

    fn draw_border(&mut self) -> Result<(), Self::Error> {
        for (x, y, c) in border_glyphs(self.dimension) {
            queue!(self.out, cursor::MoveTo(x as u16, y as u16), Print(c))?;
        }
        self.out.flush()
    }

    fn draw_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        let (x, y, glyphs) = wall_glyphs(wall);
        self.put(x, y, glyphs)
    }

    fn remove_wall(&mut self, wall: &Wall) -> Result<(), Self::Error> {
        let (x, y, glyphs) = wall_glyphs(wall);
        self.put(x, y, &" ".repeat(glyphs.len()))?;
        self.out.flush()?;

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }

        Ok(())
    }
}

impl<W: Write> Drop for TerminalView<W> {
    fn drop(&mut self) {
        let _ = self.turn_off();
    }
}

static PANIC_HOOK: Once = Once::new();

/// Chains a hook giving the terminal back before the previous hook reports the panic
fn register_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
            let _ = terminal::disable_raw_mode();
            logging::get_logger().release();

            prev(info)
        }));
    });
}
