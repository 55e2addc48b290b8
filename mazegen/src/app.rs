use std::{
    io::{self, BufRead, IsTerminal, Write},
    time::Duration,
};

use mazecore::{
    algorithms::{CarveStrategy, Generator, GeneratorError},
    gameboard::Maze,
    view::MazeView,
};

use crate::{
    error::AppError,
    prompt::{DimensionPrompt, DIMENSION_PROMPT},
    renderer::{AsciiView, TerminalView},
    settings::Settings,
};

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: settings.validated(),
        }
    }

    pub fn prompt(&self) -> DimensionPrompt {
        DimensionPrompt::new(
            self.settings.get_min_dimension(),
            self.settings.get_max_dimension(),
        )
    }

    fn generator(&self, dimension: i32) -> Generator {
        let strategy: CarveStrategy = self.settings.get_carve_mode().into();
        let generator = Generator::new(dimension, strategy, self.settings.get_seed());
        log::info!(
            "generating dimension {} with {:?}, seed {}",
            dimension,
            strategy,
            generator.seed()
        );
        generator
    }

    /// Generates one maze, reporting every step to `view`
    pub fn generate_with<V: MazeView>(&self, dimension: i32, view: V) -> Result<Maze, AppError> {
        Ok(self.generator(dimension).generate(view)?)
    }

    /// Generates and shows one maze, animated or printed as text depending on the settings.
    ///
    /// Animation needs stdout to be a terminal, otherwise the maze is printed as text.
    pub fn run_once<W: Write>(&self, dimension: i32, output: &mut W) -> Result<Maze, AppError> {
        if self.settings.get_animate() && io::stdout().is_terminal() {
            let delay = Duration::from_millis(self.settings.get_frame_delay_ms());
            let mut view = TerminalView::new(io::stdout(), delay);
            let maze = self.generate_with(dimension, &mut view)?;
            view.finish()?;
            Ok(maze)
        } else {
            let mut view = AsciiView::new();
            let maze = self.generate_with(dimension, &mut view)?;
            write!(output, "{}", view.render())?;
            Ok(maze)
        }
    }

    /// Keeps asking for dimensions and generating mazes until the user exits
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<usize, AppError> {
        let prompt = self.prompt();
        let mut generated = 0;

        while let Some(dimension) = prompt.ask(input, output, DIMENSION_PROMPT)? {
            writeln!(output, "Generating a maze of dimension {}.", dimension)?;
            match self.run_once(dimension, output) {
                Ok(_) => generated += 1,
                Err(AppError::Generator(err @ GeneratorError::InvalidDimension(_))) => {
                    log::warn!("{}", err);
                    writeln!(output, "{}", prompt.range_hint())?;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::settings::CarveMode;

    fn text_app() -> App {
        App::new(
            Settings::new()
                .set_animate(false)
                .set_seed(11)
                .set_min_dimension(2)
                .set_max_dimension(10),
        )
    }

    #[test]
    fn interactive_session() {
        let app = text_app();
        let mut input = Cursor::new("1\n3\n2\n0\n");
        let mut output = Vec::new();

        let generated = app.run_interactive(&mut input, &mut output).unwrap();
        assert_eq!(generated, 2);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Please enter a number between 2 and 10, inclusive."));
        assert!(output.contains("Generating a maze of dimension 3."));
        assert!(output.contains("Generating a maze of dimension 2."));
        assert_eq!(output.matches(DIMENSION_PROMPT).count(), 4);
    }

    #[test]
    fn run_once_prints_maze() {
        let app = text_app();
        let mut output = Vec::new();
        let maze = app.run_once(4, &mut output).unwrap();

        assert!(maze.is_spanning_tree());
        assert_eq!(String::from_utf8(output).unwrap(), maze.to_string());
    }

    #[test]
    fn animation_falls_back_to_text_off_terminal() {
        if io::stdout().is_terminal() {
            return;
        }

        let app = App::new(Settings::new().set_animate(true).set_seed(3));
        let mut output = Vec::new();
        let maze = app.run_once(5, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), maze.to_string());
    }

    #[test]
    fn seed_from_settings_is_reproducible() {
        let app = App::new(
            Settings::new()
                .set_seed(5)
                .set_carve_mode(CarveMode::SinglePass),
        );
        let first = app.generate_with(9, AsciiView::new()).unwrap();
        let second = app.generate_with(9, AsciiView::new()).unwrap();
        assert_eq!(first.removed_walls(), second.removed_walls());
    }

    #[test]
    fn settings_are_validated() {
        let app = App::new(
            Settings::new()
                .set_animate(false)
                .set_min_dimension(-5)
                .set_max_dimension(10),
        );
        let mut input = Cursor::new("-2\n3\n0\n");
        let mut output = Vec::new();

        assert_eq!(app.run_interactive(&mut input, &mut output).unwrap(), 1);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Please enter a number between 1 and 10, inclusive."));
        assert!(!output.contains("Generating a maze of dimension -2."));
        assert!(output.contains("Generating a maze of dimension 3."));

        let swapped = App::new(Settings::new().set_min_dimension(9).set_max_dimension(4));
        assert_eq!(swapped.prompt().check(7).unwrap(), 7);
        assert_eq!(swapped.prompt().check(50).unwrap(), 50);
        assert!(swapped.prompt().check(4).is_err());
    }

    #[test]
    fn invalid_dimension_keeps_session_going() {
        let app = App {
            settings: Settings::new().set_animate(false).set_min_dimension(-5),
        };
        let mut input = Cursor::new("-2\n3\n0\n");
        let mut output = Vec::new();

        assert_eq!(app.run_interactive(&mut input, &mut output).unwrap(), 1);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Generating a maze of dimension -2."));
        assert!(output.contains("Please enter a number between -5 and 50, inclusive."));
        assert!(output.contains("Generating a maze of dimension 3."));
        assert_eq!(output.matches(DIMENSION_PROMPT).count(), 3);
    }

    #[test]
    fn invalid_dimension_is_reported() {
        let app = text_app();
        assert!(matches!(
            app.generate_with(0, AsciiView::new()),
            Err(AppError::Generator(_))
        ));
    }
}
