//! Core application state and logic for the interactive maze viewer.

use color_eyre::eyre::{ensure, Result};
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager,
    config::{Config, Source},
    events,
    maze::Maze,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the viewer and Crossterm events will help writing to.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Maze currently on display.
    ///
    /// This field holds the maze that is rendered and solved in game. It is replaced whenever the
    /// user asks for a new maze.
    pub(crate) maze: Maze,
    /// Where the current maze came from, shown in the in-game tooltip.
    pub(crate) source: Source,
    /// Number of steps in the current maze's shortest path, if it has one.
    pub(crate) path_length: Option<usize>,
    /// Animation manager for solution visualization.
    ///
    /// This field manages the animation state including timing, current step tracking, and the
    /// coordinates being displayed during the animated maze solving.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates the viewer state for the maze described by `config`.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maze cannot be generated or loaded, or if either of
    /// its sides is longer than a terminal can address (`u16::MAX` cells).
    pub fn new(config: &Config) -> Result<Self> {
        let source = config.source();
        let maze = source.build(config.width, config.height)?;

        ensure!(
            u16::try_from(maze.width()).is_ok() && u16::try_from(maze.height()).is_ok(),
            "a {}x{} maze is too large for the terminal viewer",
            maze.width(),
            maze.height()
        );

        Ok(Self::with_maze(maze, source))
    }

    /// Creates the viewer state around an already built maze.
    pub(crate) fn with_maze(maze: Maze, source: Source) -> Self {
        let path_length = maze.solve().map(|path| path.len().saturating_sub(1));

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            maze,
            source,
            path_length,
            animation_manager: AnimationManager::new(),
        }
    }

    /// Replaces the maze with a freshly generated one of the same size.
    ///
    /// The new maze uses a random seed and the animation starts over on the next draw.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maze dimensions are rejected.
    pub(crate) fn regenerate(&mut self) -> Result<()> {
        let source = Source::Seeded(rand::random());
        let maze = source.build(self.maze.width(), self.maze.height())?;

        self.path_length = maze.solve().map(|path| path.len().saturating_sub(1));
        self.maze = maze;
        self.source = source;
        self.animation_manager.clear();

        Ok(())
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_seed() {
        let config = Config {
            width: 11,
            height: 9,
            seed: Some(7),
            input: None,
            no_solve: false,
            show_blank: false,
            tui: true,
        };
        let app = App::new(&config).expect("app should build");

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(app.source, Source::Seeded(7));
        assert_eq!(app.maze.width(), 11);
        assert!(app.path_length.is_some());
        assert!(app.animation_manager.steps.is_empty());
    }

    #[test]
    fn test_new_rejects_mazes_wider_than_a_terminal() {
        let config = Config {
            width: 70_001,
            height: 3,
            seed: Some(1),
            input: None,
            no_solve: false,
            show_blank: false,
            tui: true,
        };
        let err = App::new(&config).expect_err("maze should not fit a terminal");

        assert_eq!(
            err.to_string(),
            "a 70001x3 maze is too large for the terminal viewer"
        );
    }

    #[test]
    fn test_with_unsolvable_maze() {
        let maze = Maze::from_text("#####\n#S#E#\n#####").expect("valid maze text");
        let app = App::with_maze(maze, Source::Seeded(0));

        assert_eq!(app.path_length, None);
    }

    #[test]
    fn test_regenerate_keeps_size() {
        let mut maze = Maze::new(15, 9).expect("valid dimensions");
        maze.generate_seeded(1);
        let mut app = App::with_maze(maze, Source::Seeded(1));
        app.animation_manager.load(&app.maze.explore());

        app.regenerate().expect("regeneration should succeed");

        assert_eq!(app.maze.width(), 15);
        assert_eq!(app.maze.height(), 9);
        assert!(matches!(app.source, Source::Seeded(_)));
        assert!(app.path_length.is_some());
        assert!(app.animation_manager.steps.is_empty());
    }
}
