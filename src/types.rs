//! Type definitions and enums for the viewer state and navigation.

/// Enumeration of available viewer screens.
///
/// This enumeration holds information about the current screen of the viewer. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    ///
    /// This variant represents the main menu, carrying the item under the cursor.
    MainMenu(MainMenuItem),
    /// In-game maze visualization screen.
    ///
    /// This variant represents the screen where the maze is displayed and its solution animated.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu, listed top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Solve Maze" menu option, showing the current maze.
    StartGame,
    /// "New Maze" menu option, generating a fresh maze before showing it.
    NewMaze,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Every menu item in display order.
    pub(crate) const ALL: [Self; 3] = [Self::StartGame, Self::NewMaze, Self::Quit];

    /// Returns the label rendered for the item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Solve Maze",
            Self::NewMaze => "New Maze",
            Self::Quit => "Quit",
        }
    }
}
