//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    types::{MainMenuItem, Screen},
    App,
};

/// How long to wait for input before letting the animation move on.
const POLL_TIMEOUT_MS: u64 = 16;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a short timeout so the animation keeps running
/// while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    // Update animation if in-game
    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Dispatches a single key press.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') => handle_h_events(app),
        KeyCode::Char('r') => handle_r_events(app)?,
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::MainMenu(MainMenuItem::NewMaze);
        }
        Screen::MainMenu(MainMenuItem::NewMaze) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::NewMaze);
        }
        Screen::MainMenu(MainMenuItem::NewMaze) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection.
///
/// This function processes the 'l' key press which confirms the menu item under the cursor:
/// showing the current maze, generating a new one first, or quitting.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::NewMaze) => {
            app.regenerate()?;
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press, returning from the in-game screen to the main
/// menu and dropping the running animation.
pub(crate) fn handle_h_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.animation_manager.clear();
        app.screen = Screen::MainMenu(MainMenuItem::StartGame);
    }
}

/// Handles 'r' key press events, swapping in a new maze while in game.
pub(crate) fn handle_r_events(app: &mut App) -> Result<()> {
    if app.screen == Screen::InGame {
        app.regenerate()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Source, maze::Maze};

    /// Creates a viewer around a small seeded maze.
    fn create_test_app() -> App {
        let mut maze = Maze::new(9, 7).expect("valid dimensions");
        maze.generate_seeded(2);
        App::with_maze(maze, Source::Seeded(2))
    }

    #[test]
    fn test_menu_navigation_down() {
        let mut app = create_test_app();

        handle_j_events(&mut app);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::NewMaze));
        handle_j_events(&mut app);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));
        handle_j_events(&mut app);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));
    }

    #[test]
    fn test_menu_navigation_up() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        handle_k_events(&mut app);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::NewMaze));
        handle_k_events(&mut app);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        handle_k_events(&mut app);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
    }

    #[test]
    fn test_select_start_game() {
        let mut app = create_test_app();
        let before = app.maze.clone();

        handle_l_events(&mut app).expect("selection should succeed");

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.maze, before);
    }

    #[test]
    fn test_select_new_maze() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::NewMaze);

        handle_l_events(&mut app).expect("selection should succeed");

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.maze.width(), 9);
        assert_eq!(app.maze.height(), 7);
    }

    #[test]
    fn test_select_quit() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        handle_l_events(&mut app).expect("selection should succeed");

        assert!(app.exit);
    }

    #[test]
    fn test_back_to_menu_clears_animation() {
        let mut app = create_test_app();
        app.screen = Screen::InGame;
        app.animation_manager.load(&app.maze.explore());

        handle_h_events(&mut app);

        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert!(app.animation_manager.steps.is_empty());
    }

    #[test]
    fn test_regenerate_only_in_game() {
        let mut app = create_test_app();
        handle_r_events(&mut app).expect("r in menu is a no-op");
        assert_eq!(app.source, Source::Seeded(2));

        app.screen = Screen::InGame;
        app.animation_manager.load(&app.maze.explore());
        handle_r_events(&mut app).expect("regeneration should succeed");
        assert!(app.animation_manager.steps.is_empty());
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = create_test_app();

        handle_key(&mut app, KeyCode::Char('q')).expect("quitting should succeed");
        assert!(app.exit);
    }

    #[test]
    fn test_handle_key_ignores_unknown() {
        let mut app = create_test_app();

        handle_key(&mut app, KeyCode::Char('z')).expect("unknown keys are ignored");
        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
    }
}
