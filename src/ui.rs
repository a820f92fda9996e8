//! User interface rendering functions for all viewer screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    animation,
    cell::Cell,
    config::Source,
    grid::Coord,
    types::{MainMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders the centered, bordered block hosting a menu and returns one row per item.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, items: u16) -> Rc<[Rect]> {
    let space = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(frame.area())[1];

    let layout = Layout::vertical([Constraint::Length(items + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(items)]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Solve Maze", "New Maze", and "Quit",
/// highlighting the currently selected option.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let items = MainMenuItem::ALL;
    let inner_layout = init_menu(
        frame,
        "Main Menu",
        u16::try_from(items.len()).unwrap_or(u16::MAX),
    );

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (option, area) in items.iter().zip(inner_layout.iter()) {
        let style = if *option == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(option.label()).centered().style(style), *area);
    }
}

/// Collects the coordinates of every wall in the current maze.
fn wall_coords(app: &App) -> Vec<Coord> {
    app.maze
        .grid()
        .cells()
        .filter_map(|(coord, cell)| (cell == Cell::Wall).then_some(coord))
        .collect()
}

/// Builds the text shown in the in-game tooltip.
pub(crate) fn tooltip_text(app: &App) -> String {
    let origin = match &app.source {
        Source::Seeded(seed) => format!("seed {seed}"),
        Source::File(path) => path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned()),
    };
    let length = app
        .path_length
        .map_or_else(|| "no path".to_owned(), |steps| format!("{steps} steps"));

    format!("(h) menu / (r) new maze / (q) quit | {origin} | {length}")
}

/// Renders the in-game screen with the maze and the animated solution.
///
/// This function draws the maze walls on a canvas and layers the explored cells and the solution
/// path on top, as far as the animation has progressed. The animation steps are recorded from a
/// traced search the first time the screen is drawn for a given maze.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or layout retrieval.
pub(crate) fn in_game(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    // Initialize animation steps if not already done
    if app.animation_manager.steps.is_empty() {
        let exploration = app.maze.explore();
        app.animation_manager.load(&exploration);
    }

    let maze_rows = app.maze.height();
    let maze_columns = app.maze.width();

    // Create overall layout: maze area + tooltip at bottom
    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Center the maze within the content area
    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before closures
    let wall_screen_coords =
        animation::transform_maze_to_screen_coords(&wall_coords(app), maze_rows, maze_columns)?;
    let explored_screen_coords = animation::transform_maze_to_screen_coords(
        &app.animation_manager.explored,
        maze_rows,
        maze_columns,
    )?;
    let path_screen_coords = animation::transform_maze_to_screen_coords(
        &app.animation_manager.path,
        maze_rows,
        maze_columns,
    )?;

    let x_bounds: [f64; 2] = [
        (-rounded_div::i32(space.width.into(), 2)).into(),
        (rounded_div::i32(space.width.into(), 2)).into(),
    ];
    let y_bounds: [f64; 2] = [
        (-rounded_div::i32(space.height.into(), 2)).into(),
        (rounded_div::i32(space.height.into(), 2)).into(),
    ];

    let maze = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
        });
    let explored = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &explored_screen_coords,
                color: Color::DarkGray,
            });
        });
    let solution = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &path_screen_coords,
                color: Color::Red,
            });
        });

    frame.render_widget(maze, space);
    frame.render_widget(explored, space);
    frame.render_widget(solution, space);

    // Render tooltip as a block at the bottom center with top border
    let tooltip_block = Block::bordered()
        .title(tooltip_text(app))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}
