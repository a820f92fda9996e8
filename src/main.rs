//! This crate contains the source code for the `mazecarver` binary.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazecarver::{print_report, App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();

    if config.tui {
        let mut app = App::new(&config)?;
        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();

        result
    } else {
        print_report(&config, &mut io::stdout().lock())
    }
}
