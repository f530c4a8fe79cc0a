//! Progress Square - an indeterminate square-tracing progress indicator
//! Built with iced; the outline of a square is traced edge by edge, four
//! edges clockwise then four counter-clockwise, forever.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title("Progress Square")
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(app::WINDOW_SIZE)
        .run()
}
