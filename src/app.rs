//! Main application module
//!
//! Hosts the square-tracing indicator: wires window resize events into the
//! tracer's geometry, frame callbacks into its animation clock, and renders
//! the canvas. Space toggles the indicator (simulating detach/re-attach),
//! `d` switches between dark and light themes.

use iced::keyboard::{self, Key, key};
use iced::time::Instant;
use iced::widget::{column, container, text};
use iced::{Alignment, Color, Element, Fill, Size, Subscription, Task, Theme};

use crate::features::Settings;
use crate::ui::animation::SquareTracer;
use crate::ui::primitives::progress_square::{ProgressSquare, resolve_size, view_progress_square};
use crate::ui::theme;

/// Initial window size
pub const WINDOW_SIZE: Size = Size::new(320.0, 320.0);

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// One display frame elapsed while the indicator is attached
    AnimationTick,
    /// Window (and therefore available widget area) changed size
    WindowResized(Size),
    /// Keyboard shortcut pressed
    KeyPressed(Key, keyboard::Modifiers),
    /// Detach the indicator if attached, re-attach it otherwise
    ToggleIndicator,
}

/// Main application state
pub struct App {
    settings: Settings,
    /// Animation state of the indicator (step counter + edge animator)
    tracer: SquareTracer,
    /// Stroke color, resolved once at startup
    stroke: Color,
    /// Last known window size
    window_size: Size,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let stroke = theme::stroke_color(settings.color.as_deref());

        let mut tracer = SquareTracer::new(
            theme::PADDING,
            theme::ANIMATION_DURATION,
            theme::START_DELAY,
        );
        let widget_size = resolve_size(WINDOW_SIZE);
        tracer.handle_resize(widget_size.width, widget_size.height, Instant::now());

        let app = Self {
            settings,
            tracer,
            stroke,
            window_size: WINDOW_SIZE,
        };

        (app, Task::none())
    }

    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimationTick => {
                self.tracer.tick(Instant::now());
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                if self.tracer.is_attached() {
                    let widget_size = resolve_size(size);
                    tracing::debug!(
                        "Resized: window {}x{}, indicator {}x{}",
                        size.width,
                        size.height,
                        widget_size.width,
                        widget_size.height
                    );
                    self.tracer
                        .handle_resize(widget_size.width, widget_size.height, Instant::now());
                }
                Task::none()
            }
            Message::ToggleIndicator => {
                if self.tracer.is_attached() {
                    tracing::info!("Detaching indicator");
                    self.tracer.detach();
                } else {
                    tracing::info!("Re-attaching indicator");
                    let widget_size = resolve_size(self.window_size);
                    self.tracer.handle_resize(
                        widget_size.width,
                        widget_size.height,
                        Instant::now(),
                    );
                }
                Task::none()
            }
            Message::KeyPressed(key, _modifiers) => match key.as_ref() {
                Key::Named(key::Named::Space) => Task::done(Message::ToggleIndicator),
                Key::Character("d") => {
                    self.settings.dark_mode = !self.settings.dark_mode;
                    if let Err(e) = self.settings.save() {
                        tracing::warn!("Failed to save settings: {}", e);
                    }
                    Task::none()
                }
                _ => Task::none(),
            },
        }
    }

    /// Render the indicator centered in the window
    pub fn view(&self) -> Element<'_, Message> {
        let widget_size = resolve_size(self.window_size);

        let indicator: Element<'_, Message> = if self.tracer.is_attached() {
            let (bounds, step, value) = self.tracer.sample(Instant::now());
            let program = ProgressSquare {
                bounds,
                step,
                value,
                color: self.stroke,
                stroke_width: theme::STROKE_WIDTH,
            };
            container(view_progress_square(program))
                .width(widget_size.width)
                .height(widget_size.height)
                .into()
        } else {
            text("detached")
                .size(14)
                .style(|t: &Theme| text::Style {
                    color: Some(theme::text_muted(t)),
                })
                .into()
        };

        let content = column![indicator]
            .spacing(16)
            .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(|t: &Theme| container::Style {
                background: Some(theme::background(t).into()),
                ..Default::default()
            })
            .into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Subscriptions for frame callbacks, resizes, and keyboard shortcuts
    pub fn subscription(&self) -> Subscription<Message> {
        // Frame callbacks run unconditionally while the indicator is
        // attached: the animated value changes every frame, so redraws
        // cannot be skipped. Zero frames are delivered while detached.
        let frames_sub =
            if subscription_logic::needs_frame_subscription(self.tracer.is_attached()) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                Subscription::none()
            };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        Subscription::batch([frames_sub, resize_sub, keyboard_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are requested for every display refresh the indicator is
    /// attached, and never while it is detached.
    pub fn needs_frame_subscription(indicator_visible: bool) -> bool {
        indicator_visible
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_requested_while_attached() {
        assert!(needs_frame_subscription(true));
    }

    #[test]
    fn no_frames_after_detach() {
        assert!(!needs_frame_subscription(false));
    }
}
