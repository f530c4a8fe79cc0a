//! Square-tracing progress indicator primitive
//!
//! An indeterminate indicator drawn with iced's Canvas: the outline of a
//! centered square is traced edge by edge, four edges clockwise then four
//! counter-clockwise, in a continuous 8-phase cycle. There is no progress
//! value; the animation is purely decorative.
//!
//! # Design
//!
//! This is a primitive component that implements the `canvas::Program`
//! trait. It is stateless: the host samples the current (step, animated
//! value) from a [`SquareTracer`](crate::ui::animation::SquareTracer) and
//! passes the snapshot in each frame.

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Resolve the indicator's rendered size against the available area.
///
/// The indicator wants [`theme::DEFAULT_SIZE`] on each axis and yields to
/// smaller host constraints, so a shrunken window squeezes the drawing while
/// a large one leaves it at its default footprint.
pub fn resolve_size(available: Size) -> Size {
    Size::new(
        theme::DEFAULT_SIZE.min(available.width).max(0.0),
        theme::DEFAULT_SIZE.min(available.height).max(0.0),
    )
}

/// Compute the centered square drawing bounds for a rendered area.
///
/// The square's edge is `min(width, height)`, inset by `padding` on every
/// side. Degenerate inputs (padding larger than half the size, negative
/// sizes) produce a degenerate rectangle rather than an error; the path
/// builder then draws a degenerate path.
pub fn square_bounds(width: f32, height: f32, padding: f32) -> Rectangle {
    let size = width.min(height);
    let left = (width - size) * 0.5 + padding;
    let top = (height - size) * 0.5 + padding;
    let right = (width + size) * 0.5 - padding;
    let bottom = (height + size) * 0.5 - padding;

    Rectangle {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    }
}

/// Build the partial outline for one animation frame.
///
/// Returns the ordered points of the path to stroke, always starting at the
/// square's top-left corner. `step` selects one of the 8 phases (0-3
/// clockwise, 4-7 counter-clockwise) and `v` is the animated distance along
/// the edge currently being traced. A step outside 0..=7 is unreachable by
/// construction; if it ever appears the builder returns an empty path.
pub fn trace_points(bounds: Rectangle, step: u8, v: f32) -> Vec<Point> {
    let left = bounds.x;
    let top = bounds.y;
    let right = bounds.x + bounds.width;
    let bottom = bounds.y + bounds.height;

    let start = Point::new(left, top);
    match step {
        // Clockwise: top, right, bottom, left edges
        0 => vec![start, Point::new(left + v, top)],
        1 => vec![start, Point::new(right, top), Point::new(right, top + v)],
        2 => vec![
            start,
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(right - v, bottom),
        ],
        3 => vec![
            start,
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
            Point::new(left, bottom - v),
        ],
        // Counter-clockwise: retrace left, bottom, right, top edges
        4 => vec![
            start,
            Point::new(left, bottom),
            Point::new(right, bottom),
            Point::new(right, top),
            Point::new(left + v, top),
        ],
        5 => vec![
            start,
            Point::new(left, bottom),
            Point::new(right, bottom),
            Point::new(right, top + v),
        ],
        6 => vec![
            start,
            Point::new(left, bottom),
            Point::new(right - v, bottom),
        ],
        7 => vec![start, Point::new(left, bottom - v)],
        _ => Vec::new(),
    }
}

/// Square-tracing indicator canvas program
///
/// Holds one frame's snapshot of the animation plus the paint style.
#[derive(Debug, Clone, Copy)]
pub struct ProgressSquare {
    /// Drawing bounds in canvas coordinates
    pub bounds: Rectangle,
    /// Current phase of the 8-step cycle
    pub step: u8,
    /// Animated distance along the current edge
    pub value: f32,
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub stroke_width: f32,
}

impl<Message> canvas::Program<Message> for ProgressSquare {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let points = trace_points(self.bounds, self.step, self.value);
        if points.len() >= 2 {
            let outline = Path::new(|builder| {
                builder.move_to(points[0]);
                for point in points.iter().skip(1) {
                    builder.line_to(*point);
                }
            });

            frame.stroke(
                &outline,
                Stroke {
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                        .with_color(self.color)
                        .with_width(self.stroke_width)
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create a progress square element filling the given area
pub fn view_progress_square<'a, Message: 'a>(program: ProgressSquare) -> Element<'a, Message> {
    Canvas::new(program)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
