//! Dial canvas widget
//!
//! Terminal cells are about twice as tall as they are wide, so dial space
//! counts one unit per column and two units per row. A circle in dial space
//! then looks round on screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};

use crate::wizard::dial::SWEEP_DEGREES;
use crate::wizard::{DialState, Point};

/// Vertical dial-space units per terminal row
pub const ROW_SCALE: f64 = 2.0;

const TRACK_SAMPLES: usize = 180;

/// Size of `area` in dial space
pub fn dial_measurement(area: Rect) -> (f64, f64) {
    (area.width as f64, area.height as f64 * ROW_SCALE)
}

/// Dial-space point at the center of a terminal cell; cells outside `area` map outside the dial
pub fn dial_point(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        column as f64 - area.x as f64 + 0.5,
        (row as f64 - area.y as f64 + 0.5) * ROW_SCALE,
    )
}

/// Draws the ring, the swept arc, the knob and the value label
pub struct DialWidget<'a> {
    dial: &'a DialState,
    label: &'a str,
}

impl<'a> DialWidget<'a> {
    pub fn new(dial: &'a DialState, label: &'a str) -> Self {
        Self { dial, label }
    }
}

impl Widget for DialWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = dial_measurement(area);
        let dial = self.dial;
        // canvas y grows upwards, dial space grows downwards
        let to_canvas = |p: Point| (p.x, height - p.y);

        let track: Vec<(f64, f64)> = (0..TRACK_SAMPLES)
            .map(|i| to_canvas(dial.point_at(i as f64 * SWEEP_DEGREES / TRACK_SAMPLES as f64)))
            .collect();
        let swept_samples = (dial.progress() * TRACK_SAMPLES as f64).round() as usize;
        let swept: Vec<(f64, f64)> = (0..=swept_samples)
            .map(|i| to_canvas(dial.point_at(i as f64 * SWEEP_DEGREES / TRACK_SAMPLES as f64)))
            .collect();
        let knob = [to_canvas(dial.point_at(dial.angle))];

        let knob_color = if dial.dragging {
            Color::Yellow
        } else {
            Color::White
        };
        let label = Line::from(Span::styled(
            self.label.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        let label_x = dial.center.x - self.label.chars().count() as f64 / 2.0;
        let label_y = height - dial.center.y;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: Color::DarkGray,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &swept,
                    color: Color::Cyan,
                });
                ctx.draw(&Points {
                    coords: &knob,
                    color: knob_color,
                });
                ctx.print(label_x, label_y, label.clone());
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialSettings;
    use crate::models::AmountRange;
    use crate::wizard::DialEvent;

    #[test]
    fn test_measurement_doubles_rows() {
        assert_eq!(dial_measurement(Rect::new(3, 4, 40, 10)), (40.0, 20.0));
    }

    #[test]
    fn test_cell_to_dial_point() {
        let area = Rect::new(10, 5, 40, 10);
        assert_eq!(dial_point(area, 10, 5), Point::new(0.5, 1.0));
        assert_eq!(dial_point(area, 29, 14), Point::new(19.5, 19.0));
        // cells left of the area land at negative x
        assert!(dial_point(area, 0, 5).x < 0.0);
    }

    #[test]
    fn test_click_on_bottom_of_ring_starts_drag() {
        let area = Rect::new(0, 0, 40, 10);
        let (width, height) = dial_measurement(area);
        let dial = DialState::new(
            AmountRange::new(100_000.0, 500_000.0),
            100_000.0,
            &DialSettings::default(),
        )
        .reduce(DialEvent::Measured { width, height });
        // center (20, 10), radius 10 - 2 - 0.5 = 7.5: the cell whose center is 8 units down
        let point = dial_point(area, 19, 8);
        let dragged = dial.reduce(DialEvent::PointerDown(point));
        assert!(dragged.dragging);
        assert!(dragged.angle > 80.0 && dragged.angle < 100.0);
    }

    #[test]
    fn test_render_does_not_panic_on_tiny_area() {
        let dial = DialState::new(
            AmountRange::new(0.0, 1.0),
            0.5,
            &DialSettings::default(),
        )
        .reduce(DialEvent::Measured {
            width: 2.0,
            height: 2.0,
        });
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        DialWidget::new(&dial, "₹1").render(area, &mut buf);
    }
}
