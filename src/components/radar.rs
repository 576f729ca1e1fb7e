use std::f64::consts::{FRAC_PI_2, TAU};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::text::Span;
use tui::widgets::canvas::{Canvas, Context, Line};
use tui::widgets::{Block, Widget};
use wc_api::compare::{CATEGORIES, Comparison, RADAR_RANGE};

pub const HOME_COLOR: Color = Color::LightBlue;
pub const AWAY_COLOR: Color = Color::LightRed;
const GRID_COLOR: Color = Color::DarkGray;
const LABEL_RADIUS: f64 = 1.12;

/// Five-axis polar chart of two players' counters on a fixed
/// [`RADAR_RANGE`].
pub struct RadarChart<'a> {
    pub comparison: &'a Comparison,
    pub block: Option<Block<'a>>,
}

/// Unit-circle point for `value` on axis `axis`; the first axis points up and
/// the rest follow clockwise.
pub fn axis_point(axis: usize, value: f64) -> (f64, f64) {
    let (lo, hi) = RADAR_RANGE;
    let r = (value.clamp(lo, hi) - lo) / (hi - lo);
    let angle = FRAC_PI_2 - TAU * axis as f64 / CATEGORIES.len() as f64;
    (r * angle.cos(), r * angle.sin())
}

fn polygon(ctx: &mut Context, values: &[f64], color: Color) {
    let n = values.len();
    for i in 0..n {
        let (x1, y1) = axis_point(i, values[i]);
        let (x2, y2) = axis_point((i + 1) % n, values[(i + 1) % n]);
        ctx.draw(&Line::new(x1, y1, x2, y2, color));
    }
}

impl Widget for RadarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let home: Vec<f64> = self.comparison.home.counters.values().map(f64::from).to_vec();
        let away: Vec<f64> = self.comparison.away.counters.values().map(f64::from).to_vec();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.6, 1.6])
            .y_bounds([-1.3, 1.3])
            .paint(move |ctx| {
                let (lo, hi) = RADAR_RANGE;
                let steps = (hi - lo) as usize;
                for ring in 1..=steps {
                    polygon(ctx, &[lo + ring as f64; CATEGORIES.len()], GRID_COLOR);
                }
                for axis in 0..CATEGORIES.len() {
                    let (x, y) = axis_point(axis, hi);
                    ctx.draw(&Line::new(0.0, 0.0, x, y, GRID_COLOR));
                }

                ctx.layer();
                polygon(ctx, &home, HOME_COLOR);
                polygon(ctx, &away, AWAY_COLOR);

                ctx.layer();
                for (axis, label) in CATEGORIES.iter().enumerate() {
                    let (x, y) = axis_point(axis, hi);
                    // labels on the left half are right-aligned by eye
                    let shift = if x < -0.1 { label.len() as f64 * 0.04 } else { 0.0 };
                    ctx.print(
                        x * LABEL_RADIUS - shift,
                        y * LABEL_RADIUS,
                        Span::styled(*label, Style::default().fg(Color::Gray)),
                    );
                }
            });

        match self.block {
            Some(block) => canvas.block(block).render(area, buf),
            None => canvas.render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn first_axis_points_up() {
        assert!(close(axis_point(0, 5.0), (0.0, 1.0)));
        assert!(close(axis_point(0, 0.0), (0.0, 0.0)));
    }

    #[test]
    fn values_outside_range_are_clamped() {
        assert!(close(axis_point(2, 12.0), axis_point(2, 5.0)));
        assert!(close(axis_point(3, -1.0), (0.0, 0.0)));
    }

    #[test]
    fn second_axis_is_clockwise() {
        let (x, _) = axis_point(1, 5.0);
        assert!(x > 0.0);
    }
}
