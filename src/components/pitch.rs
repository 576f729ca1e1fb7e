//! Pitch drawings on a ratatui [`Canvas`], in StatsBomb coordinates.
//!
//! The source pitch is 120x80 with `y` growing downwards; the canvas grows
//! upwards, so every data point goes through [`flip`].

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::text::Span;
use tui::widgets::canvas::{Canvas, Circle, Context, Line, Rectangle};
use tui::widgets::{Block, Widget};
use wc_api::Location;
use wc_api::colors::{TeamColors, hex_to_rgb};
use wc_api::formation::StartingXi;
use wc_api::maps::{PassCategory, PassSegment, ShotCategory, ShotPoint};

pub const PITCH_LENGTH: f64 = 120.0;
pub const PITCH_WIDTH: f64 = 80.0;

const LINE_COLOR: Color = Color::White;
const ARROW_HEAD_LEN: f64 = 2.0;
const ARROW_HEAD_ANGLE: f64 = 0.45;

pub fn flip(loc: Location) -> (f64, f64) {
    (loc.x, PITCH_WIDTH - loc.y)
}

/// Named colour from the map categories to a terminal colour.
pub fn named_color(name: &str) -> Color {
    match name {
        "blue" => Color::LightBlue,
        "red" => Color::LightRed,
        _ => Color::White,
    }
}

pub fn hex_color(hex: &str) -> Color {
    hex_to_rgb(hex).map_or(Color::White, |(r, g, b)| Color::Rgb(r, g, b))
}

fn rect(ctx: &mut Context, x: f64, y: f64, width: f64, height: f64) {
    ctx.draw(&Rectangle { x, y, width, height, color: LINE_COLOR });
}

/// Markings of a horizontal pitch, attacking left to right.
fn draw_horizontal_pitch(ctx: &mut Context) {
    rect(ctx, 0.0, 0.0, PITCH_LENGTH, PITCH_WIDTH);
    ctx.draw(&Line::new(60.0, 0.0, 60.0, PITCH_WIDTH, LINE_COLOR));
    ctx.draw(&Circle { x: 60.0, y: 40.0, radius: 10.0, color: LINE_COLOR });

    // penalty and six-yard boxes, goals
    rect(ctx, 0.0, 18.0, 18.0, 44.0);
    rect(ctx, 102.0, 18.0, 18.0, 44.0);
    rect(ctx, 0.0, 30.0, 6.0, 20.0);
    rect(ctx, 114.0, 30.0, 6.0, 20.0);
    rect(ctx, -2.0, 36.0, 2.0, 8.0);
    rect(ctx, 120.0, 36.0, 2.0, 8.0);

    ctx.draw(&Circle { x: 12.0, y: 40.0, radius: 0.4, color: LINE_COLOR });
    ctx.draw(&Circle { x: 108.0, y: 40.0, radius: 0.4, color: LINE_COLOR });
}

/// Same markings turned upright: own goal at the bottom.
fn draw_vertical_pitch(ctx: &mut Context) {
    rect(ctx, 0.0, 0.0, PITCH_WIDTH, PITCH_LENGTH);
    ctx.draw(&Line::new(0.0, 60.0, PITCH_WIDTH, 60.0, LINE_COLOR));
    ctx.draw(&Circle { x: 40.0, y: 60.0, radius: 10.0, color: LINE_COLOR });

    rect(ctx, 18.0, 0.0, 44.0, 18.0);
    rect(ctx, 18.0, 102.0, 44.0, 18.0);
    rect(ctx, 30.0, 0.0, 20.0, 6.0);
    rect(ctx, 30.0, 114.0, 20.0, 6.0);
    rect(ctx, 36.0, -2.0, 8.0, 2.0);
    rect(ctx, 36.0, 120.0, 8.0, 2.0);
}

fn horizontal_canvas<'a, F>(block: Option<Block<'a>>, paint: F) -> Canvas<'a, F>
where
    F: Fn(&mut Context),
{
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-3.0, PITCH_LENGTH + 3.0])
        .y_bounds([-2.0, PITCH_WIDTH + 2.0])
        .paint(paint);
    match block {
        Some(block) => canvas.block(block),
        None => canvas,
    }
}

// ---------------------------------------------------------------------------
// Pass map
// ---------------------------------------------------------------------------

pub struct PassMapWidget<'a> {
    pub segments: &'a [PassSegment],
    pub block: Option<Block<'a>>,
}

impl Widget for PassMapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let segments = self.segments;
        horizontal_canvas(self.block, |ctx| {
            draw_horizontal_pitch(ctx);
            ctx.layer();
            for s in segments {
                draw_arrow(ctx, s.start, s.end, pass_color(s.category));
            }
        })
        .render(area, buf);
    }
}

pub fn pass_color(category: PassCategory) -> Color {
    let color = named_color(category.color());
    match category {
        PassCategory::Completed => color,
        PassCategory::Incomplete => dim(color),
    }
}

fn dim(color: Color) -> Color {
    match color {
        Color::LightRed => Color::Red,
        Color::LightBlue => Color::Blue,
        other => other,
    }
}

fn draw_arrow(ctx: &mut Context, start: Location, end: Location, color: Color) {
    let (x1, y1) = flip(start);
    let (x2, y2) = flip(end);
    ctx.draw(&Line::new(x1, y1, x2, y2, color));

    let (dx, dy) = (x2 - x1, y2 - y1);
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    let heading = dy.atan2(dx);
    for side in [-ARROW_HEAD_ANGLE, ARROW_HEAD_ANGLE] {
        let back = heading + std::f64::consts::PI + side;
        ctx.draw(&Line::new(
            x2,
            y2,
            x2 + ARROW_HEAD_LEN * back.cos(),
            y2 + ARROW_HEAD_LEN * back.sin(),
            color,
        ));
    }
}

// ---------------------------------------------------------------------------
// Shot map
// ---------------------------------------------------------------------------

pub struct ShotMapWidget<'a> {
    pub points: &'a [ShotPoint],
    pub block: Option<Block<'a>>,
}

impl Widget for ShotMapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let points = self.points;
        horizontal_canvas(self.block, |ctx| {
            draw_horizontal_pitch(ctx);
            ctx.layer();
            for p in points {
                let (x, y) = flip(p.location);
                ctx.print(x, y, Span::styled(p.category.marker().to_string(), shot_style(p.category)));
            }
        })
        .render(area, buf);
    }
}

pub fn shot_style(category: ShotCategory) -> Style {
    Style::default().fg(named_color(category.color()))
}

// ---------------------------------------------------------------------------
// Starting XI
// ---------------------------------------------------------------------------

/// Nominal spot of each StatsBomb position id on a pitch attacking left to
/// right. Unknown ids fall back to the centre spot.
pub fn position_spot(position_id: u8) -> Location {
    let (x, y) = match position_id {
        1 => (6.0, 40.0),
        2 => (32.0, 72.0),
        3 => (24.0, 54.0),
        4 => (22.0, 40.0),
        5 => (24.0, 26.0),
        6 => (32.0, 8.0),
        7 => (46.0, 74.0),
        8 => (46.0, 6.0),
        9 => (42.0, 52.0),
        10 => (40.0, 40.0),
        11 => (42.0, 28.0),
        12 => (64.0, 72.0),
        13 => (58.0, 52.0),
        14 => (56.0, 40.0),
        15 => (58.0, 28.0),
        16 => (64.0, 8.0),
        17 => (88.0, 70.0),
        18 => (78.0, 54.0),
        19 => (76.0, 40.0),
        20 => (78.0, 26.0),
        21 => (88.0, 10.0),
        22 => (100.0, 50.0),
        23 => (102.0, 40.0),
        24 => (100.0, 30.0),
        25 => (90.0, 40.0),
        _ => (60.0, 40.0),
    };
    Location::new(x, y)
}

/// Upright pitch with the eleven starters at their nominal spots.
pub struct FormationWidget<'a> {
    pub xi: &'a StartingXi,
    pub colors: TeamColors,
    pub block: Option<Block<'a>>,
}

impl Widget for FormationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let xi = self.xi;
        let kit = hex_color(self.colors.primary);
        let trim = hex_color(self.colors.secondary);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-2.0, PITCH_WIDTH + 2.0])
            .y_bounds([-3.0, PITCH_LENGTH + 3.0])
            .paint(move |ctx| {
                draw_vertical_pitch(ctx);
                ctx.layer();
                for slot in &xi.slots {
                    let spot = position_spot(slot.position_id);
                    // attacking upwards: the left flank (small y) is on the left
                    let (x, y) = (spot.y, spot.x);
                    ctx.draw(&Circle { x, y, radius: 2.5, color: trim });
                    let label = match (slot.jersey_number, slot.player.as_deref()) {
                        (Some(n), Some(name)) => format!("{n} {name}"),
                        (None, Some(name)) => name.to_string(),
                        (Some(n), None) => n.to_string(),
                        (None, None) => slot.position.clone(),
                    };
                    let offset = label.chars().count() as f64 * 0.8;
                    ctx.print((x - offset).max(0.0), y - 5.0, Span::styled(label, Style::default().fg(kit)));
                }
            });
        match self.block {
            Some(block) => canvas.block(block).render(area, buf),
            None => canvas.render(area, buf),
        }
    }
}
