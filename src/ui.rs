//! Screen layout and drawing

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
    widgets::*,
};

use crate::constants::{APP_NAME, APP_VERSION, ROLL_LABEL, TITLE};
use crate::die::DieGlyph;
use crate::messages::RenderState;

/// Terminal cells are about twice as tall as wide, so the die area is too
const DIE_HEIGHT: u16 = 12;
const DIE_WIDTH: u16 = DIE_HEIGHT * 2;
const BUTTON_WIDTH: u16 = 10;
const BUTTON_HEIGHT: u16 = 3;

/// Half-size of the canvas; the die itself spans -1.0..=1.0
const CANVAS_BOUND: f64 = 1.6;
const CORNER: f64 = 0.25;
const PIP_RADIUS: f64 = 0.14;

/// Where each element of the screen lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub die: Rect,
    pub caption: Rect,
    pub button: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Top padding
                Constraint::Length(1),             // Title
                Constraint::Min(0),                // Spacer
                Constraint::Length(DIE_HEIGHT),    // Die
                Constraint::Length(1),             // Padding
                Constraint::Length(1),             // Caption
                Constraint::Length(1),             // Padding
                Constraint::Length(BUTTON_HEIGHT), // Roll button
                Constraint::Min(0),                // Spacer
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        ScreenLayout {
            title: chunks[1],
            die: center_horizontally(chunks[3], DIE_WIDTH),
            caption: chunks[5],
            button: center_horizontally(chunks[7], BUTTON_WIDTH),
            status: chunks[9],
        }
    }
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Color treatment for the die and button
pub fn roll_color(is_rolling: bool) -> Color {
    if is_rolling {
        Color::Green
    } else {
        Color::Red
    }
}

/// Rotate `(x, y)` clockwise by `degrees` around the origin
pub fn rotate(point: (f64, f64), degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (x, y) = point;
    (x * cos + y * sin, -x * sin + y * cos)
}

/// Draw the whole screen with the die turned to `angle` degrees.
///
/// Returns the layout used so input handling can hit-test the button.
pub fn draw_ui(f: &mut Frame, state: &RenderState, angle: f64) -> ScreenLayout {
    let layout = ScreenLayout::new(f.area());
    let color = roll_color(state.is_rolling);

    let title = Paragraph::new(TITLE)
        .style(Style::default().bold())
        .alignment(Alignment::Center);
    f.render_widget(title, layout.title);

    draw_die(f, state.glyph(), color, angle, layout.die);

    let caption = Paragraph::new(state.caption())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(caption, layout.caption);

    draw_button(f, color, layout.button);
    draw_status_bar(f, layout.status);

    layout
}

fn draw_die(f: &mut Frame, glyph: DieGlyph, color: Color, angle: f64, area: Rect) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .paint(move |ctx| paint_die(ctx, glyph, color, angle));
    f.render_widget(canvas, area);
}

fn paint_die(ctx: &mut Context, glyph: DieGlyph, color: Color, angle: f64) {
    // Square with clipped corners, clockwise from top-left
    let outline = [
        (-1.0 + CORNER, 1.0),
        (1.0 - CORNER, 1.0),
        (1.0, 1.0 - CORNER),
        (1.0, -1.0 + CORNER),
        (1.0 - CORNER, -1.0),
        (-1.0 + CORNER, -1.0),
        (-1.0, -1.0 + CORNER),
        (-1.0, 1.0 - CORNER),
    ];
    let corners: Vec<(f64, f64)> = outline.iter().map(|&p| rotate(p, angle)).collect();
    for (i, &(x1, y1)) in corners.iter().enumerate() {
        let (x2, y2) = corners[(i + 1) % corners.len()];
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }

    match glyph {
        DieGlyph::Face(_) => {
            for &pip in glyph.pips() {
                let (x, y) = rotate(pip, angle);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: PIP_RADIUS,
                    color,
                });
            }
        }
        DieGlyph::Unknown => {
            ctx.print(
                0.0,
                0.0,
                Line::styled(glyph.symbol().to_string(), Style::default().fg(color).bold()),
            );
        }
    }
}

fn draw_button(f: &mut Frame, color: Color, area: Rect) {
    let button = Paragraph::new(ROLL_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(color).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(button, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect) {
    let status = format!(
        " {} v{} | Enter/Space/click:roll | q:quit ",
        APP_NAME, APP_VERSION
    );
    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState, width: u16, height: u16) -> (Buffer, ScreenLayout) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut layout = None;
        terminal
            .draw(|f| {
                layout = Some(draw_ui(f, state, state.rotation));
            })
            .unwrap();
        (terminal.backend().buffer().clone(), layout.unwrap())
    }

    fn row_text(buffer: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buffer[(x, area.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_layout_fits_and_centers() {
        let area = Rect::new(0, 0, 60, 30);
        let layout = ScreenLayout::new(area);
        assert_eq!(layout.die.width, DIE_WIDTH);
        assert_eq!(layout.die.height, DIE_HEIGHT);
        assert_eq!(layout.button.width, BUTTON_WIDTH);
        assert_eq!(layout.button.x, (60 - BUTTON_WIDTH) / 2);
        assert!(layout.title.y < layout.die.y);
        assert!(layout.die.bottom() <= layout.caption.y);
        assert!(layout.caption.y < layout.button.y);
        assert_eq!(layout.status.y, 29);
    }

    #[test]
    fn test_layout_narrow_terminal() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 8, 30));
        assert_eq!(layout.button.width, 8);
        assert_eq!(layout.die.width, 8);
    }

    #[test]
    fn test_renders_title_caption_and_button() {
        let state = RenderState {
            face_value: 5,
            ..RenderState::default()
        };
        let (buffer, layout) = render(&state, 60, 30);

        assert!(row_text(&buffer, layout.title).contains("Roll the die!!!"));
        assert!(row_text(&buffer, layout.caption).contains("You rolled a 5"));

        let label_row = Rect::new(layout.button.x, layout.button.y + 1, layout.button.width, 1);
        assert!(row_text(&buffer, label_row).contains("Roll"));
    }

    #[test]
    fn test_button_color_follows_rolling_flag() {
        let idle = RenderState::default();
        let (buffer, layout) = render(&idle, 60, 30);
        let center = (layout.button.x + layout.button.width / 2, layout.button.y + 1);
        assert_eq!(buffer[center].bg, Color::Red);

        let rolling = RenderState {
            is_rolling: true,
            ..RenderState::default()
        };
        let (buffer, _) = render(&rolling, 60, 30);
        assert_eq!(buffer[center].bg, Color::Green);
    }

    #[test]
    fn test_die_is_drawn() {
        let (buffer, layout) = render(&RenderState::default(), 60, 30);
        let drawn = (layout.die.top()..layout.die.bottom())
            .flat_map(|y| (layout.die.left()..layout.die.right()).map(move |x| (x, y)))
            .filter(|&pos| buffer[pos].symbol() != " ")
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn test_rotate() {
        let (x, y) = rotate((0.0, 1.0), 90.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        let (x, y) = rotate((0.5, -0.5), 360.0);
        assert!((x - 0.5).abs() < 1e-9);
        assert!((y + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_roll_color() {
        assert_eq!(roll_color(true), Color::Green);
        assert_eq!(roll_color(false), Color::Red);
    }
}
