//! Interactive terminal viewer for a [`Figure`].
//!
//! Draws on a braille canvas with equal aspect ratio and blocks until the
//! user closes it. Arrow keys pan, `+`/`-` zoom, `r` resets the view, and
//! `q`, `Esc` or `Enter` close the viewer.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use itertools::Itertools;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders, Clear, Paragraph,
    },
    DefaultTerminal,
};
use tracing::debug;

use crate::{
    config::{GRID_TICKS, PAN_STEP, ZOOM_FACTOR, ZOOM_MAX, ZOOM_MIN},
    debug::{item, STYLE_DONE},
    emit_info,
    figure::{nice_ticks, Bounds, Figure, MarkerSize, Series, SeriesKind, SeriesStyle},
};

/// Width of the column holding y tick labels, separator included.
const Y_GUTTER: u16 = 9;

const GRID_COLOR: Color = Color::Rgb(77, 77, 77);
const MARKER_LARGE: &str = "●";

/// Pan offset, as a fraction of the full extent, and zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pan: (f64, f64),
    zoom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Redraw,
    Close,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: (0.0, 0.0),
            zoom: 1.0,
        }
    }
}

impl ViewState {
    /// The part of `full` currently on screen.
    pub fn view(&self, full: Bounds) -> Bounds {
        let (cx, cy) = full.center();
        Bounds::from_center(
            (cx + self.pan.0 * full.width(), cy + self.pan.1 * full.height()),
            full.width() / self.zoom,
            full.height() / self.zoom,
        )
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    fn pan_by(&mut self, dx: f64, dy: f64) {
        let step = PAN_STEP / self.zoom;
        self.pan.0 += dx * step;
        self.pan.1 += dy * step;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_FACTOR).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_FACTOR).max(ZOOM_MIN);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn handle_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => {
                return KeyAction::Close
            }
            KeyCode::Left => self.pan_by(-1.0, 0.0),
            KeyCode::Right => self.pan_by(1.0, 0.0),
            KeyCode::Up => self.pan_by(0.0, 1.0),
            KeyCode::Down => self.pan_by(0.0, -1.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom_in(),
            KeyCode::Char('-') => self.zoom_out(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
        KeyAction::Redraw
    }
}

fn color(style: SeriesStyle) -> Color {
    let (r, g, b) = style.blended();
    Color::Rgb(r, g, b)
}

fn legend_symbol(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Line => "──",
        SeriesKind::Markers(MarkerSize::Small) => " •",
        SeriesKind::Markers(MarkerSize::Large) => " ●",
    }
}

/// Decimal places needed to tell neighbouring ticks apart.
fn tick_decimals(ticks: &[f64]) -> usize {
    match ticks {
        [a, b, ..] if b - a < 1.0 => (-(b - a).log10().floor()).max(0.0) as usize,
        _ => 0,
    }
}

fn tick_label(value: f64, decimals: usize) -> String {
    let label = format!("{value:.decimals$}");
    // Avoid printing "-0".
    match label.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => label,
    }
}

fn draw_grid(ctx: &mut Context, bounds: &Bounds, xs: &[f64], ys: &[f64]) {
    for &x in xs {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: bounds.min_y,
            x2: x,
            y2: bounds.max_y,
            color: GRID_COLOR,
        });
    }
    for &y in ys {
        ctx.draw(&CanvasLine {
            x1: bounds.min_x,
            y1: y,
            x2: bounds.max_x,
            y2: y,
            color: GRID_COLOR,
        });
    }
}

fn draw_series(ctx: &mut Context, series: &Series) {
    let color = color(series.style);
    match series.kind {
        SeriesKind::Line => {
            for (&(x1, y1), &(x2, y2)) in series.points.iter().tuple_windows() {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }
        }
        SeriesKind::Markers(MarkerSize::Small) => ctx.draw(&Points {
            coords: &series.points,
            color,
        }),
        // Labels are drawn after every layer, so these stay on top.
        SeriesKind::Markers(MarkerSize::Large) => {
            for &(x, y) in &series.points {
                ctx.print(x, y, MARKER_LARGE.fg(color));
            }
        }
    }
}

fn render_y_ticks(buf: &mut Buffer, gutter: Rect, bounds: &Bounds, ticks: &[f64]) {
    if gutter.width < 2 || gutter.height == 0 || bounds.height() <= 0.0 {
        return;
    }
    let width = (gutter.width - 1) as usize;
    let last_row = (gutter.height - 1) as f64;
    let decimals = tick_decimals(ticks);
    for &tick in ticks {
        let label = tick_label(tick, decimals);
        if label.len() > width {
            continue;
        }
        let frac = ((bounds.max_y - tick) / bounds.height()).clamp(0.0, 1.0);
        let row = gutter.y + (frac * last_row).round() as u16;
        buf.set_string(
            gutter.x,
            row,
            format!("{label:>width$}"),
            Style::default().fg(Color::Gray),
        );
    }
}

fn render_x_ticks(
    buf: &mut Buffer,
    row: Rect,
    canvas: Rect,
    bounds: &Bounds,
    ticks: &[f64],
) {
    if row.height == 0 || canvas.width == 0 || bounds.width() <= 0.0 {
        return;
    }
    let last_col = (canvas.width - 1) as f64;
    let mut free_from = row.x;
    let decimals = tick_decimals(ticks);
    for &tick in ticks {
        let label = tick_label(tick, decimals);
        let len = label.len() as u16;
        let frac = ((tick - bounds.min_x) / bounds.width()).clamp(0.0, 1.0);
        let col = canvas.x + (frac * last_col).round() as u16;
        let start = col.saturating_sub(len / 2).max(row.x);
        if start < free_from || start + len > row.right() {
            continue;
        }
        buf.set_string(start, row.y, &label, Style::default().fg(Color::Gray));
        free_from = start + len + 1;
    }
}

fn render_legend(frame: &mut Frame, figure: &Figure, canvas: Rect) {
    let lines: Vec<Line> = figure
        .series
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(legend_symbol(s.kind), Style::default().fg(color(s.style))),
                Span::raw(" "),
                Span::raw(s.label.as_str()),
            ])
        })
        .collect();
    let label_width = figure
        .series
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0) as u16;
    // symbol, space, and the two borders
    let width = label_width + 5;
    let height = lines.len() as u16 + 2;
    if width > canvas.width || height > canvas.height {
        return;
    }
    let area = Rect::new(canvas.right() - width, canvas.y, width, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Draws `figure` over the whole frame.
pub fn render_figure(frame: &mut Frame, figure: &Figure, state: &ViewState) {
    let block = Block::default()
        .title(format!(" {} ", figure.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [y_label_area, plot_area, x_tick_area, x_label_area, help_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
    let [gutter, canvas_area] =
        Layout::horizontal([Constraint::Length(Y_GUTTER), Constraint::Min(1)])
            .areas(plot_area);

    let bounds = state
        .view(figure.bounds())
        .fit_equal_aspect(canvas_area.width, canvas_area.height);
    let x_ticks = nice_ticks(bounds.min_x, bounds.max_x, GRID_TICKS);
    let y_ticks = nice_ticks(bounds.min_y, bounds.max_y, GRID_TICKS);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([bounds.min_x, bounds.max_x])
        .y_bounds([bounds.min_y, bounds.max_y])
        .paint(|ctx| {
            draw_grid(ctx, &bounds, &x_ticks, &y_ticks);
            for series in &figure.series {
                ctx.layer();
                draw_series(ctx, series);
            }
        });
    frame.render_widget(canvas, canvas_area);

    render_y_ticks(frame.buffer_mut(), gutter, &bounds, &y_ticks);
    render_x_ticks(frame.buffer_mut(), x_tick_area, canvas_area, &bounds, &x_ticks);
    render_legend(frame, figure, canvas_area);

    frame.render_widget(
        Paragraph::new(figure.y_label.as_str()).style(Style::default().bold()),
        y_label_area,
    );
    frame.render_widget(
        Paragraph::new(figure.x_label.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().bold()),
        x_label_area,
    );
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Arrows", Style::default().fg(Color::Yellow)),
        Span::raw(":pan  "),
        Span::styled("+/-", Style::default().fg(Color::Yellow)),
        Span::raw(":zoom  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":reset  "),
        Span::styled("q/ESC", Style::default().fg(Color::Yellow)),
        Span::raw(":close"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn run_loop(terminal: &mut DefaultTerminal, figure: &Figure) -> io::Result<()> {
    let mut state = ViewState::default();
    loop {
        terminal.draw(|frame| render_figure(frame, figure, &state))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if state.handle_key(key.code) == KeyAction::Close {
                return Ok(());
            }
            debug!(zoom = state.zoom(), "view changed");
        }
    }
}

/// Shows `figure` and blocks until the user closes the viewer.
///
/// The terminal is restored before returning, whether drawing succeeded
/// or not.
pub fn show(figure: &Figure) -> io::Result<()> {
    emit_info!(fmt:"opening viewer {}" | item("series", figure.series.len()));
    let mut terminal = ratatui::try_init()?;
    let result = run_loop(&mut terminal, figure);
    ratatui::restore();
    emit_info!(sty:STYLE_DONE, msg:"viewer closed");
    result
}
