use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use std::io::{self, stdout};
use std::time::Duration;
use tracing::debug;

use windzone::AssessmentScene;

use super::{fit_bounds, to_local};
use crate::config::{PreviewConfig, RgbColor};

/// Labels sit outside the zone; leave a margin past them.
const VIEW_MARGIN: f64 = 1.1;

/// Which overlays are currently drawn.
#[derive(Debug, Clone, Copy)]
struct Layers {
    rings: bool,
    dividers: bool,
    labels: bool,
}

impl From<&PreviewConfig> for Layers {
    fn from(config: &PreviewConfig) -> Self {
        Self {
            rings: config.show_rings,
            dividers: config.show_dividers,
            labels: config.show_labels,
        }
    }
}

fn color(c: RgbColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub fn run(scene: &AssessmentScene, config: &PreviewConfig) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, scene, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    scene: &AssessmentScene,
    config: &PreviewConfig,
) -> Result<()> {
    let mut layers = Layers::from(config);

    loop {
        terminal.draw(|frame| draw(frame, scene, config, layers))?;

        // Nothing animates, so just wait for keys
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => break,
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => layers.rings = !layers.rings,
            KeyEvent {
                code: KeyCode::Char('d'),
                ..
            } => layers.dividers = !layers.dividers,
            KeyEvent {
                code: KeyCode::Char('l'),
                ..
            } => layers.labels = !layers.labels,
            _ => {}
        }
        debug!("Preview layers now {:?}", layers);
    }

    Ok(())
}

fn draw(frame: &mut Frame, scene: &AssessmentScene, config: &PreviewConfig, layers: Layers) {
    let zone = *scene.zone();
    let center = scene.center();
    let title = format!(
        " {:.5} | lag {:.0}m | total {:.0}m | [r]ings [d]ividers [l]abels [q]uit ",
        center, zone.lag_distance, zone.total_radius
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let area = frame.area();
    let inner = block.inner(area);
    let half_extent = zone.total_radius.max(scene.label_distance()) * VIEW_MARGIN;
    let (x_bounds, y_bounds) = fit_bounds(inner.width, inner.height, half_extent);

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            if layers.rings {
                for radius in scene.rings().iter() {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius,
                        color: color(config.ring_color),
                    });
                }
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: zone.lag_distance,
                color: color(config.lag_color),
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: zone.total_radius,
                color: color(config.outer_color),
            });

            if layers.dividers {
                for divider in scene.dividers() {
                    let (x, y) = to_local(center, divider.endpoint);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: color(config.divider_color),
                    });
                }
            }

            // Text goes on a layer above the shapes
            ctx.layer();
            if layers.labels {
                for label in scene.labels() {
                    let (x, y) = to_local(center, label.position);
                    ctx.print(
                        x,
                        y,
                        Span::styled(
                            label.direction.abbreviation(),
                            Style::default()
                                .fg(color(config.label_color))
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
            ctx.print(
                0.0,
                0.0,
                Span::styled("+", Style::default().fg(color(config.center_color))),
            );
        });

    frame.render_widget(canvas, area);
}
