use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::palette::Palette;
use crate::game::{Cell, GameView, Outcome};
use crate::metrics::GameMetrics;

const END_SCREEN_WIDTH: u16 = 40;
const END_SCREEN_HEIGHT: u16 = 9;

pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn render(&self, frame: &mut Frame, view: &GameView, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(view, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = board_area(chunks[1], view);

        // Board while playing, end screen once the game is over
        match view.status.outcome() {
            None => frame.render_widget(self.render_grid(view), game_area),
            Some(outcome) => {
                let area = centered(
                    chunks[1],
                    game_area.width.max(END_SCREEN_WIDTH),
                    game_area.height.max(END_SCREEN_HEIGHT),
                );
                frame.render_widget(self.render_game_over(view, outcome), area);
            }
        }

        // Render footer with controls
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, view: &GameView) -> Paragraph<'_> {
        let board = Style::default().bg(self.palette.board.into());
        let alphas = view.alpha_grid();
        let mut lines = Vec::with_capacity(view.height as usize);

        for (y, row) in alphas.chunks(view.width as usize).enumerate() {
            let mut spans = Vec::with_capacity(view.width as usize);

            for (x, alpha) in row.iter().enumerate() {
                let cell = Cell::new(x as i32, y as i32);

                let span = if let Some(alpha) = alpha {
                    Span::styled("  ", Style::default().bg(self.palette.segment(*alpha)))
                } else if view.food == Some(cell) {
                    Span::styled("  ", Style::default().bg(self.palette.food.into()))
                } else {
                    // Empty cell with a grid mark
                    Span::styled("· ", board.fg(self.palette.snake.into()))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(self.palette.snake.into()))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &GameView, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(self.palette.foreground.into());

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(view.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(view.segments.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, view: &GameView, outcome: Outcome) -> Paragraph<'_> {
        let (banner, color) = match outcome {
            Outcome::Won => ("YOU WIN", self.palette.snake),
            Outcome::Lost => ("GAME OVER", self.palette.food),
        };
        let hint = Style::default().fg(Color::Gray);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                banner,
                Style::default()
                    .fg(color.into())
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.score.to_string(),
                    Style::default()
                        .fg(self.palette.foreground.into())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", hint),
                Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" to restart or ", hint),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" to quit", hint),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color.into())),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

/// Box that fits the board: two columns per cell plus borders
fn board_area(area: Rect, view: &GameView) -> Rect {
    centered(area, view.width as u16 * 2 + 2, view.height as u16 + 2)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
