use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::scene::{Label, Scene, Sprite};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(scene, metrics);
        frame.render_widget(stats, chunks[0]);

        // Two terminal columns per cell keep the grid roughly square
        let tiles = u16::try_from(scene.tile_count).unwrap_or(u16::MAX);
        let grid_width = tiles.saturating_mul(2).saturating_add(2);
        let grid_height = tiles.saturating_add(2);
        let game_area = centered(chunks[1], grid_width, grid_height);

        let grid = self.render_grid(scene);
        frame.render_widget(grid, game_area);

        // The frozen board stays visible under the game over panel
        if scene.is_game_over() {
            let popup = centered(game_area, 30, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(scene), popup);
        }

        let controls = self.render_controls(scene);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, scene: &Scene) -> Paragraph<'_> {
        let lines: Vec<Line> = scene
            .sprite_grid()
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|sprite| match sprite {
                        Some(Sprite::SnakeHead) => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Some(Sprite::SnakeBody) => {
                            Span::styled("■ ", Style::default().fg(Color::Green))
                        }
                        Some(Sprite::Food) => Span::styled(
                            "■ ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, scene: &Scene, metrics: &GameMetrics) -> Paragraph<'_> {
        let score = scene.label(Label::Score).unwrap_or_default().to_string();
        let text = vec![Line::from(vec![
            Span::styled(
                score,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, scene: &Scene) -> Paragraph<'_> {
        let headline = scene.label(Label::GameOver).unwrap_or_default().to_string();
        let score = scene.label(Label::Score).unwrap_or_default().to_string();
        let restart = scene.label(Label::Restart).unwrap_or_default().to_string();

        let text = vec![
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                score,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(restart, Style::default().fg(Color::Gray))]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, scene: &Scene) -> Paragraph<'_> {
        let instructions = scene
            .label(Label::Instructions)
            .unwrap_or_default()
            .to_string();
        let text = vec![Line::from(vec![
            Span::styled(instructions, Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A rect of at most the given size, centred in `area`
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, CollisionType, Direction, GameConfig, GameEnd, GameState, GameStatus, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &GameState) -> String {
        let config = GameConfig::default();
        let scene = Scene::project(state, &config);
        let metrics = GameMetrics::new();
        let renderer = Renderer::new();

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &scene, &metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> GameState {
        GameState::new(
            Snake::new(Cell::new(12, 12), Direction::Right, 3),
            Some(Cell::new(2, 2)),
            &GameConfig::default(),
        )
    }

    #[test]
    fn test_running_frame() {
        let screen = draw(&state());
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("Use arrow keys to move"));
        assert!(screen.contains("■"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = state();
        state.score = 30;
        state.status = GameStatus::GameOver(GameEnd::Collision(CollisionType::SelfCollision));

        let screen = draw(&state);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Press SPACE to Restart"));
        assert!(screen.contains("Score: 30"));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 20, 20), area);
        assert_eq!(centered(area, 4, 2), Rect::new(3, 1, 4, 2));
    }
}
