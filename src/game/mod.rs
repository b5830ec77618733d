mod arena;
mod effects;
mod food;
pub(crate) use self::arena::Arena;
use self::effects::{Shake, Sparks};
use self::food::Food;
use crate::app::AppState;
use crate::command::Command;
use crate::config::SnakeConfig;
use crate::consts;
use crate::snake::{Cell, Direction, Snake};
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use enum_map::{enum_map, EnumMap};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::collections::HashSet;
use std::io;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    score: u32,
    snake: Snake<Sparks, Shake>,
    food: Food<R>,
    state: GameState,
    arena: Arena,
    settings: SnakeConfig,
    last_frame: Option<Instant>,
    head_symbols: EnumMap<Direction, char>,
    body_symbols: EnumMap<Direction, char>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: SnakeConfig, arena: Arena) -> Self {
        Game::new_with_rng(settings, arena, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: SnakeConfig, arena: Arena, rng: R) -> Game<R> {
        let snake = Snake::with_feedback(
            arena.center(),
            settings.initial_length,
            settings.speed.get(),
            Sparks::default(),
            Shake::default(),
        );
        let occupied = std::iter::once(snake.head())
            .chain(snake.segments().iter().map(|s| s.position))
            .map(|c| arena.wrap(c))
            .collect::<HashSet<Cell>>();
        let food = Food::new(arena, rng, &occupied);
        log::info!(
            "New game: {}x{} arena, speed {}, {} segments, food at {}",
            arena.size().width,
            arena.size().height,
            snake.speed(),
            snake.len(),
            food.position()
        );
        Game {
            score: 0,
            snake,
            food,
            state: GameState::Running,
            arena,
            settings,
            last_frame: None,
            head_symbols: enum_map! {
                Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
                Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
                Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
                Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            },
            body_symbols: enum_map! {
                Direction::Up | Direction::Down => consts::SNAKE_BODY_VERTICAL_SYMBOL,
                Direction::Left | Direction::Right => consts::SNAKE_BODY_HORIZONTAL_SYMBOL,
            },
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<AppState>> {
        if self.running() {
            let last = *self.last_frame.get_or_insert_with(Instant::now);
            let wait = (last + consts::FRAME_PERIOD).saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let now = Instant::now();
                self.advance(now.saturating_duration_since(last));
                self.last_frame = Some(now);
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run the simulation forwards by `dt`
    fn advance(&mut self, dt: Duration) {
        if !self.running() {
            return;
        }
        for cell in self.snake.tick(dt) {
            if self.arena.wrap(cell) == self.food.position() {
                self.score += 1;
                log::debug!(
                    "Ate food at {cell}; head is at {:?}",
                    self.snake.head_position()
                );
                self.snake.collect_food(&mut self.food);
            }
        }
        self.snake.effects_mut().fade();
        self.snake.camera_mut().settle();
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<AppState> {
        if event == Event::FocusLost {
            self.pause();
            return None;
        }
        match (self.state, Command::from_key_event(event.as_key_press_event()?)?) {
            (_, Command::Quit) => return Some(AppState::Quit),
            (_, Command::Restart) => {
                return Some(AppState::Game(Game::new(self.settings, self.arena)));
            }
            (GameState::Running, Command::Up) => self.snake.request_direction(Direction::Up),
            (GameState::Running, Command::Down) => self.snake.request_direction(Direction::Down),
            (GameState::Running, Command::Left) => self.snake.request_direction(Direction::Left),
            (GameState::Running, Command::Right) => {
                self.snake.request_direction(Direction::Right);
            }
            (GameState::Running, Command::Pause) => self.pause(),
            (GameState::Paused, Command::Pause) => self.resume(),
            (GameState::Paused, _) => (),
        }
        None
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused;
    }

    fn resume(&mut self) {
        self.state = GameState::Running;
        // Don't count the time spent paused
        self.last_frame = None;
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}   Length: {}   Speed: {:.1}",
                self.score,
                self.snake.len(),
                self.snake.speed()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let mut block_size = self.arena.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let mut block_area = center_rect(block_area, block_size);
        block_area.x = block_area
            .x
            .saturating_add_signed(self.snake.camera().offset());
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for seg in self.snake.segments().iter().rev() {
            canvas.draw_cell(
                self.arena.to_screen(seg.position),
                self.body_symbols[seg.heading],
                consts::SNAKE_STYLE,
            );
        }
        canvas.draw_cell(
            self.arena.to_screen(self.food.position()),
            consts::FOOD_SYMBOL,
            consts::FOOD_STYLE,
        );
        for cell in self.snake.effects().cells() {
            canvas.draw_cell(
                self.arena.to_screen(cell),
                consts::SPARK_SYMBOL,
                consts::SPARK_STYLE,
            );
        }
        // Draw the head last so that it's never hidden
        canvas.draw_cell(
            self.arena.to_screen(self.snake.head_display_cell()),
            self.head_symbols[self.snake.direction()],
            consts::SNAKE_STYLE,
        );

        let help = match self.state {
            GameState::Running => [
                Span::raw(" Steer (←↓↑→) — Pause ("),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(") — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ],
            GameState::Paused => [
                Span::raw(" — PAUSED — Resume ("),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(") — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ],
        };
        Line::from_iter(help).render(help_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,
}
