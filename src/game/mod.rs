mod body;
mod direction;
mod fruit;
mod grid;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Segment;
use self::body::Body;
use self::grid::{CellState, Grid};
use crate::consts;
use crate::util::center_rect;
use log::{debug, info, trace};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The state of a single round of Snake.
///
/// This is the only thing that mutates the board, the snake, and the fruit;
/// all three are kept consistent with one another after every call to
/// [`Game::tick()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    /// Time between ticks; the game itself never sleeps, this is for the
    /// driver
    speed: Duration,
    direction: Direction,
    grid: Grid,
    body: Body,
    fruit: Segment,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(nrows: u16, ncols: u16, speed: Duration) -> Result<Self, GameError> {
        Game::new_with_rng(nrows, ncols, speed, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Start a new game on an `nrows`×`ncols` board.  The snake starts in the
    /// middle of the board heading down, and a fruit is placed at random.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the board is too small to hold the starting snake
    /// plus a fruit.
    pub(crate) fn new_with_rng(
        nrows: u16,
        ncols: u16,
        speed: Duration,
        mut rng: R,
    ) -> Result<Game<R>, GameError> {
        let too_small = GameError::BoardTooSmall { nrows, ncols };
        if ncols == 0 {
            return Err(too_small);
        }
        let direction = Direction::Down;
        let body = Body::new(
            Segment::new(nrows / 2, ncols / 2),
            direction,
            consts::INITIAL_SNAKE_LENGTH,
            nrows,
            ncols,
        )
        .ok_or(too_small)?;
        let mut grid = Grid::new(nrows, ncols);
        for seg in body.iter() {
            grid.set(seg, CellState::SnakeBody);
        }
        let fruit = fruit::place(&mut grid, &mut rng).ok_or(too_small)?;
        Ok(Game {
            rng,
            score: 0,
            speed,
            direction,
            grid,
            body,
            fruit,
            state: GameState::Running,
        })
    }

    /// Change the direction the snake will move in on the next tick.  A
    /// request to turn around and head back the way the snake came is
    /// ignored.
    pub(crate) fn set_direction(&mut self, requested: Direction) {
        if requested == self.direction.reverse() {
            trace!("Ignoring request to reverse direction to {requested:?}");
        } else if requested != self.direction {
            debug!("Snake turned from {:?} to {requested:?}", self.direction);
            self.direction = requested;
        }
    }

    /// Advance the game by one step.  Once the game is over, this does
    /// nothing.
    pub(crate) fn tick(&mut self) {
        if !self.running() {
            return;
        }
        let head = self.body.head();
        let Some(new_head) = self
            .direction
            .advance(head, self.grid.nrows(), self.grid.ncols())
        else {
            self.end(Ending::Wall);
            return;
        };
        // The tail has not moved out of the way yet, so running into the
        // cell it currently occupies also counts.
        if self.grid.get(new_head) == CellState::SnakeBody {
            self.end(Ending::SelfCollision);
            return;
        }
        self.body.prepend_head(new_head);
        self.grid.set(new_head, CellState::SnakeBody);
        if new_head == self.fruit {
            self.score += consts::FRUIT_POINTS;
            debug!(
                "Ate fruit at ({}, {}); score is now {}; length is now {}",
                new_head.row,
                new_head.col,
                self.score,
                self.body.len()
            );
            match fruit::place(&mut self.grid, &mut self.rng) {
                Some(seg) => self.fruit = seg,
                None => self.end(Ending::BoardFull),
            }
        } else if let Some(tail) = self.body.remove_tail() {
            self.grid.set(tail, CellState::Empty);
        }
        let tail = self.body.tail();
        trace!(
            "Snake moved; head at ({}, {}), tail at ({}, {})",
            new_head.row,
            new_head.col,
            tail.row,
            tail.col
        );
    }

    fn end(&mut self, ending: Ending) {
        let head = self.body.head();
        info!(
            "Game over at ({}, {}): {ending}; final score {}, length {}",
            head.row,
            head.col,
            self.score,
            self.body.len()
        );
        self.state = GameState::Over(ending);
    }
}

impl<R> Game<R> {
    #[cfg(test)]
    pub(crate) fn with_layout<I: IntoIterator<Item = Segment>>(
        nrows: u16,
        ncols: u16,
        body: I,
        direction: Direction,
        fruit: Segment,
        rng: R,
    ) -> Game<R> {
        let body = Body::from_segments(body);
        let mut grid = Grid::new(nrows, ncols);
        for seg in body.iter() {
            grid.set(seg, CellState::SnakeBody);
        }
        grid.set(fruit, CellState::Fruit);
        Game {
            rng,
            score: 0,
            speed: Duration::from_millis(consts::DEFAULT_SPEED_MS),
            direction,
            grid,
            body,
            fruit,
            state: GameState::Running,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn speed(&self) -> Duration {
        self.speed
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn snake_len(&self) -> usize {
        self.body.len()
    }

    /// The direction the snake moved in on the last tick
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> Segment {
        self.body.head()
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_height = self.grid.nrows().saturating_add(2);
        let display = center_rect(
            area,
            Size {
                width: self.grid.ncols().saturating_add(2),
                height: board_height.saturating_add(2),
            },
        );
        let [score_area, block_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board_height),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        Block::bordered().render(block_area, buf);
        if let GameState::Over(ending) = self.state {
            Line::from(ending.message()).render(msg_area, buf);
        }

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        // After the last fruit on a full board is eaten, `fruit` is under the
        // head, so draw it first.
        board.draw_cell(self.fruit, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
        for seg in self.body.iter().skip(1) {
            board.draw_cell(seg, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }
        let head_style = match self.state {
            GameState::Running | GameState::Over(Ending::BoardFull) => consts::SNAKE_STYLE,
            GameState::Over(_) => consts::COLLISION_STYLE,
        };
        board.draw_cell(self.body.head(), consts::SNAKE_SYMBOL, head_style);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, seg: Segment, symbol: char, style: Style) {
        let pos = Position::from(seg);
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Running,
    Over(Ending),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The snake ran into the edge of the board
    Wall,
    /// The snake ran into itself
    SelfCollision,
    /// The snake filled the board, leaving nowhere to place a fruit
    BoardFull,
}

impl Ending {
    fn message(self) -> &'static str {
        match self {
            Ending::Wall | Ending::SelfCollision => " Game Over! Press any key.",
            Ending::BoardFull => " Board full! Press any key.",
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ending::Wall => "hit the wall",
            Ending::SelfCollision => "ran into itself",
            Ending::BoardFull => "filled the board",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GameError {
    #[error("a {nrows}x{ncols} board is too small to play on")]
    BoardTooSmall { nrows: u16, ncols: u16 },
}
