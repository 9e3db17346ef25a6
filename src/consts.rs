//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Number of rows on the board
pub(crate) const BOARD_ROWS: u16 = 20;

/// Number of columns on the board
pub(crate) const BOARD_COLS: u16 = 40;

/// Default number of milliseconds between movements of the snake
pub(crate) const DEFAULT_SPEED_MS: u64 = 200;

/// Length of the snake before any fruits have been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points awarded for each fruit eaten
pub(crate) const FRUIT_POINTS: u32 = 100;

/// Glyph for every cell of the snake
pub(crate) const SNAKE_SYMBOL: char = 'X';

/// Glyph for the fruit
pub(crate) const FRUIT_SYMBOL: char = '@';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the snake's head once it has crashed
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Name of the directory under the user's config & data directories in which
/// files are stored
pub(crate) const APP_DIR_NAME: &str = "termsnake";
