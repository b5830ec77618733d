//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Target time between frames.  The simulation is fed the actual elapsed
/// time, so this only bounds how often the screen is redrawn.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(33);

/// Distance the head must travel before the body follows it by one place
pub(crate) const STEP_LENGTH: f32 = 1.0;

/// Most grid steps the head may take in one tick.  Travel beyond this is
/// dropped, which bounds the work done after a long stall.
pub(crate) const MAX_STEPS_PER_TICK: f32 = 64.0;

/// Default head speed, in units per second
pub(crate) const DEFAULT_SPEED: f32 = 5.0;

/// Default number of body segments at the start of a game
pub(crate) const DEFAULT_SNAKE_LENGTH: NonZeroUsize = NonZeroUsize::MIN.saturating_add(2);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default size of the playing field, not counting its border
pub(crate) const DEFAULT_ARENA_SIZE: Size = Size {
    width: 40,
    height: 16,
};

/// Smallest allowed playing field
pub(crate) const MIN_ARENA_SIZE: Size = Size {
    width: 4,
    height: 4,
};

/// Largest playing field that fits in [`DISPLAY_SIZE`] along with its border,
/// the status bar, and the help line
pub(crate) const MAX_ARENA_SIZE: Size = Size {
    width: DISPLAY_SIZE.width - 2,
    height: DISPLAY_SIZE.height - 4,
};

/// Number of frames a spark effect stays on screen
pub(crate) const SPARK_LIFETIME: u8 = 8;

/// Number of frames the playing field jitters after the snake eats
pub(crate) const SHAKE_FRAMES: u8 = 6;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for body segments travelling up or down
pub(crate) const SNAKE_BODY_VERTICAL_SYMBOL: char = '┃';

/// Glyph for body segments travelling left or right
pub(crate) const SNAKE_BODY_HORIZONTAL_SYMBOL: char = '━';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for sparks thrown off when food is eaten
pub(crate) const SPARK_SYMBOL: char = '✦';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for sparks
pub(crate) const SPARK_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
