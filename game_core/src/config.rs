use std::fmt;
use std::str::FromStr;

use glam::IVec2;

use crate::{BallShape, GameMap, Params};

/// The two rule variants the game ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ruleset {
    /// Rectangular ball served immediately from the top-left corner
    Classic,
    /// Round ball served from the center, clamped paddle
    #[default]
    Refined,
}

impl Ruleset {
    pub fn name(&self) -> &'static str {
        match self {
            Ruleset::Classic => "classic",
            Ruleset::Refined => "refined",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a ruleset name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRulesetError(String);

impl fmt::Display for ParseRulesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown ruleset {:?} (expected \"classic\" or \"refined\")",
            self.0
        )
    }
}

impl std::error::Error for ParseRulesetError {}

impl FromStr for Ruleset {
    type Err = ParseRulesetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Ruleset::Classic),
            "refined" => Ok(Ruleset::Refined),
            _ => Err(ParseRulesetError(s.to_string())),
        }
    }
}

/// How the ball's vertical position is tested against the paddle span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanCheck {
    /// `top <= y <= bottom`
    Inclusive,
    /// `top < y < bottom`
    Exclusive,
}

impl SpanCheck {
    pub fn contains(&self, top: i32, bottom: i32, y: i32) -> bool {
        match self {
            SpanCheck::Inclusive => y >= top && y <= bottom,
            SpanCheck::Exclusive => y > top && y < bottom,
        }
    }
}

/// When the ball first gets its velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Velocity is set at spawn
    Immediate,
    /// Velocity is set on the first tick that finds it at rest
    Lazy,
}

/// Line the ball has to cross to count as a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissLine {
    /// Ball's left edge reached the right screen edge
    ScreenEdge,
    /// Ball's left edge passed the paddle's right edge
    PaddleEdge,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub ruleset: Ruleset,
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_start: IVec2,
    pub paddle_size: IVec2,
    pub paddle_speed: i32,
    pub clamp_paddle: bool,
    pub ball_shape: BallShape,
    pub ball_speed: i32,
    pub launch: Launch,
    pub span_check: SpanCheck,
    pub miss_line: MissLine,
}

impl Default for Config {
    fn default() -> Self {
        Self::refined()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        match ruleset {
            Ruleset::Classic => Self::classic(),
            Ruleset::Refined => Self::refined(),
        }
    }

    pub fn classic() -> Self {
        Self {
            ruleset: Ruleset::Classic,
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_start: IVec2::new(Params::PADDLE_X, Params::PADDLE_Y),
            paddle_size: IVec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle_speed: Params::PADDLE_SPEED,
            clamp_paddle: false,
            ball_shape: BallShape::Rect {
                size: IVec2::splat(Params::BALL_SIZE),
            },
            ball_speed: Params::BALL_SPEED,
            launch: Launch::Immediate,
            span_check: SpanCheck::Inclusive,
            miss_line: MissLine::ScreenEdge,
        }
    }

    pub fn refined() -> Self {
        Self {
            ruleset: Ruleset::Refined,
            clamp_paddle: true,
            ball_shape: BallShape::Circle {
                radius: Params::BALL_RADIUS,
            },
            launch: Launch::Lazy,
            span_check: SpanCheck::Exclusive,
            miss_line: MissLine::PaddleEdge,
            ..Self::classic()
        }
    }

    pub fn map(&self) -> GameMap {
        GameMap::new(self.arena_width, self.arena_height)
    }

    /// Where the ball is spawned and where it returns after a miss
    pub fn ball_start(&self) -> IVec2 {
        match self.ruleset {
            Ruleset::Classic => IVec2::ZERO,
            Ruleset::Refined => self.map().center(),
        }
    }

    /// Fixed diagonal serve velocity
    pub fn serve_velocity(&self) -> IVec2 {
        IVec2::splat(self.ball_speed)
    }

    /// Velocity the ball has at spawn
    pub fn spawn_velocity(&self) -> IVec2 {
        match self.launch {
            Launch::Immediate => self.serve_velocity(),
            Launch::Lazy => IVec2::ZERO,
        }
    }
}
