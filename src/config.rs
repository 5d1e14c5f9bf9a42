use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max speed must be positive, got {0}")]
    MaxSpeed(i32),
    #[error("ball width must be positive, got {0}")]
    BallWidth(i32),
    #[error("ball height must be positive, got {0}")]
    BallHeight(i32),
    #[error("balls count must be positive, got {0}")]
    BallsCount(usize),
    #[error("timer delay must be non-zero")]
    TimerDelay,
    #[error("cannot place balls in an empty {width}x{height} area")]
    EmptyBounds { width: i32, height: i32 },
}

/// Compiled-in parameters of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniverseConfig {
    pub timer_delay: Duration,
    pub max_speed: i32,
    /// Drawn speeds below this are raised to it.
    pub min_speed: i32,
    pub balls_count: usize,
    pub ball_width: i32,
    pub ball_height: i32,
    /// Fixed seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        UniverseConfig {
            timer_delay: Duration::from_millis(7),
            max_speed: 20,
            min_speed: 5,
            balls_count: 1000,
            ball_width: 10,
            ball_height: 10,
            seed: None,
        }
    }
}

impl UniverseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_speed <= 0 {
            return Err(ConfigError::MaxSpeed(self.max_speed));
        }
        if self.ball_width <= 0 {
            return Err(ConfigError::BallWidth(self.ball_width));
        }
        if self.ball_height <= 0 {
            return Err(ConfigError::BallHeight(self.ball_height));
        }
        if self.balls_count == 0 {
            return Err(ConfigError::BallsCount(self.balls_count));
        }
        if self.timer_delay.is_zero() {
            return Err(ConfigError::TimerDelay);
        }
        Ok(())
    }
}
