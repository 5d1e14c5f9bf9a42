use crate::{
    ball::Ball,
    bounds::Bounds,
    config::{ConfigError, UniverseConfig},
};
use legion::World;
use nalgebra::Vector2;
use rand::Rng;

pub fn init_world<R: Rng + ?Sized>(
    world: &mut World,
    bounds: &Bounds,
    config: &UniverseConfig,
    rng: &mut R,
) -> Result<(), ConfigError> {
    let balls = generate_balls(bounds, config, rng)?;
    let balls: Vec<(Ball,)> = balls.into_iter().map(|ball| (ball,)).collect();
    world.extend(balls);
    Ok(())
}

/// Speeds below `min_speed` are raised to it, not redrawn.
pub fn generate_balls<R: Rng + ?Sized>(
    bounds: &Bounds,
    config: &UniverseConfig,
    rng: &mut R,
) -> Result<Vec<Ball>, ConfigError> {
    config.validate()?;
    if bounds.is_empty() {
        return Err(ConfigError::EmptyBounds {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let mut balls = Vec::with_capacity(config.balls_count);
    while balls.len() < config.balls_count {
        let position = Vector2::new(
            rng.gen_range(1..=bounds.width),
            rng.gen_range(1..=bounds.height),
        );
        let speed = Vector2::new(
            rng.gen_range(1..=config.max_speed).max(config.min_speed),
            rng.gen_range(1..=config.max_speed).max(config.min_speed),
        );
        let size = Vector2::new(
            rng.gen_range(1..=config.ball_width),
            rng.gen_range(1..=config.ball_height),
        );
        balls.push(Ball::new(position, speed, size, rng));
    }
    Ok(balls)
}
