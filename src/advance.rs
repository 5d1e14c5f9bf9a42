use legion::*;
use rand::Rng;
use rand_pcg::Pcg64;

use crate::{ball::Ball, bounds::Bounds};

#[system(for_each)]
pub fn advance_balls(ball: &mut Ball, #[resource] bounds: &Bounds, #[resource] rng: &mut Pcg64) {
    advance_single_ball(ball, bounds, rng);
}

// No clamping: a ball faster than its distance to an edge overshoots it.
pub fn advance_single_ball<R: Rng + ?Sized>(ball: &mut Ball, bounds: &Bounds, rng: &mut R) {
    let extent = bounds.extent();
    for axis in 0..2 {
        if ball.position[axis] + ball.size[axis] > extent[axis] {
            ball.direction[axis] = -1;
            ball.recolor(rng);
        } else if ball.position[axis] < 0 {
            ball.direction[axis] = 1;
            ball.recolor(rng);
        }
    }
    ball.position += ball.speed.component_mul(&ball.direction);
}

impl Ball {
    pub fn advance<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) {
        advance_single_ball(self, bounds, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::random_color;
    use nalgebra::Vector2;
    use rand::{RngCore, SeedableRng};

    fn ball_at(x: i32, y: i32, speed: i32, size: i32, rng: &mut Pcg64) -> Ball {
        Ball::new(
            Vector2::new(x, y),
            Vector2::new(speed, speed),
            Vector2::new(size, size),
            rng,
        )
    }

    #[test]
    fn bounces_off_right_edge() {
        let mut rng = Pcg64::seed_from_u64(5);
        let bounds = Bounds::new(100, 100);
        let mut ball = ball_at(95, 50, 5, 10, &mut rng);
        let mut expected_rng = rng.clone();

        ball.advance(&bounds, &mut rng);

        assert_eq!(ball.direction(), Vector2::new(-1, 1));
        assert_eq!(ball.position(), Vector2::new(90, 55));
        assert_eq!(ball.color(), random_color(&mut expected_rng));
    }

    #[test]
    fn touching_an_edge_does_not_bounce() {
        let bounds = Bounds::new(100, 100);
        for &(x, y, moved) in [(90, 0, (93, 3)), (0, 90, (3, 93))].iter() {
            let mut rng = Pcg64::seed_from_u64(47);
            let mut ball = ball_at(x, y, 3, 10, &mut rng);
            let color = ball.color();
            let mut untouched = rng.clone();

            ball.advance(&bounds, &mut rng);

            assert_eq!(ball.direction(), Vector2::new(1, 1));
            assert_eq!(ball.color(), color);
            assert_eq!(ball.position(), Vector2::new(moved.0, moved.1));
            assert_eq!(rng.next_u64(), untouched.next_u64());
        }
    }

    #[test]
    fn translates_without_recolor_inside_bounds() {
        let mut rng = Pcg64::seed_from_u64(11);
        let bounds = Bounds::new(200, 150);
        let mut ball = ball_at(20, 30, 3, 8, &mut rng);
        let color = ball.color();
        let mut untouched = rng.clone();

        for step in 1..=10 {
            ball.advance(&bounds, &mut rng);
            assert_eq!(ball.position(), Vector2::new(20 + 3 * step, 30 + 3 * step));
            assert_eq!(ball.color(), color);
        }
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn bounces_off_left_and_top_edges() {
        let mut rng = Pcg64::seed_from_u64(17);
        let bounds = Bounds::new(50, 50);
        let mut ball = ball_at(-2, -1, 4, 5, &mut rng);
        ball.direction = Vector2::new(-1, -1);

        ball.advance(&bounds, &mut rng);

        assert_eq!(ball.direction(), Vector2::new(1, 1));
        assert_eq!(ball.position(), Vector2::new(2, 3));
    }

    #[test]
    fn corner_hit_flips_both_axes_and_recolors_twice() {
        let mut rng = Pcg64::seed_from_u64(23);
        let bounds = Bounds::new(40, 30);
        let mut ball = ball_at(35, -3, 2, 10, &mut rng);
        ball.direction = Vector2::new(1, -1);
        let mut expected_rng = rng.clone();
        random_color(&mut expected_rng);
        let second = random_color(&mut expected_rng);

        ball.advance(&bounds, &mut rng);

        assert_eq!(ball.direction(), Vector2::new(-1, 1));
        assert_eq!(ball.color(), second);
        assert_eq!(ball.position(), Vector2::new(33, -1));
    }

    #[test]
    fn speed_and_size_never_change() {
        let mut rng = Pcg64::seed_from_u64(31);
        let bounds = Bounds::new(64, 48);
        let mut ball = Ball::new(
            Vector2::new(10, 20),
            Vector2::new(7, 3),
            Vector2::new(9, 4),
            &mut rng,
        );
        for _ in 0..1_000 {
            ball.advance(&bounds, &mut rng);
            assert_eq!(ball.speed(), Vector2::new(7, 3));
            assert_eq!(ball.size(), Vector2::new(9, 4));
            assert!(ball.direction().x.abs() == 1 && ball.direction().y.abs() == 1);
        }
    }

    #[test]
    fn fast_ball_overshoots_without_clamping() {
        let mut rng = Pcg64::seed_from_u64(41);
        let bounds = Bounds::new(10, 100);
        let mut ball = ball_at(0, 0, 30, 2, &mut rng);

        ball.advance(&bounds, &mut rng);
        assert_eq!(ball.position().x, 30);

        ball.advance(&bounds, &mut rng);
        assert_eq!(ball.direction().x, -1);
        assert_eq!(ball.position().x, 0);
    }

    #[test]
    fn shrinking_bounds_apply_on_next_tick() {
        let mut rng = Pcg64::seed_from_u64(43);
        let mut ball = ball_at(50, 10, 1, 10, &mut rng);

        ball.advance(&Bounds::new(200, 200), &mut rng);
        assert_eq!(ball.direction(), Vector2::new(1, 1));

        ball.advance(&Bounds::new(40, 200), &mut rng);
        assert_eq!(ball.direction(), Vector2::new(-1, 1));
        assert_eq!(ball.position(), Vector2::new(50, 12));
    }
}
