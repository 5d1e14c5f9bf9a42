use nalgebra::{Vector2, Vector3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub(crate) position: Vector2<i32>,
    pub(crate) speed: Vector2<i32>,
    pub(crate) direction: Vector2<i32>,
    pub(crate) size: Vector2<i32>,
    pub(crate) color: Vector3<u8>,
}

impl Ball {
    pub fn new<R: Rng + ?Sized>(
        position: Vector2<i32>,
        speed: Vector2<i32>,
        size: Vector2<i32>,
        rng: &mut R,
    ) -> Self {
        Ball {
            position,
            speed,
            direction: Vector2::new(1, 1),
            size,
            color: random_color(rng),
        }
    }

    pub fn position(&self) -> Vector2<i32> {
        self.position
    }

    pub fn speed(&self) -> Vector2<i32> {
        self.speed
    }

    pub fn direction(&self) -> Vector2<i32> {
        self.direction
    }

    pub fn size(&self) -> Vector2<i32> {
        self.size
    }

    pub fn color(&self) -> Vector3<u8> {
        self.color
    }

    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.color = random_color(rng);
    }
}

/// Red, green and blue drawn independently and uniformly from [0, 256).
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Vector3<u8> {
    let r = rng.gen::<u8>();
    let g = rng.gen::<u8>();
    let b = rng.gen::<u8>();
    Vector3::new(r, g, b)
}
