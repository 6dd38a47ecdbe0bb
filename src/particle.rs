// Simple particle struct to keep track of individual position, velocity, and
// the visual attributes fixed at creation

use crate::color::Color;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 4.0;
    pub const MIN_OPACITY: f64 = 0.2;
    pub const MAX_OPACITY: f64 = 0.7;
    pub const MIN_HUE: f64 = 180.0;
    pub const MAX_HUE: f64 = 240.0;

    pub fn new(pos: [f64; 2], vel: [f64; 2], size: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            opacity,
            color,
        }
    }

    // Uniform position over the surface, velocity components in [-max_speed, max_speed]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, max_speed: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let size = rng.gen::<f64>() * (Particle::MAX_SIZE - Particle::MIN_SIZE) + Particle::MIN_SIZE;
        let opacity = rng.gen::<f64>() * (Particle::MAX_OPACITY - Particle::MIN_OPACITY)
            + Particle::MIN_OPACITY;
        let color = Color::random_in_band(rng, Particle::MIN_HUE, Particle::MAX_HUE);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], size, opacity, color)
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particle_attributes_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, 800.0, 600.0, 0.25);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            assert!(p.vel[0].abs() <= 0.25 && p.vel[1].abs() <= 0.25);
            assert!(p.size >= 1.0 && p.size <= 4.0);
            assert!(p.opacity >= 0.2 && p.opacity <= 0.7);
            assert!(p.color.hue >= 180.0 && p.color.hue < 240.0);
        }
    }

    #[test]
    fn speed_is_velocity_length() {
        let c = Color::from_hue(200.0);
        let p = Particle::new([0.0, 0.0], [3.0, 4.0], 1.0, 0.5, c);
        assert!((p.speed() - 5.0).abs() < 1e-12);
    }
}
