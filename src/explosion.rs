// One-shot firework burst from the surface center. Sparks fall under gravity,
// fade out as their life runs down, and the burst ends once all are gone.

use crate::color::Color;
use crate::draw::DrawCommand;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExplosionConfig {
    pub spark_count: usize,
    pub max_speed: f64,
    pub gravity: f64,
    pub min_decay: f64,
    pub max_decay: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        ExplosionConfig {
            spark_count: 30,
            max_speed: 10.0,
            gravity: 0.5,
            min_decay: 0.01,
            max_decay: 0.03,
            min_size: 2.0,
            max_size: 7.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spark {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub color: Color,
    pub life: f64,
    pub decay: f64,
}

pub struct Explosion {
    gravity: f64,
    sparks: Vec<Spark>,
}

impl Explosion {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Explosion {
        Explosion::with_config(width, height, ExplosionConfig::default(), rng)
    }

    pub fn with_config<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: ExplosionConfig,
        rng: &mut R,
    ) -> Explosion {
        let center = [width / 2.0, height / 2.0];
        let mut sparks = Vec::with_capacity(config.spark_count);
        for _ in 0..config.spark_count {
            let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
            let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
            let size = rng.gen::<f64>() * (config.max_size - config.min_size) + config.min_size;
            let color = Color::random_in_band(rng, 0.0, 360.0);
            let decay = rng.gen::<f64>() * (config.max_decay - config.min_decay) + config.min_decay;
            sparks.push(Spark {
                pos: center,
                vel: [vel_x, vel_y],
                size,
                color,
                life: 1.0,
                decay,
            });
        }
        Explosion {
            gravity: config.gravity,
            sparks,
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn is_finished(&self) -> bool {
        self.sparks.is_empty()
    }

    /// Advances the burst one frame and draws the surviving sparks, faded by life.
    pub fn step(&mut self) -> Vec<DrawCommand> {
        let gravity = self.gravity;
        for spark in &mut self.sparks {
            spark.pos = vecmath::vec2_add(spark.pos, spark.vel);
            spark.vel[1] += gravity;
            spark.life -= spark.decay;
        }
        self.sparks.retain(|spark| spark.life > 0.0);

        self.sparks
            .iter()
            .map(|spark| DrawCommand::Circle {
                center: spark.pos,
                radius: spark.size,
                color: spark.color,
                alpha: spark.life,
            })
            .collect()
    }
}
