// The ambient particle field: a fixed set of particles drifting over the
// surface, pulled gently toward the mouse and joined by faint lines when close.

use crate::draw::DrawCommand;
use crate::input::InputSnapshot;
use crate::particle::Particle;
use rand::Rng;
use vecmath::Vector2;

/// Tuning for the ambient field. `Default` reproduces the portfolio page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub initial_speed: f64,
    pub interaction_radius: f64,
    pub attraction: f64,
    pub link_distance: f64,
    pub link_alpha: f64,
    pub link_width: f64,
    /// Velocity cap applied after each update. `None` leaves growth unbounded.
    pub max_speed: Option<f64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: ParticleField::PARTICLE_COUNT,
            initial_speed: ParticleField::INITIAL_SPEED,
            interaction_radius: ParticleField::INTERACTION_RADIUS,
            attraction: ParticleField::ATTRACTION,
            link_distance: ParticleField::LINK_DISTANCE,
            link_alpha: ParticleField::LINK_ALPHA,
            link_width: 1.0,
            max_speed: None,
        }
    }
}

/// A proximity pair between two particles, `a < b`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    /// 0 at the link distance, approaching 1 as the pair converges.
    pub strength: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const PARTICLE_COUNT: usize = 50;
    pub const INITIAL_SPEED: f64 = 0.25;
    pub const INTERACTION_RADIUS: f64 = 100.0;
    pub const ATTRACTION: f64 = 0.001;
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const LINK_ALPHA: f64 = 0.2;

    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> ParticleField {
        ParticleField::with_config(width, height, FieldConfig::default(), rng)
    }

    pub fn with_config<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, width, height, config.initial_speed));
        }
        ParticleField::from_particles(width, height, config, particles)
    }

    pub fn from_particles(
        width: f64,
        height: f64,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // Particles keep their positions, even ones now outside the new bounds
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_max_speed(&mut self, max_speed: Option<f64>) {
        self.config.max_speed = max_speed;
    }

    /// Advances every particle one frame, then returns the frame's drawing.
    pub fn step(&mut self, input: &InputSnapshot) -> Vec<DrawCommand> {
        self.update(input);
        self.render()
    }

    pub fn update(&mut self, input: &InputSnapshot) {
        let width = self.width;
        let height = self.height;
        let config = self.config;
        for particle in &mut self.particles {
            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
            apply_attraction(particle, input.mouse, &config);
            reflect(particle, width, height);
            if let Some(max_speed) = config.max_speed {
                clamp_speed(particle, max_speed);
            }
        }
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(1 + self.particles.len() * 2);
        commands.push(DrawCommand::Clear {
            width: self.width,
            height: self.height,
        });
        for p in &self.particles {
            commands.push(DrawCommand::Circle {
                center: p.pos,
                radius: p.size,
                color: p.color,
                alpha: p.opacity,
            });
        }
        for edge in self.edges() {
            let from = &self.particles[edge.a];
            let to = &self.particles[edge.b];
            commands.push(DrawCommand::Line {
                from: from.pos,
                to: to.pos,
                color: from.color,
                alpha: edge.strength * self.config.link_alpha,
                width: self.config.link_width,
            });
        }
        commands
    }

    /// Every unordered pair closer than the link distance.
    pub fn edges(&self) -> Vec<Edge> {
        let link_distance = self.config.link_distance;
        let mut edges = Vec::new();
        for (i, p) in self.particles.iter().enumerate() {
            for (j, other) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(p.pos, other.pos));
                if distance < link_distance {
                    edges.push(Edge {
                        a: i,
                        b: j,
                        distance,
                        strength: (link_distance - distance) / link_distance,
                    });
                }
            }
        }
        edges
    }
}

fn apply_attraction(particle: &mut Particle, mouse: Vector2<f64>, config: &FieldConfig) {
    let delta = vecmath::vec2_sub(mouse, particle.pos);
    let distance = vecmath::vec2_len(delta);
    if distance < config.interaction_radius {
        let force = (config.interaction_radius - distance) / config.interaction_radius;
        let pull = vecmath::vec2_scale(delta, force * config.attraction);
        particle.vel = vecmath::vec2_add(particle.vel, pull);
    }
}

// A component is only inverted while it still points away from the surface,
// so a particle left outside (e.g. after a resize) turns around once.
fn reflect(particle: &mut Particle, width: f64, height: f64) {
    let bounds = [width, height];
    for axis in 0..2 {
        let pos = particle.pos[axis];
        let vel = particle.vel[axis];
        if (pos < 0.0 && vel < 0.0) || (pos > bounds[axis] && vel > 0.0) {
            particle.vel[axis] = -vel;
        }
    }
}

fn clamp_speed(particle: &mut Particle, max_speed: f64) {
    let speed = particle.speed();
    if speed > max_speed && speed > 0.0 {
        particle.vel = vecmath::vec2_scale(particle.vel, max_speed / speed);
    }
}
