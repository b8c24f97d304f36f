//! Particle field simulation state.
//!
//! Owns the particle set and viewport bounds. Stepping and link opacity are
//! pure so the animation can be driven a fixed number of frames in tests;
//! drawing lives in [`super::render`].

use super::rng::Rng;
use super::style::FieldStyle;

/// A single drifting point. Plain value; identity is its slot in the field.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Index into the style palette.
	pub color: usize,
	pub alpha: f64,
}

/// The animated background field: a fixed-count particle set bounded by the
/// current viewport dimensions.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub style: FieldStyle,
	width: f64,
	height: f64,
	rng: Rng,
}

impl ParticleField {
	/// Create a field for the given viewport, populated immediately.
	pub fn new(style: FieldStyle, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			style,
			width,
			height,
			rng: Rng::new(seed),
		};
		field.populate();
		field
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Record new viewport dimensions. Callers regenerate the particle set
	/// afterwards with [`populate`](Self::populate); particles do not carry
	/// over across a resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Discard the current particle set and generate a fresh one spread
	/// uniformly over the current bounds.
	pub fn populate(&mut self) {
		self.particles.clear();
		for _ in 0..self.style.count {
			let particle = Particle {
				x: self.rng.range(0.0, self.width),
				y: self.rng.range(0.0, self.height),
				vx: self.rng.range(-self.style.speed, self.style.speed),
				vy: self.rng.range(-self.style.speed, self.style.speed),
				radius: self.rng.range(self.style.radius_min, self.style.radius_max),
				color: self.rng.index(self.style.palette.len()),
				alpha: self.rng.range(self.style.alpha_min, self.style.alpha_max),
			};
			self.particles.push(particle);
		}
	}

	/// Advance every particle one frame, reflecting off the viewport edges.
	///
	/// Reflection flips the velocity component on the offending axis only;
	/// a particle may overshoot the boundary by at most one frame's velocity
	/// before heading back in.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Opacity of the line connecting two particles at the given distance,
	/// or `None` when they are too far apart to link.
	pub fn link_alpha(&self, dist: f64) -> Option<f64> {
		(dist < self.style.link_distance)
			.then(|| self.style.link_alpha * (1.0 - dist / self.style.link_distance))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64) -> ParticleField {
		ParticleField::new(FieldStyle::default(), width, height, 42)
	}

	#[test]
	fn populate_generates_exact_count_within_ranges() {
		let field = field(800.0, 600.0);
		assert_eq!(field.particles.len(), 80);
		for p in &field.particles {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!((0.3..=1.8).contains(&p.radius));
			assert!((-0.125..=0.125).contains(&p.vx));
			assert!((-0.125..=0.125).contains(&p.vy));
			assert!((0.1..=0.5).contains(&p.alpha));
			assert!(p.color < 3);
		}
	}

	#[test]
	fn same_seed_generates_same_field() {
		let a = field(800.0, 600.0);
		let b = field(800.0, 600.0);
		for (pa, pb) in a.particles.iter().zip(&b.particles) {
			assert_eq!(pa.x, pb.x);
			assert_eq!(pa.y, pb.y);
			assert_eq!(pa.vx, pb.vx);
			assert_eq!(pa.color, pb.color);
		}
	}

	#[test]
	fn reflection_flips_only_the_exiting_axis() {
		let mut f = field(100.0, 100.0);
		f.particles = vec![Particle {
			x: 99.95,
			y: 50.0,
			vx: 0.1,
			vy: 0.05,
			radius: 1.0,
			color: 0,
			alpha: 0.3,
		}];
		f.step();
		let p = &f.particles[0];
		assert_eq!(p.vx, -0.1);
		assert_eq!(p.vy, 0.05);

		// Symmetric on y at the low edge.
		f.particles = vec![Particle {
			x: 50.0,
			y: 0.02,
			vx: 0.05,
			vy: -0.1,
			radius: 1.0,
			color: 0,
			alpha: 0.3,
		}];
		f.step();
		let p = &f.particles[0];
		assert_eq!(p.vx, 0.05);
		assert_eq!(p.vy, 0.1);
	}

	#[test]
	fn thousand_steps_stay_bounded() {
		let mut f = field(800.0, 600.0);
		for _ in 0..1000 {
			f.step();
		}
		assert_eq!(f.particles.len(), 80);
		let tol = f.style.speed;
		for p in &f.particles {
			assert!(p.x >= -tol && p.x <= 800.0 + tol, "x out of bounds: {}", p.x);
			assert!(p.y >= -tol && p.y <= 600.0 + tol, "y out of bounds: {}", p.y);
		}
	}

	#[test]
	fn resize_and_populate_discards_stale_positions() {
		let mut f = field(1920.0, 1080.0);
		f.resize(400.0, 300.0);
		f.populate();
		assert_eq!(f.particles.len(), 80);
		for p in &f.particles {
			assert!((0.0..=400.0).contains(&p.x));
			assert!((0.0..=300.0).contains(&p.y));
		}
	}

	#[test]
	fn link_alpha_fades_linearly_with_distance() {
		let f = field(800.0, 600.0);
		assert_eq!(f.link_alpha(0.0), Some(0.06));
		assert_eq!(f.link_alpha(130.0), None);
		assert_eq!(f.link_alpha(200.0), None);

		// Two particles at (0,0) and (100,0): 0.06 * (1 - 100/130).
		let alpha = f.link_alpha(100.0).unwrap();
		assert!((alpha - 0.06 * (1.0 - 100.0 / 130.0)).abs() < 1e-12);
		assert!((alpha - 0.0138).abs() < 1e-3);

		// Approaching the threshold from below fades to zero.
		let near = f.link_alpha(129.999).unwrap();
		assert!(near > 0.0 && near < 1e-6);
	}
}
