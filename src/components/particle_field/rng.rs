//! Seedable pseudo-random number generator (xorshift64).
//!
//! Particle generation goes through this instead of `Math.random()` so the
//! field is reproducible in tests. Not suitable for anything but visuals.

/// Seedable xorshift64 generator.
#[derive(Clone, Debug)]
pub struct Rng {
	state: u64,
}

impl Rng {
	/// Create a generator from a seed. A zero seed is remapped, since
	/// xorshift has a fixed point at zero.
	pub fn new(seed: u64) -> Self {
		Self {
			state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
		}
	}

	fn next_u64(&mut self) -> u64 {
		let mut x = self.state;
		x ^= x << 13;
		x ^= x >> 7;
		x ^= x << 17;
		self.state = x;
		x
	}

	/// Uniform value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform value in `[lo, hi)`.
	pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}

	/// Uniform index in `0..len`. `len` must be nonzero.
	pub fn index(&mut self, len: usize) -> usize {
		debug_assert!(len > 0);
		(self.next_u64() % len as u64) as usize
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deterministic_for_equal_seeds() {
		let mut a = Rng::new(42);
		let mut b = Rng::new(42);
		for _ in 0..32 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}

	#[test]
	fn zero_seed_does_not_stick() {
		let mut rng = Rng::new(0);
		assert_ne!(rng.next_f64(), rng.next_f64());
	}

	#[test]
	fn range_stays_in_bounds() {
		let mut rng = Rng::new(7);
		for _ in 0..1000 {
			let v = rng.range(-0.125, 0.125);
			assert!((-0.125..0.125).contains(&v));
			let i = rng.index(3);
			assert!(i < 3);
		}
	}
}
