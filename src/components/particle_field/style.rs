//! Visual styling for the particle field.

/// RGB color; alpha is supplied at draw time so one palette entry can be
/// rendered at many opacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Format as a CSS `rgba()` string with the given alpha.
	pub fn to_css(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Particle field configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	/// Number of particles in the field.
	pub count: usize,
	/// Minimum particle radius in pixels.
	pub radius_min: f64,
	/// Maximum particle radius in pixels.
	pub radius_max: f64,
	/// Maximum magnitude of each velocity component, in pixels per frame.
	pub speed: f64,
	/// Minimum particle opacity.
	pub alpha_min: f64,
	/// Maximum particle opacity.
	pub alpha_max: f64,
	/// Colors particles are drawn with, picked uniformly at creation.
	pub palette: Vec<Color>,
	/// Distance below which two particles are connected by a line.
	pub link_distance: f64,
	/// Line opacity at distance zero; fades linearly to zero at
	/// `link_distance`.
	pub link_alpha: f64,
	/// Connecting line stroke width in pixels.
	pub link_width: f64,
	/// Connecting line color.
	pub link_color: Color,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 80,
			radius_min: 0.3,
			radius_max: 1.8,
			speed: 0.125,
			alpha_min: 0.1,
			alpha_max: 0.5,
			palette: vec![
				Color::rgb(99, 179, 237),  // Sky blue
				Color::rgb(159, 122, 234), // Violet
				Color::rgb(79, 209, 197),  // Teal
			],
			link_distance: 130.0,
			link_alpha: 0.06,
			link_width: 0.5,
			link_color: Color::rgb(99, 179, 237),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn color_formats_with_alpha() {
		assert_eq!(
			Color::rgb(99, 179, 237).to_css(0.5),
			"rgba(99, 179, 237, 0.5)"
		);
		assert_eq!(Color::rgb(0, 0, 0).to_css(1.0), "rgba(0, 0, 0, 1)");
	}

	#[test]
	fn default_style_matches_page_design() {
		let style = FieldStyle::default();
		assert_eq!(style.count, 80);
		assert_eq!(style.palette.len(), 3);
		assert_eq!(style.link_distance, 130.0);
		assert_eq!(style.link_color, style.palette[0]);
	}
}
