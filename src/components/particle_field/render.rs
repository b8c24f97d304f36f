//! Canvas rendering for the particle field.
//!
//! One frame is: clear, draw connecting lines between all close pairs, then
//! advance and draw each particle. The pair pass is O(n²) over the fixed
//! particle count (at most 3160 pairs for the default field).

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;

/// Draw one frame and advance the simulation.
pub fn render_frame(field: &mut ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());
	draw_links(field, ctx);
	field.step();
	draw_particles(field, ctx);
}

fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(field.style.link_width);

	let particles = &field.particles;
	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			let (dx, dy) = (particles[i].x - particles[j].x, particles[i].y - particles[j].y);
			let dist = (dx * dx + dy * dy).sqrt();
			let Some(alpha) = field.link_alpha(dist) else {
				continue;
			};

			ctx.begin_path();
			ctx.move_to(particles[i].x, particles[i].y);
			ctx.line_to(particles[j].x, particles[j].y);
			ctx.set_stroke_style_str(&field.style.link_color.to_css(alpha));
			ctx.stroke();
		}
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&field.style.palette[p.color].to_css(p.alpha));
		ctx.fill();
	}
}
