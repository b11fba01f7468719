use std::f64::consts::PI;

/// Interior angle of a regular polygon with `vertices` corners, used as the
/// angular step between consecutive vertices. Two or fewer vertices step by π.
pub fn interior_angle(vertices: usize) -> f64 {
	if vertices <= 2 {
		return PI;
	}
	let v = vertices as f64;
	PI - (v - 2.0) * PI / v
}

/// `min(width / divisor, height / divisor)` with integer pixel division.
pub fn scaled_extent(width: u32, height: u32, divisor: u32) -> f64 {
	let divisor = divisor.max(1);
	(width / divisor).min(height / divisor) as f64
}

/// Positions relative to the circle centre. The first vertex sits at
/// `(radius, 0)`, each following one advances by `gamma`.
pub fn circular_positions(vertices: usize, radius: f64, gamma: f64) -> Vec<(f64, f64)> {
	let mut angle = 0.0;
	let mut points = Vec::with_capacity(vertices);
	for i in 0..vertices {
		if i == 0 {
			points.push((radius, 0.0));
			continue;
		}
		angle += gamma;
		points.push((radius * angle.cos(), radius * angle.sin()));
	}
	points
}

/// Window centre, integer-divided like the vertex offsets it is added to.
pub fn center(width: u32, height: u32) -> (f64, f64) {
	((width / 2) as f64, (height / 2) as f64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	pub radius: f64,
	pub vertex_radius: f64,
	pub gamma: f64,
	pub size: (u32, u32),
}

impl Layout {
	pub fn new(vertices: usize) -> Self {
		Self {
			radius: 0.0,
			vertex_radius: 0.0,
			gamma: interior_angle(vertices),
			size: (0, 0),
		}
	}

	pub fn resize(&mut self, width: u32, height: u32, radius_divisor: u32, vertex_divisor: u32) {
		self.size = (width, height);
		self.radius = scaled_extent(width, height, radius_divisor);
		self.vertex_radius = scaled_extent(width, height, vertex_divisor);
	}

	pub fn to_screen(&self, base: (f64, f64)) -> (f64, f64) {
		let (cx, cy) = center(self.size.0, self.size.1);
		(base.0 + cx, base.1 + cy)
	}
}
