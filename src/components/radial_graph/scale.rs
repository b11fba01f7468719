use super::types::WeightRange;

/// Linear map from edge weights onto a line-width range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: Option<WeightRange>,
	range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: Option<WeightRange>, range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// Mapped value for `weight`. A single distinct weight (or no edges)
	/// maps to the middle of the range.
	pub fn apply(&self, weight: i64) -> f64 {
		let (lo, hi) = self.range;
		match self.domain {
			Some(WeightRange { min, max }) if max != min => {
				(weight - min) as f64 * (hi - lo) / (max - min) as f64 + lo
			}
			_ => (lo + hi) / 2.0,
		}
	}

	/// Integer stroke width, never thinner than one pixel.
	pub fn line_width(&self, weight: i64) -> f64 {
		self.apply(weight).trunc().max(1.0)
	}
}
