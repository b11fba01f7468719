use crate::error::LoadError;

/// An undirected weighted edge between two 1-based vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	pub weight: i64,
	pub start: usize,
	pub end: usize,
}

impl Edge {
	pub fn touches(&self, index: usize) -> bool {
		self.start == index || self.end == index
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightRange {
	pub min: i64,
	pub max: i64,
}

impl WeightRange {
	fn include(range: Option<Self>, weight: i64) -> Self {
		match range {
			Some(r) => Self {
				min: r.min.min(weight),
				max: r.max.max(weight),
			},
			None => Self {
				min: weight,
				max: weight,
			},
		}
	}
}

/// A graph loaded from the `V E` + `start end weight` text format.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	vertices: usize,
	edges: Vec<Edge>,
	weights: Option<WeightRange>,
}

impl GraphData {
	pub fn parse(source: &str) -> Result<Self, LoadError> {
		let mut lines = source.lines().enumerate().map(|(i, l)| (i + 1, l));

		let (line, header) = lines
			.by_ref()
			.find(|(_, l)| !l.trim().is_empty())
			.ok_or(LoadError::MissingHeader)?;
		let counts = parse_ints::<2>(header).and_then(|[v, e]| {
			Some((usize::try_from(v).ok()?, usize::try_from(e).ok()?))
		});
		let Some((vertices, expected)) = counts else {
			return Err(LoadError::MalformedHeader {
				line,
				text: header.into(),
			});
		};

		// the declared count is untrusted, so no preallocation
		let mut edges = Vec::new();
		let mut weights = None;
		for (line, text) in lines.by_ref() {
			if edges.len() == expected {
				if text.trim().is_empty() {
					continue;
				}
				return Err(LoadError::TrailingLine {
					line,
					text: text.into(),
					expected,
				});
			}

			let Some([start, end, weight]) = parse_ints::<3>(text) else {
				return Err(LoadError::MalformedEdge {
					line,
					text: text.into(),
				});
			};
			let mut endpoints = [0; 2];
			for (slot, index) in endpoints.iter_mut().zip([start, end]) {
				*slot = vertex_index(index, vertices).ok_or_else(|| {
					LoadError::VertexOutOfRange {
						line,
						text: text.into(),
						index,
						vertices,
					}
				})?;
			}
			let [start, end] = endpoints;

			weights = Some(WeightRange::include(weights, weight));
			edges.push(Edge { weight, start, end });
		}

		if edges.len() < expected {
			return Err(LoadError::MissingEdges {
				expected,
				found: edges.len(),
			});
		}

		Ok(Self {
			vertices,
			edges,
			weights,
		})
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// `None` when the graph has no edges.
	pub fn weight_range(&self) -> Option<WeightRange> {
		self.weights
	}
}

/// `index` as a position in `1..=vertices`, without truncating on narrow `usize`.
fn vertex_index(index: i64, vertices: usize) -> Option<usize> {
	usize::try_from(index)
		.ok()
		.filter(|i| (1..=vertices).contains(i))
}

/// Exactly `N` whitespace separated integers, or nothing.
fn parse_ints<const N: usize>(line: &str) -> Option<[i64; N]> {
	let mut out = [0; N];
	let mut tokens = line.split_whitespace();
	for slot in out.iter_mut() {
		*slot = tokens.next()?.parse().ok()?;
	}
	tokens.next().is_none().then_some(out)
}
