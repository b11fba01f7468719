use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
	Selected,
	Vertex,
}

impl Tag {
	pub fn as_str(self) -> &'static str {
		match self {
			Tag::Selected => "selected",
			Tag::Vertex => "vertex",
		}
	}
}

/// Entities a scene is made of. Vertices carry their 1-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityId {
	Selection,
	Vertex(usize),
}

impl EntityId {
	pub fn tag(self) -> Tag {
		match self {
			EntityId::Selection => Tag::Selected,
			EntityId::Vertex(_) => Tag::Vertex,
		}
	}
}

/// Tag lookup table, ids kept in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
	by_tag: HashMap<Tag, Vec<EntityId>>,
}

impl Registry {
	pub fn register(&mut self, id: EntityId) {
		self.by_tag.entry(id.tag()).or_default().push(id);
	}

	pub fn lookup(&self, tag: Tag) -> &[EntityId] {
		self.by_tag.get(&tag).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Vertex indices in registration order.
	pub fn vertices(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
		self.lookup(Tag::Vertex).iter().filter_map(|id| match id {
			EntityId::Vertex(index) => Some(*index),
			EntityId::Selection => None,
		})
	}
}
