use crate::{Error, Location, NodeID, Result};
use hashbrown::{HashMap, HashSet};
use log::trace;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
struct Node {
	location: Location,
	neighbors: Vec<NodeID>,
}

/// An undirected Graph of [`Location`]s.
///
/// Locations are stored in the order they were first mentioned and are identified by name.
/// Every edge is stored in both directions, so every Location that appears as a neighbor is
/// also part of the Graph.
///
/// ## Examples
/// ```
/// # use toll_delivery::{Graph, Location};
/// let mut graph = Graph::new();
/// graph.add_edge(Location::village("a"), Location::town("B"));
/// graph.add_edge(Location::village("c"), Location::town("B"));
///
/// let names: Vec<&str> = graph
///     .neighbors(&Location::town("B"))
///     .unwrap()
///     .map(|l| l.name())
///     .collect();
/// assert_eq!(names, ["a", "c"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: slab::Slab<Node>,
	name_map: HashMap<String, NodeID>,
}

impl Graph {
	/// Creates an empty Graph
	pub fn new() -> Graph {
		Graph::default()
	}

	/// The number of Locations in the Graph
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if the Graph has no Locations
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Adds `location` to the Graph if no Location with the same name exists yet.
	///
	/// Returns the ID of the stored Location. If the name was already known, the stored
	/// Location (and its kind) is kept.
	pub fn add_location(&mut self, location: Location) -> NodeID {
		if let Some(&id) = self.name_map.get(location.name()) {
			return id;
		}
		let name = location.name().to_owned();
		let id = self.nodes.insert(Node {
			location,
			neighbors: vec![],
		});
		self.name_map.insert(name, id);
		id
	}

	/// Connects `a` and `b` in both directions, adding either of them if necessary.
	///
	/// Adding the same edge twice stores it twice. A self-loop only adds the Location.
	pub fn add_edge(&mut self, a: Location, b: Location) {
		let a = self.add_location(a);
		let b = self.add_location(b);
		if a == b {
			trace!("ignoring self-loop on {}", self.nodes[a].location);
			return;
		}
		self.nodes[a].neighbors.push(b);
		self.nodes[b].neighbors.push(a);
	}

	/// The neighbors of `location` in the order their edges were added.
	///
	/// Fails with [`Error::NotFound`] if `location` is not part of the Graph.
	pub fn neighbors(&self, location: &Location) -> Result<impl Iterator<Item = &Location> + '_> {
		let id = self.require_id(location)?;
		Ok(self.nodes[id]
			.neighbors
			.iter()
			.map(move |&other| &self.nodes[other].location))
	}

	/// `true` if a Location with the name of `location` is part of the Graph
	pub fn contains(&self, location: &Location) -> bool {
		self.name_map.contains_key(location.name())
	}

	/// The ID of the Location with the given name, if any
	pub fn id_of(&self, name: &str) -> Option<NodeID> {
		self.name_map.get(name).copied()
	}

	/// The stored Location with the given name, if any
	pub fn get(&self, name: &str) -> Option<&Location> {
		self.id_of(name).map(|id| &self.nodes[id].location)
	}

	/// Iterates over all Locations in the order they were added
	pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
		self.nodes.iter().map(|(_, node)| &node.location)
	}

	pub(crate) fn require_id(&self, location: &Location) -> Result<NodeID> {
		self.id_of(location.name())
			.ok_or_else(|| Error::NotFound(location.name().to_owned()))
	}

	/// Breadth-first check whether `to` can be reached from `from`
	pub(crate) fn is_reachable(&self, from: NodeID, to: NodeID) -> bool {
		let mut visited = HashSet::with_capacity(self.nodes.len());
		let mut next = VecDeque::new();
		visited.insert(from);
		next.push_back(from);

		while let Some(current) = next.pop_front() {
			if current == to {
				return true;
			}
			for &other in &self.nodes[current].neighbors {
				if visited.insert(other) {
					next.push_back(other);
				}
			}
		}
		false
	}

	pub(crate) fn neighbor_ids(&self, id: NodeID) -> &[NodeID] {
		&self.nodes[id].neighbors
	}
}

use std::ops::Index;
impl Index<NodeID> for Graph {
	type Output = Location;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Location {
		&self.nodes[index].location
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names<'a>(iter: impl Iterator<Item = &'a Location>) -> Vec<&'a str> {
		iter.map(|l| l.name()).collect()
	}

	#[test]
	fn undirected() {
		let mut graph = Graph::new();
		graph.add_edge(Location::village("a"), Location::town("B"));
		graph.add_edge(Location::town("B"), Location::village("c"));

		assert_eq!(graph.len(), 3);
		assert_eq!(names(graph.neighbors(&Location::village("a")).unwrap()), ["B"]);
		assert_eq!(names(graph.neighbors(&Location::town("B")).unwrap()), ["a", "c"]);
		assert_eq!(names(graph.neighbors(&Location::village("c")).unwrap()), ["B"]);
	}

	#[test]
	fn closed_adjacency() {
		let mut graph = Graph::new();
		graph.add_edge(Location::village("a"), Location::village("b"));
		graph.add_edge(Location::village("c"), Location::village("a"));
		graph.add_edge(Location::town("D"), Location::village("b"));

		for location in graph.locations() {
			for neighbor in graph.neighbors(location).unwrap() {
				assert!(graph.contains(neighbor));
				assert!(graph.neighbors(neighbor).unwrap().any(|n| n == location));
			}
		}
	}

	#[test]
	fn duplicate_edges() {
		let mut graph = Graph::new();
		graph.add_edge(Location::village("a"), Location::village("b"));
		graph.add_edge(Location::village("b"), Location::village("a"));

		assert_eq!(graph.len(), 2);
		assert_eq!(names(graph.neighbors(&Location::village("a")).unwrap()), ["b", "b"]);
		assert_eq!(names(graph.neighbors(&Location::village("b")).unwrap()), ["a", "a"]);
	}

	#[test]
	fn reachable() {
		let mut graph = Graph::new();
		assert!(graph.is_empty());
		graph.add_edge(Location::village("a"), Location::village("b"));
		graph.add_edge(Location::village("b"), Location::town("C"));
		graph.add_edge(Location::village("d"), Location::village("e"));
		assert!(!graph.is_empty());

		let id = |name| graph.id_of(name).unwrap();
		assert!(graph.is_reachable(id("a"), id("C")));
		assert!(graph.is_reachable(id("C"), id("a")));
		assert!(graph.is_reachable(id("e"), id("d")));
		assert!(!graph.is_reachable(id("a"), id("e")));
		assert!(!graph.is_reachable(id("d"), id("b")));
	}

	#[test]
	fn self_loop() {
		let mut graph = Graph::new();
		graph.add_edge(Location::village("a"), Location::village("a"));

		assert_eq!(graph.len(), 1);
		assert_eq!(graph.neighbors(&Location::village("a")).unwrap().count(), 0);
	}

	#[test]
	fn not_found() {
		let mut graph = Graph::new();
		graph.add_edge(Location::village("a"), Location::village("b"));

		match graph.neighbors(&Location::village("z")) {
			Err(Error::NotFound(name)) => assert_eq!(name, "z"),
			Err(other) => panic!("unexpected error {:?}", other),
			Ok(_) => panic!("found neighbors of a missing Location"),
		};
	}

	#[test]
	fn first_kind_wins() {
		let mut graph = Graph::new();
		graph.add_edge(Location::town("x"), Location::village("a"));
		graph.add_edge(Location::village("x"), Location::village("b"));

		assert_eq!(graph.len(), 3);
		assert_eq!(graph.get("x").unwrap().kind(), crate::LocationKind::Town);
		assert_eq!(names(graph.locations()), ["x", "a", "b"]);
	}
}
