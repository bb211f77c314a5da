use crate::{Amount, Error, Graph, Location, NodeID, Result, Route, SearchLimit, SolverConfig};
use log::{debug, trace, warn};
use std::time::Instant;

/// Searches a [`Graph`] for the route that needs the least cargo at its start.
///
/// The Graph is only borrowed, so a single Graph can be searched by any number of solvers at
/// the same time.
#[derive(Clone, Copy, Debug)]
pub struct DeliverySolver<'a> {
	graph: &'a Graph,
	config: SolverConfig,
}

impl<'a> DeliverySolver<'a> {
	/// Creates a new DeliverySolver on `graph`
	pub fn new(graph: &'a Graph, config: SolverConfig) -> DeliverySolver<'a> {
		DeliverySolver { graph, config }
	}

	/// The Graph this solver searches
	pub fn graph(&self) -> &'a Graph {
		self.graph
	}

	/// Returns the config used to create this solver
	pub fn config(&self) -> &SolverConfig {
		&self.config
	}

	/// Finds the route from `start` to `end` that needs the least cargo at `start` so that
	/// `target` arrives at `end`.
	///
	/// Every simple path from `start` to `end` is a candidate. If several routes need the same
	/// amount, the first one found is returned.
	///
	/// ## Errors
	/// - [`Error::NotFound`] if `start` or `end` are not part of the Graph
	/// - [`Error::InvalidRoute`] if `start` and `end` are the same Location
	/// - [`Error::NoRouteFound`] if `end` cannot be reached from `start`
	/// - [`Error::SearchLimitExceeded`] if the search hit a ceiling of the [`SolverConfig`]
	/// - [`Error::AmountOverflow`] if even the cheapest route needs more than [`Amount::MAX`]
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use toll_delivery::prelude::*;
	/// // a - b - c - z
	/// //  \         /
	/// //   -- D ----
	/// let mut graph = Graph::new();
	/// graph.add_edge(Location::village("a"), Location::village("b"));
	/// graph.add_edge(Location::village("b"), Location::village("c"));
	/// graph.add_edge(Location::village("c"), Location::village("z"));
	/// graph.add_edge(Location::village("a"), Location::town("D"));
	/// graph.add_edge(Location::town("D"), Location::village("z"));
	///
	/// let solver = DeliverySolver::new(&graph, SolverConfig::default());
	///
	/// // D takes 1 of 5, a takes 1 of 6
	/// let route = solver.solve(&Location::village("a"), &Location::village("z"), 5).unwrap();
	/// assert_eq!(route.required(), 7);
	/// assert_eq!(route.to_string(), "Route[Required = 7]: a -> D -> z");
	///
	/// // D takes 3 of 40, while b and c only take 1 each
	/// let route = solver.solve(&Location::village("a"), &Location::village("z"), 40).unwrap();
	/// assert_eq!(route.required(), 43);
	/// assert_eq!(route.to_string(), "Route[Required = 43]: a -> b -> c -> z");
	/// ```
	pub fn solve(&self, start: &Location, end: &Location, target: Amount) -> Result<Route> {
		let started = Instant::now();

		let mut best: Option<(Amount, Vec<NodeID>)> = None;
		let mut overflowed = 0;

		let found = self.search(start, end, |path| {
			match self.fold(path, target) {
				Some(required) => {
					trace!("candidate needs {}: {}", required, self.format_ids(path));
					if best.as_ref().map_or(true, |(min, _)| required < *min) {
						best = Some((required, path.to_vec()));
					}
				}
				None => overflowed += 1,
			}
			Ok(())
		})?;

		debug!(
			"{} -> {}: examined {} paths in {:?}",
			start,
			end,
			found,
			started.elapsed()
		);

		match best {
			Some((required, path)) => {
				let stops: Vec<Location> = path.into_iter().map(|id| self.graph[id].clone()).collect();
				Ok(Route::new(stops, required))
			}
			None if overflowed > 0 => Err(Error::AmountOverflow),
			None => Err(Error::NoRouteFound {
				start: start.name().to_owned(),
				end: end.name().to_owned(),
			}),
		}
	}

	/// Lists every simple path from `start` to `end`, in the order the search finds them.
	///
	/// The first Location of every path is `start` and the last is `end`. An empty list means
	/// that `end` cannot be reached.
	///
	/// ## Errors
	/// The same as [`solve`](DeliverySolver::solve), except that an unreachable `end` is not an
	/// error here.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use toll_delivery::prelude::*;
	/// let mut graph = Graph::new();
	/// graph.add_edge(Location::village("a"), Location::village("b"));
	/// graph.add_edge(Location::village("b"), Location::village("c"));
	/// graph.add_edge(Location::village("a"), Location::village("c"));
	///
	/// let solver = DeliverySolver::new(&graph, SolverConfig::default());
	/// let paths = solver
	///     .enumerate_paths(&Location::village("a"), &Location::village("c"))
	///     .unwrap();
	///
	/// assert_eq!(paths.len(), 2);
	/// ```
	pub fn enumerate_paths(&self, start: &Location, end: &Location) -> Result<Vec<Vec<Location>>> {
		let mut paths: Vec<Vec<Location>> = vec![];
		self.search(start, end, |path| {
			paths.push(path.iter().map(|&id| self.graph[id].clone()).collect());
			Ok(())
		})?;
		Ok(paths)
	}

	/// The amount that has to be loaded at the start of `path` so that `target` arrives at its
	/// end.
	///
	/// The tolls are applied backwards: the last Location takes nothing, every other Location
	/// (the first one included) takes its toll from what is carried on from it.
	///
	/// ## Examples
	/// ```
	/// # use toll_delivery::prelude::*;
	/// let path = [Location::village("a"), Location::town("B"), Location::village("a2")];
	///
	/// assert_eq!(DeliverySolver::required_amount(&path, 19), Ok(21));
	/// ```
	pub fn required_amount(path: &[Location], target: Amount) -> Result<Amount> {
		fold_tolls(path.iter(), target).ok_or(Error::AmountOverflow)
	}

	fn fold(&self, path: &[NodeID], target: Amount) -> Option<Amount> {
		fold_tolls(path.iter().map(|&id| &self.graph[id]), target)
	}

	/// Depth-first search over all simple paths from `start` to `end`.
	///
	/// `on_path` is called with every complete path. Returns the number of complete paths.
	/// If `end` is not connected to `start` at all, nothing is searched.
	fn search(
		&self,
		start: &Location,
		end: &Location,
		mut on_path: impl FnMut(&[NodeID]) -> Result<()>,
	) -> Result<usize> {
		let start_id = self.graph.require_id(start)?;
		let end_id = self.graph.require_id(end)?;
		if start_id == end_id {
			return Err(Error::InvalidRoute(start.name().to_owned()));
		}

		if !self.graph.is_reachable(start_id, end_id) {
			trace!("{} cannot be reached from {}", end, start);
			return Ok(0);
		}

		let max_paths = self.config.max_paths.unwrap_or(usize::MAX);
		let max_depth = self.config.max_depth.unwrap_or(usize::MAX);
		let max_expansions = self.config.max_expansions.unwrap_or(usize::MAX);

		let mut found = 0;
		let mut expansions = 0;
		// `path` is shared by all frames: a frame at `depth` owns `path[depth..]`
		let mut path: Vec<NodeID> = Vec::with_capacity(self.graph.len());
		let mut next: Vec<(NodeID, usize)> = vec![(start_id, 0)];
		let mut branches = vec![];

		while let Some((current_id, depth)) = next.pop() {
			expansions += 1;
			if expansions > max_expansions {
				return Err(self.limit_exceeded(SearchLimit::Expansions(max_expansions)));
			}
			path.truncate(depth);
			path.push(current_id);

			let neighbors = self.graph.neighbor_ids(current_id);
			for (i, &other_id) in neighbors.iter().enumerate() {
				if neighbors[..i].contains(&other_id) {
					// duplicate edge, already handled
					continue;
				}
				if other_id == end_id {
					if path.len() + 1 > max_depth {
						return Err(self.limit_exceeded(SearchLimit::Depth(max_depth)));
					}
					found += 1;
					if found > max_paths {
						return Err(self.limit_exceeded(SearchLimit::Paths(max_paths)));
					}
					path.push(end_id);
					let res = on_path(&path);
					path.pop();
					res?;
				} else if !path.contains(&other_id) {
					branches.push(other_id);
				}
			}

			if !branches.is_empty() && path.len() + 1 > max_depth {
				return Err(self.limit_exceeded(SearchLimit::Depth(max_depth)));
			}
			// reversed, so that the first neighbor is explored first
			next.extend(branches.drain(..).rev().map(|id| (id, depth + 1)));
		}

		Ok(found)
	}

	fn limit_exceeded(&self, limit: SearchLimit) -> Error {
		warn!("search limit exceeded: {:?}", limit);
		Error::SearchLimitExceeded(limit)
	}

	fn format_ids(&self, path: &[NodeID]) -> String {
		path.iter()
			.map(|&id| self.graph[id].name())
			.collect::<Vec<_>>()
			.join(" -> ")
	}
}

fn fold_tolls<'l>(
	stops: impl DoubleEndedIterator<Item = &'l Location>,
	target: Amount,
) -> Option<Amount> {
	stops
		.rev()
		.skip(1) // nothing is taken on arrival
		.try_fold(target, |carried, stop| stop.toll_for(carried))
}
