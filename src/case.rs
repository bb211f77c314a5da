use crate::{Amount, DeliverySolver, Graph, Location, Result, Route, SolverConfig};
use log::debug;

/// One delivery: a map, the amount that has to arrive and where it goes from and to.
#[derive(Clone, Debug)]
pub struct DeliveryCase {
	graph: Graph,
	target: Amount,
	start: Location,
	end: Location,
}

impl DeliveryCase {
	/// Creates a new DeliveryCase
	pub fn new(graph: Graph, target: Amount, start: Location, end: Location) -> DeliveryCase {
		DeliveryCase {
			graph,
			target,
			start,
			end,
		}
	}

	/// The map of the delivery
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// The amount that has to arrive at [`end`](DeliveryCase::end)
	pub fn target(&self) -> Amount {
		self.target
	}

	/// Where the delivery starts
	pub fn start(&self) -> &Location {
		&self.start
	}

	/// Where the delivery has to arrive
	pub fn end(&self) -> &Location {
		&self.end
	}

	/// Finds the cheapest route for this delivery.
	///
	/// See [`DeliverySolver::solve`].
	pub fn solve(&self, config: SolverConfig) -> Result<Route> {
		DeliverySolver::new(&self.graph, config).solve(&self.start, &self.end, self.target)
	}
}

use std::fmt;
impl fmt::Display for DeliveryCase {
	/// The map in the summary form `a [B] B [ac] c [B] Delivery info: 19 bars from a to c.`
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for location in self.graph.locations() {
			write!(fmt, "{} [", location)?;
			if let Ok(neighbors) = self.graph.neighbors(location) {
				for neighbor in neighbors {
					write!(fmt, "{}", neighbor)?;
				}
			}
			write!(fmt, "] ")?;
		}
		write!(
			fmt,
			"Delivery info: {} bars from {} to {}.",
			self.target, self.start, self.end
		)
	}
}

/// Solves every case with the same `config`.
///
/// The cases don't depend on each other. A failed case does not stop the others, and the
/// results are in the same order as `cases`.
///
/// With the `parallel` feature, the cases are solved on the rayon thread pool.
///
/// ## Examples
/// ```
/// # use toll_delivery::prelude::*;
/// let mut graph = Graph::new();
/// graph.add_edge(Location::village("a"), Location::town("B"));
///
/// let cases = [
///     DeliveryCase::new(graph.clone(), 19, Location::village("a"), Location::town("B")),
///     DeliveryCase::new(graph, 19, Location::village("a"), Location::village("a")),
/// ];
///
/// let results = solve_cases(&cases, SolverConfig::default());
/// assert_eq!(results[0].as_ref().map(|r| r.required()), Ok(20));
/// assert!(matches!(results[1], Err(Error::InvalidRoute(_))));
/// ```
pub fn solve_cases(cases: &[DeliveryCase], config: SolverConfig) -> Vec<Result<Route>> {
	debug!("solving {} cases", cases.len());

	#[cfg(feature = "parallel")]
	let results: Vec<Result<Route>> = {
		use rayon::prelude::*;
		cases.par_iter().map(|case| case.solve(config)).collect()
	};

	#[cfg(not(feature = "parallel"))]
	let results: Vec<Result<Route>> = cases.iter().map(|case| case.solve(config)).collect();

	let failed = results.iter().filter(|result| result.is_err()).count();
	if failed > 0 {
		debug!("{} of {} cases failed", failed, cases.len());
	}
	results
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	fn case(edges: &[(&str, &str)], target: Amount, start: &str, end: &str) -> DeliveryCase {
		let mut graph = Graph::new();
		for &(a, b) in edges {
			graph.add_edge(Location::from_name(a), Location::from_name(b));
		}
		DeliveryCase::new(
			graph,
			target,
			Location::from_name(start),
			Location::from_name(end),
		)
	}

	#[test]
	fn display() {
		let case = case(&[("a", "B"), ("B", "c")], 19, "a", "c");

		assert_eq!(
			case.to_string(),
			"a [B] B [ac] c [B] Delivery info: 19 bars from a to c."
		);
	}

	#[test]
	fn batch_keeps_order_and_failures() {
		let cases = [
			case(&[("a", "Z")], 19, "a", "Z"),
			case(&[("a", "b"), ("c", "d")], 5, "a", "d"),
			case(&[("a", "b"), ("b", "c")], 5, "a", "c"),
			case(&[("a", "b")], 5, "b", "b"),
		];

		let results = solve_cases(&cases, SolverConfig::default());
		assert_eq!(results.len(), 4);
		assert_eq!(results[0].as_ref().map(|r| r.required()), Ok(20));
		assert!(matches!(results[1], Err(Error::NoRouteFound { .. })));
		assert_eq!(results[2].as_ref().map(|r| r.required()), Ok(7));
		assert!(matches!(results[3], Err(Error::InvalidRoute(_))));
	}

	#[test]
	fn single_case() {
		let case = case(&[("a", "B"), ("B", "a2")], 19, "a", "a2");

		assert_eq!(case.solve(SolverConfig::default()).map(|r| r.required()), Ok(21));
		assert_eq!(case.target(), 19);
		assert_eq!(case.start().name(), "a");
		assert_eq!(case.end().name(), "a2");
		assert_eq!(case.graph().len(), 3);
	}
}
