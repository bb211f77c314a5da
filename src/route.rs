use crate::{Amount, Location};

/// A simple path from start to end, together with the amount that has to be loaded at the start
/// so that the target amount arrives at the end.
///
/// Routes are ordered by their required amount only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	stops: Vec<Location>,
	required: Amount,
}

impl Route {
	/// creates a new Route with the given sequence of Locations and required amount
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use toll_delivery::{Location, Route};
	/// let route = Route::new(vec![Location::village("a"), Location::village("b")], 6);
	///
	/// assert_eq!(route.len(), 2);
	/// assert_eq!(route.required(), 6);
	/// ```
	pub fn new(stops: Vec<Location>, required: Amount) -> Route {
		Route { stops, required }
	}

	/// The amount that has to be loaded at the start
	pub fn required(&self) -> Amount {
		self.required
	}

	/// The Locations of the Route, from start to end
	pub fn stops(&self) -> &[Location] {
		&self.stops
	}

	/// The first Location of the Route
	pub fn start(&self) -> Option<&Location> {
		self.stops.first()
	}

	/// The last Location of the Route
	pub fn end(&self) -> Option<&Location> {
		self.stops.last()
	}

	/// Consumes the Route and returns its Locations
	pub fn into_stops(self) -> Vec<Location> {
		self.stops
	}
}

use std::ops::Deref;

impl Deref for Route {
	type Target = [Location];
	fn deref(&self) -> &[Location] {
		&self.stops
	}
}

use std::cmp::Ordering;

impl Ord for Route {
	fn cmp(&self, other: &Route) -> Ordering {
		self.required.cmp(&other.required)
	}
}

impl PartialOrd for Route {
	fn partial_cmp(&self, other: &Route) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

use std::fmt;
impl fmt::Display for Route {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Route[Required = {}]: ", self.required)?;
		if self.stops.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.stops[0])?;
			for stop in self.stops.iter().skip(1) {
				write!(fmt, " -> {}", stop)?;
			}
			Ok(())
		}
	}
}
