use std::fmt;

/// A shorthand for results of this crate
pub type Result<T> = std::result::Result<T, Error>;

/// The ceiling of [`SolverConfig`](crate::SolverConfig) that stopped a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLimit {
	/// More than this many complete paths were found
	Paths(usize),
	/// A partial path grew longer than this many Locations
	Depth(usize),
	/// More than this many partial paths were extended
	Expansions(usize),
}

/// The ways a delivery can fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
	/// A Location with this name is not part of the Graph
	NotFound(String),
	/// Start and end of the delivery are the same Location
	InvalidRoute(String),
	/// There is no path from `start` to `end`
	NoRouteFound {
		/// name of the start Location
		start: String,
		/// name of the end Location
		end: String,
	},
	/// The search was stopped by a ceiling of the [`SolverConfig`](crate::SolverConfig)
	SearchLimitExceeded(SearchLimit),
	/// The required amount does not fit in an [`Amount`](crate::Amount)
	AmountOverflow,
}

impl fmt::Display for Error {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::NotFound(name) => write!(fmt, "location {} is not on the map", name),
			Error::InvalidRoute(name) => {
				write!(fmt, "not a valid route: {} is both start and end", name)
			}
			Error::NoRouteFound { start, end } => {
				write!(fmt, "no route found from {} to {}", start, end)
			}
			Error::SearchLimitExceeded(SearchLimit::Paths(max)) => {
				write!(fmt, "search stopped after {} paths", max)
			}
			Error::SearchLimitExceeded(SearchLimit::Depth(max)) => {
				write!(fmt, "search stopped at a path of {} locations", max)
			}
			Error::SearchLimitExceeded(SearchLimit::Expansions(max)) => {
				write!(fmt, "search stopped after extending {} paths", max)
			}
			Error::AmountOverflow => write!(fmt, "required amount is too large"),
		}
	}
}

impl std::error::Error for Error {}
