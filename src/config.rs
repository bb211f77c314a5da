/// Options for configuring the [`DeliverySolver`](crate::DeliverySolver)
///
/// Every simple path between start and end is a candidate route, and dense Graphs have a lot of
/// them. The ceilings stop the search with
/// [`Error::SearchLimitExceeded`](crate::Error::SearchLimitExceeded) before it eats all memory
/// or time.
///
/// Default options:
/// ```
/// # use toll_delivery::SolverConfig;
/// assert_eq!(
/// 	SolverConfig {
/// 		max_paths: Some(1 << 20),
/// 		max_depth: None,
/// 		max_expansions: Some(1 << 24),
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
	/// The maximum number of complete paths to examine (defaults to `1 << 20`).
	///
	/// `None`: no limit.
	pub max_paths: Option<usize>,
	/// The maximum number of Locations on a path, including start and end (defaults to `None`).
	///
	/// `None`: no limit.
	pub max_depth: Option<usize>,
	/// The maximum number of partial paths the search may extend, dead ends included
	/// (defaults to `1 << 24`).
	///
	/// This is the ceiling that bounds the work of a search, even if `end` is rarely or never
	/// reached.
	///
	/// `None`: no limit.
	pub max_expansions: Option<usize>,
}

impl SolverConfig {
	/// a SolverConfig without any ceilings. Every simple path is examined, no matter how long
	/// it takes.
	///
	/// Values:
	/// ```
	/// # use toll_delivery::SolverConfig;
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		max_paths: None,
	/// 		max_depth: None,
	/// 		max_expansions: None,
	/// 	},
	/// 	SolverConfig::UNBOUNDED
	/// );
	/// ```
	pub const UNBOUNDED: SolverConfig = SolverConfig {
		max_paths: None,
		max_depth: None,
		max_expansions: None,
	};
	/// a SolverConfig with tight ceilings for maps from untrusted sources
	///
	/// Values:
	/// ```
	/// # use toll_delivery::SolverConfig;
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		max_paths: Some(10_000),
	/// 		max_depth: Some(64),
	/// 		max_expansions: Some(100_000),
	/// 	},
	/// 	SolverConfig::STRICT
	/// );
	/// ```
	pub const STRICT: SolverConfig = SolverConfig {
		max_paths: Some(10_000),
		max_depth: Some(64),
		max_expansions: Some(100_000),
	};

	/// Returns a copy with [`max_paths`](SolverConfig::max_paths) set to `max_paths`
	pub fn with_max_paths(self, max_paths: usize) -> SolverConfig {
		SolverConfig {
			max_paths: Some(max_paths),
			..self
		}
	}

	/// Returns a copy with [`max_expansions`](SolverConfig::max_expansions) set to `max_expansions`
	pub fn with_max_expansions(self, max_expansions: usize) -> SolverConfig {
		SolverConfig {
			max_expansions: Some(max_expansions),
			..self
		}
	}

	/// Returns a copy with [`max_depth`](SolverConfig::max_depth) set to `max_depth`
	pub fn with_max_depth(self, max_depth: usize) -> SolverConfig {
		SolverConfig {
			max_depth: Some(max_depth),
			..self
		}
	}
}

impl Default for SolverConfig {
	fn default() -> SolverConfig {
		SolverConfig {
			max_paths: Some(1 << 20),
			max_depth: None,
			max_expansions: Some(1 << 24),
		}
	}
}
