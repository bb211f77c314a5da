#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find out how much cargo has to be loaded so that enough of it survives the road.
//!
//! ## Introduction
//! A delivery travels over an undirected Graph of named Locations. Every Location the delivery
//! passes through (including the one it departs from, but not the one it arrives at) takes a
//! toll out of the cargo:
//! - a **Village** takes a flat `1` unit
//! - a **Town** takes `1` unit for every started band of `19` units that are carried through it
//!
//! Since a Town's toll depends on how much is carried, the cost of a route is not a sum of edge
//! weights. Instead the required amount is folded backwards over the route, starting with the
//! amount that has to arrive and ending with the amount that has to be loaded at the start.
//!
//! This crate enumerates every simple path between two Locations, folds the tolls over each of
//! them and reports the route with the smallest required origin quantity.
//!
//! ## Examples
//! Building a Graph and solving a single delivery:
//! ```
//! use toll_delivery::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_edge(Location::village("a"), Location::town("B"));
//! graph.add_edge(Location::town("B"), Location::village("a2"));
//!
//! let solver = DeliverySolver::new(&graph, SolverConfig::default());
//! let route = solver
//!     .solve(&Location::village("a"), &Location::village("a2"), 19)
//!     .unwrap();
//!
//! // B takes 1 of the 20 carried through it, a takes another 1 on departure
//! assert_eq!(route.required(), 21);
//! assert_eq!(route.to_string(), "Route[Required = 21]: a -> B -> a2");
//! ```
//!
//! ### Failures
//! A delivery that cannot be made is reported as an [`Error`], never as a made-up amount:
//! ```
//! use toll_delivery::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_edge(Location::village("a"), Location::village("b"));
//! graph.add_edge(Location::village("c"), Location::village("d"));
//!
//! let solver = DeliverySolver::new(&graph, SolverConfig::default());
//! let a = Location::village("a");
//!
//! assert!(matches!(solver.solve(&a, &a, 5), Err(Error::InvalidRoute(_))));
//! assert!(matches!(
//!     solver.solve(&a, &Location::village("d"), 5),
//!     Err(Error::NoRouteFound { .. })
//! ));
//! ```
//!
//! ### Configuration
//! Enumerating every simple path is exponential on dense Graphs. The [`SolverConfig`] puts a
//! ceiling on the search, which fails with [`Error::SearchLimitExceeded`] instead of running
//! away. [`SolverConfig::UNBOUNDED`] removes the ceilings entirely.
//!
//! ### Batches
//! Several independent [`DeliveryCase`]s, for example read with [`map_file::parse_cases`], are
//! solved with [`solve_cases`]. With the `parallel` feature (default) the cases are spread
//! across threads.

/// The Type used to reference a Location inside a [`Graph`]
pub type NodeID = usize;

mod location;
pub use self::location::{Amount, Location, LocationKind, TOWN_TOLL_BAND};

mod graph;
pub use self::graph::Graph;

mod route;
pub use self::route::Route;

mod config;
pub use self::config::SolverConfig;

mod error;
pub use self::error::{Error, Result, SearchLimit};

mod solver;
pub use self::solver::DeliverySolver;

mod case;
pub use self::case::{solve_cases, DeliveryCase};

pub mod map_file;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		solve_cases, Amount, DeliveryCase, DeliverySolver, Error, Graph, Location, LocationKind,
		Route, SolverConfig,
	};
}
