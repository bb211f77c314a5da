//! Reading delivery maps from text.
//!
//! A map file holds any number of maps, one after the other, and ends with a line containing
//! `-1` (or simply with the end of the input):
//! ```text
//! 2         <- number of edges in this map
//! a B       <- one undirected edge per line
//! B c
//! 19 a c    <- amount to deliver, start, end
//! -1
//! ```
//! Location names are separated by whitespace. A name starting with a lowercase letter is a
//! [Village](crate::LocationKind::Village), anything else is a [Town](crate::LocationKind::Town).
//! Blank lines are ignored.
//!
//! ## Examples
//! ```
//! use toll_delivery::{map_file, SolverConfig};
//!
//! let input = "1\na Z\n19 a Z\n2\na B\nB a2\n19 a a2\n-1\n";
//! let cases = map_file::parse_cases(input).unwrap();
//!
//! assert_eq!(cases.len(), 2);
//! assert_eq!(cases[0].solve(SolverConfig::default()).unwrap().required(), 20);
//! assert_eq!(cases[1].solve(SolverConfig::default()).unwrap().required(), 21);
//! ```

use crate::{Amount, DeliveryCase, Graph, Location};
use log::{debug, trace};
use std::fmt;

/// The line that ends a map file
pub const END_MARKER: &str = "-1";

/// What is wrong with a line of a map file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
	/// The line should hold the number of edges of the next map
	InvalidEdgeCount(String),
	/// The line should hold two Location names
	InvalidEdge(String),
	/// The line should hold the amount to deliver, the start and the end
	InvalidDelivery(String),
	/// The amount to deliver is not a non-negative number
	InvalidAmount(String),
	/// The input ended in the middle of a map
	UnexpectedEnd,
}

/// An error while reading a map file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
	/// The 1-based line number of the offending line
	pub line: usize,
	/// What went wrong
	pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "line {}: ", self.line)?;
		match &self.kind {
			ParseErrorKind::InvalidEdgeCount(line) => {
				write!(fmt, "expected a number of edges, found {:?}", line)
			}
			ParseErrorKind::InvalidEdge(line) => {
				write!(fmt, "expected two location names, found {:?}", line)
			}
			ParseErrorKind::InvalidDelivery(line) => {
				write!(fmt, "expected \"<amount> <start> <end>\", found {:?}", line)
			}
			ParseErrorKind::InvalidAmount(amount) => {
				write!(fmt, "{:?} is not a valid amount", amount)
			}
			ParseErrorKind::UnexpectedEnd => write!(fmt, "unexpected end of input"),
		}
	}
}

impl std::error::Error for ParseError {}

/// Parses all maps in `input`.
///
/// Stops at the first line that is exactly [`END_MARKER`] or at the end of `input`.
pub fn parse_cases(input: &str) -> Result<Vec<DeliveryCase>, ParseError> {
	let mut lines = input
		.lines()
		.enumerate()
		.map(|(i, line)| (i + 1, line.trim()))
		.filter(|(_, line)| !line.is_empty());
	let mut cases = vec![];

	while let Some((line_no, line)) = lines.next() {
		if line == END_MARKER {
			break;
		}
		let edge_count: usize = line.parse().map_err(|_| ParseError {
			line: line_no,
			kind: ParseErrorKind::InvalidEdgeCount(line.to_owned()),
		})?;
		let mut last_line = line_no;

		let mut graph = Graph::new();
		for _ in 0..edge_count {
			let (line_no, line) = lines.next().ok_or(ParseError {
				line: last_line + 1,
				kind: ParseErrorKind::UnexpectedEnd,
			})?;
			last_line = line_no;
			let (a, b) = parse_edge(line).ok_or_else(|| ParseError {
				line: line_no,
				kind: ParseErrorKind::InvalidEdge(line.to_owned()),
			})?;
			trace!("edge {} - {}", a, b);
			graph.add_edge(a, b);
		}

		let (line_no, line) = lines.next().ok_or(ParseError {
			line: last_line + 1,
			kind: ParseErrorKind::UnexpectedEnd,
		})?;
		let case = parse_delivery(line, graph).map_err(|kind| ParseError {
			line: line_no,
			kind,
		})?;
		debug!("map case {}: {}", cases.len() + 1, case);
		cases.push(case);
	}

	Ok(cases)
}

fn parse_edge(line: &str) -> Option<(Location, Location)> {
	let mut names = line.split_whitespace();
	match (names.next(), names.next(), names.next()) {
		(Some(a), Some(b), None) => Some((Location::from_name(a), Location::from_name(b))),
		_ => None,
	}
}

fn parse_delivery(line: &str, graph: Graph) -> Result<DeliveryCase, ParseErrorKind> {
	let mut parts = line.split_whitespace();
	match (parts.next(), parts.next(), parts.next(), parts.next()) {
		(Some(target), Some(start), Some(end), None) => {
			let target: Amount = target
				.parse()
				.map_err(|_| ParseErrorKind::InvalidAmount(target.to_owned()))?;
			Ok(DeliveryCase::new(
				graph,
				target,
				Location::from_name(start),
				Location::from_name(end),
			))
		}
		_ => Err(ParseErrorKind::InvalidDelivery(line.to_owned())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{LocationKind, SolverConfig};

	const INPUT: &str = "\
1
a Z
19 a Z
7
A B
A c
c D
B D
D e
e F
F g
39 A g
-1
";

	#[test]
	fn parse() {
		let cases = parse_cases(INPUT).unwrap();
		assert_eq!(cases.len(), 2);

		assert_eq!(
			cases[0].to_string(),
			"a [Z] Z [a] Delivery info: 19 bars from a to Z."
		);
		assert_eq!(cases[1].graph().len(), 7);
		assert_eq!(cases[1].target(), 39);
		assert_eq!(cases[1].start().kind(), LocationKind::Town);
		assert_eq!(cases[1].end().kind(), LocationKind::Village);
	}

	#[test]
	fn solve_parsed() {
		let cases = parse_cases(INPUT).unwrap();
		let required: Vec<_> = cases
			.iter()
			.map(|case| case.solve(SolverConfig::default()).unwrap().required())
			.collect();
		// A -B- D: F 39 -> 42, e 43, D 43 -> 46, B 46 -> 49, A 49 -> 52
		// A -c- D: same, but c takes 1 instead of B's 3 -> 50
		assert_eq!(required, [20, 50]);
	}

	#[test]
	fn only_lowercase_names_are_villages() {
		let cases = parse_cases("2\na 9\n9 b\n19 a b\n").unwrap();
		let graph = cases[0].graph();
		assert_eq!(graph.get("9").unwrap().kind(), LocationKind::Town);
		assert_eq!(graph.get("b").unwrap().kind(), LocationKind::Village);

		// 9 takes 1 of 19, a takes 1 of 20
		let route = cases[0].solve(SolverConfig::default()).unwrap();
		assert_eq!(route.required(), 21);
	}

	#[test]
	fn ends_without_marker() {
		let cases = parse_cases("1\na b\n3 a b\n\n").unwrap();
		assert_eq!(cases.len(), 1);
	}

	#[test]
	fn stops_at_marker() {
		let cases = parse_cases("1\na b\n3 a b\n-1\nthis is not read\n").unwrap();
		assert_eq!(cases.len(), 1);
		assert!(parse_cases("-1\n1\n").unwrap().is_empty());
		assert!(parse_cases("").unwrap().is_empty());
	}

	#[test]
	fn errors() {
		assert_eq!(
			parse_cases("x\n").unwrap_err(),
			ParseError {
				line: 1,
				kind: ParseErrorKind::InvalidEdgeCount("x".into())
			}
		);
		assert_eq!(
			parse_cases("2\na b\nb\n").unwrap_err(),
			ParseError {
				line: 3,
				kind: ParseErrorKind::InvalidEdge("b".into())
			}
		);
		assert_eq!(
			parse_cases("1\na b\n").unwrap_err(),
			ParseError {
				line: 3,
				kind: ParseErrorKind::UnexpectedEnd
			}
		);
		assert_eq!(
			parse_cases("1\na b\n-3 a b\n").unwrap_err(),
			ParseError {
				line: 3,
				kind: ParseErrorKind::InvalidAmount("-3".into())
			}
		);
		assert_eq!(
			parse_cases("1\na b\n3 a\n").unwrap_err(),
			ParseError {
				line: 3,
				kind: ParseErrorKind::InvalidDelivery("3 a".into())
			}
		);
	}

	#[test]
	fn error_display() {
		let err = parse_cases("1\na b\n").unwrap_err();
		assert_eq!(err.to_string(), "line 3: unexpected end of input");
	}
}
