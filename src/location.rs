use std::fmt;
use std::hash::{Hash, Hasher};

/// The Type used for quantities of cargo
pub type Amount = u64;

/// A Town takes one unit of toll for every started band of this many carried units
pub const TOWN_TOLL_BAND: Amount = 19;

/// The kind of a [`Location`], which decides the toll it takes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationKind {
	/// Takes a flat toll of `1` per visit
	Village,
	/// Takes `1` for every started band of [`TOWN_TOLL_BAND`] carried units
	Town,
}

impl LocationKind {
	/// The kind the map format uses for a name: lowercase initial means Village, anything else
	/// (digits and symbols included) Town.
	///
	/// ## Examples
	/// ```
	/// # use toll_delivery::LocationKind;
	/// assert_eq!(LocationKind::from_name("Z"), LocationKind::Town);
	/// assert_eq!(LocationKind::from_name("z"), LocationKind::Village);
	/// assert_eq!(LocationKind::from_name("7"), LocationKind::Town);
	/// ```
	pub fn from_name(name: &str) -> LocationKind {
		match name.chars().next() {
			Some(c) if c.is_lowercase() => LocationKind::Village,
			_ => LocationKind::Town,
		}
	}

	/// The amount that has to be carried into a Location of this kind so that `carried` is left
	/// after paying the toll.
	///
	/// Returns `None` if the result does not fit in an [`Amount`].
	///
	/// ## Examples
	/// ```
	/// # use toll_delivery::LocationKind;
	/// assert_eq!(LocationKind::Village.toll_for(0), Some(1));
	/// assert_eq!(LocationKind::Village.toll_for(40), Some(41));
	///
	/// assert_eq!(LocationKind::Town.toll_for(0), Some(0));
	/// assert_eq!(LocationKind::Town.toll_for(19), Some(20));
	/// assert_eq!(LocationKind::Town.toll_for(20), Some(22));
	/// ```
	pub fn toll_for(self, carried: Amount) -> Option<Amount> {
		let toll = match self {
			LocationKind::Village => 1,
			// ceil(carried / 19) without the overflow of `carried + 18`
			LocationKind::Town => carried / TOWN_TOLL_BAND + (carried % TOWN_TOLL_BAND != 0) as Amount,
		};
		carried.checked_add(toll)
	}
}

/// A named stop on the map.
///
/// Two Locations are the same Location if they have the same name. The kind only decides the
/// toll and takes no part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Location {
	name: String,
	kind: LocationKind,
}

impl Location {
	/// Creates a new Location
	pub fn new(name: impl Into<String>, kind: LocationKind) -> Location {
		Location {
			name: name.into(),
			kind,
		}
	}

	/// Shorthand for a [`LocationKind::Village`]
	pub fn village(name: impl Into<String>) -> Location {
		Location::new(name, LocationKind::Village)
	}

	/// Shorthand for a [`LocationKind::Town`]
	pub fn town(name: impl Into<String>) -> Location {
		Location::new(name, LocationKind::Town)
	}

	/// Creates a Location whose kind is derived from the case of its name.
	///
	/// See [`LocationKind::from_name`].
	pub fn from_name(name: impl Into<String>) -> Location {
		let name = name.into();
		let kind = LocationKind::from_name(&name);
		Location { name, kind }
	}

	/// The name of the Location
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The kind of the Location
	pub fn kind(&self) -> LocationKind {
		self.kind
	}

	/// The amount that has to be carried into this Location so that `carried` is left.
	///
	/// See [`LocationKind::toll_for`].
	pub fn toll_for(&self, carried: Amount) -> Option<Amount> {
		self.kind.toll_for(carried)
	}
}

impl PartialEq for Location {
	fn eq(&self, other: &Location) -> bool {
		self.name == other.name
	}
}
impl Eq for Location {}

impl Hash for Location {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state)
	}
}

impl fmt::Display for Location {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.name)
	}
}
