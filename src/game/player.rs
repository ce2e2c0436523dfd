/// One of the two registered players of a session.
///
/// The board stores seats rather than player descriptors, so identity
/// comparison is a plain enum comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element player array
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Get seat name for display and logs
    pub fn name(self) -> &'static str {
        match self {
            Seat::First => "First",
            Seat::Second => "Second",
        }
    }
}
