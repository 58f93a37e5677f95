/// Betting round, keyed by how many board cards are face up.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Pref => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::Rive),
            Self::Rive => None,
        }
    }
    /// board cards visible on this street
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// board cards dealt when entering the next street
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Pref => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::Rive => 0,
        }
    }
}

/// the engine's street marker is the number of board cards
impl TryFrom<usize> for Street {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(format!("no street shows {} board cards", n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
