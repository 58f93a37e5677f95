use crate::Chips;

/// A player decision as the engine accepts it.
///
/// `Raise` carries the raise-to amount: the actor's total pip on this
/// street after raising, not the increment.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

impl Action {
    /// True if this is a raise (aggressive action).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_))
    }
}

impl TryFrom<&str> for Action {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("FOLD") => Ok(Action::Fold),
            Some("CHECK") => Ok(Action::Check),
            Some("CALL") => Ok(Action::Call),
            Some("RAISE") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Raise)
                .ok_or_else(|| format!("invalid raise amount in {}", s)),
            _ => Err(format!("invalid action {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call => write!(f, "CALL"),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}
