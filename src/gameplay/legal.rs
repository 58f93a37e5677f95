use super::action::Action;
use crate::Chips;

/// The set of actions the engine will accept at a decision.
///
/// Raise legality carries its inclusive raise-to bounds, so
/// membership of `Raise(x)` also checks `min <= x <= max`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Legal {
    fold: bool,
    check: bool,
    call: bool,
    raise: Option<(Chips, Chips)>,
}

impl Legal {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Adds a no-argument action. Raises carry bounds and only enter
    /// through [`Legal::bounded`]; a `Raise` passed here is ignored.
    pub fn with(mut self, action: Action) -> Self {
        match action {
            Action::Fold => self.fold = true,
            Action::Check => self.check = true,
            Action::Call => self.call = true,
            Action::Raise(_) => {}
        }
        self
    }
    /// Allows raising to anything in `min..=max`.
    pub fn bounded(mut self, min: Chips, max: Chips) -> Self {
        debug_assert!(min <= max);
        self.raise = Some((min, max));
        self
    }

    pub fn may_fold(&self) -> bool {
        self.fold
    }
    pub fn may_check(&self) -> bool {
        self.check
    }
    pub fn may_call(&self) -> bool {
        self.call
    }
    pub fn may_raise(&self) -> bool {
        self.raise.is_some()
    }
    pub fn raise_bounds(&self) -> Option<(Chips, Chips)> {
        self.raise
    }

    pub fn contains(&self, action: &Action) -> bool {
        match *action {
            Action::Fold => self.fold,
            Action::Check => self.check,
            Action::Call => self.call,
            Action::Raise(amount) => self
                .raise
                .map(|(min, max)| min <= amount && amount <= max)
                .unwrap_or(false),
        }
    }

    /// Check if legal, else Call, else Fold.
    pub fn passive(&self) -> Action {
        debug_assert!(*self != Self::empty(), "nothing is legal");
        if self.check {
            Action::Check
        } else if self.call {
            Action::Call
        } else if self.fold {
            Action::Fold
        } else {
            self.raise
                .map(|(min, _)| Action::Raise(min))
                .unwrap_or(Action::Fold)
        }
    }

    /// The chosen action if it is legal, otherwise [`Legal::passive`].
    pub fn filter(&self, action: Action) -> Action {
        if self.contains(&action) {
            action
        } else {
            self.passive()
        }
    }
}

impl std::fmt::Display for Legal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = [
            (self.fold, "FOLD"),
            (self.check, "CHECK"),
            (self.call, "CALL"),
        ]
        .into_iter()
        .filter(|(legal, _)| *legal)
        .map(|(_, name)| name.to_string())
        .chain(self.raise.map(|(min, max)| format!("RAISE {}..={}", min, max)))
        .collect::<Vec<String>>();
        write!(f, "{}", names.join(" "))
    }
}
