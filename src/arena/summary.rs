use crate::Chips;

/// End-of-match report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub showdowns: usize,
    /// hero's net chips over the match
    pub bankroll: Chips,
    /// hypotheses still alive
    pub ensemble: usize,
    /// whether the secret permutation is among them
    pub secret_survives: bool,
}

impl Summary {
    pub fn per_round(&self) -> f32 {
        match self.rounds {
            0 => 0.,
            n => self.bankroll as f32 / n as f32,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<32}{}", "rounds", self.rounds)?;
        writeln!(f, "{:<32}{}", "showdowns", self.showdowns)?;
        writeln!(f, "{:<32}{:+} ({:+.2}/round)", "bankroll", self.bankroll, self.per_round())?;
        writeln!(f, "{:<32}{}", "hypotheses left", self.ensemble)?;
        write!(f, "{:<32}{}", "secret survives", self.secret_survives)
    }
}
