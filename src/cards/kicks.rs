use super::rank::Rank;

/// A hand's kicker ranks as a 13-bit mask.
///
/// Two kicker sets of the same size compare like their ranks sorted from
/// high to low, which is what integer comparison of the masks gives.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism, ascending
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
