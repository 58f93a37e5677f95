use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use crate::Arbitrary;
use anyhow::Context;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Geometric;

/// an array of 13 unique Ranks represents
/// any of the 13! elements in the Rank permutation group.
/// by assuming the canonical order of ranks (2 < 3 < ... < A),
/// we use [Rank; 13] to map 2 -> P[0], 3 -> P[1], ..., A -> P[12].
/// suits are never touched.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Permutation([Rank; 13]);

impl Permutation {
    pub const fn identity() -> Self {
        Self(Rank::all())
    }

    /// the transposition of two ranks, fixing every other rank
    pub fn swap(a: Rank, b: Rank) -> Self {
        let mut ranks = Rank::all();
        ranks.swap(a as usize, b as usize);
        Self(ranks)
    }

    /// geometric offsets for the near-identity prior.
    /// counts failures, so the smallest offset is 0.
    pub fn prior(p: f64) -> anyhow::Result<Geometric> {
        Geometric::new(p).with_context(|| format!("geometric prior with p = {}", p))
    }

    /// draw one relabeling from the near-identity prior.
    ///
    /// the unassigned ranks sit in an ascending pool. each target rank,
    /// from Two up to Ace, takes the pool element at a geometric offset
    /// (wrapped by the pool size) and removes it. small offsets keep
    /// ranks near themselves; the tail reaches arbitrary reorderings.
    pub fn sample(prior: &Geometric, rng: &mut impl Rng) -> Self {
        let mut pool = Rank::all().to_vec();
        let mut image = Rank::all();
        for target in Rank::all() {
            let offset = prior.sample(rng) % pool.len() as u64;
            image[target as usize] = pool.remove(offset as usize);
        }
        debug_assert!(pool.is_empty());
        Self(image)
    }

    /// get the image of a Rank under a Permutation
    pub fn map(&self, rank: Rank) -> Rank {
        self.0[rank as usize]
    }

    /// a Card keeps its suit and takes its rank's image
    pub fn card(&self, card: Card) -> Card {
        Card::from((self.map(card.rank()), card.suit()))
    }

    /// the image of a hand under a permutation
    /// is the union of its shifted rank nibbles
    pub fn image(&self, hand: &Hand) -> Hand {
        Rank::all()
            .iter()
            .map(|rank| self.shift(rank, hand))
            .fold(Hand::empty(), Hand::add)
    }

    /// every rank appears exactly once as an image
    pub fn is_bijection(&self) -> bool {
        self.0.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b) == 0b1111111111111
    }

    /// the hand here gets filtered by the "old" rank's nibble
    /// and then we bitshift so that it lands in the "new" rank's nibble
    /// e.g. all Twos -> all Threes is a shift of 4 bits
    fn shift(&self, rank: &Rank, hand: &Hand) -> Hand {
        let old = *rank;
        let new = self.map(old);
        let shift = 4 * (new as i8 - old as i8);
        let cards = u64::from(old) & u64::from(*hand);
        if shift >= 0 {
            Hand::from(cards << shift as u32)
        } else {
            Hand::from(cards >> shift.unsigned_abs() as u32)
        }
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let ref prior = Self::prior(crate::GEOMETRIC_P).expect("valid default prior");
        Self::sample(prior, rng)
    }
}

/// str isomorphism
/// the images of 2 through A, in order: "32456789TJQKA" swaps 2 and 3
impl TryFrom<&str> for Permutation {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let ranks = s
            .trim()
            .chars()
            .map(|c| Rank::try_from(c.to_string().as_str()))
            .collect::<Result<Vec<Rank>, _>>()?;
        let ranks = <[Rank; 13]>::try_from(ranks)
            .map_err(|v| format!("permutation needs 13 ranks, got {}", v.len()))?;
        let permutation = Self(ranks);
        match permutation.is_bijection() {
            true => Ok(permutation),
            false => Err(format!("repeated rank in permutation {}", s)),
        }
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0 {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
