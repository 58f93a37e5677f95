use super::hand::Hand;

/// Iterates over every n-card Hand that avoids a mask of blocked cards.
///
/// Walks n-bit subsets of the 52-card bitstring in increasing numeric
/// order (Gosper's hack), skipping any subset that touches the mask.
/// Deterministic, allocation-free, and never stores more than one Hand.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    fn exhausted(&self) -> bool {
        self.next == 0 || (64 - 52) > self.next.leading_zeros()
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction.
/// a mask that leaves fewer than n cards yields an empty iterator.
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mask = u64::from(mask);
        if n == 0 || n > 52 - mask.count_ones() as usize {
            return Self { next: 0, mask };
        }
        let mut this = Self {
            next: (1 << n) - 1,
            mask,
        };
        if this.next & this.mask != 0 {
            this.advance();
        }
        this
    }
}
