use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The mean/stdev ratio of a player's score sample.
///
/// A sample with zero variance has no defined ratio. It is carried as
/// `Undefined` rather than as an infinite or NaN value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ratio {
    Defined(Decimal),
    Undefined,
}

impl Ratio {
    /// Returns the ratio value, or `None` when it is undefined.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Ratio::Defined(value) => Some(*value),
            Ratio::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Ratio::Defined(_))
    }

    /// Ranking order: highest defined ratio first, undefined ratios last.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Ratio::Defined(a), Ratio::Defined(b)) => b.cmp(a),
            (Ratio::Defined(_), Ratio::Undefined) => Ordering::Less,
            (Ratio::Undefined, Ratio::Defined(_)) => Ordering::Greater,
            (Ratio::Undefined, Ratio::Undefined) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn higher_ratio_ranks_first() {
        let high = Ratio::Defined(dec!(3.85));
        let low = Ratio::Defined(dec!(1.20));
        assert_eq!(high.rank_cmp(&low), Ordering::Less);
        assert_eq!(low.rank_cmp(&high), Ordering::Greater);
        assert_eq!(high.rank_cmp(&high), Ordering::Equal);
    }

    #[test]
    fn undefined_ratio_ranks_after_any_defined_ratio() {
        let zero = Ratio::Defined(dec!(0.00));
        assert_eq!(Ratio::Undefined.rank_cmp(&zero), Ordering::Greater);
        assert_eq!(zero.rank_cmp(&Ratio::Undefined), Ordering::Less);
        assert_eq!(Ratio::Undefined.rank_cmp(&Ratio::Undefined), Ordering::Equal);
    }

    #[test]
    fn value_exposes_only_defined_ratios() {
        assert_eq!(Ratio::Defined(dec!(2.50)).value(), Some(dec!(2.50)));
        assert_eq!(Ratio::Undefined.value(), None);
        assert!(!Ratio::Undefined.is_defined());
    }
}
