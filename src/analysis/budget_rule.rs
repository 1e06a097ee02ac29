//! The 50/30/20 budget rule

use serde::Serialize;

use crate::models::Money;

pub const NEEDS_SHARE_PERCENT: i64 = 50;
pub const WANTS_SHARE_PERCENT: i64 = 30;
pub const SAVINGS_SHARE_PERCENT: i64 = 20;

/// Ideal allocation of a monthly income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdealBudget {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

impl IdealBudget {
    /// Split `monthly_income` 50/30/20
    ///
    /// Savings takes the rounding remainder so the three parts always add up
    /// to the income exactly.
    pub fn from_income(monthly_income: Money) -> Self {
        let needs = monthly_income.scale(NEEDS_SHARE_PERCENT, 100);
        let wants = monthly_income.scale(WANTS_SHARE_PERCENT, 100);
        Self {
            needs,
            wants,
            savings: monthly_income - needs - wants,
        }
    }

    pub fn total(&self) -> Money {
        self.needs + self.wants + self.savings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let ideal = IdealBudget::from_income(Money::from_units(10_000_000));
        assert_eq!(ideal.needs, Money::from_units(5_000_000));
        assert_eq!(ideal.wants, Money::from_units(3_000_000));
        assert_eq!(ideal.savings, Money::from_units(2_000_000));
    }

    #[test]
    fn test_parts_sum_to_income() {
        for minor in [0, 1, 7, 333, 999_999, 123_456_789] {
            let income = Money::from_minor(minor);
            assert_eq!(IdealBudget::from_income(income).total(), income);
        }
    }

    #[test]
    fn test_zero_income() {
        let ideal = IdealBudget::from_income(Money::zero());
        assert!(ideal.needs.is_zero() && ideal.wants.is_zero() && ideal.savings.is_zero());
    }

    #[test]
    fn test_largest_accepted_income() {
        let income = Money::from_units(crate::models::money::MAX_PARSE_UNITS);
        let ideal = IdealBudget::from_income(income);

        assert_eq!(ideal.needs, income.scale(1, 2));
        assert_eq!(ideal.total(), income);
    }

    #[test]
    fn test_extreme_income_does_not_overflow() {
        for minor in [i64::MAX, i64::MAX - 1, i64::MIN + 1, -1] {
            let income = Money::from_minor(minor);
            let ideal = IdealBudget::from_income(income);
            assert_eq!(ideal.needs, income.scale(50, 100));
            assert_eq!(ideal.wants, income.scale(30, 100));
        }
    }
}
