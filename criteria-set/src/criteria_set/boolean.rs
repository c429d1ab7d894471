use std::ops::Not;

use super::CriteriaSet;

impl<T, S> PartialEq<bool> for CriteriaSet<T, S> {
    fn eq(&self, check: &bool) -> bool {
        self.equals_aggregate(*check)
    }
}

impl<T, S> PartialEq<CriteriaSet<T, S>> for bool {
    fn eq(&self, criteria: &CriteriaSet<T, S>) -> bool {
        criteria.equals_aggregate(*self)
    }
}

impl<T, S> From<&CriteriaSet<T, S>> for bool {
    fn from(criteria: &CriteriaSet<T, S>) -> Self {
        criteria.aggregate()
    }
}

impl<T, S> Not for &CriteriaSet<T, S> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_empty()
    }
}
