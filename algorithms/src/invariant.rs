/// Precondition predicate over an input sequence.
pub trait Invariant<T: ?Sized> {
    /// Index of the first element that breaks the invariant, if any.
    fn first_violation(&self, value: &T) -> Option<usize>;

    fn check(&self, value: &T) -> bool {
        self.first_violation(value).is_none()
    }
}

/// Strictly ascending: sorted with no repeats, as binary search requires.
pub struct StrictlyAscending;

impl<T: Ord> Invariant<[T]> for StrictlyAscending {
    fn first_violation(&self, value: &[T]) -> Option<usize> {
        value.windows(2).position(|w| w[0] >= w[1])
    }
}

/// Every element is >= 0.
pub struct NonNegative;

impl Invariant<[i32]> for NonNegative {
    fn first_violation(&self, value: &[i32]) -> Option<usize> {
        value.iter().position(|&v| v < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_accepts_sorted_distinct() {
        assert!(StrictlyAscending.check(&[-1, 0, 2, 4][..]));
        let empty: [i32; 0] = [];
        assert!(StrictlyAscending.check(&empty[..]));
    }

    #[test]
    fn ascending_reports_first_bad_pair() {
        assert_eq!(StrictlyAscending.first_violation(&[1, 3, 2, 5][..]), Some(1));
        assert_eq!(StrictlyAscending.first_violation(&[1, 2, 2][..]), Some(1));
    }

    #[test]
    fn non_negative_reports_day() {
        assert_eq!(NonNegative.first_violation(&[3, 0, -4, -1][..]), Some(2));
        assert!(NonNegative.check(&[0, 1][..]));
    }
}
