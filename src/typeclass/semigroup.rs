//! Semigroup - failure sequences that can be glued together.
//!
//! `Validation` accumulates failures through this trait: combining two
//! `Invalid` values concatenates their failure sequences, so folding any
//! number of validations never loses a failure.
//!
//! # Laws
//!
//! For all values `a`, `b` and `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::typeclass::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

/// Values that combine associatively into one value of the same type.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements left-to-right with `combine`.
    ///
    /// An empty input has nothing to combine and yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_extras::typeclass::Semigroup;
    ///
    /// let chunks = vec![vec!['a'], vec!['b', 'c'], vec![]];
    /// assert_eq!(Vec::reduce_all(chunks), Some(vec!['a', 'b', 'c']));
    ///
    /// let nothing: Vec<Vec<char>> = Vec::new();
    /// assert_eq!(Vec::reduce_all(nothing), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2], vec![3, 4], vec![1, 2, 3, 4])]
    #[case(vec![1, 2], vec![], vec![1, 2])]
    #[case(vec![], vec![5], vec![5])]
    fn vec_combine_preserves_order(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn reduce_all_folds_left_to_right() {
        let chunks = vec![vec!["x"], vec![], vec!["y", "z"]];
        assert_eq!(Vec::reduce_all(chunks), Some(vec!["x", "y", "z"]));
    }

    #[rstest]
    fn vec_combine_needs_no_clone() {
        struct Token(u8);

        let combined = vec![Token(1)].combine(vec![Token(2), Token(3)]);
        let values: Vec<u8> = combined.into_iter().map(|Token(value)| value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
