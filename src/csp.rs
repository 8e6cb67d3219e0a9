//! Trait defining constraint satisfaction problems for backtracking search.
//!
//! A problem owns a single partial assignment that the solver mutates in place.
//! Backtracking works by undoing: every `assign` on a failing path is matched
//! by an `unassign` before the solver gives up on it. No copy of the problem is
//! ever made.

use std::fmt::Debug;

/// Trait defining the interface of a finite-domain constraint problem
///
/// # Example
///
/// Three mutually adjacent regions coloured with three colours:
///
/// ```
/// use classical_search::{BacktrackingSolver, CspProblem};
///
/// struct Triangle([Option<u8>; 3]);
///
/// impl CspProblem for Triangle {
///     type Variable = usize;
///     type Value = u8;
///
///     fn variables(&self) -> Vec<usize> {
///         (0..3).filter(|v| self.0[*v].is_none()).collect()
///     }
///
///     fn domain(&self, var: usize) -> Vec<u8> {
///         (0..3)
///             .filter(|colour| {
///                 (0..3).all(|other| other == var || self.0[other] != Some(*colour))
///             })
///             .collect()
///     }
///
///     fn assign(&mut self, var: usize, value: u8) {
///         self.0[var] = Some(value);
///     }
///
///     fn unassign(&mut self, var: usize) {
///         self.0[var] = None;
///     }
///
///     fn is_complete(&self) -> bool {
///         self.0.iter().all(Option::is_some)
///     }
/// }
///
/// let mut problem = Triangle([None; 3]);
/// assert!(BacktrackingSolver::default().solve(&mut problem));
/// assert_eq!(problem.0, [Some(0), Some(1), Some(2)]);
/// ```
pub trait CspProblem {
    /// Identifies a variable of the problem
    type Variable: Copy + Debug + PartialEq;

    /// A value a variable can take
    type Value: Copy + Debug + Ord;

    /// Returns the currently unassigned variables in the problem's natural order
    fn variables(&self) -> Vec<Self::Variable>;

    /// Returns the values of `var` consistent with the current partial assignment
    ///
    /// The domain is recomputed from the assignment on every call. An empty
    /// domain marks a dead end, not an error.
    fn domain(&self, var: Self::Variable) -> Vec<Self::Value>;

    /// Sets `var` to `value`
    ///
    /// Callers only pass values taken from [`domain`](CspProblem::domain).
    fn assign(&mut self, var: Self::Variable, value: Self::Value);

    /// Clears `var` back to the unassigned state
    fn unassign(&mut self, var: Self::Variable);

    /// Returns true if no variable remains unassigned
    fn is_complete(&self) -> bool;

    /// Checks constraints that [`domain`](CspProblem::domain) does not encode
    ///
    /// Problems whose domains already exclude every conflict can keep the
    /// default, which accepts everything.
    fn is_consistent(&self, _var: Self::Variable, _value: Self::Value) -> bool {
        true
    }
}
