//! First-class invariants for Quarto boards and games.
//!
//! Every successful selection, placement and rollback is followed by a check
//! of [`GameInvariants`] in debug builds.

/// A state property checked after every transition.
pub trait Invariant<S> {
    /// Returns whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Names the property in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

fn check<S, I: Invariant<S>>(state: &S) -> Option<InvariantViolation> {
    (!I::holds(state)).then(|| InvariantViolation {
        description: I::description(),
    })
}

/// Invariants checked as one unit; implemented for pairs and triples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [$(check::<S, $member>(state)),+]
                    .into_iter()
                    .flatten()
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod role_exclusivity;
pub mod selection_exclusive;
pub mod token_conservation;

pub use role_exclusivity::RoleExclusivityInvariant;
pub use selection_exclusive::SelectionExclusiveInvariant;
pub use token_conservation::TokenConservationInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (TokenConservationInvariant, SelectionExclusiveInvariant);

/// All game invariants as a composable set.
pub type GameInvariants = (
    TokenConservationInvariant,
    SelectionExclusiveInvariant,
    RoleExclusivityInvariant,
);
