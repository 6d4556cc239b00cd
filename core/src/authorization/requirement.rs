//! Requirement combinators.
//!
//! Small building blocks for composing requirements out of plain predicates,
//! in the spirit of `permitAll()`, `denyAll()`, `AND`, `OR` and `NOT` in
//! method-security expressions.
//!
//! # Example
//! ```
//! use actix_authorizer_core::authorization::{Requirement, RequirementExt};
//!
//! let is_manager = |roles: &Vec<&str>| roles.contains(&"manager");
//! let is_admin = |roles: &Vec<&str>| roles.contains(&"admin");
//! let is_guest = |roles: &Vec<&str>| roles.contains(&"guest");
//!
//! let staff = is_manager.or(is_admin).and(is_guest.not());
//!
//! assert!(staff.is_satisfied_by(&vec!["manager"]));
//! assert!(!staff.is_satisfied_by(&vec!["admin", "guest"]));
//! ```

use crate::authorization::config::Requirement;

/// Requirement satisfied by every identity.
///
/// # Spring Security Equivalent
/// `permitAll()`
#[derive(Clone, Copy, Debug, Default)]
pub struct PermitAll;

/// Requirement satisfied by no identity.
///
/// # Spring Security Equivalent
/// `denyAll()`
#[derive(Clone, Copy, Debug, Default)]
pub struct DenyAll;

/// Returns a requirement that grants access to every identity.
pub fn permit_all() -> PermitAll {
    PermitAll
}

/// Returns a requirement that denies access to every identity.
pub fn deny_all() -> DenyAll {
    DenyAll
}

impl<I: ?Sized> Requirement<I> for PermitAll {
    fn is_satisfied_by(&self, _identity: &I) -> bool {
        true
    }
}

impl<I: ?Sized> Requirement<I> for DenyAll {
    fn is_satisfied_by(&self, _identity: &I) -> bool {
        false
    }
}

/// Both requirements must hold. Short-circuits on the left one.
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(A, B);

/// Either requirement must hold. Short-circuits on the left one.
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(A, B);

/// Negates a requirement.
#[derive(Clone, Copy, Debug)]
pub struct Not<A>(A);

impl<I: ?Sized, A, B> Requirement<I> for And<A, B>
where
    A: Requirement<I>,
    B: Requirement<I>,
{
    fn is_satisfied_by(&self, identity: &I) -> bool {
        self.0.is_satisfied_by(identity) && self.1.is_satisfied_by(identity)
    }
}

impl<I: ?Sized, A, B> Requirement<I> for Or<A, B>
where
    A: Requirement<I>,
    B: Requirement<I>,
{
    fn is_satisfied_by(&self, identity: &I) -> bool {
        self.0.is_satisfied_by(identity) || self.1.is_satisfied_by(identity)
    }
}

impl<I: ?Sized, A> Requirement<I> for Not<A>
where
    A: Requirement<I>,
{
    fn is_satisfied_by(&self, identity: &I) -> bool {
        !self.0.is_satisfied_by(identity)
    }
}

/// Combinator methods available on every requirement.
pub trait RequirementExt<I: ?Sized>: Requirement<I> + Sized {
    /// Requires both `self` and `other`.
    fn and<B: Requirement<I>>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    /// Requires `self` or `other`.
    fn or<B: Requirement<I>>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    /// Requires that `self` does not hold.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<I: ?Sized, R: Requirement<I>> RequirementExt<I> for R {}

/// Requirement satisfied when any of a list of requirements holds.
///
/// An empty list is never satisfied.
pub struct AnyOf<I: ?Sized>(Vec<Box<dyn Requirement<I> + Send + Sync>>);

/// Requirement satisfied when every requirement of a list holds.
///
/// An empty list is always satisfied.
pub struct AllOf<I: ?Sized>(Vec<Box<dyn Requirement<I> + Send + Sync>>);

/// Builds an [`AnyOf`] requirement.
pub fn any_of<I: ?Sized>(requirements: Vec<Box<dyn Requirement<I> + Send + Sync>>) -> AnyOf<I> {
    AnyOf(requirements)
}

/// Builds an [`AllOf`] requirement.
pub fn all_of<I: ?Sized>(requirements: Vec<Box<dyn Requirement<I> + Send + Sync>>) -> AllOf<I> {
    AllOf(requirements)
}

impl<I: ?Sized> Requirement<I> for AnyOf<I> {
    fn is_satisfied_by(&self, identity: &I) -> bool {
        self.0.iter().any(|r| r.is_satisfied_by(identity))
    }
}

impl<I: ?Sized> Requirement<I> for AllOf<I> {
    fn is_satisfied_by(&self, identity: &I) -> bool {
        self.0.iter().all(|r| r.is_satisfied_by(identity))
    }
}
