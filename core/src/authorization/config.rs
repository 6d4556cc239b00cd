//! Collaborator traits for the authorizer.
//!
//! Each role the [`Authorizer`](super::Authorizer) delegates to is a single
//! method trait. Plain closures implement all of them, so most callers never
//! name these traits directly.

/// Produces the current actor.
///
/// Called once per guarded invocation. The identity is opaque to the
/// authorizer: it is handed by reference to the requirement and dropped.
///
/// # Implementation Note
/// A loader that cannot produce an identity should either return a value the
/// requirement rejects (`None`, an anonymous user) or panic. A panic is never
/// caught here.
pub trait IdentityLoader {
    /// The type of the current actor.
    type Identity;

    /// Loads the identity of the current actor.
    fn load(&self) -> Self::Identity;
}

impl<F, I> IdentityLoader for F
where
    F: Fn() -> I,
{
    type Identity = I;

    fn load(&self) -> I {
        (self)()
    }
}

/// Loads the current actor, possibly failing.
///
/// This is what the [`Authorizer`](super::Authorizer) actually calls. Every
/// [`IdentityLoader`] is one that never fails; wrap a loader returning
/// `Result<I, E>` in [`fallible`] to have its errors returned to the caller
/// instead of being handed to the requirement.
pub trait TryIdentityLoader {
    /// The type of the current actor.
    type Identity;
    /// What a failed load produces, see [`LoadFailure`].
    type Failure;

    /// Loads the identity of the current actor.
    fn try_load(&self) -> Result<Self::Identity, Self::Failure>;
}

impl<L> TryIdentityLoader for L
where
    L: IdentityLoader,
{
    type Identity = L::Identity;
    type Failure = NeverFails;

    fn try_load(&self) -> Result<L::Identity, NeverFails> {
        Ok(self.load())
    }
}

/// Identity loader whose errors short-circuit the guarded call.
///
/// When the wrapped loader returns `Err(e)`, neither the requirement nor the
/// forbidden handler runs and the guarded call returns `Err(e.into())`.
/// Only operations returning `Result` can be guarded this way.
///
/// # Example
/// ```
/// use actix_authorizer_core::authorization::{fallible, reject, Authorizer};
///
/// #[derive(Debug, PartialEq)]
/// enum Error {
///     Unauthorized,
///     Forbidden,
/// }
///
/// let authorizer = Authorizer::new(
///     fallible(|| Err::<&str, _>(Error::Unauthorized)),
///     reject(|| Error::Forbidden),
/// );
/// let guard = authorizer.requires_permission(|user: &&str| *user == "admin");
///
/// let result: Result<u32, Error> = guard.run(|| Ok(42));
/// assert_eq!(result, Err(Error::Unauthorized));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(F);

/// Wraps a loader returning `Result<I, E>`, see [`Fallible`].
pub fn fallible<F>(loader: F) -> Fallible<F> {
    Fallible(loader)
}

impl<F, I, E> TryIdentityLoader for Fallible<F>
where
    F: Fn() -> Result<I, E>,
{
    type Identity = I;
    type Failure = LoadError<E>;

    fn try_load(&self) -> Result<I, LoadError<E>> {
        (self.0)().map_err(LoadError)
    }
}

/// Turns a failed identity load into the guarded operation's outcome.
pub trait LoadFailure<Out> {
    fn into_outcome(self) -> Out;
}

/// Failure of a loader that cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeverFails {}

impl<Out> LoadFailure<Out> for NeverFails {
    fn into_outcome(self) -> Out {
        match self {}
    }
}

/// Error returned by a [`Fallible`] loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError<E>(pub E);

impl<T, E, Err> LoadFailure<Result<T, Err>> for LoadError<E>
where
    E: Into<Err>,
{
    fn into_outcome(self) -> Result<T, Err> {
        Err(self.0.into())
    }
}

/// Decides whether an identity may perform an operation.
///
/// Requirements are expected to be side-effect free. They run on every
/// guarded call, denied attempts included.
pub trait Requirement<I: ?Sized> {
    /// Returns `true` when access is granted.
    fn is_satisfied_by(&self, identity: &I) -> bool;
}

impl<F, I> Requirement<I> for F
where
    F: Fn(&I) -> bool,
    I: ?Sized,
{
    fn is_satisfied_by(&self, identity: &I) -> bool {
        (self)(identity)
    }
}

/// Produces the outcome of a denied call.
///
/// `Out` is the return type of the guarded operation: whatever this handler
/// produces is returned to the caller in place of the operation's result.
pub trait ForbiddenHandler<Out> {
    /// Builds the outcome of a denied call.
    fn forbidden(&self) -> Out;
}

impl<F, D, Out> ForbiddenHandler<Out> for F
where
    F: Fn() -> D,
    D: Into<Out>,
{
    fn forbidden(&self) -> Out {
        (self)().into()
    }
}

/// Forbidden handler for fallible operations.
///
/// Wraps an error factory and answers every `Result<T, E>` output with
/// `Err(error.into())`, whatever `T` is. One authorizer configured with a
/// `Reject` can therefore guard operations returning `Result<String, _>`,
/// `Result<HttpResponse, _>` and so on.
///
/// # Example
/// ```
/// use actix_authorizer_core::authorization::{reject, Authorizer};
///
/// #[derive(Debug, PartialEq)]
/// struct Denied;
///
/// let authorizer = Authorizer::new(|| "guest", reject(|| Denied));
/// let guard = authorizer.requires_permission(|user: &&str| *user == "admin");
///
/// let result: Result<u32, Denied> = guard.run(|| Ok(42));
/// assert_eq!(result, Err(Denied));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Reject<F>(F);

impl<F> Reject<F> {
    /// Creates a forbidden handler answering with `Err(f())`.
    pub fn new(f: F) -> Self {
        Reject(f)
    }
}

/// Shorthand for [`Reject::new`].
pub fn reject<F>(f: F) -> Reject<F> {
    Reject::new(f)
}

impl<F, E, T, Err> ForbiddenHandler<Result<T, Err>> for Reject<F>
where
    F: Fn() -> E,
    E: Into<Err>,
{
    fn forbidden(&self) -> Result<T, Err> {
        Err((self.0)().into())
    }
}
