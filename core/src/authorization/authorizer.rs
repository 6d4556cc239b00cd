//! The permission guard.

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::authorization::config::{
    ForbiddenHandler, LoadFailure, Requirement, TryIdentityLoader,
};
use crate::authorization::operation::{Operation, OperationMeta};

/// Guards operations behind a permission check.
///
/// Holds the two collaborators of every check: the identity loader and the
/// forbidden handler. Both are mandatory. The authorizer is immutable and
/// cheap to clone; build it once per protection policy and reuse it for
/// every operation that policy covers.
///
/// # Example
/// ```
/// use actix_authorizer_core::authorization::Authorizer;
///
/// struct User {
///     name: &'static str,
///     permissions: Vec<&'static str>,
/// }
///
/// fn load_user() -> User {
///     User { name: "joe", permissions: vec!["view"] }
/// }
///
/// let authorizer = Authorizer::new(load_user, || "403 Forbidden");
///
/// let can_view = authorizer.requires_permission(|u: &User| u.permissions.contains(&"view"));
/// let can_delete = authorizer.requires_permission(|u: &User| u.permissions.contains(&"delete"));
///
/// let view = can_view.protect(|| "Success");
/// let delete = can_delete.protect(|| "Success");
///
/// assert_eq!(view.call(()), "Success");
/// assert_eq!(delete.call(()), "403 Forbidden");
/// ```
pub struct Authorizer<L, D> {
    inner: Arc<AuthorizerInner<L, D>>,
}

struct AuthorizerInner<L, D> {
    identity_loader: L,
    on_forbidden: D,
}

impl<L, D> Authorizer<L, D>
where
    L: TryIdentityLoader,
{
    /// Creates an authorizer from an identity loader and a forbidden handler.
    pub fn new(identity_loader: L, on_forbidden: D) -> Self {
        Authorizer {
            inner: Arc::new(AuthorizerInner {
                identity_loader,
                on_forbidden,
            }),
        }
    }

    /// Builds a guard enforcing `requirement`.
    ///
    /// Nothing is loaded or evaluated here. The identity is loaded, and the
    /// requirement checked, every time an operation protected by the
    /// returned guard is called.
    pub fn requires_permission<R>(&self, requirement: R) -> Guard<L, D, R>
    where
        R: Requirement<L::Identity>,
    {
        Guard {
            authorizer: self.clone(),
            requirement: Arc::new(requirement),
        }
    }

    /// Loads the current identity and evaluates `requirement` against it.
    ///
    /// A failed load is returned as is; the requirement never sees it.
    fn check<R>(&self, requirement: &R) -> Result<bool, L::Failure>
    where
        R: Requirement<L::Identity> + ?Sized,
    {
        let identity = self.inner.identity_loader.try_load()?;
        Ok(requirement.is_satisfied_by(&identity))
    }

    fn forbidden<Out>(&self) -> Out
    where
        D: ForbiddenHandler<Out>,
    {
        self.inner.on_forbidden.forbidden()
    }
}

impl<L, D> Clone for Authorizer<L, D> {
    fn clone(&self) -> Self {
        Authorizer {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A requirement bound to an [`Authorizer`].
///
/// Apply it to operations with [`protect`](Guard::protect), or run a body
/// under it directly with [`run`](Guard::run) / [`run_async`](Guard::run_async).
pub struct Guard<L, D, R> {
    authorizer: Authorizer<L, D>,
    requirement: Arc<R>,
}

impl<L, D, R> Guard<L, D, R>
where
    L: TryIdentityLoader,
    R: Requirement<L::Identity>,
{
    /// Wraps `operation` so that every call goes through this guard.
    ///
    /// The returned [`Guarded`] takes the same arguments and returns the same
    /// type as `operation`.
    pub fn protect<F>(&self, operation: F) -> Guarded<F, L, D, R> {
        Guarded {
            guard: self.clone(),
            operation,
            meta: OperationMeta::of::<F>(),
        }
    }

    /// Runs `operation` if the current identity satisfies the requirement,
    /// the forbidden handler otherwise.
    pub fn run<T, F>(&self, operation: F) -> T
    where
        F: FnOnce() -> T,
        D: ForbiddenHandler<T>,
        L::Failure: LoadFailure<T>,
    {
        match self.authorize(std::any::type_name::<F>()) {
            Ok(()) => operation(),
            Err(outcome) => outcome,
        }
    }

    /// Async counterpart of [`run`](Guard::run).
    ///
    /// The check happens when the returned future is first polled; a denied
    /// `operation` is dropped without being polled.
    pub async fn run_async<Fut>(&self, operation: Fut) -> Fut::Output
    where
        Fut: Future,
        D: ForbiddenHandler<Fut::Output>,
        L::Failure: LoadFailure<Fut::Output>,
    {
        match self.authorize(std::any::type_name::<Fut>()) {
            Ok(()) => operation.await,
            Err(outcome) => outcome,
        }
    }

    /// Returns `true` if the current identity satisfies the requirement.
    ///
    /// A failed identity load counts as not permitted.
    pub fn permits(&self) -> bool {
        matches!(self.authorizer.check(self.requirement.as_ref()), Ok(true))
    }

    /// Runs the check for one call of `operation`.
    ///
    /// `Err` carries the outcome to return instead of calling the operation:
    /// the load failure, or the forbidden handler's value.
    pub(crate) fn authorize<Out>(&self, operation: &str) -> Result<(), Out>
    where
        D: ForbiddenHandler<Out>,
        L::Failure: LoadFailure<Out>,
    {
        match self.authorizer.check(self.requirement.as_ref()) {
            Ok(true) => {
                debug!(operation, "access granted");
                Ok(())
            }
            Ok(false) => {
                debug!(operation, "access denied");
                Err(self.authorizer.forbidden())
            }
            Err(failure) => {
                debug!(operation, "identity load failed");
                Err(failure.into_outcome())
            }
        }
    }
}

impl<L, D, R> Clone for Guard<L, D, R> {
    fn clone(&self) -> Self {
        Guard {
            authorizer: self.authorizer.clone(),
            requirement: Arc::clone(&self.requirement),
        }
    }
}

/// An operation protected by a [`Guard`].
///
/// Calling it loads the identity, evaluates the requirement, then either
/// calls the wrapped operation with the caller's arguments or returns the
/// forbidden handler's outcome. Never both.
pub struct Guarded<F, L, D, R> {
    guard: Guard<L, D, R>,
    operation: F,
    meta: OperationMeta,
}

impl<F, L, D, R> Guarded<F, L, D, R>
where
    L: TryIdentityLoader,
    R: Requirement<L::Identity>,
{
    /// Calls the guarded operation with a tuple of arguments.
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: Operation<Args>,
        D: ForbiddenHandler<F::Output>,
        L::Failure: LoadFailure<F::Output>,
    {
        match self.guard.authorize(self.meta.get_name()) {
            Ok(()) => self.operation.invoke(args),
            Err(outcome) => outcome,
        }
    }

    /// Overrides the operation name recorded in the metadata.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.set_name(name.into());
        self
    }

    /// Attaches documentation to the metadata.
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.meta = self.meta.doc(doc);
        self
    }

    /// Returns the name of the wrapped operation.
    pub fn name(&self) -> &str {
        self.meta.get_name()
    }

    /// Returns the documentation of the wrapped operation, if any.
    pub fn doc(&self) -> Option<&str> {
        self.meta.get_doc()
    }

    /// Returns the metadata of the wrapped operation.
    pub fn meta(&self) -> &OperationMeta {
        &self.meta
    }

    /// Returns the guard checked on every call.
    pub fn guard(&self) -> &Guard<L, D, R> {
        &self.guard
    }

    pub(crate) fn operation(&self) -> &F {
        &self.operation
    }
}

impl<F, L, D, R, Args> Operation<Args> for Guarded<F, L, D, R>
where
    F: Operation<Args>,
    L: TryIdentityLoader,
    R: Requirement<L::Identity>,
    D: ForbiddenHandler<F::Output>,
    L::Failure: LoadFailure<F::Output>,
{
    type Output = F::Output;

    fn invoke(&self, args: Args) -> F::Output {
        self.call(args)
    }
}

impl<F, L, D, R> Clone for Guarded<F, L, D, R>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Guarded {
            guard: self.guard.clone(),
            operation: self.operation.clone(),
            meta: self.meta.clone(),
        }
    }
}
