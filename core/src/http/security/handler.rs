//! Guarded operations as Actix Web handlers.
//!
//! A [`Guarded`] wrapping an Actix Web handler is itself a handler with the
//! same extractors, so it can be routed exactly like the bare handler:
//!
//! ```ignore
//! let can_delete = authorizer.requires_permission(user_can_delete_project);
//!
//! App::new().route(
//!     "/delete_project/{project_id}/",
//!     web::get().to(can_delete.protect(delete_project)),
//! )
//! ```
//!
//! Extraction runs first, as for any handler. The identity is then loaded and
//! the requirement checked; the wrapped handler is only called when it holds.
//! With a [`fallible`](crate::authorization::fallible) loader, a failed load
//! is answered with the loader's error (e.g. `AuthError::Unauthorized`).

use actix_web::Handler;
use futures_util::future::{ready, Either, Ready};

use crate::authorization::{ForbiddenHandler, Guarded, LoadFailure, Requirement, TryIdentityLoader};

impl<F, Args, L, D, R> Handler<Args> for Guarded<F, L, D, R>
where
    F: Handler<Args>,
    L: TryIdentityLoader + 'static,
    R: Requirement<L::Identity> + 'static,
    D: ForbiddenHandler<F::Output> + 'static,
    L::Failure: LoadFailure<F::Output>,
{
    type Output = F::Output;
    type Future = Either<F::Future, Ready<F::Output>>;

    fn call(&self, args: Args) -> Self::Future {
        match self.guard().authorize(self.name()) {
            Ok(()) => Either::Left(self.operation().call(args)),
            Err(outcome) => Either::Right(ready(outcome)),
        }
    }
}
