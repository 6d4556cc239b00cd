//! Permission guards for arbitrary operations.
//!
//! # Module Structure
//!
//! - `authorizer` - `Authorizer`, `Guard` and `Guarded`
//! - `config` - Collaborator traits (IdentityLoader, TryIdentityLoader, Requirement, ForbiddenHandler)
//! - `operation` - Arity-independent calling convention and operation metadata
//! - `requirement` - Requirement combinators (permit_all, deny_all, and, or, not)
//!
//! # Flow
//!
//! ```text
//! guarded.call(args)
//!   -> identity_loader()
//!        Err(e) -> Err(e)          (fallible loaders only)
//!   -> requirement(&identity)
//!        true  -> operation(args)
//!        false -> on_forbidden()
//! ```

pub use authorizer::{Authorizer, Guard, Guarded};
pub use config::{
    fallible, reject, Fallible, ForbiddenHandler, IdentityLoader, LoadError, LoadFailure,
    NeverFails, Reject, Requirement, TryIdentityLoader,
};
pub use operation::{Operation, OperationMeta};
pub use requirement::{
    all_of, any_of, deny_all, permit_all, AllOf, And, AnyOf, DenyAll, Not, Or, PermitAll,
    RequirementExt,
};

pub mod authorizer;
pub mod config;
pub mod operation;
pub mod requirement;
