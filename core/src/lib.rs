//! # Actix Authorizer Core
//!
//! Permission guards for functions, commands and Actix Web handlers.
//!
//! An [`Authorizer`](authorization::Authorizer) is built from two callbacks:
//! an identity loader returning the current actor and a forbidden handler
//! producing the outcome of a denied call. Each call to
//! [`requires_permission`](authorization::Authorizer::requires_permission)
//! binds a requirement to it and yields a guard; protecting an operation with
//! that guard produces an operation with the same arguments and return type
//! that only runs when the requirement holds.
//!
//! ## Modules
//!
//! - [`authorization`] - The guard itself, independent of any framework
//! - [`http::security`] - Actix Web integration (middleware, context, handlers)
//! - [`http::error`] - Error types

pub mod authorization;
pub mod http;
