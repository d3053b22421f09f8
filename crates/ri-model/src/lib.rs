//! # ri-model
//!
//! Wire models for the RapidIdentity REST API.
//!
//! This crate defines every request and response shape exchanged with a
//! RapidIdentity server, plus the decoding logic for authentication
//! policies. Most types are plain `serde` structs; the interesting part is
//! [`policy`], where the `criteria` and `methods` arrays of a policy are
//! heterogeneous and each element's concrete shape is selected at runtime by
//! its `type` discriminator.
//!
//! Nothing in this crate performs I/O. Values are constructed once from a
//! JSON document and never mutated afterwards.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod audit;
pub mod bootstrap;
pub mod connect;
pub mod delegation;
pub mod policy;
pub mod session;
pub mod user;

mod registry;

pub use policy::{decode_policy, AuthenticationPolicy, PolicyCriteria, PolicyMethod};
pub use user::User;
