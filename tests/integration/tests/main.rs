//! Mock-server integration tests.
//!
//! Every test spins up an [`httpmock::MockServer`] standing in for a
//! RapidIdentity tenant, points a client at it and asserts the request
//! shape (method, path, query, headers, body) alongside the decoded
//! response.

mod common;

mod authn;
mod bootstrap;
mod connect;
mod reporting;
mod session;
mod users;
