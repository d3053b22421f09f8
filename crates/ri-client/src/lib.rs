//! # ri-client
//!
//! Async client for the Identity Automation RapidIdentity REST API.
//!
//! A [`Client`] is built from [`Options`] with either a service identity
//! key or user credentials. With credentials, construction logs in and the
//! resulting session token authorizes every request until [`Client::close`]
//! revokes it. One method is exposed per REST endpoint; wire shapes live in
//! [`ri_model`], re-exported here as [`model`].
//!
//! ```no_run
//! use ri_client::{Client, GetConnectFilesInput, Options};
//! use url::Url;
//!
//! # async fn run() -> ri_client::Result<()> {
//! let options = Options {
//!     base_url: Some(Url::parse("https://portal.us001-rapididentity.com").unwrap()),
//!     service_identity: "service_identity_key".to_string(),
//!     ..Options::default()
//! };
//! let client = Client::new(options).await?;
//!
//! let files = client
//!     .get_connect_files(GetConnectFilesInput {
//!         path: "/".to_string(),
//!         project: "sec_mgr".to_string(),
//!         ..GetConnectFilesInput::default()
//!     })
//!     .await?;
//! println!("{} entries", files.file_entries.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

mod authn;
mod bootstrap;
mod client;
mod connect;
mod error;
mod reporting;
mod users;

pub use ri_model as model;

pub use authn::GetAuthenticationPoliciesForUserInput;
pub use client::{Client, Options, DEFAULT_USER_AGENT, MAIN_PROJECT};
pub use connect::{
    GetConnectActionsInput, GetConnectFileContentInput, GetConnectFileContentZipInput,
    GetConnectFilesInput, GetConnectJobsInput, SearchConnectActionSetsInput,
};
pub use error::{Error, Result};
pub use reporting::RunAuditReportInput;
pub use users::{GetDelegationsForUserInput, GetUserByIdInput, RunUserQueryInput};
