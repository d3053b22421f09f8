//! The RapidIdentity user shape shared across endpoints.

use serde::{Deserialize, Serialize};

/// A RapidIdentity user.
///
/// Returned directly by the user lookup and query endpoints and embedded in
/// sessions, delegations and policy responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// `idautoID` of the user.
    pub id: String,

    /// Distinguished Name of the user.
    pub dn: String,

    /// Username of the user.
    pub username: String,

    /// First name of the user.
    pub first_name: String,

    /// Last name of the user.
    pub last_name: String,

    /// Email address of the user.
    pub email: String,

    /// Distinguisher displayed next to the user where names collide.
    pub distinguisher: String,

    /// Image URL of the user.
    pub image_url: String,

    /// Mobile numbers for the user.
    pub mobile_numbers: Vec<String>,

    /// Alternate email address for the user.
    pub alternate_email: String,
}
