//! Delegation and profile shapes for the aggregated-profiles endpoint.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Output of delegations and profiles for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDelegationsForUserOutput {
    /// Full list of delegations and profiles for a user. Only contains
    /// entries accessible by the invoking session.
    pub aggregated_delegation: AggregatedDelegation,
}

/// Aggregated delegations and profiles for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatedDelegation {
    /// `idautoID` of the user.
    pub id: String,

    /// Base user information.
    pub user: User,

    /// Helpdesk questions for the user.
    pub helpdesk_questions: Vec<String>,

    /// Profiles and delegations the invoking session has access to.
    pub delegation_profiles: Vec<DelegationProfile>,
}

/// One delegation with the matching profile view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationProfile {
    /// Delegation visible to the invoking session.
    pub delegation: Delegation,

    /// Profile visible to the invoking session.
    pub profile: Profile,
}

/// A delegation definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Delegation {
    /// Id of the delegation.
    pub id: String,

    /// Name of the delegation.
    pub name: String,

    /// Type of delegation, `MY` or `CUSTOM`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The base OU searched for who has access to view this delegation.
    #[serde(rename = "sourceBaseDN")]
    pub source_base_dn: String,

    /// The base OU searched for the LDAP objects shown in the delegation
    /// view.
    #[serde(rename = "targetBaseDN")]
    pub target_base_dn: String,

    /// Attributes associated with the delegation.
    pub attributes: Vec<DelegationAttribute>,

    /// The image in the profile layout.
    pub layout_image: String,

    /// The attribute shown in position 1 of the profile layout.
    pub layout1: String,

    /// The attribute shown in position 2 of the profile layout.
    pub layout2: String,

    /// The attribute shown in position 3 of the profile layout.
    pub layout3: String,

    /// The actions associated with the delegation.
    pub actions: Vec<DelegationAction>,
}

/// A user profile as exposed by a delegation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// The `idautoID` of the user.
    pub id: String,

    /// The attributes and values associated with the user's profile.
    pub attributes: Vec<ProfileAttribute>,
}

/// An attribute configured on a delegation view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DelegationAttribute {
    /// The GAL item backing the delegation attribute.
    pub gal_item: GalItem,

    /// The name of the attribute for the delegation.
    pub name: String,

    /// Whether the attribute is editable.
    pub editable: bool,

    /// Whether the attribute appears in the table view of a delegation.
    pub show_in_list: bool,

    /// Whether the attribute appears in the details of a delegation.
    pub show_in_details: bool,

    /// Whether the attribute is required in the delegation view.
    pub required: bool,
}

/// A global address list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalItem {
    /// The id of the GAL item attribute.
    pub id: String,

    /// The friendly name for the GAL item attribute.
    pub friendly_name: String,

    /// Whether the attribute accepts multiple values.
    pub allow_multi_value: bool,

    /// The type of the attribute.
    #[serde(rename = "type")]
    pub kind: String,
}

/// An action available on a delegation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationAction {
    /// The id of the action.
    pub id: String,

    /// The action friendly name.
    pub name: String,

    /// The action description.
    pub description: String,
}

/// One attribute of a user profile with its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileAttribute {
    /// The id of the GAL item.
    pub id: String,

    /// The GAL item friendly name.
    pub name: String,

    /// The value(s) of the attribute for the user.
    pub values: Vec<String>,
}
