//! Authentication policy lookup.

use reqwest::Method;
use ri_model::policy::{
    GetAuthenticationPoliciesForUserOutput, GetAuthenticationPoliciesForUserPayload,
};

use crate::client::{bool_param, Client};
use crate::error::Result;

/// Input for retrieving authentication policies for a user.
#[derive(Debug, Clone, Default)]
pub struct GetAuthenticationPoliciesForUserInput {
    /// Whether to provide authentication policies in the response. When
    /// false, only user information is returned.
    pub show_authentication_policies: bool,

    /// Whether to provide a claim for the user in the form of a JSON web
    /// token.
    pub show_claims: bool,

    /// The fields to include in the `authenticationPolicies` response. By
    /// default all fields are shown.
    pub authentication_policy_fields_to_show: Vec<String>,

    /// The user to get authentication policies for.
    pub user: GetAuthenticationPoliciesForUserPayload,
}

impl Client {
    /// Retrieves the authentication policies that apply to a user.
    ///
    /// Corresponds to `POST /authn/v1/username`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode. See [`ri_model::decode_policy`] for the policy
    /// decoding rules.
    pub async fn get_authentication_policies_for_user(
        &self,
        input: GetAuthenticationPoliciesForUserInput,
    ) -> Result<GetAuthenticationPoliciesForUserOutput> {
        let mut url = self.endpoint("/authn/v1/username")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(
                "authenticationPolicies",
                bool_param(input.show_authentication_policies),
            );
            query.append_pair("claim", bool_param(input.show_claims));
            for field in &input.authentication_policy_fields_to_show {
                query.append_pair("authenticationPolicyField", field);
            }
        }

        let request = self.request(Method::POST, url).json(&input.user);
        let body = self.send(Method::POST, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
