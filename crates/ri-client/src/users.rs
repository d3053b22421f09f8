//! User lookup, user queries, schema attributes and delegations.

use reqwest::Method;
use ri_model::audit::AuditReportQuery;
use ri_model::delegation::GetDelegationsForUserOutput;
use ri_model::user::User;

use crate::client::Client;
use crate::error::Result;

/// Input for retrieving a RapidIdentity user by DN or `idautoID`.
#[derive(Debug, Clone, Default)]
pub struct GetUserByIdInput {
    /// The DN or `idautoID` of the user to retrieve.
    pub id: String,
}

/// Input for running a user query.
#[derive(Debug, Clone, Default)]
pub struct RunUserQueryInput {
    /// The type of search to initiate. Defaults to `advanced`.
    pub search_type: String,

    /// The maximum number of users to return. Defaults to 1000.
    pub limit: u32,

    /// The delegation ids of the delegations that will be searched.
    pub delegation_ids: Vec<String>,

    /// The user query to run. Uses the same query grammar as audit
    /// reports.
    pub query: AuditReportQuery,
}

/// Input for getting user delegations.
#[derive(Debug, Clone, Default)]
pub struct GetDelegationsForUserInput {
    /// The `idautoID` of the user to retrieve delegations for.
    pub user_id: String,
}

impl Client {
    /// Retrieves a RapidIdentity user by DN or `idautoID`.
    ///
    /// Corresponds to `GET /admin/ldap/users/{dnOrId}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_user_by_id(&self, input: GetUserByIdInput) -> Result<User> {
        let url = self.endpoint(&format!("/admin/ldap/users/{}", input.id))?;
        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Retrieves the RapidIdentity LDAP attribute names.
    ///
    /// Corresponds to `GET /admin/ldap/schema/attributes`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_rapid_identity_attributes(&self) -> Result<Vec<String>> {
        let url = self.endpoint("/admin/ldap/schema/attributes")?;
        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Runs a user query and returns the matching users.
    ///
    /// Corresponds to `POST /users`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn run_user_query(&self, input: RunUserQueryInput) -> Result<Vec<User>> {
        let search_type = if input.search_type.is_empty() {
            "advanced"
        } else {
            &input.search_type
        };
        let limit = if input.limit == 0 { 1000 } else { input.limit };

        let mut url = self.endpoint("/users")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("search", search_type);
            query.append_pair("limit", &limit.to_string());
            for delegation_id in &input.delegation_ids {
                query.append_pair("did", delegation_id);
            }
        }

        let request = self.request(Method::POST, url).json(&input.query);
        let body = self.send(Method::POST, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Retrieves all delegations and profiles for a user that the invoking
    /// session has access to.
    ///
    /// Corresponds to `GET /profiles/aggregated/for/{userId}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_delegations_for_user(
        &self,
        input: GetDelegationsForUserInput,
    ) -> Result<GetDelegationsForUserOutput> {
        let url = self.endpoint(&format!("/profiles/aggregated/for/{}", input.user_id))?;
        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
