//! Shapes for the Reporting module's audit query endpoint.

use serde::{Deserialize, Serialize};

/// Operator of an audit report query node.
///
/// Comparison operators (`eq`, `ne`, `lt`, `gt`, `like`) apply to leaf
/// nodes; `AND`/`OR` combine child nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditReportOperator {
    /// Field equals the value.
    #[default]
    #[serde(rename = "eq")]
    Equal,
    /// Field does not equal the value.
    #[serde(rename = "ne")]
    NotEqual,
    /// Field is less than the value.
    #[serde(rename = "lt")]
    LessThan,
    /// Field is greater than the value.
    #[serde(rename = "gt")]
    GreaterThan,
    /// Field matches the value as a pattern.
    #[serde(rename = "like")]
    Like,
    /// All child nodes must match.
    #[serde(rename = "AND")]
    And,
    /// Any child node may match.
    #[serde(rename = "OR")]
    Or,
}

impl AuditReportOperator {
    /// Returns the wire-format literal for this operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::NotEqual => "ne",
            Self::LessThan => "lt",
            Self::GreaterThan => "gt",
            Self::Like => "like",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// One node of an audit report query tree.
///
/// This type doubles as the request body of the user query endpoint, which
/// takes the same query grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditReportQuery {
    /// A grouping of query operations.
    pub child_nodes: Vec<AuditReportQuery>,

    /// Query comment.
    pub comment: String,

    /// The date format for the field value.
    pub custom_date_format: String,

    /// The field name to filter on. The acceptable field names come from
    /// the `reporting/queryBuilderColumns?type=AUDIT` endpoint.
    pub field_name: String,

    /// The secondary field name to filter on.
    pub field_secondary_name: String,

    /// The field value to filter on. Some fields accept only specific
    /// values, listed by the `reporting/possibleValues` endpoint.
    pub field_value: String,

    /// The field values to filter on.
    pub field_values: Vec<AuditReportFieldValue>,

    /// The id of this node, referenced by child nodes via `parentNode`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The operator for the query.
    pub operator_type: AuditReportOperator,

    /// The parent node of the operation.
    pub parent_node: String,
}

/// Field value for relative days and user references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditReportFieldValue {
    /// The DN of the referenced user, also used for relative days such as
    /// `LAST_7_DAYS`.
    pub dn: String,

    /// Possible values are `Person` or a relative day such as
    /// `LAST_7_DAYS`.
    pub field_name_and_server_id: String,

    /// The `idautoID` of the user or a relative day.
    pub id: String,

    /// The display name of the user or a relative day.
    pub name: String,
}

/// The result of running an audit report query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunAuditReportOutput {
    /// List of audit records.
    pub audit_log_records: Vec<AuditReportResult>,

    /// Whether the server-side result limit was reached.
    pub admin_limit_enforced: bool,
}

/// One audit record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditReportResult {
    /// Unique id for the audit record.
    pub id: String,

    /// The RapidIdentity component the audit event corresponds to.
    pub product: AuditReportBaseDetail,

    /// The RapidIdentity module the audit event corresponds to.
    pub module: AuditReportBaseDetail,

    /// The specific action for the audit event.
    pub action: AuditReportActionDetail,

    /// The time the audit event occurred.
    pub timestamp: String,

    /// The host IP address the audit event came from.
    pub host_ip: String,

    /// The `idautoID` of the entity that committed the action.
    pub perpetrator_id: String,

    /// The distinguished name of the entity that committed the action.
    pub perpetrator_dn: String,

    /// The IP address of the entity that committed the action. Behind a
    /// proxy this is the proxy's address.
    pub perpetrator_ip: String,

    /// The originating client IP address behind a proxy.
    pub perpetrator_ip_forwarded: String,

    /// The target system the committed action was invoked on.
    pub target_system: String,

    /// The `idautoID` of the target the committed action was invoked on.
    pub target_id: String,

    /// Friendly name of the target the action was invoked on. In some
    /// cases this is the DN.
    pub target: String,

    /// Whether the audited action was successful.
    pub successful: bool,

    /// Whether the audited action was synced to other systems.
    pub synced: bool,

    /// Additional properties for the audit event.
    pub extended_properties: Vec<AuditReportExtendedProperty>,
}

/// Id plus display name, shared by several audit detail fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditReportBaseDetail {
    /// Unique id.
    pub id: String,

    /// Friendly name.
    pub display_name: String,
}

/// Details for an audited action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditReportActionDetail {
    /// Id and display name of the action.
    #[serde(flatten)]
    pub base: AuditReportBaseDetail,

    /// Classification group of the action.
    pub classification: AuditReportBaseDetail,

    /// Categories the action is included in.
    pub categories: Vec<AuditReportBaseDetail>,
}

/// One additional key/value property of an audit event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditReportExtendedProperty {
    /// The field name of the additional property.
    pub key: String,

    /// The value of the additional property.
    pub value: String,
}
