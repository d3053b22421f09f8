//! Shapes for the Connect administration endpoints: files, jobs, projects
//! and action sets.

use serde::{Deserialize, Serialize};

/// Metadata of a file or directory in the Connect files module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    /// The path to the directory or file.
    pub path: String,

    /// The size of the file in bytes.
    pub size: i64,

    /// Unix timestamp in milliseconds of when the file or directory was
    /// modified.
    pub timestamp: i64,

    /// The Connect project where the file or directory resides.
    pub project: String,

    /// Whether the file or directory is readable.
    pub readable: bool,

    /// Whether the file or directory is writable.
    pub writable: bool,
}

/// Output for retrieving Connect file metadata.
///
/// The queried entry's own metadata is flattened into the top level, next to
/// the listing of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetConnectFilesOutput {
    /// Metadata for the queried path itself.
    #[serde(flatten)]
    pub entry: FileEntry,

    /// If the path is a directory, the files in the directory. Only goes
    /// one level deep.
    pub file_entries: Vec<FileEntry>,
}

/// Output for retrieving Connect jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConnectJobsOutput {
    /// List of Connect jobs.
    pub jobs: Vec<ConnectJob>,
}

/// A scheduled Connect job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectJob {
    /// The name of the job.
    pub name: String,

    /// The unique id of the job.
    pub id: String,

    /// The version of the job.
    pub version: i32,

    /// The description of the job.
    pub description: String,

    /// Whether trace logging is enabled for the job.
    pub trace_enabled: bool,

    /// The cron formatted job schedule, as
    /// `<second> <minute> <hour> <day of month> <month> <day of week>`.
    pub cron_spec: String,

    /// The time zone for the schedule.
    pub time_zone: String,

    /// Whether the job is disabled.
    pub disabled: bool,

    /// Whether the generated log is attached to the job completion email.
    pub attach_log: bool,

    /// Whether to skip execution while the previous run is still going.
    pub skip_overlap: bool,

    /// Comma separated list of job completion email recipients.
    pub email_recipients: String,

    /// The project where the job resides.
    pub project: String,

    /// The number of days to keep logs for the job.
    pub log_retention_days: i32,

    /// The Connect action set associated with the job.
    pub action: ConnectAction,

    /// How long the job may run before timing out.
    pub timeout_seconds: i32,

    /// Whether the job can be run externally.
    pub run_external: bool,
}

/// Output for retrieving Connect projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConnectProjectsOutput {
    /// List of Connect projects.
    pub projects: Vec<ConnectProject>,
}

/// A Connect project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectProject {
    /// The name of the project.
    pub name: String,

    /// The unique id of the project.
    pub id: String,

    /// The description of the project.
    pub description: String,

    /// The group DN with administrator privileges for the project.
    #[serde(rename = "adminGroupDN")]
    pub admin_group_dn: String,

    /// The group DN with operator privileges for the project.
    #[serde(rename = "operatorGroupDN")]
    pub operator_group_dn: String,

    /// The group DN with auditor privileges for the project.
    #[serde(rename = "auditorGroupDN")]
    pub auditor_group_dn: String,

    /// The RESTPoint configuration for the project.
    pub rest_points: RestPointConfig,

    /// The number of times the project has been updated.
    pub change_count: i32,

    /// Timestamp in milliseconds of the last update to the project.
    pub modified_ms: i64,

    /// The DN of the user who made the last update.
    pub modified_by: String,

    /// The display name of the user who made the last update.
    pub modified_by_name: String,
}

/// RESTPoint configuration of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestPointConfig {
    /// Whether RESTPoints are disabled.
    pub disabled: bool,

    /// The default authentication used for the RESTPoints.
    pub auth_spec: AuthSpecConfig,

    /// The RESTPoint definitions.
    pub rest_points: Vec<RestPoint>,
}

/// Authentication options accepted by a RESTPoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthSpecConfig {
    /// No authentication is used for the RESTPoint.
    pub anonymous: bool,

    /// OAuth1 authentication with the Connect module's consumer keys.
    pub oauth1: bool,

    /// Basic authentication with a RapidIdentity user holding at least
    /// Connect operator privileges.
    pub basic: bool,

    /// Basic authentication with the Connect module's OAuth1 consumer keys.
    #[serde(rename = "basicWithOAuthKeys")]
    pub basic_with_oauth_keys: bool,
}

/// A single RESTPoint definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestPoint {
    /// The unique id of the RESTPoint.
    pub id: String,

    /// The description of the RESTPoint.
    pub description: String,

    /// The HTTP method of the RESTPoint.
    pub method: String,

    /// Whether the RESTPoint is disabled.
    pub disabled: bool,

    /// The HTTP path for the RESTPoint.
    pub path: String,

    /// The Content-Type produced by the RESTPoint.
    pub produces: String,

    /// The action set called by the RESTPoint.
    pub action_set: String,

    /// How request data maps onto the action set's input parameters.
    pub arg_map: Vec<RestPointArgMap>,
}

/// Mapping of one HTTP request source onto an action set parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestPointArgMap {
    /// The HTTP source type, for example `METHOD` or `QUERY_PARAM`.
    pub source_type: String,

    /// The type of the destination parameter.
    pub dest_type: String,

    /// The key of the source, for example the query parameter name.
    pub dest_key: String,
}

/// Output for retrieving Connect actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetConnectActionsOutput {
    /// Query type name, for example `all`.
    pub name: String,

    /// The list of actions.
    pub action_defs: Vec<ActionDef>,
}

/// Result from searching for action sets within a Connect project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConnectActionSetsOutput {
    /// The name of the search query.
    pub name: String,

    /// The description of the search query.
    pub description: String,

    /// The action set definition results.
    pub action_defs: Vec<ActionDef>,

    /// The HTTP status code returned.
    pub http_status: i32,
}

/// An action set definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionDef {
    /// The action set id.
    pub id: String,

    /// The action set version.
    pub version: i32,

    /// The project where the action set resides.
    pub project: String,

    /// The name of the action set.
    pub name: String,

    /// The category the action set is a part of.
    pub category: String,

    /// Whether the action set is built in rather than custom.
    pub built_in: bool,

    /// Whether the action set is part of the community depot.
    pub community: bool,

    /// Whether the action set returns a value.
    pub returns_value: bool,

    /// The description of the action set.
    pub description: String,

    /// Whether the action set is unlicensed.
    pub unlicensed: bool,

    /// Whether the action set contains sensitive information.
    pub sensitive: bool,

    /// The input parameters of the action set.
    pub arg_defs: Vec<ArgDef>,

    /// The actions within the action set.
    pub actions: Vec<ConnectAction>,

    /// Deprecation notice for the action set, empty when not deprecated.
    pub deprecated: String,

    /// The HTTP status code of the return.
    pub http_status: i32,

    /// The number of times the action set has been modified.
    pub change_count: i32,

    /// Timestamp in milliseconds of when the action set was last modified.
    pub modified_ms: i64,

    /// The `idautoID` of the user who modified the action set.
    pub modified_by: String,

    /// The display name of the user who modified the action set.
    pub modified_by_name: String,
}

/// An input parameter of an action set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArgDef {
    /// Whether the input parameter is optional.
    pub optional: bool,

    /// The type of the input parameter.
    #[serde(rename = "type")]
    pub kind: String,

    /// The name of the input parameter.
    pub name: String,

    /// The description for the input parameter.
    pub description: String,
}

/// A single action within an action set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectAction {
    /// The unique id of the Connect action.
    pub id: String,

    /// The name of the Connect action.
    pub name: String,

    /// The variable the action's return value is bound to.
    pub output_var: String,

    /// Whether the action is disabled.
    pub disabled: bool,

    /// The project where the action resides.
    pub project: String,

    /// The input parameters for the action.
    pub args: Vec<ConnectActionArg>,
}

/// An argument passed to a Connect action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectActionArg {
    /// The name of the input parameter.
    pub name: String,

    /// The value of the input parameter.
    pub value: String,

    /// Nested actions, for block arguments.
    pub actions: Vec<ConnectAction>,

    /// The HTTP status code returned.
    pub http_status: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_listing_flattens_own_entry() {
        let output: GetConnectFilesOutput = serde_json::from_str(
            r#"{
                "path": "/",
                "size": 0,
                "timestamp": 1714579200000,
                "project": "sec_mgr",
                "readable": true,
                "writable": false,
                "fileEntries": [
                    {"path": "/log", "size": 0, "readable": true},
                    {"path": "/main.ecf", "size": 2048, "readable": true, "writable": true}
                ]
            }"#,
        )
        .expect("file listing should decode");

        assert_eq!(output.entry.path, "/");
        assert_eq!(output.entry.project, "sec_mgr");
        assert!(output.entry.readable);
        assert_eq!(output.file_entries.len(), 2);
        assert_eq!(output.file_entries[1].size, 2048);
    }

    #[test]
    fn file_entries_map_from_the_camel_case_wire_key() {
        // The flattened entry would otherwise swallow `fileEntries` as an
        // unknown key and leave the listing empty.
        let output: GetConnectFilesOutput = serde_json::from_str(
            r#"{"path": "/", "fileEntries": [{"path": "/log", "size": 1}]}"#,
        )
        .expect("file listing should decode");

        assert_eq!(output.file_entries.len(), 1);
        assert_eq!(output.file_entries[0].path, "/log");

        let encoded = serde_json::to_value(&output).expect("file listing should encode");
        assert!(encoded.get("fileEntries").is_some());
    }

    #[test]
    fn decodes_job_with_nested_action() {
        let output: GetConnectJobsOutput = serde_json::from_str(
            r#"{
                "jobs": [{
                    "name": "Nightly Sync",
                    "id": "j1",
                    "version": 4,
                    "cronSpec": "0 0 2 * * ?",
                    "timeZone": "America/Chicago",
                    "skipOverlap": true,
                    "logRetentionDays": 30,
                    "action": {"id": "a1", "name": "syncUsers", "args": [{"name": "dryRun", "value": "false"}]}
                }]
            }"#,
        )
        .expect("jobs should decode");

        let job = &output.jobs[0];
        assert_eq!(job.cron_spec, "0 0 2 * * ?");
        assert!(job.skip_overlap);
        assert_eq!(job.log_retention_days, 30);
        assert_eq!(job.action.args[0].name, "dryRun");
    }

    #[test]
    fn decodes_project_rest_point_config() {
        let output: GetConnectProjectsOutput = serde_json::from_str(
            r#"{
                "projects": [{
                    "name": "sec_mgr",
                    "id": "p1",
                    "adminGroupDN": "cn=admins,dc=example",
                    "restPoints": {
                        "disabled": false,
                        "authSpec": {"basic": true, "basicWithOAuthKeys": true},
                        "restPoints": [{
                            "id": "rp1",
                            "method": "POST",
                            "path": "/provision",
                            "actionSet": "provisionUser",
                            "argMap": [{"sourceType": "QUERY_PARAM", "destType": "string", "destKey": "username"}]
                        }]
                    }
                }]
            }"#,
        )
        .expect("projects should decode");

        let project = &output.projects[0];
        assert_eq!(project.admin_group_dn, "cn=admins,dc=example");
        assert!(project.rest_points.auth_spec.basic_with_oauth_keys);
        assert_eq!(project.rest_points.rest_points[0].arg_map[0].dest_key, "username");
    }

    #[test]
    fn decodes_action_set_search_results() {
        let output: SearchConnectActionSetsOutput = serde_json::from_str(
            r#"{
                "name": "search",
                "actionDefs": [{
                    "id": "as1",
                    "version": 7,
                    "project": "sec_mgr",
                    "name": "provisionUser",
                    "builtIn": false,
                    "returnsValue": true,
                    "argDefs": [{"optional": true, "type": "string", "name": "username"}]
                }],
                "httpStatus": 200
            }"#,
        )
        .expect("search results should decode");

        assert_eq!(output.http_status, 200);
        let def = &output.action_defs[0];
        assert!(def.returns_value);
        assert_eq!(def.arg_defs[0].kind, "string");
    }
}
