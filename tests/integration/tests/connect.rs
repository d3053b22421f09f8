//! Connect administration endpoint tests.

use httpmock::prelude::*;
use ri_client::{
    GetConnectActionsInput, GetConnectFileContentInput, GetConnectFileContentZipInput,
    GetConnectFilesInput, GetConnectJobsInput, SearchConnectActionSetsInput, MAIN_PROJECT,
};
use serde_json::json;

use crate::common::{bearer, TestEnv, SERVICE_KEY};

#[tokio::test]
async fn lists_file_metadata() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/connect/files/log/job")
                .query_param("project", "sec_mgr")
                .header("authorization", bearer(SERVICE_KEY));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "path": "log/job",
                    "project": "sec_mgr",
                    "readable": true,
                    "fileEntries": [{"path": "log/job/run1.log", "size": 512, "readable": true}]
                }));
        })
        .await;

    let output = env
        .client
        .get_connect_files(GetConnectFilesInput {
            path: "log/job".to_string(),
            project: "sec_mgr".to_string(),
            ..GetConnectFilesInput::default()
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(output.entry.path, "log/job");
    assert_eq!(output.file_entries[0].size, 512);
    Ok(())
}

#[tokio::test]
async fn file_content_comes_back_as_raw_bytes() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/connect/fileContent/log/run/latest.log")
                .query_param("project", "")
                .query_param("decompress", "false")
                .header("accept", "text/plain");
            then.status(200).body("line one\nline two");
        })
        .await;

    let content = env
        .client
        .get_connect_file_content(GetConnectFileContentInput {
            path: "log/run/latest.log".to_string(),
            ..GetConnectFileContentInput::default()
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(content, b"line one\nline two");
    Ok(())
}

#[tokio::test]
async fn zipped_content_requests_every_path() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let zip_bytes = vec![0x50, 0x4b, 0x03, 0x04];
    let body = zip_bytes.clone();

    let mock = env
        .server
        .mock_async(move |when, then| {
            when.method(GET)
                .path("/api/rest/admin/connect/fileContentZip")
                .query_param("project", "sec_mgr")
                .query_param("path", "a.ecf")
                .header("accept", "application/zip");
            then.status(200).body(body.clone());
        })
        .await;

    let content = env
        .client
        .get_connect_file_content_zip(GetConnectFileContentZipInput {
            path_list: vec!["a.ecf".to_string()],
            project: "sec_mgr".to_string(),
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(content, zip_bytes);
    Ok(())
}

#[tokio::test]
async fn main_project_sentinel_becomes_an_empty_value() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/connect/jobs")
                .query_param("project", "");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "jobs": [{"id": "j1", "name": "Nightly Sync", "cronSpec": "0 0 2 * * ?"}]
                }));
        })
        .await;

    let output = env
        .client
        .get_connect_jobs(GetConnectJobsInput {
            project: MAIN_PROJECT.to_string(),
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(output.jobs[0].name, "Nightly Sync");
    Ok(())
}

#[tokio::test]
async fn lists_projects() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/api/rest/admin/connect/projects");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "projects": [{
                        "name": "sec_mgr",
                        "id": "p1",
                        "adminGroupDN": "cn=admins,dc=example",
                        "restPoints": {"authSpec": {"basic": true}}
                    }]
                }));
        })
        .await;

    let output = env.client.get_connect_projects().await?;

    mock.assert_async().await;
    assert_eq!(output.projects[0].admin_group_dn, "cn=admins,dc=example");
    assert!(output.projects[0].rest_points.auth_spec.basic);
    Ok(())
}

#[tokio::test]
async fn fetches_action_metadata_for_a_project() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/connect/actions")
                .query_param("metaDataOnly", "true")
                .query_param("project", "sec_mgr");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "all",
                    "actionDefs": [{"id": "as1", "name": "provisionUser", "project": "sec_mgr"}]
                }));
        })
        .await;

    let output = env
        .client
        .get_connect_actions(GetConnectActionsInput {
            project: "sec_mgr".to_string(),
            metadata_only: true,
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(output.name, "all");
    assert_eq!(output.action_defs[0].name, "provisionUser");
    Ok(())
}

#[tokio::test]
async fn searches_action_sets_across_all_projects() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let mock = env
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/rest/admin/connect/search/actions")
                .query_param("searchString", "provision")
                .query_param("matchAction", "true")
                .query_param("matchCase", "false")
                .query_param("regex", "false");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "search",
                    "actionDefs": [{"id": "as1", "name": "provisionUser", "returnsValue": true}],
                    "httpStatus": 200
                }));
        })
        .await;

    // No project in the input, so no project query parameter at all.
    let output = env
        .client
        .search_connect_action_sets(SearchConnectActionSetsInput {
            search_string: "provision".to_string(),
            match_action: true,
            ..SearchConnectActionSetsInput::default()
        })
        .await?;

    mock.assert_async().await;
    assert!(output.action_defs[0].returns_value);
    Ok(())
}
