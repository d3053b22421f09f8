//! Connect administration: files, file content, jobs, projects and action
//! sets.

use reqwest::{header, Method};
use ri_model::connect::{
    GetConnectActionsOutput, GetConnectFilesOutput, GetConnectJobsOutput,
    GetConnectProjectsOutput, SearchConnectActionSetsOutput,
};

use crate::client::{bool_param, project_param, Client};
use crate::error::Result;

/// Input for retrieving metadata on files from the Connect files module and
/// logs.
#[derive(Debug, Clone, Default)]
pub struct GetConnectFilesInput {
    /// The path to the directory or file metadata to retrieve. Job and run
    /// logs live under `log/job` and `log/run`.
    pub path: String,

    /// The Connect project the directory or file resides in. Defaults to
    /// the main project.
    pub project: String,

    /// The format of the result. Defaults to `application/json`.
    pub response_type: String,
}

/// Input for retrieving file content from the Connect files module and
/// logs.
#[derive(Debug, Clone, Default)]
pub struct GetConnectFileContentInput {
    /// The path to the file to retrieve. Job and run logs live under
    /// `log/job` and `log/run`.
    pub path: String,

    /// The Connect project the file resides in. Defaults to the main
    /// project.
    pub project: String,

    /// Whether to decompress the file on the RapidIdentity server.
    pub decompress: bool,

    /// The format of the result. Defaults to `text/plain`.
    pub response_type: String,
}

/// Input for retrieving multiple files zipped from the Connect files module
/// and logs.
#[derive(Debug, Clone, Default)]
pub struct GetConnectFileContentZipInput {
    /// The paths of the files to retrieve.
    pub path_list: Vec<String>,

    /// The Connect project the files reside in. Defaults to the main
    /// project.
    pub project: String,
}

/// Input for retrieving Connect jobs.
#[derive(Debug, Clone, Default)]
pub struct GetConnectJobsInput {
    /// The Connect project to retrieve jobs from. Empty searches all
    /// projects; use [`MAIN_PROJECT`](crate::MAIN_PROJECT) for the `<Main>`
    /// project.
    pub project: String,
}

/// Input for retrieving Connect actions.
#[derive(Debug, Clone, Default)]
pub struct GetConnectActionsInput {
    /// The Connect project to filter by. Empty searches all projects; use
    /// [`MAIN_PROJECT`](crate::MAIN_PROJECT) for the `<Main>` project.
    pub project: String,

    /// Whether to return just metadata instead of full action details.
    pub metadata_only: bool,
}

/// Input for searching action sets within a Connect project.
#[derive(Debug, Clone, Default)]
pub struct SearchConnectActionSetsInput {
    /// The text to search for. Treated as a regex pattern when `regex` is
    /// set.
    pub search_string: String,

    /// The Connect project to search within. Empty searches all projects;
    /// use [`MAIN_PROJECT`](crate::MAIN_PROJECT) for the `<Main>` project.
    pub project: String,

    /// Whether to match action set names.
    pub match_action: bool,

    /// Whether the search is case sensitive.
    pub match_case: bool,

    /// Whether the search string contains regex.
    pub regex: bool,
}

impl Client {
    /// Retrieves metadata for files within the Connect files module and
    /// logs. This returns only metadata, not file contents.
    ///
    /// Corresponds to `GET /admin/connect/files/{path}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_connect_files(
        &self,
        input: GetConnectFilesInput,
    ) -> Result<GetConnectFilesOutput> {
        let mut url = self.endpoint(&format!("/admin/connect/files/{}", input.path))?;
        url.query_pairs_mut().append_pair("project", &input.project);

        let mut request = self.request(Method::GET, url);
        if !input.response_type.is_empty() {
            request = request.header(header::ACCEPT, &input.response_type);
        }
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Retrieves the content of a file within the Connect files module and
    /// logs, as raw bytes.
    ///
    /// Corresponds to `GET /admin/connect/fileContent/{path}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx response.
    pub async fn get_connect_file_content(
        &self,
        input: GetConnectFileContentInput,
    ) -> Result<Vec<u8>> {
        let mut url = self.endpoint(&format!("/admin/connect/fileContent/{}", input.path))?;
        url.query_pairs_mut()
            .append_pair("project", &input.project)
            .append_pair("decompress", bool_param(input.decompress));

        let accept = if input.response_type.is_empty() {
            "text/plain"
        } else {
            &input.response_type
        };
        let request = self
            .request(Method::GET, url)
            .header(header::ACCEPT, accept);
        self.send(Method::GET, request).await
    }

    /// Retrieves multiple files zipped from the Connect files module and
    /// logs, as raw zip bytes.
    ///
    /// Corresponds to `GET /admin/connect/fileContentZip`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx response.
    pub async fn get_connect_file_content_zip(
        &self,
        input: GetConnectFileContentZipInput,
    ) -> Result<Vec<u8>> {
        let mut url = self.endpoint("/admin/connect/fileContentZip")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("project", &input.project);
            for path in &input.path_list {
                query.append_pair("path", path);
            }
        }

        let request = self
            .request(Method::GET, url)
            .header(header::ACCEPT, "application/zip");
        self.send(Method::GET, request).await
    }

    /// Retrieves Connect jobs for all projects or the specified project.
    ///
    /// Corresponds to `GET /admin/connect/jobs`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_connect_jobs(
        &self,
        input: GetConnectJobsInput,
    ) -> Result<GetConnectJobsOutput> {
        let mut url = self.endpoint("/admin/connect/jobs")?;
        if !input.project.is_empty() {
            url.query_pairs_mut()
                .append_pair("project", project_param(&input.project));
        }

        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Retrieves the list of all Connect projects.
    ///
    /// Corresponds to `GET /admin/connect/projects`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_connect_projects(&self) -> Result<GetConnectProjectsOutput> {
        let url = self.endpoint("/admin/connect/projects")?;
        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Retrieves actions from Connect.
    ///
    /// Corresponds to `GET /admin/connect/actions`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn get_connect_actions(
        &self,
        input: GetConnectActionsInput,
    ) -> Result<GetConnectActionsOutput> {
        let mut url = self.endpoint("/admin/connect/actions")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("metaDataOnly", bool_param(input.metadata_only));
            if !input.project.is_empty() {
                query.append_pair("project", project_param(&input.project));
            }
        }

        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Searches for text within action sets in a project.
    ///
    /// Corresponds to `GET /admin/connect/search/actions`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx response, or a response body
    /// that does not decode.
    pub async fn search_connect_action_sets(
        &self,
        input: SearchConnectActionSetsInput,
    ) -> Result<SearchConnectActionSetsOutput> {
        let mut url = self.endpoint("/admin/connect/search/actions")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("searchString", &input.search_string);
            query.append_pair("matchAction", bool_param(input.match_action));
            query.append_pair("matchCase", bool_param(input.match_case));
            query.append_pair("regex", bool_param(input.regex));
            if !input.project.is_empty() {
                query.append_pair("project", project_param(&input.project));
            }
        }

        let request = self.request(Method::GET, url);
        let body = self.send(Method::GET, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
