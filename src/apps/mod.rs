//!
//! Application operations
//!
use std::collections::HashMap;

use crate::types::app::{
    App, AppCreateRequest, AppEnv, AppInstance, AppState, AppStats, AppSummary, AppUpdateRequest,
};
use crate::types::route::Route;
use crate::types::space::{Org, Space};
use crate::types::Resource;
use crate::{Client, Error, Result};

/// Upload and download of application bits and droplets
pub mod bits;

const APPS: &str = "/v2/apps";
const SPACES: &str = "/v2/spaces";
const ORGANIZATIONS: &str = "/v2/organizations";

/// Ask the API to embed the space and its organization
const INLINE_RELATIONS: (&str, &str) = ("inline-relations-depth", "2");

fn app_path(guid: &str) -> String {
    format!("{APPS}/{guid}")
}

impl Client {
    /// List all applications with their space and organization inlined
    pub async fn list_apps(&self) -> Result<Vec<App>> {
        self.list_apps_by_query(&[INLINE_RELATIONS]).await
    }

    /// List applications matching query parameters, e.g. `[("q", "name:my-app")]`
    pub async fn list_apps_by_query(&self, query: &[(&str, &str)]) -> Result<Vec<App>> {
        self.list_resources(APPS, query, None).await
    }

    /// Like [`Self::list_apps_by_query`] but reads at most `total_pages` pages
    pub async fn list_apps_by_query_with_limits(
        &self,
        query: &[(&str, &str)],
        total_pages: usize,
    ) -> Result<Vec<App>> {
        self.list_resources(APPS, query, Some(total_pages)).await
    }

    /// List applications mapped to a route
    pub async fn list_apps_by_route(&self, route_guid: &str) -> Result<Vec<App>> {
        self.list_resources(&format!("/v2/routes/{route_guid}/apps"), &[], None)
            .await
    }

    /// Fetch an application with its space and organization inlined by the API
    pub async fn get_app_by_guid(&self, guid: &str) -> Result<App> {
        let app: Resource<App> = self
            .get_json(&app_path(guid), Some(&[INLINE_RELATIONS]))
            .await?;
        Ok(app.into_entity())
    }

    /// Fetch an application, then its space, then the space's organization.
    ///
    /// For APIs where inlining relations is slow or disabled. The space lookup
    /// runs first, so its error is the one reported when both would fail.
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn get_app_by_guid_no_inline_call(&self, guid: &str) -> Result<App> {
        let app: Resource<App> = self.get_json(&app_path(guid), None).await?;
        let mut app = app.into_entity();

        let mut space = self
            .get_space_by_guid(&app.space_guid)
            .await
            .map_err(|e| Error::dependency("Space", &app.name, e))?;

        let org = self
            .get_org_by_guid(&space.organization_guid)
            .await
            .map_err(|e| Error::dependency("Org", &app.name, e))?;

        space.org_data = Some(org);
        app.space_data = Some(space);
        Ok(app)
    }

    /// Find an application by name within a space of an organization
    pub async fn app_by_name(&self, app_name: &str, space_guid: &str, org_guid: &str) -> Result<App> {
        let name = format!("name:{app_name}");
        let space = format!("space_guid:{space_guid}");
        let org = format!("organization_guid:{org_guid}");

        let apps = self
            .list_apps_by_query(&[("q", name.as_str()), ("q", space.as_str()), ("q", org.as_str())])
            .await?;

        apps.into_iter().next().ok_or_else(|| {
            Error::NotFound(format!(
                "No app found with name: `{app_name}` in space with GUID `{space_guid}` and org with GUID `{org_guid}`"
            ))
        })
    }

    /// Fetch a space
    pub async fn get_space_by_guid(&self, guid: &str) -> Result<Space> {
        let space: Resource<Space> = self.get_json(&format!("{SPACES}/{guid}"), None).await?;
        Ok(space.into_entity())
    }

    /// Fetch an organization
    pub async fn get_org_by_guid(&self, guid: &str) -> Result<Org> {
        let org: Resource<Org> = self
            .get_json(&format!("{ORGANIZATIONS}/{guid}"), None)
            .await?;
        Ok(org.into_entity())
    }

    /// Status of every instance, keyed by instance index
    pub async fn get_app_instances(&self, guid: &str) -> Result<HashMap<String, AppInstance>> {
        self.get_json(&format!("{APPS}/{guid}/instances"), None)
            .await
    }

    /// Resource usage of every instance, keyed by instance index
    pub async fn get_app_stats(&self, guid: &str) -> Result<HashMap<String, AppStats>> {
        self.get_json(&format!("{APPS}/{guid}/stats"), None).await
    }

    /// Routes mapped to an application
    pub async fn get_app_routes(&self, guid: &str) -> Result<Vec<Route>> {
        self.list_resources(&format!("{APPS}/{guid}/routes"), &[], None)
            .await
    }

    /// Environment of an application
    pub async fn get_app_env(&self, guid: &str) -> Result<AppEnv> {
        self.get_json(&format!("{APPS}/{guid}/env"), None).await
    }

    /// Summary of an application
    pub async fn get_app_summary(&self, guid: &str) -> Result<AppSummary> {
        self.get_json(&format!("{APPS}/{guid}/summary"), None)
            .await
    }

    /// Create an application, the API assigns the identifier
    pub async fn create_app(&self, request: &AppCreateRequest) -> Result<App> {
        tracing::info!("Creating app {} in space {}", request.name, request.space_guid);
        let app: Resource<App> = self.post_json(APPS, request).await?;
        Ok(app.into_entity())
    }

    /// Update an application
    pub async fn update_app(&self, guid: &str, request: &AppUpdateRequest) -> Result<App> {
        let app: Resource<App> = self.put_json(&app_path(guid), request).await?;
        Ok(app.into_entity())
    }

    /// Request the application to run
    pub async fn start_app(&self, guid: &str) -> Result<()> {
        self.update_app(guid, &AppUpdateRequest::with_state(AppState::Started))
            .await?;
        Ok(())
    }

    /// Request the application to stop
    pub async fn stop_app(&self, guid: &str) -> Result<()> {
        self.update_app(guid, &AppUpdateRequest::with_state(AppState::Stopped))
            .await?;
        Ok(())
    }

    /// Stage the application again, e.g. to pick up a new buildpack
    pub async fn restage_app(&self, guid: &str) -> Result<App> {
        let app: Resource<App> = self
            .post_json(
                &format!("{APPS}/{guid}/restage"),
                &serde_json::Map::new(),
            )
            .await?;
        Ok(app.into_entity())
    }

    /// Delete an application
    pub async fn delete_app(&self, guid: &str) -> Result<()> {
        tracing::info!("Deleting app {}", guid);
        self.delete(&app_path(guid)).await
    }

    /// Terminate one instance, the platform starts a replacement
    pub async fn kill_app_instance(&self, guid: &str, index: &str) -> Result<()> {
        self.delete(&format!("{APPS}/{guid}/instances/{index}"))
            .await
    }
}

impl App {
    /// Fetch the space owning this application
    pub async fn space(&self, client: &Client) -> Result<Space> {
        if self.space_url.is_empty() {
            return Err(Error::API(format!("App {} has no space URL", self.name)));
        }
        let space: Resource<Space> = client.get_json(&self.space_url, None).await?;
        Ok(space.into_entity())
    }

    /// Fetch the summary of this application
    pub async fn summary(&self, client: &Client) -> Result<AppSummary> {
        client.get_app_summary(&self.guid).await
    }
}

impl Space {
    /// Fetch the organization owning this space
    pub async fn org(&self, client: &Client) -> Result<Org> {
        if self.org_url.is_empty() {
            return Err(Error::API(format!("Space {} has no organization URL", self.name)));
        }
        let org: Resource<Org> = client.get_json(&self.org_url, None).await?;
        Ok(org.into_entity())
    }
}
