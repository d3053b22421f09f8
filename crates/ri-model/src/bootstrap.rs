//! Shapes for the `/bootstrapInfo` endpoint: tenant, license, module and UI
//! information for the invoking user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::delegation::DelegationAttribute;
use crate::session::SessionInfo;

/// Tenant and user access information for the invoking user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetBootstrapInfoOutput {
    /// RapidIdentity license information.
    pub license_info: LicenseInfo,

    /// RapidIdentity version information.
    pub version_info: VersionInfo,

    /// Session information for the invoking user.
    pub session_info: SessionInfo,

    /// RapidIdentity module information.
    pub module_info: ModuleInfo,

    /// Portal UI appearance information.
    pub ui_info: UiInfo,

    /// The default module page a user lands on after login.
    pub default_landing_module: String,

    /// Whether the tenant is restarted after an upgrade is applied.
    pub disable_upgrades_restarts: bool,

    /// Whether the ProxyAs feature can be enabled for non admins.
    pub allow_proxy: bool,

    /// Whether the tenant is a RapidIdentity Cloud tenant.
    pub idaas: bool,

    /// The RapidIdentity tenant id.
    pub tenant_id: String,

    /// Whether notifications are enabled for the tenant.
    pub notifications_enabled: bool,

    /// Whether Global Search is enabled.
    pub global_search_enabled: bool,

    /// Whether the LDAP directory lives inside the cloud tenant rather than
    /// externally.
    #[serde(rename = "isRICloudLdap")]
    pub is_ri_cloud_ldap: bool,

    /// Information on the RapidIdentity features applied.
    pub features: FeatureInfo,

    /// The URL for retrieving Studio library apps.
    pub depot_proxy: DepotProxyInfo,

    /// Whether the tenant has personas enabled.
    pub has_personas: bool,

    /// ShieldID information for the tenant.
    pub shield_id_info: ShieldIdInfo,

    /// Whether the tenant is an ID Hub enabled tenant.
    pub id_hub: bool,

    /// Whether the new Google social login is enabled.
    pub is_id_auto_google_enabled: bool,

    /// Whether the new Apple social login is enabled.
    pub is_id_auto_apple_enabled: bool,
}

/// RapidIdentity license information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LicenseInfo {
    /// The license type, such as `subscription`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The display name of the person or entity that owns the license.
    pub licensee: String,

    /// The unique id for the license.
    pub licensee_id: String,

    /// The date the license expires.
    pub expiration_date: String,

    /// The cluster count.
    pub cluster_count: i32,

    /// The number of licensed users.
    pub licensed_user_count: i32,

    /// The modules provided by the license (legacy).
    pub modules: Vec<String>,
}

/// RapidIdentity version information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionInfo {
    /// The RapidIdentity version number.
    pub version: String,

    /// When the version was built.
    pub build_timestamp: Option<DateTime<Utc>>,
}

/// Per-module information for the invoking user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleInfo {
    /// Applications module information.
    pub applications: ApplicationModuleInfo,

    /// Dashboard module information.
    pub dashboard: DashboardModuleInfo,

    /// SSO Portal (personas) information.
    #[serde(rename = "dashboard_V2")]
    pub dashboard_v2: DashboardV2ModuleInfo,

    /// Files module information.
    pub files: FileModuleInfo,

    /// People module information.
    pub profiles: ProfileModuleInfo,

    /// Reports module information.
    pub reporting: ReportingModuleInfo,

    /// Groups module information.
    pub roles: RolesModuleInfo,

    /// Sponsorship module information.
    pub sponsorship: SponsorshipModuleInfo,

    /// Requests module information.
    pub workflow: WorkflowModuleInfo,

    /// Admin information.
    pub admin: AdminModuleInfo,

    /// Connect module information.
    pub connect: ConnectModuleInfo,

    /// Studio module information.
    pub studio: StudioModuleInfo,

    /// Folders module information.
    pub folders: FoldersModuleInfo,

    /// Insights module information.
    pub insights: InsightsModuleInfo,

    /// Configuration module information.
    pub configuration: ConfigurationModuleInfo,

    /// ID Hub information.
    pub id_hub: IdHubModuleInfo,
}

/// License and visibility flags shared by most modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleLicenseInfo {
    /// Whether the module is licensed.
    pub licensed: bool,

    /// Whether the module is visible for the invoking user.
    pub visible: bool,
}

/// Visibility of one module tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabInfo {
    /// Whether the tab is visible for the invoking user.
    pub visible: bool,
}

/// Visibility plus available actions of one module tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabActionInfo {
    /// Tab visibility.
    #[serde(flatten)]
    pub tab: TabInfo,

    /// Available actions within the tab.
    pub actions: Vec<String>,
}

/// Admin tab visibility for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabAdminInfo {
    /// Whether config is visible for the invoking user.
    pub config_tab_visible: bool,

    /// Whether the admin tab is visible for the invoking user.
    pub admin_tab_visible: bool,
}

/// Applications module preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceInfo {
    /// Whether to start on favorites in the Applications module.
    pub start_at_favorites: bool,
}

/// Applications module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// My tab visibility information.
    pub my_tab_info: TabInfo,

    /// Team tab visibility information.
    pub team_tab_info: TabInfo,

    /// Other tab visibility information.
    pub other_tab_info: TabInfo,

    /// Preferences information.
    pub preferences: PreferenceInfo,
}

/// Dashboard module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Visibility for the My Activity tab.
    pub my_activity_tab: TabInfo,

    /// Visibility for the Team Activity tab.
    pub team_activity_tab: TabInfo,

    /// Visibility for the Other Activity tab.
    pub other_activity_tab: TabInfo,

    /// Visibility for the My Entitlements tab.
    pub my_entitlements_tab: TabInfo,

    /// Visibility for the Team Entitlements tab.
    pub team_entitlements_tab: TabInfo,

    /// Visibility for the Other Entitlements tab.
    pub other_entitlements_tab: TabInfo,

    /// Visibility for the Executive tab.
    pub executive_tab: TabInfo,
}

/// SSO Portal (personas) module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardV2ModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,
}

/// Files module information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// The maximum file size, in MB, that can be uploaded.
    pub max_upload_size: f32,

    /// Whether SSL upload is enabled.
    #[serde(rename = "enableSSLUpload")]
    pub enable_ssl_upload: bool,

    /// Whether public access is enabled.
    pub enable_make_public: bool,
}

/// People module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Whether challenge questions are enabled (legacy).
    pub challenge_questions_enabled: bool,

    /// Whether the invoking user must update their challenge questions.
    pub must_update_challenge_questions: bool,

    /// The invalid challenge set message (legacy).
    pub invalid_challenge_set_message: String,

    /// Whether show all is enabled.
    pub enable_show_all: bool,

    /// Whether must-change password options are supported.
    pub must_change_password_options_supported: bool,

    /// Whether an unlock requires a password reset.
    pub unlock_requires_password_reset: bool,

    /// Whether a delegation attribute is required.
    pub delegation_attr_required: bool,
}

/// Reports module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// The maximum results returned from an audit report query.
    pub audit_report_max: i32,
}

/// Groups module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RolesModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Whether group type selection is enabled.
    pub enable_group_type_selection: bool,

    /// Available group types when group type selection is enabled.
    pub possible_group_types: Vec<String>,

    /// Allowed group types when group type selection is enabled.
    pub allowed_group_types: Vec<String>,

    /// Whether to preload all groups in the Groups module.
    pub preload_groups: bool,

    /// Whether to show the distinguished name of the group.
    #[serde(rename = "showDN")]
    pub show_dn: bool,

    /// Visibility and actions for the My Groups tab.
    pub my_tab_info: TabActionInfo,

    /// Visibility and actions for the Team Groups tab.
    pub team_tab_info: TabActionInfo,

    /// Visibility and actions for the Other Groups tab.
    pub other_tab_info: TabActionInfo,

    /// Custom attributes added to the Groups module.
    pub custom_attributes: Vec<DelegationAttribute>,

    /// Whether wildcard (`*`) searches are allowed.
    pub enable_wildcard_search: bool,
}

/// Sponsorship module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SponsorshipModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Visibility and actions for the My Sponsored Accounts tab.
    pub my_tab_info: TabActionInfo,

    /// Visibility and actions for the Team Sponsored Accounts tab.
    pub team_tab_info: TabActionInfo,

    /// Visibility and actions for the Other Sponsored Accounts tab.
    pub other_tab_info: TabActionInfo,

    /// The maximum expiration date selectable when creating or certifying a
    /// sponsored account.
    pub max_expiration_days: i32,

    /// Whether an email address is required for a sponsored account.
    pub email_address_required: bool,

    /// Whether an expiration date is required for a sponsored account.
    pub expiration_required: bool,

    /// Whether to preload all sponsors.
    pub preload_sponsors: bool,

    /// Whether to load all sponsored accounts when entering the module.
    pub preload_sponsored_accounts: bool,

    /// Custom attributes added to the Sponsorship module.
    pub custom_attributes: Vec<DelegationAttribute>,
}

/// Requests module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Whether SSL uploads are required.
    #[serde(rename = "enableSSLUpload")]
    pub enable_ssl_upload: bool,

    /// Visibility for the My Dashboard tab.
    pub my_dashboard_tab_info: TabInfo,

    /// Visibility for the Team Dashboard tab.
    pub team_dashboard_tab_info: TabInfo,

    /// Visibility for the Other Dashboard tab.
    pub other_dashboard_tab_info: TabInfo,

    /// Visibility for the My Requests tab.
    pub my_requests_tab_info: TabInfo,

    /// Visibility for the Team Requests tab.
    pub team_requests_tab_info: TabInfo,

    /// Visibility for the Other Requests tab.
    pub other_requests_tab_info: TabInfo,

    /// Visibility for My Task Approvals.
    pub my_approvals_tab_info: TabInfo,

    /// Visibility for Team Task Approvals.
    pub team_approvals_tab_info: TabInfo,

    /// Visibility for Other Task Approvals.
    pub other_approvals_tab_info: TabInfo,

    /// Visibility for certification tasks.
    pub upcoming_certifications_tab_info: TabInfo,

    /// Visibility for searching certification tasks.
    pub search_certifications_tab_info: TabInfo,

    /// Visibility for the task manager tab.
    pub task_manager_tab_info: TabInfo,
}

/// Admin information per module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminModuleInfo {
    /// Whether configuration is visible for the invoking user.
    pub visible: bool,

    /// Portal admin tab info.
    pub portal: TabAdminInfo,

    /// Applications admin tab info.
    pub applications: TabAdminInfo,

    /// Dashboard admin tab info.
    pub dashboard: TabAdminInfo,

    /// Files admin tab info.
    pub files: TabAdminInfo,

    /// People admin tab info.
    pub profiles: TabAdminInfo,

    /// Reports admin tab info.
    pub reporting: TabAdminInfo,

    /// Groups admin tab info.
    pub roles: TabAdminInfo,

    /// Sponsorship admin tab info.
    pub sponsorship: TabAdminInfo,

    /// Workflow admin tab info.
    pub workflow: TabAdminInfo,
}

/// Connect module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectModuleInfo {
    /// Whether the Connect module is visible for the invoking user.
    pub visible: bool,
}

/// Studio module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Whether the invoking user is a Studio operator.
    pub is_operator: bool,

    /// Whether the invoking user is a Studio administrator.
    pub is_admin: bool,
}

/// Folders module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoldersModuleInfo {
    /// Whether folder users are visible for the invoking user.
    pub users_visible: bool,

    /// Whether folder groups are visible for the invoking user.
    pub groups_visible: bool,

    /// Whether the invoking user is a Folders operator.
    pub is_operator: bool,

    /// Whether the invoking user is a Folders administrator.
    pub is_admin: bool,

    /// Whether the folders schema is up to date.
    pub schema_up_to_date: bool,
}

/// Insights module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsightsModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Whether the invoking user is an Insights manager.
    pub is_manager: bool,

    /// Whether the invoking user is an Insights viewer.
    pub is_viewer: bool,
}

/// Configuration module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationModuleInfo {
    /// License and visibility flags.
    #[serde(flatten)]
    pub license: ModuleLicenseInfo,

    /// Visibility information for the audit tab within configuration.
    pub audit_tab_info: TabInfo,
}

/// ID Hub module information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdHubModuleInfo {
    /// Whether ID Hub is visible for the invoking user.
    pub visible: bool,

    /// LCS external auth client id.
    pub lcs_external_auth_client_id: String,

    /// The LCS domain.
    pub lcs_domain: String,

    /// The catalog domain.
    pub catalog_domain: String,
}

/// Portal UI appearance information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiInfo {
    /// The portal logo URL.
    pub logo_url: String,

    /// The portal background gradient color 1.
    pub background_gradient1: String,

    /// The portal background gradient color 2.
    pub background_gradient2: String,

    /// The portal wide logo URL.
    #[serde(rename = "wideLogoURL")]
    pub wide_logo_url: String,

    /// The portal narrow logo URL.
    #[serde(rename = "narrowLogoURL")]
    pub narrow_logo_url: String,

    /// The portal favicon URL.
    #[serde(rename = "faviconURL")]
    pub favicon_url: String,

    /// The portal brand color 1.
    pub brand_color_one: String,

    /// The portal brand color 2.
    pub brand_color_two: String,
}

/// Feature flags applied to the tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureInfo {
    /// Whether login configs are enabled.
    pub login_configs: bool,

    /// Pendo information for the tenant.
    pub pendo: PendoInfo,

    /// ChurnZero information for the tenant.
    pub churn_zero: ChurnZeroInfo,

    /// Whether personas is enabled.
    pub sso_portal: bool,

    /// Whether the universal authentication director is available.
    pub third_party_portal: bool,

    /// Whether SafeID is available.
    pub safe_id: bool,

    /// Whether ShieldID is available.
    pub shield_id: bool,

    /// Whether ID Hub is available.
    pub id_hub: bool,

    /// Whether Password Vault is available.
    pub password_vault: bool,

    /// Whether ProxyAs is available for non admins.
    pub proxy_as: bool,
}

/// Pendo analytics identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PendoInfo {
    /// Unique Pendo id for the invoking user.
    pub id: String,

    /// User type of the invoking user.
    pub user_type: String,
}

/// ChurnZero analytics identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChurnZeroInfo {
    /// Unique ChurnZero id for the invoking user.
    pub id: String,

    /// User type of the invoking user.
    pub user_type: String,

    /// User role of the invoking user.
    pub user_role: String,
}

/// Studio library app depot location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepotProxyInfo {
    /// The Studio library URL.
    pub vetted_studio_apps_url: String,
}

/// ShieldID configuration for the tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShieldIdInfo {
    /// API domain.
    pub api_domain: String,

    /// Client id.
    pub client_id: String,

    /// Host id.
    pub host_id: String,
}
