//! Authentication policy models and decoding.
//!
//! A policy's `criteria` and `methods` arrays are heterogeneous: each element
//! carries a `type` discriminator that selects its concrete shape, so the
//! policy cannot be decoded with a derived `Deserialize` alone. The decoder
//! here parses the raw object in two passes: scalar fields are routed with a
//! strict per-key type assertion, then each array element is dispatched
//! through the variant registry by its discriminator.
//!
//! Elements with an unrecognized discriminator are silently dropped from
//! their list. A recognized element whose fields do not match its concrete
//! shape fails the whole decode. This asymmetry is deliberate: new server-side
//! variant types must not break older SDKs, while a corrupt payload for a
//! known variant must never yield a half-populated policy.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::registry;
use crate::user::User;

/// Request payload for retrieving authentication policies for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetAuthenticationPoliciesForUserPayload {
    /// Username of the user. This can be any value within the
    /// `idautoPersonUsernameMV` attribute within RapidIdentity.
    pub username: String,
}

/// Response for retrieving authentication policies for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetAuthenticationPoliciesForUserOutput {
    /// User information for the username provided in the request.
    pub user: User,

    /// Authentication policies for the username provided in the request.
    pub authentication_policies: Vec<AuthenticationPolicy>,
}

/// One named, versioned RapidIdentity authentication policy.
///
/// Decoded from a single JSON object. The `criteria` and `methods` lists
/// contain only variants whose discriminator was recognized at decode time;
/// unrecognized discriminators are dropped, not treated as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationPolicy {
    /// Unique id for the authentication policy.
    pub id: String,

    /// The version of the authentication policy.
    pub version: i32,

    /// The name of the authentication policy.
    pub name: String,

    /// Whether the authentication policy is enabled.
    pub enabled: bool,

    /// The criteria determining whether the policy applies to a sign-in
    /// attempt.
    pub criteria: Vec<PolicyCriteria>,

    /// The authentication methods offered once the policy's criteria match.
    pub methods: Vec<PolicyMethod>,

    /// Whether the authentication policy can be initiated with a QR code.
    #[serde(rename = "insecureQRIdEnabled")]
    pub insecure_qr_id_enabled: bool,

    /// Whether the authentication policy should always fail.
    pub always_fail: bool,

    /// Whether the authentication policy is a forgot password policy.
    pub is_reset_password_policy: bool,
}

/// Decodes one raw JSON object into an [`AuthenticationPolicy`].
///
/// # Errors
///
/// Fails when the bytes are not a JSON object, when a scalar field has the
/// wrong JSON type, or when a recognized `criteria`/`methods` element does
/// not match its concrete variant shape. There is no partial result: the
/// caller gets either a fully decoded policy or an error.
pub fn decode_policy(bytes: &[u8]) -> serde_json::Result<AuthenticationPolicy> {
    serde_json::from_slice(bytes)
}

impl<'de> Deserialize<'de> for AuthenticationPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;

        let mut policy = Self::default();
        for (key, value) in raw {
            match key.as_str() {
                "id" => policy.id = expect_string(&key, value).map_err(D::Error::custom)?,
                "version" => policy.version = expect_int(&key, value).map_err(D::Error::custom)?,
                "name" => policy.name = expect_string(&key, value).map_err(D::Error::custom)?,
                "enabled" => policy.enabled = expect_bool(&key, value).map_err(D::Error::custom)?,
                "insecureQRIdEnabled" => {
                    policy.insecure_qr_id_enabled =
                        expect_bool(&key, value).map_err(D::Error::custom)?;
                }
                "alwaysFail" => {
                    policy.always_fail = expect_bool(&key, value).map_err(D::Error::custom)?;
                }
                "isResetPasswordPolicy" => {
                    policy.is_reset_password_policy =
                        expect_bool(&key, value).map_err(D::Error::custom)?;
                }
                "criteria" => {
                    policy.criteria = decode_variants(&key, value, registry::criteria_decoder)
                        .map_err(D::Error::custom)?;
                }
                "methods" => {
                    policy.methods = decode_variants(&key, value, registry::method_decoder)
                        .map_err(D::Error::custom)?;
                }
                // Unknown top-level keys are ignored.
                _ => {}
            }
        }
        Ok(policy)
    }
}

fn expect_string(key: &str, value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(format!(
            "field `{key}`: expected a string, got {}",
            json_type(&other)
        )),
    }
}

fn expect_bool(key: &str, value: Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(format!(
            "field `{key}`: expected a boolean, got {}",
            json_type(&other)
        )),
    }
}

fn expect_int(key: &str, value: Value) -> Result<i32, String> {
    match value {
        // The wire value is a JSON number; fractional values truncate.
        Value::Number(n) => n
            .as_f64()
            .map(|f| f as i32)
            .ok_or_else(|| format!("field `{key}`: number out of range")),
        other => Err(format!(
            "field `{key}`: expected a number, got {}",
            json_type(&other)
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes one union-typed array field, dispatching each element through the
/// given family of the variant registry.
fn decode_variants<T>(
    key: &str,
    value: Value,
    resolve: fn(&str) -> Option<fn(Value) -> serde_json::Result<T>>,
) -> Result<Vec<T>, String> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(format!(
                "field `{key}`: expected an array, got {}",
                json_type(&other)
            ))
        }
    };

    let mut decoded = Vec::with_capacity(elements.len());
    for element in elements {
        let kind = match element.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => {
                return Err(format!(
                    "`{key}` element discriminator `type`: expected a string, got {}",
                    json_type(other)
                ))
            }
            None => return Err(format!("`{key}` element is missing its `type` discriminator")),
        };

        // Unrecognized discriminators are skipped: the server may introduce
        // variant types this SDK does not know yet.
        let Some(decode) = resolve(&kind) else {
            continue;
        };
        let variant = decode(element).map_err(|err| format!("`{key}` element `{kind}`: {err}"))?;
        decoded.push(variant);
    }
    Ok(decoded)
}

/// Base fields shared by every policy criteria and method variant.
///
/// This is the minimal contract callers can rely on without knowing an
/// element's concrete shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAuthenticationInfo {
    /// The discriminator of the method or criteria, matching the wire-format
    /// `type` field.
    #[serde(rename = "type")]
    pub kind: String,

    /// Whether the method or criteria is enabled.
    #[serde(default)]
    pub enabled: bool,
}

/// A criteria rule of an authentication policy.
///
/// Closed set of variants, one per recognized `type` discriminator. Callers
/// that only need the shared base fields use [`PolicyCriteria::base`];
/// callers that need variant-specific fields pattern match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PolicyCriteria {
    /// Day-of-week rule (`dayOfWeek`).
    DayOfWeek(DaysOfWeekCriteria),
    /// WebAuthn device registration rule (`webAuthn`).
    WebAuthn(WebAuthnCriteria),
    /// Kerberos token presence rule (`kerberos`).
    Kerberos(KerberosCriteria),
    /// LDAP filter rule (`ldapFilter`).
    LdapFilter(LdapFilterCriteria),
    /// QR-code initiation rule (`qrCode`).
    QrCode(QrCodeCriteria),
    /// Source network rule (`sourceNetwork`).
    SourceNetwork(SourceNetworkCriteria),
    /// Role membership rule (`role`).
    Role(RoleCriteria),
    /// Time-of-day rule (`timeOfDay`).
    TimeOfDay(TimeOfDayCriteria),
}

impl PolicyCriteria {
    /// Returns the base fields shared by every criteria variant.
    #[must_use]
    pub fn base(&self) -> &BaseAuthenticationInfo {
        match self {
            Self::DayOfWeek(c) => &c.base,
            Self::WebAuthn(c) => &c.base,
            Self::Kerberos(c) => &c.base,
            Self::LdapFilter(c) => &c.base,
            Self::QrCode(c) => &c.base,
            Self::SourceNetwork(c) => &c.base,
            Self::Role(c) => &c.base,
            Self::TimeOfDay(c) => &c.base,
        }
    }

    /// Returns the wire-format discriminator of this criteria.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.base().kind
    }

    /// Returns whether this criteria is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.base().enabled
    }
}

/// An authentication method of a policy.
///
/// Closed set of variants, one per recognized `type` discriminator; same
/// shared-base pattern as [`PolicyCriteria`]. The two families are distinct
/// types even where tag strings coincide (`webAuthn`, `kerberos`, `qrCode`),
/// so a criteria element can never resolve to a method variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PolicyMethod {
    /// Duo push or one-time code (`duo`).
    Duo(DuoMethod),
    /// One-time code by email (`email`).
    Email(EmailMethod),
    /// SAML federation to an external IdP (`federation`).
    Federation(FederationMethod),
    /// WebAuthn device login (`webAuthn`).
    WebAuthn(WebAuthnMethod),
    /// Kerberos device login (`kerberos`).
    Kerberos(KerberosMethod),
    /// Password login (`password`).
    Password(PasswordMethod),
    /// Pictograph image challenge (`pictograph`).
    Pictograph(PictographMethod),
    /// PingMe mobile push (`pingMe`).
    PingMe(PingMeMethod),
    /// Portal challenge questions (`rapidPortalChallenge`).
    RapidPortalChallenge(RapidPortalChallengeMethod),
    /// QR code login (`qrCode`).
    QrCode(QrCodeMethod),
    /// One-time code by SMS (`sms`).
    Sms(SmsMethod),
    /// Social provider login (`social`).
    Social(SocialMethod),
    /// TOTP application code (`totp`).
    Totp(TotpMethod),
    /// User agreement display (`userAgreement`).
    UserAgreement(UserAgreementMethod),
}

impl PolicyMethod {
    /// Returns the base fields shared by every method variant.
    #[must_use]
    pub fn base(&self) -> &BaseAuthenticationInfo {
        match self {
            Self::Duo(m) => &m.base,
            Self::Email(m) => &m.base,
            Self::Federation(m) => &m.base,
            Self::WebAuthn(m) => &m.base,
            Self::Kerberos(m) => &m.base,
            Self::Password(m) => &m.base,
            Self::Pictograph(m) => &m.base,
            Self::PingMe(m) => &m.base,
            Self::RapidPortalChallenge(m) => &m.base,
            Self::QrCode(m) => &m.base,
            Self::Sms(m) => &m.base,
            Self::Social(m) => &m.base,
            Self::Totp(m) => &m.base,
            Self::UserAgreement(m) => &m.base,
        }
    }

    /// Returns the wire-format discriminator of this method.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.base().kind
    }

    /// Returns whether this method is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.base().enabled
    }
}

/// Determines if a policy is satisfied based on the day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOfWeekCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// Policy is enabled on Sundays.
    #[serde(default)]
    pub sunday: bool,

    /// Policy is enabled on Mondays.
    #[serde(default)]
    pub monday: bool,

    /// Policy is enabled on Tuesdays.
    #[serde(default)]
    pub tuesday: bool,

    /// Policy is enabled on Wednesdays.
    #[serde(default)]
    pub wednesday: bool,

    /// Policy is enabled on Thursdays.
    #[serde(default)]
    pub thursday: bool,

    /// Policy is enabled on Fridays.
    #[serde(default)]
    pub friday: bool,

    /// Policy is enabled on Saturdays.
    #[serde(default)]
    pub saturday: bool,
}

impl DaysOfWeekCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "dayOfWeek";
}

/// Determines if a policy is satisfied based on registered WebAuthn devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAuthnCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// When set, users with registered WebAuthn devices do not satisfy the
    /// policy.
    #[serde(default)]
    pub negate: bool,
}

impl WebAuthnCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "webAuthn";
}

/// Determines if a policy is satisfied based on a Kerberos token being
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KerberosCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,
}

impl KerberosCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "kerberos";
}

/// Determines if a policy is satisfied based on an LDAP filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapFilterCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The LDAP filter selecting the users the policy applies to.
    #[serde(default)]
    pub ldap_filter: String,

    /// Whether to match the LDAP admin account.
    #[serde(default)]
    pub match_non_ldap_admin: bool,
}

impl LdapFilterCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "ldapFilter";
}

/// Allows a QR code to initiate the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,
}

impl QrCodeCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "qrCode";
}

/// Determines if a policy is satisfied based on the source IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNetworkCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// List of subnets to evaluate.
    #[serde(default)]
    pub subnets: Vec<String>,

    /// Whether forwarded HTTP headers participate in source resolution.
    #[serde(default)]
    pub enable_http_header_processing: bool,

    /// Whether to allow or deny the subnets listed.
    #[serde(default)]
    pub negate: bool,
}

impl SourceNetworkCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "sourceNetwork";
}

/// Determines if a policy is satisfied based on role membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// List of roles to evaluate.
    #[serde(default)]
    pub roles: Vec<RoleAuthValue>,

    /// Whether to apply the policy to everyone.
    #[serde(default)]
    pub apply_to_everyone: bool,

    /// Whether to allow or deny users in the listed roles.
    #[serde(default)]
    pub inverse_match: bool,
}

impl RoleCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "role";
}

/// Role reference for a [`RoleCriteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAuthValue {
    /// The `idautoID` of the role in RapidIdentity.
    #[serde(default)]
    pub id: String,

    /// The name of the role in RapidIdentity.
    #[serde(default)]
    pub name: String,
}

/// Determines if a policy is satisfied based on the time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDayCriteria {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The start of the window.
    #[serde(default)]
    pub start: TimeOfDayClock,

    /// The end of the window.
    #[serde(default)]
    pub end: TimeOfDayClock,

    /// The time zone the window is evaluated in.
    #[serde(default)]
    pub time_zone: String,
}

impl TimeOfDayCriteria {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "timeOfDay";
}

/// Clock value for a [`TimeOfDayCriteria`] window boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayClock {
    /// Hour from 0 to 23.
    #[serde(default)]
    pub hour: i32,

    /// Minute from 0 to 59.
    #[serde(default)]
    pub minute: i32,
}

/// Duo push or one-time code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuoMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The Duo configuration id.
    #[serde(default)]
    pub config_id: String,

    /// Removes the additional click to enter the Duo prompt.
    #[serde(default)]
    pub auto_process: bool,
}

impl DuoMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "duo";
}

/// One-time code sent by email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,
}

impl EmailMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "email";
}

/// SAML federation to an external trusted IdP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The trusted IdP configuration to reference.
    #[serde(default)]
    pub trusted_idp: FederationAuthValue,

    /// The URL to redirect to once authentication at the trusted IdP has
    /// completed.
    #[serde(default)]
    pub post_auth_redirect_url: String,

    /// Whether to expose attributes in the SAML response.
    #[serde(default)]
    pub expose_attributes: bool,

    /// Whether to forward the username to the IdP.
    #[serde(default)]
    pub forward_username_enabled: bool,

    /// The username attribute to forward to the IdP.
    #[serde(default)]
    pub forward_username_attribute: String,

    /// The SAML NameID format of the forwarded attribute.
    #[serde(default, rename = "forwardUsernameNameIDFormat")]
    pub forward_username_name_id_format: String,
}

impl FederationMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "federation";
}

/// Trusted IdP reference for a [`FederationMethod`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationAuthValue {
    /// The unique id of the trusted IdP configuration.
    #[serde(default)]
    pub id: String,

    /// The name of the trusted IdP configuration.
    #[serde(default)]
    pub name: String,
}

/// FIDO or device login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAuthnMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// Allow the login to be remembered for 30 days.
    #[serde(default)]
    pub allow_challenge_deferral: bool,
}

impl WebAuthnMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "webAuthn";
}

/// Device login on an Active Directory joined device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KerberosMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,
}

impl KerberosMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "kerberos";
}

/// Password login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// Whether to display a warning when the password is close to expiring.
    #[serde(default)]
    pub expiration_warning_enabled: bool,

    /// How many days prior to expiration the warning is shown.
    #[serde(default)]
    pub expiration_warning_days: i32,

    /// How long since the password has been changed, in days.
    #[serde(default)]
    pub current_password_age_days: i32,

    /// The maximum number of days a password can be used before it must be
    /// changed.
    #[serde(default)]
    pub password_maximum_age_days: i32,

    /// Whether the user must change their password on login.
    #[serde(default)]
    pub must_change: bool,
}

impl PasswordMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "password";
}

/// Image-pool challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictographMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// Number of images displayed to choose from.
    #[serde(default)]
    pub num_to_challenge: i32,

    /// Number of images the user must select to authenticate.
    #[serde(default)]
    pub num_to_choose: i32,

    /// Whether to use the default image pool rather than custom images.
    #[serde(default)]
    pub use_default_image_pool: bool,

    /// The image ids used when a custom image pool is configured.
    #[serde(default)]
    pub image_ids: Vec<String>,
}

impl PictographMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "pictograph";
}

/// RapidIdentity mobile app push or one-time code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingMeMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// Whether to use cloud based PingMe (legacy).
    #[serde(default)]
    pub native_ping_me: bool,

    /// A friendly description for the service.
    #[serde(default)]
    pub service_description: String,
}

impl PingMeMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "pingMe";
}

/// Portal challenge questions and answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RapidPortalChallengeMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The RapidIdentity Portal base URL.
    #[serde(default)]
    pub rapid_portal_base_url: String,
}

impl RapidPortalChallengeMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "rapidPortalChallenge";
}

/// QR code login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,
}

impl QrCodeMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "qrCode";
}

/// One-time code sent to a mobile number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,
}

impl SmsMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "sms";
}

/// Social network provider login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// Apple provider information.
    #[serde(default)]
    pub apple: SocialProviderAppleInfo,

    /// Google provider information.
    #[serde(default)]
    pub google_plus: SocialProviderGoogleInfo,
}

impl SocialMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "social";
}

/// Apple social provider information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProviderAppleInfo {
    /// Whether Apple login is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// The private key associated with the Apple social provider.
    #[serde(default)]
    pub private_key: String,
}

/// Google social provider information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProviderGoogleInfo {
    /// Whether Google login is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// The client secret associated with the Google social provider.
    #[serde(default)]
    pub client_secret: String,
}

/// One-time code from a TOTP application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotpMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The window size for the registration QR code.
    #[serde(default)]
    pub totp_window_size: i32,

    /// Only challenge the user with a one-time code every 30 days.
    #[serde(default)]
    pub allow_challenge_deferral: bool,

    /// The issuer name for the TOTP code.
    #[serde(default)]
    pub issuer_name: String,

    /// The setup instructions displayed during registration.
    #[serde(default)]
    pub setup_instructions: String,
}

impl TotpMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "totp";
}

/// User agreement displayed on login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgreementMethod {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseAuthenticationInfo,

    /// The unique id referencing the user agreement.
    #[serde(default)]
    pub user_agreement_id: String,

    /// Whether to show the agreement on every login rather than once.
    #[serde(default, rename = "showuserAgreementEveryTime")]
    pub show_user_agreement_every_time: bool,
}

impl UserAgreementMethod {
    /// Wire-format discriminator for this variant.
    pub const TYPE: &'static str = "userAgreement";
}
