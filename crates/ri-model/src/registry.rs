//! Discriminator dispatch tables for policy criteria and methods.
//!
//! The two families are looked up independently. `webAuthn`, `kerberos` and
//! `qrCode` exist as tag strings in both, and a criteria element must never
//! resolve to a method shape (or vice versa), so there is deliberately no
//! shared table keyed on the tag alone.

use serde_json::Value;

use crate::policy::{
    DaysOfWeekCriteria, DuoMethod, EmailMethod, FederationMethod, KerberosCriteria,
    KerberosMethod, LdapFilterCriteria, PasswordMethod, PictographMethod, PingMeMethod,
    PolicyCriteria, PolicyMethod, QrCodeCriteria, QrCodeMethod, RapidPortalChallengeMethod,
    RoleCriteria, SmsMethod, SocialMethod, SourceNetworkCriteria, TimeOfDayCriteria, TotpMethod,
    UserAgreementMethod, WebAuthnCriteria, WebAuthnMethod,
};

pub(crate) type CriteriaDecoder = fn(Value) -> serde_json::Result<PolicyCriteria>;
pub(crate) type MethodDecoder = fn(Value) -> serde_json::Result<PolicyMethod>;

/// Resolves a criteria discriminator to its decode rule. Unknown
/// discriminators return `None`; the caller decides what skipping means.
pub(crate) fn criteria_decoder(kind: &str) -> Option<CriteriaDecoder> {
    let decoder: CriteriaDecoder = match kind {
        DaysOfWeekCriteria::TYPE => {
            |value| serde_json::from_value(value).map(PolicyCriteria::DayOfWeek)
        }
        WebAuthnCriteria::TYPE => {
            |value| serde_json::from_value(value).map(PolicyCriteria::WebAuthn)
        }
        KerberosCriteria::TYPE => {
            |value| serde_json::from_value(value).map(PolicyCriteria::Kerberos)
        }
        LdapFilterCriteria::TYPE => {
            |value| serde_json::from_value(value).map(PolicyCriteria::LdapFilter)
        }
        QrCodeCriteria::TYPE => |value| serde_json::from_value(value).map(PolicyCriteria::QrCode),
        SourceNetworkCriteria::TYPE => {
            |value| serde_json::from_value(value).map(PolicyCriteria::SourceNetwork)
        }
        RoleCriteria::TYPE => |value| serde_json::from_value(value).map(PolicyCriteria::Role),
        TimeOfDayCriteria::TYPE => {
            |value| serde_json::from_value(value).map(PolicyCriteria::TimeOfDay)
        }
        _ => return None,
    };
    Some(decoder)
}

/// Resolves a method discriminator to its decode rule.
pub(crate) fn method_decoder(kind: &str) -> Option<MethodDecoder> {
    let decoder: MethodDecoder = match kind {
        DuoMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Duo),
        EmailMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Email),
        FederationMethod::TYPE => {
            |value| serde_json::from_value(value).map(PolicyMethod::Federation)
        }
        WebAuthnMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::WebAuthn),
        KerberosMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Kerberos),
        PasswordMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Password),
        PictographMethod::TYPE => {
            |value| serde_json::from_value(value).map(PolicyMethod::Pictograph)
        }
        PingMeMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::PingMe),
        RapidPortalChallengeMethod::TYPE => {
            |value| serde_json::from_value(value).map(PolicyMethod::RapidPortalChallenge)
        }
        QrCodeMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::QrCode),
        SmsMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Sms),
        SocialMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Social),
        TotpMethod::TYPE => |value| serde_json::from_value(value).map(PolicyMethod::Totp),
        UserAgreementMethod::TYPE => {
            |value| serde_json::from_value(value).map(PolicyMethod::UserAgreement)
        }
        _ => return None,
    };
    Some(decoder)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRITERIA_KINDS: [&str; 8] = [
        "dayOfWeek",
        "webAuthn",
        "kerberos",
        "ldapFilter",
        "qrCode",
        "sourceNetwork",
        "role",
        "timeOfDay",
    ];

    const METHOD_KINDS: [&str; 14] = [
        "duo",
        "email",
        "federation",
        "webAuthn",
        "kerberos",
        "password",
        "pictograph",
        "pingMe",
        "rapidPortalChallenge",
        "qrCode",
        "sms",
        "social",
        "totp",
        "userAgreement",
    ];

    #[test]
    fn resolves_every_criteria_kind() {
        for kind in CRITERIA_KINDS {
            assert!(criteria_decoder(kind).is_some(), "missing criteria: {kind}");
        }
    }

    #[test]
    fn resolves_every_method_kind() {
        for kind in METHOD_KINDS {
            assert!(method_decoder(kind).is_some(), "missing method: {kind}");
        }
    }

    #[test]
    fn unknown_kind_resolves_to_none() {
        assert!(criteria_decoder("unknownFutureType").is_none());
        assert!(method_decoder("unknownFutureType").is_none());
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(criteria_decoder("DayOfWeek").is_none());
        assert!(method_decoder("PASSWORD").is_none());
    }

    #[test]
    fn families_do_not_leak_into_each_other() {
        // Tags exclusive to one family must not resolve in the other.
        assert!(method_decoder("role").is_none());
        assert!(method_decoder("sourceNetwork").is_none());
        assert!(criteria_decoder("duo").is_none());
        assert!(criteria_decoder("password").is_none());
    }
}
