pub mod access_control;
pub mod authentication;
pub mod components;
pub mod data_exposure;
pub mod deserialization;
pub mod injection;
pub mod logging;
pub mod misconfig;
mod payloads;
pub mod xss;
pub mod xxe;

pub use payloads::Payloads;

use crate::models::VulnClass;

/// Suggested fix per category, attached to FAIL findings.
pub fn remediation(class: VulnClass) -> &'static str {
    match class {
        VulnClass::Injection => "Use parameterized queries or an ORM; never interpolate user input into SQL",
        VulnClass::BrokenAuthentication => "Reject default and weak credentials, enforce a password policy, and regenerate session identifiers on every login",
        VulnClass::SensitiveDataExposure => "Strip sensitive fields from API responses and serve all traffic over HTTPS",
        VulnClass::XmlExternalEntities => "Disable DTD and external entity resolution in the XML parser",
        VulnClass::BrokenAccessControl => "Check resource ownership server-side before returning another user's data",
        VulnClass::SecurityMisconfiguration => "Disable debug mode in production and set X-Content-Type-Options, X-Frame-Options and Strict-Transport-Security headers",
        VulnClass::CrossSiteScripting => "HTML-encode user content on output and set a Content-Security-Policy",
        VulnClass::InsecureDeserialization => "Never deserialize untrusted input; use a schema-validated format such as plain JSON",
        VulnClass::VulnerableComponents => "Run dependency scanning in CI and upgrade vulnerable packages promptly",
        VulnClass::InsufficientLogging => "Log authentication failures with actor and source, and alert on repeated failures",
    }
}
