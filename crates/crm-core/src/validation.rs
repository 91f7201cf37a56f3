//! Website Domain Validation
//!
//! Client-side check run before `POST /websites/`. The server validates
//! again; this only saves a round trip for obvious mistakes.

use std::sync::LazyLock;

use regex::Regex;

const RESERVED_DOMAINS: &[&str] = &["system", "admin", "internal", "__internal__", "localhost"];

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z]{2,})+$")
        .expect("domain pattern is valid")
});

/// Trim, lower-case, drop a scheme prefix and one trailing slash
pub fn sanitize_domain(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}

/// Validate an already-sanitised domain; `Err` carries the message to show
pub fn validate_domain(domain: &str) -> Result<(), &'static str> {
    if domain.is_empty() {
        return Err("Domain is required.");
    }
    if RESERVED_DOMAINS.contains(&domain) {
        return Err("This domain name is reserved.");
    }
    if !DOMAIN_RE.is_match(domain) {
        return Err("Invalid domain format. Example: example.com");
    }
    Ok(())
}

/// Sanitise then validate; returns the domain to submit
pub fn prepare_domain(input: &str) -> Result<String, &'static str> {
    let domain = sanitize_domain(input);
    validate_domain(&domain)?;
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_rejected() {
        assert_eq!(prepare_domain("admin"), Err("This domain name is reserved."));
        assert_eq!(prepare_domain("LOCALHOST"), Err("This domain name is reserved."));
    }

    #[test]
    fn test_valid_domains() {
        assert_eq!(prepare_domain("example.com"), Ok("example.com".to_string()));
        assert_eq!(prepare_domain("my-store.co.uk"), Ok("my-store.co.uk".to_string()));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            prepare_domain("not a domain"),
            Err("Invalid domain format. Example: example.com")
        );
        assert!(prepare_domain("example").is_err());
        assert!(prepare_domain("-bad.com").is_err());
        assert!(prepare_domain("example.c").is_err());
        assert_eq!(prepare_domain("   "), Err("Domain is required."));
    }

    #[test]
    fn test_scheme_and_slash_stripped() {
        assert_eq!(sanitize_domain("https://example.com/"), "example.com");
        assert_eq!(sanitize_domain(" HTTP://Example.com "), "example.com");
        assert_eq!(prepare_domain("https://example.com/"), Ok("example.com".to_string()));
    }
}
