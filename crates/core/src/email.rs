//! Email address composition and domain checks.

use regex::Regex;
use std::sync::OnceLock;

fn domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        )
        .expect("valid domain regex")
    })
}

/// The trimmed domain when one is present and non-blank.
#[must_use]
pub fn configured_domain(domain: Option<&str>) -> Option<&str> {
    domain.map(str::trim).filter(|d| !d.is_empty())
}

/// `username@domain`, or `None` when either part is missing.
///
/// The domain is not validated here; see [`is_valid_domain`].
#[must_use]
pub fn compose_email(username: &str, domain: Option<&str>) -> Option<String> {
    let domain = configured_domain(domain)?;
    if username.is_empty() {
        return None;
    }
    Some(format!("{username}@{domain}"))
}

/// Whether `domain` looks like a DNS name: dot-separated labels of 1-63 ASCII
/// letters, digits or inner hyphens.
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.trim();
    !domain.is_empty() && domain_regex().is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_email() {
        assert_eq!(
            compose_email("tungpt", Some("acme.com")),
            Some("tungpt@acme.com".to_string())
        );
        assert_eq!(
            compose_email("tungpt", Some("  acme.com ")),
            Some("tungpt@acme.com".to_string())
        );
    }

    #[test]
    fn test_compose_email_missing_parts() {
        assert_eq!(compose_email("tungpt", None), None);
        assert_eq!(compose_email("tungpt", Some("   ")), None);
        assert_eq!(compose_email("", Some("acme.com")), None);
    }

    #[test]
    fn test_compose_does_not_validate() {
        assert_eq!(
            compose_email("annv", Some("not a domain")),
            Some("annv@not a domain".to_string())
        );
    }

    #[test]
    fn test_valid_domains() {
        assert!(is_valid_domain("company.com"));
        assert!(is_valid_domain("mail.company.com.vn"));
        assert!(is_valid_domain("a"));
        assert!(is_valid_domain("x-1.io"));
        assert!(is_valid_domain(" company.com "));
        assert!(is_valid_domain(&format!("{}.com", "a".repeat(63))));
    }

    #[test]
    fn test_invalid_domains() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("   "));
        assert!(!is_valid_domain("-bad-.com"));
        assert!(!is_valid_domain("bad-.com"));
        assert!(!is_valid_domain("company..com"));
        assert!(!is_valid_domain(".com"));
        assert!(!is_valid_domain("company.com."));
        assert!(!is_valid_domain("công-ty.vn"));
        assert!(!is_valid_domain("under_score.com"));
        assert!(!is_valid_domain(&format!("{}.com", "a".repeat(64))));
    }
}
