//! URL 接受模块
//!
//! 把用户输入的 URL 规范成可保存的 http/https 绝对地址。
//! 没有写协议的输入先尝试补 `https://`，失败再尝试 `http://`。

use url::Url;

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(input) => write!(
                f,
                "Invalid URL: {}. Enter a complete address such as https://example.com",
                input
            ),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// Returns true when `candidate` parses as an absolute http or https URL.
pub fn is_valid_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// 接受用户输入的 URL
///
/// 返回最终保存的字符串（不做二次序列化，`example.com` 得到 `https://example.com`）。
pub fn accept_url(raw: &str) -> Result<String, UrlValidationError> {
    accept_url_with(raw, is_valid_http_url)
}

/// Same as [`accept_url`] with a caller-supplied validity check for each candidate.
pub fn accept_url_with<F>(raw: &str, is_valid: F) -> Result<String, UrlValidationError>
where
    F: Fn(&str) -> bool,
{
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = trimmed.to_lowercase();

    // 检查危险协议
    for proto in DANGEROUS_PROTOCOLS {
        if lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if lower.starts_with(HTTPS_PREFIX) || lower.starts_with(HTTP_PREFIX) {
        return if is_valid(trimmed) {
            Ok(trimmed.to_string())
        } else {
            Err(UrlValidationError::InvalidFormat(trimmed.to_string()))
        };
    }

    // `ftp://host` 之类的显式协议不做补全
    if let Some(scheme) = explicit_scheme(trimmed) {
        return Err(UrlValidationError::InvalidProtocol(format!("{}:", scheme)));
    }

    let https_candidate = format!("{}{}", HTTPS_PREFIX, trimmed);
    if is_valid(&https_candidate) {
        return Ok(https_candidate);
    }

    let http_candidate = format!("{}{}", HTTP_PREFIX, trimmed);
    if is_valid(&http_candidate) {
        return Ok(http_candidate);
    }

    Err(UrlValidationError::InvalidFormat(trimmed.to_string()))
}

/// Scheme of an input shaped like `<scheme>://...`, if any.
fn explicit_scheme(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        Some(scheme)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_is_prefixed_with_https() {
        assert_eq!(
            accept_url("example.com").as_deref(),
            Ok("https://example.com")
        );
        assert_eq!(
            accept_url("  example.com/path?q=1  ").as_deref(),
            Ok("https://example.com/path?q=1")
        );
    }

    #[test]
    fn test_explicit_scheme_is_kept_verbatim() {
        assert_eq!(
            accept_url("http://example.com").as_deref(),
            Ok("http://example.com")
        );
        assert_eq!(
            accept_url("https://example.com/a").as_deref(),
            Ok("https://example.com/a")
        );
        assert_eq!(
            accept_url("HTTPS://example.com").as_deref(),
            Ok("HTTPS://example.com")
        );
    }

    #[test]
    fn test_http_fallback_when_https_is_rejected() {
        let only_http = |candidate: &str| candidate.starts_with("http://");
        assert_eq!(
            accept_url_with("intranet.local", only_http).as_deref(),
            Ok("http://intranet.local")
        );
    }

    #[test]
    fn test_both_candidates_rejected() {
        assert!(matches!(
            accept_url_with("example.com", |_| false),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            accept_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            accept_url("https://exa mple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(accept_url(""), Err(UrlValidationError::EmptyUrl));
        assert_eq!(accept_url("   "), Err(UrlValidationError::EmptyUrl));
    }

    #[test]
    fn test_dangerous_protocols() {
        assert!(matches!(
            accept_url("javascript:alert(1)"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            accept_url("JAVASCRIPT:alert(1)"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            accept_url("data:text/html,<script>alert(1)</script>"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            accept_url("file:///etc/passwd"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
    }

    #[test]
    fn test_other_explicit_protocols() {
        assert!(matches!(
            accept_url("ftp://example.com"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
        assert!(matches!(
            accept_url("ws://example.com/socket"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
    }

    #[test]
    fn test_is_valid_http_url() {
        assert!(is_valid_http_url("http://localhost:8080"));
        assert!(is_valid_http_url("https://example.com/path?query=1"));
        assert!(!is_valid_http_url("mailto:test@example.com"));
        assert!(!is_valid_http_url("example.com"));
    }
}
