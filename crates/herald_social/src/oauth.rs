//! OAuth 1.0a request signing (HMAC-SHA1).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use herald_error::{ConfigError, HeraldResult};
use rand::RngCore;
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

const CONSUMER_KEY_VAR: &str = "X_CONSUMER_KEY";
const CONSUMER_SECRET_VAR: &str = "X_SECRET_KEY";
const ACCESS_TOKEN_VAR: &str = "X_ACCESS_TOKEN";
const TOKEN_SECRET_VAR: &str = "X_ACCESS_TOKEN_SECRET";

/// Consumer and access-token key pairs.
#[derive(Clone)]
pub struct OAuthCredentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    token_secret: String,
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &"[REDACTED]")
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .field("token_secret", &"[REDACTED]")
            .finish()
    }
}

impl OAuthCredentials {
    /// Bundle the four credentials.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Read `X_CONSUMER_KEY`, `X_SECRET_KEY`, `X_ACCESS_TOKEN` and
    /// `X_ACCESS_TOKEN_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every unset or empty variable.
    pub fn from_env() -> HeraldResult<Self> {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        let values = [
            CONSUMER_KEY_VAR,
            CONSUMER_SECRET_VAR,
            ACCESS_TOKEN_VAR,
            TOKEN_SECRET_VAR,
        ]
        .map(|name| (name, read(name)));

        let missing: Vec<&str> = values
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing X API credentials: {}",
                missing.join(", ")
            ))
            .into());
        }

        let [(_, ck), (_, cs), (_, at), (_, ts)] = values;
        Ok(Self::new(
            ck.unwrap_or_default(),
            cs.unwrap_or_default(),
            at.unwrap_or_default(),
            ts.unwrap_or_default(),
        ))
    }
}

/// Produces `Authorization` headers for requests with a JSON body.
///
/// A JSON body is not part of the signature; only the OAuth protocol
/// parameters are signed.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    /// Signer using `credentials`.
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    /// Header for `method url`, with a fresh nonce and the current time.
    pub fn authorization_header(&self, method: &str, url: &str) -> HeraldResult<String> {
        let timestamp = chrono::Utc::now().timestamp().max(0) as u64;
        self.authorization_header_with(method, url, &generate_nonce(), timestamp)
    }

    /// Header for `method url` with a caller-supplied nonce and timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_social::{OAuthCredentials, OAuthSigner};
    ///
    /// let signer = OAuthSigner::new(OAuthCredentials::new("ck", "cs", "tk", "ts"));
    /// let header = signer
    ///     .authorization_header_with("POST", "https://api.x.com/2/tweets", "n1", 1_700_000_000)
    ///     .unwrap();
    /// assert!(header.contains(r#"oauth_signature="IkqzcoSodURYDr0EVrc6NxWWJfI%3D""#));
    /// ```
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        nonce: &str,
        timestamp: u64,
    ) -> HeraldResult<String> {
        let mut params = BTreeMap::from([
            ("oauth_consumer_key".to_string(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ]);

        let base = signature_base_string(method, url, &params);
        let signature = self.sign(&base)?;
        params.insert("oauth_signature".to_string(), signature);

        let rendered: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect();
        Ok(format!("OAuth {}", rendered.join(", ")))
    }

    fn sign(&self, base: &str) -> HeraldResult<String> {
        let key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.token_secret)
        );
        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| ConfigError::new(format!("Invalid signing key: {}", e)))?;
        mac.update(base.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// RFC 3986 percent-encoding: everything except `A-Z a-z 0-9 - _ . ~`.
///
/// # Examples
///
/// ```
/// use herald_social::percent_encode;
///
/// assert_eq!(percent_encode("a b"), "a%20b");
/// assert_eq!(percent_encode("!'()*"), "%21%27%28%29%2A");
/// ```
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `METHOD&enc(url)&enc(k1=v1&k2=v2...)` with keys in lexicographic order.
pub fn signature_base_string(method: &str, url: &str, params: &BTreeMap<String, String>) -> String {
    let param_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.x.com/2/tweets";

    fn signer() -> OAuthSigner {
        OAuthSigner::new(OAuthCredentials::new("ck", "cs", "tk", "ts"))
    }

    #[test]
    fn base_string_sorts_and_encodes_params() {
        let params = BTreeMap::from([
            ("oauth_version".to_string(), "1.0".to_string()),
            ("oauth_consumer_key".to_string(), "ck".to_string()),
            ("oauth_nonce".to_string(), "n1".to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), "1700000000".to_string()),
            ("oauth_token".to_string(), "tk".to_string()),
        ]);

        assert_eq!(
            signature_base_string("POST", URL, &params),
            "POST&https%3A%2F%2Fapi.x.com%2F2%2Ftweets&oauth_consumer_key%3Dck%26oauth_nonce%3Dn1%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26oauth_token%3Dtk%26oauth_version%3D1.0"
        );
    }

    #[test]
    fn header_matches_known_signature() {
        let header = signer()
            .authorization_header_with("POST", URL, "n1", 1_700_000_000)
            .unwrap();

        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"n1\", oauth_signature=\"IkqzcoSodURYDr0EVrc6NxWWJfI%3D\", oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1700000000\", oauth_token=\"tk\", oauth_version=\"1.0\""
        );
    }

    #[test]
    fn fresh_headers_use_distinct_nonces() {
        let a = signer().authorization_header("POST", URL).unwrap();
        let b = signer().authorization_header("POST", URL).unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("OAuth oauth_consumer_key=\"ck\""));
    }

    #[test]
    fn nonce_is_32_hex_chars() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", OAuthCredentials::new("ck-x", "cs-x", "tk-x", "ts-x"));
        assert!(!rendered.contains("cs-x"));
        assert!(!rendered.contains("ts-x"));
    }
}
