use std::fmt;

/// API key and secret issued under Settings > Developers.
#[derive(Clone)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token returned by `apiLogin`. Only lives for a single run.
#[derive(Clone)]
pub struct SessionToken {
    pub(crate) access_token: String,
    pub expires_in: i64,
    pub status: String,
}

impl SessionToken {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("status", &self.status)
            .finish()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub local_start_date: String,
    pub local_start_time: String,
    pub first_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secrets() {
        let credentials = Credentials::new("pk_user_test", "sk_user_test");
        let token = SessionToken {
            access_token: "token_value".into(),
            expires_in: 3600,
            status: "SUCCESS".into(),
        };

        let credentials_debug = format!("{credentials:?}");
        let token_debug = format!("{token:?}");
        assert!(credentials_debug.contains("pk_user_test"));
        assert!(!credentials_debug.contains("sk_user_test"));
        assert!(!token_debug.contains("token_value"));
        assert!(token_debug.contains("3600"));
    }

    #[test]
    fn bearer_header_value() {
        let token = SessionToken {
            access_token: "abc".into(),
            expires_in: 60,
            status: "SUCCESS".into(),
        };

        assert_eq!(token.bearer(), "Bearer abc");
        assert_eq!(token.access_token(), "abc");
    }
}
