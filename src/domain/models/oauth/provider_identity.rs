use std::fmt;
use crate::config::OAuthProvider;

/// 프로바이더가 인증한 계정 식별자
///
/// 사용자 레코드의 어느 필드(`google_id`, `twitter_id`)로 조회/저장할지를
/// 타입으로 결정합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderIdentity {
    Google(String),
    Twitter(String),
}

impl ProviderIdentity {
    pub fn new(provider: OAuthProvider, id: String) -> Self {
        match provider {
            OAuthProvider::Google => ProviderIdentity::Google(id),
            OAuthProvider::Twitter => ProviderIdentity::Twitter(id),
        }
    }

    pub fn provider(&self) -> OAuthProvider {
        match self {
            ProviderIdentity::Google(_) => OAuthProvider::Google,
            ProviderIdentity::Twitter(_) => OAuthProvider::Twitter,
        }
    }

    /// 사용자 문서의 필드 이름
    pub fn field(&self) -> &'static str {
        match self {
            ProviderIdentity::Google(_) => "google_id",
            ProviderIdentity::Twitter(_) => "twitter_id",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ProviderIdentity::Google(id) | ProviderIdentity::Twitter(id) => id,
        }
    }
}

impl fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_maps_to_document_field() {
        let google = ProviderIdentity::new(OAuthProvider::Google, "1234".to_string());
        let twitter = ProviderIdentity::new(OAuthProvider::Twitter, "1234".to_string());

        assert_eq!(google.field(), "google_id");
        assert_eq!(twitter.field(), "twitter_id");
        assert_eq!(google.value(), "1234");
        assert_ne!(google, twitter);
        assert_eq!(twitter.to_string(), "twitter:1234");
    }
}
