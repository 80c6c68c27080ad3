//! # OAuth 2.0 인증 서비스
//!
//! Google과 Twitter의 Authorization Code 플로우를 처리합니다.
//!
//! ```text
//! 브라우저                      우리 서버                          프로바이더
//!    │ GET /auth/{p}               │                                   │
//!    ├────────────────────────────►│ state (+PKCE) 생성, 세션에 저장    │
//!    │ 303 → authorize URL         │                                   │
//!    │◄────────────────────────────┤                                   │
//!    │ 사용자 동의 ─────────────────┼──────────────────────────────────►│
//!    │ GET /auth/{p}/callback?code&state                               │
//!    ├────────────────────────────►│ state 검증                        │
//!    │                             │ POST token_uri (code 교환) ──────►│
//!    │                             │ GET userinfo_uri (Bearer) ───────►│
//!    │                             │ 계정 ID → find-or-create          │
//!    │ 303 → /secrets              │                                   │
//!    │◄────────────────────────────┤                                   │
//! ```
//!
//! - **Google**: `profile` 스코프, 토큰 교환 시 클라이언트 시크릿을 본문에 담음,
//!   UserInfo v3의 `sub`를 계정 ID로 사용
//! - **Twitter**: PKCE(S256) 필수, 토큰 교환 시 Basic 인증, `/2/users/me`의 `data.id` 사용
//!
//! 인증 URL, CSRF state, PKCE, 코드 교환은 `oauth2` 크레이트가 담당하고
//! 프로필 조회만 `reqwest`로 직접 호출합니다.
//!
//! 모든 실패는 `AppError::OAuthFailure`로 보고되며 핸들러는 `/login`으로
//! 리다이렉트합니다.

use std::sync::Arc;
use log::{debug, warn};
use oauth2::basic::BasicClient;
use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use crate::{
    config::{AppConfig, OAuthProvider, OAuthProviderConfig},
    domain::{
        dto::users::request::OAuthCallbackQuery,
        models::{
            auth::PendingOAuth,
            oauth::{GoogleUserInfo, ProviderIdentity, TwitterUserResponse},
        },
    },
    errors::{AppError, AppResult},
};

/// 인증 URL과 토큰 URL이 설정된 OAuth 클라이언트
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// 프로바이더로 보낼 리다이렉트 URL과 세션에 저장할 값
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub pending: PendingOAuth,
}

pub struct OAuthService {
    config: Arc<AppConfig>,
    http: reqwest::Client,
}

impl OAuthService {
    /// 토큰 교환 응답이 리다이렉트를 따라가지 않도록 HTTP 클라이언트를 구성합니다
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { config, http })
    }

    fn provider_config(&self, provider: OAuthProvider) -> AppResult<&OAuthProviderConfig> {
        self.config.oauth.provider(provider).ok_or_else(|| {
            AppError::OAuthFailure(format!("{} 로그인이 설정되지 않았습니다", provider))
        })
    }

    fn client(&self, provider: OAuthProvider) -> AppResult<ConfiguredClient> {
        let cfg = self.provider_config(provider)?;
        let invalid = |e: oauth2::url::ParseError| {
            AppError::OAuthFailure(format!("{} 엔드포인트 URL 오류: {}", provider, e))
        };

        let auth_type = match provider {
            OAuthProvider::Google => AuthType::RequestBody,
            OAuthProvider::Twitter => AuthType::BasicAuth,
        };

        Ok(BasicClient::new(ClientId::new(cfg.client_id.clone()))
            .set_client_secret(ClientSecret::new(cfg.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(cfg.auth_uri.clone()).map_err(invalid)?)
            .set_token_uri(TokenUrl::new(cfg.token_uri.clone()).map_err(invalid)?)
            .set_redirect_uri(RedirectUrl::new(self.config.callback_url(provider)).map_err(invalid)?)
            .set_auth_type(auth_type))
    }

    /// 인증 URL 생성
    ///
    /// state와 (Twitter의 경우) PKCE 검증자를 새로 만들어 [`PendingOAuth`]로 돌려줍니다.
    pub fn authorization_request(&self, provider: OAuthProvider) -> AppResult<AuthorizationRequest> {
        let cfg = self.provider_config(provider)?;
        let client = self.client(provider)?;

        let mut request = client.authorize_url(CsrfToken::new_random);
        for scope in cfg.scope.split_whitespace() {
            request = request.add_scope(Scope::new(scope.to_string()));
        }

        let code_verifier = if provider.uses_pkce() {
            let (challenge, verifier) = PkceCodeChallenge::new_random_sha256();
            request = request.set_pkce_challenge(challenge);
            Some(verifier.secret().clone())
        } else {
            None
        };

        let (url, state) = request.url();

        Ok(AuthorizationRequest {
            url: url.to_string(),
            pending: PendingOAuth {
                provider,
                state: state.secret().clone(),
                code_verifier,
            },
        })
    }

    /// 콜백 처리: state 검증, 코드 교환, 프로필 조회
    pub async fn complete(
        &self,
        provider: OAuthProvider,
        pending: Option<PendingOAuth>,
        query: &OAuthCallbackQuery,
    ) -> AppResult<ProviderIdentity> {
        if let Some(error) = &query.error {
            return Err(AppError::OAuthFailure(format!(
                "{} 인증 거부: {} {}",
                provider,
                error,
                query.error_description.as_deref().unwrap_or("")
            )));
        }

        let pending = pending
            .filter(|p| p.provider == provider)
            .ok_or_else(|| AppError::OAuthFailure("진행 중인 OAuth 로그인이 없습니다".to_string()))?;

        if query.state.as_deref() != Some(pending.state.as_str()) {
            warn!("OAuth state 불일치 ({})", provider);
            return Err(AppError::OAuthFailure("유효하지 않은 OAuth state".to_string()));
        }

        let code = query
            .code
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::OAuthFailure("인증 코드가 없습니다".to_string()))?;

        let access_token = self.exchange_code(provider, code, pending.code_verifier).await?;
        let identity = self.fetch_identity(provider, &access_token).await?;

        debug!("OAuth 인증 완료: {}", identity);
        Ok(identity)
    }

    async fn exchange_code(
        &self,
        provider: OAuthProvider,
        code: &str,
        code_verifier: Option<String>,
    ) -> AppResult<String> {
        let client = self.client(provider)?;
        let mut request = client.exchange_code(AuthorizationCode::new(code.to_string()));

        if provider.uses_pkce() {
            let verifier = code_verifier.ok_or_else(|| {
                AppError::OAuthFailure("PKCE code_verifier가 없습니다".to_string())
            })?;
            request = request.set_pkce_verifier(PkceCodeVerifier::new(verifier));
        }

        let token = request
            .request_async(&self.http)
            .await
            .map_err(|e| AppError::OAuthFailure(format!("{} 토큰 교환 실패: {}", provider, e)))?;

        Ok(token.access_token().secret().clone())
    }

    async fn fetch_identity(&self, provider: OAuthProvider, access_token: &str) -> AppResult<ProviderIdentity> {
        let cfg = self.provider_config(provider)?;
        let response = self.http
            .get(&cfg.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("{} 사용자 정보 요청 실패: {}", provider, e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::OAuthFailure(format!(
                "{} 사용자 정보 조회 실패: {}", provider, error_text
            )));
        }

        let parse_error = |e: reqwest::Error| {
            AppError::OAuthFailure(format!("{} 사용자 정보 파싱 실패: {}", provider, e))
        };

        let id = match provider {
            OAuthProvider::Google => response.json::<GoogleUserInfo>().await.map_err(parse_error)?.sub,
            OAuthProvider::Twitter => response.json::<TwitterUserResponse>().await.map_err(parse_error)?.data.id,
        };

        Ok(ProviderIdentity::new(provider, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::config::{OAuthConfig, OAuthProviderConfig};
    use oauth2::url::Url;
    use wiremock::{
        matchers::{body_string_contains, header, header_exists, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn provider_config(server_uri: &str) -> OAuthProviderConfig {
        OAuthProviderConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            auth_uri: format!("{}/authorize", server_uri),
            token_uri: format!("{}/token", server_uri),
            userinfo_uri: format!("{}/userinfo", server_uri),
            scope: "profile".to_string(),
        }
    }

    fn service(server_uri: &str) -> OAuthService {
        let mut config = AppConfig::development();
        config.oauth = OAuthConfig {
            google: Some(provider_config(server_uri)),
            twitter: Some(OAuthProviderConfig {
                scope: "users.read tweet.read".to_string(),
                ..provider_config(server_uri)
            }),
        };
        OAuthService::new(Arc::new(config)).unwrap()
    }

    fn callback(code: &str, state: &str) -> OAuthCallbackQuery {
        OAuthCallbackQuery {
            code: Some(code.to_string()),
            state: Some(state.to_string()),
            error: None,
            error_description: None,
        }
    }

    fn query_of(url: &str) -> HashMap<String, String> {
        Url::parse(url).unwrap().query_pairs().into_owned().collect()
    }

    #[test]
    fn test_google_authorization_url() {
        let service = service("https://idp.test");
        let request = service.authorization_request(OAuthProvider::Google).unwrap();
        let query = query_of(&request.url);

        assert!(request.url.starts_with("https://idp.test/authorize?"));
        assert_eq!(query["client_id"], "client-id");
        assert_eq!(query["redirect_uri"], "http://localhost:3000/auth/google/callback");
        assert_eq!(query["response_type"], "code");
        assert_eq!(query["scope"], "profile");
        assert_eq!(query["state"], request.pending.state);
        assert!(!query.contains_key("code_challenge"));
        assert!(request.pending.code_verifier.is_none());
    }

    #[test]
    fn test_twitter_authorization_url_uses_pkce() {
        let service = service("https://idp.test");
        let request = service.authorization_request(OAuthProvider::Twitter).unwrap();
        let query = query_of(&request.url);

        let verifier = PkceCodeVerifier::new(request.pending.code_verifier.clone().unwrap());
        let challenge = PkceCodeChallenge::from_code_verifier_sha256(&verifier);

        assert_eq!(query["code_challenge"], challenge.as_str());
        assert_eq!(query["code_challenge_method"], "S256");
        assert_eq!(query["scope"], "users.read tweet.read");
    }

    #[test]
    fn test_each_request_gets_fresh_state() {
        let service = service("https://idp.test");
        let first = service.authorization_request(OAuthProvider::Twitter).unwrap().pending;
        let second = service.authorization_request(OAuthProvider::Twitter).unwrap().pending;

        assert_ne!(first.state, second.state);
        assert_ne!(first.code_verifier, second.code_verifier);
    }

    #[test]
    fn test_unconfigured_provider_fails() {
        let service = OAuthService::new(Arc::new(AppConfig::development())).unwrap();

        assert!(matches!(
            service.authorization_request(OAuthProvider::Google),
            Err(AppError::OAuthFailure(_))
        ));
    }

    #[actix_web::test]
    async fn test_state_mismatch_is_rejected_before_exchange() {
        let server = MockServer::start().await;
        let service = service(&server.uri());
        let pending = service.authorization_request(OAuthProvider::Google).unwrap().pending;

        let result = service
            .complete(OAuthProvider::Google, Some(pending), &callback("code", "forged"))
            .await;

        assert!(matches!(result, Err(AppError::OAuthFailure(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_missing_pending_and_provider_error() {
        let service = service("https://idp.test");

        let no_pending = service.complete(OAuthProvider::Google, None, &callback("c", "s")).await;
        assert!(matches!(no_pending, Err(AppError::OAuthFailure(_))));

        let denied = OAuthCallbackQuery {
            code: None,
            state: None,
            error: Some("access_denied".to_string()),
            error_description: None,
        };
        let result = service.complete(OAuthProvider::Twitter, None, &denied).await;
        assert!(matches!(result, Err(AppError::OAuthFailure(_))));
    }

    #[actix_web::test]
    async fn test_google_code_exchange_and_profile() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=auth-code"))
            .and(body_string_contains("client_secret=client-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "google-access",
                "token_type": "Bearer",
                "expires_in": 3599
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", "Bearer google-access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sub": "109876543210",
                "name": "Alice"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = service(&server.uri());
        let pending = service.authorization_request(OAuthProvider::Google).unwrap().pending;
        let state = pending.state.clone();

        let identity = service
            .complete(OAuthProvider::Google, Some(pending), &callback("auth-code", &state))
            .await
            .unwrap();

        assert_eq!(identity, ProviderIdentity::Google("109876543210".to_string()));
    }

    #[actix_web::test]
    async fn test_twitter_exchange_sends_verifier_and_basic_auth() {
        let server = MockServer::start().await;
        let service = service(&server.uri());
        let pending = service.authorization_request(OAuthProvider::Twitter).unwrap().pending;
        let verifier = pending.code_verifier.clone().unwrap();
        let state = pending.state.clone();

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header_exists("authorization"))
            .and(body_string_contains(format!("code_verifier={}", verifier)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "twitter-access",
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "id": "2244994945", "username": "dev" }
            })))
            .mount(&server)
            .await;

        let identity = service
            .complete(OAuthProvider::Twitter, Some(pending), &callback("tw-code", &state))
            .await
            .unwrap();

        assert_eq!(identity, ProviderIdentity::Twitter("2244994945".to_string()));
    }

    #[actix_web::test]
    async fn test_failed_token_exchange() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = service(&server.uri());
        let pending = service.authorization_request(OAuthProvider::Google).unwrap().pending;
        let state = pending.state.clone();

        let result = service
            .complete(OAuthProvider::Google, Some(pending), &callback("bad", &state))
            .await;

        assert!(matches!(result, Err(AppError::OAuthFailure(_))));
    }
}
