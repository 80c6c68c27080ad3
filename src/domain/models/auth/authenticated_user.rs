use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::domain::entities::users::user::User;

/// 세션에서 복원된 사용자 정보
///
/// 세션 미들웨어가 세션의 사용자 참조를 실제 사용자로 해석한 경우에만
/// 요청 확장(extensions)에 들어갑니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId hex)
    pub user_id: String,

    pub user: User,
}

impl AuthenticatedUser {
    pub fn new(user_id: String, user: User) -> Self {
        Self { user_id, user }
    }

    pub fn display_name(&self) -> &str {
        self.user.display_name()
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
