use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 로그인 가드
///
/// 세션 미들웨어가 사용자를 복원하지 못한 요청을 로그인 페이지로 돌려보냅니다.
pub struct AuthMiddleware {
    login_path: &'static str,
}

impl AuthMiddleware {
    /// 인증 필수, 미인증 시 `/login`으로 이동
    pub fn required() -> Self {
        Self { login_path: "/login" }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            login_path: self.login_path,
        }))
    }
}
