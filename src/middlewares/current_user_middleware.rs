use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::current_user_inner::CurrentUserMiddlewareService;
use crate::services::users::UserService;

/// 세션 사용자 복원 미들웨어
///
/// 세션에 기록된 사용자 ID를 사용자 저장소에서 조회해, 찾으면
/// [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
/// request extension에 넣습니다. `actix-session`의 `SessionMiddleware` 안쪽에 둡니다.
pub struct CurrentUserMiddleware {
    users: Arc<UserService>,
}

impl CurrentUserMiddleware {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CurrentUserMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CurrentUserMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CurrentUserMiddlewareService {
            service: Rc::new(service),
            users: self.users.clone(),
        }))
    }
}
