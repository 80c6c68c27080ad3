use std::rc::Rc;
use std::sync::Arc;
use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthSession, AuthenticatedUser};
use crate::services::users::UserService;

pub struct CurrentUserMiddlewareService<S> {
    pub service: Rc<S>,
    pub users: Arc<UserService>,
}

impl<S, B> Service<ServiceRequest> for CurrentUserMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let users = self.users.clone();

        Box::pin(async move {
            let session = AuthSession::new(req.get_session());

            let user_id = match session.user_id() {
                Ok(user_id) => user_id,
                Err(err) => {
                    // 읽을 수 없는 세션 값은 익명으로 취급
                    log::warn!("세션 사용자 ID 해석 실패: {}", err);
                    session.logout();
                    None
                }
            };

            if let Some(user_id) = user_id {
                match users.find_by_id(&user_id).await {
                    Ok(Some(user)) => {
                        let user = AuthenticatedUser::new(user_id, user);
                        log::debug!("세션 사용자 복원: {} ({})", user.display_name(), user.user_id);
                        req.extensions_mut().insert(user);
                    }
                    Ok(None) => {
                        log::debug!("세션의 사용자({})를 찾을 수 없어 익명으로 처리", user_id);
                    }
                    Err(err) => {
                        log::error!("세션 사용자 조회 실패: {}", err);
                        return Ok(req.error_response(err).map_into_right_body());
                    }
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
