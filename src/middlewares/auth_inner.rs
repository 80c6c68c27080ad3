use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::see_other;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub login_path: &'static str,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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
        let login_path = self.login_path;

        Box::pin(async move {
            let authenticated = req.extensions().contains::<AuthenticatedUser>();

            if !authenticated {
                log::debug!("미인증 요청 차단: {} → {}", req.path(), login_path);
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, see_other(login_path))
                    .map_into_right_body();
                return Ok(res);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
