/*!
 * 错误日志中间件
 *
 * 所有错误响应统一在这里记录：方法、路径、状态码和错误文本。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::App;
 * use crate::middlewares::ErrorLogger;
 *
 * App::new().wrap(ErrorLogger)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::error;

#[derive(Clone)]
pub struct ErrorLogger;

impl<S, B> Transform<S, ServiceRequest> for ErrorLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            match srv.call(req).await {
                Ok(res) => {
                    let status = res.status();
                    if status.is_client_error() || status.is_server_error() {
                        // 响应由错误构造时带着原始错误，否则退回状态码的标准描述
                        let err_text = res
                            .response()
                            .error()
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| {
                                status
                                    .canonical_reason()
                                    .unwrap_or("unknown error")
                                    .to_string()
                            });

                        error!("{} | {} at {}: {}", status.as_u16(), method, path, err_text);
                    }

                    Ok(res)
                }
                // 处理器抛出的错误在这里记录后继续上抛，由框架渲染响应体
                Err(err) => {
                    let status = err.as_response_error().status_code();
                    error!("{} | {} at {}: {}", status.as_u16(), method, path, err);
                    Err(err)
                }
            }
        })
    }
}
