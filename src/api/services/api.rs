use std::sync::Arc;

use actix_web::{HttpResponse, web};
use tracing::{debug, instrument};

use crate::services::{LinkService, RecordingNavigator, RedirectOutcome, ShortLinkResolver};

/// JSON endpoints used by the page script
pub struct ApiService;

impl ApiService {
    /// 解析短链接片段，返回页面脚本需要执行的动作
    #[instrument(skip(links))]
    pub async fn resolve(id: web::Path<String>, links: web::Data<Arc<LinkService>>) -> HttpResponse {
        let mut navigator = RecordingNavigator::with_fragment(id.into_inner());
        let outcome = ShortLinkResolver::resolve(&mut navigator, &links.snapshot());
        if let RedirectOutcome::Opened(link) = &outcome {
            debug!("Short link resolved to {}", link.url);
        }
        HttpResponse::Ok().json(navigator)
    }

    /// 与持久化格式一致的链接列表
    pub async fn list_links(links: web::Data<Arc<LinkService>>) -> HttpResponse {
        HttpResponse::Ok().json(links.links())
    }
}

pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/resolve/{id}", web::get().to(ApiService::resolve))
        .route("/links", web::get().to(ApiService::list_links))
}
