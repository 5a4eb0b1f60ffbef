use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, error, instrument, trace, warn};

use super::SiteContext;
use crate::errors::LinkshelfError;
use crate::services::{LinkService, Notice};
use crate::ui::Page;
use crate::worker::{AssetRequest, AssetResponse, AssetWorkerHandle, FetchOutcome, Fetcher};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub qr: Option<String>,
}

pub struct FrontendService;

impl FrontendService {
    /// 渲染完整页面
    pub fn render_page(
        status: StatusCode,
        site: &SiteContext,
        links: &LinkService,
        page_path: &str,
        notice: Option<Notice>,
        qr_for: Option<&str>,
    ) -> HttpResponse {
        let snapshot = links.links();
        let page = Page::new(&site.base_path)
            .on_page(page_path)
            .with_notice(notice)
            .show_qr_for(qr_for);

        match page.render(&snapshot) {
            Ok(html) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(html),
            Err(e) => {
                error!("Failed to render page: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(e.format_simple())
            }
        }
    }

    /// 首页（`?qr=<id>` 展开对应行的二维码）
    #[instrument(skip_all, fields(path = %req.path()))]
    pub async fn handle_index(
        req: HttpRequest,
        query: web::Query<PageQuery>,
        links: web::Data<Arc<LinkService>>,
        site: web::Data<SiteContext>,
    ) -> HttpResponse {
        debug!("Serving index page");
        Self::render_page(
            StatusCode::OK,
            &site,
            &links,
            req.path(),
            None,
            query.qr.as_deref(),
        )
    }

    /// 静态资源：先交给资源缓存 worker，未拦截时直接走网络
    #[instrument(skip_all, fields(path = %req.path()))]
    pub async fn handle_asset(
        req: HttpRequest,
        site: web::Data<SiteContext>,
        worker: web::Data<AssetWorkerHandle>,
        network: web::Data<Arc<dyn Fetcher>>,
    ) -> HttpResponse {
        let target = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| req.path());
        let url = match site.base_url.join(target) {
            Ok(url) => url,
            Err(e) => {
                warn!("Unparseable asset request {}: {}", target, e);
                return HttpResponse::BadRequest().finish();
            }
        };
        let request = AssetRequest::new(req.method().as_str(), url.clone());

        let outcome = match worker.fetch(request).await {
            Ok(outcome) => Ok(outcome),
            Err(e @ LinkshelfError::WorkerUnavailable(_)) => {
                warn!("{}, serving from network", e);
                Ok(FetchOutcome::NotIntercepted)
            }
            Err(e) => Err(e),
        };

        let result = match outcome {
            Ok(FetchOutcome::FromCache(resp)) => Ok((resp, "hit")),
            Ok(FetchOutcome::FromNetwork(resp)) => Ok((resp, "miss")),
            Ok(FetchOutcome::NotIntercepted) => {
                trace!("Asset request not intercepted: {}", url);
                network.fetch(&url).await.map(|resp| (resp, "bypass"))
            }
            Err(e) => Err(e),
        };

        match result {
            Ok((resp, cache_state)) => Self::asset_response(resp, cache_state),
            Err(e) => {
                error!("Failed to fetch {}: {}", url, e);
                HttpResponse::BadGateway()
                    .content_type("text/plain; charset=utf-8")
                    .body(e.format_simple())
            }
        }
    }

    fn asset_response(resp: AssetResponse, cache_state: &'static str) -> HttpResponse {
        let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::BAD_GATEWAY);
        HttpResponse::build(status)
            .content_type(resp.content_type)
            .insert_header(("X-Linkshelf-Cache", cache_state))
            .body(resp.body)
    }
}

pub fn frontend_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(FrontendService::handle_index))
        .route("/index.html", web::get().to(FrontendService::handle_index))
        .route("/manifest.json", web::get().to(FrontendService::handle_asset))
        .route("/manifest.json", web::head().to(FrontendService::handle_asset))
        .route("/static/{path:.*}", web::get().to(FrontendService::handle_asset))
        .route("/static/{path:.*}", web::head().to(FrontendService::handle_asset))
        .route("/icons/{path:.*}", web::get().to(FrontendService::handle_asset))
        .route("/icons/{path:.*}", web::head().to(FrontendService::handle_asset))
}
