use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::{debug, error, info, instrument};

use super::SiteContext;
use super::frontend::FrontendService;
use crate::services::{LinkService, Notice, QrRenderer};
use crate::ui::{AddLinkForm, LinkForm, UiEvent};

/// Form actions of the page (add / delete) plus the QR image
pub struct LinkActions;

impl LinkActions {
    fn apply_and_render(event: UiEvent, links: &LinkService, site: &SiteContext) -> HttpResponse {
        let (status, notice) = match event.apply(links) {
            Ok(notice) => (StatusCode::OK, notice),
            Err(e) => {
                let status = if e.is_user_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    error!("Link operation failed: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (status, Some(Notice::from_error(&e)))
            }
        };
        FrontendService::render_page(status, site, links, &site.base_path, notice, None)
    }

    #[instrument(skip_all)]
    pub async fn add_link(
        form: web::Form<AddLinkForm>,
        links: web::Data<Arc<LinkService>>,
        site: web::Data<SiteContext>,
    ) -> HttpResponse {
        let Some(event) = LinkForm::new(&site.base_path).submit(form.into_inner()) else {
            debug!("Add form submitted with an empty field");
            return FrontendService::render_page(
                StatusCode::BAD_REQUEST,
                &site,
                &links,
                &site.base_path,
                Some(Notice::error("Please enter both a name and a URL.")),
                None,
            );
        };
        Self::apply_and_render(event, &links, &site)
    }

    #[instrument(skip(links, site))]
    pub async fn delete_link(
        id: web::Path<String>,
        links: web::Data<Arc<LinkService>>,
        site: web::Data<SiteContext>,
    ) -> HttpResponse {
        let event = UiEvent::DeleteLink {
            id: id.into_inner(),
        };
        Self::apply_and_render(event, &links, &site)
    }

    /// 原始 URL 的二维码
    #[instrument(skip(links))]
    pub async fn qr_svg(id: web::Path<String>, links: web::Data<Arc<LinkService>>) -> HttpResponse {
        let Some(link) = links.find(&id) else {
            return HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("Link not found");
        };

        let renderer = QrRenderer::new();
        if !renderer.is_available() {
            info!("QR requested but this build has no QR support");
            return HttpResponse::NotImplemented()
                .content_type("text/plain; charset=utf-8")
                .body("QR codes are not available in this build");
        }

        match renderer.render_svg(&link.url) {
            Ok(svg) => HttpResponse::Ok().content_type("image/svg+xml").body(svg),
            Err(e) => {
                error!("QR rendering failed for {}: {}", link.id, e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(e.format_simple())
            }
        }
    }
}

pub fn links_routes() -> actix_web::Scope {
    web::scope("/links")
        .route("", web::post().to(LinkActions::add_link))
        .route("/{id}/delete", web::post().to(LinkActions::delete_link))
        .route("/{id}/qr.svg", web::get().to(LinkActions::qr_svg))
}
