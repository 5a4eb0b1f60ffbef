use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::{error, trace};

use crate::services::LinkService;
use crate::worker::{AssetWorkerHandle, WorkerPhase};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub links: usize,
    pub worker_phase: Option<WorkerPhase>,
    pub cache_name: String,
    pub storage: String,
    pub uptime_secs: i64,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        links: web::Data<Arc<LinkService>>,
        worker: web::Data<AssetWorkerHandle>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let uptime_secs = (chrono::Utc::now() - app_start_time.start_datetime).num_seconds();
        let worker_phase = match worker.status().await {
            Ok(status) => Some(status.phase),
            Err(e) => {
                error!("Asset worker health check failed: {}", e);
                None
            }
        };

        let response = HealthResponse {
            status: if worker_phase.is_some() {
                "healthy"
            } else {
                "degraded"
            },
            links: links.len(),
            worker_phase,
            cache_name: worker.cache_name().to_string(),
            storage: links.backend_info().storage_type,
            uptime_secs,
        };

        if response.worker_phase.is_some() {
            HttpResponse::Ok().json(response)
        } else {
            HttpResponse::ServiceUnavailable().json(response)
        }
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
}
