use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};

use crate::store::UserStore;

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: DateTime<Utc>,
    users_processed: usize,
}

pub async fn health_check(store: web::Data<UserStore>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        service: "user-intake",
        timestamp: Utc::now(),
        users_processed: store.count(),
    })
}
