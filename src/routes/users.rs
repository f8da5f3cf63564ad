use actix_web::{HttpResponse, web};

use crate::{domain::UserRecord, store::UserStore};

#[derive(serde::Serialize)]
struct UsersResponse {
    users: Vec<UserRecord>,
    total: usize,
}

/// Return every stored record, in insertion order. Read-only.
pub async fn list_users(store: web::Data<UserStore>) -> HttpResponse {
    let users = store.all();
    let total = users.len();
    HttpResponse::Ok().json(UsersResponse { users, total })
}
