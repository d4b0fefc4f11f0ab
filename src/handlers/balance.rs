use axum::Json;
use chrono::Utc;

use crate::models::Balance;

pub async fn get_balance() -> Json<Balance> {
    Json(Balance::closing_from(Utc::now()))
}
