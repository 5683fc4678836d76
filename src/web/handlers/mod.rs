pub mod blogs;
pub mod contacts;
pub mod health;
pub mod services;

use serde_json::Value;

fn deleted(what: &str) -> axum::Json<Value> {
    axum::Json(serde_json::json!({
        "message": format!("{} deleted successfully", what),
    }))
}
