use axum::{response::IntoResponse, Json};

use crate::{
    contexts::{ActionRule, ActionsJson},
    cors::ACTIONS_CORS_HEADERS,
    DONATE_PATH,
};

pub fn actions_manifest() -> ActionsJson {
    ActionsJson {
        rules: vec![
            ActionRule::new("/", DONATE_PATH),
            // fallback so the api path resolves to itself
            ActionRule::new(DONATE_PATH, DONATE_PATH),
        ],
    }
}

pub async fn actions_json() -> impl IntoResponse {
    (ACTIONS_CORS_HEADERS, Json(actions_manifest()))
}
