// src/handlers/chat.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    config::AppState,
    models::chat::{ChatConnectivityReport, ChatReply, ChatRequest},
};

// POST /api/chat
//
// Sempre responde 200 com uma mensagem de assistente: falha na API
// externa resolve para o roteador de fallback, nunca para erro.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Resposta do assistente (IA ou fallback fixo)", body = ChatReply)
    )
)]
pub async fn chat(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> impl IntoResponse {
    let reply = app_state.chat_service.ask(&payload.messages).await;

    (StatusCode::OK, Json(reply))
}

// GET /api/test-openai
#[utoipa::path(
    get,
    path = "/api/test-openai",
    tag = "Chat",
    responses(
        (status = 200, description = "Chave configurada e respondendo", body = ChatConnectivityReport),
        (status = 400, description = "Chave ausente ou API externa falhando", body = ChatConnectivityReport)
    )
)]
pub async fn test_openai(State(app_state): State<AppState>) -> impl IntoResponse {
    let report = app_state.chat_service.test_connection().await;

    let status = if report.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(report))
}
