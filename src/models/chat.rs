// src/models/chat.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    #[schema(example = "user")]
    pub role: String,
    #[schema(example = "How do I check stock levels?")]
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

// Resposta sempre vem como mensagem do assistente, mesmo quando a
// API externa falhou e caímos no roteador de respostas fixas.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub role: String,
    pub content: String,
}

impl ChatReply {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

// Diagnóstico de conectividade com a API externa (GET /api/test-openai).
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatConnectivityReport {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatConnectivityReport {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }
}
