// src/services/chat_service.rs

use std::time::Duration;

use anyhow::Context;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::models::chat::{ChatConnectivityReport, ChatMessage, ChatReply};

// Instrução fixa enviada como primeira mensagem de toda conversa.
const SYSTEM_PROMPT: &str = "You are an AI assistant for an Ordering System ERP. You help users with:\n\n\
1. Order Management: Track orders, update status, view order history\n\
2. Customer Management: Customer information, contact details, order history\n\
3. Inventory Management: Stock levels, low stock alerts, inventory updates\n\
4. Sales Analytics: Revenue reports, sales trends, performance metrics\n\
5. System Navigation: Help users find features and understand the interface\n\n\
Be helpful, concise, and provide actionable information. If you don't have access \
to specific data, guide users on how to find it in the system.";

/// Configuração do cliente de chat, vinda do ambiente.
/// Sem chave de API o serviço opera permanentemente em modo fallback.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub request_timeout_ms: u64,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: std::env::var("OPENAI_MODEL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "gpt-4o-mini".to_string()),
            request_timeout_ms: std::env::var("OPENAI_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30_000),
        }
    }
}

#[derive(Clone)]
pub struct ChatService {
    http: reqwest::Client,
    cfg: ChatConfig,
}

impl ChatService {
    pub fn new(cfg: ChatConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()
            .context("falha ao construir o cliente HTTP do chat")?;

        Ok(Self { http, cfg })
    }

    /// Responde a conversa. Nunca retorna erro: qualquer falha na API
    /// externa vira uma resposta fixa do roteador de fallback.
    pub async fn ask(&self, messages: &[ChatMessage]) -> ChatReply {
        let last_user_message = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let Some(api_key) = &self.cfg.api_key else {
            let fallback = fallback_reply(last_user_message);
            return ChatReply::assistant(format!(
                "{fallback}\n\nNote: OPENAI_API_KEY is not configured, so you are \
                 seeing a canned answer. Set the key to enable real-time AI responses."
            ));
        };

        match self.complete(api_key, messages).await {
            Ok(content) => ChatReply::assistant(content),
            Err(ChatUpstreamError::QuotaExceeded) => {
                tracing::warn!("API de chat sem cota ou limitada; usando fallback");
                let fallback = fallback_reply(last_user_message);
                ChatReply::assistant(format!(
                    "{fallback}\n\nNote: I'm currently answering from canned responses \
                     because the AI provider reported a quota or rate limit. The \
                     assistant keeps working in the meantime."
                ))
            }
            Err(ChatUpstreamError::Other(err)) => {
                tracing::warn!(error = %err, "Chamada à API de chat falhou; usando fallback");
                ChatReply::assistant(fallback_reply(last_user_message))
            }
        }
    }

    /// Diagnóstico de conectividade: uma completion mínima, só para saber
    /// se a chave configurada funciona. Aqui o erro É a informação, então
    /// ele aparece no relatório em vez de virar fallback.
    pub async fn test_connection(&self) -> ChatConnectivityReport {
        let Some(api_key) = &self.cfg.api_key else {
            return ChatConnectivityReport::failed(
                "OpenAI API key not configured. Please add OPENAI_API_KEY to your \
                 environment variables.",
            );
        };

        let ping = [ChatMessage {
            role: "user".to_string(),
            content: "Hello".to_string(),
        }];

        match self.complete(api_key, &ping).await {
            Ok(content) => ChatConnectivityReport::ok(content),
            Err(ChatUpstreamError::QuotaExceeded) => {
                ChatConnectivityReport::failed("quota exceeded or rate limited")
            }
            Err(ChatUpstreamError::Other(err)) => ChatConnectivityReport::failed(err),
        }
    }

    /// Uma chamada de chat-completions. O chamador decide o que fazer com o erro.
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatUpstreamError> {
        let url = format!(
            "{}/chat/completions",
            self.cfg.base_url.trim_end_matches('/')
        );

        let mut payload: Vec<Value> = Vec::with_capacity(messages.len() + 1);
        payload.push(json!({ "role": "system", "content": SYSTEM_PROMPT }));
        for m in messages {
            payload.push(json!({ "role": m.role, "content": m.content }));
        }

        let body = json!({
            "model": self.cfg.model,
            "messages": payload,
            "temperature": 0.7,
            "max_tokens": 500,
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatUpstreamError::Other(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            if status == StatusCode::TOO_MANY_REQUESTS || text.contains("insufficient_quota") {
                return Err(ChatUpstreamError::QuotaExceeded);
            }
            return Err(ChatUpstreamError::Other(format!(
                "status={status} body={text}"
            )));
        }

        let value: Value = resp
            .json()
            .await
            .map_err(|e| ChatUpstreamError::Other(e.to_string()))?;

        extract_assistant_text(&value)
            .ok_or_else(|| ChatUpstreamError::Other("resposta sem choices[0].message.content".into()))
    }
}

// Falhas da API externa, já separadas pelo tratamento que recebem.
#[derive(Debug)]
enum ChatUpstreamError {
    QuotaExceeded,
    Other(String),
}

fn extract_assistant_text(v: &Value) -> Option<String> {
    v.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}

// =============================================================================
//  ROTEADOR DE FALLBACK
// =============================================================================

const ORDER_GUIDE: &str = "Order Management Guide:\n\n\
- View Orders: open \"Orders\" in the sidebar to see every order\n\
- Create New Order: use the \"Add Order\" button in the Orders section\n\
- Update Status: click any order to edit its lifecycle status\n\
- Order Details: review customer info, items and payment status\n\
- Filter Orders: use search and filters to find specific orders\n\n\
The Orders section shows order ID, customer name, total amount, status and date.";

const CUSTOMER_GUIDE: &str = "Customer Management Guide:\n\n\
- View Customers: open \"Customers\" in the sidebar\n\
- Customer Details: click any customer to see their profile\n\
- Contact Info: email, phone and address are on the profile\n\
- Order History: every order placed by the customer is listed there\n\
- Add Customer: use the \"Add Customer\" button to register new customers\n\n\
The Customers section displays name, email, phone, total orders and total spent.";

const INVENTORY_GUIDE: &str = "Inventory Management Guide:\n\n\
- Stock Levels: check current quantities per product\n\
- Low Stock Alerts: items below their minimum are highlighted\n\
- Add Items: use \"Add Item\" to register new products\n\
- Update Stock: edit quantities and product details\n\
- Categories: organize items by category\n\n\
The Inventory section shows item name, category, quantity, price and status.";

const DASHBOARD_GUIDE: &str = "Dashboard Overview:\n\n\
- Total Revenue: your accumulated earnings\n\
- Total Orders: number of orders in the system\n\
- Active Customers: customers with at least one order\n\
- Inventory Items: number of registered products\n\
- Charts: monthly sales trend and order counts\n\n\
The dashboard gives a quick overview of your business performance.";

const REPORT_GUIDE: &str = "Reports & Analytics:\n\n\
- Sales Reports: revenue trends and performance\n\
- Order Analytics: order statistics and patterns\n\
- Customer Insights: behavior and preferences\n\
- Inventory Reports: stock movement and turnover\n\n\
The Reports section helps you analyze performance and make data-driven decisions.";

const HELP_GUIDE: &str = "AI Assistant Help:\n\n\
I can help you with:\n\
- Order Management: creating, viewing and updating orders\n\
- Customer Information: customer details and order history\n\
- Inventory Status: stock levels and product management\n\
- System Navigation: finding features in the interface\n\
- Reports & Analytics: business insights and performance data\n\n\
Just ask me about any of these areas!";

const DEFAULT_GUIDE: &str = "Welcome to your Ordering System!\n\n\
I'm your assistant for managing the business. You can ask me about:\n\
- Orders: how to create, view or manage orders\n\
- Customers: customer information and order history\n\
- Inventory: stock levels and product management\n\
- Dashboard: understanding your business metrics\n\
- Reports: sales analytics and performance data\n\n\
What would you like to know about?";

// Tópicos em ordem de prioridade: o primeiro que casar vence.
const FALLBACK_TOPICS: &[(&[&str], &str)] = &[
    (&["order"], ORDER_GUIDE),
    (&["customer", "client", "contact"], CUSTOMER_GUIDE),
    (&["inventory", "stock", "product", "item"], INVENTORY_GUIDE),
    (&["dashboard", "metric", "revenue", "overview"], DASHBOARD_GUIDE),
    (&["report", "analytics", "statistics"], REPORT_GUIDE),
    (&["help", "assist", "guide"], HELP_GUIDE),
];

/// Seleciona a resposta fixa por casamento de palavra-chave, sem estado.
/// Função total: todo texto cai em exatamente um dos 7 modelos.
pub fn fallback_reply(user_message: &str) -> &'static str {
    let message = user_message.to_lowercase();

    for (keywords, template) in FALLBACK_TOPICS {
        if keywords.iter().any(|kw| message.contains(kw)) {
            return template;
        }
    }

    DEFAULT_GUIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_questions_route_to_the_inventory_guide() {
        assert_eq!(fallback_reply("How do I check stock levels?"), INVENTORY_GUIDE);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(fallback_reply("ORDER status"), fallback_reply("order status"));
        assert_eq!(fallback_reply("ORDER status"), ORDER_GUIDE);
    }

    #[test]
    fn first_topic_in_priority_order_wins() {
        // "help" também casaria, mas "order" vem antes na lista.
        assert_eq!(fallback_reply("help me create an order"), ORDER_GUIDE);
    }

    #[test]
    fn unmatched_text_falls_through_to_the_default() {
        assert_eq!(fallback_reply("what's the weather like?"), DEFAULT_GUIDE);
        assert_eq!(fallback_reply(""), DEFAULT_GUIDE);
    }

    #[test]
    fn every_topic_keyword_reaches_its_template() {
        let cases = [
            ("where are my orders", ORDER_GUIDE),
            ("new client onboarding", CUSTOMER_GUIDE),
            ("product catalog", INVENTORY_GUIDE),
            ("revenue this month", DASHBOARD_GUIDE),
            ("sales statistics", REPORT_GUIDE),
            ("can you assist me", HELP_GUIDE),
        ];

        for (input, expected) in cases {
            assert_eq!(fallback_reply(input), expected, "input: {input}");
        }
    }

    fn service_without_key() -> ChatService {
        ChatService::new(ChatConfig {
            api_key: None,
            base_url: "http://localhost:0".to_string(),
            model: "gpt-4o-mini".to_string(),
            request_timeout_ms: 1_000,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn connectivity_report_fails_without_an_api_key() {
        let report = service_without_key().test_connection().await;

        assert!(!report.success);
        assert!(report.response.is_none());
        assert!(report.error.unwrap().contains("OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn ask_without_an_api_key_answers_with_fallback_and_note() {
        let messages = [ChatMessage {
            role: "user".to_string(),
            content: "How do I check stock levels?".to_string(),
        }];

        let reply = service_without_key().ask(&messages).await;

        assert_eq!(reply.role, "assistant");
        assert!(reply.content.starts_with(INVENTORY_GUIDE));
        assert!(reply.content.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn extracts_assistant_text_from_chat_completions_payload() {
        let payload = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "hello" } }]
        });
        assert_eq!(extract_assistant_text(&payload).as_deref(), Some("hello"));

        let empty = serde_json::json!({ "choices": [] });
        assert_eq!(extract_assistant_text(&empty), None);
    }
}
