use serde_json::{Value, json};
use tracing::info;

use super::{ApiTester, CheckOutcome};
use crate::http::method::HttpMethod;
use crate::http::request::CheckRequest;
use crate::http::response::ResponseBody;

pub const LEADS_PATH: &str = "api/leads";
pub const FORM_PATH: &str = "api/form";
pub const WEBHOOK_PATH: &str = "api/webhook";
pub const SEND_PATH: &str = "api/send";

const FILTER_STATUS: &str = "novo";
const UPDATED_STATUS: &str = "em_atendimento";

/// Pull `lead.id` out of a form response. String ids are kept as is, other
/// values use their JSON text. Empty, zero and `false` ids count as absent.
fn lead_id_from(body: &ResponseBody) -> Option<String> {
    match body.as_json()?.get("lead")?.get("id")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(id) if id.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}

impl ApiTester {
    pub async fn test_health_check(&mut self) -> CheckOutcome {
        self.run_check("Health Check", CheckRequest::new(HttpMethod::Get, ""), 200)
            .await
    }

    pub async fn test_get_leads(&mut self) -> CheckOutcome {
        self.run_check(
            "Get All Leads",
            CheckRequest::new(HttpMethod::Get, LEADS_PATH),
            200,
        )
        .await
    }

    pub async fn test_get_leads_with_filter(&mut self) -> CheckOutcome {
        let request =
            CheckRequest::new(HttpMethod::Get, LEADS_PATH).with_query("status", FILTER_STATUS);
        self.run_check("Get Leads with Filter", request, 200).await
    }

    pub async fn test_create_lead_via_form(&mut self) -> CheckOutcome {
        let payload = json!({
            "nome": "Test User",
            "telefone": self.context.test_phone(),
            "cep": "01234567",
            "plano": "Básico",
        });
        let outcome = self
            .run_check(
                "Create Lead via Form",
                CheckRequest::new(HttpMethod::Post, FORM_PATH).with_body(payload),
                201,
            )
            .await;

        if outcome.success {
            if let Some(id) = outcome.body.as_ref().and_then(lead_id_from) {
                info!(lead_id = %id, "lead created");
                println!("Created lead with ID: {id}");
                self.context.set_created_lead_id(id);
            }
        }

        outcome
    }

    pub async fn test_webhook_message(&mut self) -> CheckOutcome {
        let payload = json!({
            "sender": self.context.test_phone(),
            "senderName": "Test Webhook User",
            "message": "This is a test message from webhook",
        });
        self.run_check(
            "Process Webhook Message",
            CheckRequest::new(HttpMethod::Post, WEBHOOK_PATH).with_body(payload),
            200,
        )
        .await
    }

    pub async fn test_send_manual_message(&mut self) -> CheckOutcome {
        let payload = json!({
            "phone": self.context.test_phone(),
            "message": "This is a test manual message",
        });
        self.run_check(
            "Send Manual Message",
            CheckRequest::new(HttpMethod::Post, SEND_PATH).with_body(payload),
            200,
        )
        .await
    }

    /// Skipped without touching the counters when no lead was created.
    pub async fn test_update_lead_status(&mut self) -> CheckOutcome {
        let Some(id) = self.context.created_lead_id().map(str::to_string) else {
            println!("❌ Cannot test lead status update - no lead was created");
            return CheckOutcome::failed();
        };

        let request = CheckRequest::new(HttpMethod::Put, format!("{LEADS_PATH}/{id}"))
            .with_body(json!({ "status": UPDATED_STATUS }));
        self.run_check("Update Lead Status", request, 200).await
    }

    /// Skipped without touching the counters when no lead was created.
    pub async fn test_get_lead_messages(&mut self) -> CheckOutcome {
        let Some(id) = self.context.created_lead_id().map(str::to_string) else {
            println!("❌ Cannot test get lead messages - no lead was created");
            return CheckOutcome::failed();
        };

        self.run_check(
            "Get Lead Messages",
            CheckRequest::new(HttpMethod::Get, format!("{LEADS_PATH}/{id}/messages")),
            200,
        )
        .await
    }
}
