//! Wire types for the backend REST API and the public forecast service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success body of `POST /api/signin`.
#[derive(Clone, Debug, Deserialize)]
pub struct SignInOk {
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Error body returned by backend endpoints alongside a non-2xx status.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A chat room summary from `GET /api/chat/room`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub user_id: String,
    pub created_at: String,
    pub last_chat_at: String,
}

/// A single chat message as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub role: ChatRole,
    pub text: String,
    pub created_at: String,
}

/// One turn of the context window sent to `POST /api/chat/gpt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LlmTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Response of `POST /api/chat/gpt`: the stored user message (when the
/// backend echoes it back) and the assistant reply.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatExchange {
    #[serde(rename = "userDoc", default)]
    pub user_doc: Option<ChatMessage>,
    #[serde(rename = "AIDoc")]
    pub ai_doc: ChatMessage,
}

/// One store from the commercial-district registry.
///
/// The registry keeps its original Korean column names on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "상호명")]
    pub name: String,
    #[serde(rename = "상권업종대분류명")]
    pub category: String,
    #[serde(rename = "법정동명")]
    pub district: String,
    #[serde(rename = "도로명")]
    pub road_address: String,
    #[serde(rename = "경도")]
    pub longitude: f64,
    #[serde(rename = "위도")]
    pub latitude: f64,
}

/// One row of the short-term village forecast.
///
/// `fcst_value` stays a string: numeric categories carry numbers but
/// precipitation-type rows carry labels like `"강수없음"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastItem {
    pub base_date: String,
    pub base_time: String,
    pub category: String,
    pub fcst_date: String,
    pub fcst_time: String,
    pub fcst_value: String,
    pub nx: i32,
    pub ny: i32,
}

/// Envelope of the forecast response; the items of interest sit at
/// `response.body.items.item` and every level may be missing on error
/// responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForecastEnvelope {
    #[serde(default)]
    pub response: Option<ForecastResponse>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub body: Option<ForecastBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForecastBody {
    #[serde(default)]
    pub items: Option<ForecastItems>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForecastItems {
    #[serde(default)]
    pub item: Vec<ForecastItem>,
}

impl ForecastEnvelope {
    /// Flatten the envelope into its item list, empty when any level is
    /// absent.
    pub fn into_items(self) -> Vec<ForecastItem> {
        self.response
            .and_then(|r| r.body)
            .and_then(|b| b.items)
            .map(|i| i.item)
            .unwrap_or_default()
    }
}
