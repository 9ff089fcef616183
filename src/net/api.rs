//! REST API helpers for the backend and the public forecast service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs whose error is display text, never a
//! panic: fetch failures degrade to a message on the page. Rejected
//! responses surface the backend's `error` field verbatim; transport
//! failures surface a generic text and log the underlying error.

#![allow(clippy::unused_async)]

use crate::net::types::{ChatExchange, ChatMessage, ChatRoom, ForecastItem, LlmTurn, SignInOk};
use crate::state::weather::ForecastQuery;

/// Generic text shown when a request never reached the backend.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

#[cfg(feature = "hydrate")]
const FORECAST_URL: &str =
    "https://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getVilageFcst";

/// Forecast service key, baked in at build time.
#[cfg(feature = "hydrate")]
const FORECAST_SERVICE_KEY: Option<&str> = option_env!("TOWNLENS_GOV_API_KEY");

/// Extract the backend's `error` text from a rejected response, falling
/// back to the status code when the body is not the expected shape.
#[cfg(feature = "hydrate")]
async fn rejection_text(resp: &gloo_net::http::Response) -> String {
    match resp.json::<super::types::ApiError>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed: {}", resp.status()),
    }
}

/// Exchange credentials for a session token via `POST /api/signin`.
///
/// # Errors
///
/// Returns display text: the backend's rejection reason, or a generic
/// network-error message.
pub async fn sign_in(email: &str, password: &str) -> Result<SignInOk, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/signin")
            .json(&body)
            .map_err(|err| {
                log::warn!("sign-in request build failed: {err}");
                NETWORK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("sign-in request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        resp.json::<SignInOk>().await.map_err(|err| {
            log::warn!("sign-in response malformed: {err}");
            NETWORK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/signup`.
///
/// # Errors
///
/// Returns display text on rejection or transport failure.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/signup")
            .json(&body)
            .map_err(|err| {
                log::warn!("sign-up request build failed: {err}");
                NETWORK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("sign-up request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's chat rooms via `GET /api/chat/room`.
///
/// # Errors
///
/// Returns display text on rejection or transport failure.
pub async fn fetch_rooms(user_id: &str) -> Result<Vec<ChatRoom>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/chat/room")
            .header("x-user-id", user_id)
            .send()
            .await
            .map_err(|err| {
                log::warn!("room list request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        resp.json::<Vec<ChatRoom>>().await.map_err(|err| {
            log::warn!("room list response malformed: {err}");
            NETWORK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Create a chat room via `POST /api/chat/room`.
///
/// # Errors
///
/// Returns display text on rejection or transport failure.
pub async fn create_room(user_id: &str, title: &str) -> Result<ChatRoom, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "title": title });
        let resp = gloo_net::http::Request::post("/api/chat/room")
            .header("x-user-id", user_id)
            .json(&body)
            .map_err(|err| {
                log::warn!("create-room request build failed: {err}");
                NETWORK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("create-room request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        resp.json::<ChatRoom>().await.map_err(|err| {
            log::warn!("create-room response malformed: {err}");
            NETWORK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, title);
        Err("not available on server".to_owned())
    }
}

/// Fetch one room's message history via `POST /api/chat/room_chats`.
///
/// # Errors
///
/// Returns display text on rejection or transport failure.
pub async fn fetch_room_messages(
    room_id: &str,
    user_id: &str,
) -> Result<Vec<ChatMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "roomId": room_id, "userId": user_id });
        let resp = gloo_net::http::Request::post("/api/chat/room_chats")
            .json(&body)
            .map_err(|err| {
                log::warn!("history request build failed: {err}");
                NETWORK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("history request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        resp.json::<Vec<ChatMessage>>().await.map_err(|err| {
            log::warn!("history response malformed: {err}");
            NETWORK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room_id, user_id);
        Err("not available on server".to_owned())
    }
}

/// Send a message with its context window via `POST /api/chat/gpt` and
/// receive the assistant reply.
///
/// # Errors
///
/// Returns display text on rejection or transport failure.
pub async fn send_chat(
    room_id: &str,
    user_id: &str,
    history: &[LlmTurn],
) -> Result<ChatExchange, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "roomId": room_id,
            "userId": user_id,
            "messages": history,
        });
        let resp = gloo_net::http::Request::post("/api/chat/gpt")
            .json(&body)
            .map_err(|err| {
                log::warn!("chat request build failed: {err}");
                NETWORK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("chat request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        resp.json::<ChatExchange>().await.map_err(|err| {
            log::warn!("chat response malformed: {err}");
            NETWORK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room_id, user_id, history);
        Err("not available on server".to_owned())
    }
}

/// Fetch the Incheon store registry via `GET /api/store/incheon`.
///
/// # Errors
///
/// Returns display text on rejection or transport failure.
pub async fn fetch_stores() -> Result<Vec<crate::net::types::StoreRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/store/incheon")
            .send()
            .await
            .map_err(|err| {
                log::warn!("store registry request failed: {err}");
                NETWORK_ERROR.to_owned()
            })?;

        if !resp.ok() {
            return Err(rejection_text(&resp).await);
        }
        resp.json().await.map_err(|err| {
            log::warn!("store registry response malformed: {err}");
            NETWORK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one short-term forecast batch from the village-forecast service.
///
/// # Errors
///
/// Returns display text when the service key is missing, the request
/// fails, or the envelope cannot be parsed.
pub async fn fetch_forecast(query: &ForecastQuery) -> Result<Vec<ForecastItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(key) = FORECAST_SERVICE_KEY else {
            return Err("forecast service key not configured".to_owned());
        };
        let url = format!("{FORECAST_URL}?{}", query.query_string(key));
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|err| {
            log::warn!("forecast request failed: {err}");
            NETWORK_ERROR.to_owned()
        })?;

        if !resp.ok() {
            return Err(format!("forecast request failed: {}", resp.status()));
        }
        let envelope = resp
            .json::<crate::net::types::ForecastEnvelope>()
            .await
            .map_err(|err| {
                log::warn!("forecast response malformed: {err}");
                NETWORK_ERROR.to_owned()
            })?;
        Ok(envelope.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
