//! Typed endpoint wrappers for the Folio REST API.
//!
//! One method per operation. Bodies are serialized as JSON, with the single
//! exception of [`FolioClient::signin`], which the backend accepts as an
//! OAuth2 password form. Non-2xx responses surface as
//! [`RequestError::Server`] with the body's `detail` message.

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::core::FolioClient;
use crate::errors::{RequestError, Result};
use crate::models::{Account, BearerToken, Experience, ExperienceData, ProfileUpdate, UserProfile};
use crate::util::check_http_status;

/// Decode a JSON response body into `T`, mapping deserializer failures into
/// [`RequestError::DecodeJson`] (a malformed body from a 2xx response is not
/// a transport failure).
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        RequestError::DecodeJson {
            message: e.to_string(),
        }
        .into()
    })
}

impl FolioClient {
    /// POST `/signup` — create an account. Establishes no session.
    pub async fn signup(&self, email: &str, password: &str) -> Result<Account> {
        let response = self
            .request(Method::POST, "/signup", None)?
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        decode_json(check_http_status(response).await?).await
    }

    /// POST `/signin` — exchange credentials for a bearer token.
    ///
    /// The one non-JSON body in the API: the backend's token endpoint takes
    /// an `application/x-www-form-urlencoded` OAuth2 password form with
    /// `username`/`password` fields.
    pub async fn signin(&self, email: &str, password: &str) -> Result<BearerToken> {
        let response = self
            .request(Method::POST, "/signin", None)?
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;
        decode_json(check_http_status(response).await?).await
    }

    /// GET `/profiles/me/` — the signed-in user's profile aggregate.
    pub async fn my_profile(&self, token: &str) -> Result<UserProfile> {
        let response = self
            .request(Method::GET, "/profiles/me/", Some(token))?
            .send()
            .await?;
        decode_json(check_http_status(response).await?).await
    }

    /// PUT `/profiles/me/` — update the scalar profile fields. The server's
    /// returned profile is canonical (it may normalize values).
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
        token: &str,
    ) -> Result<UserProfile> {
        let response = self
            .request(Method::PUT, "/profiles/me/", Some(token))?
            .json(update)
            .send()
            .await?;
        decode_json(check_http_status(response).await?).await
    }

    /// POST `/profiles/me/experiences/` — add a work experience.
    pub async fn add_experience(&self, data: &ExperienceData, token: &str) -> Result<Experience> {
        let response = self
            .request(Method::POST, "/profiles/me/experiences/", Some(token))?
            .json(data)
            .send()
            .await?;
        decode_json(check_http_status(response).await?).await
    }

    /// PUT `/profiles/me/experiences/{id}` — update a work experience.
    pub async fn update_experience(
        &self,
        id: &str,
        data: &ExperienceData,
        token: &str,
    ) -> Result<Experience> {
        let endpoint = format!("/profiles/me/experiences/{id}");
        let response = self
            .request(Method::PUT, &endpoint, Some(token))?
            .json(data)
            .send()
            .await?;
        decode_json(check_http_status(response).await?).await
    }

    /// DELETE `/profiles/me/experiences/{id}` — remove a work experience.
    /// Succeeds on `204 No Content` with an empty result.
    pub async fn delete_experience(&self, id: &str, token: &str) -> Result<()> {
        let endpoint = format!("/profiles/me/experiences/{id}");
        let response = self
            .request(Method::DELETE, &endpoint, Some(token))?
            .send()
            .await?;
        check_http_status(response).await?;
        Ok(())
    }

    /// GET `/profiles/handle/{handle}` — public read path, no session
    /// required.
    pub async fn profile_by_handle(&self, handle: &str) -> Result<UserProfile> {
        let endpoint = format!("/profiles/handle/{handle}");
        let response = self.request(Method::GET, &endpoint, None)?.send().await?;
        decode_json(check_http_status(response).await?).await
    }
}
