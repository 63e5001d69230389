use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::entities::AuthResponse;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthGateway, Connectivity, TokenProvider};
use crate::frameworks::config;
use crate::interface_adapters::classifier::{ErrorClassifier, TransportFailure};
use crate::interface_adapters::protocol::{
    ApiEnvelope, AuthPayload, CheckCodeRequest, ForgotPasswordRequest, LoginRequest,
    PushTokenRequest, ResetPasswordRequest,
};

// reqwest-backed auth API adapter. Transport failures are classified at
// this boundary, so callers only ever see AuthError.
#[derive(Clone)]
pub struct HttpAuthGateway<C, T> {
    http: reqwest::Client,
    base_url: String,
    classifier: Arc<ErrorClassifier<C>>,
    token_provider: T,
}

impl<C, T> HttpAuthGateway<C, T>
where
    C: Connectivity,
    T: TokenProvider,
{
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        classifier: Arc<ErrorClassifier<C>>,
        token_provider: T,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            classifier,
            token_provider,
        })
    }

    // Client pointed at the environment-configured API.
    pub fn from_env(
        classifier: Arc<ErrorClassifier<C>>,
        token_provider: T,
    ) -> Result<Self, reqwest::Error> {
        Self::new(
            config::api_base_url(),
            config::request_timeout(),
            classifier,
            token_provider,
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Attaches the bearer token when one is stored, sends, and classifies
    // anything that is not a success response.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, AuthError> {
        let request = match self.token_provider.bearer_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.classifier.classify(TransportFailure::from(err)).await),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // A body read failure leaves the status-keyed fallback path.
        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default();
        Err(self
            .classifier
            .classify(TransportFailure::Http {
                status: status.as_u16(),
                body,
            })
            .await)
    }

    // Unwraps the success envelope. An undecodable success body is treated
    // as a transport fault of the received status.
    async fn decode<P>(&self, response: reqwest::Response) -> Result<P, AuthError>
    where
        P: DeserializeOwned,
    {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default();

        match serde_json::from_slice::<ApiEnvelope<P>>(&body) {
            Ok(envelope) => Ok(envelope.data),
            Err(_) => Err(self
                .classifier
                .classify(TransportFailure::Http { status, body })
                .await),
        }
    }
}

#[async_trait]
impl<C, T> AuthGateway for HttpAuthGateway<C, T>
where
    C: Connectivity,
    T: TokenProvider,
{
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let response = self
            .send(
                self.http
                    .post(self.url("/auth/login"))
                    .json(&LoginRequest { email, password }),
            )
            .await?;
        let payload: AuthPayload = self.decode(response).await?;

        Ok(AuthResponse {
            token: payload.token,
            user: payload.user.into_entity(),
        })
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.send(self.http.post(self.url("/auth/logout"))).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.send(
            self.http
                .post(self.url("/auth/password/forgot"))
                .json(&ForgotPasswordRequest { email }),
        )
        .await?;
        Ok(())
    }

    async fn forgot_password_check_code(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.send(
            self.http
                .post(self.url("/auth/password/check-code"))
                .json(&CheckCodeRequest { email, code }),
        )
        .await?;
        Ok(())
    }

    async fn forgot_password_reset_password(
        &self,
        email: &str,
        code: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        self.send(
            self.http
                .post(self.url("/auth/password/reset"))
                .json(&ResetPasswordRequest {
                    email,
                    code,
                    password,
                }),
        )
        .await?;
        Ok(())
    }

    async fn email_verification(
        &self,
        email: &str,
        code: &str,
    ) -> Result<AuthResponse, AuthError> {
        let response = self
            .send(
                self.http
                    .post(self.url("/auth/email/verify"))
                    .json(&CheckCodeRequest { email, code }),
            )
            .await?;
        let payload: AuthPayload = self.decode(response).await?;

        Ok(AuthResponse {
            token: payload.token,
            user: payload.user.into_entity(),
        })
    }

    async fn email_verification_resend_code(&self, email: &str) -> Result<(), AuthError> {
        self.send(
            self.http
                .post(self.url("/auth/email/resend-code"))
                .json(&ForgotPasswordRequest { email }),
        )
        .await?;
        Ok(())
    }

    async fn send_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.send(
            self.http
                .post(self.url("/auth/firebase-token"))
                .json(&PushTokenRequest { token }),
        )
        .await?;
        Ok(())
    }

    async fn delete_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.send(
            self.http
                .delete(self.url("/auth/firebase-token"))
                .json(&PushTokenRequest { token }),
        )
        .await?;
        Ok(())
    }

    async fn is_live_mode_accepted(&self) -> Result<bool, AuthError> {
        let response = self.send(self.http.get(self.url("/auth/live-mode"))).await?;
        let accepted: i64 = self.decode(response).await?;

        // The API reports the flag as a number.
        Ok(accepted == 1)
    }
}
