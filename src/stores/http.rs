// ABOUTME: HTTP store implementations against the program and tracking services
// ABOUTME: Bearer-authenticated JSON calls with status mapping onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::http_client::shared_client;
use super::{ProgramStore, ReportSubject, TrackingStore};
use crate::config::ServiceEndpoints;
use crate::constants::{routes, service_names};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::{
    ClientComplianceSummary, ExerciseSetRecord, ExerciseSetUpsert, Program, TrackingDay,
    TrackingField,
};
use crate::session::Session;

/// Send a request and map transport failures
async fn send(service: &str, request: RequestBuilder) -> AppResult<Response> {
    request.send().await.map_err(|e| {
        if e.is_timeout() || e.is_connect() {
            AppError::service_unavailable(service, "service is unreachable").with_source(e)
        } else {
            AppError::external_service(service, "request failed").with_source(e)
        }
    })
}

/// Map a non-success status onto an error
async fn check_status(service: &str, resource: &str, response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(%service, %resource, %status, %body, "Store request rejected");
    Err(match status {
        StatusCode::UNAUTHORIZED => {
            AppError::auth_invalid(format!("{service} rejected the session"))
        }
        StatusCode::FORBIDDEN => {
            AppError::auth_invalid(format!("{service} denied access to {resource}"))
        }
        StatusCode::NOT_FOUND => AppError::not_found(resource.to_owned()),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            AppError::invalid_input(format!("{service} rejected the request: {body}"))
        }
        _ => AppError::external_service(service, format!("unexpected status {status}")),
    })
}

/// Decode a JSON body
async fn read_json<T: DeserializeOwned>(service: &str, response: Response) -> AppResult<T> {
    response.json::<T>().await.map_err(|e| {
        AppError::external_service(service, "response body could not be decoded").with_source(e)
    })
}

/// Run a GET and log it as a store fetch
async fn fetch<T: DeserializeOwned>(
    client: &Client,
    service: &str,
    resource: &str,
    url: &str,
    session: &Session,
    client_id: Option<i64>,
) -> AppResult<T> {
    let started = Instant::now();
    let result = async {
        let response = send(
            service,
            client
                .get(url)
                .header("Authorization", session.authorization_header()),
        )
        .await?;
        let response = check_status(service, resource, response).await?;
        read_json(service, response).await
    }
    .await;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_store_fetch(service, resource, client_id, result.is_ok(), duration_ms);
    result
}

/// Program store backed by the program service
#[derive(Debug, Clone)]
pub struct HttpProgramStore {
    client: Client,
    endpoints: ServiceEndpoints,
}

impl HttpProgramStore {
    /// Store using the shared HTTP client
    #[must_use]
    pub fn new(endpoints: ServiceEndpoints) -> Self {
        Self::with_client(shared_client().clone(), endpoints)
    }

    /// Store using a caller-provided client
    #[must_use]
    pub const fn with_client(client: Client, endpoints: ServiceEndpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl ProgramStore for HttpProgramStore {
    async fn programs_for_client(
        &self,
        session: &Session,
        client_id: i64,
    ) -> AppResult<Vec<Program>> {
        let url = self
            .endpoints
            .program_url(&format!("{}/{client_id}", routes::PROGRAMS_FOR_CLIENT));
        let result = fetch(
            &self.client,
            service_names::PROGRAM_SERVICE,
            "programs",
            &url,
            session,
            Some(client_id),
        )
        .await;

        match result {
            Err(e) if e.code == ErrorCode::ResourceNotFound => {
                debug!(client_id, "Client has no program");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

/// Tracking store backed by the tracking service
#[derive(Debug, Clone)]
pub struct HttpTrackingStore {
    client: Client,
    endpoints: ServiceEndpoints,
}

impl HttpTrackingStore {
    /// Store using the shared HTTP client
    #[must_use]
    pub fn new(endpoints: ServiceEndpoints) -> Self {
        Self::with_client(shared_client().clone(), endpoints)
    }

    /// Store using a caller-provided client
    #[must_use]
    pub const fn with_client(client: Client, endpoints: ServiceEndpoints) -> Self {
        Self { client, endpoints }
    }

    fn subject_url(&self, subject: ReportSubject, me_route: &str, client_suffix: &str) -> String {
        match subject {
            ReportSubject::Me => self.endpoints.tracking_url(me_route),
            ReportSubject::Client(client_id) => self.endpoints.tracking_url(&format!(
                "{}/{client_id}/{client_suffix}",
                routes::TRACKING_CLIENT
            )),
        }
    }
}

#[async_trait]
impl TrackingStore for HttpTrackingStore {
    async fn tracking_week(
        &self,
        session: &Session,
        subject: ReportSubject,
    ) -> AppResult<Vec<TrackingDay>> {
        let url = self.subject_url(subject, routes::TRACKING_MY_WEEK, "week");
        let days: Vec<TrackingDay> = fetch(
            &self.client,
            service_names::TRACKING_SERVICE,
            "tracking week",
            &url,
            session,
            Some(subject.client_id(session)),
        )
        .await?;
        Ok(days.into_iter().map(TrackingDay::normalized).collect())
    }

    async fn exercise_sets(
        &self,
        session: &Session,
        subject: ReportSubject,
    ) -> AppResult<Vec<ExerciseSetRecord>> {
        let url = self.subject_url(subject, routes::TRACKING_MY_EXERCISES, "exercises");
        fetch(
            &self.client,
            service_names::TRACKING_SERVICE,
            "exercise sets",
            &url,
            session,
            Some(subject.client_id(session)),
        )
        .await
    }

    async fn update_day(
        &self,
        session: &Session,
        day: &str,
        updates: &[(TrackingField, bool)],
    ) -> AppResult<TrackingDay> {
        let mut payload = Map::new();
        payload.insert("day".to_owned(), Value::String(day.to_owned()));
        for (field, value) in updates {
            payload.insert(field.wire_key().to_owned(), Value::Bool(*value));
        }

        let service = service_names::TRACKING_SERVICE;
        let request = self
            .client
            .patch(self.endpoints.tracking_url(routes::TRACKING_MY_UPDATE))
            .header("Authorization", session.authorization_header())
            .json(&payload);
        let response = send(service, request).await?;
        let response = check_status(service, "tracking day", response).await?;
        let stored: TrackingDay = read_json(service, response).await?;
        Ok(stored.normalized())
    }

    async fn upsert_set(
        &self,
        session: &Session,
        upsert: &ExerciseSetUpsert,
    ) -> AppResult<ExerciseSetRecord> {
        upsert.validate()?;

        let service = service_names::TRACKING_SERVICE;
        let request = self
            .client
            .post(self.endpoints.tracking_url(routes::TRACKING_MY_EXERCISES))
            .header("Authorization", session.authorization_header())
            .json(upsert);
        let response = send(service, request).await?;
        let response = check_status(service, "exercise set", response).await?;
        read_json(service, response).await
    }

    async fn coach_overview(
        &self,
        session: &Session,
        coach_id: i64,
    ) -> AppResult<Vec<ClientComplianceSummary>> {
        let url = self.endpoints.tracking_url(&format!(
            "{}/{coach_id}/clients-stats",
            routes::TRACKING_COACH
        ));
        fetch(
            &self.client,
            service_names::TRACKING_SERVICE,
            "coach overview",
            &url,
            session,
            None,
        )
        .await
    }
}
