use serde_json::json;
use tokio::task::JoinError;

use crate::api::payload::{self, DeletePayload, InsertPayload, UpdatePayload};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::store::{RecordStore, StoreError};

/// Routes a parsed request to the matching store operation.
///
/// Validation failures answer 400 before the store is touched. Store
/// calls run on the blocking pool so SQLite never stalls the runtime.
pub async fn dispatch(store: &RecordStore, req: &Request) -> Response {
    match req.method {
        Some(Method::GET) => list_records(store).await,

        Some(Method::POST) => {
            let Some(p) = payload::extract::<InsertPayload>(req.payload.as_ref()) else {
                return Response::bad_request();
            };
            if p.name.is_empty() {
                return Response::bad_request();
            }

            let store = store.clone();
            let outcome = tokio::task::spawn_blocking(move || store.insert(&p.name)).await;
            mutation_response(
                outcome,
                "Record inserted successfully.",
                "Failed to insert record.",
            )
        }

        Some(Method::PUT) => {
            let Some(p) = payload::extract::<UpdatePayload>(req.payload.as_ref()) else {
                return Response::bad_request();
            };
            if p.name.is_empty() {
                return Response::bad_request();
            }

            let store = store.clone();
            let outcome = tokio::task::spawn_blocking(move || store.update(p.id, &p.name)).await;
            mutation_response(
                outcome,
                "Record updated successfully.",
                "Failed to update record.",
            )
        }

        Some(Method::DELETE) => {
            let Some(p) = payload::extract::<DeletePayload>(req.payload.as_ref()) else {
                return Response::bad_request();
            };

            let store = store.clone();
            let outcome = tokio::task::spawn_blocking(move || store.delete(p.id)).await;
            mutation_response(
                outcome,
                "Record deleted successfully.",
                "Failed to delete record.",
            )
        }

        None => Response::json(
            StatusCode::BadRequest,
            &json!({ "error": "400 Bad Request" }),
        ),
    }
}

async fn list_records(store: &RecordStore) -> Response {
    let store = store.clone();
    match tokio::task::spawn_blocking(move || store.list()).await {
        Ok(Ok(records)) => Response::json(StatusCode::Ok, &records),
        Ok(Err(err)) => {
            tracing::error!(%err, "Failed to list records");
            Response::json(
                StatusCode::InternalServerError,
                &json!({ "message": "Failed to list records." }),
            )
        }
        Err(err) => task_failure(err),
    }
}

/// Maps a mutation outcome to its response.
///
/// The client only ever sees the generic outcome message; the engine
/// detail stays in the log.
fn mutation_response(
    outcome: Result<Result<(), StoreError>, JoinError>,
    success: &str,
    failure: &str,
) -> Response {
    match outcome {
        Ok(Ok(())) => Response::json(StatusCode::Ok, &json!({ "message": success })),

        Ok(Err(StoreError::NotFound { id })) => {
            tracing::debug!(id, "Mutation matched no record");
            Response::json(StatusCode::NotFound, &json!({ "error": "404 Not Found" }))
        }

        Ok(Err(err)) => {
            tracing::error!(%err, "Store operation failed");
            Response::json(
                StatusCode::InternalServerError,
                &json!({ "message": failure }),
            )
        }

        Err(err) => task_failure(err),
    }
}

fn task_failure(err: JoinError) -> Response {
    tracing::error!(%err, "Store task failed to complete");
    Response::internal_error()
}
