use axum::{Json, extract::State};
use axum_helpers::{JsonBody, PathParam, QueryParam};
use rpc::todo::v1::{
    CreateRequest, DeleteRequest, ReadAllRequest, ReadRequest, UpdateRequest,
    to_do_service_client::ToDoServiceClient,
};
use tonic::transport::Channel;

use super::dto::{
    ApiQuery, CreateResponseBody, DeleteResponseBody, ReadAllResponseBody, ReadResponseBody,
    ToDoPayload, UpdateResponseBody,
};
use crate::error::TodoResult;

pub type Client = ToDoServiceClient<Channel>;

/// Create a ToDo
#[utoipa::path(
    post,
    path = "/v1/todo",
    tag = "todo",
    request_body = ToDoPayload,
    responses(
        (status = 201, description = "ToDo created", body = CreateResponseBody),
        (status = 400, description = "Invalid request", body = axum_helpers::ErrorResponse),
        (status = 501, description = "Unsupported API version", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn create(
    State(mut client): State<Client>,
    JsonBody(payload): JsonBody<ToDoPayload>,
) -> TodoResult<Json<CreateResponseBody>> {
    let response = client
        .create(CreateRequest {
            api: payload.api,
            to_do: payload.to_do.map(Into::into),
        })
        .await?;

    Ok(Json(response.into_inner().into()))
}

/// Read a ToDo by id
#[utoipa::path(
    get,
    path = "/v1/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "ToDo id"), ApiQuery),
    responses(
        (status = 200, description = "ToDo found", body = ReadResponseBody),
        (status = 400, description = "Invalid id", body = axum_helpers::ErrorResponse),
        (status = 404, description = "ToDo not found", body = axum_helpers::ErrorResponse),
        (status = 501, description = "Unsupported API version", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn read(
    State(mut client): State<Client>,
    PathParam(id): PathParam<i64>,
    QueryParam(query): QueryParam<ApiQuery>,
) -> TodoResult<Json<ReadResponseBody>> {
    let response = client.read(ReadRequest { api: query.api, id }).await?;

    Ok(Json(response.into_inner().try_into()?))
}

/// Overwrite a ToDo; the path id wins over any id in the body
#[utoipa::path(
    put,
    path = "/v1/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "ToDo id")),
    request_body = ToDoPayload,
    responses(
        (status = 200, description = "ToDo updated", body = UpdateResponseBody),
        (status = 400, description = "Invalid request", body = axum_helpers::ErrorResponse),
        (status = 404, description = "ToDo not found", body = axum_helpers::ErrorResponse),
        (status = 501, description = "Unsupported API version", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn update(
    State(mut client): State<Client>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<ToDoPayload>,
) -> TodoResult<Json<UpdateResponseBody>> {
    let mut to_do = payload.to_do.unwrap_or_default();
    to_do.id = id;

    let response = client
        .update(UpdateRequest {
            api: payload.api,
            to_do: Some(to_do.into()),
        })
        .await?;

    Ok(Json(response.into_inner().into()))
}

/// Delete a ToDo by id
#[utoipa::path(
    delete,
    path = "/v1/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "ToDo id"), ApiQuery),
    responses(
        (status = 200, description = "ToDo deleted", body = DeleteResponseBody),
        (status = 400, description = "Invalid id", body = axum_helpers::ErrorResponse),
        (status = 404, description = "ToDo not found", body = axum_helpers::ErrorResponse),
        (status = 501, description = "Unsupported API version", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn delete(
    State(mut client): State<Client>,
    PathParam(id): PathParam<i64>,
    QueryParam(query): QueryParam<ApiQuery>,
) -> TodoResult<Json<DeleteResponseBody>> {
    let response = client.delete(DeleteRequest { api: query.api, id }).await?;

    Ok(Json(response.into_inner().into()))
}

/// List every ToDo
#[utoipa::path(
    get,
    path = "/v1/todo/all",
    tag = "todo",
    params(ApiQuery),
    responses(
        (status = 200, description = "All ToDo items", body = ReadAllResponseBody),
        (status = 501, description = "Unsupported API version", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn read_all(
    State(mut client): State<Client>,
    QueryParam(query): QueryParam<ApiQuery>,
) -> TodoResult<Json<ReadAllResponseBody>> {
    let response = client.read_all(ReadAllRequest { api: query.api }).await?;

    Ok(Json(response.into_inner().try_into()?))
}
