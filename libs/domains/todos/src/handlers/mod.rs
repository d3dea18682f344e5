mod dto;
mod gateway;

pub use dto::{
    ApiQuery, CreateResponseBody, DeleteResponseBody, ReadAllResponseBody, ReadResponseBody,
    ToDoBody, ToDoPayload, UpdateResponseBody,
};
pub use gateway::Client;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{MethodFilter, MethodRouter, on},
};
use axum_helpers::{ErrorResponse, JsonBody, PathParam, QueryParam};
use utoipa::OpenApi;

/// ToDo operation a gateway route forwards to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    ReadAll,
}

/// One row of the gateway route table
#[derive(Debug, Clone, Copy)]
pub struct GatewayRoute {
    pub method: MethodFilter,
    pub path: &'static str,
    pub operation: Operation,
    pub success: StatusCode,
}

/// HTTP → gRPC route table.
///
/// `/v1/todo/all` is a static segment and takes priority over `/v1/todo/{id}`.
pub const ROUTES: &[GatewayRoute] = &[
    GatewayRoute {
        method: MethodFilter::POST,
        path: "/v1/todo",
        operation: Operation::Create,
        success: StatusCode::CREATED,
    },
    GatewayRoute {
        method: MethodFilter::GET,
        path: "/v1/todo/all",
        operation: Operation::ReadAll,
        success: StatusCode::OK,
    },
    GatewayRoute {
        method: MethodFilter::GET,
        path: "/v1/todo/{id}",
        operation: Operation::Read,
        success: StatusCode::OK,
    },
    GatewayRoute {
        method: MethodFilter::PUT,
        path: "/v1/todo/{id}",
        operation: Operation::Update,
        success: StatusCode::OK,
    },
    GatewayRoute {
        method: MethodFilter::PATCH,
        path: "/v1/todo/{id}",
        operation: Operation::Update,
        success: StatusCode::OK,
    },
    GatewayRoute {
        method: MethodFilter::DELETE,
        path: "/v1/todo/{id}",
        operation: Operation::Delete,
        success: StatusCode::OK,
    },
];

/// OpenAPI documentation for the REST gateway
#[derive(OpenApi)]
#[openapi(
    info(title = "ToDo gateway", description = "HTTP+JSON front end of todo.v1.ToDoService"),
    paths(
        gateway::create,
        gateway::read,
        gateway::update,
        gateway::delete,
        gateway::read_all,
    ),
    components(schemas(
        ToDoBody,
        ToDoPayload,
        CreateResponseBody,
        ReadResponseBody,
        UpdateResponseBody,
        DeleteResponseBody,
        ReadAllResponseBody,
        ErrorResponse,
    )),
    tags((name = "todo", description = "ToDo operations forwarded over gRPC"))
)]
pub struct GatewayApiDoc;

fn method_router(route: &GatewayRoute) -> MethodRouter<Client> {
    let success = route.success;

    match route.operation {
        Operation::Create => on(
            route.method,
            move |state: State<Client>, body: JsonBody<ToDoPayload>| async move {
                gateway::create(state, body).await.map(|json| (success, json))
            },
        ),
        Operation::Read => on(
            route.method,
            move |state: State<Client>, id: PathParam<i64>, query: QueryParam<ApiQuery>| async move {
                gateway::read(state, id, query).await.map(|json| (success, json))
            },
        ),
        Operation::Update => on(
            route.method,
            move |state: State<Client>, id: PathParam<i64>, body: JsonBody<ToDoPayload>| async move {
                gateway::update(state, id, body).await.map(|json| (success, json))
            },
        ),
        Operation::Delete => on(
            route.method,
            move |state: State<Client>, id: PathParam<i64>, query: QueryParam<ApiQuery>| async move {
                gateway::delete(state, id, query).await.map(|json| (success, json))
            },
        ),
        Operation::ReadAll => on(
            route.method,
            move |state: State<Client>, query: QueryParam<ApiQuery>| async move {
                gateway::read_all(state, query).await.map(|json| (success, json))
            },
        ),
    }
}

/// Router for every entry of [`ROUTES`], forwarding through `client`
pub fn gateway_router(client: Client) -> Router {
    ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path, method_router(route))
        })
        .with_state(client)
}
