use domain_todos::{TodoRepository, TodoService};
use rpc::todo::v1::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest,
    ReadAllResponse, ReadRequest, ReadResponse, UpdateRequest, UpdateResponse,
    to_do_service_server::ToDoService,
};
use tonic::{Request, Response, Status};

/// `todo.v1.ToDoService` backed by the domain service
pub struct ToDoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    service: TodoService<R>,
}

impl<R> ToDoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    pub fn new(service: TodoService<R>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R> ToDoService for ToDoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let response = self.service.create(request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn read(&self, request: Request<ReadRequest>) -> Result<Response<ReadResponse>, Status> {
        let response = self.service.read(request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let response = self.service.update(request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let response = self.service.delete(request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn read_all(
        &self,
        request: Request<ReadAllRequest>,
    ) -> Result<Response<ReadAllResponse>, Status> {
        let response = self.service.read_all(request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
