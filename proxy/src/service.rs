use crate::client::Client;
use crate::params::RequestParams;
use async_trait::async_trait;
use utility::model::{CronInfo, EndpointInfo, FunctionRecord};
use utility::Result;

/// FunctionsService the provider reads the info report is built from
#[async_trait]
pub trait FunctionsService {
    async fn read_function(&self, params: &RequestParams) -> Result<Vec<FunctionRecord>>;
    async fn list_endpoint_patterns(&self, params: &RequestParams) -> Result<Vec<EndpointInfo>>;
    async fn read_events(&self, params: &RequestParams) -> Result<Vec<CronInfo>>;
}

#[async_trait]
impl FunctionsService for Client {
    async fn read_function(&self, params: &RequestParams) -> Result<Vec<FunctionRecord>> {
        Client::read_function(self, params).await
    }

    async fn list_endpoint_patterns(&self, params: &RequestParams) -> Result<Vec<EndpointInfo>> {
        Client::list_endpoint_patterns(self, params).await
    }

    async fn read_events(&self, params: &RequestParams) -> Result<Vec<CronInfo>> {
        Client::read_events(self, params).await
    }
}
