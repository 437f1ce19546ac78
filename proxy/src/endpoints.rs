use crate::client::Client;
use crate::params::RequestParams;
use crate::utils::ENDPOINT_PATTERN_PATH;
use utility::model::EndpointInfo;
use utility::Result;

impl Client {
    /// list_endpoint_patterns lists every endpoint pattern of the environment
    pub async fn list_endpoint_patterns(&self, params: &RequestParams) -> Result<Vec<EndpointInfo>> {
        let url = self.endpoint_url(ENDPOINT_PATTERN_PATH, params, &[]);
        self.get_items(url, "endpoint patterns").await
    }
}
