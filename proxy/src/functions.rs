use crate::client::Client;
use crate::params::RequestParams;
use crate::utils::{function_path, ID_KEY};
use utility::model::FunctionRecord;
use utility::{Error, Result};

impl Client {
    /// read_function reads one function by the `id` parameter.
    /// The api answers with an array holding at most the one function.
    pub async fn read_function(&self, params: &RequestParams) -> Result<Vec<FunctionRecord>> {
        let id = params
            .get(ID_KEY)
            .ok_or_else(|| Error::Custom("function id is required".to_string()))?;
        let url = self.endpoint_url(function_path(id).as_str(), params, &[ID_KEY]);
        self.get_items(url, format!("function: {}", id).as_str()).await
    }
}
