use crate::client::Client;
use crate::params::RequestParams;
use crate::utils::{EVENTS_PATH, RESOURCE_ID_KEY};
use utility::model::CronInfo;
use utility::{Error, Result};

impl Client {
    /// read_events reads the spectrum events of the `resourceId` parameter,
    /// narrowed down by `action`
    pub async fn read_events(&self, params: &RequestParams) -> Result<Vec<CronInfo>> {
        let resource_id = params
            .get(RESOURCE_ID_KEY)
            .ok_or_else(|| Error::Custom("event resource id is required".to_string()))?;
        let url = self.endpoint_url(EVENTS_PATH, params, &[]);
        self.get_items(url, format!("events of resource: {}", resource_id).as_str())
            .await
    }
}
