use crate::params::RequestParams;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use utility::response::ApiResponse;
use utility::{Error, Result};

///an API client to perform all operations
pub struct Client {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Box<dyn ClientAuth + Send + Sync>,
    ///base url of the spotinst api
    pub api: Url,
    ///user agent for the client
    pub user_agent: Option<String>,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth {
    fn set(&self, req: &mut reqwest::RequestBuilder) -> Result<()>;
}

impl Client {
    /// initializes a new API client
    pub fn new(auth: Box<dyn ClientAuth + Send + Sync>, api: &str) -> Result<Client> {
        let url = api.trim_end_matches('/');
        let url = Url::parse(url).map_err(|e| Error::Custom(format!("{:?}", e)))?;

        Ok(Client {
            http_client: reqwest::Client::new(),
            client_auth: auth,
            api: url,
            user_agent: None,
        })
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Client {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// endpoint_url appends `path` to the api base path and sets the query,
    /// leaving out the `skip` keys which the caller already put into the path
    pub fn endpoint_url(&self, path: &str, params: &RequestParams, skip: &[&str]) -> Url {
        let mut endpoint = self.api.clone();
        let full_path = format!(
            "{}/{}",
            endpoint.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        endpoint.set_path(full_path.as_str());

        let pairs = params.query_pairs(skip);
        if pairs.is_empty() {
            endpoint.set_query(None);
        } else {
            endpoint.query_pairs_mut().clear().extend_pairs(pairs);
        }
        endpoint
    }

    ///create a new HTTP request with authentication
    pub fn new_request(&self, method: Method, url: Url) -> Result<reqwest::RequestBuilder> {
        let mut req = self
            .http_client
            .request(method, url)
            .header("Content-Type", "application/json");
        if let Some(user_agent) = &self.user_agent {
            req = req.header("User-Agent", user_agent.as_str());
        }
        self.client_auth.set(&mut req)?;

        Ok(req)
    }

    ///perform an HTTP request
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        tracing::debug!(method = %req.method(), url = %req.url(), "spotinst request");
        let resp = self.http_client.execute(req).await?;
        tracing::debug!(status = %resp.status(), "spotinst response");
        Ok(resp)
    }

    /// get_items performs a GET and unwraps the items of the response envelope.
    /// `what` names the resource in error messages.
    pub(crate) async fn get_items<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<Vec<T>> {
        let req = self
            .new_request(Method::GET, url)
            .and_then(|req| req.build().map_err(Error::Reqwest))
            .map_err(|e| {
                Error::Custom(format!(
                    "can't read {} from spotinst on URL {}\nand debug reason {:?}",
                    what,
                    self.api.as_str(),
                    e
                ))
            })?;

        let res = self.do_request(req).await.map_err(|_| {
            Error::Custom(format!(
                "can't connect to spotinst on URL: {}",
                self.api.as_str()
            ))
        })?;

        match res.status() {
            StatusCode::OK => {
                let body = res.text().await?;
                if body.is_empty() {
                    return Ok(vec![]);
                }
                let response: ApiResponse<T> = serde_json::from_str(body.as_str()).map_err(|e| {
                    Error::Custom(format!(
                        "can't read {} from spotinst on URL {}\nand debug reason {:?}",
                        what,
                        self.api.as_str(),
                        e
                    ))
                })?;
                Ok(response.into_items())
            }
            StatusCode::UNAUTHORIZED => Err(Error::Custom(
                "unauthorized access, check the token in your spotinst credentials".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(Error::NotFound(what.to_string())),
            status => {
                let err = res.text().await.map(|body| {
                    Error::Custom(format!(
                        "Server returned unexpected status code {} and body {}",
                        status, body
                    ))
                })?;
                Err(err)
            }
        }
    }
}
