use crate::client::{Client, ClientAuth};
use reqwest::RequestBuilder;
use utility::{Error, Result};

///bearer token taken from the spotinst credentials
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new<S: Into<String>>(token: S) -> Result<BearerToken> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::Custom(
                "no spotinst token found, set it in ~/.spotinst/credentials or SPOTINST_TOKEN"
                    .to_string(),
            ));
        }
        Ok(BearerToken { token })
    }

    /// into_client builds an api client authenticating with this token
    pub fn into_client(self, api: &str) -> Result<Client> {
        Client::new(Box::new(self), api)
    }
}

impl ClientAuth for BearerToken {
    fn set(&self, req: &mut RequestBuilder) -> Result<()> {
        let req2 = req
            .try_clone()
            .ok_or_else(|| Error::Custom(format!("can't clone request :{:?}", req)))?;
        *req = req2.header("Authorization", "Bearer ".to_string() + self.token.as_str());
        Ok(())
    }
}
