use crate::client::ClientAuth;

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod events;
pub mod functions;
pub mod params;
pub mod service;
pub mod utils;

/// ClientAuth that leaves requests untouched, for tests against mock servers
#[derive(Clone)]
pub struct TestAuth;

impl ClientAuth for TestAuth {
    fn set(&self, _req: &mut reqwest::RequestBuilder) -> utility::Result<()> {
        Ok(())
    }
}
