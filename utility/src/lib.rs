///`${VAR}` and `${VAR:-default}` substitution for yaml files
pub mod envsubst;
mod error;
mod spotinst;
pub use spotinst::*;

pub use error::*;

pub const DEFAULT_API_URL: &str = "https://api.spotinst.io";
pub const PROVIDER_NAME: &str = "spotinst";

pub fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    *t == Default::default()
}
