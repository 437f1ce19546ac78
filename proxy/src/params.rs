use crate::utils::{ACCOUNT_ID_KEY, ENVIRONMENT_ID_KEY};

/// DefaultParams the base query every provider call carries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefaultParams {
    pub account_id: String,
    pub environment_id: String,
}

impl DefaultParams {
    pub fn new<A: Into<String>, E: Into<String>>(account_id: A, environment_id: E) -> DefaultParams {
        DefaultParams {
            account_id: account_id.into(),
            environment_id: environment_id.into(),
        }
    }

    /// starts a call specific set of parameters on top of these defaults
    pub fn extend(&self) -> RequestParams {
        RequestParams::new(self)
    }
}

/// RequestParams the defaults composed with call specific overrides.
/// Built once per call and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParams {
    base: DefaultParams,
    overrides: Vec<(&'static str, String)>,
}

impl RequestParams {
    pub fn new(base: &DefaultParams) -> RequestParams {
        RequestParams {
            base: base.clone(),
            overrides: vec![],
        }
    }

    /// adds or replaces one parameter
    pub fn with<V: Into<String>>(mut self, key: &'static str, value: V) -> RequestParams {
        let value = value.into();
        match self.overrides.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.overrides.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// all non empty parameters, overrides taking precedence over the defaults
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = vec![
            (ACCOUNT_ID_KEY, self.base.account_id.as_str()),
            (ENVIRONMENT_ID_KEY, self.base.environment_id.as_str()),
        ];
        for (key, value) in &self.overrides {
            match pairs.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = value.as_str(),
                None => pairs.push((key, value.as_str())),
            }
        }
        pairs.retain(|(_, v)| !v.is_empty());
        pairs
    }

    /// query pairs, leaving out the keys that end up in the url path
    pub fn query_pairs(&self, skip: &[&str]) -> Vec<(&str, &str)> {
        self.pairs()
            .into_iter()
            .filter(|(k, _)| !skip.contains(k))
            .collect()
    }
}
