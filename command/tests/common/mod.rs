#![allow(dead_code)]
use async_trait::async_trait;
use command::console::{Console, Line};
use proxy::params::RequestParams;
use proxy::service::FunctionsService;
use proxy::utils::{ACTION_KEY, ID_KEY, INVOKE_FUNCTION_ACTION, RESOURCE_ID_KEY};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;
use utility::model::{CronInfo, EndpointInfo, FunctionLimits, FunctionRecord, LocalFunctionDescriptor};
use utility::{Error, Result};

/// RecordingConsole keeps what would have been printed
#[derive(Default)]
pub struct RecordingConsole {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn output(&self) -> String {
        self.lines.lock().unwrap().join("\n")
    }
}

impl Console for RecordingConsole {
    fn console_log(&self, lines: &[Line]) {
        let mut out = self.lines.lock().unwrap();
        out.extend(lines.iter().map(|l| l.to_string()));
    }
}

/// FakeProvider answers from memory and counts the calls it gets
#[derive(Default)]
pub struct FakeProvider {
    pub functions: HashMap<String, Vec<FunctionRecord>>,
    pub broken_functions: HashSet<String>,
    pub endpoints: Option<Vec<EndpointInfo>>,
    pub crons: HashMap<String, Vec<CronInfo>>,
    pub broken_crons: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FunctionsService for FakeProvider {
    async fn read_function(&self, params: &RequestParams) -> Result<Vec<FunctionRecord>> {
        let id = params.get(ID_KEY).unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(format!("function {}", id));
        if self.broken_functions.contains(&id) {
            return Err(Error::Custom(format!("Server returned unexpected status code 500 for {}", id)));
        }
        self.functions
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("function: {}", id)))
    }

    async fn list_endpoint_patterns(&self, _params: &RequestParams) -> Result<Vec<EndpointInfo>> {
        self.calls.lock().unwrap().push("endpoints".to_string());
        self.endpoints
            .clone()
            .ok_or_else(|| Error::Custom("can't connect to spotinst".to_string()))
    }

    async fn read_events(&self, params: &RequestParams) -> Result<Vec<CronInfo>> {
        let id = params.get(RESOURCE_ID_KEY).unwrap_or_default().to_string();
        assert_eq!(params.get(ACTION_KEY), Some(INVOKE_FUNCTION_ACTION));
        self.calls.lock().unwrap().push(format!("events {}", id));
        if self.broken_crons.contains(&id) {
            return Err(Error::Custom(format!("can't read events of {}", id)));
        }
        Ok(self.crons.get(&id).cloned().unwrap_or_default())
    }
}

pub fn descriptor(name: &str, id: &str, stage: &str) -> LocalFunctionDescriptor {
    LocalFunctionDescriptor {
        name: name.into(),
        id: id.into(),
        stage: stage.into(),
    }
}

pub fn registry(entries: &[(&str, LocalFunctionDescriptor)]) -> BTreeMap<String, LocalFunctionDescriptor> {
    entries
        .iter()
        .map(|(key, func)| (key.to_string(), func.clone()))
        .collect()
}

pub fn record(id: &str, name: &str) -> FunctionRecord {
    FunctionRecord {
        id: id.into(),
        name: name.into(),
        runtime: "node".into(),
        limits: FunctionLimits {
            memory: 128,
            timeout: 30,
        },
        latest_version: 1,
        url: "http://x".into(),
        created_at: "t0".into(),
        ..Default::default()
    }
}
