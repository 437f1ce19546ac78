use crate::console::Console;
use crate::render::{render_identity, render_report};
use futures::future::join_all;
use proxy::params::DefaultParams;
use proxy::service::FunctionsService;
use proxy::utils::{ACTION_KEY, ID_KEY, INVOKE_FUNCTION_ACTION, RESOURCE_ID_KEY};
use stack::registry::{resolve_function, LocalRegistry};
use utility::model::{CronInfo, EndpointInfo, FunctionRecord, LocalFunctionDescriptor};
use utility::{Error, Result};

/// FetchStatus outcome of one best effort join step
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Fetched,
    Failed(String),
}

/// Report everything `info` prints
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub service: String,
    pub functions: Vec<FunctionRecord>,
    pub endpoints: FetchStatus,
    pub crons: FetchStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoOptions {
    /// limits the report to one function
    pub function: Option<String>,
    pub stage: String,
    pub show_fetch_errors: bool,
}

/// Info builds the info report of a service out of the local registry and the provider api
pub struct Info<'a, S, R, C> {
    service: &'a S,
    registry: &'a R,
    console: &'a C,
    defaults: DefaultParams,
    service_name: String,
    options: InfoOptions,
}

impl<'a, S, R, C> Info<'a, S, R, C>
where
    S: FunctionsService,
    R: LocalRegistry,
    C: Console,
{
    pub fn new<N: Into<String>>(
        service: &'a S,
        registry: &'a R,
        console: &'a C,
        defaults: DefaultParams,
        service_name: N,
        options: InfoOptions,
    ) -> Info<'a, S, R, C> {
        Info {
            service,
            registry,
            console,
            defaults,
            service_name: service_name.into(),
            options,
        }
    }

    /// info builds the report and prints it
    pub async fn info(&self) -> Result<Report> {
        let report = self.build_report().await?;
        self.log_functions(&report);
        Ok(report)
    }

    pub async fn build_report(&self) -> Result<Report> {
        let functions = match &self.options.function {
            Some(name) => self.get_single_function(name.as_str()).await?,
            None => self.get_all_functions().await?,
        };
        let (functions, endpoints) = self.get_endpoint_patterns(functions).await;
        let (functions, crons) = self.get_cron_jobs(functions).await;

        Ok(Report {
            service: self.service_name.clone(),
            functions,
            endpoints,
            crons,
        })
    }

    /// get_single_function reads the function registered under `name` or `name-stage`
    pub async fn get_single_function(&self, name: &str) -> Result<Vec<FunctionRecord>> {
        let funcs = self.registry.local_functions()?;
        let func = resolve_function(&funcs, name, self.options.stage.as_str())?;

        let params = self.defaults.extend().with(ID_KEY, func.id.as_str());
        let mut record = self
            .service
            .read_function(&params)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("function: {} ({})", name, func.id)))?;
        record.stage = self.stage_of(&func);
        Ok(vec![record])
    }

    /// get_all_functions reads every registered function at once.
    /// Functions the api no longer knows are left out of the result.
    pub async fn get_all_functions(&self) -> Result<Vec<FunctionRecord>> {
        let funcs = self.registry.local_functions()?;

        let calls = funcs.values().map(|func| {
            let params = self.defaults.extend().with(ID_KEY, func.id.as_str());
            async move {
                match self.service.read_function(&params).await {
                    Ok(items) => match items.into_iter().next() {
                        Some(mut res) => {
                            res.stage = self.stage_of(func);
                            Ok(Some(res))
                        }
                        None => {
                            tracing::debug!(
                                "skipping {} ({}), no remote record",
                                func.name,
                                func.id
                            );
                            Ok(None)
                        }
                    },
                    Err(Error::NotFound(what)) => {
                        tracing::debug!("skipping {} ({}), no such {}", func.name, func.id, what);
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            }
        });

        let mut records = vec![];
        for res in join_all(calls).await {
            if let Some(record) = res? {
                records.push(record);
            }
        }
        Ok(records)
    }

    // the declared stage, or the stage of this run for descriptors deployed without one
    fn stage_of(&self, func: &LocalFunctionDescriptor) -> String {
        if func.stage.is_empty() {
            self.options.stage.clone()
        } else {
            func.stage.clone()
        }
    }

    /// get_endpoint_patterns attaches every endpoint pattern to the function it routes to
    pub async fn get_endpoint_patterns(
        &self,
        items: Vec<FunctionRecord>,
    ) -> (Vec<FunctionRecord>, FetchStatus) {
        let params = self.defaults.extend();
        match self.service.list_endpoint_patterns(&params).await {
            Ok(endpoints) => (join_endpoints(items, endpoints), FetchStatus::Fetched),
            Err(e) => {
                tracing::warn!("can't list endpoint patterns: {}", e);
                (items, FetchStatus::Failed(e.to_string()))
            }
        }
    }

    /// get_cron_jobs attaches the scheduled invocation of every function.
    /// A single failed read leaves all functions without cron.
    pub async fn get_cron_jobs(
        &self,
        items: Vec<FunctionRecord>,
    ) -> (Vec<FunctionRecord>, FetchStatus) {
        let calls = items.iter().map(|func| {
            let params = self
                .defaults
                .extend()
                .with(RESOURCE_ID_KEY, func.id.as_str())
                .with(ACTION_KEY, INVOKE_FUNCTION_ACTION);
            async move { self.service.read_events(&params).await }
        });

        let results: Result<Vec<Vec<CronInfo>>> = join_all(calls).await.into_iter().collect();
        match results {
            Ok(crons) => {
                let items = items
                    .into_iter()
                    .zip(crons)
                    .map(|(mut func, events)| {
                        func.cron = events.into_iter().next();
                        func
                    })
                    .collect();
                (items, FetchStatus::Fetched)
            }
            Err(e) => {
                tracing::warn!("can't read cron events: {}", e);
                (items, FetchStatus::Failed(e.to_string()))
            }
        }
    }

    pub fn log_functions(&self, report: &Report) {
        self.console
            .console_log(&render_report(report, self.options.show_fetch_errors));
    }

    /// logs prints name, id and latest version of the requested function
    pub async fn logs(&self) -> Result<FunctionRecord> {
        let name = self.options.function.as_deref().ok_or_else(|| {
            Error::Custom("a function name is required, pass it with --function".to_string())
        })?;
        let record = self
            .get_single_function(name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("function: {}", name)))?;
        self.console.console_log(&render_identity(&record));
        Ok(record)
    }
}

/// join_endpoints matches endpoints to functions by id, a later match replaces an earlier one
pub fn join_endpoints(
    mut items: Vec<FunctionRecord>,
    endpoints: Vec<EndpointInfo>,
) -> Vec<FunctionRecord> {
    for endpoint in endpoints {
        for func in items.iter_mut().filter(|f| f.id == endpoint.function_id) {
            if let Some(previous) = &func.endpoint {
                tracing::warn!(
                    "function {} has more than one endpoint, {} {} replaces {} {}",
                    func.id,
                    endpoint.method,
                    endpoint.pattern,
                    previous.method,
                    previous.pattern
                );
            }
            func.endpoint = Some(endpoint.clone());
        }
    }
    items
}
