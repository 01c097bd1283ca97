use chrono::Utc;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tokio::sync::mpsc;
use url::Url;

use super::{PlannerSession, QueryArguments};
use crate::client::HttpRouteClient;
use crate::codec::QueryCodec;
use crate::config::PlannerConfig;
use crate::coordinator::{AddressBar, MemoryAddressBar, Orchestrator, PlannerEvent};
use crate::model::{FetchStatus, PlannerError};

/// command line client for public transit trip planning against a routing server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PlannerApp {
    /// select the planner operation to run
    #[command(subcommand)]
    pub op: PlannerOperation,
    /// path to a .toml or .json file with planner configuration
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PlannerOperation {
    /// requests routes for a query and prints the shareable link and the
    /// resulting paths as JSON.
    Plan {
        #[command(flatten)]
        query: QueryArguments,
        /// initial page url, such as a previously shared link. its query
        /// seeds the fields not given as arguments.
        #[arg(long)]
        url: Option<String>,
        /// index of the route to select once results arrive
        #[arg(long)]
        select: Option<usize>,
    },
    /// prints the shareable link for a query without contacting the server.
    Link {
        #[command(flatten)]
        query: QueryArguments,
        #[arg(long)]
        url: Option<String>,
    },
    /// prints the query fields recovered from a link as JSON.
    Decode {
        /// a shared link or bare query string
        url: String,
    },
}

impl PlannerApp {
    pub fn run(&self) -> Result<(), PlannerError> {
        let config = match &self.configuration_file {
            None => PlannerConfig::default(),
            Some(f) => {
                log::info!("reading planner configuration from {f}");
                PlannerConfig::try_from(f)?
            }
        };
        match &self.op {
            PlannerOperation::Plan { query, url, select } => {
                run_plan(&config, query, url.as_ref(), *select)
            }
            PlannerOperation::Link { query, url } => {
                let mut orchestrator = build_orchestrator(&config, url.as_ref())?;
                orchestrator.update(PlannerEvent::Patch(query.to_patch()));
                orchestrator.update(PlannerEvent::Mount);
                println!("{}", orchestrator.address_bar().location());
                Ok(())
            }
            PlannerOperation::Decode { url } => {
                let codec = QueryCodec::new(&config.locale, &config.profile);
                let patch = codec.decode_str(url)?;
                let json = serde_json::to_string_pretty(&patch)
                    .map_err(|e| PlannerError::Runtime(format!("failure encoding query: {e}")))?;
                println!("{json}");
                Ok(())
            }
        }
    }
}

fn build_orchestrator(
    config: &PlannerConfig,
    url: Option<&String>,
) -> Result<Orchestrator<MemoryAddressBar>, PlannerError> {
    let location = match url {
        Some(u) => Url::parse(u)
            .map_err(|e| PlannerError::Configuration(format!("invalid initial url '{u}': {e}")))?,
        None => config.page_location().map_err(|e| {
            PlannerError::Configuration(format!("invalid page url '{}': {e}", config.page_url))
        })?,
    };
    Orchestrator::new(config, MemoryAddressBar::new(location), Utc::now())
}

fn run_plan(
    config: &PlannerConfig,
    query: &QueryArguments,
    url: Option<&String>,
    select: Option<usize>,
) -> Result<(), PlannerError> {
    let orchestrator = build_orchestrator(config, url)?;
    let client = HttpRouteClient::try_from(config)?;
    let session = PlannerSession::new(client, orchestrator);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(PlannerEvent::Patch(query.to_patch()))
        .map_err(|e| PlannerError::Runtime(format!("failure queueing query: {e}")))?;
    drop(tx);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            PlannerError::Runtime(format!("failure creating async rust tokio runtime: {e}"))
        })?;
    let mut orchestrator = runtime.block_on(session.run(rx));

    if orchestrator.info().is_none() {
        return Err(PlannerError::Inert(format!(
            "no server info from {}",
            config.base_url
        )));
    }
    if let Some(index) = select {
        orchestrator.select_route(index)?;
    }

    let routes = orchestrator.routes();
    match routes.status {
        FetchStatus::Idle => {
            return Err(PlannerError::RouteRequestFailed(String::from(
                "query is incomplete, both --from and --to are required",
            )))
        }
        FetchStatus::Failed => {
            return Err(PlannerError::RouteRequestFailed(
                routes.dispatched_request.clone().unwrap_or_default(),
            ))
        }
        FetchStatus::Fetching | FetchStatus::Succeeded => {}
    }
    log::info!(
        "possible routes: [{}]",
        routes
            .paths
            .iter()
            .positions(|p| p.is_possible)
            .join(", ")
    );

    eprintln!("{}", orchestrator.address_bar().location());
    let json = serde_json::to_string_pretty(&orchestrator.view())
        .map_err(|e| PlannerError::Runtime(format!("failure encoding routes: {e}")))?;
    println!("{json}");
    Ok(())
}
