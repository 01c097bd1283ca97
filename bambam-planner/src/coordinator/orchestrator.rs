use chrono::{DateTime, Utc};

use super::{
    AddressBar, AuxiliaryTrigger, FetchCoordinator, HistorySync, PlannerEffect, PlannerEvent,
    PlannerView, RouteSelector,
};
use crate::codec::QueryCodec;
use crate::config::PlannerConfig;
use crate::model::{GeoPoint, PlannerError, QueryPatch, QueryState, RouteResult, ServerInfo};

/// owner of all planner state. every change goes through
/// [`Orchestrator::update`], which returns the effects the caller has to run;
/// their results are fed back in as further events.
#[derive(Debug)]
pub struct Orchestrator<A: AddressBar> {
    codec: QueryCodec,
    fetcher: FetchCoordinator,
    selector: RouteSelector,
    history: HistorySync<A>,
    auxiliary_trigger: AuxiliaryTrigger,
    query: QueryState,
    routes: RouteResult,
    info: Option<ServerInfo>,
}

impl<A: AddressBar> Orchestrator<A> {
    /// builds the planner, seeding the query from the current location of the
    /// address bar on top of the configured defaults.
    pub fn new(
        config: &PlannerConfig,
        address_bar: A,
        now: DateTime<Utc>,
    ) -> Result<Orchestrator<A>, PlannerError> {
        let route_url = config.route_url().map_err(|e| {
            PlannerError::Configuration(format!(
                "invalid route url from '{}' + '{}': {e}",
                config.base_url, config.route_endpoint
            ))
        })?;
        let codec = QueryCodec::new(&config.locale, &config.profile);
        let mut query = QueryState::new(now, &config.defaults);
        let seed = codec.decode(&address_bar.location());
        if !seed.is_empty() {
            log::debug!("seeding query from address bar: {seed:?}");
            query.apply(&seed);
        }
        Ok(Orchestrator {
            codec,
            fetcher: FetchCoordinator::new(route_url, config.retain_paths_while_fetching),
            selector: RouteSelector::new(config.selection_policy),
            history: HistorySync::new(address_bar),
            auxiliary_trigger: config.auxiliary_trigger,
            query,
            routes: RouteResult::idle(),
            info: None,
        })
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn routes(&self) -> &RouteResult {
        &self.routes
    }

    pub fn info(&self) -> Option<&ServerInfo> {
        self.info.as_ref()
    }

    pub fn address_bar(&self) -> &A {
        self.history.address_bar()
    }

    pub fn codec(&self) -> &QueryCodec {
        &self.codec
    }

    /// the request that would answer the current query.
    pub fn canonical_request(&self) -> Option<String> {
        self.fetcher.canonical_request(&self.codec, &self.query)
    }

    /// `None` while the planner is inert, i.e. until server info arrived.
    pub fn view(&self) -> Option<PlannerView<'_>> {
        self.info.as_ref().map(|info| PlannerView {
            info,
            query: &self.query,
            routes: &self.routes,
        })
    }

    pub fn update(&mut self, event: PlannerEvent) -> Vec<PlannerEffect> {
        match event {
            PlannerEvent::Mount => {
                self.history.sync(&self.codec, &self.query);
                vec![PlannerEffect::FetchInfo]
            }
            PlannerEvent::InfoFetched(Ok(info)) => {
                log::info!(
                    "connected to routing server, version {}",
                    info.version.as_deref().unwrap_or("unknown")
                );
                self.info = Some(info);
                self.warn_outside_coverage();
                self.fetch(false)
            }
            PlannerEvent::InfoFetched(Err(e)) => {
                log::error!("failure loading server info, planner stays inert: {e}");
                vec![]
            }
            PlannerEvent::Patch(patch) => self.on_patch(&patch),
            PlannerEvent::SelectRoute(index) => {
                if let Err(e) = self.select_route(index) {
                    log::warn!("ignoring route selection: {e}");
                }
                vec![]
            }
            PlannerEvent::Refresh => self.fetch(true),
            PlannerEvent::RoutesFetched { request, outcome } => {
                self.fetcher
                    .reconcile(&self.codec, &self.query, &mut self.routes, request, outcome);
                vec![]
            }
        }
    }

    /// moves the highlighted route, leaving the result unchanged on error.
    pub fn select_route(&mut self, index: usize) -> Result<(), PlannerError> {
        self.routes = self.selector.select_explicit(&self.routes, index)?;
        Ok(())
    }

    fn on_patch(&mut self, patch: &QueryPatch) -> Vec<PlannerEffect> {
        let change = self.query.apply(patch);
        if !change.any() {
            return vec![];
        }
        if patch.origin.is_some() || patch.destination.is_some() {
            self.warn_outside_coverage();
        }
        self.history.sync(&self.codec, &self.query);
        let force = change.auxiliary
            && self
                .auxiliary_trigger
                .forces_refetch(self.query.auxiliary_distance);
        self.fetch(force)
    }

    fn fetch(&mut self, force: bool) -> Vec<PlannerEffect> {
        if self.info.is_none() {
            log::debug!("server info not loaded, route request deferred");
            return vec![];
        }
        self.fetcher
            .dispatch(&self.codec, &self.query, &mut self.routes, force)
            .into_iter()
            .collect()
    }

    fn warn_outside_coverage(&self) {
        let Some(info) = &self.info else {
            return;
        };
        let endpoints: [(&str, &Option<GeoPoint>); 2] = [
            ("origin", &self.query.origin),
            ("destination", &self.query.destination),
        ];
        for (name, point) in endpoints {
            if let Some(p) = (*point).filter(|p| !info.covers(p)) {
                log::warn!("{name} {p} lies outside of the routing server coverage");
            }
        }
    }
}
