use futures::{
    future::LocalBoxFuture,
    stream::{FuturesUnordered, StreamExt},
    FutureExt,
};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::client::RouteClient;
use crate::coordinator::{AddressBar, Orchestrator, PlannerEffect, PlannerEvent};

/// runs an [`Orchestrator`] against a [`RouteClient`] on a single task.
///
/// user events and finished requests are handled one at a time in arrival
/// order. requests run concurrently with each other and with user input, and
/// may finish in any order.
pub struct PlannerSession<C: RouteClient, A: AddressBar> {
    client: C,
    orchestrator: Orchestrator<A>,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, PlannerEvent>>,
}

impl<C: RouteClient, A: AddressBar> PlannerSession<C, A> {
    pub fn new(client: C, orchestrator: Orchestrator<A>) -> PlannerSession<C, A> {
        PlannerSession {
            client,
            orchestrator,
            in_flight: FuturesUnordered::new(),
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator<A> {
        &self.orchestrator
    }

    /// number of requests that have been sent but not yet answered
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// applies an event and starts any request it calls for.
    pub fn dispatch(&mut self, event: PlannerEvent) {
        for effect in self.orchestrator.update(event) {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: PlannerEffect) {
        match effect {
            PlannerEffect::FetchInfo => {
                let fetch = self.client.fetch_info();
                self.in_flight
                    .push(fetch.map(PlannerEvent::InfoFetched).boxed_local());
            }
            PlannerEffect::FetchRoutes { request } => {
                let fetch = self.client.fetch_routes(&request);
                self.in_flight.push(
                    async move {
                        let outcome = fetch.await;
                        PlannerEvent::RoutesFetched { request, outcome }
                    }
                    .boxed_local(),
                );
            }
        }
    }

    /// mounts the planner and processes events until `inputs` is closed and
    /// every outstanding request has finished. returns the final state.
    pub async fn run(mut self, mut inputs: UnboundedReceiver<PlannerEvent>) -> Orchestrator<A> {
        self.dispatch(PlannerEvent::Mount);
        let mut inputs_open = true;
        loop {
            tokio::select! {
                event = inputs.recv(), if inputs_open => match event {
                    Some(event) => self.dispatch(event),
                    None => {
                        log::debug!("input closed with {} requests in flight", self.in_flight.len());
                        inputs_open = false;
                    }
                },
                Some(done) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.dispatch(done)
                },
                else => break,
            }
        }
        self.orchestrator
    }
}
