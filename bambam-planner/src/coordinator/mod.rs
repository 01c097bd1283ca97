mod address_bar;
mod auxiliary_trigger;
mod fetch_coordinator;
mod history_sync;
mod orchestrator;
mod planner_effect;
mod planner_event;
mod planner_view;
mod route_selector;
mod selection_policy;

pub use address_bar::{AddressBar, MemoryAddressBar};
pub use auxiliary_trigger::AuxiliaryTrigger;
pub use fetch_coordinator::{FetchCoordinator, Reconciliation};
pub use history_sync::HistorySync;
pub use orchestrator::Orchestrator;
pub use planner_effect::PlannerEffect;
pub use planner_event::PlannerEvent;
pub use planner_view::PlannerView;
pub use route_selector::RouteSelector;
pub use selection_policy::SelectionPolicy;
