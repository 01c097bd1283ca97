use serde::{Deserialize, Serialize};

use crate::model::RoutePath;

/// body of a successful route request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub paths: Vec<RoutePath>,
}
