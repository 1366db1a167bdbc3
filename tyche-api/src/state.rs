use std::sync::Arc;
use tyche_catalog::StartingRates;
use tyche_core::{BookingRules, Storage};
use tyche_store::Config;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub booking_rules: BookingRules,
    pub pricing: StartingRates,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            booking_rules: BookingRules::default(),
            pricing: StartingRates::default(),
        }
    }

    pub fn from_config(storage: Arc<dyn Storage>, config: &Config) -> Self {
        Self {
            storage,
            booking_rules: config.business_rules.booking_rules(),
            pricing: config.pricing.clone(),
        }
    }
}
