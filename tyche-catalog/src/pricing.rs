use serde::{Deserialize, Serialize};
use crate::service::{Rate, ServiceType};

/// Advertised "from" price per service type.
///
/// The booking form quotes one of these as the estimated price. The server
/// never recomputes a booking's price; the table is only used to notice
/// estimates that do not line up with what the site advertises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartingRates {
    #[serde(default = "default_jet_per_hour")]
    pub jet_per_hour: i64,
    #[serde(default = "default_yacht_per_day")]
    pub yacht_per_day: i64,
    #[serde(default = "default_car_per_day")]
    pub car_per_day: i64,
}

fn default_jet_per_hour() -> i64 { 5000 }
fn default_yacht_per_day() -> i64 { 15000 }
fn default_car_per_day() -> i64 { 1200 }

impl Default for StartingRates {
    fn default() -> Self {
        Self {
            jet_per_hour: default_jet_per_hour(),
            yacht_per_day: default_yacht_per_day(),
            car_per_day: default_car_per_day(),
        }
    }
}

impl StartingRates {
    pub fn rate_for(&self, service_type: ServiceType) -> Rate {
        match service_type {
            ServiceType::Jet => Rate::PerHour(self.jet_per_hour),
            ServiceType::Yacht => Rate::PerDay(self.yacht_per_day),
            ServiceType::Car => Rate::PerDay(self.car_per_day),
        }
    }

    /// Whether a client-side estimate matches the advertised starting rate.
    ///
    /// Unknown service types have no advertised rate and never match.
    pub fn matches_estimate(&self, service_type: &str, estimate: i64) -> bool {
        service_type
            .parse::<ServiceType>()
            .map(|t| self.rate_for(t).amount() == estimate)
            .unwrap_or(false)
    }
}
