#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tracking_number_service::application::services::TrackingService;
use tracking_number_service::domain::clock::{Clock, SystemClock};
use tracking_number_service::state::AppState;

/// Clock pinned to a single instant, for deterministic generator output.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap()
}

pub fn create_test_state() -> AppState {
    let service = Arc::new(TrackingService::new(Arc::new(SystemClock)));
    AppState::new(service)
}

pub fn create_fixed_clock_state(instant: DateTime<Utc>) -> AppState {
    let service = Arc::new(TrackingService::new(Arc::new(FixedClock(instant))));
    AppState::new(service)
}
