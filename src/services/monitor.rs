use crate::domain::models::{DangerReport, State};
use crate::engine::danger::rescan;
use crate::services::alarm::{sound_alarm, Siren};

/// Re-runs the danger scan after a session mutation and stores the new state.
///
/// Without a user location the stored state stays exactly as it was.
pub fn refresh_danger(state: &mut State, siren: &dyn Siren) -> DangerReport {
    let Some(outcome) = rescan(state.user_location, state.reports.all()) else {
        tracing::debug!("no user location, danger state frozen");
        return DangerReport {
            scanned: false,
            alarm: false,
            state: state.danger.clone(),
        };
    };

    if outcome.state.is_user_safe_override {
        tracing::info!("local safe report overrides nearby warnings");
    }
    if let Some(threat) = &outcome.state.nearest_threat {
        tracing::info!(
            report = %threat.report.id,
            distance_km = threat.distance_km,
            risk = ?threat.report.risk,
            "threat within alert radius"
        );
    }
    if outcome.alarm {
        sound_alarm(siren);
    }

    state.danger = Some(outcome.state.clone());
    DangerReport {
        scanned: true,
        alarm: outcome.alarm,
        state: Some(outcome.state),
    }
}

#[cfg(test)]
mod tests {
    use super::refresh_danger;
    use crate::domain::models::{
        DangerState, FloodForecast, ForecastTrend, GeoLocation, RiskLevel, State,
    };
    use crate::engine::store::tests::report;
    use crate::services::alarm::Siren;
    use std::cell::Cell;

    struct Recorder(Cell<u32>);

    impl Siren for Recorder {
        fn play(&self) -> anyhow::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    const USER: GeoLocation = GeoLocation::new(10.885, 106.781);

    #[test]
    fn missing_location_freezes_previous_state() {
        let previous = DangerState {
            is_user_safe_override: true,
            nearest_threat: None,
        };
        let mut state = State {
            danger: Some(previous.clone()),
            ..State::default()
        };
        state.reports.insert(report("h", RiskLevel::High, USER, 1));

        let siren = Recorder(Cell::new(0));
        let out = refresh_danger(&mut state, &siren);
        assert!(!out.scanned);
        assert_eq!(out.state, Some(previous.clone()));
        assert_eq!(state.danger, Some(previous));
        assert_eq!(siren.0.get(), 0);
    }

    #[test]
    fn rising_threat_stores_state_and_plays_once() {
        let mut rising = report("r", RiskLevel::Medium, USER, 1);
        rising.forecast = Some(FloodForecast {
            trend: ForecastTrend::Rising,
            predicted_change: "+0.2m".to_string(),
            estimated_clearance_time: None,
        });
        let mut state = State {
            user_location: Some(USER),
            ..State::default()
        };
        state.reports.insert(rising);

        let siren = Recorder(Cell::new(0));
        let out = refresh_danger(&mut state, &siren);
        assert!(out.scanned);
        assert!(out.alarm);
        assert_eq!(siren.0.get(), 1);
        let stored = state.danger.expect("stored state");
        assert_eq!(stored.nearest_threat.unwrap().report.id, "r");
    }
}
