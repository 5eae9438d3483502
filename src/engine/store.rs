use crate::domain::models::{FloodReport, ReportStatus};
use crate::error::FloodError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reports ordered newest first.
///
/// The ordering is re-established on every insertion and on load, so a hand-edited
/// session file cannot break it. Reports are never removed or edited here, apart from
/// the responder-owned `status` tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<FloodReport>", into = "Vec<FloodReport>")]
pub struct ReportStore {
    reports: Vec<FloodReport>,
}

impl ReportStore {
    pub fn insert(&mut self, report: FloodReport) {
        self.reports.push(report);
        self.resort();
    }

    pub fn all(&self) -> &[FloodReport] {
        &self.reports
    }

    pub fn get(&self, id: &str) -> Result<&FloodReport, FloodError> {
        self.reports
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| FloodError::ReportNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.reports.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Applies a responder workflow transition. Only `status` is mutable.
    pub fn set_status(&mut self, id: &str, status: ReportStatus) -> Result<&FloodReport, FloodError> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FloodError::ReportNotFound(id.to_string()))?;
        report.status = Some(status);
        Ok(report)
    }

    /// Creation-time-derived id (epoch millis), bumped until unused in this session.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn resort(&mut self) {
        // stable: equal timestamps keep insertion order
        self.reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}

impl From<Vec<FloodReport>> for ReportStore {
    fn from(reports: Vec<FloodReport>) -> Self {
        let mut store = Self { reports };
        store.resort();
        store
    }
}

impl From<ReportStore> for Vec<FloodReport> {
    fn from(store: ReportStore) -> Self {
        store.reports
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::ReportStore;
    use crate::domain::models::{FloodReport, GeoLocation, ReportStatus, RiskLevel};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    pub(crate) fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 12, 8, 0, 0).unwrap()
    }

    pub(crate) fn report(id: &str, risk: RiskLevel, at: GeoLocation, minutes_ago: i64) -> FloodReport {
        FloodReport {
            id: id.to_string(),
            location: at,
            image_url: None,
            depth: "0.5m".to_string(),
            risk,
            objects_detected: vec![],
            vulnerable_people: None,
            advice: String::new(),
            timestamp: fixed_now() - Duration::minutes(minutes_ago),
            address: None,
            is_sos: false,
            status: None,
            forecast: None,
            historical_peaks: None,
        }
    }

    fn is_newest_first(store: &ReportStore) -> bool {
        store
            .all()
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp)
    }

    #[test]
    fn insert_keeps_newest_first_for_any_arrival_order() {
        let here = GeoLocation::new(10.885, 106.781);
        let mut store = ReportStore::default();
        for (i, age) in [45, 5, 2880, 180, 0, 1200, 480].into_iter().enumerate() {
            store.insert(report(&format!("r{i}"), RiskLevel::Medium, here, age));
            assert!(is_newest_first(&store));
        }
        assert_eq!(store.len(), 7);
        assert_eq!(store.all()[0].id, "r4");
        assert_eq!(store.all()[6].id, "r2");
    }

    #[test]
    fn loading_an_unsorted_list_restores_the_order() {
        let here = GeoLocation::new(10.885, 106.781);
        let raw = vec![
            report("old", RiskLevel::Low, here, 600),
            report("new", RiskLevel::High, here, 1),
        ];
        let json = serde_json::to_string(&raw).unwrap();
        let store: ReportStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store.all()[0].id, "new");
        assert!(is_newest_first(&store));
    }

    #[test]
    fn status_is_the_only_mutation() {
        let here = GeoLocation::new(10.885, 106.781);
        let mut store = ReportStore::default();
        store.insert(report("a", RiskLevel::High, here, 3));
        let before = store.get("a").unwrap().clone();

        let updated = store.set_status("a", ReportStatus::Rescued).unwrap();
        assert_eq!(updated.status, Some(ReportStatus::Rescued));
        assert_eq!(updated.location, before.location);
        assert_eq!(updated.timestamp, before.timestamp);

        assert!(store.set_status("missing", ReportStatus::Pending).is_err());
    }

    #[test]
    fn next_id_never_reuses_an_existing_id() {
        let here = GeoLocation::new(10.885, 106.781);
        let mut store = ReportStore::default();
        let first = store.next_id(fixed_now());
        store.insert(report(&first, RiskLevel::Low, here, 0));
        let second = store.next_id(fixed_now());
        assert_ne!(first, second);
        assert_eq!(
            second.parse::<i64>().unwrap(),
            fixed_now().timestamp_millis() + 1
        );
    }
}
