use crate::domain::models::{
    FloodForecast, FloodReport, ForecastTrend, GeoLocation, HistoricalPeak, RiskLevel,
};
use chrono::{DateTime, Duration, Utc};

struct Sample {
    lat: f64,
    lng: f64,
    address: &'static str,
    desc: &'static str,
    risk: RiskLevel,
    depth: &'static str,
    objects: &'static [&'static str],
    vulnerable: &'static [&'static str],
    trend: ForecastTrend,
    change: &'static str,
    clearance: &'static str,
    minutes_ago: i64,
    peaks: &'static [(i32, &'static str, &'static str)],
}

const SAMPLES: &[Sample] = &[
    Sample {
        lat: 10.8850,
        lng: 106.7810,
        address: "Bcons Plaza main gate, Thong Nhat",
        desc: "Water flooding basement B1, two elderly people stuck in the elevator.",
        risk: RiskLevel::High,
        depth: "1.2m",
        objects: &["Basement", "Elevator", "Car"],
        vulnerable: &["Elderly", "Security Guard"],
        trend: ForecastTrend::Rising,
        change: "+0.1m",
        clearance: "Unknown",
        minutes_ago: 5,
        peaks: &[(2022, "0.8m", "Oct 2022"), (2019, "1.0m", "Nov 2019")],
    },
    Sample {
        lat: 10.8900,
        lng: 106.7900,
        address: "New Mien Dong Bus Station",
        desc: "Local flooding at the pickup area, buses still moving slowly.",
        risk: RiskLevel::Medium,
        depth: "0.4m",
        objects: &["Bus", "Passenger"],
        vulnerable: &[],
        trend: ForecastTrend::Stable,
        change: "0m",
        clearance: "1h",
        minutes_ago: 45,
        peaks: &[(2020, "0.5m", "Sep 2020")],
    },
    Sample {
        lat: 10.8820,
        lng: 106.7780,
        address: "Tan Hoa residential area, Dong Hoa",
        desc: "Deep water inside houses, a newborn needs urgent evacuation.",
        risk: RiskLevel::High,
        depth: "1.5m",
        objects: &["House", "Baby Crib"],
        vulnerable: &["Baby", "Mother"],
        trend: ForecastTrend::Rising,
        change: "+0.2m",
        clearance: "Unknown",
        minutes_ago: 180,
        peaks: &[(2018, "1.8m", "Oct 2018")],
    },
    Sample {
        lat: 10.8750,
        lng: 106.7850,
        address: "Stone Lake, University Village",
        desc: "Slippery mud on the road after the rain, drive slowly.",
        risk: RiskLevel::Low,
        depth: "0.1m",
        objects: &["Road", "Tree"],
        vulnerable: &[],
        trend: ForecastTrend::Receding,
        change: "-0.1m",
        clearance: "2h",
        minutes_ago: 480,
        peaks: &[],
    },
    Sample {
        lat: 10.8880,
        lng: 106.7720,
        address: "Dong Hoa underpass",
        desc: "Underpass fully submerged, vehicles abandoned.",
        risk: RiskLevel::High,
        depth: "1.8m",
        objects: &["Underpass", "Motorbike"],
        vulnerable: &[],
        trend: ForecastTrend::Stable,
        change: "0m",
        clearance: "12h",
        minutes_ago: 1200,
        peaks: &[(2021, "2.0m", "Oct 2021")],
    },
    Sample {
        lat: 10.8800,
        lng: 106.7750,
        address: "Dong Hoa ward community hall",
        desc: "Shelter open with dry floor and drinking water.",
        risk: RiskLevel::Low,
        depth: "0m",
        objects: &["Building", "Crowd"],
        vulnerable: &[],
        trend: ForecastTrend::Receding,
        change: "-0.3m",
        clearance: "Cleared",
        minutes_ago: 2880,
        peaks: &[],
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demonstration reports around Binh Duong, aged relative to `now`.
pub fn demo_reports(now: DateTime<Utc>) -> Vec<FloodReport> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let advice = match s.risk {
                RiskLevel::High => "Evacuate immediately.",
                _ => "Move to higher ground.",
            };
            FloodReport {
                id: format!("demo-{}", i + 1),
                location: GeoLocation::new(s.lat, s.lng),
                image_url: None,
                depth: s.depth.to_string(),
                risk: s.risk,
                objects_detected: strings(s.objects),
                vulnerable_people: Some(strings(s.vulnerable)),
                advice: format!("AI ANALYSIS: {}\nRECOMMENDATION: {}", s.desc, advice),
                timestamp: now - Duration::minutes(s.minutes_ago),
                address: Some(s.address.to_string()),
                is_sos: false,
                status: None,
                forecast: Some(FloodForecast {
                    trend: s.trend,
                    predicted_change: s.change.to_string(),
                    estimated_clearance_time: Some(s.clearance.to_string()),
                }),
                historical_peaks: Some(
                    s.peaks
                        .iter()
                        .map(|(year, level, date)| HistoricalPeak {
                            year: *year,
                            level: level.to_string(),
                            date: date.to_string(),
                        })
                        .collect(),
                ),
            }
        })
        .collect()
}
