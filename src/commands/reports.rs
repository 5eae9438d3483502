use super::Session;
use crate::*;

fn analysis_from_args(add: &AddReport) -> anyhow::Result<AnalysisResult> {
    match (&add.analysis, add.risk) {
        (Some(path), _) => Ok(load_analysis(path)),
        (None, Some(risk)) => Ok(AnalysisResult {
            depth: add.depth.clone(),
            risk,
            objects_detected: add.objects.clone(),
            vulnerable_people: add.vulnerable.clone(),
            advice: add.advice.clone(),
        }),
        (None, None) => anyhow::bail!("either --analysis or --risk is required"),
    }
}

fn draft_from_args(add: &AddReport) -> anyhow::Result<ReportDraft> {
    let location = match (add.lat, add.lng) {
        (Some(lat), Some(lng)) => Some(checked_location(lat, lng)?),
        _ => None,
    };
    let forecast = add.trend.map(|trend| FloodForecast {
        trend,
        predicted_change: add.predicted_change.clone().unwrap_or_else(|| "?".to_string()),
        estimated_clearance_time: add.clearance.clone(),
    });
    Ok(ReportDraft {
        image_url: add.image_url.clone(),
        is_sos: add.sos,
        forecast,
        location,
    })
}

fn report_row(r: &FloodReport) -> String {
    let mut row = format!(
        "{}\t{:?}\t{}\t{:.5},{:.5}\t{}",
        r.id,
        r.risk,
        r.depth,
        r.location.lat,
        r.location.lng,
        r.timestamp.to_rfc3339()
    );
    if r.is_sos {
        row.push_str("\tSOS");
    }
    if let Some(status) = r.status {
        row.push_str(&format!("\t{:?}", status));
    }
    row
}

pub fn danger_lines(report: &DangerReport) -> Vec<String> {
    let mut lines = Vec::new();
    if !report.scanned {
        lines.push("no location fix; showing last known alert state".to_string());
    }
    match &report.state {
        None => lines.push("no alert state yet".to_string()),
        Some(s) if s.is_user_safe_override => lines.push(
            "SAFETY CONFIRMED: your latest report overrides nearby flood warnings".to_string(),
        ),
        Some(s) => match &s.nearest_threat {
            Some(t) => {
                lines.push(format!(
                    "WARNING: danger zone {:.1} km away (report {}, {:?} risk)",
                    t.distance_km, t.report.id, t.report.risk
                ));
                if !t.report.advice.is_empty() {
                    lines.push(format!("advice: {}", t.report.advice));
                }
            }
            None => lines.push(format!("no threat within {} km", ALERT_RADIUS_KM)),
        },
    }
    if report.alarm {
        lines.push("siren triggered (rising water nearby)".to_string());
    }
    lines
}

pub fn handle_report_commands(cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Commands::Report { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ReportCommands::Add(add) => {
            let analysis = analysis_from_args(add)?;
            let draft = draft_from_args(add)?;
            let id = session.state.reports.next_id(session.now);
            let report = build_report(
                id,
                analysis,
                draft,
                session.state.user_location,
                session.settings.general.fallback_center,
                session.now,
            );
            tracing::info!(id = %report.id, risk = ?report.risk, "report inserted");
            audit(
                "report.add",
                serde_json::json!({"id": report.id, "risk": report.risk}),
            );
            session.state.reports.insert(report.clone());
            let danger = refresh_danger(&mut session.state, session.siren.as_ref());
            save_state(&session.state)?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: ReportAdded { report, danger }
                    })?
                );
            } else {
                println!(
                    "added report {} ({:?}) at {:.5},{:.5}",
                    report.id, report.risk, report.location.lat, report.location.lng
                );
                for line in danger_lines(&danger) {
                    println!("{}", line);
                }
            }
        }
        ReportCommands::List => {
            if session.state.reports.is_empty() && !cli.json {
                println!("no reports");
            }
            print_out(cli.json, session.state.reports.all(), report_row)?;
        }
        ReportCommands::Show { id } => {
            let report = session.state.reports.get(id)?.clone();
            let distance_km = session
                .state
                .user_location
                .map(|u| distance_km(u, report.location));
            let navigation_available = navigation_available(
                distance_km,
                session.settings.general.max_navigation_radius_km,
            );
            let detail = ReportDetail {
                navigation_url: navigation_available.then(|| routing_url(report.location)),
                report,
                distance_km,
                navigation_available,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: detail
                    })?
                );
            } else {
                let r = &detail.report;
                println!("id: {}", r.id);
                println!("risk: {:?}{}", r.risk, if r.is_safe_point() { " (SAFE POINT)" } else { "" });
                println!("depth: {}", r.depth);
                println!("reported: {}", r.timestamp.to_rfc3339());
                if let Some(address) = &r.address {
                    println!("address: {}", address);
                }
                if r.has_vulnerable_people() {
                    println!(
                        "vulnerable: {}",
                        r.vulnerable_people.clone().unwrap_or_default().join(", ")
                    );
                }
                if let Some(f) = &r.forecast {
                    println!("forecast: {:?} {}", f.trend, f.predicted_change);
                }
                match detail.distance_km {
                    Some(d) => println!("distance: {:.1} km", d),
                    None => println!("distance: unknown (no location fix)"),
                }
                match &detail.navigation_url {
                    Some(url) => println!("navigate: {}", url),
                    None => println!("navigate: too far for navigation"),
                }
            }
        }
        ReportCommands::Status { id, status } => {
            let updated = session.state.reports.set_status(id, *status)?.clone();
            audit(
                "report.status",
                serde_json::json!({"id": updated.id, "status": status}),
            );
            save_state(&session.state)?;
            print_one(cli.json, updated, |r| {
                format!("{} is now {:?}", r.id, status)
            })?;
        }
    }

    Ok(true)
}

pub fn handle_demo_commands(cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Commands::Demo { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        DemoCommands::Seed => {
            let mut inserted = 0usize;
            for report in demo_reports(session.now) {
                if session.state.reports.contains(&report.id) {
                    continue;
                }
                session.state.reports.insert(report);
                inserted += 1;
            }
            audit("demo.seed", serde_json::json!({"inserted": inserted}));
            refresh_danger(&mut session.state, session.siren.as_ref());
            save_state(&session.state)?;
            print_one(cli.json, inserted, |n| format!("seeded {} demo reports", n))?;
        }
    }

    Ok(true)
}
