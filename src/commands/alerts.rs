use super::reports::danger_lines;
use super::Session;
use crate::*;

fn print_danger(json: bool, report: DangerReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        for line in danger_lines(&report) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn handle_location_commands(cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Commands::Location { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        LocationCommands::Set { lat, lng } => {
            let fix = checked_location(*lat, *lng)?;
            session.state.user_location = Some(fix);
            tracing::debug!(lat = fix.lat, lng = fix.lng, "location updated");
            let danger = refresh_danger(&mut session.state, session.siren.as_ref());
            save_state(&session.state)?;
            let out = LocationReport {
                user_location: Some(fix),
                danger: Some(danger),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data: out })?
                );
            } else {
                println!("location set to {:.5},{:.5}", fix.lat, fix.lng);
                if let Some(d) = &out.danger {
                    for line in danger_lines(d) {
                        println!("{}", line);
                    }
                }
            }
        }
        LocationCommands::Clear => {
            session.state.user_location = None;
            save_state(&session.state)?;
            print_one(
                cli.json,
                LocationReport {
                    user_location: None,
                    danger: None,
                },
                |_| "location cleared; last alert state kept".to_string(),
            )?;
        }
        LocationCommands::Show => {
            let out = LocationReport {
                user_location: session.state.user_location,
                danger: Some(DangerReport {
                    scanned: false,
                    alarm: false,
                    state: session.state.danger.clone(),
                }),
            };
            print_one(cli.json, out, |o| match o.user_location {
                Some(l) => format!("{:.5},{:.5}", l.lat, l.lng),
                None => "unknown".to_string(),
            })?;
        }
    }

    Ok(true)
}

pub fn handle_danger(cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Commands::Danger = &cli.command else {
        return Ok(false);
    };

    let report = refresh_danger(&mut session.state, session.siren.as_ref());
    if report.scanned {
        save_state(&session.state)?;
    }
    print_danger(cli.json, report)?;
    Ok(true)
}

pub fn handle_safe_point(cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Commands::SafePoint {
        report,
        lat,
        lng,
        radius,
    } = &cli.command
    else {
        return Ok(false);
    };

    let radius_km = radius.unwrap_or(session.settings.general.safe_point_radius_km);
    if radius_km.is_nan() || radius_km <= 0.0 {
        anyhow::bail!("search radius must be positive, got {}", radius_km);
    }
    let reports = session.state.reports.all();
    let (origin, origin_report) = match (report, lat, lng) {
        (Some(id), _, _) => {
            let r = session.state.reports.get(id)?;
            (Origin::Report(r), Some(r.id.clone()))
        }
        (None, Some(lat), Some(lng)) => (Origin::Location(checked_location(*lat, *lng)?), None),
        _ => anyhow::bail!("give a report id or both --lat and --lng"),
    };
    let already_safe = matches!(origin, Origin::Report(r) if r.is_safe_point());
    let hit = nearest_safe_point(origin, reports, radius_km);
    let out = SafePointReport {
        origin: origin.location(),
        origin_report,
        radius_km,
        navigation_url: hit.as_ref().map(|h| routing_url(h.report.location)),
        safe_point: hit,
    };

    print_one(cli.json, out, |o| match &o.safe_point {
        Some(h) => format!(
            "nearest safe point: {} ({}) {:.1} km\nnavigate: {}",
            h.report.id,
            h.report.address.as_deref().unwrap_or("no address"),
            h.distance_km,
            o.navigation_url.as_deref().unwrap_or_default()
        ),
        None if already_safe => "report is already a safe point".to_string(),
        None => format!("no nearby safe zone within {} km", o.radius_km),
    })?;
    Ok(true)
}
