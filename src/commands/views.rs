use super::Session;
use crate::*;

fn active_reports<'a>(
    session: &'a Session,
    filter: &ViewFilter,
) -> anyhow::Result<(Vec<&'a FloodReport>, Option<u32>)> {
    let window = resolve_window(filter.mode, filter.window)?;
    let view = select_active(
        session.state.reports.all(),
        filter.mode,
        window.unwrap_or(0),
        filter.risk,
        session.now,
    );
    Ok((view, window))
}

pub fn handle_view_commands(cli: &Cli, session: &Session) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Active { filter } => {
            let (view, window) = active_reports(session, filter)?;
            let out = ActiveView {
                mode: filter.mode,
                window_minutes: window,
                bounds: filter.mode.bounds(),
                risk_filter: filter.risk,
                label: window_label(filter.mode, window),
                reports: view.into_iter().cloned().collect(),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data: out })?
                );
            } else {
                println!("{} ({} reports)", out.label, out.reports.len());
                for r in &out.reports {
                    println!(
                        "{}\t{:?}\t{}\t{:.0} min ago\t{}",
                        r.id,
                        r.risk,
                        r.depth,
                        age_minutes(r, session.now),
                        r.address.as_deref().unwrap_or("")
                    );
                }
            }
        }
        Commands::Stats { filter } => {
            let (view, window) = active_reports(session, filter)?;
            let stats = StatsReport {
                label: window_label(filter.mode, window),
                total: view.len(),
                high_risk: view.iter().filter(|r| r.risk == RiskLevel::High).count(),
                vulnerable: view.iter().filter(|r| r.has_vulnerable_people()).count(),
                sos: view.iter().filter(|r| r.is_sos).count(),
                priority: view
                    .iter()
                    .filter(|r| r.has_vulnerable_people())
                    .take(PRIORITY_QUEUE_LEN)
                    .map(|r| r.id.clone())
                    .collect(),
            };
            print_one(cli.json, stats, |s| {
                let mut line = format!(
                    "{}: total={} high_risk={} vulnerable={} sos={}",
                    s.label, s.total, s.high_risk, s.vulnerable, s.sos
                );
                if !s.priority.is_empty() {
                    line.push_str(&format!("\npriority: {}", s.priority.join(", ")));
                }
                line
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
