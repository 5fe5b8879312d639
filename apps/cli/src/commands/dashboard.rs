use std::io::Write;

use organizer_common::OrganizerError;
use organizer_domain::{HealthTier, ProjectStatus};
use organizer_insights::{aggregate_by_status, compare, join_views, PortfolioMetrics, StatusReport};
use serde::Serialize;

use super::{write_json, yes_no, App};

#[derive(Serialize)]
struct DashboardOut {
    metrics: PortfolioMetrics,
    status_counts: Vec<(ProjectStatus, usize)>,
}

pub fn run(app: &mut App, out: &mut dyn Write, root: Option<String>) -> Result<(), OrganizerError> {
    app.select_root(root)?;
    let stale_after = app.manager.config().stale_after_days;
    let today = app.today;
    let projects = app.session.projects()?;
    let views = join_views(projects, app.manager.status_store());
    let metrics = PortfolioMetrics::compute(&views, today, stale_after);
    let counts = aggregate_by_status(views.iter().map(|v| &v.record));

    if app.json {
        return write_json(
            out,
            &DashboardOut {
                metrics,
                status_counts: counts.into_iter().collect(),
            },
        );
    }

    if views.is_empty() {
        writeln!(out, "No Python projects found in the selected folder.")?;
        return Ok(());
    }

    writeln!(out, "📈 Overview")?;
    writeln!(out, "  Total Projects:    {}", metrics.total_projects)?;
    writeln!(out, "  Python Files:      {}", metrics.total_source_files)?;
    writeln!(out, "  With Requirements: {}", metrics.with_manifest)?;
    writeln!(out, "  With README:       {}", metrics.with_readme)?;
    writeln!(out, "  Not Set Status:    {} need attention", metrics.need_status)?;

    writeln!(out, "\n🎯 Status Distribution")?;
    for (status, count) in &counts {
        writeln!(out, "  {} {}: {} projects", status.emoji(), status, count)?;
    }

    let tier = metrics.average_tier();
    writeln!(out, "\n📊 Advanced Metrics")?;
    writeln!(out, "  Portfolio Size:   {:.2} GB", metrics.total_size_gb)?;
    writeln!(
        out,
        "  Avg Health Score: {:.1} {} {}",
        metrics.average_health,
        tier.emoji(),
        tier.label()
    )?;
    writeln!(
        out,
        "  Stale Projects:   {} (not modified in {}+ days)",
        metrics.stale_projects, stale_after
    )?;
    writeln!(out, "  Completion Rate:  {:.1}%", metrics.completion_rate)?;

    writeln!(out, "\n🏥 Health Distribution")?;
    for tier in HealthTier::ALL {
        writeln!(
            out,
            "  {} {}: {} projects",
            tier.emoji(),
            tier.range_caption(),
            metrics.health.count(tier)
        )?;
    }
    Ok(())
}

pub fn run_compare(
    app: &mut App,
    out: &mut dyn Write,
    root: Option<String>,
    names: &[String],
) -> Result<(), OrganizerError> {
    app.select_root(root)?;
    let today = app.today;
    let projects = app.session.projects()?;
    let views = join_views(projects, app.manager.status_store());
    let comparison = compare(&views, names, today);

    if app.json {
        return write_json(out, &comparison);
    }
    if comparison.rows.is_empty() {
        writeln!(out, "No projects to compare.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<28} {:>6}  {:<18} {:>5} {:>4} {:>6} {:>9} {:>8}  {}",
        "Project", "Health", "Status", "Files", "Req", "README", "Size MB", "Days Old", "Last Updated"
    )?;
    for row in &comparison.rows {
        writeln!(
            out,
            "{:<28} {} {:>3}  {:<18} {:>5} {:>4} {:>6} {:>9.2} {:>8}  {}",
            row.name,
            row.tier.emoji(),
            row.health,
            row.status.label(),
            row.source_file_count,
            yes_no(row.has_manifest),
            yes_no(row.has_readme),
            row.size_mb,
            row.days_since_modified,
            row.last_modified,
        )?;
    }

    writeln!(out, "\n💡 Comparison Insights")?;
    if let Some(name) = &comparison.best_health {
        writeln!(out, "  Best Health:          {}", name)?;
    }
    if let Some(name) = &comparison.needs_most_attention {
        writeln!(out, "  Needs Most Attention: {}", name)?;
    }
    if let Some(name) = &comparison.most_stale {
        writeln!(out, "  Most Stale:           {}", name)?;
    }
    Ok(())
}

pub fn run_report(app: &mut App, out: &mut dyn Write, root: Option<String>) -> Result<(), OrganizerError> {
    app.select_root(root)?;
    let projects = app.session.projects()?;
    let views = join_views(projects, app.manager.status_store());
    let report = StatusReport::build(&views);
    if app.json {
        return write_json(out, &report);
    }
    write!(out, "{}", report.render_text())?;
    Ok(())
}
