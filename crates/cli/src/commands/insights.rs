//! `postapi usage` and `postapi analytics`

use super::Context;
use anyhow::{Result, bail};
use postapi_app::{ProjectDetail, ProjectDetailPage};

async fn load(ctx: &Context, project_id: &str) -> Result<(ProjectDetail, String)> {
    let page = ProjectDetailPage::load(&ctx.gateway, project_id, ctx.api_base()).await;
    match page.detail() {
        Some(detail) => Ok((detail.clone(), page.reset_countdown())),
        None => bail!(
            "Could not find the specified project. Run `postapi projects list` to see your projects."
        ),
    }
}

pub async fn usage(ctx: &Context, project_id: &str) -> Result<()> {
    let (detail, countdown) = load(ctx, project_id).await?;
    let usage = detail.usage;
    let printer = ctx.printer;

    printer.heading(&format!("{} usage today", detail.project.name));
    let text = format!(
        "{} / {} requests ({:.0}%)",
        usage.current_usage,
        usage.max_limit,
        usage.percent()
    );
    printer.field("requests", printer.usage_level(usage.level(), &text));
    printer.field("resets in", countdown);
    Ok(())
}

pub async fn analytics(ctx: &Context, project_id: &str) -> Result<()> {
    let (detail, countdown) = load(ctx, project_id).await?;
    let analytics = &detail.analytics;
    let printer = ctx.printer;

    printer.heading(&format!("{} analytics", detail.project.name));
    printer.field("total requests", analytics.total_requests);
    printer.field("cache hit rate", format!("{:.1}%", analytics.cache_hit_rate));
    printer.field("rate limit left", analytics.rate_limit_remaining);
    printer.field(
        "today",
        format!(
            "{} / {} ({:.0}%)",
            analytics.requests_today,
            analytics.requests_limit,
            analytics.usage_percent()
        ),
    );
    printer.field("resets in", countdown);

    println!();
    printer.heading("Requests by hour");
    let peak = analytics
        .hourly_requests
        .iter()
        .map(|h| h.requests)
        .max()
        .unwrap_or(0);
    for bucket in &analytics.hourly_requests {
        println!(
            "  {:>5}  {:>6}  {}",
            bucket.hour,
            bucket.requests,
            bar(bucket.requests, peak)
        );
    }

    println!();
    printer.heading("Cache hit rate by day");
    for stat in &analytics.cache_stats {
        println!("  {:>6}  {:>5.1}%", stat.date, stat.hit_rate);
    }
    Ok(())
}

/// Proportional bar, at most 30 cells wide
fn bar(value: u64, peak: u64) -> String {
    if peak == 0 {
        return String::new();
    }
    let cells = (value * 30).div_ceil(peak) as usize;
    "█".repeat(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).chars().count(), 30);
        assert_eq!(bar(1, 30).chars().count(), 1);
        assert_eq!(bar(0, 10), "");
    }
}
