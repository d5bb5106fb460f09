//! `postapi projects ...`

use super::{Context, user_facing};
use crate::cli::ProjectsCommand;
use anyhow::{Result, bail};
use colored::Colorize;
use postapi_app::{DashboardPage, ProjectDetailPage};
use postapi_ir::{DeployAvailability, Project};

pub async fn run(ctx: &Context, command: ProjectsCommand) -> Result<()> {
    match command {
        ProjectsCommand::List => list(ctx).await,
        ProjectsCommand::Show { id } => show(ctx, &id).await,
        ProjectsCommand::Create {
            name,
            slug,
            description,
        } => create(ctx, name, slug, description).await,
        ProjectsCommand::Delete { id } => delete(ctx, &id).await,
        ProjectsCommand::Deploy { id } => deploy(ctx, &id).await,
    }
}

async fn list(ctx: &Context) -> Result<()> {
    let mut page = DashboardPage::load(&ctx.gateway, ctx.api_base()).await;
    let printer = ctx.printer;

    if page.notifications().has_errors() {
        printer.notifications(page.notifications_mut());
        bail!("Could not load projects");
    }

    if page.projects().is_empty() {
        println!("No projects yet. Create one with `postapi projects create --name <NAME>`.");
        return Ok(());
    }

    printer.heading("Projects");
    for project in page.projects() {
        print_project_row(ctx, project);
    }
    Ok(())
}

fn print_project_row(ctx: &Context, project: &Project) {
    println!(
        "  {:<38} {:<24} {:<20} {}",
        ctx.printer.muted(&project.id),
        project.name,
        project.slug_or_placeholder(),
        project.status
    );
}

async fn show(ctx: &Context, id: &str) -> Result<()> {
    let page = ProjectDetailPage::load(&ctx.gateway, id, ctx.api_base()).await;
    let printer = ctx.printer;

    let Some(detail) = page.detail() else {
        bail!(
            "Could not find the specified project. Run `postapi projects list` to see your projects."
        );
    };

    let project = &detail.project;
    printer.heading(&project.name);
    printer.field("id", &project.id);
    printer.field("slug", project.slug_or_placeholder());
    printer.field("status", project.status);
    if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
        printer.field("description", description);
    }
    printer.field("base url", detail.base_url(ctx.api_base()));
    printer.field("resources", detail.resource_count());
    printer.field("endpoints", detail.endpoint_count());

    let usage = detail.usage;
    let usage_text = format!(
        "{} / {} ({:.0}%)",
        usage.current_usage,
        usage.max_limit,
        usage.percent()
    );
    printer.field("usage today", printer.usage_level(usage.level(), &usage_text));
    printer.field("resets in", page.reset_countdown());

    match detail.deploy_availability(ctx.api_base()) {
        DeployAvailability::Available => printer.field("deploy", "ready (postapi projects deploy)"),
        DeployAvailability::AlreadyDeployed { url } => printer.field("live at", url),
        DeployAvailability::Unavailable { reason } => printer.field("deploy", reason),
    }

    for resource in &detail.resources {
        println!();
        println!(
            "{} {}",
            printer.accent(&resource.name).bold(),
            printer.muted(&format!("({})", resource.id))
        );
        for route in resource.endpoints() {
            printer.route(&route);
        }
    }
    Ok(())
}

async fn create(
    ctx: &Context,
    name: String,
    slug: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut page = DashboardPage::load(&ctx.gateway, ctx.api_base()).await;
    page.notifications_mut().clear();

    page.draft.set_name(name);
    if let Some(slug) = slug {
        page.draft.set_slug(slug);
    }
    if let Some(description) = description {
        page.draft.set_description(description);
    }

    let result = page.create_project(&ctx.gateway).await;
    ctx.printer.notifications(page.notifications_mut());
    let project = result.map_err(user_facing)?;

    ctx.printer.field("id", &project.id);
    ctx.printer.field("slug", project.slug_or_placeholder());
    Ok(())
}

async fn delete(ctx: &Context, id: &str) -> Result<()> {
    let mut page = DashboardPage::load(&ctx.gateway, ctx.api_base()).await;
    page.notifications_mut().clear();

    let result = page.delete_project(&ctx.gateway, id).await;
    ctx.printer.notifications(page.notifications_mut());
    result.map_err(user_facing)
}

async fn deploy(ctx: &Context, id: &str) -> Result<()> {
    let mut page = DashboardPage::load(&ctx.gateway, ctx.api_base()).await;
    page.notifications_mut().clear();

    let result = page.deploy_project(&ctx.gateway, id).await;
    ctx.printer.notifications(page.notifications_mut());
    if let Err(err) = result {
        if err.is_not_found() {
            bail!(
                "Could not find the specified project. Run `postapi projects list` to see your projects."
            );
        }
        return Err(user_facing(err));
    }

    if let Some(project) = page.project(id) {
        ctx.printer
            .field("live at", project.deployed_url(ctx.api_base()));
    }
    Ok(())
}
