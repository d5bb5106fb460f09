//! `postapi resources ...`

use super::{Context, gateway_facing, user_facing};
use crate::cli::ResourcesCommand;
use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use postapi_app::{NewResourceForm, SubmitOutcome};
use postapi_client::Backend;
use postapi_ir::{ResourceDraft, load_resource_draft, parse_method_list};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub async fn run(ctx: &Context, command: ResourcesCommand) -> Result<()> {
    match command {
        ResourcesCommand::List { project } => list(ctx, &project).await,
        ResourcesCommand::Create {
            project,
            file,
            name,
            methods,
            data,
            slug,
            description,
            primary_key,
        } => {
            let draft = match file {
                Some(path) => load_resource_draft(&path)?,
                None => draft_from_flags(name, methods, data)?,
            };
            let args = CreateArgs {
                slug,
                description,
                primary_key,
            };
            create(ctx, &project, draft, args).await
        }
        ResourcesCommand::Delete { id } => {
            ctx.gateway
                .delete_resource(&id)
                .await
                .map_err(gateway_facing)?;
            ctx.printer.success("Resource deleted successfully!");
            Ok(())
        }
    }
}

async fn list(ctx: &Context, project_id: &str) -> Result<()> {
    let resources = ctx
        .gateway
        .list_resources(project_id)
        .await
        .map_err(gateway_facing)?;

    if resources.is_empty() {
        println!("No resources yet. Add one with `postapi resources create {}`.", project_id);
        return Ok(());
    }

    for resource in &resources {
        println!(
            "{} {} {}",
            ctx.printer.accent(&resource.name).bold(),
            ctx.printer.muted(&format!("/{}", resource.slug)),
            ctx.printer.muted(&format!("({})", resource.id))
        );
        for route in resource.endpoints() {
            ctx.printer.route(&route);
        }
    }
    Ok(())
}

/// Overrides applied on top of a flag- or file-built draft
struct CreateArgs {
    slug: Option<String>,
    description: Option<String>,
    primary_key: Option<String>,
}

fn draft_from_flags(
    name: Option<String>,
    methods: Option<String>,
    data: Option<String>,
) -> Result<ResourceDraft> {
    let mut draft = ResourceDraft::new();
    draft.set_name(name.unwrap_or_default());
    draft.set_methods(&parse_method_list(methods.as_deref().unwrap_or_default())?);
    if let Some(data) = data {
        draft.set_mock_text(read_data_arg(&data)?);
    }
    Ok(draft)
}

/// `--data` takes inline JSON or `@path`
fn read_data_arg(data: &str) -> Result<String> {
    match data.strip_prefix('@') {
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read mock data from {}", path.display()))
        }
        None => Ok(data.to_string()),
    }
}

async fn create(ctx: &Context, project_id: &str, draft: ResourceDraft, args: CreateArgs) -> Result<()> {
    let project = ctx.gateway.get_project(project_id).await.map_err(|err| {
        if err.is_not_found() {
            anyhow::anyhow!("Could not find the specified project.")
        } else {
            gateway_facing(err)
        }
    })?;

    let mut form = NewResourceForm::with_draft(project, draft);
    if let Some(slug) = args.slug {
        form.set_slug(slug);
    }
    if let Some(description) = args.description {
        form.set_description(description);
    }
    if let Some(key) = args.primary_key {
        form.choose_primary_key(key).map_err(user_facing)?;
    }

    let mut outcome = form.submit(&ctx.gateway).await;
    if let Ok(SubmitOutcome::NeedsPrimaryKey(keys)) = &outcome {
        let key = prompt_primary_key(keys)?;
        outcome = form.confirm_primary_key_and_submit(&ctx.gateway, key).await;
    }

    ctx.printer.notifications(form.notifications_mut());
    match outcome.map_err(user_facing)? {
        SubmitOutcome::Created(resource) => {
            ctx.printer.field("id", &resource.id);
            for route in resource.endpoints() {
                ctx.printer.route(&route);
            }
            Ok(())
        }
        SubmitOutcome::NeedsPrimaryKey(keys) => {
            bail!("A primary key is required (one of: {})", keys.join(", "))
        }
    }
}

/// Ask for a primary key on an interactive terminal
fn prompt_primary_key(keys: &[String]) -> Result<String> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        bail!(
            "A primary key is required; pass --primary-key with one of: {}",
            keys.join(", ")
        );
    }

    println!("Choose the primary key:");
    for (index, key) in keys.iter().enumerate() {
        println!("  {}) {}", index + 1, key);
    }
    print!("> ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    pick_key(keys, &line)
}

/// Accept either a 1-based number or a key name
fn pick_key(keys: &[String], answer: &str) -> Result<String> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        if let Some(key) = index.checked_sub(1).and_then(|i| keys.get(i)) {
            return Ok(key.clone());
        }
    }
    match keys.iter().find(|k| k.as_str() == answer) {
        Some(key) => Ok(key.clone()),
        None => bail!("'{}' is not one of: {}", answer, keys.join(", ")),
    }
}
