//! Identity and link commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{GenerateLinkRequest, IdentityService, LinkService};

pub async fn resolve_identity(
    service: &IdentityService,
    personal_id: Option<String>,
) -> Result<(), CliError> {
    let resolution = service.resolve(personal_id).await?;

    if resolution.is_new {
        println!(
            "{} New identity: {}",
            "✓".bold().green(),
            resolution.personal_id.cyan()
        );
    } else {
        println!(
            "{} Existing identity: {}",
            "ℹ".bold().blue(),
            resolution.personal_id.cyan()
        );
    }
    Ok(())
}

pub async fn generate_link(
    service: &LinkService,
    user_id: String,
    original_url: String,
) -> Result<(), CliError> {
    let generated = service
        .generate(GenerateLinkRequest {
            user_id: Some(user_id),
            original_url: Some(original_url),
        })
        .await?;

    println!(
        "{} Link #{} generated: {}",
        "✓".bold().green(),
        generated.link_id,
        generated.generated_link.blue().underline()
    );
    println!("  short code: {}", generated.short_code.cyan());
    Ok(())
}

pub async fn list_links(service: &LinkService, user_id: &str, json: bool) -> Result<(), CliError> {
    let links = service.list_for_owner(user_id).await?;

    if json {
        let out = serde_json::to_string_pretty(&links)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if links.is_empty() {
        println!("{} No links found for {}", "ℹ".bold().blue(), user_id.cyan());
        return Ok(());
    }

    println!("{}", format!("Links for {}:", user_id).bold().green());
    println!();
    for link in &links {
        println!(
            "  {} -> {} {}",
            link.short_code.cyan(),
            link.original_url.blue().underline(),
            format!("({})", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
                .dimmed()
                .yellow()
        );
    }
    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}

pub async fn link_info(service: &LinkService, short_code: &str, json: bool) -> Result<(), CliError> {
    let info = service.resolve(short_code).await?;

    if json {
        let out = serde_json::to_string_pretty(&info)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} {}", "Short code:".bold(), info.link.short_code.cyan());
    println!("{} {}", "Target:".bold(), info.link.original_url.blue().underline());
    println!("{} {}", "Owner:".bold(), info.personal_id);
    println!(
        "{} {}",
        "Created:".bold(),
        info.link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}
