//! Info command

use crate::ui::list::print_field;
use anyhow::Result;
use crossterm::style::Stylize;
use nex_core::Context;
use nex_core::ops::{self, is_installed};

/// Show registry details for a package
pub async fn info(ctx: &Context, package: &str) -> Result<()> {
    let id = ops::resolve(ctx, package).await?;
    let manifest = ctx.registry.fetch_manifest(&ctx.http, &id).await?.manifest;

    println!();
    println!(
        "  {} {}",
        manifest.name.as_str().white().bold(),
        manifest.version.as_str().dark_grey()
    );
    if !manifest.description.is_empty() {
        println!("  {}", manifest.description);
    }
    println!();

    print_field("id", &manifest.id.to_string());
    if !manifest.author.is_empty() {
        print_field("author", &manifest.author);
    }
    if !manifest.license.is_empty() {
        print_field("license", &manifest.license);
    }
    let runtime = match &manifest.runtime.version {
        Some(version) => format!("{} {version}", manifest.runtime.kind),
        None => manifest.runtime.kind.to_string(),
    };
    print_field("runtime", &runtime);
    print_field("repository", &manifest.repository);
    if !manifest.entrypoint.is_empty() {
        print_field("entrypoint", &manifest.entrypoint);
    }
    if !manifest.keywords.is_empty() {
        print_field("keywords", &manifest.keywords.join(", "));
    }

    if is_installed(&ctx.paths, &id) {
        print_field(
            "installed",
            &ctx.paths.package_dir(&id).display().to_string(),
        );
    } else {
        print_field("installed", "no");
    }

    if !manifest.commands.is_empty() {
        println!();
        println!("  {}", "Commands".dark_grey());
        for (name, template) in &manifest.commands {
            print_field(name, template);
        }
    }
    println!();

    Ok(())
}
