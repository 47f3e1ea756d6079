//! Doctor command

use crate::ui::list::print_field;
use crossterm::style::Stylize;
use nex_core::Context;
use nex_core::probe;
use nex_schema::Runtime;

/// Report which runtimes and tools are available.
pub async fn doctor(ctx: &Context) {
    println!();
    println!("  {}", "Runtimes".dark_grey());
    for runtime in Runtime::PROBED {
        let status = match probe::detect(ctx.probe.as_ref(), runtime) {
            Some(program) => found(program).await,
            None => "not found".red().to_string(),
        };
        print_field(&runtime.to_string(), &status);
    }

    println!();
    println!("  {}", "Tools".dark_grey());
    let git = if ctx.probe.has("git") {
        found("git").await
    } else {
        "not found (required to install packages)".red().to_string()
    };
    print_field("git", &git);

    println!();
    print_field("nex home", &ctx.paths.home().display().to_string());
    print_field("registry", ctx.registry.base());
    println!();
}

async fn found(program: &str) -> String {
    let version = probe::version_of(program)
        .await
        .unwrap_or_else(|| "version unknown".to_string());
    format!("{} {}", version.green(), format!("({program})").dark_grey())
}
