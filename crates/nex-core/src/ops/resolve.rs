//! Name resolution: alias, then fully-qualified id, then registry index.

use crate::{Context, NexError, Result};
use nex_schema::{PackageId, RegistryIndex};
use tracing::{debug, warn};

/// Turn user input into a canonical package identifier.
///
/// Sources are consulted in order:
/// 1. `aliases.json`, looked up verbatim (case-sensitive);
/// 2. input containing a `.` is taken as `author.name` without any
///    network access;
/// 3. otherwise the registry index is fetched and searched by short name.
///
/// # Errors
///
/// Returns [`NexError::InvalidId`] for malformed dotted input,
/// [`NexError::NotFound`] or [`NexError::Ambiguous`] from the index, or any
/// transport error from fetching it.
pub async fn resolve(ctx: &Context, name_or_id: &str) -> Result<PackageId> {
    if let Some(target) = ctx.aliases().lookup(name_or_id) {
        match PackageId::parse(&target) {
            Ok(id) => {
                debug!("Alias {name_or_id} -> {id}");
                return Ok(id);
            }
            Err(e) => warn!("Ignoring alias '{name_or_id}' -> '{target}': {e}"),
        }
    }

    if name_or_id.contains('.') {
        return Ok(PackageId::parse(name_or_id)?);
    }

    if name_or_id.trim().is_empty() {
        return Err(NexError::InvalidId("Package name cannot be empty".to_string()));
    }

    let index = ctx.registry.fetch_index(&ctx.http).await?;
    pick(&index, name_or_id)
}

/// Choose the single index entry answering to `short`.
///
/// # Errors
///
/// Returns [`NexError::NotFound`] for no match and [`NexError::Ambiguous`]
/// for several; a match whose `id` is malformed is [`NexError::InvalidId`].
pub fn pick(index: &RegistryIndex, short: &str) -> Result<PackageId> {
    match index.matching_short_name(short).as_slice() {
        [] => Err(NexError::NotFound(short.to_string())),
        [entry] => Ok(PackageId::parse(&entry.id)?),
        many => Err(NexError::Ambiguous {
            name: short.to_string(),
            candidates: many.iter().map(|e| e.id.clone()).collect(),
        }),
    }
}

/// Resolve input naming a package that is already installed.
///
/// Aliases and dotted ids resolve as in [`resolve`]. A bare short name is
/// first matched against the installed packages, so removing a package
/// needs no network; only when nothing local matches does this fall back
/// to the registry.
///
/// # Errors
///
/// As [`resolve`], plus [`NexError::Ambiguous`] when several installed
/// packages share the short name.
pub async fn resolve_installed(ctx: &Context, input: &str) -> Result<PackageId> {
    if ctx.aliases().lookup(input).is_some() || input.contains('.') {
        return resolve(ctx, input).await;
    }

    let mut local: Vec<PackageId> = installed_ids(ctx)
        .into_iter()
        .filter(|id| id.name().eq_ignore_ascii_case(input))
        .collect();
    local.dedup();

    match local.len() {
        0 => resolve(ctx, input).await,
        1 => Ok(local.remove(0)),
        _ => Err(NexError::Ambiguous {
            name: input.to_string(),
            candidates: local.iter().map(ToString::to_string).collect(),
        }),
    }
}

/// Ids known locally: directories under `packages/` plus `installed.json`.
fn installed_ids(ctx: &Context) -> Vec<PackageId> {
    let mut ids: Vec<PackageId> = std::fs::read_dir(ctx.paths.packages_dir())
        .into_iter()
        .flatten()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| PackageId::parse(&e.file_name().to_string_lossy()).ok())
        .collect();
    for record in ctx.installed().list() {
        if !ids.contains(&record.id) {
            ids.push(record.id);
        }
    }
    ids.sort();
    ids
}
