//! put / get / ls / rm command handlers

use std::path::Path;

use anyhow::{Context, Result};

use shipyard::presentation::factory::{create_transfer_use_case, ConcreteTransferUseCase};
use shipyard::presentation::output::{keys_json, report_json};

use super::CommandContext;

pub fn cmd_put(ctx: &mut CommandContext) -> Result<()> {
    let artifacts = ctx.release().artifacts("put")?;
    let use_case = prepare(ctx)?;

    let report = use_case.put(&artifacts, &mut ctx.reporter)?;
    if ctx.json {
        println!("{}", report_json(&report));
    }
    Ok(())
}

pub fn cmd_get(ctx: &mut CommandContext, local_path: Option<&Path>) -> Result<()> {
    let artifacts = ctx.release().artifacts("get")?;
    let use_case = prepare(ctx)?;

    let local_path = match local_path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let report = use_case.get(&local_path, &artifacts, &mut ctx.reporter)?;
    if ctx.json {
        println!("{}", report_json(&report));
    }
    Ok(())
}

pub fn cmd_ls(ctx: &mut CommandContext, all: bool) -> Result<()> {
    let use_case = prepare(ctx)?;

    let keys = use_case.list(all, &mut ctx.reporter)?;
    if ctx.json {
        println!("{}", keys_json(&keys));
    }
    Ok(())
}

pub fn cmd_rm(ctx: &mut CommandContext) -> Result<()> {
    let artifacts = ctx.release().artifacts("rm")?;
    let use_case = prepare(ctx)?;

    let report = use_case.delete(&artifacts, &mut ctx.reporter)?;
    if ctx.json {
        println!("{}", report_json(&report));
    }
    Ok(())
}

/// Resolve destinations and require the selected one to exist
fn prepare(ctx: &CommandContext) -> Result<ConcreteTransferUseCase> {
    let remote = ctx.remote()?;
    remote.selected()?;
    Ok(create_transfer_use_case(remote, ctx.project_name()))
}
