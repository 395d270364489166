//! `planshot extract` - parse an image without touching the calendar

use std::path::Path;

use anyhow::Context;

use crate::context::AppContext;
use crate::observer::ConsoleObserver;

pub async fn execute(ctx: &AppContext, image: &Path) -> anyhow::Result<()> {
    let image = super::read_image(image)?;
    super::print_banner(ctx);

    let pending = ctx.pipeline.review(&image, &ConsoleObserver).await?;
    let tasks = pending.into_tasks();

    let json = serde_json::to_string_pretty(&tasks).context("failed to encode tasks")?;
    println!("{json}");
    Ok(())
}
