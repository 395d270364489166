//! Subcommand handlers

pub mod extract;
pub mod run;

use std::path::Path;

use planshot_domain::ImageUpload;

use crate::context::AppContext;

/// Read and sniff the image named on the command line.
pub(crate) fn read_image(path: &Path) -> anyhow::Result<ImageUpload> {
    let image = planshot_infra::load_image(path)?;
    tracing::info!(
        image = image.name(),
        format = image.format().mime_type(),
        bytes = image.bytes().len(),
        "loaded image"
    );
    Ok(image)
}

/// One stderr line naming the model doing the reading.
pub(crate) fn print_banner(ctx: &AppContext) {
    eprintln!("Powered by {}", ctx.pipeline.model_name());
}
