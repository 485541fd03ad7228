//! Icon export: clean the logo once, render the largest size, derive the rest.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::IconConfig;
use crate::image::background::{MAX_DISTANCE, remove_edge_connected_background};
use crate::image::resize::{resize_square, save_png};
use crate::{debug, log};

/// Failures the export reports explicitly; everything else surfaces as-is.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Missing input file: {}", .0.display())]
    MissingInput(PathBuf),
}

/// Generate every configured icon size and return the written paths in
/// configured order.
///
/// The master (largest size) is resized from the cleaned source; smaller sizes
/// are downscaled from the master so all outputs share one cleaned image.
pub fn generate_icons(config: &IconConfig) -> Result<Vec<PathBuf>> {
    if !config.input.exists() {
        return Err(GenerateError::MissingInput(config.input.clone()).into());
    }

    if config.threshold >= MAX_DISTANCE {
        log!(
            "warning";
            "threshold {} matches every color, all edge-connected pixels will be cleared",
            config.threshold
        );
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory `{}`",
            config.output_dir.display()
        )
    })?;

    let start = Instant::now();
    let source = image::open(&config.input)
        .with_context(|| format!("failed to load `{}`", config.input.display()))?;
    debug!(
        "nobg";
        "loaded {} ({}x{})",
        config.input.display(),
        source.width(),
        source.height()
    );

    let cleaned = remove_edge_connected_background(source, config.threshold);
    debug!("nobg"; "background removed in {:?}", start.elapsed());

    let master_size = config.master_size();
    let master = resize_square(&cleaned, master_size);
    save_png(&master, &config.output_path(master_size))?;
    debug!("resize"; "{}px master written", master_size);

    let derived: Vec<u32> = config.derived_sizes().collect();
    derived.par_iter().try_for_each(|&size| {
        let start = Instant::now();
        save_png(&resize_square(&master, size), &config.output_path(size))?;
        debug!("resize"; "{}px derived in {:?}", size, start.elapsed());
        Ok::<_, anyhow::Error>(())
    })?;

    Ok(config
        .sizes
        .iter()
        .map(|&size| config.output_path(size))
        .collect())
}

/// Run the export and print the written files.
pub fn run(config: &IconConfig) -> Result<()> {
    let written = generate_icons(config)?;

    log!("wrote"; "{} icon(s):", written.len());
    for path in &written {
        println!(" - {}", path.display());
    }
    Ok(())
}
