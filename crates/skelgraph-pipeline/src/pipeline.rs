//! Call contract of the skeletonization and distance-map stages.
//!
//! The stages themselves (image decoding, thinning, distance transforms) live
//! outside this workspace. They are plugged in through [`SkeletonPipeline`];
//! the functions here validate options, log stage boundaries and compose the
//! results.

use anyhow::{ensure, Context, Result};
use skelgraph_core::image::mask_image;
use skelgraph_core::{BinaryImage, FloatImage};

use crate::options::{DistanceMapOptions, ThinOptions};

/// A backend able to produce thin images and distance maps from files.
pub trait SkeletonPipeline {
    /// Thin the binary image named by `options.input_file`.
    fn thin(&self, options: &ThinOptions) -> Result<BinaryImage>;

    /// Distance map of the binary image named by `options.input_file`.
    fn distance_map(&self, options: &DistanceMapOptions) -> Result<FloatImage>;
}

/// Validate `options` and run the thinning stage.
pub fn thin_io<P: SkeletonPipeline + ?Sized>(pipeline: &P, options: &ThinOptions) -> Result<BinaryImage> {
    options.validate().context("Invalid thin options")?;
    tracing::info!(
        "Thinning {:?} (foreground {}, skel {:?}, select {:?}, persistence {})",
        options.input_file,
        options.foreground,
        options.skel_type,
        options.select_type,
        options.persistence
    );
    let thin = pipeline
        .thin(options)
        .with_context(|| format!("Thinning failed for {:?}", options.input_file))?;
    tracing::info!("Thin image has size {:?}", thin.size());
    Ok(thin)
}

/// Validate `options` and run the distance-map stage.
pub fn create_distance_map_io<P: SkeletonPipeline + ?Sized>(
    pipeline: &P,
    options: &DistanceMapOptions,
) -> Result<FloatImage> {
    options.validate().context("Invalid distance map options")?;
    tracing::info!(
        "Computing distance map of {:?} (foreground {}, approximate {})",
        options.input_file,
        options.foreground,
        options.use_approximate
    );
    let dmap = pipeline
        .distance_map(options)
        .with_context(|| format!("Distance map failed for {:?}", options.input_file))?;
    tracing::info!("Distance map has size {:?}", dmap.size());
    Ok(dmap)
}

/// Run both stages and keep the distance map only on skeleton voxels.
pub fn masked_distance_map<P: SkeletonPipeline + ?Sized>(
    pipeline: &P,
    thin_options: &ThinOptions,
    dmap_options: &DistanceMapOptions,
) -> Result<FloatImage> {
    let thin = thin_io(pipeline, thin_options)?;
    let dmap = create_distance_map_io(pipeline, dmap_options)?;
    ensure!(
        thin.size() == dmap.size(),
        "Thin image size {:?} does not match distance map size {:?}",
        thin.size(),
        dmap.size()
    );
    let masked = mask_image(&dmap, &thin).context("Failed to mask distance map")?;
    tracing::debug!(
        "Masked distance map keeps {} voxels",
        masked.as_slice().iter().filter(|v| **v != 0.0).count()
    );
    Ok(masked)
}
