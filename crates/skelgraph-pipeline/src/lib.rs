//! Options and call contract for the skeletonization pipeline.
//!
//! Thinning and distance-map computation are provided by an external
//! backend implementing [`SkeletonPipeline`]. This crate owns their options
//! ([`ThinOptions`], [`DistanceMapOptions`]), the TOML configuration that
//! carries them and the composition that masks a distance map by its
//! skeleton.

pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::OptionsError;
pub use options::{DistanceMapOptions, Foreground, SelectType, SkelType, ThinOptions};
pub use pipeline::{create_distance_map_io, masked_distance_map, thin_io, SkeletonPipeline};
