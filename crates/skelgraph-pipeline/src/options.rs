//! Options of the thinning and distance-map stages.
//!
//! Every option struct has a `Default`, `with_*` builders and a `validate`
//! that checks the filesystem and cross-field rules before a stage runs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Which intensity marks the object in a binary input image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foreground {
    Black,
    #[default]
    White,
}

impl Foreground {
    const NAMES: &'static [&'static str] = &["black", "white"];
}

impl FromStr for Foreground {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            _ => Err(OptionsError::invalid("foreground", s, Self::NAMES)),
        }
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "black",
            Self::White => "white",
        })
    }
}

/// Voxels the thinning keeps as skeleton anchors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkelType {
    /// Keep end points.
    #[default]
    End,
    /// Ultimate skeleton, no anchors.
    Ulti,
    /// One-isthmus anchors.
    #[serde(rename = "isthmus1")]
    IsthmusOne,
    /// Isthmus anchors.
    Isthmus,
}

impl SkelType {
    const NAMES: &'static [&'static str] = &["end", "ulti", "isthmus1", "isthmus"];
}

impl FromStr for SkelType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "end" => Ok(Self::End),
            "ulti" => Ok(Self::Ulti),
            "isthmus1" => Ok(Self::IsthmusOne),
            "isthmus" => Ok(Self::Isthmus),
            _ => Err(OptionsError::invalid("skel_type", s, Self::NAMES)),
        }
    }
}

/// Order in which simple voxels are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectType {
    #[default]
    First,
    Random,
    /// Remove voxels with the largest distance-map value first.
    Dmax,
}

impl SelectType {
    const NAMES: &'static [&'static str] = &["first", "random", "dmax"];
}

impl FromStr for SelectType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "dmax" => Ok(Self::Dmax),
            _ => Err(OptionsError::invalid("select_type", s, Self::NAMES)),
        }
    }
}

fn check_input(path: &Path) -> Result<(), OptionsError> {
    if !path.is_file() {
        return Err(OptionsError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

fn check_folder(path: Option<&PathBuf>) -> Result<(), OptionsError> {
    match path {
        Some(folder) if !folder.is_dir() => Err(OptionsError::NotADirectory(folder.clone())),
        _ => Ok(()),
    }
}

/// Options of the thinning (skeletonization) stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinOptions {
    /// Binary input image.
    pub input_file: PathBuf,
    /// Folder where the thin image is written, if any.
    pub out_folder: Option<PathBuf>,
    pub foreground: Foreground,
    pub skel_type: SkelType,
    pub select_type: SelectType,
    /// Folder with precomputed simplicity lookup tables.
    pub tables_folder: Option<PathBuf>,
    /// Persistence used to prune short branches; 0 disables pruning.
    pub persistence: usize,
    /// Distance map consulted by `select_type = dmax`.
    pub input_distance_map_file: Option<PathBuf>,
    pub profile: bool,
    pub verbose: bool,
}

impl ThinOptions {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            ..Self::default()
        }
    }

    pub fn with_out_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.out_folder = Some(folder.into());
        self
    }

    pub fn with_foreground(mut self, foreground: Foreground) -> Self {
        self.foreground = foreground;
        self
    }

    pub fn with_skel_type(mut self, skel_type: SkelType) -> Self {
        self.skel_type = skel_type;
        self
    }

    pub fn with_select_type(mut self, select_type: SelectType) -> Self {
        self.select_type = select_type;
        self
    }

    pub fn with_tables_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.tables_folder = Some(folder.into());
        self
    }

    pub fn with_persistence(mut self, persistence: usize) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_input_distance_map(mut self, file: impl Into<PathBuf>) -> Self {
        self.input_distance_map_file = Some(file.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check files, folders and the dmax/distance-map pairing.
    pub fn validate(&self) -> Result<(), OptionsError> {
        check_input(&self.input_file)?;
        check_folder(self.out_folder.as_ref())?;
        check_folder(self.tables_folder.as_ref())?;
        match (&self.select_type, &self.input_distance_map_file) {
            (SelectType::Dmax, None) => Err(OptionsError::DmaxWithoutDistanceMap),
            (SelectType::Dmax, Some(dmap)) => check_input(dmap),
            _ => Ok(()),
        }
    }
}

/// Options of the distance-map stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceMapOptions {
    /// Binary input image.
    pub input_file: PathBuf,
    /// Folder where the distance map is written, if any.
    pub out_folder: Option<PathBuf>,
    pub foreground: Foreground,
    /// Use the approximate (non-Euclidean exact) distance transform.
    pub use_approximate: bool,
    pub verbose: bool,
}

impl DistanceMapOptions {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            ..Self::default()
        }
    }

    pub fn with_out_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.out_folder = Some(folder.into());
        self
    }

    pub fn with_foreground(mut self, foreground: Foreground) -> Self {
        self.foreground = foreground;
        self
    }

    pub fn with_approximate(mut self, use_approximate: bool) -> Self {
        self.use_approximate = use_approximate;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        check_input(&self.input_file)?;
        check_folder(self.out_folder.as_ref())
    }
}
