//! OSRM dataset preparation helpers (download + preprocess).
//!
//! Fetches a Geofabrik extract covering the fixture area and runs the OSRM
//! docker tooling (MLD pipeline) over it. Only the integration tests need
//! this; nothing in the core calls it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Geofabrik region containing the Kinshasa road network.
pub const KINSHASA_REGION: &str = "africa/congo-democratic-republic";

#[derive(Debug, Clone)]
pub struct OsrmDatasetConfig {
    /// Geofabrik region path, e.g. "africa/congo-democratic-republic".
    pub region: String,
    pub data_root: PathBuf,
}

impl OsrmDatasetConfig {
    pub fn new(region: impl Into<String>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            region: region.into(),
            data_root: data_root.into(),
        }
    }

    /// Last path component of the region, used for file naming.
    pub fn region_name(&self) -> &str {
        self.region.rsplit('/').next().unwrap_or("region")
    }

    pub fn pbf_url(&self) -> String {
        format!(
            "https://download.geofabrik.de/{}-latest.osm.pbf",
            self.region
        )
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDataset {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
    pub pbf_path: PathBuf,
}

#[derive(Debug)]
pub enum OsrmDataError {
    Io(io::Error),
    Http(reqwest::Error),
    ProcessFailure(String),
}

impl From<io::Error> for OsrmDataError {
    fn from(err: io::Error) -> Self {
        OsrmDataError::Io(err)
    }
}

impl From<reqwest::Error> for OsrmDataError {
    fn from(err: reqwest::Error) -> Self {
        OsrmDataError::Http(err)
    }
}

impl OsrmDataset {
    /// Ensures the extract is downloaded and preprocessed, skipping any
    /// step whose outputs already exist.
    pub fn ensure(config: &OsrmDatasetConfig) -> Result<Self, OsrmDataError> {
        let data_root = if config.data_root.is_absolute() {
            config.data_root.clone()
        } else {
            std::env::current_dir()?.join(&config.data_root)
        };
        let data_dir = data_root.join(config.region_name());
        fs::create_dir_all(&data_dir)?;

        let pbf_path = data_dir.join(format!("{}-latest.osm.pbf", config.region_name()));
        if !pbf_path.exists() {
            download_pbf(&config.pbf_url(), &pbf_path)?;
        }

        let osrm_base = data_dir.join(format!("{}-latest.osrm", config.region_name()));
        if !osrm_base.exists() {
            run_docker(
                &[
                    "osrm-extract",
                    "-p",
                    "/opt/car.lua",
                    &format!("/data/{}", file_name(&pbf_path)),
                ],
                &data_dir,
            )?;
        }

        if !mld_ready(&osrm_base) {
            run_docker(
                &["osrm-partition", &format!("/data/{}", file_name(&osrm_base))],
                &data_dir,
            )?;
            run_docker(
                &["osrm-customize", &format!("/data/{}", file_name(&osrm_base))],
                &data_dir,
            )?;
        }

        Ok(Self {
            data_dir,
            osrm_base,
            pbf_path,
        })
    }
}

fn download_pbf(url: &str, dest: &Path) -> Result<(), OsrmDataError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&response.bytes()?)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn mld_ready(osrm_base: &Path) -> bool {
    osrm_base.exists()
        && osrm_base.with_extension("osrm.partition").exists()
        && osrm_base.with_extension("osrm.mldgr").exists()
        && osrm_base.with_extension("osrm.cells").exists()
}

fn run_docker(args: &[&str], data_dir: &Path) -> Result<(), OsrmDataError> {
    let status = Command::new("docker")
        .arg("run")
        .arg("--rm")
        .arg("-t")
        .arg("-v")
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(OsrmDataError::ProcessFailure(format!(
            "docker exited with status {}",
            status
        )))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
