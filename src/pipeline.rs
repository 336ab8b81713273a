//! File-level operations and the homomorphic downscale experiment.
//!
//! Each function reads bitmap files, runs one core operation and writes the result. The
//! experiment chains them:
//!
//! 1. Downscale the original image with the integer mean (baseline).
//! 2. Split the original image into shares.
//! 3. Downscale every share with the field mean.
//! 4. Reconstruct from two downscaled shares.
//! 5. Compare the reconstruction against the baseline (SAE).

use core::fmt;
use std::path::{Path, PathBuf};

use crate::config::ExperimentConfig;
use crate::entropy::EntropySource;
use crate::imaging::{compare_rasters, downscale_plain, ImagingError, Raster, RasterLayout, SaeReport};
use crate::mpc::aggregate::downscale_share;
use crate::mpc::{MpcError, Reconstruction, SecretSharingScheme, ShamirGf257, Share};
use crate::storage::raw_files::{ensure_dir, read_file, share_path, write_atomic};
use crate::storage::StorageError;

/// Errors from file-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// Reading or writing a file failed.
    Storage(StorageError),
    /// A file is not a usable raster.
    Imaging(ImagingError),
    /// Sharing or reconstruction failed.
    Mpc(MpcError),
    /// The x-coordinates chosen for reconstruction are repeated or outside `1..=n`.
    InvalidShareSelection,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Storage(e) => write!(f, "Storage error: {}", e),
            PipelineError::Imaging(e) => write!(f, "Image error: {}", e),
            PipelineError::Mpc(e) => write!(f, "Sharing error: {}", e),
            PipelineError::InvalidShareSelection => {
                write!(f, "Share selection must be distinct x-coordinates within 1..=n")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<StorageError> for PipelineError {
    fn from(err: StorageError) -> Self {
        PipelineError::Storage(err)
    }
}

impl From<ImagingError> for PipelineError {
    fn from(err: ImagingError) -> Self {
        PipelineError::Imaging(err)
    }
}

impl From<MpcError> for PipelineError {
    fn from(err: MpcError) -> Self {
        PipelineError::Mpc(err)
    }
}

/// Reads and splits a bitmap file.
pub fn read_raster<P: AsRef<Path>>(path: P) -> Result<Raster, PipelineError> {
    Ok(Raster::from_bytes(&read_file(path)?)?)
}

/// Writes header and payload to `path`.
pub fn write_raster<P: AsRef<Path>>(path: P, raster: &Raster) -> Result<(), PipelineError> {
    write_atomic(path, &raster.to_bytes())?;
    Ok(())
}

/// Splits the pixel payload of `input` into share files `{prefix}_{x}.bmp`.
///
/// Every share file carries the input header unchanged.
///
/// # Returns
/// * `Ok(Vec<(u8, PathBuf)>)` - x-coordinate and path of each share, in x order.
pub fn create_share_images<P, Q, R>(
    input: P,
    prefix: Q,
    scheme: &ShamirGf257,
    rng: &mut R,
) -> Result<Vec<(u8, PathBuf)>, PipelineError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: EntropySource + ?Sized,
{
    let raster = read_raster(input)?;
    let shares = scheme.split(&raster.payload[..], rng)?;

    let mut written = Vec::with_capacity(shares.len());
    for share in &shares {
        let path = share_path(prefix.as_ref(), share.identifier);
        let out = Raster {
            header: raster.header.clone(),
            payload: share.value().to_vec(),
        };
        write_raster(&path, &out)?;
        written.push((share.identifier, path));
    }
    Ok(written)
}

/// Reconstructs an image from share files and writes it to `output`.
///
/// The header of the first share is reused for the output.
pub fn reconstruct_image<P, Q>(
    shares: &[(u8, P)],
    scheme: &ShamirGf257,
    output: Q,
) -> Result<Reconstruction, PipelineError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if shares.len() < scheme.config().threshold() as usize {
        return Err(MpcError::InsufficientShares.into());
    }

    let mut header = None;
    let mut loaded = Vec::with_capacity(shares.len());
    for (x, path) in shares {
        let raster = read_raster(path)?;
        loaded.push(Share::new(*x, raster.payload.clone())?);
        header.get_or_insert(raster.header);
    }

    let recovered = scheme.reconstruct(&loaded)?;
    if !recovered.is_exact() {
        log::warn!(
            "{} reconstructed values were clamped to 255",
            recovered.clamped().len()
        );
    }

    let header = header.ok_or(MpcError::InsufficientShares)?;
    write_raster(
        output,
        &Raster {
            header,
            payload: recovered.secret().to_vec(),
        },
    )?;
    Ok(recovered)
}

/// Downscales a plaintext image by 2 with the integer mean.
pub fn downscale_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<RasterLayout, PipelineError> {
    let raster = read_raster(input)?;
    let layout = raster.layout()?;
    let (out_layout, payload) = downscale_plain(&raster.payload, &layout)?;
    write_raster(output, &Raster::with_layout(&out_layout, payload))?;
    Ok(out_layout)
}

/// Downscales the share file of x-coordinate `x` by 2 with the GF(257) mean.
pub fn downscale_share_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    x: u8,
    output: Q,
) -> Result<RasterLayout, PipelineError> {
    let raster = read_raster(input)?;
    let layout = raster.layout()?;
    let share = Share::new(x, raster.payload.clone())?;
    let (out_layout, small) = downscale_share(&share, &layout)?;
    write_raster(output, &Raster::with_layout(&out_layout, small.value().to_vec()))?;
    Ok(out_layout)
}

/// Sum of absolute errors between two image files of equal dimensions.
pub fn calculate_sae<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> Result<SaeReport, PipelineError> {
    Ok(compare_rasters(&read_raster(a)?, &read_raster(b)?)?)
}

/// Everything the experiment produced.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Layout of the input image.
    pub input_layout: RasterLayout,
    /// Integer-mean downscale of the input.
    pub baseline_path: PathBuf,
    /// Full-size shares.
    pub share_paths: Vec<(u8, PathBuf)>,
    /// Field-mean downscaled shares.
    pub downscaled_share_paths: Vec<(u8, PathBuf)>,
    /// Image reconstructed from the selected downscaled shares.
    pub reconstructed_path: PathBuf,
    /// Number of reconstructed values clamped from 256 to 255.
    pub clamped: usize,
    /// Baseline vs. reconstruction.
    pub sae: SaeReport,
}

/// Runs the homomorphic downscale experiment described in the module docs.
pub fn run_downscale_experiment<R: EntropySource + ?Sized>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<ExperimentReport, PipelineError> {
    let scheme = ShamirGf257::new(config.sharing);
    let n = config.sharing.share_count();
    let [xa, xb] = config.reconstruct_with;
    if xa == xb || !(1..=n).contains(&xa) || !(1..=n).contains(&xb) {
        return Err(PipelineError::InvalidShareSelection);
    }

    // Fail before writing anything if the input cannot be downscaled.
    let input_layout = read_raster(&config.input_path)?.layout()?;
    input_layout.require_downscalable()?;

    let out_dir = PathBuf::from(&config.output_dir);
    ensure_dir(&out_dir)?;
    log::info!(
        "Input {} ({}x{}), output in {}",
        config.input_path,
        input_layout.width,
        input_layout.height,
        out_dir.display()
    );

    // Step 1
    let baseline_path = out_dir.join(&config.baseline_name);
    downscale_image(&config.input_path, &baseline_path)?;
    log::info!("Step 1: baseline downscale saved as {}", baseline_path.display());

    // Step 2
    let share_paths = create_share_images(
        &config.input_path,
        out_dir.join(&config.share_prefix),
        &scheme,
        rng,
    )?;
    log::info!("Step 2: created {} shares", share_paths.len());

    // Step 3
    let mut downscaled_share_paths = Vec::with_capacity(share_paths.len());
    for (x, path) in &share_paths {
        let out = share_path(out_dir.join(&config.downscaled_share_prefix), *x);
        downscale_share_image(path, *x, &out)?;
        downscaled_share_paths.push((*x, out));
    }
    log::info!("Step 3: downscaled {} shares", downscaled_share_paths.len());

    // Step 4
    let selected: Vec<(u8, PathBuf)> = downscaled_share_paths
        .iter()
        .filter(|(x, _)| *x == xa || *x == xb)
        .cloned()
        .collect();
    let reconstructed_path = out_dir.join(&config.reconstructed_name);
    let recovered = reconstruct_image(&selected, &scheme, &reconstructed_path)?;
    log::info!(
        "Step 4: reconstructed from shares x={} and x={} as {}",
        xa,
        xb,
        reconstructed_path.display()
    );

    // Step 5
    let sae = calculate_sae(&baseline_path, &reconstructed_path)?;
    if sae.sae == 0 {
        log::info!("Step 5: SAE = 0, reconstruction matches the baseline");
    } else {
        log::info!("Step 5: SAE = {}, MAE per byte = {:.4}", sae.sae, sae.mean_per_byte());
    }

    Ok(ExperimentReport {
        input_layout,
        baseline_path,
        share_paths,
        downscaled_share_paths,
        reconstructed_path,
        clamped: recovered.clamped().len(),
        sae,
    })
}
