use crate::geometry::ChopRatios;

use clap::Parser;

use std::{
    num::NonZeroUsize,
    path::{ Path, PathBuf },
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Stitch SMX Scores", long_about = None)]
pub struct Args{
    /// Picture input path
    #[arg(short, long, default_value_os_t = default_dir("Input"))]
    pub input_path: PathBuf,

    /// Picture output path
    #[arg(short, long, default_value_os_t = default_dir("Output"))]
    pub output_path: PathBuf,

    /// Max images per output
    #[arg(short, long, default_value = "6")]
    pub max_count: NonZeroUsize,

    /// Ratio of image to chop off the right side. Must be a float >= 1.0
    #[arg(short, long, default_value_t = 1.62, value_parser = check_over_one)]
    pub right_chop: f64,

    /// Ratio of image to chop off the top side. Must be a float >= 1.0
    #[arg(short, long, alias = "top_chop", default_value_t = 1.08, value_parser = check_over_one)]
    pub top_chop: f64,

    /// Ratio of image to chop off the bottom side. Must be a float >= 1.0
    #[arg(short, long, default_value_t = 1.23, value_parser = check_over_one)]
    pub bottom_chop: f64,
}

fn default_dir(name: &str) -> PathBuf{
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(name)
}

fn check_over_one(value: &str) -> Result<f64, String>{
    let fval = value.trim().parse::<f64>().map_err(|e| format!("{value} is not a number: {e}"))?;
    validate_chop(fval).map_err(|_| format!("{value} must be greater than or equal to 1.0"))
}

fn validate_chop(chop: f64) -> Result<f64, String>{
    // NaN fails this comparison too
    if chop.is_finite() && chop >= 1.0 {
        Ok(chop)
    } else {
        Err(format!("{chop} must be greater than or equal to 1.0"))
    }
}

/// Validated settings for one stitching run.
#[derive(Debug, Clone)]
pub struct Config{
    input_path: PathBuf,
    output_path: PathBuf,
    max_count: NonZeroUsize,
    chops: ChopRatios,
}

impl Config{
    /// Chop values are checked here as well as in `check_over_one`, since
    /// `new` is also called without going through `Args`.
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        max_count: NonZeroUsize,
        right_chop: f64,
        top_chop: f64,
        bottom_chop: f64,
    ) -> Result<Self, String>{
        let chops = ChopRatios::from_chops(
            validate_chop(right_chop)?,
            validate_chop(top_chop)?,
            validate_chop(bottom_chop)?,
        );
        Ok(Self{ input_path, output_path, max_count, chops })
    }

    pub fn input_path(&self) -> &Path{ &self.input_path }
    pub fn output_path(&self) -> &Path{ &self.output_path }
    pub fn max_count(&self) -> NonZeroUsize{ self.max_count }
    pub fn chops(&self) -> &ChopRatios{ &self.chops }

    pub fn log(&self){
        log::info!("Input Path: {}", self.input_path.display());
        log::info!("Output Path: {}", self.output_path.display());
        log::info!("Max Count: {}", self.max_count);
        log::info!("Right Chop: {}", self.chops.right);
        log::info!("Top Chop: {}", self.chops.top);
        log::info!("Bottom Chop: {}", self.chops.bottom);
    }
}

impl TryFrom<Args> for Config{
    type Error = String;

    fn try_from(args: Args) -> Result<Self, String>{
        Self::new(
            args.input_path,
            args.output_path,
            args.max_count,
            args.right_chop,
            args.top_chop,
            args.bottom_chop,
        )
    }
}
