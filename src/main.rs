mod config;
mod error;
mod geometry;
mod stitch;
mod timer;

use crate::{
    config::{ Args, Config },
    stitch::stitch,
};

use clap::Parser;

pub fn main(){
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = Config::try_from(args).vital("Stitcher: invalid configuration");

    log::info!("Running SMX Stitcher...");
    config.log();

    let written = stitch(&config).vital("Stitcher: run failed");
    log::info!("Stitcher: finished, {} files written.", written.len());
}

trait Vital<T> {
    fn vital(self, msg: &str) -> T;
}

impl<T, U: std::fmt::Display> Vital<T> for Result<T, U> {
    fn vital(self, msg: &str) -> T {
        match self {
            Ok(res) => res,
            Err(err) => {
                log::error!("{msg}: {err}");
                std::process::exit(1);
            },
        }
    }
}
