use crate::{
    config::Config,
    error::{ Result, StitchError },
    geometry::{ canvas_size, cell_offset, half_size, CellSize, ChopRatios, CropBox },
    timer::Timer,
};

use image::{
    imageops::{ self, FilterType },
    ImageError, ImageFormat, ImageReader as IR, RgbImage,
};

use log::{ debug, info, warn };

use std::{
    fs::{ self, File },
    io::BufReader,
    num::NonZeroUsize,
    path::{ Path, PathBuf },
    slice::Chunks,
};

/// Runs one full pass over the input directory and returns the paths written,
/// in order.
pub fn stitch(config: &Config) -> Result<Vec<PathBuf>>{
    let paths = list_images(config.input_path())?;
    let Some(first) = paths.first() else {
        warn!("No images found in {}", config.input_path().display());
        return Ok(Vec::new());
    };

    let (refw, refh) = open(first)?
        .into_dimensions()
        .map_err(|source| StitchError::Decode{ path: first.clone(), source })?;
    let cell = CellSize::from_reference(refw, refh, config.chops());
    debug!("Reference {}x{} from {}, cell {}x{}", refw, refh, first.display(), cell.w, cell.h);
    if cell.is_empty() {
        return Err(StitchError::EmptyCell{ width: cell.w, height: cell.h });
    }
    // every half-size copy must be at least 1x1 before anything is written
    for group in groups(&paths, config.max_count()) {
        let (w, h) = canvas_size(cell, group.len());
        let (hw, hh) = half_size(w, h);
        if hw == 0 || hh == 0 {
            return Err(StitchError::EmptyHalfSize{ width: w, height: h });
        }
    }

    let mut written = Vec::new();
    let mut timer = Timer::new();
    for (out_idx, group) in groups(&paths, config.max_count()).enumerate() {
        let canvas = compose(group, cell, config.chops())?;
        written.extend(save_group(&canvas, config.output_path(), out_idx)?);
        debug!("Group {}: {} images in {}ms", out_idx, group.len(), timer.lap());
    }
    Ok(written)
}

/// Regular files in `dir`, sorted by path. Subdirectories and dot-files are
/// skipped.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>>{
    let read_err = |source: std::io::Error| StitchError::ReadDir{ path: dir.to_path_buf(), source };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && !is_hidden(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_hidden(path: &Path) -> bool{
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Consecutive batches of `max_count` items; the last one holds the rest.
pub fn groups<T>(items: &[T], max_count: NonZeroUsize) -> Chunks<'_, T>{
    items.chunks(max_count.get())
}

/// Crops every image in the group and pastes it into a two-column grid.
pub fn compose(group: &[PathBuf], cell: CellSize, chops: &ChopRatios) -> Result<RgbImage>{
    let (w, h) = canvas_size(cell, group.len());
    let mut canvas = RgbImage::new(w, h);
    for (idx, path) in group.iter().enumerate() {
        let img = load_cropped(path, chops)?;
        let (x, y) = cell_offset(cell, idx);
        imageops::replace(&mut canvas, &img, x as i64, y as i64);
    }
    Ok(canvas)
}

fn open(path: &Path) -> Result<IR<BufReader<File>>>{
    IR::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| StitchError::Decode{ path: path.to_path_buf(), source: ImageError::IoError(e) })
}

fn load_cropped(path: &Path, chops: &ChopRatios) -> Result<RgbImage>{
    let img = open(path)?
        .decode()
        .map_err(|source| StitchError::Decode{ path: path.to_path_buf(), source })?;
    let cb = CropBox::for_image(img.width(), img.height(), chops);
    Ok(img.crop_imm(cb.left, cb.upper, cb.width(), cb.height()).into_rgb8())
}

/// Writes `{index}.png` and the half-size `{index}_small.png`.
pub fn save_group(canvas: &RgbImage, out_dir: &Path, index: usize) -> Result<[PathBuf; 2]>{
    let full = out_dir.join(format!("{index}.png"));
    save_png(canvas, &full)?;

    let (w, h) = half_size(canvas.width(), canvas.height());
    let small = imageops::resize(canvas, w, h, FilterType::Lanczos3);
    let small_path = out_dir.join(format!("{index}_small.png"));
    save_png(&small, &small_path)?;

    Ok([full, small_path])
}

fn save_png(img: &RgbImage, path: &Path) -> Result<()>{
    info!("Saving: {}", path.display());
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| StitchError::Save{ path: path.to_path_buf(), source })
}
