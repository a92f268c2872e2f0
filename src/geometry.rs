/// Fractions of each edge to keep, the reciprocals of the chop values given
/// on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChopRatios{
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ChopRatios{
    /// Chop values must already be validated to be >= 1.0.
    pub fn from_chops(right: f64, top: f64, bottom: f64) -> Self{
        Self{
            right: 1.0 / right,
            top: 1.0 / top,
            bottom: 1.0 / bottom,
        }
    }
}

/// Nominal grid unit, derived once from the reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize{
    pub w: u32,
    pub h: u32,
}

impl CellSize{
    pub fn from_reference(refw: u32, refh: u32, chops: &ChopRatios) -> Self{
        let w = keep(refw, chops.right);
        let h = keep(refh, chops.top) as i64 - (refh as i64 - keep(refh, chops.bottom) as i64);
        Self{ w, h: h.max(0) as u32 }
    }

    pub fn is_empty(&self) -> bool{
        self.w == 0 || self.h == 0
    }
}

/// Crop rectangle in an image's own pixel space, always inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox{
    pub left: u32,
    pub upper: u32,
    pub right: u32,
    pub lower: u32,
}

impl CropBox{
    pub fn for_image(width: u32, height: u32, chops: &ChopRatios) -> Self{
        let upper = height - keep(height, chops.top);
        let right = keep(width, chops.right);
        let lower = keep(height, chops.bottom).max(upper);
        Self{ left: 0, upper, right, lower }
    }

    pub fn width(&self) -> u32{
        self.right - self.left
    }

    pub fn height(&self) -> u32{
        self.lower - self.upper
    }
}

// floor(len * frac), clamped to 0..=len
fn keep(len: u32, frac: f64) -> u32{
    ((len as f64 * frac).floor() as u32).min(len)
}

/// Canvas dimensions for a group of `count` images: two columns unless the
/// group is a single image.
pub fn canvas_size(cell: CellSize, count: usize) -> (u32, u32){
    let cols = if count == 1 { 1 } else { 2 };
    let rows = count.div_ceil(2) as u32;
    (cell.w * cols, cell.h * rows)
}

pub fn cell_offset(cell: CellSize, idx: usize) -> (u32, u32){
    let col = (idx % 2) as u32;
    let row = (idx / 2) as u32;
    (col * cell.w, row * cell.h)
}

pub fn half_size(w: u32, h: u32) -> (u32, u32){
    (w / 2, h / 2)
}

#[cfg(test)]
mod tests{

    use super::*;

    fn defaults() -> ChopRatios{
        ChopRatios::from_chops(1.62, 1.08, 1.23)
    }

    #[test]
    fn test_unit_chops_keep_everything(){
        let chops = ChopRatios::from_chops(1.0, 1.0, 1.0);
        assert_eq!(CellSize::from_reference(800, 600, &chops), CellSize{ w: 800, h: 600 });
        assert_eq!(CellSize::from_reference(1, 1, &chops), CellSize{ w: 1, h: 1 });
        assert_eq!(
            CropBox::for_image(800, 600, &chops),
            CropBox{ left: 0, upper: 0, right: 800, lower: 600 }
        );
    }

    #[test]
    fn test_default_chops(){
        let chops = defaults();
        let cell = CellSize::from_reference(100, 100, &chops);
        assert_eq!(cell, CellSize{ w: 61, h: 73 });

        let cb = CropBox::for_image(100, 100, &chops);
        assert_eq!(cb, CropBox{ left: 0, upper: 8, right: 61, lower: 81 });
        assert_eq!((cb.width(), cb.height()), (cell.w, cell.h));
    }

    #[test]
    fn test_crop_box_follows_own_size(){
        let chops = defaults();
        let cb = CropBox::for_image(200, 50, &chops);
        assert_eq!(cb, CropBox{ left: 0, upper: 4, right: 123, lower: 40 });
    }

    #[test]
    fn test_crop_box_clamps_inverted_rows(){
        // keeps 10% from the top edge but 81% from the bottom: rows cross
        let chops = ChopRatios::from_chops(1.0, 10.0, 1.23);
        let cb = CropBox::for_image(100, 100, &chops);
        assert_eq!(cb.upper, 90);
        assert_eq!(cb.lower, 90);
        assert_eq!(cb.height(), 0);
        assert!(CellSize::from_reference(100, 100, &chops).is_empty());
    }

    #[test]
    fn test_no_reference_is_degenerate(){
        let cell = CellSize::from_reference(0, 0, &defaults());
        assert_eq!(cell, CellSize{ w: 0, h: 0 });
        assert!(cell.is_empty());
    }

    #[test]
    fn test_canvas_size(){
        let cell = CellSize{ w: 10, h: 7 };
        assert_eq!(canvas_size(cell, 1), (10, 7));
        assert_eq!(canvas_size(cell, 2), (20, 7));
        assert_eq!(canvas_size(cell, 3), (20, 14));
        assert_eq!(canvas_size(cell, 6), (20, 21));
        for even in [2, 4, 6, 8, 10]{
            assert_eq!(canvas_size(cell, even), (2 * cell.w, cell.h * even as u32 / 2));
        }
    }

    #[test]
    fn test_cell_offset(){
        let cell = CellSize{ w: 10, h: 7 };
        let offsets = (0..5).map(|i| cell_offset(cell, i)).collect::<Vec<_>>();
        assert_eq!(offsets, vec![(0, 0), (10, 0), (0, 7), (10, 7), (0, 14)]);
    }

    #[test]
    fn test_half_size(){
        assert_eq!(half_size(1600, 600), (800, 300));
        assert_eq!(half_size(801, 599), (400, 299));
        assert_eq!(half_size(1, 1), (0, 0));
    }
}
