use crate::common::bitstream::BitStream;
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{
    format_info, ECLevel, Version, FORMAT_INFO_BIT_LEN, FORMAT_INFO_COORDS_MICRO,
    FORMAT_INFO_COORDS_QR_MAIN, FORMAT_INFO_COORDS_QR_SIDE, VERSION_INFO_BIT_LEN,
};
use crate::matrix::Matrix;

// Working grid for symbol construction
//------------------------------------------------------------------------------

// Flat module grid, dark = true, with a same shape reserved mask covering
// function patterns and format/version information
#[derive(Debug, Clone)]
pub(crate) struct SymbolGrid {
    version: Version,
    width: usize,
    grid: Vec<bool>,
    reserved: Vec<bool>,
}

impl SymbolGrid {
    pub fn new(version: Version) -> Self {
        debug_assert!(
            matches!(version, Version::Micro(1..=4) | Version::Normal(1..=40)),
            "Invalid version"
        );

        let width = version.width();
        Self { version, width, grid: vec![false; width * width], reserved: vec![false; width * width] }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // Negative indices wrap around, so corner features can use the same
    // coordinates for every version
    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.width as i16;
        debug_assert!(-w <= r && r < w, "Row out of bound: {r}");
        debug_assert!(-w <= c && c < w, "Column out of bound: {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> bool {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn set(&mut self, r: i16, c: i16, dark: bool) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = dark;
    }

    pub fn is_reserved(&self, r: i16, c: i16) -> bool {
        self.reserved[self.coord_to_index(r, c)]
    }

    fn reserve_rect(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        for r in r1..=r2 {
            for c in c1..=c2 {
                let index = self.coord_to_index(r, c);
                self.reserved[index] = true;
            }
        }
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.width as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                res.push(match (self.get(i, j), self.is_reserved(i, j)) {
                    (true, true) => 'f',
                    (false, true) => 'F',
                    (true, false) => 'd',
                    (false, false) => '.',
                });
            }
            res.push('\n');
        }
        res
    }
}

#[cfg(test)]
mod grid_util_tests {
    use super::SymbolGrid;
    use crate::common::metadata::Version;

    #[test]
    fn test_index_wrap() {
        let mut symbol = SymbolGrid::new(Version::Normal(1));
        let w = symbol.width() as i16;
        symbol.set(-1, -1, true);
        assert!(symbol.get(w - 1, w - 1));
        symbol.set(0, 0, true);
        assert!(symbol.get(-w, -w));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let symbol = SymbolGrid::new(Version::Normal(1));
        let w = symbol.width() as i16;
        symbol.get(w, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_out_of_bound() {
        let symbol = SymbolGrid::new(Version::Normal(1));
        let w = symbol.width() as i16;
        symbol.get(0, -(w + 1));
    }
}

// Function patterns
//------------------------------------------------------------------------------

impl SymbolGrid {
    pub fn draw_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        self.reserve_function_modules();
    }

    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        if let Version::Normal(_) = self.version {
            self.draw_finder_pattern_at(3, -4);
            self.draw_finder_pattern_at(-4, 3);
        }
    }

    // Center coordinates; the asymmetric range covers the separator strip
    // on the two inward sides
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                let dark = match (i, j) {
                    (4 | -4, _) | (_, 4 | -4) => false,
                    (3 | -3, _) | (_, 3 | -3) => true,
                    (2 | -2, _) | (_, 2 | -2) => false,
                    _ => true,
                };
                self.set(r + i, c + j, dark);
            }
        }
    }

    fn draw_timing_pattern(&mut self) {
        let w = self.width as i16;
        let (offset, last) = match self.version {
            Version::Micro(_) => (0, w - 1),
            Version::Normal(_) => (6, w - 9),
        };
        self.draw_line(offset, 8, offset, last);
        self.draw_line(8, offset, last, offset);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, j & 1 == 0);
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, i & 1 == 0);
            }
        }
    }

    fn draw_alignment_patterns(&mut self) {
        let positions = self.version.alignment_pattern();
        for &r in positions {
            for &c in positions {
                self.draw_alignment_pattern_at(r, c);
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.width as i16;
        if (r == 6 && (c == 6 || c == w - 7)) || (r == w - 7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let dark = matches!((i, j), (-2 | 2, _) | (_, -2 | 2) | (0, 0));
                self.set(r + i, c + j, dark);
            }
        }
    }

    // Union of rectangles covering every module that codeword placement and
    // masking must leave alone
    fn reserve_function_modules(&mut self) {
        let w = self.width as i16;
        let timing = match self.version {
            Version::Micro(_) => 0,
            Version::Normal(_) => 6,
        };

        // Top left finder with its separator
        self.reserve_rect(0, 0, 7, 7);
        // Timing patterns, end to end
        self.reserve_rect(timing, 0, timing, w - 1);
        self.reserve_rect(0, timing, w - 1, timing);
        // Format information strips next to the top left finder
        self.reserve_rect(8, 0, 8, 8);
        self.reserve_rect(0, 8, 8, 8);

        if let Version::Normal(v) = self.version {
            // Top right and bottom left finders with separators
            self.reserve_rect(0, w - 8, 7, w - 1);
            self.reserve_rect(w - 8, 0, w - 1, 7);
            // Format information along the far edges of row and column 8
            self.reserve_rect(8, w - 8, 8, w - 1);
            self.reserve_rect(w - 8, 8, w - 1, 8);

            let centers = self.version.alignment_pattern();
            for &r in centers {
                for &c in centers {
                    if (r == 6 && (c == 6 || c == w - 7)) || (r == w - 7 && c == 6) {
                        continue;
                    }
                    self.reserve_rect(r - 2, c - 2, r + 2, c + 2);
                }
            }

            if v >= 7 {
                self.reserve_rect(0, w - 11, 5, w - 9);
                self.reserve_rect(w - 11, 0, w - 9, 5);
            }
        }
    }
}


// Payload placement and masking
//------------------------------------------------------------------------------

impl SymbolGrid {
    // Places interleaved codeword bits along the zig-zag path. Bits run out
    // exactly at the remainder modules, which stay light
    pub fn draw_payload(&mut self, payload: &BitStream) {
        let mut bits = payload.iter();
        let mut remainder = 0;
        for (r, c) in EncRegionIter::new(self.version) {
            if self.is_reserved(r, c) {
                continue;
            }
            match bits.next() {
                Some(bit) => self.set(r, c, bit),
                None => remainder += 1,
            }
        }

        debug_assert!(bits.next().is_none(), "Payload bits left unplaced");
        debug_assert!(
            remainder == self.version.remainder_bits(),
            "Unplaced modules don't match remainder bits: {remainder}"
        );
    }

    pub fn apply_mask(&mut self, pattern: MaskPattern) {
        let mask_function = pattern.mask_function(self.version);
        let w = self.width as i16;
        for r in 0..w {
            for c in 0..w {
                if !self.is_reserved(r, c) && mask_function(r, c) {
                    let m = self.get(r, c);
                    self.set(r, c, !m);
                }
            }
        }
    }
}

// Format and version information
//------------------------------------------------------------------------------

impl SymbolGrid {
    pub fn draw_format_info(&mut self, ec_level: ECLevel, mask_pattern: MaskPattern) {
        let info = format_info(self.version, ec_level, mask_pattern) as u32;
        match self.version {
            Version::Micro(_) => {
                self.draw_number(info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_MICRO);
            }
            Version::Normal(_) => {
                self.draw_number(info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_MAIN);
                self.draw_number(info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_SIDE);
                // This module is always dark
                self.set(-8, 8, true);
            }
        }
    }

    pub fn draw_version_info(&mut self) {
        if let Version::Normal(7..=40) = self.version {
            let info = self.version.version_info();
            let w = self.width as i16;
            for bit in 0..VERSION_INFO_BIT_LEN {
                let dark = info >> bit & 1 == 1;
                let r = w - 11 + (bit % 3) as i16;
                let c = (bit / 3) as i16;
                self.set(r, c, dark);
                self.set(c, r, dark);
            }
        }
    }

    fn draw_number(&mut self, number: u32, bit_len: usize, coords: &[(i16, i16)]) {
        let mut mask = 1 << (bit_len - 1);
        for (r, c) in coords {
            self.set(*r, *c, number & mask != 0);
            mask >>= 1;
        }
    }

    pub fn into_matrix(self) -> Matrix {
        Matrix::with_quiet_zone(self.version, &self.grid)
    }
}
