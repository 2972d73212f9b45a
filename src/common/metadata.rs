use std::ops::Deref;

use crate::common::codec::Mode;
use crate::common::error::{QRError, QRResult};
use crate::common::mask::MaskPattern;

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Version {
    Micro(usize),
    Normal(usize),
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Micro(v) => v,
            Self::Normal(v) => v,
        }
    }
}

impl Version {
    pub const fn width(self) -> usize {
        debug_assert!(matches!(self, Self::Micro(1..=4) | Self::Normal(1..=40)), "Invalid version");
        match self {
            Self::Micro(v) => v * 2 + 9,
            Self::Normal(v) => v * 4 + 17,
        }
    }

    pub const fn quiet_zone_width(self) -> usize {
        match self {
            Self::Micro(_) => 2,
            Self::Normal(_) => 4,
        }
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        debug_assert!(matches!(self, Self::Micro(1..=4) | Self::Normal(1..=40)), "Invalid version");
        match self {
            Self::Micro(_) => &[],
            Self::Normal(v) => ALIGNMENT_PATTERN_POSITIONS[v - 1],
        }
    }

    pub fn version_info(self) -> u32 {
        debug_assert!(matches!(self, Self::Normal(7..=40)), "Invalid version");
        match self {
            Self::Normal(v) => VERSION_INFOS[v - 7],
            _ => unreachable!(),
        }
    }

    // Mode indicator length; the indicator value is mode and version dependent
    pub fn mode_bits(self) -> usize {
        match self {
            Version::Micro(v) => v - 1,
            Version::Normal(_) => 4,
        }
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        debug_assert!(
            matches!(self, Version::Micro(1..=4) | Version::Normal(1..=40)),
            "Invalid version"
        );

        match self {
            Version::Micro(v) => match mode {
                Mode::Numeric => v + 2,
                Mode::Alphanumeric => v + 1,
                Mode::Byte => v + 1,
                Mode::Kanji => v,
            },
            Version::Normal(1..=9) => match mode {
                Mode::Numeric => 10,
                Mode::Alphanumeric => 9,
                Mode::Byte => 8,
                Mode::Kanji => 8,
            },
            Version::Normal(10..=26) => match mode {
                Mode::Numeric => 12,
                Mode::Alphanumeric => 11,
                Mode::Byte => 16,
                Mode::Kanji => 10,
            },
            Version::Normal(_) => match mode {
                Mode::Numeric => 14,
                Mode::Alphanumeric => 13,
                Mode::Byte => 16,
                Mode::Kanji => 12,
            },
        }
    }

    // Data and error correction modules together; divide by 8 for codewords,
    // mod 8 for remainder bits. The last data codeword of M1 and M3 is 4 bits
    pub fn data_module_count(self) -> usize {
        match self {
            Version::Micro(v) => DATA_MODULE_COUNT[39 + v],
            Version::Normal(v) => DATA_MODULE_COUNT[v - 1],
        }
    }

    pub fn remainder_bits(self) -> usize {
        match self {
            Version::Micro(_) => 0,
            Version::Normal(_) => self.data_module_count() % 8,
        }
    }

    pub fn ecc_per_block(self, ec_level: ECLevel) -> usize {
        match self {
            Version::Micro(v) => ECC_PER_BLOCK[39 + v][ec_level.table_index()],
            Version::Normal(v) => ECC_PER_BLOCK[v - 1][ec_level.table_index()],
        }
    }

    // (block1 size, block1 count, block2 size, block2 count) in data codewords
    pub fn data_codewords_per_block(self, ec_level: ECLevel) -> (usize, usize, usize, usize) {
        match self {
            Version::Micro(v) => DATA_CODEWORDS_PER_BLOCK[39 + v][ec_level.table_index()],
            Version::Normal(v) => DATA_CODEWORDS_PER_BLOCK[v - 1][ec_level.table_index()],
        }
    }

    pub fn block_count(self, ec_level: ECLevel) -> usize {
        let (_, count1, _, count2) = self.data_codewords_per_block(ec_level);
        count1 + count2
    }

    pub fn total_ec_codewords(self, ec_level: ECLevel) -> usize {
        self.block_count(ec_level) * self.ecc_per_block(ec_level)
    }

    pub fn total_data_codewords(self, ec_level: ECLevel) -> usize {
        let (size1, count1, size2, count2) = self.data_codewords_per_block(ec_level);
        size1 * count1 + size2 * count2
    }

    pub fn data_bit_capacity(self, ec_level: ECLevel) -> usize {
        self.data_module_count()
            - self.remainder_bits()
            - 8 * self.total_ec_codewords(ec_level)
    }

    pub fn terminator_bits(self) -> usize {
        match self {
            Version::Micro(v) => 3 + (v - 1) * 2,
            Version::Normal(_) => 4,
        }
    }

    pub fn validate(self, ec_level: ECLevel) -> QRResult<()> {
        if !matches!(self, Version::Micro(1..=4) | Version::Normal(1..=40)) {
            return Err(QRError::InvalidVersion);
        }
        match (self, ec_level) {
            (Version::Micro(1), ECLevel::DetectionOnly) => Ok(()),
            (Version::Micro(1), _) | (_, ECLevel::DetectionOnly) => Err(QRError::InvalidECLevel),
            (Version::Micro(2..=3), ECLevel::Q) | (Version::Micro(_), ECLevel::H) => {
                Err(QRError::InvalidECLevel)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod version_tests {
    use crate::common::codec::Mode;
    use crate::common::error::QRError;

    use super::ECLevel;
    use super::Version::*;

    #[test]
    #[should_panic(expected = "Invalid version")]
    fn test_invalid_micro_version_high() {
        Micro(5).alignment_pattern();
    }

    #[test]
    #[should_panic(expected = "Invalid version")]
    fn test_invalid_normal_version_high() {
        Normal(41).alignment_pattern();
    }

    #[test]
    fn test_width() {
        assert_eq!(Micro(1).width(), 11);
        assert_eq!(Micro(4).width(), 17);
        assert_eq!(Normal(1).width(), 21);
        assert_eq!(Normal(7).width(), 45);
        assert_eq!(Normal(40).width(), 177);
    }

    #[test]
    fn test_char_cnt_bits() {
        assert_eq!(Normal(1).char_cnt_bits(Mode::Numeric), 10);
        assert_eq!(Normal(9).char_cnt_bits(Mode::Numeric), 10);
        assert_eq!(Normal(10).char_cnt_bits(Mode::Numeric), 12);
        assert_eq!(Normal(26).char_cnt_bits(Mode::Numeric), 12);
        assert_eq!(Normal(27).char_cnt_bits(Mode::Numeric), 14);
        assert_eq!(Normal(40).char_cnt_bits(Mode::Numeric), 14);
        assert_eq!(Normal(1).char_cnt_bits(Mode::Alphanumeric), 9);
        assert_eq!(Normal(10).char_cnt_bits(Mode::Alphanumeric), 11);
        assert_eq!(Normal(27).char_cnt_bits(Mode::Alphanumeric), 13);
        assert_eq!(Normal(1).char_cnt_bits(Mode::Byte), 8);
        assert_eq!(Normal(10).char_cnt_bits(Mode::Byte), 16);
        assert_eq!(Normal(27).char_cnt_bits(Mode::Byte), 16);
        assert_eq!(Normal(1).char_cnt_bits(Mode::Kanji), 8);
        assert_eq!(Normal(10).char_cnt_bits(Mode::Kanji), 10);
        assert_eq!(Normal(27).char_cnt_bits(Mode::Kanji), 12);
        assert_eq!(Micro(1).char_cnt_bits(Mode::Numeric), 3);
        assert_eq!(Micro(2).char_cnt_bits(Mode::Numeric), 4);
        assert_eq!(Micro(2).char_cnt_bits(Mode::Alphanumeric), 3);
        assert_eq!(Micro(3).char_cnt_bits(Mode::Byte), 4);
        assert_eq!(Micro(3).char_cnt_bits(Mode::Kanji), 3);
        assert_eq!(Micro(4).char_cnt_bits(Mode::Numeric), 6);
        assert_eq!(Micro(4).char_cnt_bits(Mode::Kanji), 4);
    }

    #[test]
    fn test_data_bit_capacity() {
        assert_eq!(Normal(1).data_bit_capacity(ECLevel::L), 152);
        assert_eq!(Normal(1).data_bit_capacity(ECLevel::H), 72);
        assert_eq!(Normal(2).data_bit_capacity(ECLevel::H), 128);
        assert_eq!(Normal(40).data_bit_capacity(ECLevel::L), 23648);
        assert_eq!(Normal(40).data_bit_capacity(ECLevel::H), 10208);
        assert_eq!(Micro(1).data_bit_capacity(ECLevel::DetectionOnly), 20);
        assert_eq!(Micro(2).data_bit_capacity(ECLevel::L), 40);
        assert_eq!(Micro(2).data_bit_capacity(ECLevel::M), 32);
        assert_eq!(Micro(3).data_bit_capacity(ECLevel::L), 84);
        assert_eq!(Micro(3).data_bit_capacity(ECLevel::M), 68);
        assert_eq!(Micro(4).data_bit_capacity(ECLevel::Q), 80);
    }

    #[test]
    fn test_remainder_bits() {
        assert_eq!(Normal(1).remainder_bits(), 0);
        assert_eq!(Normal(2).remainder_bits(), 7);
        assert_eq!(Normal(7).remainder_bits(), 0);
        assert_eq!(Normal(21).remainder_bits(), 4);
        assert_eq!(Normal(35).remainder_bits(), 0);
        assert_eq!(Micro(3).remainder_bits(), 0);
    }

    #[test]
    fn test_tables_are_consistent() {
        let mut combinations = (1..=40)
            .flat_map(|v| {
                [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H].map(|l| (Normal(v), l)).to_vec()
            })
            .collect::<Vec<_>>();
        combinations.push((Micro(1), ECLevel::DetectionOnly));
        combinations.extend([(Micro(2), ECLevel::L), (Micro(2), ECLevel::M)]);
        combinations.extend([(Micro(3), ECLevel::L), (Micro(3), ECLevel::M)]);
        combinations.extend([ECLevel::L, ECLevel::M, ECLevel::Q].map(|l| (Micro(4), l)));

        for (version, ec_level) in combinations {
            assert_eq!(version.validate(ec_level), Ok(()));
            let data_bits = version.data_bit_capacity(ec_level);
            let ec_bits = 8 * version.total_ec_codewords(ec_level);
            assert_eq!(
                data_bits + ec_bits + version.remainder_bits(),
                version.data_module_count(),
                "{version:?} {ec_level:?}"
            );
            // Every data codeword of the block layout is backed by stream bits
            assert_eq!(
                version.total_data_codewords(ec_level),
                data_bits.div_ceil(8),
                "{version:?} {ec_level:?}"
            );
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(Normal(1).validate(ECLevel::H), Ok(()));
        assert_eq!(Normal(41).validate(ECLevel::L), Err(QRError::InvalidVersion));
        assert_eq!(Normal(0).validate(ECLevel::L), Err(QRError::InvalidVersion));
        assert_eq!(Normal(1).validate(ECLevel::DetectionOnly), Err(QRError::InvalidECLevel));
        assert_eq!(Micro(1).validate(ECLevel::DetectionOnly), Ok(()));
        assert_eq!(Micro(1).validate(ECLevel::L), Err(QRError::InvalidECLevel));
        assert_eq!(Micro(2).validate(ECLevel::DetectionOnly), Err(QRError::InvalidECLevel));
        assert_eq!(Micro(2).validate(ECLevel::Q), Err(QRError::InvalidECLevel));
        assert_eq!(Micro(4).validate(ECLevel::Q), Ok(()));
        assert_eq!(Micro(4).validate(ECLevel::H), Err(QRError::InvalidECLevel));
        assert_eq!(Micro(5).validate(ECLevel::L), Err(QRError::InvalidVersion));
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
    // M1 symbols detect errors but cannot correct them
    DetectionOnly = 4,
}

impl ECLevel {
    // DetectionOnly shares the M1 row's L column in the layout tables
    pub(crate) fn table_index(self) -> usize {
        match self {
            Self::DetectionOnly => 0,
            level => level as usize,
        }
    }
}

// Format information
//------------------------------------------------------------------------------

pub fn format_info(version: Version, ec_level: ECLevel, mask_pattern: MaskPattern) -> u16 {
    match version {
        Version::Normal(_) => {
            let index = ((ec_level as usize) ^ 1) << 3 | *mask_pattern as usize;
            FORMAT_INFOS[index] ^ FORMAT_MASK_QR
        }
        Version::Micro(v) => {
            let symbol_number = match v {
                1 => 0,
                2 => 1,
                3 => 3,
                4 => 5,
                _ => unreachable!("Invalid version"),
            } + match ec_level {
                ECLevel::DetectionOnly => 0,
                level => level as usize,
            };
            let index = symbol_number << 2 | *mask_pattern as usize;
            FORMAT_INFOS[index] ^ FORMAT_MASK_MICRO
        }
    }
}

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;

// Most significant bit first, main copy around the top left finder
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

// Split copy along the bottom left and top right finders
pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub static FORMAT_INFO_COORDS_MICRO: [(i16, i16); 15] = [
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 6),
    (8, 7),
    (8, 8),
    (7, 8),
    (6, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
];

#[cfg(test)]
mod format_info_tests {
    use super::{format_info, ECLevel, Version};
    use crate::common::mask::MaskPattern;

    #[test]
    fn test_format_info_qr() {
        // M with mask 101 is the worked example in the standard
        assert_eq!(
            format_info(Version::Normal(1), ECLevel::M, MaskPattern::new(0b101)),
            0b100000011001110
        );
        assert_eq!(
            format_info(Version::Normal(1), ECLevel::L, MaskPattern::new(0)),
            0b111011111000100
        );
        assert_eq!(
            format_info(Version::Normal(2), ECLevel::H, MaskPattern::new(0b111)),
            0b000100000111011
        );
    }

    #[test]
    fn test_format_info_micro() {
        // Symbol numbers: M1 0, M2 L/M 1/2, M3 L/M 3/4, M4 L/M/Q 5/6/7
        assert_eq!(
            format_info(Version::Micro(1), ECLevel::DetectionOnly, MaskPattern::new(0b00)),
            0b100010001000101
        );
        assert_eq!(
            format_info(Version::Micro(4), ECLevel::Q, MaskPattern::new(0b11)),
            0b011101110111010
        );
    }
}

// Global constants
//------------------------------------------------------------------------------

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// BCH(18, 6) version information for versions 7 to 40
static VERSION_INFOS: [u32; 34] = [
    0x07c94, 0x085bc, 0x09a99, 0x0a4d3, 0x0bbf6, 0x0c762, 0x0d847, 0x0e60d, 0x0f928, 0x10b78,
    0x1145d, 0x12a17, 0x13532, 0x149a6, 0x15683, 0x168c9, 0x177ec, 0x18ec4, 0x191e1, 0x1afab,
    0x1b08e, 0x1cc1a, 0x1d33f, 0x1ed75, 0x1f250, 0x209d5, 0x216f0, 0x228ba, 0x2379f, 0x24b0b,
    0x2542e, 0x26a64, 0x27541, 0x28c69,
];

// Raw BCH(15, 5) codewords indexed by (ec bits || mask id) for QR and
// (symbol number || mask id) for Micro, before the type specific XOR mask
static FORMAT_INFOS: [u16; 32] = [
    0b000000000000000,
    0b000010100110111,
    0b000101001101110,
    0b000111101011001,
    0b001000111101011,
    0b001010011011100,
    0b001101110000101,
    0b001111010110010,
    0b010001111010110,
    0b010011011100001,
    0b010100110111000,
    0b010110010001111,
    0b011001000111101,
    0b011011100001010,
    0b011100001010011,
    0b011110101100100,
    0b100001010011011,
    0b100011110101100,
    0b100100011110101,
    0b100110111000010,
    0b101001101110000,
    0b101011001000111,
    0b101100100011110,
    0b101110000101001,
    0b110000101001101,
    0b110010001111010,
    0b110101100100011,
    0b110111000010100,
    0b111000010100110,
    0b111010110010001,
    0b111101011001000,
    0b111111111111111,
];

static FORMAT_MASK_QR: u16 = 0b101010000010010;

static FORMAT_MASK_MICRO: u16 = 0b100010001000101;

// Modules available for data and error correction codewords, per version.
// Rows 0-39 are QR versions 1-40, rows 40-43 are Micro versions M1-M4
static DATA_MODULE_COUNT: [usize; 44] = [
    208, 359, 567, 807, 1079, 1383, 1568, 1936, 2336, 2768, 3232, 3728, 4256, 4651, 5243, 5867,
    6523, 7211, 7931, 8683, 9252, 10068, 10916, 11796, 12708, 13652, 14628, 15371, 16411, 17483,
    18587, 19723, 20891, 22091, 23008, 24272, 25568, 26896, 28256, 29648,
    // Micro versions
    36, 80, 132, 192,
];

// Error correction codewords per block. Micro rows index DetectionOnly as L
static ECC_PER_BLOCK: [[usize; 4]; 44] = [
    // Normal versions
    [7, 10, 13, 17],
    [10, 16, 22, 28],
    [15, 26, 18, 22],
    [20, 18, 26, 16],
    [26, 24, 18, 22],
    [18, 16, 24, 28],
    [20, 18, 18, 26],
    [24, 22, 22, 26],
    [30, 22, 20, 24],
    [18, 26, 24, 28],
    [20, 30, 28, 24],
    [24, 22, 26, 28],
    [26, 22, 24, 22],
    [30, 24, 20, 24],
    [22, 24, 30, 24],
    [24, 28, 24, 30],
    [28, 28, 28, 28],
    [30, 26, 28, 28],
    [28, 26, 26, 26],
    [28, 26, 30, 28],
    [28, 26, 28, 30],
    [28, 28, 30, 24],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [26, 28, 30, 30],
    [28, 28, 28, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    // Micro versions
    [2, 0, 0, 0],
    [5, 6, 0, 0],
    [6, 8, 0, 0],
    [8, 10, 14, 0],
];

// (block1 size, block1 count, block2 size, block2 count) of data codewords
static DATA_CODEWORDS_PER_BLOCK: [[(usize, usize, usize, usize); 4]; 44] = [
    // Normal versions
    [(19, 1, 0, 0), (16, 1, 0, 0), (13, 1, 0, 0), (9, 1, 0, 0)],
    [(34, 1, 0, 0), (28, 1, 0, 0), (22, 1, 0, 0), (16, 1, 0, 0)],
    [(55, 1, 0, 0), (44, 1, 0, 0), (17, 2, 0, 0), (13, 2, 0, 0)],
    [(80, 1, 0, 0), (32, 2, 0, 0), (24, 2, 0, 0), (9, 4, 0, 0)],
    [(108, 1, 0, 0), (43, 2, 0, 0), (15, 2, 16, 2), (11, 2, 12, 2)],
    [(68, 2, 0, 0), (27, 4, 0, 0), (19, 4, 0, 0), (15, 4, 0, 0)],
    [(78, 2, 0, 0), (31, 4, 0, 0), (14, 2, 15, 4), (13, 4, 14, 1)],
    [(97, 2, 0, 0), (38, 2, 39, 2), (18, 4, 19, 2), (14, 4, 15, 2)],
    [(116, 2, 0, 0), (36, 3, 37, 2), (16, 4, 17, 4), (12, 4, 13, 4)],
    [(68, 2, 69, 2), (43, 4, 44, 1), (19, 6, 20, 2), (15, 6, 16, 2)],
    [(81, 4, 0, 0), (50, 1, 51, 4), (22, 4, 23, 4), (12, 3, 13, 8)],
    [(92, 2, 93, 2), (36, 6, 37, 2), (20, 4, 21, 6), (14, 7, 15, 4)],
    [(107, 4, 0, 0), (37, 8, 38, 1), (20, 8, 21, 4), (11, 12, 12, 4)],
    [(115, 3, 116, 1), (40, 4, 41, 5), (16, 11, 17, 5), (12, 11, 13, 5)],
    [(87, 5, 88, 1), (41, 5, 42, 5), (24, 5, 25, 7), (12, 11, 13, 7)],
    [(98, 5, 99, 1), (45, 7, 46, 3), (19, 15, 20, 2), (15, 3, 16, 13)],
    [(107, 1, 108, 5), (46, 10, 47, 1), (22, 1, 23, 15), (14, 2, 15, 17)],
    [(120, 5, 121, 1), (43, 9, 44, 4), (22, 17, 23, 1), (14, 2, 15, 19)],
    [(113, 3, 114, 4), (44, 3, 45, 11), (21, 17, 22, 4), (13, 9, 14, 16)],
    [(107, 3, 108, 5), (41, 3, 42, 13), (24, 15, 25, 5), (15, 15, 16, 10)],
    [(116, 4, 117, 4), (42, 17, 0, 0), (22, 17, 23, 6), (16, 19, 17, 6)],
    [(111, 2, 112, 7), (46, 17, 0, 0), (24, 7, 25, 16), (13, 34, 0, 0)],
    [(121, 4, 122, 5), (47, 4, 48, 14), (24, 11, 25, 14), (15, 16, 16, 14)],
    [(117, 6, 118, 4), (45, 6, 46, 14), (24, 11, 25, 16), (16, 30, 17, 2)],
    [(106, 8, 107, 4), (47, 8, 48, 13), (24, 7, 25, 22), (15, 22, 16, 13)],
    [(114, 10, 115, 2), (46, 19, 47, 4), (22, 28, 23, 6), (16, 33, 17, 4)],
    [(122, 8, 123, 4), (45, 22, 46, 3), (23, 8, 24, 26), (15, 12, 16, 28)],
    [(117, 3, 118, 10), (45, 3, 46, 23), (24, 4, 25, 31), (15, 11, 16, 31)],
    [(116, 7, 117, 7), (45, 21, 46, 7), (23, 1, 24, 37), (15, 19, 16, 26)],
    [(115, 5, 116, 10), (47, 19, 48, 10), (24, 15, 25, 25), (15, 23, 16, 25)],
    [(115, 13, 116, 3), (46, 2, 47, 29), (24, 42, 25, 1), (15, 23, 16, 28)],
    [(115, 17, 0, 0), (46, 10, 47, 23), (24, 10, 25, 35), (15, 19, 16, 35)],
    [(115, 17, 116, 1), (46, 14, 47, 21), (24, 29, 25, 19), (15, 11, 16, 46)],
    [(115, 13, 116, 6), (46, 14, 47, 23), (24, 44, 25, 7), (16, 59, 17, 1)],
    [(121, 12, 122, 7), (47, 12, 48, 26), (24, 39, 25, 14), (15, 22, 16, 41)],
    [(121, 6, 122, 14), (47, 6, 48, 34), (24, 46, 25, 10), (15, 2, 16, 64)],
    [(122, 17, 123, 4), (46, 29, 47, 14), (24, 49, 25, 10), (15, 24, 16, 46)],
    [(122, 4, 123, 18), (46, 13, 47, 32), (24, 48, 25, 14), (15, 42, 16, 32)],
    [(117, 20, 118, 4), (47, 40, 48, 7), (24, 43, 25, 22), (15, 10, 16, 67)],
    [(118, 19, 119, 6), (47, 18, 48, 31), (24, 34, 25, 34), (15, 20, 16, 61)],
    // Micro versions
    [(3, 1, 0, 0), (0, 0, 0, 0), (0, 0, 0, 0), (0, 0, 0, 0)],
    [(5, 1, 0, 0), (4, 1, 0, 0), (0, 0, 0, 0), (0, 0, 0, 0)],
    [(11, 1, 0, 0), (9, 1, 0, 0), (0, 0, 0, 0), (0, 0, 0, 0)],
    [(16, 1, 0, 0), (14, 1, 0, 0), (10, 1, 0, 0), (0, 0, 0, 0)],
];
