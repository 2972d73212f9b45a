pub(crate) mod symbol;

use std::ops::Deref;

use symbol::SymbolGrid;

use crate::common::bitstream::BitStream;
use crate::common::codec::{
    pad_remaining_capacity, parse_eci_ranges, push_segment, push_terminator, Mode, Segment,
};
use crate::common::ec::ecc;
use crate::common::error::{QRError, QRResult};
use crate::common::mask::apply_best_mask;
use crate::common::metadata::{ECLevel, Version};
use crate::matrix::Matrix;

// Encoder
//------------------------------------------------------------------------------

// Accumulates segment bits for a fixed symbol; the matrix is built on demand
// and the accumulated stream survives the call
pub struct Encoder {
    version: Version,
    ec_level: ECLevel,
    bits: BitStream,
}

impl Encoder {
    pub fn new(version: Version, ec_level: ECLevel) -> QRResult<Self> {
        version.validate(ec_level)?;
        let capacity = version.data_bit_capacity(ec_level);
        Ok(Self { version, ec_level, bits: BitStream::new(capacity) })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn bit_stream(&self) -> &BitStream {
        &self.bits
    }

    // Parses ECI escapes, encodes the resulting segments and appends them,
    // but only if the whole call fits the remaining capacity. On any error
    // the accumulated stream is left untouched
    pub fn add_characters(&mut self, data: &[u8], mode: Mode) -> QRResult<()> {
        mode.check_support(self.version)?;

        let ranges = parse_eci_ranges(data)?;
        if matches!(self.version, Version::Micro(_)) && ranges.iter().any(|r| r.eci.is_some()) {
            return Err(QRError::EciNotAllowed);
        }

        let segments = ranges
            .iter()
            .map(|r| Segment {
                mode,
                eci: r.eci,
                data: &data[r.start..r.start + r.len],
                escaped: r.escaped,
            })
            .collect::<Vec<_>>();

        let candidate_len = segments.iter().map(|s| s.bit_len(self.version)).sum();
        let mut candidate = BitStream::new(candidate_len);
        for seg in &segments {
            push_segment(seg, self.version, &mut candidate)?;
        }
        debug_assert!(candidate.len() == candidate_len, "Candidate bit length was misjudged");

        if self.bits.len() + candidate.len() > self.bits.capacity() {
            return Err(QRError::DataTooLong);
        }
        self.bits.push_stream(&candidate);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.bits = BitStream::new(self.bits.capacity());
    }

    pub fn generate_matrix(&self) -> Matrix {
        let mut data = self.bits.clone();
        push_terminator(&mut data, self.version);
        pad_remaining_capacity(&mut data);
        debug_assert!(data.len() == data.capacity(), "Padding left the stream short");
        debug_assert!(
            data.data().len() == self.version.total_data_codewords(self.ec_level),
            "Padded stream doesn't match the block layout"
        );

        let payload = self.interleaved_payload(data.data());

        let mut symbol = SymbolGrid::new(self.version);
        symbol.draw_function_patterns();
        symbol.draw_payload(&payload);
        let mask = apply_best_mask(&mut symbol);
        symbol.draw_format_info(self.ec_level, mask);
        symbol.draw_version_info();
        symbol.into_matrix()
    }

    // Splits the padded data codewords into blocks, computes the error
    // correction codewords per block and interleaves both rounds. The final
    // data codeword of M1 and M3 symbols contributes only its high nibble
    fn interleaved_payload(&self, codewords: &[u8]) -> BitStream {
        let data_blocks = Self::blockify(codewords, self.version, self.ec_level);
        let ecc_count = self.version.ecc_per_block(self.ec_level);
        let ecc_blocks = data_blocks.iter().map(|b| ecc(b, ecc_count)).collect::<Vec<_>>();

        let mut payload = BitStream::new(self.version.data_module_count());
        let short_tail = matches!(self.version, Version::Micro(1 | 3));
        let interleaved = Self::interleave(&data_blocks);
        for (i, &codeword) in interleaved.iter().enumerate() {
            if short_tail && i == interleaved.len() - 1 {
                payload.push_bits(codeword >> 4, 4);
            } else {
                payload.push_bits(codeword, 8);
            }
        }
        for codeword in Self::interleave(&ecc_blocks) {
            payload.push_bits(codeword, 8);
        }
        payload
    }

    pub(crate) fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
        let (block1_size, block1_count, block2_size, block2_count) =
            version.data_codewords_per_block(ec_level);

        let total_block1_size = block1_size * block1_count;
        let total_size = total_block1_size + block2_size * block2_count;

        debug_assert!(
            total_size == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            total_size
        );

        let mut data_blocks = Vec::with_capacity(block1_count + block2_count);
        data_blocks.extend(data[..total_block1_size].chunks(block1_size));
        if block2_size > 0 {
            data_blocks.extend(data[total_block1_size..].chunks(block2_size));
        }
        data_blocks
    }

    pub(crate) fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().expect("Blocks is empty");
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
