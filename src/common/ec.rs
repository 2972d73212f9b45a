// GF(256) arithmetic and Reed-Solomon error correction codewords.
// Field is generated by the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
// (0x11d) with alpha = 2

// Performs polynomial long division of the data polynomial, shifted by the
// generator degree, against the generator polynomial. The remainder
// coefficients are the error correction codewords, most significant first
pub fn ecc(block: &[u8], ecc_count: usize) -> Vec<u8> {
    let len = block.len();
    let gen_poly = generator_polynomial(ecc_count);

    let mut res = block.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i] as usize;
        if lead_coeff == 0 {
            continue;
        }

        let log_lead_coeff = LOG_TABLE[lead_coeff] as usize;
        for (u, v) in res[i + 1..].iter_mut().zip(gen_poly.iter()) {
            let mut log_sum = *v as usize + log_lead_coeff;
            debug_assert!(log_sum < 510, "Log sum has crossed 510: {log_sum}");
            if log_sum >= 255 {
                log_sum -= 255;
            }
            *u ^= EXP_TABLE[log_sum];
        }
    }

    res.split_off(len)
}

// Coefficient exponents of the generator polynomial of the given degree,
// excluding the leading coefficient alpha^0
fn generator_polynomial(ecc_count: usize) -> &'static [u8] {
    match ecc_count {
        2 => &[25, 1],
        5 => &[113, 164, 166, 119, 10],
        6 => &[166, 0, 134, 5, 176, 15],
        7 => &[87, 229, 146, 149, 238, 102, 21],
        8 => &[175, 238, 208, 249, 215, 252, 196, 28],
        10 => &[251, 67, 46, 61, 118, 70, 64, 94, 32, 45],
        13 => &[74, 152, 176, 100, 86, 100, 106, 104, 130, 218, 206, 140, 78],
        14 => &[199, 249, 155, 48, 190, 124, 218, 137, 216, 87, 207, 59, 22, 91],
        15 => &[8, 183, 61, 91, 202, 37, 51, 58, 58, 237, 140, 124, 5, 99, 105],
        16 => &[120, 104, 107, 109, 102, 161, 76, 3, 91, 191, 147, 169, 182, 194, 225, 120],
        17 => &[43, 139, 206, 78, 43, 239, 123, 206, 214, 147, 24, 99, 150, 39, 243, 163, 136],
        18 => &[
            215, 234, 158, 94, 184, 97, 118, 170, 79, 187, 152, 148, 252, 179, 5, 98, 96, 153,
        ],
        20 => &[
            17, 60, 79, 50, 61, 163, 26, 187, 202, 180, 221, 225, 83, 239, 156, 164, 212, 212,
            188, 190,
        ],
        22 => &[
            210, 171, 247, 242, 93, 230, 14, 109, 221, 53, 200, 74, 8, 172, 98, 80, 219, 134,
            160, 105, 165, 231,
        ],
        24 => &[
            229, 121, 135, 48, 211, 117, 251, 126, 159, 180, 169, 152, 192, 226, 228, 218, 111,
            0, 117, 232, 87, 96, 227, 21,
        ],
        26 => &[
            173, 125, 158, 2, 103, 182, 118, 17, 145, 201, 111, 28, 165, 53, 161, 21, 245, 142,
            13, 102, 48, 227, 153, 145, 218, 70,
        ],
        28 => &[
            168, 223, 200, 104, 224, 234, 108, 180, 110, 190, 195, 147, 205, 27, 232, 201, 21,
            43, 245, 87, 42, 195, 212, 119, 242, 37, 9, 123,
        ],
        30 => &[
            41, 173, 145, 152, 216, 31, 179, 182, 50, 48, 110, 86, 239, 96, 222, 125, 42, 173,
            226, 193, 224, 130, 156, 37, 251, 216, 238, 40, 192, 180,
        ],
        32 => &[
            10, 6, 106, 190, 249, 167, 4, 67, 209, 138, 138, 32, 242, 123, 89, 27, 120, 185, 80,
            156, 38, 69, 171, 60, 28, 222, 80, 52, 254, 185, 220, 241,
        ],
        34 => &[
            111, 77, 146, 94, 26, 21, 108, 19, 105, 94, 113, 193, 86, 140, 163, 125, 58, 158,
            229, 239, 218, 103, 56, 70, 114, 61, 183, 129, 167, 13, 98, 62, 129, 51,
        ],
        36 => &[
            200, 183, 98, 16, 172, 31, 246, 234, 60, 152, 115, 0, 167, 152, 113, 248, 238, 107,
            18, 63, 218, 37, 87, 210, 105, 177, 120, 74, 121, 196, 117, 251, 113, 233, 30, 120,
        ],
        40 => &[
            59, 116, 79, 161, 252, 98, 128, 205, 128, 161, 247, 57, 163, 56, 235, 106, 53, 26,
            187, 174, 226, 104, 170, 7, 175, 35, 181, 114, 88, 41, 47, 163, 125, 134, 72, 20,
            232, 53, 35, 15,
        ],
        42 => &[
            250, 103, 221, 230, 25, 18, 137, 231, 0, 3, 58, 242, 221, 191, 110, 84, 230, 8, 188,
            106, 96, 147, 15, 131, 139, 34, 101, 223, 39, 101, 213, 199, 237, 254, 201, 123,
            171, 162, 194, 117, 50, 96,
        ],
        44 => &[
            190, 7, 61, 121, 71, 246, 69, 55, 168, 188, 89, 243, 191, 25, 72, 123, 9, 145, 14,
            247, 1, 238, 44, 78, 143, 62, 224, 126, 118, 114, 68, 163, 52, 194, 217, 147, 204,
            169, 37, 130, 113, 102, 73, 181,
        ],
        46 => &[
            112, 94, 88, 112, 253, 224, 202, 115, 187, 99, 89, 5, 54, 113, 129, 44, 58, 16, 135,
            216, 169, 211, 36, 1, 4, 96, 60, 241, 73, 104, 234, 8, 249, 245, 119, 174, 52, 25,
            157, 224, 43, 202, 223, 19, 82, 15,
        ],
        48 => &[
            228, 25, 196, 130, 211, 146, 60, 24, 251, 90, 39, 102, 240, 61, 178, 63, 46, 123,
            115, 18, 221, 111, 135, 160, 182, 205, 107, 206, 95, 150, 120, 184, 91, 21, 247,
            156, 140, 238, 191, 11, 94, 227, 84, 50, 163, 39, 34, 108,
        ],
        50 => &[
            232, 125, 157, 161, 164, 9, 118, 46, 209, 99, 203, 193, 35, 3, 209, 111, 195, 242,
            203, 225, 46, 13, 32, 160, 126, 209, 130, 160, 242, 215, 242, 75, 77, 42, 189, 32,
            113, 65, 124, 69, 228, 114, 235, 175, 124, 170, 215, 232, 133, 205,
        ],
        52 => &[
            116, 50, 86, 186, 50, 220, 251, 89, 192, 46, 86, 127, 124, 19, 184, 233, 151, 215,
            22, 14, 59, 145, 37, 242, 203, 134, 254, 89, 190, 94, 59, 65, 124, 113, 100, 233,
            235, 121, 22, 76, 86, 97, 39, 242, 200, 220, 101, 33, 239, 254, 113, 51,
        ],
        54 => &[
            183, 26, 201, 87, 210, 221, 113, 21, 46, 65, 45, 50, 238, 184, 249, 225, 102, 58,
            209, 218, 109, 165, 26, 95, 184, 192, 52, 245, 35, 254, 238, 175, 172, 79, 123, 25,
            122, 43, 120, 108, 215, 80, 128, 201, 235, 8, 153, 59, 101, 31, 198, 76, 31, 156,
        ],
        56 => &[
            106, 120, 107, 157, 164, 216, 112, 116, 2, 91, 248, 163, 36, 201, 202, 229, 6, 144,
            254, 155, 135, 208, 170, 209, 12, 139, 127, 142, 182, 249, 177, 174, 190, 28, 10,
            85, 239, 184, 101, 124, 152, 206, 96, 23, 163, 61, 27, 196, 247, 151, 154, 202, 207,
            20, 61, 10,
        ],
        58 => &[
            82, 116, 26, 247, 66, 27, 62, 107, 252, 182, 200, 185, 235, 55, 251, 242, 210, 144,
            154, 237, 176, 141, 192, 248, 152, 249, 206, 85, 253, 142, 65, 165, 125, 23, 24, 30,
            122, 240, 214, 6, 129, 218, 29, 145, 127, 134, 206, 245, 117, 29, 41, 63, 159, 142,
            233, 125, 148, 123,
        ],
        60 => &[
            107, 140, 26, 12, 9, 141, 243, 197, 226, 197, 219, 45, 211, 101, 219, 120, 28, 181,
            127, 6, 100, 247, 2, 205, 198, 57, 115, 219, 101, 109, 160, 82, 37, 38, 238, 49,
            160, 209, 121, 86, 11, 124, 30, 181, 84, 25, 194, 87, 65, 102, 190, 220, 70, 27,
            209, 16, 89, 7, 33, 240,
        ],
        62 => &[
            65, 202, 113, 98, 71, 223, 248, 118, 214, 94, 0, 122, 37, 23, 2, 228, 58, 121, 7,
            105, 135, 78, 243, 118, 70, 76, 223, 89, 72, 50, 70, 111, 194, 17, 212, 126, 181,
            35, 221, 117, 235, 11, 229, 149, 147, 123, 213, 40, 115, 6, 200, 100, 26, 246, 182,
            218, 127, 215, 36, 186, 110, 106,
        ],
        64 => &[
            45, 51, 175, 9, 7, 158, 159, 49, 68, 119, 92, 123, 177, 204, 187, 254, 200, 78, 141,
            149, 119, 26, 127, 53, 160, 93, 199, 212, 29, 24, 145, 156, 208, 150, 218, 209, 4,
            216, 91, 47, 184, 146, 47, 140, 195, 195, 125, 242, 238, 63, 99, 108, 140, 230, 242,
            31, 204, 11, 178, 243, 217, 156, 213, 231,
        ],
        66 => &[
            5, 118, 222, 180, 136, 136, 162, 51, 46, 117, 13, 215, 81, 17, 139, 247, 197, 171,
            95, 173, 65, 137, 178, 68, 111, 95, 101, 41, 72, 214, 169, 197, 95, 7, 44, 154, 77,
            111, 236, 40, 121, 143, 63, 87, 80, 253, 240, 126, 217, 77, 34, 232, 106, 50, 168,
            82, 76, 146, 67, 106, 171, 25, 132, 93, 45, 105,
        ],
        68 => &[
            247, 159, 223, 33, 224, 93, 77, 70, 90, 160, 32, 254, 43, 150, 84, 101, 190, 205,
            133, 52, 60, 202, 165, 220, 203, 151, 93, 84, 15, 84, 253, 173, 160, 89, 227, 52,
            199, 97, 95, 231, 52, 177, 41, 125, 137, 241, 166, 225, 118, 2, 54, 32, 82, 215,
            175, 198, 43, 238, 235, 27, 101, 184, 127, 3, 5, 8, 163, 238,
        ],
        _ => unreachable!("No generator polynomial of degree {ecc_count}"),
    }
}

#[cfg(test)]
mod ec_tests {
    use super::{ecc, EXP_TABLE, LOG_TABLE};

    #[test]
    fn test_log_exp_inverse() {
        for v in 1..=255usize {
            assert_eq!(EXP_TABLE[LOG_TABLE[v] as usize] as usize, v);
        }
        assert_eq!(EXP_TABLE[255], 1);
    }

    // Data codewords of the standard's Annex I symbol: "01234567" at 1-M
    #[test]
    fn test_ecc_iso_numeric_example() {
        let data = [
            0x10, 0x20, 0x0c, 0x56, 0x61, 0x80, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11,
            0xec, 0x11,
        ];
        assert_eq!(ecc(&data, 10), b"\xa5\x24\xd4\xc1\xed\x36\xc7\x87\x2c\x55");
    }

    #[test]
    fn test_ecc_degree_5() {
        assert_eq!(ecc(b"31415926535", 5), b"\x5b\xad\x48\xf6\x74");
    }

    #[test]
    fn test_ecc_degree_13() {
        assert_eq!(
            ecc(b"qrsmith forges symbols", 13),
            b"\xed\x45\x89\x01\x8e\xe1\x14\xdc\x2a\x4f\x0e\x18\xe3"
        );
    }

    #[test]
    fn test_ecc_degree_17() {
        assert_eq!(
            ecc(b"GF(256) long division", 17),
            b"\x9b\xd1\x0c\x7d\xcc\x1a\xf0\x8c\x2d\xf4\x4e\xb4\x80\x97\x3c\xb1\x1a"
        );
    }

    // M1 blocks end on a codeword that only fills the high nibble
    #[test]
    fn test_ecc_half_codeword_block() {
        assert_eq!(ecc(&[0xa0, 0x62, 0x20], 2), b"\x7d\x9f");
    }

    #[test]
    fn test_zero_remainder_of_codeword_polynomial() {
        let data = b"31415926535";
        let mut codeword = data.to_vec();
        codeword.extend(ecc(data, 5));
        assert_eq!(ecc(&codeword, 5), vec![0; 5]);
    }

    // Appending the computed codewords makes the polynomial divisible by the
    // generator, so a second division must leave an all zero remainder
    #[test]
    fn test_zero_remainder_of_random_blocks() {
        let counts = [2, 5, 6, 7, 8, 10, 13, 14, 15, 16, 17, 18, 20, 22, 24, 26, 28, 30];
        let mut state: u32 = 0x2c9277b5;
        let mut next = move || {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 24) as u8
        };
        for i in 0..1000 {
            let n = counts[i % counts.len()];
            let k = 1 + next() as usize % 123;
            let data = (0..k).map(|_| next()).collect::<Vec<_>>();
            let mut codeword = data.clone();
            codeword.extend(ecc(&data, n));
            assert_eq!(ecc(&codeword, n), vec![0; n], "k {k}, n {n}");
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

// alpha^i for i in 0..=255; the final entry wraps back to alpha^0
static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222,
    161, 95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211,
    187, 107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34,
    68, 136, 13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118,
    236, 197, 151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21,
    42, 84, 168, 77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209,
    191, 99, 198, 145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150,
    49, 98, 196, 149, 55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56,
    112, 224, 221, 167, 83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172,
    69, 138, 9, 18, 36, 72, 144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44,
    88, 176, 125, 250, 233, 207, 131, 27, 54, 108, 216, 173, 71, 142, 1,
];

// log of every nonzero field element; index 0 is a filler
static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141,
    239, 129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147,
    142, 218, 240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228,
    114, 166, 6, 191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208,
    148, 206, 143, 150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72,
    126, 110, 107, 58, 40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212,
    229, 172, 115, 243, 167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197,
    254, 24, 227, 165, 153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63,
    209, 91, 149, 188, 207, 205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20,
    42, 93, 158, 132, 60, 57, 83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196,
    23, 73, 236, 127, 12, 111, 246, 108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187,
    204, 62, 90, 203, 89, 95, 176, 156, 169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79,
    174, 213, 233, 230, 231, 173, 232, 116, 214, 244, 234, 168, 80, 88, 175,
];
