#![allow(clippy::items_after_test_module)]

pub mod builder;
mod common;
mod matrix;

pub use builder::Encoder;
pub use common::bitstream::BitStream;
pub use common::codec::Mode;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Version};
pub use matrix::Matrix;
