//! Intertechno V1 (fixed-code) and V3 (rolling/dimmer) analyzers. Both are
//! gated purely on bucket state and write cursor; their bytes are already
//! fully decoded bits by the time the demodulator hands the bucket off, so
//! there is no checksum here to validate, just a length check.

use crate::bucket::{Bucket, State};
use crate::frame::{DataType, Frame};

/// V1: exactly 3 complete bytes (24 bits), no partial byte in progress.
pub(crate) fn decode_v1(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::It || !(bucket.byte_idx == 3 && bucket.bit_idx == 7) {
		return None;
	}
	let mut f = Frame::new(DataType::It);
	for &b in &bucket.data[..3] {
		f.push(b);
	}
	Some(f)
}

/// V3: exactly 8 complete bytes (64 bits).
pub(crate) fn decode_v3(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::ItV3 || !(bucket.byte_idx == 8 && bucket.bit_idx == 7) {
		return None;
	}
	let mut f = Frame::new(DataType::ItV3);
	for &b in &bucket.data[..8] {
		f.push(b);
	}
	Some(f)
}
