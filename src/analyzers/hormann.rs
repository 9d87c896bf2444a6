//! Hörmann: the last-resort classifier, gated on a specific write-cursor
//! position and a zero-reference wave match. This decoder is speculative:
//! its gating position and trailing-bit synthesis are preserved verbatim
//! rather than rationalized, and it stays behind its own `Capabilities`
//! flag so it only runs when explicitly opted into.

use crate::bucket::{Bucket, State};
use crate::consts::hormann;
use crate::frame::{DataType, Frame};
use crate::wave::{wave_equals, TDIFF};

const RAW_BYTES: usize = hormann::RAW_BYTES;

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Collect || !(bucket.byte_idx == 4 && bucket.bit_idx == 4) {
		return None;
	}
	if !wave_equals(bucket.zero, hormann::ZERO_HIGH, hormann::ZERO_LOW, TDIFF) {
		return None;
	}

	// Speculatively extends the bucket by one bit, the same projection
	// trick KS300 uses, before copying the raw bytes out.
	let synth = u8::from(wave_equals(bucket.one, bucket.last_high, bucket.one.low, TDIFF));
	let mut trial = *bucket;
	trial.add_bit(synth);

	let mut f = Frame::new(DataType::Hormann);
	for &b in &trial.data[..RAW_BYTES] {
		f.push(b);
	}
	Some(f)
}
