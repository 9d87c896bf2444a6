//! Revolt: 12 complete bytes plus 7 bits of a 13th in progress, with a
//! running-sum checksum over the first 10 bytes against the 12th.

use crate::bucket::{Bucket, State};
use crate::checksum::cksum1;
use crate::frame::{DataType, Frame};

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Revolt || !(bucket.byte_idx == 12 && bucket.bit_idx == 0) {
		return None;
	}
	if cksum1(0, &bucket.data[0..10]) != bucket.data[11] {
		return None;
	}
	let mut f = Frame::new(DataType::Revolt);
	for &b in &bucket.data[..12] {
		f.push(b);
	}
	Some(f)
}
