//! TCM97001: gated on state, exactly 3 complete bytes, copied verbatim. It
//! has no checksum of its own; two-copy agreement is the deduplicator's
//! job, not this analyzer's.

use crate::bucket::{Bucket, State};
use crate::frame::{DataType, Frame};

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Tcm97001 || !(bucket.byte_idx == 3 && bucket.bit_idx == 7) {
		return None;
	}
	let mut f = Frame::new(DataType::Tcm97001);
	for &b in &bucket.data[..3] {
		f.push(b);
	}
	Some(f)
}
