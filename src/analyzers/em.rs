//! EM: MSB-first framing overall, but each byte's bits arrive LSB-first on
//! the wire and are un-reversed on the way in (`obi`-th received bit lands at
//! output position `7-obi`); every byte is followed by an in-band stop bit
//! that must read 1.

use crate::analyzers::BitReader;
use crate::bucket::{Bucket, State};
use crate::checksum::xor_all;
use crate::frame::{DataType, Frame};

const EM_BYTES: usize = 9;

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Collect {
		return None;
	}
	let mut reader = BitReader::new(bucket);
	let mut bytes = [0u8; EM_BYTES];

	for byte in bytes.iter_mut() {
		let mut v = 0u8;
		for obi in 0..8u8 {
			let bit = reader.next_bit()?;
			v |= bit << (7 - obi);
		}
		let stop = reader.next_bit()?;
		if stop != 1 {
			return None;
		}
		*byte = v;
	}
	if reader.remaining() != 0 {
		return None;
	}
	if xor_all(&bytes[..8]) != bytes[8] {
		return None;
	}

	let mut f = Frame::new(DataType::Em);
	for &b in &bytes {
		f.push(b);
	}
	Some(f)
}
