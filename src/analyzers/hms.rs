//! HMS: six MSB-first payload bytes, each followed by a correct even-parity
//! bit and a literal in-band 0, then one CRC byte (XOR of the six) with its
//! own parity bit.

use crate::analyzers::BitReader;
use crate::bucket::{Bucket, State};
use crate::checksum::{even_parity_bit, xor_all};
use crate::consts::hms::MIN_BITS;
use crate::frame::{DataType, Frame};

const PAYLOAD_BYTES: usize = 6;

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Hms || bucket.bit_len() < MIN_BITS {
		return None;
	}
	let mut reader = BitReader::new(bucket);
	let mut bytes = [0u8; PAYLOAD_BYTES];

	for byte in bytes.iter_mut() {
		let v = reader.next_byte()?;
		let parity = reader.next_bit()?;
		if parity != even_parity_bit(v) {
			return None;
		}
		let stop = reader.next_bit()?;
		if stop != 0 {
			return None;
		}
		*byte = v;
	}

	let crc = reader.next_byte()?;
	let parity = reader.next_bit()?;
	if parity != even_parity_bit(crc) {
		return None;
	}
	if xor_all(&bytes) != crc {
		return None;
	}

	let mut f = Frame::new(DataType::Hms);
	for &b in &bytes {
		f.push(b);
	}
	f.push(crc);
	Some(f)
}
