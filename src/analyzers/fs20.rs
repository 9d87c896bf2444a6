//! FS20 / FHT-repeater / FHT: bit-serial MSB-first 9-bit groups (8 data bits
//! plus a trailing even-parity bit), with the checksum convention
//! distinguishing the three outcomes by which seed's running sum the
//! trailing byte matches.

use crate::analyzers::BitReader;
use crate::bucket::{Bucket, State};
use crate::checksum::{cksum1, even_parity_bit};
use crate::frame::{DataType, Frame};

const FS20_SEED: u8 = 6;
const FHT_SEED: u8 = 12;
const MAX_GROUPS: usize = crate::frame::MAX_OUT + 1;

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Collect {
		return None;
	}
	let total_bits = bucket.bit_len();
	if total_bits < 18 {
		return None;
	}
	let groups = total_bits / 9;
	if groups < 2 {
		return None;
	}

	let mut reader = BitReader::new(bucket);
	let mut bytes = [0u8; MAX_GROUPS];
	let mut n = 0usize;
	for _ in 0..groups.min(MAX_GROUPS) {
		let byte = reader.next_byte()?;
		let parity = reader.next_bit()?;
		if parity != even_parity_bit(byte) {
			return None;
		}
		bytes[n] = byte;
		n += 1;
	}
	if n < 2 {
		return None;
	}

	let payload = &bytes[..n - 1];
	let trailer = bytes[n - 1];
	let fs20_expected = cksum1(FS20_SEED, payload);

	let datatype = if fs20_expected == trailer {
		DataType::Fs20
	} else if fs20_expected.wrapping_add(1) == trailer {
		DataType::FhtRepeater
	} else if cksum1(FHT_SEED, payload) == trailer {
		DataType::Fht
	} else {
		return None;
	};

	let mut f = Frame::new(datatype);
	for &b in payload {
		f.push(b);
	}
	Some(f)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn push_group(b: &mut Bucket, byte: u8) {
		for i in (0..8).rev() {
			b.add_bit((byte >> i) & 1);
		}
		b.add_bit(even_parity_bit(byte));
	}

	#[test]
	fn classifies_a_plain_fs20_frame() {
		let mut b = Bucket::default();
		b.enter(State::Collect);
		let payload = [0x10u8, 0x22, 0x10, 0x0B];
		let trailer = cksum1(FS20_SEED, &payload);
		for &byte in &payload {
			push_group(&mut b, byte);
		}
		push_group(&mut b, trailer);

		let f = decode(&b).expect("well-formed FS20 frame should classify");
		assert_eq!(f.datatype, DataType::Fs20);
		assert_eq!(f.payload(), &payload);
	}

	#[test]
	fn classifies_an_fs20_repeater_frame() {
		let mut b = Bucket::default();
		b.enter(State::Collect);
		let payload = [0x10u8, 0x22, 0x10, 0x0B];
		let trailer = cksum1(FS20_SEED, &payload).wrapping_add(1);
		for &byte in &payload {
			push_group(&mut b, byte);
		}
		push_group(&mut b, trailer);

		let f = decode(&b).expect("repeater variant should still classify");
		assert_eq!(f.datatype, DataType::FhtRepeater);
	}

	#[test]
	fn classifies_an_fht_frame() {
		let mut b = Bucket::default();
		b.enter(State::Collect);
		let payload = [0x01u8, 0x02, 0x03];
		let trailer = cksum1(FHT_SEED, &payload);
		for &byte in &payload {
			push_group(&mut b, byte);
		}
		push_group(&mut b, trailer);

		let f = decode(&b).expect("FHT frame should classify");
		assert_eq!(f.datatype, DataType::Fht);
	}

	#[test]
	fn rejects_a_parity_error() {
		let mut b = Bucket::default();
		b.enter(State::Collect);
		push_group(&mut b, 0x10);
		push_group(&mut b, 0x22);
		// Flip the last data bit written without fixing up parity.
		b.data[1] ^= 1;
		assert_eq!(decode(&b), None);
	}
}
