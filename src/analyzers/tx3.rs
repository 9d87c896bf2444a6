//! TX3: gated on an exact write-cursor position (4 complete bytes plus 6 bits
//! of a 5th). First byte's top nibble must read the fixed `0xA` marker; the
//! fifth byte only ever has 6 real bits, left-shifted into its top 6 bit
//! positions. Checksum is a sum-of-nibbles-mod-16 over everything but the
//! last nibble.
//!
//! The fifth byte is sometimes described as "7 bits shifted into MSB", but
//! the write-cursor gate (`byteIdx==4, bitIdx==1`) only ever leaves 6 real
//! bits written into that byte; 6 bits shifted by 2 is what's implemented
//! here.

use crate::analyzers::BitReader;
use crate::bucket::{Bucket, State};
use crate::consts::tx3::START_NIBBLE;
use crate::frame::{DataType, Frame};

pub(crate) fn decode(bucket: &Bucket) -> Option<Frame> {
	if bucket.state != State::Collect || !(bucket.byte_idx == 4 && bucket.bit_idx == 1) {
		return None;
	}
	let mut reader = BitReader::new(bucket);

	let byte0 = reader.next_byte()?;
	if (byte0 >> 4) != START_NIBBLE {
		return None;
	}
	let byte1 = reader.next_byte()?;
	let byte2 = reader.next_byte()?;
	let byte3 = reader.next_byte()?;
	let tail = reader.next_bits(6)?;
	let byte4 = tail << 2;

	let nibbles = [
		byte0 >> 4,
		byte0 & 0xF,
		byte1 >> 4,
		byte1 & 0xF,
		byte2 >> 4,
		byte2 & 0xF,
		byte3 >> 4,
		byte3 & 0xF,
		byte4 >> 4,
	];
	let final_nibble = byte4 & 0xF;
	let sum = nibbles.iter().fold(0u8, |acc, &n| acc.wrapping_add(n)) & 0x0F;
	if sum != final_nibble {
		return None;
	}

	let mut f = Frame::new(DataType::Tx3);
	for &b in &[byte0, byte1, byte2, byte3, byte4] {
		f.push(b);
	}
	Some(f)
}
