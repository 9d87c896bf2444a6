//! Frame analyzers: per-protocol bit-field extraction and checksum
//! validation, tried against a committed bucket in a fixed order. The first
//! analyzer whose precondition and checksum both hold wins; nothing downstream
//! second-guesses that choice.

mod em;
mod esa;
mod fs20;
mod hms;
mod hormann;
mod intertechno;
mod ks300;
mod revolt;
mod tcm97001;
mod tx3;

use crate::bucket::Bucket;
use crate::frame::Frame;
use crate::report::Capabilities;

/// Sequential bit reader over a bucket's packed MSB-first bitstream. Analyzers
/// reinterpret the raw bit-packed `data[]` according to their own per-byte
/// grouping (parity bits, stop bits, nibble separators) rather than treating
/// `data[]` as already byte-aligned payload.
pub(crate) struct BitReader<'a> {
	data: &'a [u8],
	pos: usize,
	len: usize,
}

impl<'a> BitReader<'a> {
	pub(crate) fn new(bucket: &'a Bucket) -> Self {
		BitReader {
			data: &bucket.data,
			pos: 0,
			len: bucket.bit_len(),
		}
	}

	pub(crate) fn remaining(&self) -> usize {
		self.len - self.pos
	}

	pub(crate) fn next_bit(&mut self) -> Option<u8> {
		if self.pos >= self.len {
			return None;
		}
		let byte = self.data[self.pos / 8];
		let bit_pos = 7 - (self.pos % 8);
		let bit = (byte >> bit_pos) & 1;
		self.pos += 1;
		Some(bit)
	}

	/// Reads 8 bits MSB first into a byte.
	pub(crate) fn next_byte(&mut self) -> Option<u8> {
		let mut v = 0u8;
		for _ in 0..8 {
			v = (v << 1) | self.next_bit()?;
		}
		Some(v)
	}

	/// Reads `n` (≤ 8) bits MSB first into the low bits of a byte.
	pub(crate) fn next_bits(&mut self, n: u32) -> Option<u8> {
		let mut v = 0u8;
		for _ in 0..n {
			v = (v << 1) | self.next_bit()?;
		}
		Some(v)
	}
}

/// One slot in the fixed classifier order: a capability gate plus the
/// decode function it guards.
struct AnalyzerSlot {
	cap: Capabilities,
	decode: fn(&Bucket) -> Option<Frame>,
}

/// This order is load-bearing: IT/ITV3 and TCM97001 only ever see 3- or
/// 8-byte state-gated buckets and are cheap to reject, so they run first;
/// KS300 and Hörmann both synthesize a trailing bit and are tried last
/// precisely because that synthesis is speculative.
const ANALYZERS: &[AnalyzerSlot] = &[
	AnalyzerSlot { cap: Capabilities::IT, decode: intertechno::decode_v1 },
	AnalyzerSlot { cap: Capabilities::ITV3, decode: intertechno::decode_v3 },
	AnalyzerSlot { cap: Capabilities::TCM97001, decode: tcm97001::decode },
	AnalyzerSlot { cap: Capabilities::REVOLT, decode: revolt::decode },
	AnalyzerSlot { cap: Capabilities::ESA, decode: esa::decode },
	AnalyzerSlot { cap: Capabilities::FS20, decode: fs20::decode },
	AnalyzerSlot { cap: Capabilities::EM, decode: em::decode },
	AnalyzerSlot { cap: Capabilities::HMS, decode: hms::decode },
	AnalyzerSlot { cap: Capabilities::TX3, decode: tx3::decode },
	AnalyzerSlot { cap: Capabilities::KS300, decode: ks300::decode },
	AnalyzerSlot { cap: Capabilities::HORMANN, decode: hormann::decode },
];

/// Runs the classifier table against a committed bucket, in fixed order,
/// honoring `caps` as the runtime-enabled subset. Returns the first match.
pub fn classify(bucket: &Bucket, caps: Capabilities) -> Option<Frame> {
	for slot in ANALYZERS {
		if !caps.contains(slot.cap) {
			continue;
		}
		if let Some(frame) = (slot.decode)(bucket) {
			return Some(frame);
		}
	}
	None
}
