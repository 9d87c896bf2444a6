//! Wire-level timing constants, all expressed in the scaled (raw-counter
//! `>>4`) domain the capture stage already operates in unless noted
//! otherwise.

/// Default inter-frame silence threshold, in raw microseconds (the silence
/// timer runs on the unscaled timer, not the `>>4` domain used for wave
/// comparisons).
pub const SILENCE_DEFAULT_US: u16 = 4000;
pub const SILENCE_TCM97001_US: u16 = 4600;
pub const SILENCE_ESA_US: u16 = 1000;

/// Maximum gap, in ticks, between two occurrences of an identical frame for
/// them to be folded into one transmission.
pub const REPTIME: u32 = 2000;

pub mod tcm97001 {
	pub const HIGH_MIN: u16 = 420 / 16;
	pub const HIGH_MAX: u16 = 530 / 16;
	pub const LOW_MIN: u16 = 8500 / 16;
	pub const LOW_MAX: u16 = 9000 / 16;
	pub const BIT0_LOW_MIN: u16 = 110;
	pub const BIT0_LOW_MAX: u16 = 140;
	pub const BIT1_LOW_MIN: u16 = 230;
	pub const BIT1_LOW_MAX: u16 = 270;
}

pub mod it {
	pub const HIGH_MIN: u16 = 140 / 16;
	pub const HIGH_MAX: u16 = 600 / 16;
	pub const LOW_MIN: u16 = 2500 / 16;
	pub const LOW_MAX: u16 = 17000 / 16;
	/// Threshold on the very first ITV3 edge's low time that marks it as a
	/// start marker rather than a data bit.
	pub const ITV3_START_LOW_MIN: u16 = 2400 / 16;
}

pub mod revolt {
	pub const HIGH_MIN: u16 = 9000 / 16;
	pub const HIGH_MAX: u16 = 12000 / 16;
	pub const LOW_MIN: u16 = 150 / 16;
	pub const LOW_MAX: u16 = 540 / 16;
	/// Bit-demod threshold: high times below this decode to 0.
	pub const BIT_HIGH_THRESHOLD: u16 = 11;
}

pub mod sync_detect {
	/// A pulse wider than this on either edge can't be a generic sync train
	/// and is rejected outright.
	pub const REJECT_ABOVE: u16 = 1600 / 16;
	pub const MIN_SYNC_COUNT: u8 = 4;
	pub const HMS_MIN_SYNC_COUNT: u8 = 12;
	pub const HMS_MIN_SUM: u16 = 1600 / 16;
	pub const ESA_MIN_SYNC_COUNT: u8 = 10;
	pub const ESA_MAX_SUM: u16 = 600 / 16;
}

pub mod hms {
	pub const WINDOW_MIN: u16 = 750 / 16;
	pub const WINDOW_MAX: u16 = 1250 / 16;
	pub const MIN_BITS: usize = 69;
}

pub mod esa {
	pub const WINDOW_MIN: u16 = 375 / 16;
	pub const WINDOW_MAX: u16 = 625 / 16;
	pub const BITLEN_SHORT: usize = 144;
	pub const BITLEN_LONG: usize = 160;
	/// Initial rolling-XOR salt for the first byte of the cipher.
	pub const SALT_SEED: u8 = 0x89;
	/// Additive constant folded into the trailing-CRC verification.
	pub const CRC_CONST: u16 = 0x89;
}

pub mod hormann {
	pub const ZERO_HIGH: u16 = 960 / 16;
	pub const ZERO_LOW: u16 = 480 / 16;
	/// Raw bytes copied verbatim once the preamble and trailing bit match.
	pub const RAW_BYTES: usize = 5;
}

pub mod ks300 {
	use crate::bucket::MAXMSG;

	/// Upper bound on how many nibbles (including the trailing checksum
	/// byte's two nibbles and a possible odd trailing half-byte) one frame
	/// can hold; sized off `MAXMSG` nibble pairs.
	pub const MAX_NIBBLES: usize = MAXMSG * 2;
	pub const MAX_BYTES: usize = MAXMSG;
}

pub mod tx3 {
	/// Top nibble every valid TX3 first byte must carry.
	pub const START_NIBBLE: u8 = 0xA;
}

/// FHT control-byte values the deduplicator treats as synthetic repeats
/// unless `REP_FHTPROTO` opts out of the heuristic. These are the
/// conventional FHT80b command-byte values; do not add more without
/// confirming them against a real FHT80b session trace.
pub mod fht {
	pub const ACK: u8 = 0x4B;
	pub const ACK2: u8 = 0x54;
	pub const CAN_XMIT: u8 = 0x53;
	pub const CAN_RCV: u8 = 0x5C;
	pub const START_XMIT: u8 = 0x2C;
	pub const END_XMIT: u8 = 0x20;
}
