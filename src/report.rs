//! Runtime-configurable report flags and protocol capability set.
//!
//! `txReport` is modeled as a raw bitfield conceptually, but exposed here as
//! a typed `bitflags!` set so call sites name `TxReport::RSSI` instead of a
//! magic bit position. `Capabilities` plays the role compile-time `#ifdef`s
//! per protocol would otherwise play: which analyzers the classifier is
//! allowed to try, decided once at boot instead of at build time.

use bitflags::bitflags;

bitflags! {
	/// The runtime-configurable report/debug flag set.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct TxReport: u8 {
		/// Only emit frames the classifier recognized (gates the emitter entirely).
		const KNOWN     = 0b0000_0001;
		/// Treat every accepted frame as already a repeat (used by re-transmitters).
		const REPEATED  = 0b0000_0010;
		/// Suppress the FHT synthetic-repeat heuristic.
		const FHTPROTO  = 0b0000_0100;
		/// Append an RSSI byte to every emitted frame.
		const RSSI      = 0b0000_1000;
		/// Emit raw bit-timing debug lines.
		const BITS      = 0b0001_0000;
		/// Emit the monitor (hightime/lowtime) debug line.
		const MONITOR   = 0b0010_0000;
		/// Write the monitor line's wave timings in decimal rather than hex.
		const BINTIME   = 0b0100_0000;
		/// Mirror debug output to an LCD side channel.
		const LCDMON    = 0b1000_0000;
	}
}

bitflags! {
	/// Which protocol analyzers the classifier is allowed to try, and in
	/// what combination the sync detector may settle into IT/ESA/HMS states.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Capabilities: u16 {
		const IT        = 1 << 0;
		const ITV3      = 1 << 1;
		const TCM97001  = 1 << 2;
		const REVOLT    = 1 << 3;
		const ESA       = 1 << 4;
		const FS20      = 1 << 5;
		const EM        = 1 << 6;
		const HMS       = 1 << 7;
		const TX3       = 1 << 8;
		const KS300     = 1 << 9;
		const HORMANN   = 1 << 10;
	}
}

impl Default for Capabilities {
	/// Every protocol enabled except Hörmann, whose decoder is speculative
	/// and should only run when a caller explicitly opts in.
	fn default() -> Self {
		Capabilities::all() & !Capabilities::HORMANN
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_capabilities_exclude_hormann() {
		assert!(!Capabilities::default().contains(Capabilities::HORMANN));
		assert!(Capabilities::default().contains(Capabilities::FS20));
	}
}
