//! Deduplicator: suppresses immediate retransmissions of the same frame,
//! with IT and TCM97001 inverted to require two identical copies before
//! either is accepted.

use crate::consts::{fht, REPTIME};
use crate::frame::{DataType, Frame, MAX_OUT};
use crate::report::TxReport;

/// Repeat-filter state, persisted across frames until the receiver is
/// reset: the last payload seen and when, plus the `isRep`/`isNotRep`
/// latches.
#[derive(Debug, Clone, Copy)]
pub struct RepeatFilter {
	roby: u8,
	robuf: [u8; MAX_OUT],
	rep_time: u32,
	is_rep: bool,
	is_not_rep: bool,
}

impl Default for RepeatFilter {
	fn default() -> Self {
		RepeatFilter {
			roby: 0,
			robuf: [0; MAX_OUT],
			rep_time: 0,
			is_rep: false,
			is_not_rep: false,
		}
	}
}

impl RepeatFilter {
	pub const fn new() -> Self {
		RepeatFilter {
			roby: 0,
			robuf: [0; MAX_OUT],
			rep_time: 0,
			is_rep: false,
			is_not_rep: false,
		}
	}

	/// Clears the IT/TCM97001 two-copy latch. Called when the receive
	/// channel is reset (`tx_report` write, transmit cycle, handing the
	/// line to another consumer); the last-seen payload and its timestamp
	/// are left alone, only the `isNotRep` latch is cleared.
	pub fn reset(&mut self) {
		self.is_not_rep = false;
	}

	pub fn last_is_rep(&self) -> bool {
		self.is_rep
	}

	/// Runs one accepted frame through the filter. Returns whether it
	/// should actually be emitted (`packageOK`).
	pub fn check(&mut self, frame: &Frame, ticks: u32, tx_report: TxReport) -> bool {
		let payload = frame.payload();

		let mut is_rep = if tx_report.contains(TxReport::REPEATED) {
			true
		} else {
			payload == &self.robuf[..self.roby as usize]
				&& ticks.wrapping_sub(self.rep_time) <= REPTIME
		};

		if !tx_report.contains(TxReport::FHTPROTO) && is_fht_synthetic_repeat(frame) {
			is_rep = true;
		}

		self.roby = payload.len() as u8;
		self.robuf[..payload.len()].copy_from_slice(payload);
		self.rep_time = ticks;
		self.is_rep = is_rep;

		match frame.datatype {
			DataType::It | DataType::Tcm97001 => {
				if is_rep && !self.is_not_rep {
					self.is_not_rep = true;
					true
				} else {
					false
				}
			}
			_ => !is_rep,
		}
	}
}

/// FHT control-byte heuristic: certain command bytes are treated as
/// synthetic repeats regardless of timing, since the FHT session layer
/// re-sends them on its own cadence. Assumes the conventional FHT80b frame
/// layout (house-hi, house-lo, command, value).
fn is_fht_synthetic_repeat(frame: &Frame) -> bool {
	if !matches!(frame.datatype, DataType::Fht | DataType::FhtRepeater) {
		return false;
	}
	let p = frame.payload();
	if p.len() < 4 {
		return false;
	}
	matches!(p[2], fht::ACK | fht::ACK2 | fht::CAN_XMIT | fht::CAN_RCV | fht::START_XMIT | fht::END_XMIT)
		|| (p[3] & 0x70) == 0x70
}
