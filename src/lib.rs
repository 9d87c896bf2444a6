#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod analyzers;
pub mod bucket;
pub mod capture;
pub mod checksum;
pub mod collab;
pub mod consts;
pub mod dedup;
pub mod demod;
pub mod emit;
pub mod error;
pub mod frame;
pub mod report;
pub mod ring;
pub mod silence;
pub mod sync;
pub mod wave;

use core::convert::Infallible;

pub use bucket::Bucket;
pub use capture::{EdgeCapture, Level};
pub use collab::{FhtSession, Radio, RfRouter, RssiSource, Sink};
pub use error::Error;
pub use frame::{DataType, Frame};
pub use report::{Capabilities, TxReport};
pub use ring::BucketRing;
pub use silence::SilenceOutcome;

use dedup::RepeatFilter;

/// The receiver core: edge-ISR demodulator, bucket ring, and analyze/dedup
/// task, bundled as a single owned value. `N` is the ring depth (how many
/// in-flight frames can be buffered ahead of the consumer).
pub struct Receiver<const N: usize> {
	ring: BucketRing<N>,
	capture: EdgeCapture,
	dedup: RepeatFilter,
	caps: Capabilities,
	tx_report: TxReport,
}

impl<const N: usize> Receiver<N> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn capabilities(&self) -> Capabilities {
		self.caps
	}

	pub fn set_capabilities(&mut self, caps: Capabilities) {
		self.caps = caps;
	}

	pub fn tx_report(&self) -> TxReport {
		self.tx_report
	}

	/// Sets the report flags and pushes the new mask through the radio
	/// collaborator.
	pub fn configure<R: Radio>(&mut self, tx_report: TxReport, radio: &mut R) -> Result<(), Error<R::Error>> {
		self.tx_report = tx_report;
		radio.reconfigure(tx_report)?;
		Ok(())
	}

	/// Forces the producer bucket back to `Reset`, drops any in-flight
	/// edge-capture state, and clears the IT/TCM97001 two-copy latch. Used
	/// whenever the receive channel needs to re-enter receive from a clean
	/// state: a `tx_report` write, after a transmit cycle, or handing the
	/// line to another consumer.
	pub fn reset(&mut self) {
		self.ring.current_mut().reset();
		self.capture = EdgeCapture::new();
		self.dedup.reset();
	}

	/// Edge-ISR entry point: captures one edge, and if it completes a wave,
	/// feeds it to the sync detector or bit demodulator. Returns the
	/// silence-timer reload value, in raw microseconds, when this edge
	/// caused the sync detector to commit to a state — the caller
	/// reprograms the hardware compare register with it. Returns `None` on
	/// every other edge, including the first half of a (falling, rising)
	/// pair that hasn't yet produced a wave.
	pub fn edge_interrupt(&mut self, level: Level, counter: u16, router: &mut impl RfRouter) -> Option<u16> {
		let (high, low) = self.capture.on_edge(level, counter)?;
		let bucket = self.ring.current_mut();
		bucket.note_wave(high, low);

		if sync::matches_revolt_preamble(high, low) {
			sync::enter_revolt(bucket);
			return None;
		}

		if bucket.state.is_collecting() {
			demod::demodulate(bucket, high, low);
			None
		} else {
			sync::detect(bucket, high, low, router)
		}
	}

	/// Timer-compare ISR entry point.
	pub fn silence_timeout(&mut self) -> SilenceOutcome {
		silence::on_silence_timeout(&mut self.ring)
	}

	/// Task-context poll: classifies the next committed bucket and runs it
	/// through the deduplicator. `nb::Error::WouldBlock` when no bucket is
	/// ready, or when the one that was ready failed every analyzer. FHT
	/// frames are additionally handed to `fht` regardless of `package_ok`,
	/// since the FHT session hook runs ahead of the dedup/emit decision.
	pub fn poll_frame<F: FhtSession>(
		&mut self,
		ticks: u32,
		fht: &mut F,
	) -> nb::Result<(Frame, bool), Infallible> {
		let bucket = self.ring.peek().ok_or(nb::Error::WouldBlock)?;
		let classified = analyzers::classify(bucket, self.caps);
		self.ring.release();

		let frame = classified.ok_or(nb::Error::WouldBlock)?;
		if frame.datatype == DataType::Fht {
			fht.fht_hook(frame.payload());
		}
		let package_ok = self.dedup.check(&frame, ticks, self.tx_report);
		Ok((frame, package_ok))
	}

	/// Writes an accepted frame to `sink`, honoring the configured report
	/// flags (type/hex body always; RSSI appended if `REP_RSSI`).
	pub fn emit_frame<S: Sink, Rssi: RssiSource>(&self, sink: &mut S, rssi: &mut Rssi, frame: &Frame, package_ok: bool) {
		let rssi_byte = if self.tx_report.contains(TxReport::RSSI) {
			rssi.read_rssi()
		} else {
			0
		};
		emit::emit_frame(sink, frame, package_ok, self.tx_report, rssi_byte);
	}

	/// Writes the `BOVF` debug line after a ring-overflow `SilenceOutcome`.
	pub fn emit_overflow<S: Sink>(&self, sink: &mut S) {
		emit::emit_overflow(sink);
	}

	/// Writes the monitor / raw-bits debug lines for the bucket currently
	/// being filled in, gated on the corresponding `tx_report` flags.
	pub fn emit_debug<S: Sink>(&self, sink: &mut S) {
		let bucket = self.ring.current();
		emit::emit_monitor(sink, bucket.last_high, bucket.last_low, self.tx_report);
		emit::emit_bits(sink, bucket, self.tx_report);
	}
}

impl<const N: usize> Default for Receiver<N> {
	fn default() -> Self {
		Receiver {
			ring: BucketRing::new(),
			capture: EdgeCapture::new(),
			dedup: RepeatFilter::new(),
			caps: Capabilities::default(),
			tx_report: TxReport::empty(),
		}
	}
}
