//! Bit demodulator: per-state mapping from a pulse to a 0/1 bit (or a
//! rejection), appended to the current bucket.

use crate::bucket::{Bucket, State};
use crate::consts;
use crate::wave::{make_avg, wave_equals, Wave, TDIFF, TDIFFIT};

/// Demodulates one pulse against a bucket already past the sync phase.
/// No-op for `Reset`/`Sync`, which the sync detector owns instead.
pub fn demodulate(bucket: &mut Bucket, high: u16, low: u16) {
	match bucket.state {
		State::Collect => demod_collect(bucket, high, low),
		State::It => demod_it(bucket, high, low),
		State::ItV3 => demod_itv3(bucket, high, low),
		State::Tcm97001 => demod_tcm97001(bucket, high, low),
		State::Revolt => demod_revolt(bucket, high, low),
		State::Hms => demod_manchester(bucket, high, low, consts::hms::WINDOW_MIN, consts::hms::WINDOW_MAX),
		State::Esa => demod_manchester(bucket, high, low, consts::esa::WINDOW_MIN, consts::esa::WINDOW_MAX),
		State::Reset | State::Sync => {}
	}
}

fn demod_collect(bucket: &mut Bucket, high: u16, low: u16) {
	if wave_equals(bucket.one, high, low, TDIFF) {
		bucket.add_bit(1);
		make_avg(&mut bucket.one, high, low);
	} else if wave_equals(bucket.zero, high, low, TDIFF) {
		bucket.add_bit(0);
		make_avg(&mut bucket.zero, high, low);
	} else {
		bucket.reset();
	}
}

/// `It` additionally recognizes, on the very first edge after the sync
/// detector commits (no bits written yet), an Intertechno-V3 style start
/// marker: a long low time relative to the high time switches the bucket
/// over to variable-duty-cycle (`ItV3`) decoding for the rest of the frame.
fn demod_it(bucket: &mut Bucket, high: u16, low: u16) {
	if bucket.byte_idx == 0 && bucket.bit_idx == 7 && low > consts::it::ITV3_START_LOW_MIN {
		let zero_low = if low.saturating_sub(1) <= high {
			high.saturating_mul(5)
		} else {
			low
		};
		bucket.state = State::ItV3;
		bucket.zero = Wave::new(high, zero_low);
		bucket.one = Wave::new(high, low);
		return;
	}

	if wave_equals(bucket.one, high, low, TDIFFIT) {
		bucket.add_bit(1);
		make_avg(&mut bucket.one, high, low);
	} else if wave_equals(bucket.zero, high, low, TDIFFIT) {
		bucket.add_bit(0);
		make_avg(&mut bucket.zero, high, low);
	}
	// A lone mismatch is tolerated: IT does not reset on a single stray pulse.
}

fn demod_itv3(bucket: &mut Bucket, high: u16, low: u16) {
	let bit = if (low as i32) - TDIFF > high as i32 { 1 } else { 0 };
	bucket.add_bit(bit);
}

fn demod_tcm97001(bucket: &mut Bucket, high: u16, low: u16) {
	use consts::tcm97001 as tcm;
	let _ = high;
	if (tcm::BIT0_LOW_MIN..=tcm::BIT0_LOW_MAX).contains(&low) {
		bucket.add_bit(0);
	} else if (tcm::BIT1_LOW_MIN..=tcm::BIT1_LOW_MAX).contains(&low) {
		bucket.add_bit(1);
	}
}

fn demod_revolt(bucket: &mut Bucket, high: u16, low: u16) {
	use consts::revolt;
	if high < revolt::BIT_HIGH_THRESHOLD {
		bucket.add_bit(0);
		bucket.zero = Wave::new(high, low);
	} else {
		bucket.add_bit(1);
		bucket.one = Wave::new(high, low);
	}
}

/// Manchester-like demodulation shared by HMS and ESA: the high-phase
/// duration (ending in a falling edge) yields a `1` bit when within the
/// validity window, the low-phase duration (ending in a rising edge) yields
/// a `0` bit. Either phase exceeding the window resets the bucket; either
/// phase falling short of it is simply too early to be a full symbol yet
/// and is ignored.
fn demod_manchester(bucket: &mut Bucket, high: u16, low: u16, window_min: u16, window_max: u16) {
	if high > window_max {
		bucket.reset();
		return;
	}
	if high >= window_min {
		bucket.add_bit(1);
	}
	if low > window_max {
		bucket.reset();
		return;
	}
	if low >= window_min {
		bucket.add_bit(0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collect_appends_matching_bits_and_resets_on_mismatch() {
		let mut b = Bucket::default();
		b.enter(State::Collect);
		b.zero = Wave::new(20, 10);
		b.one = Wave::new(50, 40);
		demodulate(&mut b, 50, 40);
		demodulate(&mut b, 20, 10);
		assert_eq!(b.data[0] & 0b1100_0000, 0b1000_0000);
		demodulate(&mut b, 200, 200);
		assert_eq!(b.state, State::Reset);
	}

	#[test]
	fn it_tolerates_a_single_stray_pulse() {
		let mut b = Bucket::default();
		b.enter(State::It);
		b.zero = Wave::new(20, 10);
		b.one = Wave::new(50, 40);
		demodulate(&mut b, 20, 10);
		demodulate(&mut b, 9999, 9999); // stray, ignored
		demodulate(&mut b, 50, 40);
		assert_eq!(b.state, State::It);
		assert_eq!(b.byte_idx, 0);
	}

	#[test]
	fn it_start_marker_switches_to_itv3() {
		let mut b = Bucket::default();
		b.enter(State::It);
		demodulate(&mut b, 10, 200); // low well above ITV3_START_LOW_MIN
		assert_eq!(b.state, State::ItV3);
		assert_eq!(b.byte_idx, 0);
		assert_eq!(b.bit_idx, 7);
	}

	#[test]
	fn itv3_bit_from_low_minus_high_margin() {
		let mut b = Bucket::default();
		b.enter(State::ItV3);
		demodulate(&mut b, 10, 40); // low - TDIFF(12) = 28 > 10 -> bit 1
		demodulate(&mut b, 30, 31); // low - TDIFF = 19, not > 30 -> bit 0
		assert_eq!(b.data[0] & 0b1100_0000, 0b1000_0000);
	}

	#[test]
	fn tcm97001_decodes_short_and_long_low_times() {
		let mut b = Bucket::default();
		b.enter(State::Tcm97001);
		demodulate(&mut b, 30, 125); // bit 0
		demodulate(&mut b, 30, 250); // bit 1
		demodulate(&mut b, 30, 999); // ignored, out of window
		assert_eq!(b.data[0] & 0b1100_0000, 0b0100_0000);
		assert_eq!(b.byte_idx, 0);
	}

	#[test]
	fn hms_window_resets_on_overlong_pulse() {
		let mut b = Bucket::default();
		b.enter(State::Hms);
		demodulate(&mut b, 60, 60); // both within window -> bit 1, bit 0
		assert_eq!(b.data[0] & 0b1100_0000, 0b1000_0000);
		let mut b2 = Bucket::default();
		b2.enter(State::Hms);
		demodulate(&mut b2, 9999, 10);
		assert_eq!(b2.state, State::Reset);
	}
}
