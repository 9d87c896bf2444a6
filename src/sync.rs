//! Sync detector: classifies the preamble of a silent line and decides
//! which bit-demodulator state a bucket should start in.

use crate::bucket::{Bucket, State};
use crate::collab::RfRouter;
use crate::consts::{self, SILENCE_DEFAULT_US, SILENCE_ESA_US, SILENCE_TCM97001_US};
use crate::wave::{make_avg, wave_equals, Wave, TDIFF};

/// Runs the sync detector for one pulse against a bucket currently in
/// `Reset` or `Sync`. Returns the silence-timer reload value (in raw
/// microseconds) if this pulse caused a state commit, `None` otherwise.
/// No-op (returns `None`) for buckets already past the sync phase.
pub fn detect(bucket: &mut Bucket, high: u16, low: u16, router: &mut impl RfRouter) -> Option<u16> {
	match bucket.state {
		State::Reset => detect_first(bucket, high, low),
		State::Sync => detect_continue(bucket, high, low, router),
		_ => None,
	}
}

fn detect_first(bucket: &mut Bucket, high: u16, low: u16) -> Option<u16> {
	use consts::tcm97001 as tcm;
	use consts::it;
	use consts::sync_detect;

	if (tcm::HIGH_MIN..=tcm::HIGH_MAX).contains(&high) && (tcm::LOW_MIN..=tcm::LOW_MAX).contains(&low) {
		bucket.enter(State::Tcm97001);
		return Some(SILENCE_TCM97001_US);
	}
	if (it::HIGH_MIN..=it::HIGH_MAX).contains(&high) && (it::LOW_MIN..=it::LOW_MAX).contains(&low) {
		bucket.enter(State::It);
		return Some(SILENCE_DEFAULT_US);
	}
	if high > sync_detect::REJECT_ABOVE || low > sync_detect::REJECT_ABOVE {
		return None;
	}

	bucket.zero = Wave::new(high, low);
	bucket.sync = 1;
	bucket.state = State::Sync;
	None
}

fn detect_continue(bucket: &mut Bucket, high: u16, low: u16, router: &mut impl RfRouter) -> Option<u16> {
	use consts::sync_detect;

	if wave_equals(bucket.zero, high, low, TDIFF) {
		make_avg(&mut bucket.zero, high, low);
		bucket.sync = bucket.sync.saturating_add(1);
		return None;
	}

	if bucket.sync < sync_detect::MIN_SYNC_COUNT {
		// Too short a run to be a real preamble: give up and let this same
		// pulse be re-examined as the start of a fresh sync train.
		bucket.reset();
		return detect_first(bucket, high, low);
	}

	let sum = bucket.zero.high + bucket.zero.low;
	let trailing = Wave::new(high, low);

	if bucket.sync >= sync_detect::HMS_MIN_SYNC_COUNT && sum > sync_detect::HMS_MIN_SUM {
		bucket.enter(State::Hms);
		bucket.one = trailing;
		Some(SILENCE_DEFAULT_US)
	} else if bucket.sync >= sync_detect::ESA_MIN_SYNC_COUNT && sum < sync_detect::ESA_MAX_SUM {
		bucket.enter(State::Esa);
		bucket.one = trailing;
		Some(SILENCE_ESA_US)
	} else if router.matches_preamble(bucket.sync, bucket.zero) {
		router.accept(bucket);
		bucket.reset();
		None
	} else {
		bucket.enter(State::Collect);
		bucket.one = trailing;
		Some(SILENCE_DEFAULT_US)
	}
}

/// Independent Revolt preamble check, evaluated against every edge
/// regardless of the bucket's current state: a pulse with this shape always
/// forces a fresh Revolt capture.
pub fn matches_revolt_preamble(high: u16, low: u16) -> bool {
	use consts::revolt;
	high > revolt::HIGH_MIN && high < revolt::HIGH_MAX && low > revolt::LOW_MIN && low < revolt::LOW_MAX
}

/// Forces a bucket into `Revolt` with its fixed starting reference waves.
pub fn enter_revolt(bucket: &mut Bucket) {
	use consts::revolt;
	bucket.enter(State::Revolt);
	bucket.zero = Wave::new(0, 0);
	bucket.one = Wave::new(revolt::BIT_HIGH_THRESHOLD, 0);
}
