//! Errors surfaced across the collaborator boundary.
//!
//! Frame-level rejections (bad checksum, out-of-window pulse, duplicate
//! frame, ...) are policy, not errors: a bad frame is just dropped, and the
//! receiver waits for the sender to repeat it. This type only covers
//! collaborator I/O failing, a real fault rather than a frame the core
//! simply declines to hand back (e.g. `WouldBlock`).

#[cfg(feature = "std")]
use core::fmt::{self, Display, Formatter};

/// Errors that can occur while reconfiguring the radio collaborator.
#[derive(Debug)]
pub enum Error<RadioE> {
	/// The radio collaborator failed to apply the new report mask.
	Radio(RadioE),
}

impl<RadioE> From<RadioE> for Error<RadioE> {
	fn from(e: RadioE) -> Self {
		Error::Radio(e)
	}
}

#[cfg(feature = "std")]
impl<RadioE: Display> Display for Error<RadioE> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Radio(e) => write!(f, "radio reconfiguration failed: {}", e),
		}
	}
}

#[cfg(feature = "std")]
impl<RadioE: Display + core::fmt::Debug> std::error::Error for Error<RadioE> {}
