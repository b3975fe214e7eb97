//! Booking validation policy loaded from the environment.

/// Tunable validation rules for the booking core.
///
/// Whether a check-in date may lie in the past is a deployment decision, not
/// a fixed rule, so it ships as a policy switch. The default accepts past
/// check-ins (back-dated records stay bookable).
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingPolicy {
    /// Reject bookings whose check-in is before today.
    pub reject_past_check_in: bool,
}

impl BookingPolicy {
    /// Loads the policy from environment variables, falling back to
    /// defaults.
    ///
    /// Reads `BOOKING_REJECT_PAST_CHECK_IN` (`1` or `true` to enable).
    pub fn from_env() -> Self {
        let reject = std::env::var("BOOKING_REJECT_PAST_CHECK_IN")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            reject_past_check_in: reject,
        }
    }

    /// Policy that rejects check-ins before today.
    pub fn strict() -> Self {
        Self {
            reject_past_check_in: true,
        }
    }
}
