//! Personalized notification text.

/// Compose the SMS for one assignment, naming both giver and receiver.
#[must_use]
pub fn compose_sms(giver: &str, receiver: &str) -> String {
    format!("🎅 Hi {giver}! You will buy a present for {receiver}. Merry Christmas! 🎁")
}
