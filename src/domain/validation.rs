use std::fmt;

/// Rejection of a donation submission that lacks required keys.
///
/// Each variant corresponds to one gate of the donation validator, in the order the gates run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The outer submission lacks `donationpage`, `order` or `user`.
    MissingDonationKeys,
    /// `donationpage` lacks `name` or `payment_account`.
    MissingDonationPageKeys,
    /// `order` lacks `amount`, `exp_date_month` or `exp_date_year`.
    MissingOrderKeys,
    /// `user` lacks `email` or `country`.
    MissingUserKeys,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDonationKeys => f.write_str(
                "Donation options require donationpage, order and user keys in the base hash.",
            ),
            Self::MissingDonationPageKeys => f.write_str(
                "Donation Page options require name and payment_account keys in the hash.",
            ),
            Self::MissingOrderKeys => f.write_str(
                "Donation Order options require amount, exp_date_month and exp_date_year keys.",
            ),
            Self::MissingUserKeys => {
                f.write_str("Donation User options require email and country keys in the hash.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
