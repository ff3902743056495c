//! Coupon check
//!
//! A single hard-coded code. Matching only acknowledges the discount to
//! the user; the cart total is never altered. Placeholder rule, not a
//! policy to generalize.

/// The one accepted code
pub const COUPON_CODE: &str = "SAVE10";

/// Outcome of checking an entered coupon code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    /// Code matched; the user sees a discount acknowledgement
    Applied,
    /// Non-empty code that did not match
    Invalid,
    /// Nothing entered; no signal either way
    NotEntered,
}

/// Compare an entered code against [`COUPON_CODE`]
pub fn check_coupon(code: &str) -> CouponStatus {
    if code == COUPON_CODE {
        CouponStatus::Applied
    } else if code.is_empty() {
        CouponStatus::NotEntered
    } else {
        CouponStatus::Invalid
    }
}
