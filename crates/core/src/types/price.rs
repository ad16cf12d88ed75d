//! Price display helpers.
//!
//! Prices are kept as [`Decimal`] values; everything here is presentation
//! logic shared by the storefront cards, the detail page, and the admin table.

use rust_decimal::Decimal;

/// Resolved price presentation for a product.
///
/// A discount price is honored only when it is strictly below the regular
/// price; anything else (absent, equal, or higher) collapses the tag to the
/// single regular price so a "discount" can never display a raised price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTag {
    /// Price the buyer pays.
    pub current: Decimal,
    /// Struck-through original price, present only for a real discount.
    pub original: Option<Decimal>,
}

impl PriceTag {
    /// Resolve the displayed price from a regular price and an optional
    /// discount price.
    #[must_use]
    pub fn new(price: Decimal, discount_price: Option<Decimal>) -> Self {
        match discount_price {
            Some(discount) if discount < price => Self {
                current: discount,
                original: Some(price),
            },
            _ => Self {
                current: price,
                original: None,
            },
        }
    }

    /// Whether the tag shows a struck-through original price.
    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.original.is_some()
    }
}

/// Format an amount with thousands separators in the Thai convention.
///
/// Whole amounts render without decimals ("12,345"); fractional amounts keep
/// two ("12,345.50"). The currency suffix (" บาท") is a display literal and is
/// appended by callers, never part of the numeric value.
#[must_use]
pub fn format_thb(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let rendered = if normalized.fract() == Decimal::ZERO {
        format!("{}", normalized.trunc())
    } else {
        format!("{normalized:.2}")
    };
    group_thousands(&rendered)
}

/// Insert thousands separators into the integer part of a rendered number.
fn group_thousands(rendered: &str) -> String {
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered, None),
    };
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + sign.len());
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amount() {
        assert_eq!(format_thb(Decimal::from(999)), "999");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_thb(Decimal::from(4500)), "4,500");
        assert_eq!(format_thb(Decimal::from(12_345_678)), "12,345,678");
    }

    #[test]
    fn test_format_whole_amount_drops_decimals() {
        let amount: Decimal = "4500.00".parse().unwrap();
        assert_eq!(format_thb(amount), "4,500");
    }

    #[test]
    fn test_format_fractional_amount_keeps_two_decimals() {
        let amount: Decimal = "12345.5".parse().unwrap();
        assert_eq!(format_thb(amount), "12,345.50");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_thb(Decimal::ZERO), "0");
    }

    #[test]
    fn test_price_tag_real_discount() {
        let tag = PriceTag::new(Decimal::from(4500), Some(Decimal::from(3500)));
        assert_eq!(tag.current, Decimal::from(3500));
        assert_eq!(tag.original, Some(Decimal::from(4500)));
        assert!(tag.is_discounted());
    }

    #[test]
    fn test_price_tag_without_discount() {
        let tag = PriceTag::new(Decimal::from(4500), None);
        assert_eq!(tag.current, Decimal::from(4500));
        assert_eq!(tag.original, None);
        assert!(!tag.is_discounted());
    }

    #[test]
    fn test_price_tag_rejects_equal_discount() {
        let tag = PriceTag::new(Decimal::from(4500), Some(Decimal::from(4500)));
        assert_eq!(tag.current, Decimal::from(4500));
        assert!(!tag.is_discounted());
    }

    #[test]
    fn test_price_tag_rejects_higher_discount() {
        let tag = PriceTag::new(Decimal::from(4500), Some(Decimal::from(5000)));
        assert_eq!(tag.current, Decimal::from(4500));
        assert!(!tag.is_discounted());
    }
}
