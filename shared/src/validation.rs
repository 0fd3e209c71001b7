//! Validation helpers for inventory inputs

use rust_decimal::Decimal;

/// Validate a consumption or stock quantity is strictly positive
pub fn validate_positive_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate the amounts on a new or updated inventory item
///
/// `original_amount` must be positive; `current_quantity` and
/// `minimum_quantity` must be non-negative.
pub fn validate_item_amounts(
    current_quantity: Decimal,
    original_amount: Decimal,
    minimum_quantity: Decimal,
) -> Result<(), &'static str> {
    if original_amount <= Decimal::ZERO {
        return Err("Original amount must be positive");
    }
    if current_quantity < Decimal::ZERO {
        return Err("Current quantity cannot be negative");
    }
    if minimum_quantity < Decimal::ZERO {
        return Err("Minimum quantity cannot be negative");
    }
    Ok(())
}

/// Validate an item or location name
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.len() > 200 {
        return Err("Name is too long (max 200 characters)");
    }
    Ok(())
}

/// Validate a unit label (e.g. "ml", "kg", "cartridge")
pub fn validate_unit(unit: &str) -> Result<(), &'static str> {
    if unit.trim().is_empty() {
        return Err("Unit cannot be empty");
    }
    if unit.len() > 32 {
        return Err("Unit is too long (max 32 characters)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn rejects_zero_quantity() {
        assert!(validate_positive_quantity(Decimal::ZERO).is_err());
        assert!(validate_positive_quantity(dec("-1")).is_err());
        assert!(validate_positive_quantity(dec("0.1")).is_ok());
    }

    #[test]
    fn rejects_zero_original_amount() {
        assert!(validate_item_amounts(dec("0"), dec("0"), dec("0")).is_err());
        assert!(validate_item_amounts(dec("10"), dec("20"), dec("5")).is_ok());
        assert!(validate_item_amounts(dec("-1"), dec("20"), dec("5")).is_err());
    }

    #[test]
    fn rejects_blank_names() {
        assert!(validate_name("  ").is_err());
        assert!(validate_name("Silicone Sealant 310ml").is_ok());
    }
}
