//! Validation utilities for the AgriSetu Platform
//!
//! Includes India-specific validations for member, farmer, and KYC data.
//! All checks are synchronous and pure; forms run them before submission
//! and block on the first failure.

use chrono::NaiveDate;
use rust_decimal::Decimal;

// ============================================================================
// Farm & Crop Validations
// ============================================================================

/// Maximum land holding accepted by the platform, in acres
pub const MAX_LAND_ACRES: i64 = 10_000;

/// Validate land area in acres (must be positive, bounded)
pub fn validate_land_acres(acres: Decimal) -> Result<(), &'static str> {
    if acres <= Decimal::ZERO {
        return Err("Land area must be greater than zero");
    }
    if acres > Decimal::from(MAX_LAND_ACRES) {
        return Err("Land area exceeds maximum supported holding");
    }
    Ok(())
}

/// Validate a crop quantity in quintals (harvest yield, lot quantity)
pub fn validate_quantity_quintals(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Validate an MSP or asking price per quintal
pub fn validate_price_per_quintal(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Price per quintal must be greater than zero");
    }
    Ok(())
}

/// Validate a suitability score is in the 0-100 range
pub fn validate_suitability_score(score: Decimal) -> Result<(), &'static str> {
    if score < Decimal::ZERO || score > Decimal::from(100) {
        return Err("Suitability score must be between 0 and 100");
    }
    Ok(())
}

/// Validate harvest date against sowing date with a minimum gap in days
///
/// Harvest recording requires at least 30 days between sowing and harvest;
/// other flows pass their own offset.
pub fn validate_harvest_after_sowing(
    sowing: NaiveDate,
    harvest: NaiveDate,
    min_days: i64,
) -> Result<(), String> {
    let gap = (harvest - sowing).num_days();
    if gap < min_days {
        return Err(format!(
            "Harvest date must be at least {} days after sowing date",
            min_days
        ));
    }
    Ok(())
}

/// Validate year of registration (FPO onboarding, farmer records)
pub fn validate_registration_year(year: i32, current_year: i32) -> Result<(), String> {
    if year < 1950 || year > current_year {
        return Err(format!(
            "Year must be between 1950 and {}",
            current_year
        ));
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a person name (alphabetic plus spaces, 2-60 characters)
pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.len() < 2 {
        return Err("Name must be at least 2 characters");
    }
    if trimmed.len() > 60 {
        return Err("Name must be at most 60 characters");
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err("Name must contain only letters and spaces");
    }
    Ok(())
}

/// Validate an FPO code (3-10 uppercase alphanumeric)
pub fn validate_fpo_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 3 {
        return Err("FPO code must be at least 3 characters");
    }
    if code.len() > 10 {
        return Err("FPO code must be at most 10 characters");
    }
    if !code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return Err("FPO code must be uppercase alphanumeric only");
    }
    Ok(())
}

// ============================================================================
// India-Specific Validations
// ============================================================================

/// Validate an Indian mobile number
///
/// Accepts: 9876543210, 98765 43210, +919876543210, 09876543210.
/// The significant part must be exactly 10 digits starting with 6-9.
pub fn validate_mobile(phone: &str) -> Result<(), &'static str> {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let digits: &str = if let Some(rest) = cleaned.strip_prefix("+91") {
        rest
    } else if cleaned.len() == 11 && cleaned.starts_with('0') {
        &cleaned[1..]
    } else {
        &cleaned
    };

    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Mobile number must be exactly 10 digits");
    }
    if !matches!(digits.chars().next(), Some('6'..='9')) {
        return Err("Mobile number must start with 6, 7, 8 or 9");
    }
    Ok(())
}

/// Validate an Indian postal PIN code (6 digits, not starting with 0)
pub fn validate_pincode(pincode: &str) -> Result<(), &'static str> {
    if pincode.len() != 6 || !pincode.chars().all(|c| c.is_ascii_digit()) {
        return Err("Pincode must be exactly 6 digits");
    }
    if pincode.starts_with('0') {
        return Err("Pincode cannot start with 0");
    }
    Ok(())
}

/// Validate an Aadhaar number (12 digits, first digit 2-9)
///
/// Spaces and dashes between digit groups are tolerated.
pub fn validate_aadhaar(aadhaar: &str) -> Result<(), &'static str> {
    let digits: String = aadhaar
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.len() != 12 {
        return Err("Aadhaar number must be 12 digits");
    }
    if !matches!(digits.chars().next(), Some('2'..='9')) {
        return Err("Aadhaar number cannot start with 0 or 1");
    }
    Ok(())
}

/// Validate an IFSC bank branch code
///
/// Format: 4 uppercase letters, '0', then 6 alphanumerics (e.g. SBIN0001234)
pub fn validate_ifsc(ifsc: &str) -> Result<(), &'static str> {
    if ifsc.len() != 11 {
        return Err("IFSC code must be 11 characters");
    }
    let bytes = ifsc.as_bytes();
    if !bytes[..4].iter().all(|b| b.is_ascii_uppercase()) {
        return Err("IFSC code must start with 4 uppercase letters");
    }
    if bytes[4] != b'0' {
        return Err("Fifth character of IFSC code must be 0");
    }
    if !bytes[5..]
        .iter()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return Err("IFSC branch part must be uppercase alphanumeric");
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

    // ========================================================================
    // Farm & Crop Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_land_acres_valid() {
        assert!(validate_land_acres(dec("0.1")).is_ok());
        assert!(validate_land_acres(dec("2.5")).is_ok());
        assert!(validate_land_acres(dec("10000")).is_ok());
    }

    #[test]
    fn test_validate_land_acres_invalid() {
        assert!(validate_land_acres(Decimal::ZERO).is_err());
        assert!(validate_land_acres(dec("-1.5")).is_err());
        assert!(validate_land_acres(dec("10001")).is_err());
    }

    #[test]
    fn test_validate_quantity_quintals() {
        assert!(validate_quantity_quintals(dec("25")).is_ok());
        assert!(validate_quantity_quintals(dec("0.5")).is_ok());
        assert!(validate_quantity_quintals(Decimal::ZERO).is_err());
        assert!(validate_quantity_quintals(dec("-3")).is_err());
    }

    #[test]
    fn test_validate_price_per_quintal() {
        assert!(validate_price_per_quintal(dec("4500")).is_ok());
        assert!(validate_price_per_quintal(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_validate_suitability_score() {
        assert!(validate_suitability_score(Decimal::ZERO).is_ok());
        assert!(validate_suitability_score(dec("87.5")).is_ok());
        assert!(validate_suitability_score(dec("100")).is_ok());
        assert!(validate_suitability_score(dec("-1")).is_err());
        assert!(validate_suitability_score(dec("101")).is_err());
    }

    #[test]
    fn test_harvest_after_sowing_valid() {
        let sowing = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let harvest = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
        assert!(validate_harvest_after_sowing(sowing, harvest, 30).is_ok());
    }

    #[test]
    fn test_harvest_after_sowing_too_soon() {
        let sowing = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let harvest = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let err = validate_harvest_after_sowing(sowing, harvest, 30).unwrap_err();
        assert!(err.contains("at least 30 days"));
    }

    #[test]
    fn test_harvest_before_sowing_rejected() {
        let sowing = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let harvest = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(validate_harvest_after_sowing(sowing, harvest, 0).is_err());
    }

    #[test]
    fn test_validate_registration_year_valid() {
        assert!(validate_registration_year(1950, 2026).is_ok());
        assert!(validate_registration_year(2015, 2026).is_ok());
        assert!(validate_registration_year(2026, 2026).is_ok());
    }

    #[test]
    fn test_validate_registration_year_invalid() {
        let err = validate_registration_year(1800, 2026).unwrap_err();
        assert_eq!(err, "Year must be between 1950 and 2026");
        assert!(validate_registration_year(2030, 2026).is_err());
        assert!(validate_registration_year(1949, 2026).is_err());
    }

    // ========================================================================
    // General Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("farmer.name@domain.co.in").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_person_name_valid() {
        assert!(validate_person_name("Ramesh Kumar").is_ok());
        assert!(validate_person_name("Savita").is_ok());
    }

    #[test]
    fn test_validate_person_name_invalid() {
        assert!(validate_person_name("R").is_err()); // Too short
        assert!(validate_person_name("Ramesh123").is_err()); // Digits
        assert!(validate_person_name("Ramesh_Kumar").is_err()); // Underscore
    }

    #[test]
    fn test_validate_fpo_code_valid() {
        assert!(validate_fpo_code("VID").is_ok());
        assert!(validate_fpo_code("VIDARB1").is_ok());
        assert!(validate_fpo_code("ABCDEFGHIJ").is_ok());
    }

    #[test]
    fn test_validate_fpo_code_invalid() {
        assert!(validate_fpo_code("AB").is_err()); // Too short
        assert!(validate_fpo_code("ABCDEFGHIJK").is_err()); // Too long
        assert!(validate_fpo_code("abc").is_err()); // Lowercase
        assert!(validate_fpo_code("AB-C").is_err()); // Special char
    }

    // ========================================================================
    // India-Specific Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_mobile_valid() {
        // Standard mobile
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("6123456789").is_ok());
        // With spaces
        assert!(validate_mobile("98765 43210").is_ok());
        // With country code
        assert!(validate_mobile("+919876543210").is_ok());
        // With trunk prefix
        assert!(validate_mobile("09876543210").is_ok());
    }

    #[test]
    fn test_validate_mobile_invalid() {
        assert!(validate_mobile("12345").is_err());
        assert!(validate_mobile("98765432100").is_err()); // 11 digits
        assert!(validate_mobile("5987654321").is_err()); // Starts with 5
        assert!(validate_mobile("abcdefghij").is_err());
        assert!(validate_mobile("").is_err());
    }

    #[test]
    fn test_validate_pincode_valid() {
        assert!(validate_pincode("442001").is_ok());
        assert!(validate_pincode("110001").is_ok());
    }

    #[test]
    fn test_validate_pincode_invalid() {
        assert!(validate_pincode("042001").is_err()); // Leading zero
        assert!(validate_pincode("44200").is_err()); // 5 digits
        assert!(validate_pincode("4420011").is_err()); // 7 digits
        assert!(validate_pincode("44200a").is_err());
    }

    #[test]
    fn test_validate_aadhaar_valid() {
        assert!(validate_aadhaar("234567890123").is_ok());
        assert!(validate_aadhaar("9876 5432 1098").is_ok());
    }

    #[test]
    fn test_validate_aadhaar_invalid() {
        assert!(validate_aadhaar("1234567890").is_err()); // Too short
        assert!(validate_aadhaar("123456789012").is_err()); // Starts with 1
        assert!(validate_aadhaar("034567890123").is_err()); // Starts with 0
    }

    #[test]
    fn test_validate_ifsc_valid() {
        assert!(validate_ifsc("SBIN0001234").is_ok());
        assert!(validate_ifsc("HDFC0CAG123").is_ok());
    }

    #[test]
    fn test_validate_ifsc_invalid() {
        assert!(validate_ifsc("SBIN001234").is_err()); // 10 chars
        assert!(validate_ifsc("SBIN1001234").is_err()); // Fifth char not 0
        assert!(validate_ifsc("sbin0001234").is_err()); // Lowercase
        assert!(validate_ifsc("SB1N0001234").is_err()); // Digit in bank part
    }
}
