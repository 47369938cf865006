//! Harvest recording form
//!
//! The crop's sowing date is carried as a pre-filled context field so the
//! cross-field check can enforce the minimum sowing-to-harvest gap.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use shared::{RecordHarvestInput, MIN_SOWING_TO_HARVEST_DAYS};

use crate::error::{AppError, AppResult};

use super::{
    date_field, parse_date, parse_decimal, percent_field, quantity_field, FieldError, FormField,
    FormStep, FormWizard,
};

/// Build the harvest recording form for a crop sown on `sowing_date`
pub fn record_harvest_form(sowing_date: NaiveDate) -> FormWizard {
    FormWizard::new(
        "Record Harvest",
        vec![FormStep::new("Harvest Details")
            .field(
                FormField::new("sowing_date", "Sowing date")
                    .with_value(sowing_date.format("%Y-%m-%d").to_string()),
            )
            .field(
                FormField::new("harvest_date", "Harvest date")
                    .required()
                    .with_validator(date_field),
            )
            .field(
                FormField::new("quantity_quintals", "Quantity (quintals)")
                    .required()
                    .with_validator(quantity_field),
            )
            .field(
                FormField::new("moisture_percent", "Moisture %")
                    .with_validator(percent_field),
            )
            .field(FormField::new("notes", "Notes"))
            .cross_check(min_gap_after_sowing)],
    )
}

fn min_gap_after_sowing(values: &HashMap<&'static str, String>) -> Result<(), FieldError> {
    let (Some(sowing), Some(harvest)) = (values.get("sowing_date"), values.get("harvest_date"))
    else {
        return Ok(());
    };
    let (Ok(sowing), Ok(harvest)) = (parse_date(sowing), parse_date(harvest)) else {
        return Ok(());
    };
    shared::validate_harvest_after_sowing(sowing, harvest, MIN_SOWING_TO_HARVEST_DAYS)
        .map_err(|message| FieldError::new("harvest_date", message))
}

/// Build the recording payload from a validated form
pub fn harvest_input_from_form(form: &FormWizard, crop_id: Uuid) -> AppResult<RecordHarvestInput> {
    let values = form.values();
    let get = |name: &str| values.get(name).cloned().unwrap_or_default();

    let harvest_date = parse_date(&get("harvest_date")).map_err(AppError::ValidationError)?;
    let quantity_quintals =
        parse_decimal(&get("quantity_quintals")).map_err(AppError::ValidationError)?;

    let moisture = get("moisture_percent");
    let moisture_percent = if moisture.trim().is_empty() {
        None
    } else {
        Some(parse_decimal(&moisture).map_err(AppError::ValidationError)?)
    };

    let notes = get("notes");

    Ok(RecordHarvestInput {
        crop_id,
        harvest_date,
        quantity_quintals,
        moisture_percent,
        notes: (!notes.trim().is_empty()).then(|| notes.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sowing() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    #[test]
    fn test_valid_harvest_submission() {
        let mut form = record_harvest_form(sowing());
        form.set_value("harvest_date", "2024-10-15");
        form.set_value("quantity_quintals", "22.5");
        form.begin_submit().unwrap();

        let input = harvest_input_from_form(&form, Uuid::new_v4()).unwrap();
        assert_eq!(input.harvest_date, NaiveDate::from_ymd_opt(2024, 10, 15).unwrap());
        assert!(input.moisture_percent.is_none());
    }

    #[test]
    fn test_harvest_too_soon_after_sowing() {
        let mut form = record_harvest_form(sowing());
        // 25 days after sowing, below the 30-day minimum.
        form.set_value("harvest_date", "2024-07-15");
        form.set_value("quantity_quintals", "10");
        let err = form.begin_submit().unwrap_err();
        match err {
            AppError::Validation { field, message, .. } => {
                assert_eq!(field, "harvest_date");
                assert!(message.contains("at least 30 days"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut form = record_harvest_form(sowing());
        form.set_value("harvest_date", "2024-10-15");
        form.set_value("quantity_quintals", "0");
        assert!(form.begin_submit().is_err());
    }

    #[test]
    fn test_moisture_out_of_range_rejected() {
        let mut form = record_harvest_form(sowing());
        form.set_value("harvest_date", "2024-10-15");
        form.set_value("quantity_quintals", "10");
        form.set_value("moisture_percent", "120");
        assert!(form.begin_submit().is_err());
    }
}
