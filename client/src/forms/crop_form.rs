//! Add-crop form

use std::collections::HashMap;

use shared::{CropType, RegisterCropInput, Season, SoilType};

use crate::error::{AppError, AppResult};

use super::{
    acres_field, date_field, parse_date, parse_decimal, season_field, FieldError, FormField,
    FormStep, FormWizard,
};

/// Build the single-step add-crop form
pub fn add_crop_form() -> FormWizard {
    FormWizard::new(
        "Add Crop",
        vec![FormStep::new("Crop Details")
            .field(FormField::new("crop_type", "Crop").required())
            .field(FormField::new("variety", "Variety"))
            .field(
                FormField::new("season", "Season")
                    .required()
                    .with_validator(season_field),
            )
            .field(
                FormField::new("area_acres", "Land area (acres)")
                    .required()
                    .with_validator(acres_field),
            )
            .field(FormField::new("soil_type", "Soil type"))
            .field(
                FormField::new("sowing_date", "Sowing date")
                    .required()
                    .with_validator(date_field),
            )
            .field(
                FormField::new("expected_harvest_date", "Expected harvest date")
                    .required()
                    .with_validator(date_field),
            )
            .cross_check(harvest_after_sowing)],
    )
}

fn harvest_after_sowing(values: &HashMap<&'static str, String>) -> Result<(), FieldError> {
    let (Some(sowing), Some(harvest)) = (
        values.get("sowing_date"),
        values.get("expected_harvest_date"),
    ) else {
        return Ok(());
    };
    // Field validators have already surfaced unparsable dates.
    let (Ok(sowing), Ok(harvest)) = (parse_date(sowing), parse_date(harvest)) else {
        return Ok(());
    };
    shared::validate_harvest_after_sowing(sowing, harvest, 1)
        .map_err(|message| FieldError::new("expected_harvest_date", message))
}

/// Build the registration payload from a validated form
pub fn crop_input_from_form(form: &FormWizard) -> AppResult<RegisterCropInput> {
    let values = form.values();
    let get = |name: &str| values.get(name).cloned().unwrap_or_default();

    let season = Season::parse(&get("season"))
        .ok_or_else(|| AppError::ValidationError("Season must be kharif, rabi or zaid".into()))?;
    let area_acres = parse_decimal(&get("area_acres")).map_err(AppError::ValidationError)?;
    let sowing_date = parse_date(&get("sowing_date")).map_err(AppError::ValidationError)?;
    let expected_harvest_date =
        parse_date(&get("expected_harvest_date")).map_err(AppError::ValidationError)?;

    let variety = get("variety");
    let soil = get("soil_type");

    Ok(RegisterCropInput {
        crop_type: CropType::parse(&get("crop_type")),
        variety: (!variety.trim().is_empty()).then(|| variety.trim().to_string()),
        season,
        area_acres,
        soil_type: SoilType::parse(soil.trim()),
        sowing_date,
        expected_harvest_date,
    })
}
