//! Profile and KYC editing form
//!
//! Pre-filled from the farmer's current record; only fields the user
//! actually changed travel in the update payload.

use shared::{Farmer, UpdateProfileInput};

use crate::error::AppResult;

use super::{
    aadhaar_field, ifsc_field, mobile_field, name_field, pincode_field, FormField, FormStep,
    FormWizard,
};

pub const STEP_CONTACT: usize = 0;
pub const STEP_KYC: usize = 1;

/// Build the profile editing wizard pre-filled from the current record
pub fn profile_form(farmer: &Farmer) -> FormWizard {
    let kyc = farmer.kyc.as_ref();
    FormWizard::new(
        "Edit Profile",
        vec![
            FormStep::new("Contact")
                .field(
                    FormField::new("name", "Name")
                        .required()
                        .with_validator(name_field)
                        .with_value(farmer.name.clone()),
                )
                .field(
                    FormField::new("mobile", "Mobile number")
                        .required()
                        .with_validator(mobile_field)
                        .with_value(farmer.mobile.clone()),
                )
                .field(FormField::new("village", "Village").with_value(farmer.village.clone()))
                .field(FormField::new("district", "District").with_value(farmer.district.clone()))
                .field(FormField::new("state", "State").with_value(farmer.state.clone()))
                .field(
                    FormField::new("pincode", "Pincode")
                        .required()
                        .with_validator(pincode_field)
                        .with_value(farmer.pincode.clone()),
                ),
            FormStep::new("KYC")
                .field(
                    FormField::new("aadhaar_number", "Aadhaar number")
                        .with_validator(aadhaar_field)
                        .with_value(kyc.map(|k| k.aadhaar_number.clone()).unwrap_or_default()),
                )
                .field(
                    FormField::new("bank_account_number", "Bank account number").with_value(
                        kyc.map(|k| k.bank_account_number.clone()).unwrap_or_default(),
                    ),
                )
                .field(
                    FormField::new("ifsc_code", "IFSC code")
                        .with_validator(ifsc_field)
                        .with_value(kyc.map(|k| k.ifsc_code.clone()).unwrap_or_default()),
                ),
        ],
    )
}

/// Build the update payload; unchanged fields stay out of the request
pub fn profile_input_from_form(form: &FormWizard, farmer: &Farmer) -> AppResult<UpdateProfileInput> {
    let values = form.values();
    let kyc = farmer.kyc.as_ref();

    let changed = |name: &str, current: &str| -> Option<String> {
        let value = values.get(name)?.trim();
        (value != current && !value.is_empty()).then(|| value.to_string())
    };

    Ok(UpdateProfileInput {
        name: changed("name", &farmer.name),
        mobile: changed("mobile", &farmer.mobile),
        village: changed("village", &farmer.village),
        district: changed("district", &farmer.district),
        state: changed("state", &farmer.state),
        pincode: changed("pincode", &farmer.pincode),
        aadhaar_number: changed(
            "aadhaar_number",
            kyc.map(|k| k.aadhaar_number.as_str()).unwrap_or(""),
        ),
        bank_account_number: changed(
            "bank_account_number",
            kyc.map(|k| k.bank_account_number.as_str()).unwrap_or(""),
        ),
        ifsc_code: changed("ifsc_code", kyc.map(|k| k.ifsc_code.as_str()).unwrap_or("")),
    })
}
