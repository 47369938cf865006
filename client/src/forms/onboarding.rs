//! FPO onboarding wizard
//!
//! Three steps: organisation details, contact person, location. Each step
//! gates "Next" on its own fields.

use super::{
    email_field, fpo_code_field, mobile_field, name_field, pincode_field, year_field, FormField,
    FormStep, FormWizard,
};

pub const STEP_ORGANISATION: usize = 0;
pub const STEP_CONTACT: usize = 1;
pub const STEP_LOCATION: usize = 2;

/// Build the onboarding wizard for a new FPO
pub fn fpo_onboarding_wizard() -> FormWizard {
    FormWizard::new(
        "FPO Onboarding",
        vec![
            FormStep::new("Organisation")
                .field(FormField::new("fpo_name", "FPO name").required())
                .field(
                    FormField::new("fpo_code", "FPO code")
                        .required()
                        .with_validator(fpo_code_field),
                )
                .field(
                    FormField::new("registration_year", "Year of registration")
                        .required()
                        .with_validator(year_field),
                ),
            FormStep::new("Contact")
                .field(
                    FormField::new("contact_name", "Contact person")
                        .required()
                        .with_validator(name_field),
                )
                .field(
                    FormField::new("mobile", "Mobile number")
                        .required()
                        .with_validator(mobile_field),
                )
                .field(FormField::new("email", "Email").with_validator(email_field)),
            FormStep::new("Location")
                .field(FormField::new("district", "District").required())
                .field(FormField::new("state", "State").required())
                .field(
                    FormField::new("pincode", "Pincode")
                        .required()
                        .with_validator(pincode_field),
                ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_through_all_steps() {
        let mut wizard = fpo_onboarding_wizard();
        wizard.set_value("fpo_name", "Vidarbha Farmers Collective");
        wizard.set_value("fpo_code", "VIDARB");
        wizard.set_value("registration_year", "2018");
        wizard.next().unwrap();

        wizard.set_value("contact_name", "Savita Deshmukh");
        wizard.set_value("mobile", "9876543210");
        wizard.next().unwrap();

        wizard.set_value("district", "Wardha");
        wizard.set_value("state", "Maharashtra");
        wizard.set_value("pincode", "442001");
        wizard.begin_submit().unwrap();
    }

    #[test]
    fn test_ancient_registration_year_rejected() {
        let mut wizard = fpo_onboarding_wizard();
        wizard.set_value("fpo_name", "Vidarbha Farmers Collective");
        wizard.set_value("fpo_code", "VIDARB");
        wizard.set_value("registration_year", "1800");
        let err = wizard.next().unwrap_err();
        assert_eq!(err.field, "registration_year");
        assert!(err.message.starts_with("Year must be between 1950 and "));
    }

    #[test]
    fn test_contact_step_rejects_bad_mobile() {
        let mut wizard = fpo_onboarding_wizard();
        wizard.set_value("fpo_name", "Vidarbha Farmers Collective");
        wizard.set_value("fpo_code", "VIDARB");
        wizard.set_value("registration_year", "2018");
        wizard.next().unwrap();

        wizard.set_value("contact_name", "Savita Deshmukh");
        wizard.set_value("mobile", "5987654321");
        let err = wizard.next().unwrap_err();
        assert_eq!(err.field, "mobile");
    }

    #[test]
    fn test_email_is_optional() {
        let mut wizard = fpo_onboarding_wizard();
        wizard.set_value("contact_name", "Savita Deshmukh");
        wizard.set_value("mobile", "9876543210");
        assert!(wizard.validate_step(STEP_CONTACT).is_ok());

        wizard.set_value("email", "not-an-email");
        assert!(wizard.validate_step(STEP_CONTACT).is_err());
    }
}
