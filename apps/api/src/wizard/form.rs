//! Intake form draft and field validation.

use crate::i18n::{t, Language};
use crate::models::catalog::{find_country, find_province, province_by_key};
use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Nationality,
    Profession,
    YearsExperience,
    Province,
    Email,
}

impl FormField {
    /// Order in which the conversational form asks for each field.
    pub const ALL: [FormField; 6] = [
        FormField::FullName,
        FormField::Nationality,
        FormField::Profession,
        FormField::YearsExperience,
        FormField::Province,
        FormField::Email,
    ];

    pub fn message(self, language: Language) -> &'static str {
        let key = match self {
            FormField::FullName => "form.invalid.fullName",
            FormField::Nationality => "form.invalid.nationality",
            FormField::Profession => "form.invalid.profession",
            FormField::YearsExperience => "form.invalid.yearsExperience",
            FormField::Province => "form.invalid.province",
            FormField::Email => "form.invalid.email",
        };
        t(language, key)
    }
}

/// Partially filled form. Values are stored normalized (canonical country,
/// province key) once accepted by [`FormDraft::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub full_name: String,
    pub nationality: String,
    pub profession: String,
    pub years_experience: u32,
    pub province: String,
    pub email: String,
}

impl FormDraft {
    /// Validates and stores one field. Returns the field back on rejection.
    pub fn set(&mut self, field: FormField, input: &str, language: Language) -> Result<(), FormField> {
        let input = input.trim();
        match field {
            FormField::FullName if !input.is_empty() => self.full_name = input.to_string(),
            FormField::Nationality => {
                self.nationality = find_country(input).ok_or(field)?.to_string();
            }
            FormField::Profession if !input.is_empty() => self.profession = input.to_string(),
            FormField::YearsExperience => {
                self.years_experience = input
                    .parse::<u32>()
                    .ok()
                    .filter(|years| *years > 0)
                    .ok_or(field)?;
            }
            FormField::Province => {
                self.province = find_province(input, language).ok_or(field)?.key.to_string();
            }
            FormField::Email if is_plausible_email(input) => self.email = input.to_string(),
            _ => return Err(field),
        }
        Ok(())
    }

    /// Fields that would block submission, in form order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| match field {
                FormField::FullName => self.full_name.trim().is_empty(),
                FormField::Nationality => find_country(&self.nationality).is_none(),
                FormField::Profession => self.profession.trim().is_empty(),
                FormField::YearsExperience => self.years_experience == 0,
                FormField::Province => province_by_key(&self.province).is_none(),
                FormField::Email => !is_plausible_email(&self.email),
            })
            .collect()
    }

    /// Current value of `field`, if one has been accepted.
    pub fn value(&self, field: FormField) -> Option<String> {
        if self.invalid_fields().contains(&field) {
            return None;
        }
        Some(match field {
            FormField::FullName => self.full_name.clone(),
            FormField::Nationality => self.nationality.clone(),
            FormField::Profession => self.profession.clone(),
            FormField::YearsExperience => self.years_experience.to_string(),
            FormField::Province => self.province.clone(),
            FormField::Email => self.email.clone(),
        })
    }

    /// Builds the immutable `Profile`, stamped with the display language.
    pub fn into_profile(self, language: Language) -> Result<Profile, Vec<FormField>> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(invalid);
        }
        Ok(Profile {
            full_name: self.full_name,
            nationality: self.nationality,
            profession: self.profession,
            years_experience: self.years_experience,
            province: self.province,
            email: self.email,
            display_language: language,
        })
    }
}

impl From<&Profile> for FormDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            nationality: profile.nationality.clone(),
            profession: profile.profession.clone(),
            years_experience: profile.years_experience,
            province: profile.province.clone(),
            email: profile.email.clone(),
        }
    }
}

fn is_plausible_email(input: &str) -> bool {
    let input = input.trim();
    !input.is_empty() && input.contains('@')
}
