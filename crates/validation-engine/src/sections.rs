//! Fixed field tables for each quote section.
//!
//! Each entry pairs the display name used in report lines, the canonical
//! fixture key, and the label as it appears in the extracted PDF text.
//! Declaration order is report order.

use quote_types::Section;

/// One row of a section's field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub fixture_key: &'static str,
    pub source_label: &'static str,
}

const fn field(
    name: &'static str,
    fixture_key: &'static str,
    source_label: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        fixture_key,
        source_label,
    }
}

pub const INSURANT_FIELDS: &[FieldSpec] = &[
    field("First Name", "firstname", "First Name"),
    field("Last Name", "lastname", "Last Name"),
    // The quote PDF renders the birth date under a different label
    field("Date of Birth", "dateofbirth", "Birthdate"),
    field("Street Address", "streetaddress", "Street Address"),
    field("Country", "country", "Country"),
    field("ZIP Code", "zipcode", "ZIP"),
    field("City", "city", "City"),
    field("Occupation", "occupation", "Occupation"),
];

pub const VEHICLE_FIELDS: &[FieldSpec] = &[
    field("Make", "make", "Make"),
    field("Engine Performance", "engineperformance", "Engine Performance"),
    field("Number of Seats", "numberofseats", "Number of Seats"),
    field("Fuel Type", "fuel", "Fuel Type"),
    field("List Price", "listprice", "List Price"),
    field("Annual Mileage", "annualmileage", "Annual Mileage"),
];

pub const PRODUCT_FIELDS: &[FieldSpec] = &[
    field("Insurance Sum", "insurancesum", "Insurance Sum"),
    field("Merit Rating", "meritrating", "Merit Rating"),
    field("Damage Insurance", "damageinsurance", "Damage Insurance"),
    field("Courtesy Car", "courtesycar", "Courtesy Car"),
];

/// The field table behind a section. Pricing has no table; it goes through
/// the dedicated pricing extraction instead.
pub fn fields_for(section: Section) -> &'static [FieldSpec] {
    match section {
        Section::Insurant => INSURANT_FIELDS,
        Section::Vehicle => VEHICLE_FIELDS,
        Section::Product => PRODUCT_FIELDS,
        Section::Pricing => &[],
    }
}
