#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldOutcome {
    pub field_name: String,
    pub expected: String,
    pub actual: Option<String>, // None when the label was not found in the text
    pub matched: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub results: Vec<String>, // One formatted line per field, in table order
    pub raw_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Section {
    Insurant,
    Vehicle,
    Product,
    Pricing,
}
