mod component;
mod config;
mod convert;
mod error;
mod legacy;
mod template;

pub use component::{ClickAction, ClickEvent, Color, Component, HoverEvent};
pub use config::Config;
pub use convert::document as convert_document;
pub use error::Error;
pub use legacy::translate_ampersand_codes;
pub use template::substitute;

use std::collections::HashMap;

use roxmltree::Document;

/// Convert XML chat markup into its root component, with no variables.
pub fn xml_to_component(xml: &str) -> Result<Component, Error> {
    xml_to_component_with(xml, &HashMap::new())
}

/// Convert XML chat markup into its root component, expanding `{{key}}`
/// tokens from the supplied variable table.
pub fn xml_to_component_with(
    xml: &str,
    variables: &HashMap<String, String>,
) -> Result<Component, Error> {
    let doc = Document::parse(xml)?;
    convert::document(&doc, variables)
}

/// Convert XML chat markup straight to compact JSON.
pub fn xml_to_json(xml: &str) -> Result<String, Error> {
    xml_to_json_with(xml, &HashMap::new())
}

/// Convert XML chat markup straight to compact JSON with variables.
pub fn xml_to_json_with(xml: &str, variables: &HashMap<String, String>) -> Result<String, Error> {
    let component = xml_to_component_with(xml, variables)?;
    Ok(serde_json::to_string(&component)?)
}
