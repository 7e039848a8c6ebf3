use super::ExtractionRule;

/// Field names recognised when no list is configured.
pub const DEFAULT_FIELDS: [&str; 6] =
    ["Sprint", "Environment", "Date", "Tickets", "Significant Updates", "Bug Fixes"];

const FIELD_SEPARATOR: &str = " | ";
const CONTINUATION_SEPARATOR: &str = "; ";

/// Reads `Field: value` lines for a fixed set of field names.
///
/// A line with a colon whose left side is exactly a known field name starts
/// that field; any other line with a colon ends the current field. Lines
/// without a colon continue the current field. A field seen twice keeps the
/// later value.
#[derive(Debug, Clone)]
pub struct FieldTemplateRule {
    fields: Vec<String>,
}

impl FieldTemplateRule {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    fn parse(&self, description: &str) -> Vec<Vec<String>> {
        let mut values: Vec<Vec<String>> = vec![Vec::new(); self.fields.len()];
        let mut current: Option<usize> = None;

        for line in description.split('\n') {
            if let Some((name, value)) = line.split_once(':') {
                current = self.fields.iter().position(|field| field == name);
                if let Some(index) = current {
                    values[index] = vec![value.trim().to_string()];
                }
            } else if let Some(index) = current {
                values[index].push(line.trim().to_string());
            }
        }

        values
    }
}

impl Default for FieldTemplateRule {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect())
    }
}

impl ExtractionRule for FieldTemplateRule {
    fn extract(&self, description: &str) -> Option<String> {
        let rendered: Vec<String> = self
            .fields
            .iter()
            .zip(self.parse(description))
            .filter_map(|(field, parts)| {
                let value = parts
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(CONTINUATION_SEPARATOR);
                if value.is_empty() { None } else { Some(format!("{}: {}", field, value)) }
            })
            .collect();

        if rendered.is_empty() { None } else { Some(rendered.join(FIELD_SEPARATOR)) }
    }
}
