use std::collections::HashMap;

use serenity::all::{ActionRow, ActionRowComponent, ResolvedOption, ResolvedValue};

#[derive(Debug, Clone)]
pub struct Options<'a> {
    pub options: Vec<ResolvedOption<'a>>,
}

impl Options<'_> {
    pub fn get_string(&self, name: &str) -> Option<String> {
        for option in &self.options {
            match &option.value {
                ResolvedValue::SubCommandGroup(cmd) | ResolvedValue::SubCommand(cmd) => {
                    let sub_options = Options {
                        options: cmd.clone(),
                    };
                    return sub_options.get_string(name);
                }
                ResolvedValue::String(string) => {
                    if option.name == name {
                        return Some((*string).to_string());
                    }
                }
                _ => continue,
            }
        }
        None
    }
}

/// Text inputs of a submitted modal, keyed by custom id. Blank inputs are left out.
#[derive(Debug, Clone, Default)]
pub struct ModalFields {
    fields: HashMap<String, String>,
}

impl ModalFields {
    pub fn get(&self, custom_id: &str) -> Option<&str> {
        self.fields.get(custom_id).map(String::as_str)
    }

    pub fn get_or_empty(&self, custom_id: &str) -> String {
        self.get(custom_id).unwrap_or_default().to_string()
    }
}

impl FromIterator<(String, String)> for ModalFields {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        ModalFields {
            fields: iter
                .into_iter()
                .filter(|(_, value)| !value.trim().is_empty())
                .collect(),
        }
    }
}

impl From<&[ActionRow]> for ModalFields {
    fn from(rows: &[ActionRow]) -> Self {
        rows.iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => input
                    .value
                    .clone()
                    .map(|value| (input.custom_id.clone(), value)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_absent() {
        let fields = [
            ("giveaway_prize", "Nitro"),
            ("giveaway_image", "   "),
            ("giveaway_duration", "1h"),
        ]
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect::<ModalFields>();

        assert_eq!(fields.get("giveaway_prize"), Some("Nitro"));
        assert_eq!(fields.get("giveaway_duration"), Some("1h"));
        assert_eq!(fields.get("giveaway_image"), None);
        assert_eq!(fields.get_or_empty("giveaway_winners"), "");
    }
}
