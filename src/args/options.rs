//! Global (non-plugin) option values bound from built-in flags.

use crate::args::error::ArgsError;

/// Identifies one storage slot of [`OptionSet`].
///
/// Adding an option: add a variant here, a slot in `OptionSet`, an entry in
/// `flag_registry()` and a merge rule in `OptionField::merge_policy()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    IncludeDirPaths,
    IncludeImports,
    IncludeSourceInfo,
    PrintFreeFieldNumbers,
    Output,
    ErrorFormat,
    PluginPathValues,
    Encode,
    Decode,
    DecodeRaw,
    DescriptorSetIn,
}

impl OptionField {
    /// All variants for iteration.
    pub fn all() -> &'static [OptionField] {
        &[
            Self::IncludeDirPaths,
            Self::IncludeImports,
            Self::IncludeSourceInfo,
            Self::PrintFreeFieldNumbers,
            Self::Output,
            Self::ErrorFormat,
            Self::PluginPathValues,
            Self::Encode,
            Self::Decode,
            Self::DecodeRaw,
            Self::DescriptorSetIn,
        ]
    }
}

/// Option values collected by a single expansion.
///
/// Nothing is defaulted here: an empty slot means "not given", which is what
/// lets nested argument files be merged without clobbering their parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    pub include_dir_paths: Vec<String>,
    pub include_imports: bool,
    pub include_source_info: bool,
    pub print_free_field_numbers: bool,
    pub output: String,
    pub error_format: String,
    pub plugin_path_values: Vec<String>,
    pub encode: String,
    pub decode: String,
    pub decode_raw: bool,
    pub descriptor_set_in: Vec<String>,
}

/// Shared view of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    List(&'a [String]),
    Flag(bool),
    Text(&'a str),
}

/// Mutable view of one slot.
#[derive(Debug)]
pub enum SlotMut<'a> {
    List(&'a mut Vec<String>),
    Flag(&'a mut bool),
    Text(&'a mut String),
}

impl OptionSet {
    pub fn slot(&self, field: OptionField) -> Slot<'_> {
        match field {
            OptionField::IncludeDirPaths => Slot::List(&self.include_dir_paths),
            OptionField::IncludeImports => Slot::Flag(self.include_imports),
            OptionField::IncludeSourceInfo => Slot::Flag(self.include_source_info),
            OptionField::PrintFreeFieldNumbers => Slot::Flag(self.print_free_field_numbers),
            OptionField::Output => Slot::Text(&self.output),
            OptionField::ErrorFormat => Slot::Text(&self.error_format),
            OptionField::PluginPathValues => Slot::List(&self.plugin_path_values),
            OptionField::Encode => Slot::Text(&self.encode),
            OptionField::Decode => Slot::Text(&self.decode),
            OptionField::DecodeRaw => Slot::Flag(self.decode_raw),
            OptionField::DescriptorSetIn => Slot::List(&self.descriptor_set_in),
        }
    }

    pub fn slot_mut(&mut self, field: OptionField) -> SlotMut<'_> {
        match field {
            OptionField::IncludeDirPaths => SlotMut::List(&mut self.include_dir_paths),
            OptionField::IncludeImports => SlotMut::Flag(&mut self.include_imports),
            OptionField::IncludeSourceInfo => SlotMut::Flag(&mut self.include_source_info),
            OptionField::PrintFreeFieldNumbers => SlotMut::Flag(&mut self.print_free_field_numbers),
            OptionField::Output => SlotMut::Text(&mut self.output),
            OptionField::ErrorFormat => SlotMut::Text(&mut self.error_format),
            OptionField::PluginPathValues => SlotMut::List(&mut self.plugin_path_values),
            OptionField::Encode => SlotMut::Text(&mut self.encode),
            OptionField::Decode => SlotMut::Text(&mut self.decode),
            OptionField::DecodeRaw => SlotMut::Flag(&mut self.decode_raw),
            OptionField::DescriptorSetIn => SlotMut::List(&mut self.descriptor_set_in),
        }
    }

    /// Whether the slot holds anything other than its zero value.
    pub fn is_set(&self, field: OptionField) -> bool {
        match self.slot(field) {
            Slot::List(values) => !values.is_empty(),
            Slot::Flag(value) => value,
            Slot::Text(value) => !value.is_empty(),
        }
    }

    /// Bind one occurrence of a flag.
    ///
    /// List slots split the value on commas. Boolean slots treat a missing
    /// value as `true`. Single-valued slots keep the last occurrence.
    pub fn bind(
        &mut self,
        field: OptionField,
        flag: &str,
        value: Option<&str>,
    ) -> Result<(), ArgsError> {
        match self.slot_mut(field) {
            SlotMut::List(values) => {
                let value = value.ok_or_else(|| ArgsError::MissingValue {
                    flag: flag.to_string(),
                })?;
                values.extend(value.split(',').map(String::from));
            }
            SlotMut::Flag(slot) => {
                *slot = match value {
                    None => true,
                    Some(v) => parse_bool(v).ok_or_else(|| ArgsError::InvalidBoolValue {
                        flag: flag.to_string(),
                        value: v.to_string(),
                    })?,
                };
            }
            SlotMut::Text(slot) => {
                let value = value.ok_or_else(|| ArgsError::MissingValue {
                    flag: flag.to_string(),
                })?;
                *slot = value.to_string();
            }
        }
        Ok(())
    }
}

/// Boolean spellings accepted by the target tool's flag parser.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
