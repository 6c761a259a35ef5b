//! Merging the options of a nested argument file into its parent.

use crate::args::options::{OptionField, OptionSet};

/// How a child's value for one field combines with the parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Child values are appended after the parent's.
    Append,
    /// Logical OR: once on, a flag never turns off.
    Or,
    /// A non-empty child value replaces the parent's.
    OverrideNonEmpty,
}

/// One field of a parent and a child set, borrowed together under its merge rule.
///
/// Each variant fixes both the rule and the slot type, so a rule can never be
/// paired with a slot it does not fit.
enum FieldMerge<'a> {
    Append(&'a mut Vec<String>, &'a [String]),
    Or(&'a mut bool, bool),
    OverrideNonEmpty(&'a mut String, &'a str),
}

/// The merge table.
fn field_merge<'a>(
    parent: &'a mut OptionSet,
    child: &'a OptionSet,
    field: OptionField,
) -> FieldMerge<'a> {
    use FieldMerge::*;
    match field {
        OptionField::IncludeDirPaths => {
            Append(&mut parent.include_dir_paths, &child.include_dir_paths)
        }
        OptionField::IncludeImports => Or(&mut parent.include_imports, child.include_imports),
        OptionField::IncludeSourceInfo => {
            Or(&mut parent.include_source_info, child.include_source_info)
        }
        OptionField::PrintFreeFieldNumbers => {
            Or(&mut parent.print_free_field_numbers, child.print_free_field_numbers)
        }
        OptionField::Output => OverrideNonEmpty(&mut parent.output, &child.output),
        OptionField::ErrorFormat => {
            OverrideNonEmpty(&mut parent.error_format, &child.error_format)
        }
        OptionField::PluginPathValues => {
            Append(&mut parent.plugin_path_values, &child.plugin_path_values)
        }
        OptionField::Encode => OverrideNonEmpty(&mut parent.encode, &child.encode),
        OptionField::Decode => OverrideNonEmpty(&mut parent.decode, &child.decode),
        OptionField::DecodeRaw => Or(&mut parent.decode_raw, child.decode_raw),
        OptionField::DescriptorSetIn => {
            Append(&mut parent.descriptor_set_in, &child.descriptor_set_in)
        }
    }
}

impl FieldMerge<'_> {
    fn policy(&self) -> MergePolicy {
        match self {
            FieldMerge::Append(..) => MergePolicy::Append,
            FieldMerge::Or(..) => MergePolicy::Or,
            FieldMerge::OverrideNonEmpty(..) => MergePolicy::OverrideNonEmpty,
        }
    }

    fn apply(self) {
        match self {
            FieldMerge::Append(dst, src) => dst.extend_from_slice(src),
            FieldMerge::Or(dst, src) => *dst |= src,
            FieldMerge::OverrideNonEmpty(dst, src) => {
                if !src.is_empty() {
                    *dst = src.to_string();
                }
            }
        }
    }
}

impl OptionField {
    /// The merge rule for this field.
    pub fn merge_policy(self) -> MergePolicy {
        field_merge(&mut OptionSet::default(), &OptionSet::default(), self).policy()
    }
}

impl OptionSet {
    /// Fold a nested expansion's options into this one, field by field.
    pub fn merge(&mut self, child: &OptionSet) {
        for &field in OptionField::all() {
            field_merge(self, child, field).apply();
        }
    }
}
