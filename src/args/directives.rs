//! Capture of `--<plugin>_out` / `--<plugin>_opt` directives.

/// Which half of a plugin directive a flag sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Out,
    Opt,
}

impl DirectiveKind {
    /// Flag-name suffix that selects this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            DirectiveKind::Out => "_out",
            DirectiveKind::Opt => "_opt",
        }
    }
}

/// Positions of one plugin's directives in the collector's value sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluginDirectiveIndex {
    pub out: Option<usize>,
    pub opt: Option<usize>,
}

/// Raw plugin directives seen by a single expansion, in encounter order.
///
/// Pure capture: nothing is validated here. A repeated directive overwrites
/// the index and is remembered so the resolver can reject it.
#[derive(Debug, Clone, Default)]
pub struct DirectiveCollector {
    values: Vec<String>,
    plugins: Vec<(String, PluginDirectiveIndex)>,
    duplicate: Option<(String, DirectiveKind)>,
}

impl DirectiveCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` and point the plugin's `kind` index at it.
    pub fn record(&mut self, plugin: &str, kind: DirectiveKind, value: String) {
        let index = self.values.len();
        self.values.push(value);

        let pos = match self.plugins.iter().position(|(name, _)| name == plugin) {
            Some(pos) => pos,
            None => {
                self.plugins
                    .push((plugin.to_string(), PluginDirectiveIndex::default()));
                self.plugins.len() - 1
            }
        };
        let entry = &mut self.plugins[pos].1;
        let slot = match kind {
            DirectiveKind::Out => &mut entry.out,
            DirectiveKind::Opt => &mut entry.opt,
        };
        if slot.is_some() && self.duplicate.is_none() {
            self.duplicate = Some((plugin.to_string(), kind));
        }
        *slot = Some(index);
        tracing::trace!(plugin, ?kind, index, "captured plugin directive");
    }

    /// Raw value at `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Plugins in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PluginDirectiveIndex)> {
        self.plugins.iter().map(|(name, index)| (name.as_str(), index))
    }

    /// First plugin/kind given more than once, if any.
    pub fn first_duplicate(&self) -> Option<(&str, DirectiveKind)> {
        self.duplicate
            .as_ref()
            .map(|(name, kind)| (name.as_str(), *kind))
    }
}
