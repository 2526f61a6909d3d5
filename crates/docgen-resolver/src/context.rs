//! Name-resolution service: the injected lookup that turns a bare or
//! partially-qualified name into a fully-qualified one.
//!
//! The resolver is a pure consumer of this service; it never maintains
//! import tables itself. [`ImportContext`] is the standard implementation,
//! applying a source file's import/alias table and current namespace.

use rustc_hash::FxHashMap;
use tracing::trace;

/// Resolve a name against the current file context.
///
/// Total: syntactically valid names always resolve, unresolved ones fall
/// back to a best-effort qualified guess. Implementations take `&self`
/// only, so one context can be shared read-only across traversals.
pub trait NameResolver {
    fn resolve(&self, name: &str) -> String;
}

/// Import/alias table plus current namespace for one source file.
///
/// Lookup follows the host-language convention: the first segment of a name
/// is matched against the alias table (case-insensitively); on a miss the
/// whole name is prefixed with the current namespace, or returned as-is at
/// the global namespace.
#[derive(Debug, Clone, Default)]
pub struct ImportContext {
    /// Current namespace without leading or trailing separator; empty for
    /// the global namespace.
    namespace: String,
    /// Lower-cased alias -> fully-qualified name.
    aliases: FxHashMap<String, String>,
}

impl ImportContext {
    pub fn new(namespace: impl Into<String>) -> ImportContext {
        ImportContext {
            namespace: namespace.into().trim_matches('\\').to_string(),
            aliases: FxHashMap::default(),
        }
    }

    pub fn global() -> ImportContext {
        ImportContext::default()
    }

    /// `use Foo\Bar;` - the alias is the last segment.
    pub fn with_import(self, qualified: &str) -> ImportContext {
        let qualified = qualified.trim_matches('\\');
        let alias = qualified.rsplit('\\').next().unwrap_or(qualified);
        let alias = alias.to_string();
        self.with_alias(&alias, qualified)
    }

    /// `use Foo\Bar as Baz;`
    pub fn with_alias(mut self, alias: &str, qualified: &str) -> ImportContext {
        self.aliases.insert(
            alias.to_ascii_lowercase(),
            qualified.trim_matches('\\').to_string(),
        );
        self
    }
}

impl NameResolver for ImportContext {
    fn resolve(&self, name: &str) -> String {
        let (first, rest) = match name.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };
        let resolved = if let Some(target) = self.aliases.get(&first.to_ascii_lowercase()) {
            match rest {
                Some(rest) => format!("{target}\\{rest}"),
                None => target.clone(),
            }
        } else if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}\\{name}", self.namespace)
        };
        trace!(name, resolved, "resolved class-like name");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_resolves_by_last_segment() {
        let ctx = ImportContext::new("App").with_import("Vendor\\Collections\\Map");
        assert_eq!(ctx.resolve("Map"), "Vendor\\Collections\\Map");
    }

    #[test]
    fn alias_substitutes_first_segment_of_compound_names() {
        let ctx = ImportContext::new("App").with_alias("Coll", "Vendor\\Collections");
        assert_eq!(ctx.resolve("Coll\\Map"), "Vendor\\Collections\\Map");
    }

    #[test]
    fn alias_lookup_is_case_insensitive() {
        let ctx = ImportContext::global().with_import("Vendor\\Map");
        assert_eq!(ctx.resolve("map"), "Vendor\\Map");
    }

    #[test]
    fn miss_falls_back_to_namespace_prefix() {
        let ctx = ImportContext::new("App\\Model");
        assert_eq!(ctx.resolve("User"), "App\\Model\\User");
    }

    #[test]
    fn global_namespace_returns_name_unchanged() {
        let ctx = ImportContext::global();
        assert_eq!(ctx.resolve("User"), "User");
    }
}
