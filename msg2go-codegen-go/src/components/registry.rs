//! Kind tag to translator lookup.

use std::sync::LazyLock;

use indexmap::IndexMap;
use msg2go_graph::Element;

use super::{Button, Component, FromSpec, Heading, Input, Text};
use crate::CompileError;

/// Builds a translator for the element at the given index.
pub type ComponentFactory = fn(usize, &Element) -> Result<Box<dyn Component>, CompileError>;

static BUILTIN: LazyLock<ComponentRegistry> = LazyLock::new(ComponentRegistry::with_builtins);

fn boxed<T: FromSpec>(index: usize, element: &Element) -> Result<Box<dyn Component>, CompileError> {
    Ok(Box::new(T::from_spec(index, element)?))
}

/// Immutable table of translators keyed by element kind.
///
/// Built once and shared read-only by every compilation.
///
/// # Example
///
/// ```ignore
/// let registry = ComponentRegistry::with_builtins().register::<Slider>();
/// let composer = Composer::with_registry(&registry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    factories: IndexMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// A registry with no kinds.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A new registry holding the built-in kinds (text, heading, button, input).
    pub fn with_builtins() -> Self {
        Self::empty()
            .register::<Text>()
            .register::<Heading>()
            .register::<Button>()
            .register::<Input>()
    }

    /// The process-wide registry of built-in kinds.
    pub fn builtin() -> &'static ComponentRegistry {
        &BUILTIN
    }

    /// Register a translator under its [`FromSpec::KIND`].
    pub fn register<T: FromSpec>(self) -> Self {
        self.register_factory(T::KIND, boxed::<T>)
    }

    /// Register a factory under an explicit kind, replacing any previous one.
    pub fn register_factory(mut self, kind: impl Into<String>, factory: ComponentFactory) -> Self {
        self.factories.insert(kind.into(), factory);
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the translator for the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`CompileError::UnprocessableGraph`] if the element has no kind tag
    /// - [`CompileError::UnknownElementKind`] if the kind is not registered
    /// - [`CompileError::MalformedElement`] from the translator itself
    pub fn instantiate(
        &self,
        index: usize,
        element: &Element,
    ) -> Result<Box<dyn Component>, CompileError> {
        let kind = element
            .kind()
            .ok_or_else(|| CompileError::UnprocessableGraph {
                index,
                reason: "element has no kind tag".to_string(),
            })?;

        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| CompileError::UnknownElementKind {
                index,
                kind: kind.to_string(),
                known: self.kinds().collect::<Vec<_>>().join(", "),
            })?;

        factory(index, element)
    }
}

#[cfg(test)]
mod tests {
    use msg2go_codegen::{CodeFragment, ImportSet};

    use super::*;

    #[derive(Debug)]
    struct Spacer;

    impl Component for Spacer {
        fn kind(&self) -> &'static str {
            "spacer"
        }

        fn imports(&self) -> ImportSet {
            let mut imports = ImportSet::new();
            imports.add("gioui.org/unit", "Dp");
            imports
        }

        fn render_base(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(
                "return layout.Spacer{Height: unit.Dp(8)}.Layout(gtx)",
            )]
        }
    }

    impl FromSpec for Spacer {
        const KIND: &'static str = "spacer";

        fn from_spec(_index: usize, _element: &Element) -> Result<Self, CompileError> {
            Ok(Spacer)
        }
    }

    #[test]
    fn test_builtin_kinds() {
        let kinds: Vec<_> = ComponentRegistry::builtin().kinds().collect();
        assert_eq!(kinds, ["text", "heading", "button", "input"]);
    }

    #[test]
    fn test_instantiate_known_kind() {
        let component = ComponentRegistry::builtin()
            .instantiate(0, &Element::new("button").with_value("Go"))
            .unwrap();
        assert_eq!(component.kind(), "button");
    }

    #[test]
    fn test_unknown_kind() {
        let err = ComponentRegistry::builtin()
            .instantiate(0, &Element::new("unknown_widget").with_value("x"))
            .unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownElementKind {
                index: 0,
                kind: "unknown_widget".into(),
                known: "text, heading, button, input".into(),
            }
        );
    }

    #[test]
    fn test_missing_kind() {
        let element = Element {
            value: Some("orphan".into()),
            ..Element::default()
        };
        let err = ComponentRegistry::builtin()
            .instantiate(7, &element)
            .unwrap_err();
        assert!(matches!(err, CompileError::UnprocessableGraph { index: 7, .. }));
    }

    #[test]
    fn test_register_new_kind() {
        let registry = ComponentRegistry::with_builtins().register::<Spacer>();
        assert!(registry.contains("spacer"));

        let component = registry.instantiate(3, &Element::new("spacer")).unwrap();
        assert_eq!(component.kind(), "spacer");
        assert!(!ComponentRegistry::builtin().contains("spacer"));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComponentRegistry>();
    }
}
