//! # Catalog Module
//!
//! The registry of reusable gameplay components offered by the visual builder.
//!
//! A [`Component`] is a named capability such as "jump" or "shooting". Each one
//! offers two or more [`Variant`]s, alternative implementations carrying a
//! source template, declared parameters, and asset slots. The [`Registry`] is
//! built once by the host and lent to the assembler; it is never mutated while
//! documents are being generated.

pub mod combat;
pub mod movement;
pub mod ui;
pub mod world;

use crate::assembler::PlaceholderSyntax;
use crate::{Color, GameLabError, GameLabResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Broad grouping of components in the builder palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Player locomotion
    Movement,
    /// Attacks and projectiles
    Combat,
    /// On-screen overlays
    Ui,
    /// Rules of the game world
    World,
}

impl Category {
    /// All categories in palette order.
    pub const ALL: [Category; 4] = [
        Category::Movement,
        Category::Combat,
        Category::Ui,
        Category::World,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Movement => "Movement",
            Category::Combat => "Combat",
            Category::Ui => "UI",
            Category::World => "World",
        }
    }

    /// Palette icon.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Movement => "🏃",
            Category::Combat => "⚔️",
            Category::Ui => "📊",
            Category::World => "🌍",
        }
    }

    /// Accent color used for palette cards.
    pub fn accent(self) -> Color {
        match self {
            Category::Movement => Color::new(59, 130, 246),
            Category::Combat => Color::new(239, 68, 68),
            Category::Ui => Color::new(34, 197, 94),
            Category::World => Color::new(168, 85, 247),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Declared type of a template parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Number,
    Text,
    Boolean,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Number => "number",
            ParamKind::Text => "text",
            ParamKind::Boolean => "boolean",
        })
    }
}

/// A concrete parameter value, either a default or a user override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Boolean(_) => ParamKind::Boolean,
            ParamValue::Number(_) => ParamKind::Number,
            ParamValue::Text(_) => ParamKind::Text,
        }
    }

    /// Interprets command-line text as a value of the declared kind.
    ///
    /// Text takes the raw string unchanged. Numbers must be finite and
    /// booleans are `true` or `false` in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamelab::{ParamKind, ParamValue};
    ///
    /// assert_eq!(ParamValue::parse_as(ParamKind::Number, "25"), Some(ParamValue::Number(25.0)));
    /// assert_eq!(ParamValue::parse_as(ParamKind::Text, "2024"), Some(ParamValue::Text("2024".to_string())));
    /// assert_eq!(ParamValue::parse_as(ParamKind::Boolean, "yes"), None);
    /// ```
    pub fn parse_as(kind: ParamKind, text: &str) -> Option<Self> {
        match kind {
            ParamKind::Text => Some(ParamValue::Text(text.to_string())),
            ParamKind::Number => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(ParamValue::Number),
            ParamKind::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Some(ParamValue::Boolean(true)),
                "false" => Some(ParamValue::Boolean(false)),
                _ => None,
            },
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// A named, typed parameter declared by a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub default: ParamValue,
    pub description: String,
}

impl ParamSpec {
    /// Declares a numeric parameter.
    pub fn number(name: &str, default: f64, description: &str) -> Self {
        Self::new(name, ParamKind::Number, ParamValue::Number(default), description)
    }

    /// Declares a text parameter.
    pub fn text(name: &str, default: &str, description: &str) -> Self {
        Self::new(name, ParamKind::Text, ParamValue::Text(default.to_string()), description)
    }

    /// Declares a boolean parameter.
    pub fn boolean(name: &str, default: bool, description: &str) -> Self {
        Self::new(name, ParamKind::Boolean, ParamValue::Boolean(default), description)
    }

    fn new(name: &str, kind: ParamKind, default: ParamValue, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default,
            description: description.to_string(),
        }
    }
}

/// A named asset reference (sound, image) a template can load.
///
/// An empty default means "no asset"; generated code skips loading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSlot {
    pub name: String,
    pub default: String,
    pub description: String,
}

impl AssetSlot {
    pub fn new(name: &str, default: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            default: default.to_string(),
            description: description.to_string(),
        }
    }
}

/// One implementation strategy for a component.
///
/// The template is the indented body of a Python class; the assembler emits
/// the class header itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub description: String,
    pub template: String,
    pub params: Vec<ParamSpec>,
    pub assets: Vec<AssetSlot>,
}

impl Variant {
    /// Creates a variant with no parameters or asset slots.
    pub fn new(name: &str, description: &str, template: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            template: template.to_string(),
            params: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// Adds a parameter declaration.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    /// Adds an asset slot declaration.
    pub fn asset(mut self, slot: AssetSlot) -> Self {
        self.assets.push(slot);
        self
    }

    /// Finds a declared parameter by name.
    pub fn find_param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }

    /// Finds a declared asset slot by name.
    pub fn find_asset(&self, name: &str) -> Option<&AssetSlot> {
        self.assets.iter().find(|slot| slot.name == name)
    }
}

/// A named gameplay capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Stable identifier used by selections
    pub id: String,
    /// Display name
    pub name: String,
    pub category: Category,
    /// Python class name emitted for this component
    pub class_name: String,
    pub variants: BTreeMap<char, Variant>,
}

impl Component {
    pub fn new(id: &str, name: &str, category: Category, class_name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            class_name: class_name.to_string(),
            variants: BTreeMap::new(),
        }
    }

    /// Adds a variant under the given key.
    pub fn variant(mut self, key: char, variant: Variant) -> Self {
        self.variants.insert(key, variant);
        self
    }
}

/// Read-only lookup table of components.
///
/// # Examples
///
/// ```
/// use gamelab::{Category, Registry};
///
/// let registry = Registry::builtin().unwrap();
/// let jump = registry.get("jump").unwrap();
/// assert_eq!(jump.category, Category::Movement);
/// assert!(registry.variant("jump", 'B').is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RegistryFile")]
pub struct Registry {
    components: Vec<Component>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry shipped with the builder.
    pub fn builtin() -> GameLabResult<Self> {
        let mut registry = Self::new();
        for component in movement::components()
            .into_iter()
            .chain(combat::components())
            .chain(ui::components())
            .chain(world::components())
        {
            registry.register(component)?;
        }
        Ok(registry)
    }

    /// Builds a registry from a list of components, e.g. one loaded from JSON.
    pub fn from_components(components: Vec<Component>) -> GameLabResult<Self> {
        let mut registry = Self::new();
        for component in components {
            registry.register(component)?;
        }
        Ok(registry)
    }

    /// Adds a component. Ids must be unique.
    pub fn register(&mut self, component: Component) -> GameLabResult<()> {
        if self.index.contains_key(&component.id) {
            return Err(GameLabError::DuplicateComponent(component.id));
        }
        self.index.insert(component.id.clone(), self.components.len());
        self.components.push(component);
        Ok(())
    }

    /// Looks up a component by id.
    pub fn get(&self, id: &str) -> GameLabResult<&Component> {
        self.index
            .get(id)
            .map(|&i| &self.components[i])
            .ok_or_else(|| GameLabError::ComponentNotFound(id.to_string()))
    }

    /// Looks up a component together with one of its variants.
    pub fn variant(&self, id: &str, key: char) -> GameLabResult<(&Component, &Variant)> {
        let component = self.get(id)?;
        let variant = component
            .variants
            .get(&key)
            .ok_or_else(|| GameLabError::VariantNotFound {
                component: id.to_string(),
                variant: key,
            })?;
        Ok((component, variant))
    }

    /// All components in registration order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Components belonging to one category, in registration order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(move |component| component.category == category)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Checks every template against its declarations.
    ///
    /// Each placeholder must name a declared parameter or asset slot, each
    /// parameter default must match its declared kind, and every component
    /// must offer at least two variants.
    pub fn validate(&self, syntax: &PlaceholderSyntax) -> GameLabResult<()> {
        for component in &self.components {
            if component.variants.len() < 2 {
                return Err(GameLabError::InvalidTemplate(format!(
                    "component '{}' declares {} variant(s), expected at least 2",
                    component.id,
                    component.variants.len()
                )));
            }

            for (key, variant) in &component.variants {
                for spec in &variant.params {
                    if spec.default.kind() != spec.kind {
                        return Err(GameLabError::InvalidTemplate(format!(
                            "{}:{} parameter '{}' is declared {} but defaults to {}",
                            component.id,
                            key,
                            spec.name,
                            spec.kind,
                            spec.default.kind()
                        )));
                    }
                }

                for name in syntax.placeholders(&variant.template) {
                    if variant.find_param(&name).is_none() && variant.find_asset(&name).is_none() {
                        return Err(GameLabError::InvalidTemplate(format!(
                            "{}:{} uses undeclared placeholder '{}'",
                            component.id, key, name
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Loads a registry from its JSON form.
    pub fn from_json(json: &str) -> GameLabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serialized shape of a [`Registry`]; the id index is rebuilt on load.
#[derive(Deserialize)]
struct RegistryFile {
    components: Vec<Component>,
}

impl TryFrom<RegistryFile> for Registry {
    type Error = GameLabError;

    fn try_from(file: RegistryFile) -> GameLabResult<Self> {
        Registry::from_components(file.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_component(id: &str) -> Component {
        Component::new(id, "Sample", Category::World, "SampleSystem")
            .variant(
                'A',
                Variant::new("First", "first", "    def __init__(self):\n        self.n = ${n}\n")
                    .param(ParamSpec::number("n", 1.0, "count")),
            )
            .variant('B', Variant::new("Second", "second", "    pass\n"))
    }

    #[test]
    fn test_builtin_registry_contents() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), 8);
        for category in Category::ALL {
            assert_eq!(registry.by_category(category).count(), 2);
        }
    }

    #[test]
    fn test_builtin_templates_are_consistent() {
        let registry = Registry::builtin().unwrap();
        let syntax = PlaceholderSyntax::new().unwrap();
        registry.validate(&syntax).unwrap();
    }

    #[test]
    fn test_lookup_failures() {
        let registry = Registry::builtin().unwrap();
        assert!(matches!(
            registry.get("teleport"),
            Err(GameLabError::ComponentNotFound(id)) if id == "teleport"
        ));
        assert!(matches!(
            registry.variant("jump", 'Z'),
            Err(GameLabError::VariantNotFound { variant: 'Z', .. })
        ));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = Registry::new();
        registry.register(sample_component("sample")).unwrap();
        assert!(matches!(
            registry.register(sample_component("sample")),
            Err(GameLabError::DuplicateComponent(_))
        ));
    }

    #[test]
    fn test_validate_catches_undeclared_placeholder() {
        let mut component = sample_component("broken");
        component
            .variants
            .get_mut(&'B')
            .unwrap()
            .template
            .push_str("        self.speed = ${speed}\n");
        let registry = Registry::from_components(vec![component]).unwrap();
        let syntax = PlaceholderSyntax::new().unwrap();
        let err = registry.validate(&syntax).unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn test_validate_catches_kind_mismatch() {
        let mut component = sample_component("mismatch");
        component.variants.get_mut(&'A').unwrap().params[0].kind = ParamKind::Text;
        let registry = Registry::from_components(vec![component]).unwrap();
        let syntax = PlaceholderSyntax::new().unwrap();
        assert!(registry.validate(&syntax).is_err());
    }

    #[test]
    fn test_validate_requires_two_variants() {
        let mut component = sample_component("lonely");
        component.variants.remove(&'B');
        let registry = Registry::from_components(vec![component]).unwrap();
        let syntax = PlaceholderSyntax::new().unwrap();
        assert!(registry.validate(&syntax).is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_index() {
        let registry = Registry::builtin().unwrap();
        let json = serde_json::to_string(&registry).unwrap();
        let loaded = Registry::from_json(&json).unwrap();
        assert_eq!(loaded.len(), registry.len());
        assert!(loaded.get("score").is_ok());
    }

    #[test]
    fn test_plain_deserialize_builds_index() {
        let json = serde_json::to_string(&Registry::builtin().unwrap()).unwrap();
        let loaded: Registry = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.get("jump").unwrap().class_name, "JumpSystem");
        assert!(loaded.variant("boundaries", 'B').is_ok());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let component = serde_json::to_value(sample_component("twice")).unwrap();
        let json = serde_json::json!({ "components": [component.clone(), component] }).to_string();
        let err = serde_json::from_str::<Registry>(&json).unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn test_parse_as_follows_declared_kind() {
        assert_eq!(ParamValue::parse_as(ParamKind::Text, "true"), Some("true".into()));
        assert_eq!(ParamValue::parse_as(ParamKind::Text, " 10 "), Some(" 10 ".into()));
        assert_eq!(ParamValue::parse_as(ParamKind::Number, "-2.5"), Some((-2.5).into()));
        assert_eq!(ParamValue::parse_as(ParamKind::Number, "inf"), None);
        assert_eq!(ParamValue::parse_as(ParamKind::Number, "fast"), None);
        assert_eq!(ParamValue::parse_as(ParamKind::Boolean, "False"), Some(false.into()));
        assert_eq!(ParamValue::parse_as(ParamKind::Boolean, "1"), None);
    }

    #[test]
    fn test_param_value_json_forms() {
        let values: Vec<ParamValue> = serde_json::from_str(r#"[25, "red", true]"#).unwrap();
        assert_eq!(values[0], ParamValue::Number(25.0));
        assert_eq!(values[1].kind(), ParamKind::Text);
        assert_eq!(values[2], ParamValue::Boolean(true));
    }

    #[test]
    fn test_category_bundles_are_distinct() {
        let accents: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.accent()).collect();
        assert_eq!(accents.len(), 4);
        assert_eq!(Category::Ui.label(), "UI");
    }
}
