//! # Assembler Module
//!
//! Turns a scene configuration and an ordered list of component selections
//! into one runnable pygame script.
//!
//! The output is a pure function of the inputs and the registry: identical
//! arguments always produce byte-identical text. Nothing here reconciles
//! overlapping components. Two selections that both carry a gravity constant
//! both land in the document, and systems run in selection order.

pub mod literal;
pub mod skeleton;
pub mod template;

pub use template::*;

use crate::{config, Color, Component, GameLabError, GameLabResult, ParamValue, Registry, Variant};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Window and timing settings of a generated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    /// Window caption
    pub name: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Target frame rate
    pub fps: u32,
    /// Background as `#rrggbb`
    pub background_color: String,
}

impl SceneConfig {
    /// Creates a scene with default size, frame rate, and background.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamelab::SceneConfig;
    ///
    /// let scene = SceneConfig::new("Platformer");
    /// assert_eq!(scene.fps, 60);
    /// assert!(scene.validate().is_ok());
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            width: config::DEFAULT_SCENE_WIDTH,
            height: config::DEFAULT_SCENE_HEIGHT,
            fps: config::TARGET_FPS,
            background_color: config::DEFAULT_BACKGROUND.to_string(),
        }
    }

    /// Creates a small scene for tests and previews.
    pub fn for_testing() -> Self {
        Self {
            name: "Test Scene".to_string(),
            width: config::CANVAS_WIDTH,
            height: config::CANVAS_HEIGHT,
            fps: 30,
            background_color: "#000000".to_string(),
        }
    }

    /// Checks dimensions, frame rate, and background color.
    pub fn validate(&self) -> GameLabResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameLabError::InvalidScene(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(GameLabError::InvalidScene(
                "frame rate must be positive".to_string(),
            ));
        }
        Color::from_hex(&self.background_color)?;
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new("My Game")
    }
}

/// A user's choice of one component at one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSelection {
    pub component_id: String,
    pub variant: char,
    /// Overrides for declared parameter defaults
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
    /// Overrides for declared asset slots
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
}

impl ComponentSelection {
    pub fn new(component_id: &str, variant: char) -> Self {
        Self {
            component_id: component_id.to_string(),
            variant,
            parameters: BTreeMap::new(),
            assets: BTreeMap::new(),
        }
    }

    /// Overrides a parameter.
    pub fn with_parameter(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    /// Binds an asset slot.
    pub fn with_asset(mut self, slot: &str, path: &str) -> Self {
        self.assets.insert(slot.to_string(), path.to_string());
        self
    }
}

/// A saved builder session: one scene plus its selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub selections: Vec<ComponentSelection>,
}

impl Blueprint {
    pub fn from_json(json: &str) -> GameLabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a blueprint from a JSON file.
    pub fn load(path: &Path) -> GameLabResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Writes the blueprint as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> GameLabResult<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Builds pygame scripts from component selections.
///
/// # Examples
///
/// ```
/// use gamelab::{Assembler, ComponentSelection, Registry, SceneConfig};
///
/// let registry = Registry::builtin().unwrap();
/// let assembler = Assembler::new(&registry).unwrap();
/// let source = assembler
///     .assemble(&SceneConfig::default(), &[ComponentSelection::new("walk", 'A')])
///     .unwrap();
/// assert!(source.contains("class WalkSystem(System):"));
/// ```
pub struct Assembler<'r> {
    registry: &'r Registry,
    syntax: PlaceholderSyntax,
}

impl<'r> Assembler<'r> {
    pub fn new(registry: &'r Registry) -> GameLabResult<Self> {
        Ok(Self {
            registry,
            syntax: PlaceholderSyntax::new()?,
        })
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Assembles a complete script.
    ///
    /// Fails on an invalid scene, an unknown component or variant, an override
    /// the variant does not declare or of the wrong kind, and on any
    /// placeholder left in the output.
    pub fn assemble(
        &self,
        scene: &SceneConfig,
        selections: &[ComponentSelection],
    ) -> GameLabResult<String> {
        scene.validate()?;
        let background = Color::from_hex(&scene.background_color)?;

        debug!(
            "Assembling {} selection(s) for scene '{}'",
            selections.len(),
            scene.name
        );

        let mut classes = Vec::with_capacity(selections.len());
        let mut class_names = Vec::with_capacity(selections.len());

        for selection in selections {
            let (component, variant) = self
                .registry
                .variant(&selection.component_id, selection.variant)?;
            let bindings = self.bindings_for(component, variant, selection)?;
            let body = self.syntax.substitute(&variant.template, &bindings)?;

            debug!(
                "Resolved {}:{} with {} binding(s)",
                component.id,
                selection.variant,
                bindings.len()
            );

            classes.push(skeleton::class_definition(
                component,
                selection.variant,
                variant,
                &body,
            ));
            class_names.push(component.class_name.as_str());
        }

        let mut document = skeleton::header(scene, background);
        document.push_str("\n\n");
        document.push_str(skeleton::system_base());
        for class in &classes {
            document.push_str("\n\n");
            document.push_str(class);
        }
        document.push_str("\n\n");
        document.push_str(skeleton::player());
        document.push_str("\n\n");
        document.push_str(&skeleton::game_loop(&class_names));
        document.push('\n');
        document.push_str(skeleton::footer());

        self.syntax.ensure_resolved(&document)?;
        Ok(document)
    }

    /// Assembles the scene and selections of a blueprint.
    pub fn assemble_blueprint(&self, blueprint: &Blueprint) -> GameLabResult<String> {
        self.assemble(&blueprint.scene, &blueprint.selections)
    }

    /// Resolves every declared parameter and asset slot to a literal.
    fn bindings_for(
        &self,
        component: &Component,
        variant: &Variant,
        selection: &ComponentSelection,
    ) -> GameLabResult<Bindings> {
        for (name, value) in &selection.parameters {
            let spec = variant
                .find_param(name)
                .ok_or_else(|| GameLabError::UnknownParameter {
                    component: component.id.clone(),
                    parameter: name.clone(),
                })?;
            if value.kind() != spec.kind {
                return Err(GameLabError::ParameterType {
                    component: component.id.clone(),
                    parameter: name.clone(),
                    expected: spec.kind,
                    found: value.kind(),
                });
            }
        }

        for slot in selection.assets.keys() {
            if variant.find_asset(slot).is_none() {
                return Err(GameLabError::UnknownAsset {
                    component: component.id.clone(),
                    slot: slot.clone(),
                });
            }
        }

        let mut bindings = Bindings::new();
        for spec in &variant.params {
            let value = selection.parameters.get(&spec.name).unwrap_or(&spec.default);
            bindings.set(&spec.name, literal::render(value)?);
        }
        for slot in &variant.assets {
            let path = selection.assets.get(&slot.name).unwrap_or(&slot.default);
            bindings.set(&slot.name, literal::string(path));
        }
        Ok(bindings)
    }
}

/// Writes a generated document to disk.
pub fn write_document(path: &Path, document: &str) -> GameLabResult<()> {
    std::fs::write(path, document)?;
    debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, ParamSpec};

    fn counter_registry() -> Registry {
        let template = "    def __init__(self):\n        self.count = ${count}\n        self.label = ${label}\n        self.on = ${on}\n";
        let component = Component::new("counter", "Counter", Category::Ui, "CounterSystem")
            .variant(
                'A',
                Variant::new("Plain", "plain counter", template)
                    .param(ParamSpec::number("count", 10.0, "start"))
                    .param(ParamSpec::text("label", "hits", "label"))
                    .param(ParamSpec::boolean("on", false, "enabled")),
            )
            .variant('B', Variant::new("Empty", "nothing", "    pass\n"));
        Registry::from_components(vec![component]).unwrap()
    }

    #[test]
    fn test_numeric_default_and_override() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();
        let scene = SceneConfig::for_testing();

        let defaulted = assembler
            .assemble(&scene, &[ComponentSelection::new("counter", 'A')])
            .unwrap();
        assert!(defaulted.contains("self.count = 10\n"));

        let overridden = assembler
            .assemble(
                &scene,
                &[ComponentSelection::new("counter", 'A').with_parameter("count", 25)],
            )
            .unwrap();
        assert!(overridden.contains("self.count = 25\n"));
        assert!(!overridden.contains("self.count = 10\n"));
    }

    #[test]
    fn test_text_and_boolean_literals() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();
        let selection = ComponentSelection::new("counter", 'A')
            .with_parameter("label", "say \"ouch\"")
            .with_parameter("on", true);
        let source = assembler
            .assemble(&SceneConfig::for_testing(), &[selection])
            .unwrap();
        assert!(source.contains("self.label = \"say \\\"ouch\\\"\"\n"));
        assert!(source.contains("self.on = True\n"));
    }

    #[test]
    fn test_unknown_component_is_reported() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();
        let err = assembler
            .assemble(
                &SceneConfig::for_testing(),
                &[
                    ComponentSelection::new("counter", 'A'),
                    ComponentSelection::new("teleport", 'A'),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, GameLabError::ComponentNotFound(id) if id == "teleport"));
    }

    #[test]
    fn test_unknown_variant_is_reported() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();
        let err = assembler
            .assemble(&SceneConfig::for_testing(), &[ComponentSelection::new("counter", 'C')])
            .unwrap_err();
        assert!(matches!(err, GameLabError::VariantNotFound { variant: 'C', .. }));
    }

    #[test]
    fn test_override_validation() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();
        let scene = SceneConfig::for_testing();

        let undeclared = ComponentSelection::new("counter", 'A').with_parameter("speed", 3);
        assert!(matches!(
            assembler.assemble(&scene, &[undeclared]),
            Err(GameLabError::UnknownParameter { .. })
        ));

        let wrong_kind = ComponentSelection::new("counter", 'A').with_parameter("count", "ten");
        assert!(matches!(
            assembler.assemble(&scene, &[wrong_kind]),
            Err(GameLabError::ParameterType {
                expected: crate::ParamKind::Number,
                found: crate::ParamKind::Text,
                ..
            })
        ));

        let bad_asset = ComponentSelection::new("counter", 'A').with_asset("music", "song.ogg");
        assert!(matches!(
            assembler.assemble(&scene, &[bad_asset]),
            Err(GameLabError::UnknownAsset { .. })
        ));
    }

    #[test]
    fn test_undeclared_template_token_fails_loudly() {
        let component = Component::new("leaky", "Leaky", Category::World, "LeakySystem")
            .variant('A', Variant::new("Leaky", "", "        self.x = ${missing}\n"))
            .variant('B', Variant::new("Fine", "", "    pass\n"));
        let registry = Registry::from_components(vec![component]).unwrap();
        let assembler = Assembler::new(&registry).unwrap();
        let err = assembler
            .assemble(&SceneConfig::for_testing(), &[ComponentSelection::new("leaky", 'A')])
            .unwrap_err();
        assert!(matches!(err, GameLabError::UnresolvedPlaceholder(name) if name == "missing"));
    }

    #[test]
    fn test_invalid_scene_rejected() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();

        let mut scene = SceneConfig::for_testing();
        scene.width = 0;
        assert!(matches!(assembler.assemble(&scene, &[]), Err(GameLabError::InvalidScene(_))));

        let mut scene = SceneConfig::for_testing();
        scene.background_color = "navy".to_string();
        assert!(matches!(assembler.assemble(&scene, &[]), Err(GameLabError::InvalidColor(_))));
    }

    #[test]
    fn test_scene_name_cannot_inject_placeholders() {
        let registry = counter_registry();
        let assembler = Assembler::new(&registry).unwrap();
        let mut scene = SceneConfig::for_testing();
        scene.name = "${boom}".to_string();
        let source = assembler.assemble(&scene, &[]).unwrap();
        assert!(source.contains("set_caption(\"\\x24{boom}\")"));
    }

    #[test]
    fn test_selection_json_shape() {
        let json = r#"{"componentId": "counter", "variant": "A", "parameters": {"count": 25}}"#;
        let selection: ComponentSelection = serde_json::from_str(json).unwrap();
        assert_eq!(selection.component_id, "counter");
        assert_eq!(selection.variant, 'A');
        assert_eq!(selection.parameters["count"], ParamValue::Number(25.0));
        assert!(selection.assets.is_empty());
    }
}
