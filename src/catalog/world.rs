//! # World Components
//!
//! Gravity and screen-edge rules.

use super::{Category, Component, ParamSpec, Variant};

const GRAVITY_CONSTANT: &str = r#"    def __init__(self):
        self.gravity = ${gravity}
        self.ground = HEIGHT - ${ground_offset}

    def update(self, player, keys, dt):
        player.vy += self.gravity
        player.y += player.vy
        if player.y + player.height >= self.ground:
            player.y = self.ground - player.height
            player.vy = 0
            player.on_ground = True
        else:
            player.on_ground = False
"#;

const GRAVITY_FLOATY: &str = r#"    def __init__(self):
        self.gravity = ${gravity}
        self.terminal_velocity = ${terminal_velocity}
        self.ground = HEIGHT - ${ground_offset}

    def update(self, player, keys, dt):
        player.vy = min(player.vy + self.gravity, self.terminal_velocity)
        player.y += player.vy
        if player.y + player.height >= self.ground:
            player.y = self.ground - player.height
            player.vy = 0
            player.on_ground = True
        else:
            player.on_ground = False
"#;

const BOUNDS_SOLID: &str = r#"    def __init__(self):
        self.bounce = ${bounce}

    def update(self, player, keys, dt):
        if player.x < 0 or player.x + player.width > WIDTH:
            player.x = max(0, min(player.x, WIDTH - player.width))
            player.vx = -player.vx if self.bounce else 0
        if player.y < 0:
            player.y = 0
            player.vy = 0
"#;

const BOUNDS_WRAP: &str = r#"    def __init__(self):
        self.margin = ${margin}

    def update(self, player, keys, dt):
        if player.x > WIDTH + self.margin:
            player.x = -player.width - self.margin
        elif player.x + player.width < -self.margin:
            player.x = WIDTH + self.margin
"#;

pub fn components() -> Vec<Component> {
    vec![
        Component::new("gravity", "Gravity", Category::World, "GravitySystem")
            .variant(
                'A',
                Variant::new("Constant gravity", "A steady pull towards the ground.", GRAVITY_CONSTANT)
                    .param(ParamSpec::number("gravity", 0.5, "Downward acceleration per frame"))
                    .param(ParamSpec::number("ground_offset", 0.0, "Ground height above the bottom edge")),
            )
            .variant(
                'B',
                Variant::new("Floaty gravity", "Weak gravity capped at a terminal speed.", GRAVITY_FLOATY)
                    .param(ParamSpec::number("gravity", 0.25, "Downward acceleration per frame"))
                    .param(ParamSpec::number("terminal_velocity", 6.0, "Maximum falling speed"))
                    .param(ParamSpec::number("ground_offset", 0.0, "Ground height above the bottom edge")),
            ),
        Component::new("boundaries", "Boundaries", Category::World, "BoundarySystem")
            .variant(
                'A',
                Variant::new("Solid walls", "Screen edges stop the player.", BOUNDS_SOLID)
                    .param(ParamSpec::boolean("bounce", false, "Bounce off the walls")),
            )
            .variant(
                'B',
                Variant::new("Wrap around", "Leaving one side re-enters from the other.", BOUNDS_WRAP)
                    .param(ParamSpec::number("margin", 0.0, "Pixels beyond the edge before wrapping")),
            ),
    ]
}
