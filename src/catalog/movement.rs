//! # Movement Components
//!
//! Walking and jumping for the player entity.

use super::{AssetSlot, Category, Component, ParamSpec, Variant};

const WALK_CLASSIC: &str = r#"    def __init__(self):
        self.speed = ${speed}

    def update(self, player, keys, dt):
        if keys[pygame.K_LEFT] or keys[pygame.K_a]:
            player.x -= self.speed
            player.facing = -1
        if keys[pygame.K_RIGHT] or keys[pygame.K_d]:
            player.x += self.speed
            player.facing = 1
"#;

const WALK_SMOOTH: &str = r#"    def __init__(self):
        self.acceleration = ${acceleration}
        self.friction = ${friction}
        self.max_speed = ${max_speed}

    def update(self, player, keys, dt):
        direction = 0
        if keys[pygame.K_LEFT] or keys[pygame.K_a]:
            direction -= 1
        if keys[pygame.K_RIGHT] or keys[pygame.K_d]:
            direction += 1
        if direction:
            player.vx += direction * self.acceleration
            player.facing = direction
        else:
            player.vx *= self.friction
        player.vx = max(-self.max_speed, min(self.max_speed, player.vx))
        player.x += player.vx
"#;

const JUMP_SINGLE: &str = r#"    def __init__(self):
        self.jump_strength = ${jump_strength}
        self.gravity = ${gravity}

    def handle_event(self, event, player):
        if event.type == pygame.KEYDOWN and event.key in (pygame.K_SPACE, pygame.K_UP, pygame.K_w):
            if player.on_ground:
                player.vy = -self.jump_strength
                player.on_ground = False

    def update(self, player, keys, dt):
        if not player.on_ground:
            player.vy += self.gravity
            player.y += player.vy
        if player.y >= HEIGHT - player.height:
            player.y = HEIGHT - player.height
            player.vy = 0
            player.on_ground = True
"#;

const JUMP_DOUBLE: &str = r#"    def __init__(self):
        self.jump_strength = ${jump_strength}
        self.gravity = ${gravity}
        self.max_jumps = ${max_jumps}
        self.jumps_left = self.max_jumps
        self.sound = load_sound(${jump_sound})

    def handle_event(self, event, player):
        if event.type == pygame.KEYDOWN and event.key in (pygame.K_SPACE, pygame.K_UP, pygame.K_w):
            if self.jumps_left > 0:
                player.vy = -self.jump_strength
                player.on_ground = False
                self.jumps_left -= 1
                play_sound(self.sound)

    def update(self, player, keys, dt):
        if not player.on_ground:
            player.vy += self.gravity
            player.y += player.vy
        if player.y >= HEIGHT - player.height:
            player.y = HEIGHT - player.height
            player.vy = 0
            player.on_ground = True
            self.jumps_left = self.max_jumps
"#;

pub fn components() -> Vec<Component> {
    vec![
        Component::new("walk", "Walk", Category::Movement, "WalkSystem")
            .variant(
                'A',
                Variant::new(
                    "Classic walk",
                    "Moves at a constant speed while an arrow key is held.",
                    WALK_CLASSIC,
                )
                .param(ParamSpec::number("speed", 5.0, "Pixels moved per frame")),
            )
            .variant(
                'B',
                Variant::new(
                    "Smooth walk",
                    "Accelerates up to a top speed and slides to a stop.",
                    WALK_SMOOTH,
                )
                .param(ParamSpec::number("acceleration", 0.8, "Speed gained per frame"))
                .param(ParamSpec::number("friction", 0.85, "Fraction of speed kept per frame"))
                .param(ParamSpec::number("max_speed", 7.0, "Top speed in pixels per frame")),
            ),
        Component::new("jump", "Jump", Category::Movement, "JumpSystem")
            .variant(
                'A',
                Variant::new("Single jump", "One jump from the ground.", JUMP_SINGLE)
                    .param(ParamSpec::number("jump_strength", 12.0, "Initial upward speed"))
                    .param(ParamSpec::number("gravity", 0.6, "Downward pull while airborne")),
            )
            .variant(
                'B',
                Variant::new(
                    "Double jump",
                    "Jump again in mid-air, with an optional sound.",
                    JUMP_DOUBLE,
                )
                .param(ParamSpec::number("jump_strength", 11.0, "Initial upward speed"))
                .param(ParamSpec::number("gravity", 0.6, "Downward pull while airborne"))
                .param(ParamSpec::number("max_jumps", 2.0, "Jumps allowed before landing"))
                .asset(AssetSlot::new("jump_sound", "", "Sound played on each jump")),
            ),
    ]
}
