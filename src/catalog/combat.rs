//! # Combat Components
//!
//! Projectiles and close-range attacks.

use super::{AssetSlot, Category, Component, ParamSpec, Variant};

const SHOOT_SINGLE: &str = r#"    def __init__(self):
        self.bullet_speed = ${bullet_speed}
        self.cooldown = ${cooldown}
        self.bullet_color = pygame.Color(${bullet_color})
        self.sound = load_sound(${shoot_sound})
        self.timer = 0
        self.bullets = []

    def update(self, player, keys, dt):
        if self.timer > 0:
            self.timer -= 1
        if keys[pygame.K_f] and self.timer == 0:
            self.bullets.append([player.rect.centerx, player.rect.centery, self.bullet_speed * player.facing])
            self.timer = self.cooldown
            play_sound(self.sound)
        for bullet in self.bullets:
            bullet[0] += bullet[2]
        self.bullets = [b for b in self.bullets if 0 <= b[0] <= WIDTH]

    def draw(self, surface, player):
        for bullet in self.bullets:
            pygame.draw.circle(surface, self.bullet_color, (int(bullet[0]), int(bullet[1])), 4)
"#;

const SHOOT_SPREAD: &str = r#"    def __init__(self):
        self.bullet_speed = ${bullet_speed}
        self.cooldown = ${cooldown}
        self.spread_count = ${spread_count}
        self.spread_angle = ${spread_angle}
        self.bullet_color = pygame.Color(${bullet_color})
        self.sound = load_sound(${shoot_sound})
        self.timer = 0
        self.bullets = []

    def update(self, player, keys, dt):
        if self.timer > 0:
            self.timer -= 1
        if keys[pygame.K_f] and self.timer == 0:
            base = 0 if player.facing > 0 else 180
            half = (self.spread_count - 1) / 2
            for i in range(int(self.spread_count)):
                angle = math.radians(base + (i - half) * self.spread_angle)
                self.bullets.append([
                    player.rect.centerx,
                    player.rect.centery,
                    math.cos(angle) * self.bullet_speed,
                    math.sin(angle) * self.bullet_speed,
                ])
            self.timer = self.cooldown
            play_sound(self.sound)
        for bullet in self.bullets:
            bullet[0] += bullet[2]
            bullet[1] += bullet[3]
        self.bullets = [b for b in self.bullets if 0 <= b[0] <= WIDTH and 0 <= b[1] <= HEIGHT]

    def draw(self, surface, player):
        for bullet in self.bullets:
            pygame.draw.circle(surface, self.bullet_color, (int(bullet[0]), int(bullet[1])), 3)
"#;

const MELEE_SLASH: &str = r#"    def __init__(self):
        self.reach = ${reach}
        self.duration = ${duration}
        self.slash_color = pygame.Color(${slash_color})
        self.timer = 0

    def handle_event(self, event, player):
        if event.type == pygame.KEYDOWN and event.key == pygame.K_j and self.timer == 0:
            self.timer = self.duration

    def update(self, player, keys, dt):
        if self.timer > 0:
            self.timer -= 1

    def draw(self, surface, player):
        if self.timer > 0:
            x = player.rect.right if player.facing > 0 else player.rect.left - self.reach
            pygame.draw.rect(surface, self.slash_color, (x, player.rect.top + 10, self.reach, 10))
"#;

const MELEE_CHARGED: &str = r#"    def __init__(self):
        self.max_charge = ${max_charge}
        self.reach = ${reach}
        self.strike_color = pygame.Color(${strike_color})
        self.charge = 0
        self.flash = 0
        self.radius = 0

    def update(self, player, keys, dt):
        if keys[pygame.K_j]:
            self.charge = min(self.charge + 1, self.max_charge)
        elif self.charge > 0:
            self.radius = int(self.reach * self.charge / self.max_charge) + 10
            self.flash = 10
            self.charge = 0
        if self.flash > 0:
            self.flash -= 1

    def draw(self, surface, player):
        if self.charge > 0:
            width = int(player.width * self.charge / self.max_charge)
            pygame.draw.rect(surface, self.strike_color, (player.rect.left, player.rect.top - 8, width, 4))
        if self.flash > 0:
            pygame.draw.circle(surface, self.strike_color, player.rect.center, self.radius, 2)
"#;

pub fn components() -> Vec<Component> {
    vec![
        Component::new("shooting", "Shooting", Category::Combat, "ShootingSystem")
            .variant(
                'A',
                Variant::new("Single shot", "Fires one bullet in the facing direction.", SHOOT_SINGLE)
                    .param(ParamSpec::number("bullet_speed", 10.0, "Bullet speed in pixels per frame"))
                    .param(ParamSpec::number("cooldown", 15.0, "Frames between shots"))
                    .param(ParamSpec::text("bullet_color", "yellow", "Bullet color name"))
                    .asset(AssetSlot::new("shoot_sound", "", "Sound played on each shot")),
            )
            .variant(
                'B',
                Variant::new("Spread shot", "Fires a fan of bullets.", SHOOT_SPREAD)
                    .param(ParamSpec::number("bullet_speed", 8.0, "Bullet speed in pixels per frame"))
                    .param(ParamSpec::number("cooldown", 25.0, "Frames between volleys"))
                    .param(ParamSpec::number("spread_count", 3.0, "Bullets per volley"))
                    .param(ParamSpec::number("spread_angle", 15.0, "Degrees between bullets"))
                    .param(ParamSpec::text("bullet_color", "orange", "Bullet color name"))
                    .asset(AssetSlot::new("shoot_sound", "", "Sound played on each volley")),
            ),
        Component::new("melee", "Melee", Category::Combat, "MeleeSystem")
            .variant(
                'A',
                Variant::new("Quick slash", "A short slash in front of the player.", MELEE_SLASH)
                    .param(ParamSpec::number("reach", 40.0, "Slash length in pixels"))
                    .param(ParamSpec::number("duration", 8.0, "Frames the slash stays visible"))
                    .param(ParamSpec::text("slash_color", "white", "Slash color name")),
            )
            .variant(
                'B',
                Variant::new(
                    "Charged strike",
                    "Hold to charge, release for a shockwave.",
                    MELEE_CHARGED,
                )
                .param(ParamSpec::number("max_charge", 60.0, "Frames to reach full charge"))
                .param(ParamSpec::number("reach", 60.0, "Shockwave radius at full charge"))
                .param(ParamSpec::text("strike_color", "orange", "Strike color name")),
            ),
    ]
}
