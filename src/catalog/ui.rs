//! # UI Components
//!
//! Health and score overlays drawn on top of the scene.

use super::{Category, Component, ParamSpec, Variant};

const HEALTH_BAR: &str = r#"    def __init__(self):
        self.max_health = ${max_health}
        self.bar_width = ${bar_width}
        self.show_label = ${show_label}
        self.font = pygame.font.Font(None, 24)

    def update(self, player, keys, dt):
        player.max_health = self.max_health
        player.health = max(0, min(player.health, player.max_health))

    def draw(self, surface, player):
        ratio = player.health / player.max_health if player.max_health else 0
        pygame.draw.rect(surface, (60, 60, 60), (10, 10, self.bar_width, 16))
        pygame.draw.rect(surface, (220, 50, 50), (10, 10, int(self.bar_width * ratio), 16))
        if self.show_label:
            label = self.font.render(f"{player.health}/{player.max_health}", True, (255, 255, 255))
            surface.blit(label, (self.bar_width + 20, 8))
"#;

const HEALTH_HEARTS: &str = r#"    def __init__(self):
        self.hearts = ${hearts}
        self.heart_size = ${heart_size}
        self.heart_color = pygame.Color(${heart_color})

    def update(self, player, keys, dt):
        player.max_health = self.hearts * 10
        player.health = max(0, min(player.health, player.max_health))

    def draw(self, surface, player):
        filled = math.ceil(player.health / 10)
        for i in range(int(self.hearts)):
            x = 20 + i * (self.heart_size * 2 + 8)
            color = self.heart_color if i < filled else (80, 80, 80)
            pygame.draw.circle(surface, color, (x, 20), self.heart_size)
"#;

const SCORE_COUNTER: &str = r#"    def __init__(self):
        self.points_per_second = ${points_per_second}
        self.text_color = pygame.Color(${text_color})
        self.font = pygame.font.Font(None, ${font_size})
        self.elapsed = 0.0

    def update(self, player, keys, dt):
        self.elapsed += dt
        player.score = int(self.elapsed * self.points_per_second)

    def draw(self, surface, player):
        text = self.font.render(f"Score: {player.score}", True, self.text_color)
        surface.blit(text, (WIDTH - text.get_width() - 10, 10))
"#;

const SCORE_COUNTDOWN: &str = r#"    def __init__(self):
        self.remaining = ${time_limit}
        self.prefix = ${prefix}
        self.text_color = pygame.Color(${text_color})
        self.font = pygame.font.Font(None, 32)

    def update(self, player, keys, dt):
        self.remaining = max(0, self.remaining - dt)

    def draw(self, surface, player):
        text = self.font.render(f"{self.prefix}: {int(self.remaining)}", True, self.text_color)
        surface.blit(text, (WIDTH // 2 - text.get_width() // 2, 10))
"#;

pub fn components() -> Vec<Component> {
    vec![
        Component::new("health_bar", "Health", Category::Ui, "HealthSystem")
            .variant(
                'A',
                Variant::new("Health bar", "A red bar in the top-left corner.", HEALTH_BAR)
                    .param(ParamSpec::number("max_health", 100.0, "Maximum health"))
                    .param(ParamSpec::number("bar_width", 200.0, "Bar width in pixels"))
                    .param(ParamSpec::boolean("show_label", true, "Show the numeric value")),
            )
            .variant(
                'B',
                Variant::new("Hearts", "A row of hearts, ten health each.", HEALTH_HEARTS)
                    .param(ParamSpec::number("hearts", 3.0, "Number of hearts"))
                    .param(ParamSpec::number("heart_size", 10.0, "Heart radius in pixels"))
                    .param(ParamSpec::text("heart_color", "red", "Heart color name")),
            ),
        Component::new("score", "Score", Category::Ui, "ScoreSystem")
            .variant(
                'A',
                Variant::new("Score counter", "Score grows with time survived.", SCORE_COUNTER)
                    .param(ParamSpec::number("points_per_second", 10.0, "Points earned per second"))
                    .param(ParamSpec::text("text_color", "white", "Text color name"))
                    .param(ParamSpec::number("font_size", 32.0, "Font size in points")),
            )
            .variant(
                'B',
                Variant::new("Countdown", "A timer counting down to zero.", SCORE_COUNTDOWN)
                    .param(ParamSpec::number("time_limit", 60.0, "Seconds on the clock"))
                    .param(ParamSpec::text("prefix", "Time", "Label shown before the seconds"))
                    .param(ParamSpec::text("text_color", "white", "Text color name")),
            ),
    ]
}
