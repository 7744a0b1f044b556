//! # Document Skeleton
//!
//! Fixed sections of a generated pygame script. Everything here is static
//! apart from the scene values in the header and the system list in the loop.

use super::literal;
use super::SceneConfig;
use crate::{Color, Component, Variant};
use std::fmt::Write;

const SOUND_HELPERS: &str = r#"def load_sound(path):
    if not path:
        return None
    try:
        return pygame.mixer.Sound(path)
    except (pygame.error, FileNotFoundError):
        return None


def play_sound(sound):
    if sound is not None:
        sound.play()
"#;

const SYSTEM_BASE: &str = r#"class System:
    def handle_event(self, event, player):
        pass

    def update(self, player, keys, dt):
        pass

    def draw(self, surface, player):
        pass
"#;

const PLAYER: &str = r#"class Player:
    def __init__(self):
        self.width = 40
        self.height = 50
        self.x = WIDTH // 2 - self.width // 2
        self.y = HEIGHT - self.height
        self.vx = 0.0
        self.vy = 0.0
        self.on_ground = True
        self.facing = 1
        self.health = 100
        self.max_health = 100
        self.score = 0
        self.color = (70, 130, 230)

    @property
    def rect(self):
        return pygame.Rect(int(self.x), int(self.y), self.width, self.height)

    def draw(self, surface):
        pygame.draw.rect(surface, self.color, self.rect)
"#;

const LOOP_BODY: &str = r#"running = True
while running:
    dt = clock.tick(FPS) / 1000.0

    for event in pygame.event.get():
        if event.type == pygame.QUIT:
            running = False
        for system in systems:
            system.handle_event(event, player)

    keys = pygame.key.get_pressed()
    for system in systems:
        system.update(player, keys, dt)

    screen.fill(BACKGROUND)
    player.draw(screen)
    for system in systems:
        system.draw(screen, player)
    pygame.display.flip()
"#;

const FOOTER: &str = r#"pygame.quit()
sys.exit()
"#;

/// Imports, display setup, and shared helpers.
pub fn header(scene: &SceneConfig, background: Color) -> String {
    let mut out = String::new();
    let title = scene.name.replace(['\n', '\r'], " ").replace("${", "$ {");
    let _ = writeln!(out, "# {} - generated by GameLab", title);
    out.push_str("import math\nimport sys\n\nimport pygame\n\npygame.init()\n\n");
    let _ = writeln!(out, "WIDTH, HEIGHT = {}, {}", scene.width, scene.height);
    let _ = writeln!(out, "FPS = {}", scene.fps);
    let _ = writeln!(out, "BACKGROUND = {}", background.to_tuple_literal());
    out.push('\n');
    out.push_str("screen = pygame.display.set_mode((WIDTH, HEIGHT))\n");
    let _ = writeln!(out, "pygame.display.set_caption({})", literal::string(&scene.name));
    out.push_str("clock = pygame.time.Clock()\n\n\n");
    out.push_str(SOUND_HELPERS);
    out
}

/// Base class every generated system derives from.
pub fn system_base() -> &'static str {
    SYSTEM_BASE
}

/// One system class wrapping a substituted variant body.
pub fn class_definition(component: &Component, key: char, variant: &Variant, body: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}: {} ({})", component.name, variant.name, key);
    let _ = writeln!(out, "class {}(System):", component.class_name);
    if body.trim().is_empty() {
        out.push_str("    pass\n");
        return out;
    }
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// The main player entity.
pub fn player() -> &'static str {
    PLAYER
}

/// Instantiation block plus the frame loop, in selection order.
pub fn game_loop(class_names: &[&str]) -> String {
    let mut out = String::new();
    out.push_str("player = Player()\n");
    out.push_str("systems = []\n");
    for name in class_names {
        let _ = writeln!(out, "systems.append({}())", name);
    }
    out.push('\n');
    out.push_str(LOOP_BODY);
    out
}

pub fn footer() -> &'static str {
    FOOTER
}
