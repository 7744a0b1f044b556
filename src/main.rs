//! # GameLab Command Line
//!
//! Lists components, assembles pygame scripts, and previews them.

use clap::{Parser, Subcommand};
use gamelab::{
    apply_assets, apply_parameters, parse_assignment, parse_selection, run_preview,
    write_document, Assembler, Blueprint, Category, GameLabError, GameLabResult,
    RecordingSurface, Registry, SceneConfig, SimulationConfig, Simulator,
};
use log::{error, info};
use std::path::PathBuf;

/// Command line arguments for GameLab.
#[derive(Parser, Debug)]
#[command(name = "gamelab")]
#[command(about = "Component-based pygame code generator with a canvas preview")]
#[command(version)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available components
    Components {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assemble a pygame script
    Generate {
        /// Blueprint JSON with a scene and selections
        #[arg(long)]
        blueprint: Option<PathBuf>,

        /// Window caption
        #[arg(long)]
        name: Option<String>,

        /// Window width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Window height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Target frame rate
        #[arg(long)]
        fps: Option<u32>,

        /// Background color as #rrggbb
        #[arg(long)]
        background: Option<String>,

        /// Component selection, e.g. jump:B
        #[arg(long = "select", value_name = "ID:VARIANT")]
        selections: Vec<String>,

        /// Parameter override, e.g. jump.jump_strength=15
        #[arg(long = "set", value_name = "ID.NAME=VALUE")]
        parameters: Vec<String>,

        /// Asset binding, e.g. shooting.shoot_sound=pew.wav
        #[arg(long = "asset", value_name = "ID.SLOT=PATH")]
        assets: Vec<String>,

        /// Output file; prints to stdout when absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run one simulation tick over a source file
    Simulate {
        file: PathBuf,

        /// Print the frame as JSON
        #[arg(long)]
        json: bool,

        /// Print the draw calls of the frame
        #[arg(long)]
        trace: bool,
    },

    /// Open the preview window for a source file
    Preview { file: PathBuf },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = initialize_logging(&args.log_level) {
        eprintln!("{}", e);
    }

    info!("Starting GameLab v{}", gamelab::VERSION);

    if let Err(e) = run(args.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> GameLabResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            return Err(GameLabError::InvalidArgument(format!(
                "unknown log level '{}'",
                other
            )))
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init()
        .map_err(|e| GameLabError::InvalidArgument(e.to_string()))
}

fn run(command: Command) -> GameLabResult<()> {
    match command {
        Command::Components { json } => list_components(json),
        Command::Generate {
            blueprint,
            name,
            width,
            height,
            fps,
            background,
            selections,
            parameters,
            assets,
            output,
        } => {
            let mut blueprint = match blueprint {
                Some(path) => Blueprint::load(&path)?,
                None => Blueprint::default(),
            };

            let scene: &mut SceneConfig = &mut blueprint.scene;
            if let Some(name) = name {
                scene.name = name;
            }
            if let Some(width) = width {
                scene.width = width;
            }
            if let Some(height) = height {
                scene.height = height;
            }
            if let Some(fps) = fps {
                scene.fps = fps;
            }
            if let Some(background) = background {
                scene.background_color = background;
            }

            for spec in &selections {
                blueprint.selections.push(parse_selection(spec)?);
            }
            let parameters = parameters
                .iter()
                .map(|s| parse_assignment(s))
                .collect::<GameLabResult<Vec<_>>>()?;
            let assets = assets
                .iter()
                .map(|s| parse_assignment(s))
                .collect::<GameLabResult<Vec<_>>>()?;
            let registry = Registry::builtin()?;
            apply_parameters(&registry, &mut blueprint.selections, &parameters)?;
            apply_assets(&mut blueprint.selections, &assets)?;

            let assembler = Assembler::new(&registry)?;
            let document = assembler.assemble_blueprint(&blueprint)?;

            match output {
                Some(path) => {
                    write_document(&path, &document)?;
                    info!(
                        "Wrote {} system(s) to {}",
                        blueprint.selections.len(),
                        path.display()
                    );
                }
                None => print!("{}", document),
            }
            Ok(())
        }
        Command::Simulate { file, json, trace } => {
            let source = std::fs::read_to_string(&file)?;
            let config = SimulationConfig::default();
            let simulator = Simulator::new(config.clone())?;
            let frame = simulator.simulate(&source);

            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                println!("frame rate: {}", frame.frame_rate);
                for object in &frame.objects {
                    println!(
                        "{:<6} at ({:.1}, {:.1}) size {:.1} color {}",
                        object.kind(),
                        object.x,
                        object.y,
                        object.size(),
                        object.color
                    );
                }
            }

            if trace {
                let mut surface = RecordingSurface::new(config.canvas_width, config.canvas_height);
                gamelab::draw_frame(&mut surface, &frame, &config);
                for call in &surface.calls {
                    println!("{:?}", call);
                }
            }
            Ok(())
        }
        Command::Preview { file } => {
            macroquad::Window::from_config(gamelab::window_conf(), async move {
                if let Err(e) = run_preview(file).await {
                    error!("Preview failed: {}", e);
                }
            });
            Ok(())
        }
    }
}

fn list_components(json: bool) -> GameLabResult<()> {
    let registry = Registry::builtin()?;

    if json {
        println!("{}", serde_json::to_string_pretty(registry.components())?);
        return Ok(());
    }

    for category in Category::ALL {
        println!("{} {} ({})", category.icon(), category.label(), category.accent());
        for component in registry.by_category(category) {
            println!("  {} - {}", component.id, component.name);
            for (key, variant) in &component.variants {
                println!("    {}: {} - {}", key, variant.name, variant.description);
                for spec in &variant.params {
                    println!(
                        "       {} ({}) = {:?}  {}",
                        spec.name, spec.kind, spec.default, spec.description
                    );
                }
                for slot in &variant.assets {
                    println!("       [{}] asset  {}", slot.name, slot.description);
                }
            }
        }
    }
    Ok(())
}
