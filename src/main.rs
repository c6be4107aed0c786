use std::{f64::consts::FRAC_PI_3, path::PathBuf};

use clap::{Parser, ValueEnum};

use lucent::scenes;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScenePreset {
    /// Patterned spheres over a checkered floor
    Patterns,
    /// Glass and mirror spheres
    Glass,
}

#[derive(Parser, Debug)]
#[command(version, about = "Renders a demo scene to a plain-text PPM image")]
struct Args {
    /// Scene to render
    #[arg(value_enum)]
    scene: ScenePreset,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Horizontal field of view in radians
    #[arg(long)]
    field_of_view: Option<f64>,

    /// Reflection and refraction bounce limit
    #[arg(short, long)]
    max_recursive_depth: Option<usize>,

    /// Where to write the image; defaults to the scene name
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// Render without a progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let field_of_view = args.field_of_view.unwrap_or(FRAC_PI_3);

    let (mut world, camera, default_name) = match args.scene {
        ScenePreset::Patterns => {
            let (world, camera) = scenes::patterned_room(args.width, args.height, field_of_view);
            (world, camera, "patterns")
        }
        ScenePreset::Glass => {
            let (world, camera) = scenes::glass_spheres(args.width, args.height, field_of_view);
            (world, camera, "glass")
        }
    };

    if let Some(depth) = args.max_recursive_depth {
        world.set_max_recursive_depth(depth);
    }

    let canvas = if args.no_progress {
        camera.render(&world)
    } else {
        camera.render_with_progress(&world)
    };

    let output_path = args
        .output_path
        .unwrap_or_else(|| PathBuf::from(format!("{default_name}.ppm")));

    canvas
        .save_to_file(&output_path)
        .map_err(|err| format!("could not write {}: {err}", output_path.display()))?;

    println!("saved render to {}", output_path.display());
    Ok(())
}
