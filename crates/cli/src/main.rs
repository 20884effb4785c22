#![deny(unsafe_code)]
//! CLI binary for Gallery Glow.
//!
//! Subcommands:
//! - `icon [palette] [size] [output]`: write the app icon PNG
//! - `frame`: render one screensaver frame to PNG
//! - `frames`: run a headless screensaver session, writing every Nth frame
//! - `list`: print palettes
//! - `today`: print the painting of the day
//! - `shelf`: print Top Shelf content as JSON
//! - `open <url>`: resolve a `galleryglow://` deep link

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use gallery_glow_core::icon::{
    default_icon_path, icon_draw_list, icon_palette, icon_palette_names, DEFAULT_ICON_PALETTE,
    DEFAULT_ICON_SIZE,
};
use gallery_glow_core::{
    CanvasSize, DrawList, PaletteId, RandomSource, Screensaver, ScreensaverConfig, Xorshift64,
};
use gallery_glow_gallery::{shelf_paintings, Gallery, TopShelfContent};
use gallery_glow_render::snapshot::write_png;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery-glow", about = "Gallery Glow screensaver and icon tools")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the app icon as a square PNG.
    Icon {
        /// Icon palette (aurora, magentaPurple, oceanBlue, pinkOrange).
        palette: Option<String>,

        /// Edge length in pixels.
        size: Option<u32>,

        /// Output file path. Defaults to AppIcon_<palette>.png.
        output: Option<PathBuf>,
    },
    /// Render a single screensaver frame and write it as PNG.
    Frame {
        /// Palette name, or "random".
        #[arg(short, long, default_value = "random")]
        palette: String,

        /// Seconds since the screensaver started.
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 640)]
        width: u32,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 360)]
        height: u32,

        /// PRNG seed for deterministic palette rolls.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Screensaver settings as a JSON object.
        #[arg(long, default_value = "{}")]
        config: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Run a headless screensaver session and write every Nth frame.
    Frames {
        /// Palette name, or "random".
        #[arg(short, long, default_value = "random")]
        palette: String,

        /// Session length in seconds.
        #[arg(short, long, default_value_t = 120.0)]
        seconds: f64,

        /// Frames per second. Defaults to the config's target_fps.
        #[arg(long)]
        fps: Option<usize>,

        /// Write one frame out of every N.
        #[arg(long, default_value_t = 60)]
        every: usize,

        #[arg(short = 'W', long, default_value_t = 320)]
        width: u32,

        #[arg(short = 'H', long, default_value_t = 180)]
        height: u32,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Screensaver settings as a JSON object.
        #[arg(long, default_value = "{}")]
        config: String,

        /// Directory for frame_NNNNN.png files.
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,
    },
    /// List screensaver and icon palettes.
    List,
    /// Print the painting of the day.
    Today {
        /// Day of the year (1-based). Defaults to today (UTC).
        #[arg(long)]
        day: Option<u32>,
    },
    /// Print Top Shelf content as JSON.
    Shelf {
        /// Day of the year (1-based). Defaults to today (UTC).
        #[arg(long)]
        day: Option<u32>,

        /// Use the fixed sample shelf instead of the catalog shelf.
        #[arg(long)]
        sample: bool,
    },
    /// Resolve a galleryglow://painting/<id> deep link.
    Open {
        url: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn today() -> u32 {
    u32::from(time::OffsetDateTime::now_utc().ordinal())
}

fn parse_config(json: &str) -> Result<ScreensaverConfig, CliError> {
    let params: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    let config = ScreensaverConfig::from_json(&params);
    config.validate()?;
    Ok(config)
}

fn screensaver_palette(name: &str) -> Result<PaletteId, CliError> {
    PaletteId::from_name(name).map_err(|_| {
        CliError::Input(format!(
            "unknown palette '{name}'. valid palettes: {}",
            PaletteId::list_names().join(", ")
        ))
    })
}

/// Starts a session at t = 0 and plays every re-roll up to `time`, so the
/// frame matches what a continuously running screensaver would show.
fn frame_at<R: RandomSource>(
    saver: &mut Screensaver<R>,
    time: f64,
    size: CanvasSize,
) -> DrawList {
    saver.start(0.0);
    let period = saver.config().reroll_secs;
    let mut boundary = period;
    while boundary < time {
        saver.update(boundary);
        boundary += period;
    }
    saver.frame(time, size).unwrap_or_default()
}

fn write_icon(
    palette: Option<String>,
    size: Option<u32>,
    output: Option<PathBuf>,
) -> Result<(String, u32, PathBuf), CliError> {
    let name = palette.unwrap_or_else(|| DEFAULT_ICON_PALETTE.name().to_string());
    let id = icon_palette(&name).map_err(|_| {
        CliError::Input(format!(
            "unknown palette '{name}'. valid palettes: {}",
            icon_palette_names().join(", ")
        ))
    })?;
    let size = size.unwrap_or(DEFAULT_ICON_SIZE);
    let output = output.unwrap_or_else(|| PathBuf::from(default_icon_path(&name)));

    let list = icon_draw_list(id, size)?;
    write_png(&list, size, size, &output)?;
    Ok((name, size, output))
}

fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:05}.png"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Icon {
            palette,
            size,
            output,
        } => {
            let (name, size, output) = write_icon(palette, size, output)?;
            if cli.json {
                let info = serde_json::json!({
                    "palette": name,
                    "size": size,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Generated {} ({size}x{size})", output.display());
            }
        }
        Command::Frame {
            palette,
            time,
            width,
            height,
            seed,
            config,
            output,
        } => {
            if !time.is_finite() || time < 0.0 {
                return Err(CliError::Input(format!("--time must be >= 0, got {time}")));
            }
            let id = screensaver_palette(&palette)?;
            let config = parse_config(&config)?;
            let size = CanvasSize::from_pixels(width, height)?;

            let mut saver = Screensaver::with_config(id, config, Xorshift64::new(seed));
            let list = frame_at(&mut saver, time, size);
            write_png(&list, width, height, &output)?;

            let shown: Vec<&str> = saver.history().iter().map(|p| p.name()).collect();
            if cli.json {
                let colors = saver.transition().map(|t| t.current_colors());
                let info = serde_json::json!({
                    "palette": palette,
                    "time": time,
                    "width": width,
                    "height": height,
                    "seed": seed,
                    "rolls": shown,
                    "colors": colors,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered frame at {time}s ({width}x{height}, seed {seed}, rolls {}) -> {}",
                    shown.join(" > "),
                    output.display()
                );
            }
        }
        Command::Frames {
            palette,
            seconds,
            fps,
            every,
            width,
            height,
            seed,
            config,
            out_dir,
        } => {
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(CliError::Input(format!("--seconds must be >= 0, got {seconds}")));
            }
            let id = screensaver_palette(&palette)?;
            let config = parse_config(&config)?;
            let fps = fps.unwrap_or(config.target_fps);
            if fps == 0 || every == 0 {
                return Err(CliError::Input("--fps and --every must be positive".into()));
            }
            let size = CanvasSize::from_pixels(width, height)?;
            std::fs::create_dir_all(&out_dir)?;

            let mut saver = Screensaver::with_config(id, config, Xorshift64::new(seed));
            saver.start(0.0);
            let total = (seconds * fps as f64).floor() as usize;
            let mut written = Vec::new();
            for i in 0..=total {
                let now = i as f64 / fps as f64;
                let Some(list) = saver.frame(now, size) else {
                    break;
                };
                if i % every == 0 {
                    let path = frame_path(&out_dir, i);
                    write_png(&list, width, height, &path)?;
                    written.push(path.display().to_string());
                }
            }
            saver.exit();
            info!(frames = total + 1, written = written.len(), "session finished");

            let rolls: Vec<&str> = saver.history().iter().map(|p| p.name()).collect();
            if cli.json {
                let info = serde_json::json!({
                    "frames": total + 1,
                    "fps": fps,
                    "rolls": rolls,
                    "written": written,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "simulated {} frames at {fps} fps, wrote {} to {}",
                    total + 1,
                    written.len(),
                    out_dir.display()
                );
            }
        }
        Command::List => {
            let palettes: Vec<serde_json::Value> = PaletteId::all()
                .iter()
                .map(|p| serde_json::json!({"name": p.name(), "displayName": p.display_name()}))
                .collect();
            let icons = icon_palette_names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "iconPalettes": icons,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                for p in PaletteId::all() {
                    println!("  {:<14} {}", p.name(), p.display_name());
                }
                println!("Icon palettes:");
                println!("  {}", icons.join(", "));
            }
        }
        Command::Today { day } => {
            let day = day.unwrap_or_else(today);
            let gallery = Gallery::new();
            let painting = gallery
                .painting_of_the_day(day)
                .ok_or_else(|| CliError::Input("the catalog is empty".into()))?;
            if cli.json {
                let mut info = serde_json::to_value(painting)?;
                info["day"] = serde_json::json!(day);
                info["link"] = serde_json::json!(gallery_glow_gallery::deep_link_for(
                    &painting.image_name
                ));
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{} ({})", painting.title, painting.year);
                println!("{}", painting.artist_name);
                println!();
                println!("{}", painting.description);
            }
        }
        Command::Shelf { day, sample } => {
            let day = day.unwrap_or_else(today);
            let content = if sample {
                TopShelfContent::build(shelf_paintings(), day)
            } else {
                TopShelfContent::from_catalog(&Gallery::new(), day)
            };
            println!("{}", content.to_json()?);
        }
        Command::Open { url } => {
            let gallery = Gallery::new();
            let painting = gallery
                .resolve_deep_link(&url)
                .ok_or_else(|| CliError::Input(format!("no painting for link: {url}")))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(painting)?);
            } else {
                println!("{} ({}) by {}", painting.title, painting.year, painting.artist_name);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
