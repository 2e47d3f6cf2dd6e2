/// Render — generate one artwork and write the SVG to stdout or a file.
///
/// Usage: render [--preset <name>] [--presets <path>] [--style <name>]
///               [--palette <#a,#b,...>] [--emotion <label>] [--intensity <1-10>]
///               [--energy <level>] [--seed <n>] [--variants <n>]
///               [--thumbnail] [--metadata] [--out <path>]
///
/// Explicit flags override the values taken from a preset.
/// Set RUST_LOG=debug to see composition details on stderr.

use mood_canvas::core::color::Rgb;
use mood_canvas::core::generator::{ArtError, ArtGenerator, GeneratedArt};
use mood_canvas::core::preset::PresetBook;
use mood_canvas::schema::directive::{ArtDirective, Palette};
use mood_canvas::schema::mood::{EnergyLevel, Intensity, MoodParameters};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

const DEFAULT_PRESETS: &str = "presets/moods.ron";

#[derive(Default)]
struct Args {
    preset: Option<String>,
    presets_path: Option<String>,
    style: Option<String>,
    palette: Option<String>,
    emotion: Option<String>,
    intensity: Option<String>,
    energy: Option<String>,
    seed: Option<u64>,
    variants: usize,
    thumbnail: bool,
    metadata: bool,
    out: Option<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

/// `Ok(None)` means help was requested.
fn parse_args(raw: &[String]) -> Result<Option<Args>, String> {
    let mut args = Args {
        variants: 1,
        ..Args::default()
    };

    let mut i = 0;
    while i < raw.len() {
        let has_value = i + 1 < raw.len();
        match raw[i].as_str() {
            "--help" | "-h" => return Ok(None),
            "--preset" if has_value => {
                i += 1;
                args.preset = Some(raw[i].clone());
            }
            "--presets" if has_value => {
                i += 1;
                args.presets_path = Some(raw[i].clone());
            }
            "--style" if has_value => {
                i += 1;
                args.style = Some(raw[i].clone());
            }
            "--palette" if has_value => {
                i += 1;
                args.palette = Some(raw[i].clone());
            }
            "--emotion" if has_value => {
                i += 1;
                args.emotion = Some(raw[i].clone());
            }
            "--intensity" if has_value => {
                i += 1;
                args.intensity = Some(raw[i].clone());
            }
            "--energy" if has_value => {
                i += 1;
                args.energy = Some(raw[i].clone());
            }
            "--seed" if has_value => {
                i += 1;
                let seed = raw[i]
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", raw[i]))?;
                args.seed = Some(seed);
            }
            "--variants" if has_value => {
                i += 1;
                args.variants = match raw[i].parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(format!("Invalid variant count: {}", raw[i])),
                };
            }
            "--thumbnail" => args.thumbnail = true,
            "--metadata" => args.metadata = true,
            "--out" if has_value => {
                i += 1;
                args.out = Some(raw[i].clone());
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some(args))
}

fn run(args: &Args) -> Result<(), ArtError> {
    let (mut directive, mut mood) = match args.preset {
        Some(ref name) => {
            let path = args.presets_path.as_deref().unwrap_or(DEFAULT_PRESETS);
            let book = PresetBook::load_from_ron(Path::new(path))?;
            let preset = book.get(name)?;
            (preset.directive.clone(), preset.mood.clone())
        }
        None => (
            ArtDirective::new("abstract", Palette::default()),
            MoodParameters::new("neutral", 5, "moderate")?,
        ),
    };

    if let Some(ref style) = args.style {
        directive.style = style.clone();
    }
    if let Some(ref palette) = args.palette {
        directive.color_palette = Palette::new(
            palette
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty()),
        );
    }
    if let Some(ref emotion) = args.emotion {
        mood.primary_emotion = emotion.clone();
    }
    if let Some(ref intensity) = args.intensity {
        mood.emotion_intensity = intensity.parse::<Intensity>()?;
    }
    if let Some(ref energy) = args.energy {
        mood.energy_level = energy.parse::<EnergyLevel>()?;
    }

    report_palette(&directive.color_palette);

    let mut builder = ArtGenerator::builder();
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let generator = builder.build();
    let artworks = generator.generate_variants(&directive, &mood, args.variants);

    for (i, art) in artworks.iter().enumerate() {
        let output = render_output(art, args)?;
        match args.out {
            Some(ref out) => {
                let path = variant_path(out, i, artworks.len());
                std::fs::write(&path, output)?;
                eprintln!("Wrote {}", path);
            }
            None => println!("{}", output),
        }
    }

    Ok(())
}

fn render_output(art: &GeneratedArt, args: &Args) -> Result<String, ArtError> {
    if args.metadata {
        return art.to_json();
    }
    if args.thumbnail {
        return Ok(art.gallery_thumbnail());
    }
    Ok(art.markup.clone())
}

/// `out.svg` → `out-1.svg`, `out-2.svg`, ... when rendering several variants.
fn variant_path(out: &str, index: usize, total: usize) -> String {
    if total <= 1 {
        return out.to_string();
    }
    let path = Path::new(out);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("art");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("svg");
    let file = format!("{}-{}.{}", stem, index + 1, ext);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file).display().to_string(),
        _ => file,
    }
}

fn report_palette(palette: &Palette) {
    if palette.is_empty() {
        eprintln!("Palette is empty; using a white background.");
        return;
    }
    for color in palette.colors() {
        match Rgb::from_hex(color) {
            Some(rgb) => tracing::debug!(%color, luminance = rgb.luminance(), "palette entry"),
            None => eprintln!("WARNING: '{}' is not a hex color; passing it through as-is", color),
        }
    }
}

fn print_usage() {
    println!("Usage: render [options]");
    println!();
    println!("  --preset <name>       start from a named preset");
    println!("  --presets <path>      preset file (default: {})", DEFAULT_PRESETS);
    println!("  --style <name>        expressionist | minimalist | surreal | abstract");
    println!("  --palette <colors>    comma-separated colors; the first is the background");
    println!("  --emotion <label>     primary emotion label");
    println!("  --intensity <1-10>    emotion intensity");
    println!("  --energy <level>      very-low | low | moderate | high | very-high");
    println!("  --seed <n>            seed for reproducible output");
    println!("  --variants <n>        number of artworks to render");
    println!("  --thumbnail           emit a 200x150 gallery thumbnail");
    println!("  --metadata            emit JSON with markup and metadata");
    println!("  --out <path>          write to a file instead of stdout");
}
