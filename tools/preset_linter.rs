/// Preset Linter — checks mood preset files before they ship.
///
/// Usage: preset_linter <preset_file_or_dir>...
///
/// Directories are searched recursively for `.ron` files. Exits non-zero
/// when a preset file fails to load or a preset cannot render its palette.

use mood_canvas::core::preset::PresetBook;
use mood_canvas::schema::directive::ArtStyle;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Problems fail the run; notes are advisory.
#[derive(Debug, Default)]
struct Findings {
    problems: Vec<String>,
    notes: Vec<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let targets: Vec<String> = std::env::args().skip(1).collect();
    if targets.is_empty() || targets.iter().any(|t| t == "--help" || t == "-h") {
        println!("Usage: preset_linter <preset_file_or_dir>...");
        return ExitCode::SUCCESS;
    }

    let mut findings = Findings::default();
    let mut book = PresetBook::default();
    for target in &targets {
        for file in preset_files(Path::new(target), &mut findings) {
            match PresetBook::load_from_ron(&file) {
                Ok(loaded) => {
                    debug!(file = %file.display(), presets = loaded.len(), "loaded preset file");
                    book.merge(loaded);
                }
                Err(e) => findings.problems.push(format!("{}: {}", file.display(), e)),
            }
        }
    }

    lint_presets(&book, &mut findings);

    println!("{} presets checked", book.len());
    for note in &findings.notes {
        println!("  note: {}", note);
    }
    for problem in &findings.problems {
        println!("  problem: {}", problem);
    }
    if findings.problems.is_empty() && findings.notes.is_empty() {
        println!("  no issues found");
    }

    if findings.problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Preset files under `target`, in a stable order.
fn preset_files(target: &Path, findings: &mut Findings) -> Vec<PathBuf> {
    if target.is_file() {
        return vec![target.to_path_buf()];
    }
    if !target.is_dir() {
        findings
            .problems
            .push(format!("{}: no such file or directory", target.display()));
        return Vec::new();
    }
    let mut files = Vec::new();
    collect_ron_files(target, &mut files, findings);
    files.sort();
    files
}

fn collect_ron_files(dir: &Path, files: &mut Vec<PathBuf>, findings: &mut Findings) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            findings.problems.push(format!("{}: {}", dir.display(), e));
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_ron_files(&path, files, findings);
        } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            files.push(path);
        }
    }
}

fn lint_presets(book: &PresetBook, findings: &mut Findings) {
    for name in book.names() {
        let Ok(preset) = book.get(name) else {
            continue;
        };
        let directive = &preset.directive;

        if !ArtStyle::is_known(&directive.style) {
            findings.notes.push(format!(
                "{}: style '{}' is not one of {:?}; it will render as abstract",
                name,
                directive.style,
                ArtStyle::ALL.map(|s| s.name())
            ));
        }

        let palette = &directive.color_palette;
        match palette.len() {
            0 => findings
                .problems
                .push(format!("{}: palette is empty; the artwork would be all white", name)),
            1 => findings.notes.push(format!(
                "{}: palette has one color, so every shape blends into the background",
                name
            )),
            _ => {}
        }

        for color in palette.malformed() {
            findings
                .notes
                .push(format!("{}: '{}' is not a hex color", name, color));
        }
    }

    for style in ArtStyle::ALL {
        let covered = book.iter().any(|(_, preset)| {
            ArtStyle::is_known(&preset.directive.style) && preset.directive.art_style() == style
        });
        if !covered {
            findings
                .notes
                .push(format!("no preset uses the {} style", style));
        }
    }
}
