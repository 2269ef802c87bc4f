use crate::CliError;
use crate::cli::{CardArgs, OutputFormat};
use badgesmith::{BadgeRenderer, BadgeSpec};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

fn prompt(out: &mut impl Write, input: &mut impl BufRead, question: &str) -> std::io::Result<String> {
    write!(out, "{question} ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Replaces characters that are unsafe in a single file-name component.
fn file_component(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn card_path(dir: &Path, name: &str, award: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!(
        "{}_{}.{}",
        file_component(name),
        file_component(award),
        format.extension()
    ))
}

/// Prompts for a name and an award on `input` and writes the badge into `args.dir`.
pub fn run(
    args: &CardArgs,
    renderer: &BadgeRenderer,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<PathBuf, CliError> {
    writeln!(out, "---Badge Generator App---")?;
    let name = prompt(out, input, "Enter the Name:")?;
    let award = prompt(out, input, "Enter an Award:")?;

    let spec = BadgeSpec::new(name.as_str(), award.as_str())
        .with_left_color(args.colors.left_color.as_str())
        .with_right_color(args.colors.color.as_str());

    let format = if args.svg {
        OutputFormat::Svg
    } else {
        OutputFormat::Png
    };
    // Render before touching the filesystem so a missing rasterizer leaves no trace.
    let bytes = match format {
        OutputFormat::Svg => renderer.render_spec_svg(&spec).into_bytes(),
        OutputFormat::Png => renderer.render_spec_png(&spec)?,
    };

    std::fs::create_dir_all(&args.dir)?;
    let path = card_path(&args.dir, &name, &award, format);
    std::fs::write(&path, bytes)?;
    tracing::debug!(path = %path.display(), "wrote card badge");

    writeln!(out, "\nBadge Created!")?;
    writeln!(out, "Saved as {}", path.display())?;
    Ok(path)
}
