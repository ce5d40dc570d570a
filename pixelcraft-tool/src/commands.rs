use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Context, Result};
use pixelcraft_core::{
    BlitOptions, Color, Rect, Surface, load_bdf, load_image, render_bdf_text, render_text,
    save_image,
};

use crate::cli::Command;

/// Executes one subcommand.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Info { input } => info(&input),
        Command::Convert { input, output } => {
            let image = load(&input)?;
            save(&image, &output)
        },
        Command::Quantize { input, output, colors } => {
            let image = load(&input)?;
            let reduced = image
                .quantize(colors)
                .wrap_err_with(|| format!("Failed to quantize {} to {colors} colors", input.display()))?;
            save(&reduced, &output)
        },
        Command::Resize { input, output, width, height } => {
            let image = load(&input)?;
            let resized = image
                .resize(width, height)
                .wrap_err_with(|| format!("Failed to resize to {width}x{height}"))?;
            save(&resized, &output)
        },
        Command::Rotate { input, output, angle } => {
            let image = load(&input)?;
            let rotated = image
                .rotate(angle)
                .wrap_err_with(|| format!("Failed to rotate by {angle} degrees"))?;
            save(&rotated, &output)
        },
        Command::Text { output, text, bdf, fg, bg, scale } => {
            let text = unescape(&text);
            let rendered = match bdf {
                Some(path) => {
                    let font = load_bdf(&path)
                        .wrap_err_with(|| format!("Failed to load font {}", path.display()))?;
                    render_bdf_text(&font, fg, bg, &text)?
                },
                None => render_text(fg, bg, &text)?,
            };
            let rendered = if scale > 1 {
                let (w, h) = rendered.dimensions();
                rendered.resize(w.saturating_mul(scale), h.saturating_mul(scale))?
            } else {
                rendered
            };
            save(&rendered, &output)
        },
        Command::Demo { output, width, height } => {
            let canvas = demo(width, height)?;
            save(&canvas, &output)
        },
    }
}

fn load(path: &Path) -> Result<Surface> {
    load_image(path).wrap_err_with(|| format!("Failed to load {}", path.display()))
}

fn save(surface: &Surface, path: &Path) -> Result<()> {
    save_image(surface, path).wrap_err_with(|| format!("Failed to save {}", path.display()))?;
    let (w, h) = surface.dimensions();
    println!("Wrote {} ({w}x{h})", path.display());
    Ok(())
}

fn info(path: &Path) -> Result<()> {
    let image = load(path)?;
    let (w, h) = image.dimensions();
    let pixels = image.as_raw();

    let rgb: HashSet<u32> = pixels.iter().map(|&p| p & 0x00FF_FFFF).collect();
    let opaque = pixels.iter().filter(|&&p| Color(p).a() == 255).count();
    let clear = pixels.iter().filter(|&&p| Color(p).a() == 0).count();

    println!("File: {}", path.display());
    println!("Size: {w}x{h} ({} pixels)", pixels.len());
    println!("Distinct colors: {}", rgb.len());
    println!(
        "Alpha: {opaque} opaque, {clear} transparent, {} translucent",
        pixels.len() - opaque - clear
    );
    Ok(())
}

/// Turns the two-character sequences `\n`, `\f` and `\b` typed on a shell
/// into newline and the color escapes.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('f') => out.push(pixelcraft_core::text::FOREGROUND_ESCAPE),
            Some('b') => out.push(pixelcraft_core::text::BACKGROUND_ESCAPE),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }
    out
}

/// Draws every primitive onto a `width x height` canvas.
fn demo(width: u32, height: u32) -> Result<Surface> {
    let mut canvas = Surface::new(width, height)?;
    let (w, h) = (width as i32, height as i32);

    canvas.passthru(|x, y, _| {
        Color::from_i32_channels(x * 255 / w, y * 255 / h, 96, 255)
    });
    for x in (0..w).step_by(16) {
        canvas.vline(x, 0, h - 1, Color::rgba(255, 255, 255, 40));
    }
    for y in (0..h).step_by(16) {
        canvas.hline(y, 0, w - 1, Color::rgba(255, 255, 255, 40));
    }

    canvas.rect(8, 8, w / 3, h / 3, Color::rgba(255, 0, 0, 160), true);
    canvas.rect(8, 8, w / 3, h / 3, Color::WHITE, false);
    canvas.circle(w / 2, h / 2, h / 4, Color::rgba(0, 0, 255, 128), true);
    canvas.circle(w / 2, h / 2, h / 4, Color::YELLOW, false);
    canvas.tri(w - 10, 10, w - 60, h / 2, w - 10, h / 2, Color::rgba(0, 255, 0, 180), true);
    canvas.tri(w - 10, 10, w - 60, h / 2, w - 10, h / 2, Color::BLACK, false);
    canvas.line(0, h - 1, w - 1, 0, Color::MAGENTA);

    // text stamped through a lime chroma key, rotated copy beside it
    let label = render_text(Color::WHITE, Color::LIME, "pixelcraft\n\x0c(255,200,0)demo")?;
    canvas.paste_with(&label, w / 2 - 40, h - 28, BlitOptions::lime_key());
    let tilted = label.rotate(20.0)?;
    canvas.clip_paste_with(
        &tilted,
        8,
        h / 2,
        Rect::new(0, 0, tilted.width(), tilted.height()),
        BlitOptions::lime_key(),
    );

    // a flat disc inside a closed ring, flood filled from its centre
    let (rx, ry, r) = (w / 5, h - h / 4, h / 8);
    canvas.circle(rx, ry, r, Color::BLACK, true);
    canvas.circle(rx, ry, r, Color::CYAN, false);
    canvas.flood_fill(rx, ry, Color::TEAL);

    tracing::debug!(width, height, "demo canvas drawn");
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_shell_sequences() {
        assert_eq!(unescape(r"a\nb"), "a\nb");
        assert_eq!(unescape(r"\f(1,2,3)x"), "\x0c(1,2,3)x");
        assert_eq!(unescape(r"\b(1,2,3)"), "\x08(1,2,3)");
        assert_eq!(unescape(r"c:\path\"), r"c:\path\");
    }

    #[test]
    fn demo_canvas() {
        let canvas = demo(128, 96).unwrap();
        assert_eq!(canvas.dimensions(), (128, 96));
        assert_eq!(canvas.pixel(128 / 5, 96 - 96 / 4), Color::TEAL);
        assert!(canvas.as_raw().iter().all(|&p| Color(p).a() != 0));
    }
}
