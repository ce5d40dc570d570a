use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{Report, eyre::eyre};
use pixelcraft_core::Color;

#[derive(Parser, Debug)]
#[command(
    name = "pixelcraft",
    version,
    about = "Software 2D rendering toolkit",
    long_about = "Inspects, converts, quantizes, resizes and rotates BMP/PNG images, and renders \
                  text with the built-in 8x8 font or a BDF font. The output format follows the \
                  output file extension."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print dimensions and color statistics of an image
    Info {
        /// Image to inspect
        input: PathBuf,
    },

    /// Re-encode an image, e.g. BMP to PNG
    Convert {
        /// Source image
        input: PathBuf,
        /// Destination image
        output: PathBuf,
    },

    /// Reduce an image to at most N colors with octree quantization
    Quantize {
        /// Source image
        input: PathBuf,
        /// Destination image
        output: PathBuf,
        /// Maximum number of colors
        #[arg(short = 'n', long, default_value = "16", value_name = "N")]
        colors: usize,
    },

    /// Nearest-neighbour resize
    Resize {
        /// Source image
        input: PathBuf,
        /// Destination image
        output: PathBuf,
        /// Target width in pixels
        #[arg(short = 'W', long, value_name = "PX")]
        width: u32,
        /// Target height in pixels
        #[arg(short = 'H', long, value_name = "PX")]
        height: u32,
    },

    /// Rotate clockwise, growing the canvas to fit
    Rotate {
        /// Source image
        input: PathBuf,
        /// Destination image
        output: PathBuf,
        /// Angle in degrees
        #[arg(short = 'a', long, value_name = "DEGREES", allow_negative_numbers = true)]
        angle: f32,
    },

    /// Render text into a new image sized to fit it
    Text {
        /// Destination image
        output: PathBuf,
        /// Text to render; `\n` starts a new line
        #[arg(short = 't', long)]
        text: String,
        /// BDF font to use instead of the built-in 8x8 font
        #[arg(long, value_name = "PATH")]
        bdf: Option<PathBuf>,
        /// Foreground color as r,g,b[,a]
        #[arg(long, default_value = "255,255,255", value_parser = parse_color)]
        fg: Color,
        /// Background color as r,g,b[,a]; alpha 0 leaves it transparent
        #[arg(long, default_value = "0,0,0,0", value_parser = parse_color)]
        bg: Color,
        /// Scale the rendered text by this integer factor
        #[arg(long, default_value = "1", value_name = "FACTOR")]
        scale: u32,
    },

    /// Draw a showcase of the drawing primitives
    Demo {
        /// Destination image
        output: PathBuf,
        /// Canvas width in pixels
        #[arg(short = 'W', long, default_value = "320", value_name = "PX")]
        width: u32,
        /// Canvas height in pixels
        #[arg(short = 'H', long, default_value = "200", value_name = "PX")]
        height: u32,
    },
}

impl Cli {
    /// Checks argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), Report> {
        match &self.command {
            Command::Quantize { colors: 0, .. } => Err(eyre!("Color count must be at least 1")),
            Command::Resize { width, height, .. } if *width == 0 || *height == 0 => {
                Err(eyre!("Target size must be positive, got {width}x{height}"))
            },
            Command::Rotate { angle, .. } if !angle.is_finite() => {
                Err(eyre!("Angle must be a finite number of degrees"))
            },
            Command::Text { scale: 0, .. } => Err(eyre!("Scale must be at least 1")),
            Command::Text { text, .. } if text.is_empty() => Err(eyre!("Text must not be empty")),
            Command::Demo { width, height, .. } if *width < 64 || *height < 64 => {
                Err(eyre!("Demo canvas must be at least 64x64, got {width}x{height}"))
            },
            _ => Ok(()),
        }
    }
}

/// Parses `r,g,b` or `r,g,b,a` with decimal components in 0..=255.
fn parse_color(s: &str) -> Result<Color, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(format!("Invalid color '{s}'. Expected r,g,b or r,g,b,a"));
    }

    let mut channels = [0u8, 0, 0, 255];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        *channel = part
            .parse::<u8>()
            .map_err(|_| format!("Invalid color component '{part}' in '{s}'. Use 0-255"))?;
    }

    let [r, g, b, a] = channels;
    Ok(Color::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("255,0,0"), Ok(Color::rgba(255, 0, 0, 255)));
        assert_eq!(parse_color("1, 2, 3, 4"), Ok(Color::rgba(1, 2, 3, 4)));
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("1,2,3,4,5").is_err());
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["pixelcraft", "rotate", "a.bmp", "b.png", "-a", "-30"]).unwrap();
        assert!(matches!(cli.command, Command::Rotate { angle, .. } if angle == -30.0));
        assert!(cli.validate().is_ok());

        let cli = Cli::try_parse_from([
            "pixelcraft", "text", "out.bmp", "--text", "hi", "--fg", "0,255,0",
        ])
        .unwrap();
        match cli.command {
            Command::Text { fg, bg, scale, bdf, .. } => {
                assert_eq!(fg, Color::rgb(0, 255, 0));
                assert_eq!(bg, Color::TRANSPARENT);
                assert_eq!(scale, 1);
                assert!(bdf.is_none());
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_invalid_arguments() {
        let cli = Cli::try_parse_from(["pixelcraft", "quantize", "a.bmp", "b.bmp", "-n", "0"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["pixelcraft", "resize", "a.bmp", "b.bmp", "-W", "0", "-H", "4"])
            .unwrap();
        assert!(cli.validate().is_err());

        assert!(Cli::try_parse_from(["pixelcraft", "text", "out.bmp", "--text", "x", "--fg", "1,2"]).is_err());
    }
}
