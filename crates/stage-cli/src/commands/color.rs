//! Color subcommands.

use anyhow::Result;
use clap::Subcommand;
use tracing::debug;

use stage_color::ColorRgba;

#[derive(Subcommand)]
pub enum ColorCommand {
    /// Convert a color to grayscale (BT.601)
    Gray {
        /// Color as r,g,b[,a]
        color: ColorRgba,
    },

    /// Interpolate between two colors
    Lerp {
        /// Start color as r,g,b[,a]
        a: ColorRgba,
        /// End color as r,g,b[,a]
        b: ColorRgba,
        /// Interpolation parameter, clamped to [0,1]
        #[arg(short, long, default_value = "0.5")]
        t: f32,
    },

    /// Convert a color to hue/saturation/value
    #[command(name = "to-hsv")]
    ToHsv {
        /// Color as r,g,b[,a]
        color: ColorRgba,
    },

    /// Build a color from hue/saturation/value
    #[command(name = "from-hsv")]
    FromHsv {
        /// Hue in degrees
        hue: f32,
        /// Saturation in [0,1]
        saturation: f32,
        /// Value in [0,1]
        value: f32,
    },
}

pub fn run(cmd: ColorCommand) -> Result<()> {
    match cmd {
        ColorCommand::Gray { color } => {
            debug!("input {color} alpha={:.2}", color.a());
            println!("{}", color.to_grayscale());
        }
        ColorCommand::Lerp { a, b, t } => {
            println!("{}", ColorRgba::lerp(a, b, t));
        }
        ColorCommand::ToHsv { color } => {
            let hsv = color.to_hsv();
            println!("h: {:.2}  s: {:.4}  v: {:.4}", hsv.x, hsv.y, hsv.z);
        }
        ColorCommand::FromHsv {
            hue,
            saturation,
            value,
        } => {
            println!("{}", ColorRgba::from_hsv(hue, saturation, value));
        }
    }
    Ok(())
}
