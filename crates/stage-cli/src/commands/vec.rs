//! Vector subcommands.

use anyhow::Result;
use clap::Subcommand;
use tracing::debug;

use stage_math::Vec3;

#[derive(Subcommand)]
pub enum VecCommand {
    /// Print the length and squared length of a vector
    Length {
        /// Vector as x,y,z
        vector: Vec3,
    },

    /// Print the unit-length form of a vector
    #[command(visible_alias = "norm")]
    Normalize {
        /// Vector as x,y,z
        vector: Vec3,
    },

    /// Dot product of two vectors
    Dot {
        /// First vector as x,y,z
        a: Vec3,
        /// Second vector as x,y,z
        b: Vec3,
    },

    /// Cross product of two vectors
    Cross {
        /// First vector as x,y,z
        a: Vec3,
        /// Second vector as x,y,z
        b: Vec3,
    },

    /// Distance between two points
    #[command(visible_alias = "dist")]
    Distance {
        /// First point as x,y,z
        a: Vec3,
        /// Second point as x,y,z
        b: Vec3,
    },

    /// Interpolate between two vectors
    Lerp {
        /// Start vector as x,y,z
        a: Vec3,
        /// End vector as x,y,z
        b: Vec3,
        /// Interpolation parameter
        #[arg(short, long, default_value = "0.5")]
        t: f32,
    },
}

pub fn run(cmd: VecCommand) -> Result<()> {
    match cmd {
        VecCommand::Length { vector } => {
            debug!("input {vector}");
            println!("length:  {:.6}", vector.length());
            println!("squared: {:.6}", vector.length_squared());
        }
        VecCommand::Normalize { vector } => {
            println!("{}", vector.normalized());
        }
        VecCommand::Dot { a, b } => {
            println!("{:.6}", a.dot(b));
        }
        VecCommand::Cross { a, b } => {
            println!("{}", a.cross(b));
        }
        VecCommand::Distance { a, b } => {
            println!("{:.6}", a.distance(b));
        }
        VecCommand::Lerp { a, b, t } => {
            debug!("lerp {a} -> {b} at t={t}");
            println!("{}", a.lerp(b, t));
        }
    }
    Ok(())
}
