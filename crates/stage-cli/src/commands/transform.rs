//! Transform composition command.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use stage_math::Vec3;
use stage_scene::Transform;

/// Applies mutations to a fresh transform and prints the result.
///
/// Repeated flags accumulate. Mutations are applied grouped by kind:
/// translations first, then rotations, then scales. Within a kind the
/// order on the command line is preserved (translation and rotation are
/// commutative anyway; scale composition is multiplicative).
#[derive(Args)]
pub struct TransformArgs {
    /// Translate by a delta, x,y,z (repeatable)
    #[arg(long)]
    translate: Vec<Vec3>,

    /// Rotate by Euler degrees, x,y,z (repeatable)
    #[arg(long)]
    rotate: Vec<Vec3>,

    /// Multiply the scale by per-axis factors, x,y,z (repeatable)
    #[arg(long = "scale-by")]
    scale_by: Vec<Vec3>,

    /// Start position instead of the origin, x,y,z
    #[arg(long)]
    at: Option<Vec3>,
}

pub fn run(args: TransformArgs) -> Result<()> {
    let mut t = match args.at {
        Some(position) => Transform::from_position(position),
        None => Transform::new(),
    };

    for delta in args.translate {
        debug!("translate {delta}");
        t.translate(delta);
    }
    for delta in args.rotate {
        debug!("rotate {delta}");
        t.rotate(delta);
    }
    for factors in args.scale_by {
        debug!("scale by {factors}");
        t.scale_by(factors);
    }

    println!("{t}");
    Ok(())
}
