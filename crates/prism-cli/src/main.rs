// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prism CLI entrypoint.
//!
//! Parses math values in their canonical text form, runs one operation and
//! prints the result in the same form, so output can be fed back in.
//!
//! # Usage
//! ```text
//! prism invert "{(2,0,0,0) (0,2,0,0) (0,0,2,0) (0,0,0,1)}"
//! prism transform "{...}" "(1, 2, 3)" --mode normal
//! prism slerp "(0,0,0,1)" "(0,0,0.7071,0.7071)" 0.5
//! prism frustum --fov 90 --near 1 --far 100 "(0, 0, 50)"
//! prism backend
//! ```
//!
//! Values are `f64`. Logging goes to stderr and follows `RUST_LOG`.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

use std::fmt::Display;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prism_geom::{Containment, Frustum};
use prism_math::{active_backend, deg_to_rad, Matrix4x4, Quaternion, Vector3};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prism math toolkit CLI")]
struct Args {
    /// Digits after the decimal point; shortest round-trip form when omitted
    #[arg(long, global = true)]
    precision: Option<usize>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Invert a 4x4 matrix (singular input yields the identity)
    Invert {
        /// Matrix as `{(r0) (r1) (r2) (r3)}`
        matrix: String,
        /// Fail on a singular matrix instead of returning the identity
        #[arg(long)]
        strict: bool,
    },
    /// Transform a 3D vector by a 4x4 matrix
    Transform {
        /// Matrix as `{(r0) (r1) (r2) (r3)}`
        matrix: String,
        /// Vector as `(x, y, z)`
        vector: String,
        /// How the vector's implicit `w` is treated
        #[arg(long, value_enum, default_value_t = Mode::Point)]
        mode: Mode,
    },
    /// Spherically interpolate between two quaternions
    Slerp {
        /// Start rotation as `(x, y, z, w)`
        from: String,
        /// End rotation as `(x, y, z, w)`
        to: String,
        /// Interpolation parameter
        t: f64,
    },
    /// Test a point or sphere against a perspective frustum
    Frustum {
        /// Vertical field of view in degrees
        #[arg(long, default_value_t = 90.0)]
        fov: f64,
        /// Width / height
        #[arg(long, default_value_t = 1.0)]
        aspect: f64,
        /// Near plane distance
        #[arg(long, default_value_t = 1.0)]
        near: f64,
        /// Far plane distance
        #[arg(long, default_value_t = 1000.0)]
        far: f64,
        /// Sphere radius; the point is tested alone when omitted
        #[arg(long)]
        radius: Option<f64>,
        /// Point or sphere centre as `(x, y, z)`
        point: String,
    },
    /// Print the SIMD backend each scalar type is bound to
    Backend,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// `w = 1`, no divide
    Point,
    /// `w = 1`, divide by the resulting `w`
    Coord,
    /// `w = 0`, translation ignored
    Normal,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?args.cmd, "dispatch");
    let out = Output {
        precision: args.precision,
    };
    match args.cmd {
        Command::Invert { matrix, strict } => {
            let m: Matrix4x4<f64> = matrix.parse().context("parse matrix")?;
            let inverse = if strict {
                m.try_inverse().context("matrix is singular")?
            } else {
                m.inversed()
            };
            out.print(&inverse);
        }
        Command::Transform {
            matrix,
            vector,
            mode,
        } => {
            let m: Matrix4x4<f64> = matrix.parse().context("parse matrix")?;
            let v: Vector3<f64> = vector.parse().context("parse vector")?;
            let result = match mode {
                Mode::Point => m.transform(v),
                Mode::Coord => m.transform_coord(v),
                Mode::Normal => m.transform_normal(v),
            };
            out.print(&result);
        }
        Command::Slerp { from, to, t } => {
            let a: Quaternion<f64> = from.parse().context("parse start rotation")?;
            let b: Quaternion<f64> = to.parse().context("parse end rotation")?;
            out.print(&a.slerp(&b, t));
        }
        Command::Frustum {
            fov,
            aspect,
            near,
            far,
            radius,
            point,
        } => {
            if fov <= 0.0 || near == far || aspect == 0.0 {
                bail!("degenerate projection: fov={fov} aspect={aspect} near={near} far={far}");
            }
            let center: Vector3<f64> = point.parse().context("parse point")?;
            let projection =
                Matrix4x4::perspective_field_of_view(deg_to_rad(fov), aspect, near, far);
            let frustum = Frustum::from_view_projection(&projection);
            let verdict = match radius {
                None if frustum.contains_point(center) => "inside",
                None => "outside",
                Some(r) => match frustum.contains_sphere(center, r) {
                    Containment::Inside => "inside",
                    Containment::Intersecting => "intersecting",
                    Containment::Outside => "outside",
                },
            };
            println!("{verdict}");
        }
        Command::Backend => {
            println!("f32: {}", active_backend::<f32>());
            println!("f64: {}", active_backend::<f64>());
        }
    }
    Ok(())
}

struct Output {
    precision: Option<usize>,
}

impl Output {
    fn print(&self, value: &impl Display) {
        match self.precision {
            Some(p) => println!("{value:.p$}"),
            None => println!("{value}"),
        }
    }
}
