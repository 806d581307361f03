//! The fixed demonstration run by the binary: five sequences, each printed
//! after its transformation.

use crate::render::{OutputFormat, Render, print_vec};
use crate::transform::{ForEachInPlace, for_each, for_each_auto, for_each_fixed};
use crate::Result;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// Which in-place transform drives a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, clap::ValueEnum)]
pub enum Variant {
    #[display("explicit")]
    Explicit,
    #[display("inferred")]
    Inferred,
    /// Only meaningful for `i32` steps; other element types use `Explicit`.
    #[display("fixed")]
    Fixed,
    #[display("method")]
    Method,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Demo {
    format: OutputFormat,
    variant: Option<Variant>,
}

impl Demo {
    pub fn new(format: OutputFormat, variant: Option<Variant>) -> Self {
        Demo { format, variant }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!(format = %self.format, variant = ?self.variant, "running demo");

        let mut ints: Vec<i32> = vec![0, 1, 2, 3, 4, 5];
        self.print(out, "integers", &ints)?;

        let square = |x: &i32| x * x;
        self.apply_ints(&mut ints, self.variant.unwrap_or(Variant::Inferred), &square)?;
        self.print(out, "integers squared", &ints)?;

        let a = 10;
        let scale = |x: &i32| -> i32 { a * x };
        self.apply_ints(&mut ints, self.variant.unwrap_or(Variant::Explicit), &scale)?;
        self.print(out, "integers scaled", &ints)?;

        let mut doubles: Vec<f64> = vec![1.1, 2.2, 3.3, 4.4, 5.5];
        self.apply(&mut doubles, |x| x * x);
        self.print(out, "doubles squared", &doubles)?;

        let mut asteroids: Vec<String> = vec!["Pallas".into(), "Ceres".into(), "Vesta".into()];
        self.apply(&mut asteroids, |s| s.to_ascii_uppercase());
        self.print(out, "strings uppercased", &asteroids)?;

        info!("demo finished");
        Ok(())
    }

    fn apply_ints(
        &self,
        ints: &mut [i32],
        variant: Variant,
        f: &dyn Fn(&i32) -> i32,
    ) -> Result<()> {
        debug!(%variant, len = ints.len(), "transforming integers");
        match variant {
            Variant::Explicit => for_each(ints, f),
            Variant::Inferred => for_each_auto(ints, f),
            Variant::Fixed => for_each_fixed(ints, f)?,
            Variant::Method => ints.for_each_in_place(f),
        }
        Ok(())
    }

    fn apply<T>(&self, seq: &mut [T], f: impl Fn(&T) -> T) {
        let variant = match self.variant {
            Some(Variant::Inferred) => Variant::Inferred,
            Some(Variant::Method) => Variant::Method,
            _ => Variant::Explicit,
        };
        debug!(%variant, len = seq.len(), "transforming {}", std::any::type_name::<T>());
        match variant {
            Variant::Inferred => for_each_auto(seq, f),
            Variant::Method => seq.for_each_in_place(f),
            _ => for_each(seq, f),
        }
    }

    fn print<W, T>(&self, out: &mut W, step: &str, items: &[T]) -> Result<()>
    where
        W: Write,
        T: Render + Serialize,
    {
        debug!(step, "printing");
        print_vec(out, items, self.format)
    }
}
