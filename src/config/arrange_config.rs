// Arrangement configuration built from the command line

use crate::errors::{ArrangeError, ArrangeResult};
use crate::grid::Grid;
use crate::pattern::TitlePattern;

#[derive(Clone, Debug)]
pub struct ArrangeConfig {
    /// Width / height of one instance's content
    pub instance_ratio: f64,
    pub pattern: TitlePattern,
    /// Fixed grid; `None` lets the solver pick one
    pub tiling: Option<Grid>,
}

impl ArrangeConfig {
    pub fn new(instance_ratio: f64, pattern: TitlePattern) -> Self {
        Self {
            instance_ratio,
            pattern,
            tiling: None,
        }
    }

    pub fn with_tiling(mut self, grid: Grid) -> Self {
        self.tiling = Some(grid);
        self
    }

    /// Parses `<program> <instanceRatio> <titlePattern>`. Extra arguments
    /// are ignored.
    pub fn from_args<I>(args: I) -> ArrangeResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() <= 2 {
            let program = args
                .first()
                .cloned()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
            return Err(ArrangeError::Usage { program });
        }

        let instance_ratio = parse_ratio(&args[1])?;
        let pattern = TitlePattern::new(&args[2])?;
        Ok(Self::new(instance_ratio, pattern))
    }
}

/// Decimal ratio with `.` as separator regardless of locale.
pub fn parse_ratio(raw: &str) -> ArrangeResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(ratio) if ratio.is_finite() && ratio > 0.0 => Ok(ratio),
        _ => Err(ArrangeError::InvalidRatio(raw.to_string())),
    }
}
