/// Longitudes at which a great circle crosses a parallel of latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParallelCrossing {
    /// The parallel touches the great circle at its vertex
    Tangent { lon: f64 },
    /// The great circle crosses the parallel twice
    Pair { lon1: f64, lon2: f64 },
}

impl ParallelCrossing {
    /// The crossing longitudes in degrees, one or two of them
    pub fn longitudes(&self) -> Vec<f64> {
        match *self {
            ParallelCrossing::Tangent { lon } => vec![lon],
            ParallelCrossing::Pair { lon1, lon2 } => vec![lon1, lon2],
        }
    }
}
