use std::time::Instant;

/// Stopwatch for per-group timing in the debug log.
pub struct Timer{
    last: Instant,
}

impl Timer{
    pub fn new() -> Self{
        Self{ last: Instant::now() }
    }

    pub fn elapsed(&self) -> u128{
        self.last.elapsed().as_millis()
    }

    /// Milliseconds since the previous lap (or creation), then restarts.
    pub fn lap(&mut self) -> u128{
        let ms = self.elapsed();
        self.last = Instant::now();
        ms
    }
}
