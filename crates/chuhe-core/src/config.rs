use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    /// Put the 32 opening pieces on the board at creation.
    pub populate: bool,
    /// Stagger the opening placements for the entrance animation.
    pub animate_setup: bool,
    pub setup_interval_secs: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            populate: true,
            animate_setup: true,
            setup_interval_secs: 0.1,
        }
    }
}

impl BoardConfig {
    /// Delay before the `index`-th staged placement enters the board.
    pub fn setup_delay_ms(&self, index: usize) -> u32 {
        if !self.animate_setup
            || !self.setup_interval_secs.is_finite()
            || self.setup_interval_secs <= 0.0
        {
            return 0;
        }
        let ms = (index as f64 * self.setup_interval_secs * 1e3).round();
        if ms >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            ms as u32
        }
    }
}
