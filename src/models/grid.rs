use serde::Serialize;

/// Per-day, per-segment event counts. Indexed `[day][segment]`, both in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    cells: Vec<Vec<u32>>,
}

impl Grid {
    pub fn new(days: usize, segments: usize) -> Self {
        Self {
            cells: vec![vec![0; segments]; days],
        }
    }

    pub fn increment(&mut self, day: usize, segment: usize) {
        if let Some(c) = self.cells.get_mut(day).and_then(|d| d.get_mut(segment)) {
            *c += 1;
        }
    }

    pub fn get(&self, day: usize, segment: usize) -> u32 {
        self.cells
            .get(day)
            .and_then(|d| d.get(segment))
            .copied()
            .unwrap_or(0)
    }

    pub fn days(&self) -> usize {
        self.cells.len()
    }

    pub fn segments(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

/// A rendered row: one entity (or the combined group) and its grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub name: String,
    pub entity_ids: Vec<String>,
    pub grid: Grid,
}
