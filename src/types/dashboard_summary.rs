use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTile {
    pub title: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub tiles: Vec<DashboardTile>,
    pub highlights: Vec<DashboardTile>,
}

fn tile(title: &str, count: u64) -> DashboardTile {
    DashboardTile {
        title: title.to_string(),
        count,
    }
}

// No data source backs the admin dashboard yet; these are its placeholder figures.
impl Default for DashboardSummary {
    fn default() -> Self {
        DashboardSummary {
            tiles: vec![
                tile("Employers", 10),
                tile("Candidates", 150),
                tile("Jobs Applied", 50),
                tile("Jobs Posted", 30),
                tile("Incomplete Profiles", 25),
            ],
            highlights: vec![tile("Applied Jobs", 100), tile("Total Jobs", 200)],
        }
    }
}
