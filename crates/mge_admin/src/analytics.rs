use std::fmt;

use mge_common::models::lenient;
use serde::{Deserialize, Serialize};

/// Reporting window for the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    #[default]
    Week,
    Month,
    Year,
}

impl StatsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
            StatsPeriod::Year => "year",
        }
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyRevenue {
    pub date: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub revenue: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PopularUnit {
    pub unit_id: u64,
    pub name: String,
    #[serde(default)]
    pub bookings: u64,
}

/// Aggregates shown on the admin dashboard. Missing sections default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_revenue: i64,
    #[serde(default)]
    pub active_units: u64,
    #[serde(default)]
    pub pending_bookings: u64,
    #[serde(default)]
    pub revenue_by_day: Vec<DailyRevenue>,
    #[serde(default)]
    pub popular_units: Vec<PopularUnit>,
}
