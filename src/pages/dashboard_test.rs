use super::*;
use crate::net::types::{StatusCounts, YearlyStats};

#[test]
fn stat_cards_follow_display_order() {
    let stats = DashboardStats {
        counts: StatusCounts { pending: 4, in_progress: 2, paused: 1 },
        recent_activity: Vec::new(),
        yearly_stats: YearlyStats::default(),
    };
    assert_eq!(stat_cards(&stats), [("Pendientes", 4), ("En progreso", 2), ("Pausadas", 1)]);
}

#[test]
fn share_rounds_to_whole_percent() {
    assert_eq!(share(1, 3), 33);
    assert_eq!(share(2, 3), 67);
    assert_eq!(share(5, 5), 100);
}

#[test]
fn share_of_empty_year_is_zero() {
    assert_eq!(share(0, 0), 0);
}
