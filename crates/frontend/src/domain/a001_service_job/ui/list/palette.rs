use contracts::enums::job_status::JobStatus;

/// Row background for statuses outside the enumerated set
pub const DEFAULT_ROW_COLOR: &str = "transparent";

/// Background tint of a table row for the given status text
pub fn status_row_color(status: &str) -> &'static str {
    match JobStatus::from_label(status) {
        Some(JobStatus::Pending) => "#fff9c4",
        Some(JobStatus::InProgress) => "#e3f2fd",
        Some(JobStatus::Completed) => "#e8f5e9",
        None => DEFAULT_ROW_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_statuses_have_distinct_tints() {
        let colors: Vec<&str> = JobStatus::all()
            .iter()
            .map(|s| status_row_color(s.label()))
            .collect();
        assert_eq!(colors, vec!["#fff9c4", "#e3f2fd", "#e8f5e9"]);
        assert!(colors.iter().all(|c| *c != DEFAULT_ROW_COLOR));
    }

    #[test]
    fn test_unknown_status_falls_back() {
        assert_eq!(status_row_color(""), DEFAULT_ROW_COLOR);
        assert_eq!(status_row_color("pending"), DEFAULT_ROW_COLOR);
        assert_eq!(status_row_color("Cancelled"), DEFAULT_ROW_COLOR);
    }
}
