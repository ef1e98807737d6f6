use chrono::NaiveDate;

/// Presentation date format: "May 10, 2025"
pub fn format_date(d: NaiveDate) -> String {
    d.format("%b %d, %Y").to_string()
}

/// Short form used in the tasks table: "May 10"
pub fn format_date_short(d: NaiveDate) -> String {
    d.format("%b %d").to_string()
}
