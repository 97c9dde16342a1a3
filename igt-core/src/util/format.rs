use time::{macros::format_description, Date, OffsetDateTime};

/// `10 Mar 2025`
pub fn date(d: Date) -> String {
    d.format(format_description!("[day] [month repr:short] [year]"))
        .unwrap_or_default()
}

/// `10 Mar - 16 Mar 2025`
pub fn date_range(start: Date, end: Date) -> String {
    let start = start
        .format(format_description!("[day] [month repr:short]"))
        .unwrap_or_default();
    format!("{start} - {}", date(end))
}

/// `05 Jan 2025 14:30`
pub fn timestamp(t: OffsetDateTime) -> String {
    t.format(format_description!(
        "[day] [month repr:short] [year] [hour]:[minute]"
    ))
    .unwrap_or_default()
}

/// English name of the month, e.g. `March`.
pub fn month_name(d: Date) -> String {
    d.month().to_string()
}

/// Amount in rupees with Indian digit grouping, e.g. `₹1,25,000`.
pub fn rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{last_three}", groups.join(","))
}
