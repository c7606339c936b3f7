use chrono::NaiveDate;

pub const RUBLE_SIGN: char = '₽';

/// ru-RU short date, e.g. `15.09.2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Whole roubles with comma thousands separators, e.g. `₽45,230`.
pub fn format_rubles(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", RUBLE_SIGN, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        assert_eq!(format_date(date), "05.09.2024");
    }

    #[test]
    fn rubles_are_grouped_by_thousands() {
        assert_eq!(format_rubles(45_230), "₽45,230");
        assert_eq!(format_rubles(0), "₽0");
        assert_eq!(format_rubles(999), "₽999");
        assert_eq!(format_rubles(1_234_567), "₽1,234,567");
    }
}
