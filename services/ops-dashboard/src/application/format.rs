//! 指标展示格式

/// 千位分隔：`1234567` → `"1,234,567"`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 百分比，1 位小数
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// 金额类数值，2 位小数
pub fn format_decimal2(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-45_000), "-45,000");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_percent_and_decimal() {
        assert_eq!(format_percent(95.0), "95.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_decimal2(2.0), "2.00");
        assert_eq!(format_decimal2(1.5), "1.50");
    }
}
