/// "1234567" -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole millions with an `M` suffix, e.g. 883_612_800 -> "884M".
pub fn millions(n: u64) -> String {
    format!("{}M", (n as f64 / 1_000_000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(8766), "8,766");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(100_000), "100,000");
    }

    #[test]
    fn test_millions() {
        assert_eq!(millions(883_612_800), "884M");
        assert_eq!(millions(400_000), "0M");
        assert_eq!(millions(0), "0M");
    }
}
